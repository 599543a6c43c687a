//! Torrance-Sparrow Microfacet Reflection

use super::*;

/// BRDF for glossy reflection off perfectly smooth microfacets following the
/// Torrance-Sparrow model.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MicrofacetReflection {
    /// Reflectance spectrum which gives the fraction of incident light that
    /// is scattered.
    r: Spectrum,

    /// Microfacet distribution.
    distribution: MicrofacetDistribution,

    /// Fresnel interface of the microfacets.
    fresnel: Fresnel,
}

impl MicrofacetReflection {
    /// Create a new instance of `MicrofacetReflection`.
    ///
    /// * `r`            - Reflectance spectrum.
    /// * `distribution` - Microfacet distribution.
    /// * `fresnel`      - Fresnel interface of the microfacets.
    pub fn new(r: Spectrum, distribution: MicrofacetDistribution, fresnel: Fresnel) -> Self {
        Self {
            r,
            distribution,
            fresnel,
        }
    }

    /// Returns the reflectance.
    pub fn r(&self) -> Spectrum {
        self.r
    }

    /// Returns the microfacet distribution.
    pub fn distribution(&self) -> &MicrofacetDistribution {
        &self.distribution
    }

    /// Returns the Fresnel interface.
    pub fn fresnel(&self) -> &Fresnel {
        &self.fresnel
    }

    /// Returns the BxDF type.
    pub fn get_type(&self) -> BxDFType {
        BxDFType::BSDF_REFLECTION | BxDFType::BSDF_GLOSSY
    }

    /// Returns the value of the distribution function for the given pair of
    /// directions.
    ///
    /// * `wo` - Outgoing direction.
    /// * `wi` - Incident direction.
    pub fn f(&self, wo: &Vector3f, wi: &Vector3f) -> Spectrum {
        let cos_theta_o = abs_cos_theta(wo);
        let cos_theta_i = abs_cos_theta(wi);
        let wh = *wi + *wo;

        // Handle degenerate cases for microfacet reflection.
        if cos_theta_i == 0.0 || cos_theta_o == 0.0 {
            return Spectrum::ZERO;
        }
        if wh.x == 0.0 && wh.y == 0.0 && wh.z == 0.0 {
            return Spectrum::ZERO;
        }

        let wh = wh.normalize();
        let f = self
            .fresnel
            .evaluate(wi.dot(&wh.face_forward(&Vector3f::new(0.0, 0.0, 1.0))));
        self.r * self.distribution.d(&wh) * self.distribution.g(wo, wi) * f
            / (4.0 * cos_theta_i * cos_theta_o)
    }

    /// Samples a microfacet normal and reflects `wo` about it.
    ///
    /// * `wo` - Outgoing direction.
    /// * `u`  - The 2D uniform random values.
    pub fn sample_f(&self, wo: &Vector3f, u: &Point2f) -> BxDFSample {
        if wo.z == 0.0 {
            return BxDFSample::from(self.get_type());
        }

        let wh = self.distribution.sample_wh(wo, u);
        if wo.dot(&wh) < 0.0 {
            // Should be rare.
            return BxDFSample::from(self.get_type());
        }

        let wi = reflect(wo, &wh);
        if !same_hemisphere(wo, &wi) {
            return BxDFSample::from(self.get_type());
        }

        // Compute PDF of `wi` for microfacet reflection.
        let pdf = self.distribution.pdf(wo, &wh) / (4.0 * wo.dot(&wh));
        BxDFSample::new(self.f(wo, &wi), pdf, wi, self.get_type())
    }

    /// Evaluates the PDF for the sampling method.
    ///
    /// * `wo` - Outgoing direction.
    /// * `wi` - Incident direction.
    pub fn pdf(&self, wo: &Vector3f, wi: &Vector3f) -> Float {
        if !same_hemisphere(wo, wi) {
            return 0.0;
        }
        let wh = (*wo + *wi).normalize();
        let wo_dot_wh = wo.dot(&wh);
        if wo_dot_wh == 0.0 {
            return 0.0;
        }
        self.distribution.pdf(wo, &wh) / (4.0 * wo_dot_wh)
    }
}

impl fmt::Display for MicrofacetReflection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MicrofacetReflection {{ r: {}, distribution: {}, fresnel: {} }}",
            self.r, self.distribution, self.fresnel
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::RNG;
    use float_cmp::*;

    fn lobe(alpha: Float) -> MicrofacetReflection {
        MicrofacetReflection::new(
            Spectrum::ONE,
            TrowbridgeReitzDistribution::new(alpha, alpha, true).into(),
            FresnelConstant::new(Spectrum::ONE),
        )
    }

    #[test]
    fn sample_pdf_matches_pdf() {
        let lobe = lobe(0.3);
        let mut rng = RNG::new(5);
        let wo = Vector3f::new(0.3, -0.2, 0.9).normalize();
        for _ in 0..200 {
            let s = lobe.sample_f(&wo, &rng.uniform_point2f());
            if s.pdf > 0.0 {
                let pdf = lobe.pdf(&wo, &s.wi);
                assert!(abs(s.pdf - pdf) <= 1e-3 * max(1.0, pdf));
                assert_eq!(s.f, lobe.f(&wo, &s.wi));
            }
        }
    }

    /// Integrates f(wo, wi) |cos θi| over the upper hemisphere with the
    /// midpoint rule.
    fn hemisphere_albedo(lobe: &MicrofacetReflection, wo: &Vector3f) -> Float {
        let (n_theta, n_phi) = (400, 800);
        let d_theta = PI_OVER_TWO / n_theta as Float;
        let d_phi = TWO_PI / n_phi as Float;
        let mut sum = 0.0;
        for i in 0..n_theta {
            let theta = (i as Float + 0.5) * d_theta;
            let (sin_t, cos_t) = theta.sin_cos();
            for j in 0..n_phi {
                let phi = (j as Float + 0.5) * d_phi;
                let wi = Vector3f::new(sin_t * phi.cos(), sin_t * phi.sin(), cos_t);
                sum += lobe.f(wo, &wi)[0] * cos_t * sin_t * d_theta * d_phi;
            }
        }
        sum
    }

    #[test]
    fn white_furnace_matches_integral() {
        let wo = Vector3f::new(0.0, 0.6, 0.8);
        let expected = hemisphere_albedo(&lobe(0.5), &wo);

        let bxdf = BxDF::from(lobe(0.5));
        let mut rng = RNG::new(9);
        let u: Vec<Point2f> = (0..20_000).map(|_| rng.uniform_point2f()).collect();
        let albedo = bxdf.rho_hd(&wo, &u)[0];
        assert!(expected > 0.6 && expected < 1.0, "integral = {}", expected);
        assert!(abs(albedo - expected) < 0.02, "albedo = {}, integral = {}", albedo, expected);
    }

    #[test]
    fn reciprocity() {
        let lobe = lobe(0.2);
        let wo = Vector3f::new(0.5, 0.1, 0.86).normalize();
        let wi = Vector3f::new(-0.3, 0.2, 0.93).normalize();
        let a = lobe.f(&wo, &wi)[0];
        let b = lobe.f(&wi, &wo)[0];
        assert!(approx_eq!(f32, a, b, epsilon = 1e-5, ulps = 8));
    }
}
