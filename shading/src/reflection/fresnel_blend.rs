//! Fresnel Blend (Ashikhmin-Shirley)

use super::*;

/// BRDF for a diffuse substrate underneath a glossy specular coating, where
/// the Fresnel term moves energy between the two layers.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FresnelBlend {
    /// Diffuse reflectance of the substrate.
    rd: Spectrum,

    /// Specular reflectance of the coating at normal incidence.
    rs: Spectrum,

    /// Microfacet distribution of the coating.
    distribution: MicrofacetDistribution,
}

impl FresnelBlend {
    /// Create a new instance of `FresnelBlend`.
    ///
    /// * `rd`           - Diffuse reflectance of the substrate.
    /// * `rs`           - Specular reflectance at normal incidence.
    /// * `distribution` - Microfacet distribution of the coating.
    pub fn new(rd: Spectrum, rs: Spectrum, distribution: MicrofacetDistribution) -> Self {
        Self {
            rd,
            rs,
            distribution,
        }
    }

    /// Returns the diffuse reflectance.
    pub fn rd(&self) -> Spectrum {
        self.rd
    }

    /// Returns the specular reflectance.
    pub fn rs(&self) -> Spectrum {
        self.rs
    }

    /// Returns the microfacet distribution.
    pub fn distribution(&self) -> &MicrofacetDistribution {
        &self.distribution
    }

    /// Returns the BxDF type.
    pub fn get_type(&self) -> BxDFType {
        BxDFType::BSDF_REFLECTION | BxDFType::BSDF_GLOSSY | BxDFType::BSDF_DIFFUSE
    }

    /// Returns the value of the distribution function for the given pair of
    /// directions.
    ///
    /// * `wo` - Outgoing direction.
    /// * `wi` - Incident direction.
    pub fn f(&self, wo: &Vector3f, wi: &Vector3f) -> Spectrum {
        let diffuse = (28.0 / (23.0 * PI))
            * self.rd
            * (Spectrum::ONE - self.rs)
            * (1.0 - pow5(1.0 - 0.5 * abs_cos_theta(wi)))
            * (1.0 - pow5(1.0 - 0.5 * abs_cos_theta(wo)));

        let wh = *wi + *wo;
        if wh.x == 0.0 && wh.y == 0.0 && wh.z == 0.0 {
            return Spectrum::ZERO;
        }
        let wh = wh.normalize();

        let denom = 4.0 * wi.abs_dot(&wh) * max(abs_cos_theta(wi), abs_cos_theta(wo));
        if denom == 0.0 {
            return diffuse;
        }
        let specular = self.distribution.d(&wh) / denom * fr_schlick(self.rs, wi.dot(&wh));
        diffuse + specular
    }

    /// Samples the diffuse or the glossy layer with equal probability.
    ///
    /// * `wo` - Outgoing direction.
    /// * `u`  - The 2D uniform random values.
    pub fn sample_f(&self, wo: &Vector3f, u: &Point2f) -> BxDFSample {
        let wi = if u[0] < 0.5 {
            // Cosine-sample the hemisphere, flipping the direction if necessary.
            let u = Point2f::new(min(2.0 * u[0], ONE_MINUS_EPSILON), u[1]);
            let mut wi = cosine_sample_hemisphere(&u);
            if wo.z < 0.0 {
                wi.z *= -1.0;
            }
            wi
        } else {
            // Sample microfacet orientation wh and reflected direction wi.
            let u = Point2f::new(min(2.0 * (u[0] - 0.5), ONE_MINUS_EPSILON), u[1]);
            let wh = self.distribution.sample_wh(wo, &u);
            let wi = reflect(wo, &wh);
            if !same_hemisphere(wo, &wi) {
                return BxDFSample::from(self.get_type());
            }
            wi
        };
        let pdf = self.pdf(wo, &wi);
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
        let pdf_wh = self.distribution.pdf(wo, &wh);
        0.5 * (abs_cos_theta(wi) * INV_PI + pdf_wh / (4.0 * wo.dot(&wh)))
    }
}

impl fmt::Display for FresnelBlend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FresnelBlend {{ rd: {}, rs: {}, distribution: {} }}",
            self.rd, self.rs, self.distribution
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::RNG;

    #[test]
    fn energy_bounded() {
        let lobe = FresnelBlend::new(
            Spectrum::new(0.5),
            Spectrum::new(0.5),
            TrowbridgeReitzDistribution::new(0.1, 0.1, true).into(),
        );
        let bxdf = BxDF::from(lobe);
        let mut rng = RNG::new(23);
        let u: Vec<Point2f> = (0..20_000).map(|_| rng.uniform_point2f()).collect();
        let albedo = bxdf.rho_hd(&Vector3f::new(0.0, 0.0, 1.0), &u);
        assert!(albedo[0] > 0.3 && albedo[0] < 1.05, "albedo = {}", albedo[0]);
    }

    #[test]
    fn samples_stay_in_hemisphere() {
        let lobe = FresnelBlend::new(
            Spectrum::new(0.2),
            Spectrum::new(0.04),
            TrowbridgeReitzDistribution::new(0.4, 0.2, true).into(),
        );
        let mut rng = RNG::new(29);
        let wo = Vector3f::new(0.4, 0.4, 0.82).normalize();
        for _ in 0..100 {
            let s = lobe.sample_f(&wo, &rng.uniform_point2f());
            if s.pdf > 0.0 {
                assert!(s.wi.z > 0.0);
                assert!(s.f.to_rgb().iter().all(|&v| v >= 0.0));
            }
        }
    }
}
