//! Disney Clearcoat

use super::*;

/// Generalized Trowbridge-Reitz distribution with γ=1 (Berry).
///
/// * `cos_theta` - Cosine of the angle between the half vector and normal.
/// * `alpha`     - Roughness of the coat.
fn gtr1(cos_theta: Float, alpha: Float) -> Float {
    if alpha >= 1.0 {
        return INV_PI;
    }
    let alpha2 = alpha * alpha;
    (alpha2 - 1.0) / (PI * alpha2.ln() * (1.0 + (alpha2 - 1.0) * cos_theta * cos_theta))
}

/// Smith masking-shadowing for GGX, expressed as G1 / (2·cos(θ)).
///
/// * `cos_theta` - Cosine of the angle with the normal.
/// * `alpha`     - Roughness.
fn smith_g_ggx(cos_theta: Float, alpha: Float) -> Float {
    let alpha2 = alpha * alpha;
    let cos_theta_2 = cos_theta * cos_theta;
    1.0 / (cos_theta + (alpha2 + cos_theta_2 - alpha2 * cos_theta_2).sqrt())
}

/// A second, achromatic specular layer with a fixed index of refraction of
/// 1.5 (F0 = 0.04).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DisneyClearcoat {
    /// Strength of the coat.
    weight: Float,

    /// Roughness of the coat, in (0.001, 0.1) for glosses in (0, 1).
    gloss: Float,
}

impl DisneyClearcoat {
    /// Create a new instance of `DisneyClearcoat`.
    ///
    /// * `weight` - Strength of the coat.
    /// * `gloss`  - Roughness of the coat's GTR1 distribution.
    pub fn new(weight: Float, gloss: Float) -> Self {
        Self { weight, gloss }
    }

    /// Returns the strength of the coat.
    pub fn weight(&self) -> Float {
        self.weight
    }

    /// Returns the roughness of the coat.
    pub fn gloss(&self) -> Float {
        self.gloss
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
        let wh = *wi + *wo;
        if wh.x == 0.0 && wh.y == 0.0 && wh.z == 0.0 {
            return Spectrum::ZERO;
        }
        let wh = wh.normalize();

        let dr = gtr1(abs_cos_theta(&wh), self.gloss);
        let fr = fr_schlick(0.04 as Float, wo.dot(&wh));
        let gr = smith_g_ggx(abs_cos_theta(wo), 0.25) * smith_g_ggx(abs_cos_theta(wi), 0.25);

        Spectrum::new(self.weight * gr * fr * dr / 4.0)
    }

    /// Samples the GTR1 distribution for a half vector and reflects `wo`
    /// about it.
    ///
    /// * `wo` - Outgoing direction.
    /// * `u`  - The 2D uniform random values.
    pub fn sample_f(&self, wo: &Vector3f, u: &Point2f) -> BxDFSample {
        if wo.z == 0.0 {
            return BxDFSample::from(self.get_type());
        }

        let alpha2 = self.gloss * self.gloss;
        let cos_theta = safe_sqrt((1.0 - alpha2.powf(1.0 - u[0])) / (1.0 - alpha2));
        let sin_theta = safe_sqrt(1.0 - cos_theta * cos_theta);
        let phi = TWO_PI * u[1];
        let wh = spherical_direction(sin_theta, cos_theta, phi);
        let wh = if !same_hemisphere(wo, &wh) { -wh } else { wh };

        let wi = reflect(wo, &wh);
        if !same_hemisphere(wo, &wi) {
            return BxDFSample::from(self.get_type());
        }

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

        let wh = *wi + *wo;
        if wh.x == 0.0 && wh.y == 0.0 && wh.z == 0.0 {
            return 0.0;
        }
        let wh = wh.normalize();

        // The sampling routine samples wh exactly from the GTR1 distribution.
        // Thus, the final value of the PDF is just the value of the
        // distribution for wh converted to a measure with respect to the
        // surface normal.
        let dr = gtr1(abs_cos_theta(&wh), self.gloss);
        dr * abs_cos_theta(&wh) / (4.0 * wo.dot(&wh))
    }
}

impl fmt::Display for DisneyClearcoat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DisneyClearcoat {{ weight: {}, gloss: {} }}",
            self.weight, self.gloss
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::RNG;
    use float_cmp::*;

    #[test]
    fn gtr1_is_normalized() {
        // ∫ D(θ) cos(θ) dω = 1
        let mut rng = RNG::new(31);
        let n = 100_000;
        let alpha = 0.5;
        let mut sum = 0.0;
        for _ in 0..n {
            let w = uniform_sample_hemisphere(&rng.uniform_point2f());
            sum += gtr1(cos_theta(&w), alpha) * cos_theta(&w) / uniform_hemisphere_pdf();
        }
        let estimate = sum / n as Float;
        assert!(approx_eq!(f32, estimate, 1.0, epsilon = 0.05), "estimate = {}", estimate);
    }

    #[test]
    fn sample_pdf_matches_pdf() {
        let lobe = DisneyClearcoat::new(0.5, 0.05);
        let mut rng = RNG::new(37);
        let wo = Vector3f::new(0.3, 0.1, 0.95).normalize();
        for _ in 0..200 {
            let s = lobe.sample_f(&wo, &rng.uniform_point2f());
            if s.pdf > 0.0 {
                let pdf = lobe.pdf(&wo, &s.wi);
                assert!(abs(s.pdf - pdf) <= 1e-3 * max(1.0, pdf));
                assert!(s.wi.z > 0.0);
            }
        }
    }

    #[test]
    fn weight_scales_linearly() {
        let wo = Vector3f::new(0.6, 0.0, 0.8);
        let wi = Vector3f::new(-0.5, 0.1, 0.86).normalize();
        let a = DisneyClearcoat::new(0.25, 0.01).f(&wo, &wi)[0];
        let b = DisneyClearcoat::new(1.0, 0.01).f(&wo, &wi)[0];
        assert!(approx_eq!(f32, 4.0 * a, b, epsilon = 1e-6, ulps = 4));
    }
}
