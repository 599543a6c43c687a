//! Lambertian Transmission

use super::*;

/// BTDF for the Lambertian model that transmits incident illumination
/// equally in all directions of the opposite hemisphere.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LambertianTransmission {
    /// Transmission scale factor.
    t: Spectrum,
}

impl LambertianTransmission {
    /// Create a new instance of `LambertianTransmission`.
    ///
    /// * `t` - Transmission scale factor.
    pub fn new(t: Spectrum) -> Self {
        Self { t }
    }

    /// Returns the transmission scale factor.
    pub fn t(&self) -> Spectrum {
        self.t
    }

    /// Returns the BxDF type.
    pub fn get_type(&self) -> BxDFType {
        BxDFType::BSDF_TRANSMISSION | BxDFType::BSDF_DIFFUSE
    }

    /// Returns the value of the distribution function for the given pair of
    /// directions.
    ///
    /// * `wo` - Outgoing direction.
    /// * `wi` - Incident direction.
    pub fn f(&self, _wo: &Vector3f, _wi: &Vector3f) -> Spectrum {
        self.t * INV_PI
    }

    /// Samples a direction in the hemisphere opposite `wo`.
    ///
    /// * `wo` - Outgoing direction.
    /// * `u`  - The 2D uniform random values.
    pub fn sample_f(&self, wo: &Vector3f, u: &Point2f) -> BxDFSample {
        let mut wi = cosine_sample_hemisphere(u);
        if wo.z > 0.0 {
            wi.z *= -1.0;
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
            abs_cos_theta(wi) * INV_PI
        } else {
            0.0
        }
    }

    /// Computes the hemispherical-directional reflectance function ρ.
    ///
    /// * `wo` - Outgoing direction.
    /// * `u`  - Samples used by Monte Carlo algorithm.
    pub fn rho_hd(&self, _wo: &Vector3f, _u: &[Point2f]) -> Spectrum {
        self.t
    }

    /// Computes the hemispherical-hemispherical reflectance function ρ.
    ///
    /// * `u1` - Samples used by Monte Carlo algorithm.
    /// * `u2` - Samples used by Monte Carlo algorithm.
    pub fn rho_hh(&self, u1: &[Point2f], u2: &[Point2f]) -> Spectrum {
        assert!(u1.len() == u2.len());
        self.t
    }
}

impl fmt::Display for LambertianTransmission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LambertianTransmission {{ t: {} }}", self.t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_opposite_hemisphere() {
        let lobe = LambertianTransmission::new(Spectrum::new(0.4));
        let wo = Vector3f::new(0.0, 0.6, 0.8);
        let sample = lobe.sample_f(&wo, &Point2f::new(0.3, 0.7));
        assert!(sample.wi.z < 0.0);
        assert!(sample.pdf > 0.0);
        assert_eq!(lobe.pdf(&wo, &wo), 0.0);
    }
}
