//! Specular Transmission

use super::*;

/// BTDF for physically plausible specular transmission through a dielectric
/// interface.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SpecularTransmission {
    /// Transmission scale factor.
    t: Spectrum,

    /// Index of refraction above the surface (same side as surface normal).
    eta_a: Float,

    /// Index of refraction below the surface (opposite side as surface normal).
    eta_b: Float,

    /// Dielectric interface between the two media.
    fresnel: FresnelDielectric,

    /// Indicates whether incident ray started from a light source or from
    /// camera.
    mode: TransportMode,
}

impl SpecularTransmission {
    /// Create a new instance of `SpecularTransmission`.
    ///
    /// * `t`     - Transmission scale factor.
    /// * `eta_a` - Index of refraction above the surface.
    /// * `eta_b` - Index of refraction below the surface.
    /// * `mode`  - Indicates whether incident ray started from a light source
    ///             or from camera.
    pub fn new(t: Spectrum, eta_a: Float, eta_b: Float, mode: TransportMode) -> Self {
        Self {
            t,
            eta_a,
            eta_b,
            fresnel: FresnelDielectric { eta_i: eta_a, eta_t: eta_b },
            mode,
        }
    }

    /// Returns the transmission scale factor.
    pub fn t(&self) -> Spectrum {
        self.t
    }

    /// Returns the indices of refraction above and below the surface.
    pub fn eta(&self) -> (Float, Float) {
        (self.eta_a, self.eta_b)
    }

    /// Returns the transport mode.
    pub fn mode(&self) -> TransportMode {
        self.mode
    }

    /// Returns the BxDF type.
    pub fn get_type(&self) -> BxDFType {
        BxDFType::BSDF_TRANSMISSION | BxDFType::BSDF_SPECULAR
    }

    /// No scattering is returned for an arbitrary pair of directions.
    pub fn f(&self, _wo: &Vector3f, _wi: &Vector3f) -> Spectrum {
        Spectrum::ZERO
    }

    /// Returns the refracted direction of `wo`.
    ///
    /// * `wo` - Outgoing direction.
    /// * `u`  - The 2D uniform random values (unused).
    pub fn sample_f(&self, wo: &Vector3f, _u: &Point2f) -> BxDFSample {
        // Figure out which eta is incident and which is transmitted.
        let entering = cos_theta(wo) > 0.0;
        let (eta_i, eta_t) = if entering {
            (self.eta_a, self.eta_b)
        } else {
            (self.eta_b, self.eta_a)
        };

        // Compute ray direction for specular transmission.
        let n = Normal3f::new(0.0, 0.0, 1.0).face_forward(wo);
        match refract(wo, &n, eta_i / eta_t) {
            Some(wi) if cos_theta(&wi) != 0.0 => {
                let mut ft = self.t * (Spectrum::ONE - self.fresnel.evaluate(cos_theta(&wi)));

                // Account for non-symmetry with transmission to different medium.
                if self.mode == TransportMode::Radiance {
                    ft *= (eta_i * eta_i) / (eta_t * eta_t);
                }
                BxDFSample::new(ft / abs_cos_theta(&wi), 1.0, wi, self.get_type())
            }
            _ => BxDFSample::from(self.get_type()),
        }
    }

    /// Returns 0 since the refracted direction is a delta distribution.
    pub fn pdf(&self, _wo: &Vector3f, _wi: &Vector3f) -> Float {
        0.0
    }
}

impl fmt::Display for SpecularTransmission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SpecularTransmission {{ t: {}, eta_a: {}, eta_b: {}, mode: {} }}",
            self.t, self.eta_a, self.eta_b, self.mode
        )
    }
}
