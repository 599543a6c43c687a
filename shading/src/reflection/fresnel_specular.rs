//! Fresnel-modulated Specular Reflection and Transmission

use super::*;

/// A single lobe combining specular reflection and transmission through a
/// dielectric, choosing between them in proportion to the Fresnel term.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FresnelSpecular {
    /// Reflection scale factor.
    r: Spectrum,

    /// Transmission scale factor.
    t: Spectrum,

    /// Index of refraction above the surface (same side as surface normal).
    eta_a: Float,

    /// Index of refraction below the surface (opposite side as surface normal).
    eta_b: Float,

    /// Indicates whether incident ray started from a light source or from
    /// camera.
    mode: TransportMode,
}

impl FresnelSpecular {
    /// Create a new instance of `FresnelSpecular`.
    ///
    /// * `r`     - Reflection scale factor.
    /// * `t`     - Transmission scale factor.
    /// * `eta_a` - Index of refraction above the surface.
    /// * `eta_b` - Index of refraction below the surface.
    /// * `mode`  - Indicates whether incident ray started from a light source
    ///             or from camera.
    pub fn new(r: Spectrum, t: Spectrum, eta_a: Float, eta_b: Float, mode: TransportMode) -> Self {
        Self {
            r,
            t,
            eta_a,
            eta_b,
            mode,
        }
    }

    /// Returns the reflection scale factor.
    pub fn r(&self) -> Spectrum {
        self.r
    }

    /// Returns the transmission scale factor.
    pub fn t(&self) -> Spectrum {
        self.t
    }

    /// Returns the BxDF type.
    pub fn get_type(&self) -> BxDFType {
        BxDFType::BSDF_REFLECTION | BxDFType::BSDF_TRANSMISSION | BxDFType::BSDF_SPECULAR
    }

    /// No scattering is returned for an arbitrary pair of directions.
    pub fn f(&self, _wo: &Vector3f, _wi: &Vector3f) -> Spectrum {
        Spectrum::ZERO
    }

    /// Picks reflection with probability F and transmission otherwise.
    ///
    /// * `wo` - Outgoing direction.
    /// * `u`  - The 2D uniform random values.
    pub fn sample_f(&self, wo: &Vector3f, u: &Point2f) -> BxDFSample {
        let f = fr_dielectric(cos_theta(wo), self.eta_a, self.eta_b);
        if u[0] < f {
            // Compute specular reflection.
            let wi = Vector3f::new(-wo.x, -wo.y, wo.z);
            let bxdf_type = BxDFType::BSDF_SPECULAR | BxDFType::BSDF_REFLECTION;
            if cos_theta(&wi) == 0.0 {
                return BxDFSample::from(bxdf_type);
            }
            BxDFSample::new(f * self.r / abs_cos_theta(&wi), f, wi, bxdf_type)
        } else {
            // Compute specular transmission.
            let bxdf_type = BxDFType::BSDF_SPECULAR | BxDFType::BSDF_TRANSMISSION;
            let entering = cos_theta(wo) > 0.0;
            let (eta_i, eta_t) = if entering {
                (self.eta_a, self.eta_b)
            } else {
                (self.eta_b, self.eta_a)
            };

            let n = Normal3f::new(0.0, 0.0, 1.0).face_forward(wo);
            match refract(wo, &n, eta_i / eta_t) {
                Some(wi) if cos_theta(&wi) != 0.0 => {
                    let mut ft = self.t * (1.0 - f);

                    // Account for non-symmetry with transmission to different medium.
                    if self.mode == TransportMode::Radiance {
                        ft *= (eta_i * eta_i) / (eta_t * eta_t);
                    }
                    BxDFSample::new(ft / abs_cos_theta(&wi), 1.0 - f, wi, bxdf_type)
                }
                _ => BxDFSample::from(bxdf_type),
            }
        }
    }

    /// Returns 0 since both directions are delta distributions.
    pub fn pdf(&self, _wo: &Vector3f, _wi: &Vector3f) -> Float {
        0.0
    }
}

impl fmt::Display for FresnelSpecular {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FresnelSpecular {{ r: {}, t: {}, eta_a: {}, eta_b: {}, mode: {} }}",
            self.r, self.t, self.eta_a, self.eta_b, self.mode
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::*;

    #[test]
    fn chooses_lobe_by_fresnel() {
        let lobe = FresnelSpecular::new(
            Spectrum::ONE,
            Spectrum::ONE,
            1.0,
            1.5,
            TransportMode::Importance,
        );
        let wo = Vector3f::new(0.0, 0.0, 1.0);

        // F = 0.04 at normal incidence.
        let reflected = lobe.sample_f(&wo, &Point2f::new(0.01, 0.5));
        assert!(reflected.bxdf_type.contains(BxDFType::BSDF_REFLECTION));
        assert!(approx_eq!(f32, reflected.pdf, 0.04, epsilon = 1e-6));

        let refracted = lobe.sample_f(&wo, &Point2f::new(0.5, 0.5));
        assert!(refracted.bxdf_type.contains(BxDFType::BSDF_TRANSMISSION));
        assert!(approx_eq!(f32, refracted.pdf, 0.96, epsilon = 1e-6));
        assert!(refracted.wi.z < 0.0);

        // Estimator weight f·cos/pdf equals the scale factor for either branch.
        let w = refracted.f[0] * abs_cos_theta(&refracted.wi) / refracted.pdf;
        assert!(approx_eq!(f32, w, 1.0, epsilon = 1e-5));
    }
}
