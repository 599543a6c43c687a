//! Specular Reflection

use super::*;

/// BRDF for physically plausible specular reflection using a Fresnel
/// interface.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SpecularReflection {
    /// Spectrum used to scale the reflected colour.
    r: Spectrum,

    /// Fresnel interface for dielectrics and conductors.
    fresnel: Fresnel,
}

impl SpecularReflection {
    /// Create a new instance of `SpecularReflection`.
    ///
    /// * `r`       - Spectrum used to scale the reflected colour.
    /// * `fresnel` - Fresnel interface for dielectrics and conductors.
    pub fn new(r: Spectrum, fresnel: Fresnel) -> Self {
        Self { r, fresnel }
    }

    /// Returns the reflectance scale.
    pub fn r(&self) -> Spectrum {
        self.r
    }

    /// Returns the Fresnel interface.
    pub fn fresnel(&self) -> &Fresnel {
        &self.fresnel
    }

    /// Returns the BxDF type.
    pub fn get_type(&self) -> BxDFType {
        BxDFType::BSDF_REFLECTION | BxDFType::BSDF_SPECULAR
    }

    /// No scattering is returned for an arbitrary pair of directions; the
    /// delta distribution is only reachable through `sample_f()`.
    pub fn f(&self, _wo: &Vector3f, _wi: &Vector3f) -> Spectrum {
        Spectrum::ZERO
    }

    /// Returns the mirror direction of `wo` with respect to the normal.
    ///
    /// * `wo` - Outgoing direction.
    /// * `u`  - The 2D uniform random values (unused).
    pub fn sample_f(&self, wo: &Vector3f, _u: &Point2f) -> BxDFSample {
        let wi = Vector3f::new(-wo.x, -wo.y, wo.z);
        let cos_i = cos_theta(&wi);
        if cos_i == 0.0 {
            return BxDFSample::from(self.get_type());
        }
        let f = self.fresnel.evaluate(cos_i) * self.r / abs_cos_theta(&wi);
        BxDFSample::new(f, 1.0, wi, self.get_type())
    }

    /// Returns 0 since the probability of picking the mirror direction with
    /// an arbitrary `wi` is zero.
    pub fn pdf(&self, _wo: &Vector3f, _wi: &Vector3f) -> Float {
        0.0
    }
}

impl fmt::Display for SpecularReflection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SpecularReflection {{ r: {}, fresnel: {} }}",
            self.r, self.fresnel
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::*;

    #[test]
    fn mirror_direction() {
        let lobe = SpecularReflection::new(Spectrum::ONE, FresnelConstant::new(Spectrum::ONE));
        let wo = Vector3f::new(0.6, 0.0, 0.8);
        let s = lobe.sample_f(&wo, &Point2f::new(0.5, 0.5));
        assert_eq!(s.wi, Vector3f::new(-0.6, 0.0, 0.8));
        assert_eq!(s.pdf, 1.0);
        // Radiance through a perfect mirror is preserved: f·cos/pdf = 1.
        assert!(approx_eq!(f32, s.f[0] * abs_cos_theta(&s.wi), 1.0, epsilon = 1e-6));
        assert!(lobe.f(&wo, &s.wi).is_black());
        assert_eq!(lobe.pdf(&wo, &s.wi), 0.0);
    }
}
