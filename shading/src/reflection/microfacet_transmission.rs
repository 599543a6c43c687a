//! Torrance-Sparrow Microfacet Transmission

use super::*;

/// BTDF for glossy transmission through rough dielectric microfacets.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MicrofacetTransmission {
    /// Transmission scale factor.
    t: Spectrum,

    /// Microfacet distribution.
    distribution: MicrofacetDistribution,

    /// Index of refraction above the surface (same side as surface normal).
    eta_a: Float,

    /// Index of refraction below the surface (opposite side as surface normal).
    eta_b: Float,

    /// Dielectric interface of the microfacets.
    fresnel: FresnelDielectric,

    /// Indicates whether incident ray started from a light source or from
    /// camera.
    mode: TransportMode,
}

impl MicrofacetTransmission {
    /// Create a new instance of `MicrofacetTransmission`.
    ///
    /// * `t`            - Transmission scale factor.
    /// * `distribution` - Microfacet distribution.
    /// * `eta_a`        - Index of refraction above the surface.
    /// * `eta_b`        - Index of refraction below the surface.
    /// * `mode`         - Indicates whether incident ray started from a light
    ///                    source or from camera.
    pub fn new(
        t: Spectrum,
        distribution: MicrofacetDistribution,
        eta_a: Float,
        eta_b: Float,
        mode: TransportMode,
    ) -> Self {
        Self {
            t,
            distribution,
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

    /// Returns the microfacet distribution.
    pub fn distribution(&self) -> &MicrofacetDistribution {
        &self.distribution
    }

    /// Returns the BxDF type.
    pub fn get_type(&self) -> BxDFType {
        BxDFType::BSDF_TRANSMISSION | BxDFType::BSDF_GLOSSY
    }

    /// Returns the relative index of refraction used for the generalized
    /// half vector.
    fn half_vector_eta(&self, wo: &Vector3f) -> Float {
        if cos_theta(wo) > 0.0 {
            self.eta_b / self.eta_a
        } else {
            self.eta_a / self.eta_b
        }
    }

    /// Returns the value of the distribution function for the given pair of
    /// directions.
    ///
    /// * `wo` - Outgoing direction.
    /// * `wi` - Incident direction.
    pub fn f(&self, wo: &Vector3f, wi: &Vector3f) -> Spectrum {
        if same_hemisphere(wo, wi) {
            // Transmission only.
            return Spectrum::ZERO;
        }

        let cos_theta_o = cos_theta(wo);
        let cos_theta_i = cos_theta(wi);
        if cos_theta_i == 0.0 || cos_theta_o == 0.0 {
            return Spectrum::ZERO;
        }

        // Compute wh from wo and wi for microfacet transmission.
        let eta = self.half_vector_eta(wo);
        let wh = *wo + *wi * eta;
        if wh.length_squared() == 0.0 {
            // Index matched; the refraction is a delta.
            return Spectrum::ZERO;
        }
        let wh = wh.normalize();
        let wh = if wh.z < 0.0 { -wh } else { wh };

        // Same side?
        let wo_dot_wh = wo.dot(&wh);
        let wi_dot_wh = wi.dot(&wh);
        if wo_dot_wh * wi_dot_wh > 0.0 {
            return Spectrum::ZERO;
        }

        let f = self.fresnel.evaluate(wo_dot_wh);
        let sqrt_denom = wo_dot_wh + eta * wi_dot_wh;
        let factor = match self.mode {
            TransportMode::Radiance => 1.0 / eta,
            TransportMode::Importance => 1.0,
        };

        (Spectrum::ONE - f)
            * self.t
            * abs(self.distribution.d(&wh)
                * self.distribution.g(wo, wi)
                * eta
                * eta
                * abs(wi_dot_wh)
                * abs(wo_dot_wh)
                * factor
                * factor
                / (cos_theta_i * cos_theta_o * sqrt_denom * sqrt_denom))
    }

    /// Samples a microfacet normal and refracts `wo` through it.
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

        let eta = if cos_theta(wo) > 0.0 {
            self.eta_a / self.eta_b
        } else {
            self.eta_b / self.eta_a
        };
        match refract(wo, &Normal3f::from(wh), eta) {
            Some(wi) => {
                let pdf = self.pdf(wo, &wi);
                BxDFSample::new(self.f(wo, &wi), pdf, wi, self.get_type())
            }
            None => BxDFSample::from(self.get_type()),
        }
    }

    /// Evaluates the PDF for the sampling method.
    ///
    /// * `wo` - Outgoing direction.
    /// * `wi` - Incident direction.
    pub fn pdf(&self, wo: &Vector3f, wi: &Vector3f) -> Float {
        if same_hemisphere(wo, wi) {
            return 0.0;
        }

        // Compute wh from wo and wi for microfacet transmission.
        let eta = self.half_vector_eta(wo);
        let wh = *wo + *wi * eta;
        if wh.length_squared() == 0.0 {
            return 0.0;
        }
        let wh = wh.normalize();

        let wo_dot_wh = wo.dot(&wh);
        let wi_dot_wh = wi.dot(&wh);
        if wo_dot_wh * wi_dot_wh > 0.0 {
            return 0.0;
        }

        // Compute change of variables for microfacet transmission.
        let sqrt_denom = wo_dot_wh + eta * wi_dot_wh;
        if sqrt_denom == 0.0 {
            return 0.0;
        }
        let dwh_dwi = abs((eta * eta * wi_dot_wh) / (sqrt_denom * sqrt_denom));
        self.distribution.pdf(wo, &wh) * dwh_dwi
    }
}

impl fmt::Display for MicrofacetTransmission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MicrofacetTransmission {{ t: {}, distribution: {}, eta_a: {}, eta_b: {}, mode: {} }}",
            self.t, self.distribution, self.eta_a, self.eta_b, self.mode
        )
    }
}
