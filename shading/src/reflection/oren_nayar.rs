//! Oren-Nayar Microfacet Model

use super::*;

/// BRDF for rough diffuse surfaces made of V-shaped Lambertian microfacets
/// whose slopes are normally distributed.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct OrenNayar {
    /// Reflectance spectrum.
    r: Spectrum,

    /// Standard deviation of the microfacet orientation angle in degrees.
    sigma: Float,

    a: Float,
    b: Float,
}

impl OrenNayar {
    /// Create a new instance of `OrenNayar`.
    ///
    /// * `r`     - Reflectance spectrum.
    /// * `sigma` - Standard deviation of the microfacet orientation angle in
    ///             degrees.
    pub fn new(r: Spectrum, sigma: Float) -> Self {
        let sigma_rad = sigma.to_radians();
        let sigma2 = sigma_rad * sigma_rad;
        Self {
            r,
            sigma,
            a: 1.0 - (sigma2 / (2.0 * (sigma2 + 0.33))),
            b: 0.45 * sigma2 / (sigma2 + 0.09),
        }
    }

    /// Returns the reflectance.
    pub fn r(&self) -> Spectrum {
        self.r
    }

    /// Returns the microfacet angle standard deviation in degrees.
    pub fn sigma(&self) -> Float {
        self.sigma
    }

    /// Returns the BxDF type.
    pub fn get_type(&self) -> BxDFType {
        BxDFType::BSDF_REFLECTION | BxDFType::BSDF_DIFFUSE
    }

    /// Returns the value of the distribution function for the given pair of
    /// directions.
    ///
    /// * `wo` - Outgoing direction.
    /// * `wi` - Incident direction.
    pub fn f(&self, wo: &Vector3f, wi: &Vector3f) -> Spectrum {
        let sin_theta_i = sin_theta(wi);
        let sin_theta_o = sin_theta(wo);

        // Compute cosine term of Oren-Nayar model.
        let max_cos = if sin_theta_i > 1e-4 && sin_theta_o > 1e-4 {
            let d_cos = cos_phi(wi) * cos_phi(wo) + sin_phi(wi) * sin_phi(wo);
            max(0.0, d_cos)
        } else {
            0.0
        };

        // Compute sine and tangent terms of Oren-Nayar model.
        let (sin_alpha, tan_beta) = if abs_cos_theta(wi) > abs_cos_theta(wo) {
            (sin_theta_o, sin_theta_i / abs_cos_theta(wi))
        } else {
            (sin_theta_i, sin_theta_o / abs_cos_theta(wo))
        };

        self.r * INV_PI * (self.a + self.b * max_cos * sin_alpha * tan_beta)
    }
}

impl fmt::Display for OrenNayar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "OrenNayar {{ r: {}, sigma: {}, a: {}, b: {} }}",
            self.r, self.sigma, self.a, self.b
        )
    }
}
