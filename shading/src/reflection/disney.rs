//! Disney BRDF Diffuse Lobes
//!
//! The diffuse, fake subsurface, retro-reflection and sheen terms of the
//! Disney principled BRDF (Burley 2012, 2015). They only reflect and have no
//! specialised sampling routine; cosine-weighted hemisphere sampling is used.

use super::*;

/// Returns the normalized half vector and the cosine of the angle between
/// `wi` and it, or `None` when the directions cancel out.
fn half_angle(wo: &Vector3f, wi: &Vector3f) -> Option<(Vector3f, Float)> {
    let wh = *wi + *wo;
    if wh.x == 0.0 && wh.y == 0.0 && wh.z == 0.0 {
        None
    } else {
        let wh = wh.normalize();
        Some((wh, wi.dot(&wh)))
    }
}

/// The Lambertian-like base diffuse term with Schlick retro-reflection
/// removed at grazing angles.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DisneyDiffuse {
    r: Spectrum,
}

impl DisneyDiffuse {
    /// Create a new instance of `DisneyDiffuse`.
    ///
    /// * `r` - Reflectance.
    pub fn new(r: Spectrum) -> Self {
        Self { r }
    }

    /// Returns the reflectance.
    pub fn r(&self) -> Spectrum {
        self.r
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
        let fo = schlick_weight(abs_cos_theta(wo));
        let fi = schlick_weight(abs_cos_theta(wi));

        // Diffuse fresnel - go from 1 at normal incidence to .5 at grazing.
        self.r * INV_PI * (1.0 - fo / 2.0) * (1.0 - fi / 2.0)
    }
}

/// Hanrahan-Krueger inspired approximation of subsurface scattering used by
/// thin surfaces in place of a BSSRDF.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DisneyFakeSS {
    r: Spectrum,
    roughness: Float,
}

impl DisneyFakeSS {
    /// Create a new instance of `DisneyFakeSS`.
    ///
    /// * `r`         - Reflectance.
    /// * `roughness` - Surface roughness.
    pub fn new(r: Spectrum, roughness: Float) -> Self {
        Self { r, roughness }
    }

    /// Returns the reflectance.
    pub fn r(&self) -> Spectrum {
        self.r
    }

    /// Returns the roughness.
    pub fn roughness(&self) -> Float {
        self.roughness
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
        let Some((_, cos_theta_d)) = half_angle(wo, wi) else {
            return Spectrum::ZERO;
        };

        // Fss90 used to "flatten" retroreflection based on roughness.
        let fss90 = cos_theta_d * cos_theta_d * self.roughness;
        let fo = schlick_weight(abs_cos_theta(wo));
        let fi = schlick_weight(abs_cos_theta(wi));
        let fss = lerp(fo, 1.0, fss90) * lerp(fi, 1.0, fss90);

        // 1.25 scale is used to (roughly) preserve albedo.
        let ss = 1.25 * (fss * (1.0 / (abs_cos_theta(wo) + abs_cos_theta(wi)) - 0.5) + 0.5);
        self.r * INV_PI * ss
    }
}

/// Retro-reflection at grazing angles on rough surfaces.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DisneyRetro {
    r: Spectrum,
    roughness: Float,
}

impl DisneyRetro {
    /// Create a new instance of `DisneyRetro`.
    ///
    /// * `r`         - Reflectance.
    /// * `roughness` - Surface roughness.
    pub fn new(r: Spectrum, roughness: Float) -> Self {
        Self { r, roughness }
    }

    /// Returns the reflectance.
    pub fn r(&self) -> Spectrum {
        self.r
    }

    /// Returns the roughness.
    pub fn roughness(&self) -> Float {
        self.roughness
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
        let Some((_, cos_theta_d)) = half_angle(wo, wi) else {
            return Spectrum::ZERO;
        };

        let fo = schlick_weight(abs_cos_theta(wo));
        let fi = schlick_weight(abs_cos_theta(wi));
        let rr = 2.0 * self.roughness * cos_theta_d * cos_theta_d;

        // Burley 2015, eq (4).
        self.r * INV_PI * rr * (fo + fi + fo * fi * (rr - 1.0))
    }
}

/// Retro-reflective sheen for cloth-like materials.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DisneySheen {
    r: Spectrum,
}

impl DisneySheen {
    /// Create a new instance of `DisneySheen`.
    ///
    /// * `r` - Sheen colour scaled by the sheen weight.
    pub fn new(r: Spectrum) -> Self {
        Self { r }
    }

    /// Returns the sheen reflectance.
    pub fn r(&self) -> Spectrum {
        self.r
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
        match half_angle(wo, wi) {
            Some((_, cos_theta_d)) => self.r * schlick_weight(cos_theta_d),
            None => Spectrum::ZERO,
        }
    }
}

macro_rules! disney_display {
    ($t: ident, $($field: ident),+) => {
        impl fmt::Display for $t {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{} {{", stringify!($t))?;
                $(write!(f, " {}: {}", stringify!($field), self.$field)?;)+
                write!(f, " }}")
            }
        }
    };
}

disney_display!(DisneyDiffuse, r);
disney_display!(DisneyFakeSS, r, roughness);
disney_display!(DisneyRetro, r, roughness);
disney_display!(DisneySheen, r);
