//! Reflection and surface scattering models

use crate::geometry::*;
use crate::material::TransportMode;
use crate::microfacet::*;
use crate::pbrt::*;
use crate::rng::ONE_MINUS_EPSILON;
use crate::sampling::*;
use crate::spectrum::*;
use std::fmt;

mod bsdf;
mod bxdf_sample;
mod bxdf_type;
mod common;
mod disney;
mod disney_clearcoat;
mod frame;
mod fresnel;
mod fresnel_blend;
mod fresnel_specular;
mod hair;
mod lambertian_reflection;
mod lambertian_transmission;
mod microfacet_reflection;
mod microfacet_transmission;
mod oren_nayar;
mod specular_reflection;
mod specular_transmission;

// Re-export
pub use bsdf::*;
pub use bxdf_sample::*;
pub use bxdf_type::*;
pub use common::*;
pub use disney::*;
pub use disney_clearcoat::*;
pub use frame::*;
pub use fresnel::*;
pub use fresnel_blend::*;
pub use fresnel_specular::*;
pub use hair::*;
pub use lambertian_reflection::*;
pub use lambertian_transmission::*;
pub use microfacet_reflection::*;
pub use microfacet_transmission::*;
pub use oren_nayar::*;
pub use specular_reflection::*;
pub use specular_transmission::*;

/// BxDF for BRDFs and BTDFs.
///
/// The set of lobes is closed so they are enumerated directly. Each lobe is
/// a small immutable value built from already evaluated texture values.
#[derive(Clone, Debug, PartialEq)]
pub enum BxDF {
    DisneyClearcoat(DisneyClearcoat),
    DisneyDiffuse(DisneyDiffuse),
    DisneyFakeSS(DisneyFakeSS),
    DisneyRetro(DisneyRetro),
    DisneySheen(DisneySheen),
    FresnelBlend(FresnelBlend),
    FresnelSpecular(FresnelSpecular),
    Hair(HairBxDF),
    LambertianReflection(LambertianReflection),
    LambertianTransmission(LambertianTransmission),
    MicrofacetReflection(MicrofacetReflection),
    MicrofacetTransmission(MicrofacetTransmission),
    OrenNayar(OrenNayar),
    SpecularReflection(SpecularReflection),
    SpecularTransmission(SpecularTransmission),
}

impl BxDF {
    /// Returns the BxDF type.
    pub fn get_type(&self) -> BxDFType {
        match self {
            BxDF::DisneyClearcoat(bxdf) => bxdf.get_type(),
            BxDF::DisneyDiffuse(bxdf) => bxdf.get_type(),
            BxDF::DisneyFakeSS(bxdf) => bxdf.get_type(),
            BxDF::DisneyRetro(bxdf) => bxdf.get_type(),
            BxDF::DisneySheen(bxdf) => bxdf.get_type(),
            BxDF::FresnelBlend(bxdf) => bxdf.get_type(),
            BxDF::FresnelSpecular(bxdf) => bxdf.get_type(),
            BxDF::Hair(bxdf) => bxdf.get_type(),
            BxDF::LambertianReflection(bxdf) => bxdf.get_type(),
            BxDF::LambertianTransmission(bxdf) => bxdf.get_type(),
            BxDF::MicrofacetReflection(bxdf) => bxdf.get_type(),
            BxDF::MicrofacetTransmission(bxdf) => bxdf.get_type(),
            BxDF::OrenNayar(bxdf) => bxdf.get_type(),
            BxDF::SpecularReflection(bxdf) => bxdf.get_type(),
            BxDF::SpecularTransmission(bxdf) => bxdf.get_type(),
        }
    }

    /// Returns true if every flag of this lobe is included in `t`.
    ///
    /// * `t` - The reflection model to compare.
    pub fn matches_flags(&self, t: BxDFType) -> bool {
        t.contains(self.get_type())
    }

    /// Returns the value of the distribution function for the given pair of
    /// directions.
    ///
    /// * `wo` - Outgoing direction.
    /// * `wi` - Incident direction.
    pub fn f(&self, wo: &Vector3f, wi: &Vector3f) -> Spectrum {
        match self {
            BxDF::DisneyClearcoat(bxdf) => bxdf.f(wo, wi),
            BxDF::DisneyDiffuse(bxdf) => bxdf.f(wo, wi),
            BxDF::DisneyFakeSS(bxdf) => bxdf.f(wo, wi),
            BxDF::DisneyRetro(bxdf) => bxdf.f(wo, wi),
            BxDF::DisneySheen(bxdf) => bxdf.f(wo, wi),
            BxDF::FresnelBlend(bxdf) => bxdf.f(wo, wi),
            BxDF::FresnelSpecular(bxdf) => bxdf.f(wo, wi),
            BxDF::Hair(bxdf) => bxdf.f(wo, wi),
            BxDF::LambertianReflection(bxdf) => bxdf.f(wo, wi),
            BxDF::LambertianTransmission(bxdf) => bxdf.f(wo, wi),
            BxDF::MicrofacetReflection(bxdf) => bxdf.f(wo, wi),
            BxDF::MicrofacetTransmission(bxdf) => bxdf.f(wo, wi),
            BxDF::OrenNayar(bxdf) => bxdf.f(wo, wi),
            BxDF::SpecularReflection(bxdf) => bxdf.f(wo, wi),
            BxDF::SpecularTransmission(bxdf) => bxdf.f(wo, wi),
        }
    }

    /// Samples an incident direction for the given outgoing direction and
    /// returns the value of the BxDF for the pair.
    ///
    /// * `wo` - Outgoing direction.
    /// * `u`  - The 2D uniform random values.
    pub fn sample_f(&self, wo: &Vector3f, u: &Point2f) -> BxDFSample {
        match self {
            BxDF::DisneyClearcoat(bxdf) => bxdf.sample_f(wo, u),
            BxDF::FresnelBlend(bxdf) => bxdf.sample_f(wo, u),
            BxDF::FresnelSpecular(bxdf) => bxdf.sample_f(wo, u),
            BxDF::Hair(bxdf) => bxdf.sample_f(wo, u),
            BxDF::LambertianTransmission(bxdf) => bxdf.sample_f(wo, u),
            BxDF::MicrofacetReflection(bxdf) => bxdf.sample_f(wo, u),
            BxDF::MicrofacetTransmission(bxdf) => bxdf.sample_f(wo, u),
            BxDF::SpecularReflection(bxdf) => bxdf.sample_f(wo, u),
            BxDF::SpecularTransmission(bxdf) => bxdf.sample_f(wo, u),
            _ => {
                // Cosine-sample the hemisphere, flipping the direction if necessary.
                let mut wi = cosine_sample_hemisphere(u);
                if wo.z < 0.0 {
                    wi.z *= -1.0;
                }
                let pdf = self.pdf(wo, &wi);
                BxDFSample::new(self.f(wo, &wi), pdf, wi, self.get_type())
            }
        }
    }

    /// Evaluates the PDF for the sampling method. Default is based on the
    /// cosine-weighted sampling in `BxDF::sample_f()` default implementation.
    ///
    /// * `wo` - Outgoing direction.
    /// * `wi` - Incident direction.
    pub fn pdf(&self, wo: &Vector3f, wi: &Vector3f) -> Float {
        match self {
            BxDF::DisneyClearcoat(bxdf) => bxdf.pdf(wo, wi),
            BxDF::FresnelBlend(bxdf) => bxdf.pdf(wo, wi),
            BxDF::FresnelSpecular(bxdf) => bxdf.pdf(wo, wi),
            BxDF::Hair(bxdf) => bxdf.pdf(wo, wi),
            BxDF::LambertianTransmission(bxdf) => bxdf.pdf(wo, wi),
            BxDF::MicrofacetReflection(bxdf) => bxdf.pdf(wo, wi),
            BxDF::MicrofacetTransmission(bxdf) => bxdf.pdf(wo, wi),
            BxDF::SpecularReflection(bxdf) => bxdf.pdf(wo, wi),
            BxDF::SpecularTransmission(bxdf) => bxdf.pdf(wo, wi),
            _ => {
                if same_hemisphere(wo, wi) {
                    abs_cos_theta(wi) * INV_PI
                } else {
                    0.0
                }
            }
        }
    }

    /// Computes the hemispherical-directional reflectance function ρ.
    ///
    /// * `wo` - Outgoing direction.
    /// * `u`  - Samples used by Monte Carlo algorithm.
    pub fn rho_hd(&self, wo: &Vector3f, u: &[Point2f]) -> Spectrum {
        match self {
            BxDF::LambertianReflection(bxdf) => bxdf.rho_hd(wo, u),
            BxDF::LambertianTransmission(bxdf) => bxdf.rho_hd(wo, u),
            _ => {
                if u.is_empty() {
                    return Spectrum::ZERO;
                }
                let mut r = Spectrum::ZERO;
                for s in u {
                    // Estimate one term of `rho_hd`.
                    let sample = self.sample_f(wo, s);
                    if sample.pdf > 0.0 {
                        r += sample.f * abs_cos_theta(&sample.wi) / sample.pdf;
                    }
                }
                r / u.len() as Float
            }
        }
    }

    /// Computes the hemispherical-hemispherical reflectance function ρ.
    ///
    /// * `u1` - Samples used by Monte Carlo algorithm.
    /// * `u2` - Samples used by Monte Carlo algorithm.
    pub fn rho_hh(&self, u1: &[Point2f], u2: &[Point2f]) -> Spectrum {
        match self {
            BxDF::LambertianReflection(bxdf) => bxdf.rho_hh(u1, u2),
            BxDF::LambertianTransmission(bxdf) => bxdf.rho_hh(u1, u2),
            _ => {
                assert!(u1.len() == u2.len());
                if u1.is_empty() {
                    return Spectrum::ZERO;
                }

                let mut r = Spectrum::ZERO;
                for (s1, s2) in u1.iter().zip(u2.iter()) {
                    // Estimate one term of `rho_hh`.
                    let wo = uniform_sample_hemisphere(s1);
                    let pdfo = uniform_hemisphere_pdf();
                    let sample = self.sample_f(&wo, s2);
                    let pdfi = sample.pdf;
                    if pdfi > 0.0 {
                        r += sample.f * abs_cos_theta(&sample.wi) * abs_cos_theta(&wo)
                            / (pdfo * pdfi);
                    }
                }
                r / (PI * u1.len() as Float)
            }
        }
    }
}

/// Generates conversions from each lobe into `BxDF`.
macro_rules! bxdf_from {
    ($($variant: ident => $t: ty),+ $(,)?) => {
        $(
            impl From<$t> for BxDF {
                fn from(bxdf: $t) -> Self {
                    BxDF::$variant(bxdf)
                }
            }
        )+
    };
}

bxdf_from!(
    DisneyClearcoat => DisneyClearcoat,
    DisneyDiffuse => DisneyDiffuse,
    DisneyFakeSS => DisneyFakeSS,
    DisneyRetro => DisneyRetro,
    DisneySheen => DisneySheen,
    FresnelBlend => FresnelBlend,
    FresnelSpecular => FresnelSpecular,
    Hair => HairBxDF,
    LambertianReflection => LambertianReflection,
    LambertianTransmission => LambertianTransmission,
    MicrofacetReflection => MicrofacetReflection,
    MicrofacetTransmission => MicrofacetTransmission,
    OrenNayar => OrenNayar,
    SpecularReflection => SpecularReflection,
    SpecularTransmission => SpecularTransmission,
);

impl fmt::Display for BxDF {
    /// Formats the value using the given formatter.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BxDF::DisneyClearcoat(bxdf) => write!(f, "BxDF {{ {} }}", bxdf),
            BxDF::DisneyDiffuse(bxdf) => write!(f, "BxDF {{ {} }}", bxdf),
            BxDF::DisneyFakeSS(bxdf) => write!(f, "BxDF {{ {} }}", bxdf),
            BxDF::DisneyRetro(bxdf) => write!(f, "BxDF {{ {} }}", bxdf),
            BxDF::DisneySheen(bxdf) => write!(f, "BxDF {{ {} }}", bxdf),
            BxDF::FresnelBlend(bxdf) => write!(f, "BxDF {{ {} }}", bxdf),
            BxDF::FresnelSpecular(bxdf) => write!(f, "BxDF {{ {} }}", bxdf),
            BxDF::Hair(bxdf) => write!(f, "BxDF {{ {} }}", bxdf),
            BxDF::LambertianReflection(bxdf) => write!(f, "BxDF {{ {} }}", bxdf),
            BxDF::LambertianTransmission(bxdf) => write!(f, "BxDF {{ {} }}", bxdf),
            BxDF::MicrofacetReflection(bxdf) => write!(f, "BxDF {{ {} }}", bxdf),
            BxDF::MicrofacetTransmission(bxdf) => write!(f, "BxDF {{ {} }}", bxdf),
            BxDF::OrenNayar(bxdf) => write!(f, "BxDF {{ {} }}", bxdf),
            BxDF::SpecularReflection(bxdf) => write!(f, "BxDF {{ {} }}", bxdf),
            BxDF::SpecularTransmission(bxdf) => write!(f, "BxDF {{ {} }}", bxdf),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_flags_requires_subset() {
        let lobe = BxDF::from(LambertianReflection::new(Spectrum::ONE));
        assert!(lobe.matches_flags(BxDFType::BSDF_ALL));
        assert!(lobe.matches_flags(BxDFType::BSDF_REFLECTION | BxDFType::BSDF_DIFFUSE));
        assert!(!lobe.matches_flags(BxDFType::BSDF_REFLECTION));
        assert!(!lobe.matches_flags(BxDFType::BSDF_TRANSMISSION | BxDFType::BSDF_DIFFUSE));
    }

    #[test]
    fn specular_lobes_only_scatter_when_sampled() {
        let wo = Vector3f::new(0.0, 0.6, 0.8);
        let wi = Vector3f::new(0.0, -0.6, 0.8);
        let lobes = [
            BxDF::from(SpecularReflection::new(Spectrum::ONE, FresnelConstant::new(Spectrum::ONE))),
            BxDF::from(SpecularTransmission::new(Spectrum::ONE, 1.0, 1.5, TransportMode::Radiance)),
            BxDF::from(FresnelSpecular::new(
                Spectrum::ONE,
                Spectrum::ONE,
                1.0,
                1.5,
                TransportMode::Radiance,
            )),
        ];
        for lobe in lobes.iter() {
            assert!(lobe.get_type().contains(BxDFType::BSDF_SPECULAR));
            assert!(lobe.f(&wo, &wi).is_black());
            assert_eq!(lobe.pdf(&wo, &wi), 0.0);
        }
    }

    #[test]
    fn display_wraps_lobe() {
        let lobe = BxDF::from(LambertianReflection::new(Spectrum::ONE));
        assert!(lobe.to_string().starts_with("BxDF { LambertianReflection"));
    }
}
