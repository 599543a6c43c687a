//! Glass Material

use crate::material::*;
use shading::interaction::*;
use shading::material::*;
use shading::microfacet::*;
use shading::paramset::*;
use shading::pbrt::*;
use shading::reflection::*;
use shading::spectrum::*;
use shading::texture::*;
use std::convert::TryFrom;
use textures::*;

/// Parameters of `GlassMaterial`.
#[derive(Clone)]
pub struct GlassParams {
    /// Reflectivity of the surface.
    pub kr: ArcTexture<Spectrum>,

    /// Transmissivity of the surface.
    pub kt: ArcTexture<Spectrum>,

    /// Microfacet roughness in the u direction. If both roughnesses are zero,
    /// perfect specular scattering is modeled.
    pub u_roughness: ArcTexture<Float>,

    /// Microfacet roughness in the v direction.
    pub v_roughness: ArcTexture<Float>,

    /// The index of refraction of the inside of the object. The exterior is
    /// assumed to be a vacuum.
    pub eta: ArcTexture<Float>,

    /// Remap roughness values in [0, 1] to microfacet alpha.
    pub remap_roughness: bool,

    /// Emitted radiance.
    pub emission: ArcTexture<Spectrum>,
}

impl Default for GlassParams {
    fn default() -> Self {
        Self {
            kr: ConstantTexture::arc(Spectrum::ONE),
            kt: ConstantTexture::arc(Spectrum::ONE),
            u_roughness: ConstantTexture::arc(0.0),
            v_roughness: ConstantTexture::arc(0.0),
            eta: ConstantTexture::arc(1.5),
            remap_roughness: true,
            emission: ConstantTexture::arc(Spectrum::ZERO),
        }
    }
}

/// Implements perfect or glossy specular reflection and transmission,
/// weighted by Fresnel terms for accurate angular-dependent variation.
#[derive(Clone)]
pub struct GlassMaterial {
    kr: ArcTexture<Spectrum>,
    kt: ArcTexture<Spectrum>,
    u_roughness: ArcTexture<Float>,
    v_roughness: ArcTexture<Float>,
    eta: ArcTexture<Float>,
    remap_roughness: bool,
    emission: ArcTexture<Spectrum>,
}

impl GlassMaterial {
    /// Create a new `GlassMaterial`.
    ///
    /// * `params` - Material parameters.
    pub fn new(params: GlassParams) -> Self {
        Self {
            kr: params.kr,
            kt: params.kt,
            u_roughness: params.u_roughness,
            v_roughness: params.v_roughness,
            eta: params.eta,
            remap_roughness: params.remap_roughness,
            emission: params.emission,
        }
    }
}

impl SurfaceMaterial for GlassMaterial {
    /// Returns a Fresnel weighted specular or microfacet dielectric.
    ///
    /// * `si`                   - The surface interaction at the intersection.
    /// * `mode`                 - Transport mode.
    /// * `allow_multiple_lobes` - Use a single `FresnelSpecular` lobe for
    ///                            smooth glass.
    fn compute_bsdf(
        &self,
        si: &SurfaceInteraction,
        mode: TransportMode,
        allow_multiple_lobes: bool,
    ) -> Option<BSDF> {
        let r = self.kr.evaluate(si).clamp_default();
        let t = self.kt.evaluate(si).clamp_default();
        if r.is_black() && t.is_black() {
            return None;
        }

        let eta = sanitize_eta(self.eta.evaluate(si));
        let u_rough = self.u_roughness.evaluate(si).clamp_default();
        let v_rough = self.v_roughness.evaluate(si).clamp_default();
        let is_specular = u_rough == 0.0 && v_rough == 0.0;

        let mut bxdfs: Vec<BxDF> = Vec::with_capacity(2);
        if is_specular && allow_multiple_lobes {
            bxdfs.push(FresnelSpecular::new(r, t, 1.0, eta, mode).into());
        } else if is_specular {
            if !r.is_black() {
                let fresnel = FresnelDielectric::new(1.0, eta);
                bxdfs.push(SpecularReflection::new(r, fresnel).into());
            }
            if !t.is_black() {
                bxdfs.push(SpecularTransmission::new(t, 1.0, eta, mode).into());
            }
        } else {
            let distribution: MicrofacetDistribution = TrowbridgeReitzDistribution::new(
                roughness_alpha(u_rough, self.remap_roughness),
                roughness_alpha(v_rough, self.remap_roughness),
                true,
            )
            .into();
            if !r.is_black() {
                let fresnel = FresnelDielectric::new(1.0, eta);
                bxdfs.push(MicrofacetReflection::new(r, distribution, fresnel).into());
            }
            if !t.is_black() {
                bxdfs.push(MicrofacetTransmission::new(t, distribution, 1.0, eta, mode).into());
            }
        }

        BSDF::new(si, Some(eta), bxdfs)
    }

    fn emission(&self) -> &ArcTexture<Spectrum> {
        &self.emission
    }

    fn textures(&self) -> Vec<TextureNode> {
        vec![
            TextureNode::spectrum("Kr", &self.kr),
            TextureNode::spectrum("Kt", &self.kt),
            TextureNode::float("uroughness", &self.u_roughness),
            TextureNode::float("vroughness", &self.v_roughness),
            TextureNode::float("eta", &self.eta),
        ]
    }
}

impl TryFrom<&TextureParams> for GlassMaterial {
    type Error = MaterialError;

    /// Create a glass material from given parameter set.
    ///
    /// * `tp` - Texture parameter set.
    fn try_from(tp: &TextureParams) -> Result<Self, Self::Error> {
        let eta = match tp.get_float_texture_or_none("eta", ConstantTexture::arc)? {
            Some(tex) => tex,
            None => tp.get_float_texture_or_else("index", 1.5, ConstantTexture::arc)?,
        };

        Ok(Self::new(GlassParams {
            kr: tp.get_spectrum_texture_or_else("Kr", Spectrum::ONE, ConstantTexture::arc)?,
            kt: tp.get_spectrum_texture_or_else("Kt", Spectrum::ONE, ConstantTexture::arc)?,
            u_roughness: tp.get_float_texture_or_else("uroughness", 0.0, ConstantTexture::arc)?,
            v_roughness: tp.get_float_texture_or_else("vroughness", 0.0, ConstantTexture::arc)?,
            eta,
            remap_roughness: tp.find_bool("remaproughness", true),
            emission: tp.get_spectrum_texture_or_else(
                "emission",
                Spectrum::ZERO,
                ConstantTexture::arc,
            )?,
        }))
    }
}
