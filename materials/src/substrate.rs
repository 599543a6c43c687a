//! Substrate Material

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

/// Parameters of `SubstrateMaterial`.
#[derive(Clone)]
pub struct SubstrateParams {
    /// Diffuse reflection of the base.
    pub kd: ArcTexture<Spectrum>,

    /// Specular reflection of the coating at normal incidence.
    pub ks: ArcTexture<Spectrum>,

    /// Microfacet roughness in the u direction.
    pub u_roughness: ArcTexture<Float>,

    /// Microfacet roughness in the v direction.
    pub v_roughness: ArcTexture<Float>,

    /// Remap roughness values in [0, 1] to microfacet alpha.
    pub remap_roughness: bool,

    /// Emitted radiance.
    pub emission: ArcTexture<Spectrum>,
}

impl Default for SubstrateParams {
    fn default() -> Self {
        Self {
            kd: ConstantTexture::arc(Spectrum::new(0.5)),
            ks: ConstantTexture::arc(Spectrum::new(0.5)),
            u_roughness: ConstantTexture::arc(0.1),
            v_roughness: ConstantTexture::arc(0.1),
            remap_roughness: true,
            emission: ConstantTexture::arc(Spectrum::ZERO),
        }
    }
}

/// Implements a diffuse base under a glossy coating.
#[derive(Clone)]
pub struct SubstrateMaterial {
    kd: ArcTexture<Spectrum>,
    ks: ArcTexture<Spectrum>,
    u_roughness: ArcTexture<Float>,
    v_roughness: ArcTexture<Float>,
    remap_roughness: bool,
    emission: ArcTexture<Spectrum>,
}

impl SubstrateMaterial {
    /// Create a new `SubstrateMaterial`.
    ///
    /// * `params` - Material parameters.
    pub fn new(params: SubstrateParams) -> Self {
        Self {
            kd: params.kd,
            ks: params.ks,
            u_roughness: params.u_roughness,
            v_roughness: params.v_roughness,
            remap_roughness: params.remap_roughness,
            emission: params.emission,
        }
    }
}

impl SurfaceMaterial for SubstrateMaterial {
    fn compute_bsdf(
        &self,
        si: &SurfaceInteraction,
        _mode: TransportMode,
        _allow_multiple_lobes: bool,
    ) -> Option<BSDF> {
        let d = self.kd.evaluate(si).clamp_default();
        let s = self.ks.evaluate(si).clamp_default();
        if d.is_black() && s.is_black() {
            return None;
        }

        let u_rough = roughness_alpha(
            self.u_roughness.evaluate(si).clamp_default(),
            self.remap_roughness,
        );
        let v_rough = roughness_alpha(
            self.v_roughness.evaluate(si).clamp_default(),
            self.remap_roughness,
        );
        let distribution = TrowbridgeReitzDistribution::new(u_rough, v_rough, true).into();
        BSDF::new(si, None, vec![FresnelBlend::new(d, s, distribution).into()])
    }

    fn emission(&self) -> &ArcTexture<Spectrum> {
        &self.emission
    }

    fn textures(&self) -> Vec<TextureNode> {
        vec![
            TextureNode::spectrum("Kd", &self.kd),
            TextureNode::spectrum("Ks", &self.ks),
            TextureNode::float("uroughness", &self.u_roughness),
            TextureNode::float("vroughness", &self.v_roughness),
        ]
    }
}

impl TryFrom<&TextureParams> for SubstrateMaterial {
    type Error = MaterialError;

    /// Create a substrate material from given parameter set.
    ///
    /// * `tp` - Texture parameter set.
    fn try_from(tp: &TextureParams) -> Result<Self, Self::Error> {
        Ok(Self::new(SubstrateParams {
            kd: tp.get_spectrum_texture_or_else("Kd", Spectrum::new(0.5), ConstantTexture::arc)?,
            ks: tp.get_spectrum_texture_or_else("Ks", Spectrum::new(0.5), ConstantTexture::arc)?,
            u_roughness: tp.get_float_texture_or_else("uroughness", 0.1, ConstantTexture::arc)?,
            v_roughness: tp.get_float_texture_or_else("vroughness", 0.1, ConstantTexture::arc)?,
            remap_roughness: tp.find_bool("remaproughness", true),
            emission: tp.get_spectrum_texture_or_else(
                "emission",
                Spectrum::ZERO,
                ConstantTexture::arc,
            )?,
        }))
    }
}
