//! Plastic Material

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

/// Parameters of `PlasticMaterial`.
#[derive(Clone)]
pub struct PlasticParams {
    /// Diffuse reflection.
    pub kd: ArcTexture<Spectrum>,

    /// Glossy specular reflection.
    pub ks: ArcTexture<Spectrum>,

    /// Roughness of the specular highlight.
    pub roughness: ArcTexture<Float>,

    /// Remap roughness values in [0, 1] to microfacet alpha.
    pub remap_roughness: bool,

    /// Emitted radiance.
    pub emission: ArcTexture<Spectrum>,
}

impl Default for PlasticParams {
    fn default() -> Self {
        Self {
            kd: ConstantTexture::arc(Spectrum::new(0.25)),
            ks: ConstantTexture::arc(Spectrum::new(0.25)),
            roughness: ConstantTexture::arc(0.1),
            remap_roughness: true,
            emission: ConstantTexture::arc(Spectrum::ZERO),
        }
    }
}

/// Implements plastic as a mixture of a diffuse and glossy scattering
/// function.
#[derive(Clone)]
pub struct PlasticMaterial {
    kd: ArcTexture<Spectrum>,
    ks: ArcTexture<Spectrum>,
    roughness: ArcTexture<Float>,
    remap_roughness: bool,
    emission: ArcTexture<Spectrum>,
}

impl PlasticMaterial {
    /// Create a new `PlasticMaterial`.
    ///
    /// * `params` - Material parameters.
    pub fn new(params: PlasticParams) -> Self {
        Self {
            kd: params.kd,
            ks: params.ks,
            roughness: params.roughness,
            remap_roughness: params.remap_roughness,
            emission: params.emission,
        }
    }
}

impl SurfaceMaterial for PlasticMaterial {
    fn compute_bsdf(
        &self,
        si: &SurfaceInteraction,
        _mode: TransportMode,
        _allow_multiple_lobes: bool,
    ) -> Option<BSDF> {
        let mut bxdfs: Vec<BxDF> = Vec::with_capacity(2);

        // Diffuse component.
        let kd = self.kd.evaluate(si).clamp_default();
        if !kd.is_black() {
            bxdfs.push(LambertianReflection::new(kd).into());
        }

        // Glossy specular component.
        let ks = self.ks.evaluate(si).clamp_default();
        if !ks.is_black() {
            let fresnel = FresnelDielectric::new(1.5, 1.0);
            let rough = roughness_alpha(
                self.roughness.evaluate(si).clamp_default(),
                self.remap_roughness,
            );
            let distribution = TrowbridgeReitzDistribution::new(rough, rough, true).into();
            bxdfs.push(MicrofacetReflection::new(ks, distribution, fresnel).into());
        }

        BSDF::new(si, None, bxdfs)
    }

    fn emission(&self) -> &ArcTexture<Spectrum> {
        &self.emission
    }

    fn textures(&self) -> Vec<TextureNode> {
        vec![
            TextureNode::spectrum("Kd", &self.kd),
            TextureNode::spectrum("Ks", &self.ks),
            TextureNode::float("roughness", &self.roughness),
        ]
    }
}

impl TryFrom<&TextureParams> for PlasticMaterial {
    type Error = MaterialError;

    /// Create a plastic material from given parameter set.
    ///
    /// * `tp` - Texture parameter set.
    fn try_from(tp: &TextureParams) -> Result<Self, Self::Error> {
        Ok(Self::new(PlasticParams {
            kd: tp.get_spectrum_texture_or_else("Kd", Spectrum::new(0.25), ConstantTexture::arc)?,
            ks: tp.get_spectrum_texture_or_else("Ks", Spectrum::new(0.25), ConstantTexture::arc)?,
            roughness: tp.get_float_texture_or_else("roughness", 0.1, ConstantTexture::arc)?,
            remap_roughness: tp.find_bool("remaproughness", true),
            emission: tp.get_spectrum_texture_or_else(
                "emission",
                Spectrum::ZERO,
                ConstantTexture::arc,
            )?,
        }))
    }
}
