//! Uber Material

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

/// Parameters of `UberMaterial`.
#[derive(Clone)]
pub struct UberParams {
    /// Diffuse reflection.
    pub kd: ArcTexture<Spectrum>,

    /// Glossy reflection.
    pub ks: ArcTexture<Spectrum>,

    /// Specular reflection.
    pub kr: ArcTexture<Spectrum>,

    /// Specular transmission.
    pub kt: ArcTexture<Spectrum>,

    /// Isotropic roughness used when `u_roughness`/`v_roughness` are absent.
    pub roughness: ArcTexture<Float>,

    /// Optional roughness in the u direction.
    pub u_roughness: Option<ArcTexture<Float>>,

    /// Optional roughness in the v direction.
    pub v_roughness: Option<ArcTexture<Float>>,

    /// Index of refraction.
    pub eta: ArcTexture<Float>,

    /// Coverage of the surface. Where it is less than one the remainder
    /// passes straight through.
    pub opacity: ArcTexture<Spectrum>,

    /// Remap roughness values in [0, 1] to microfacet alpha.
    pub remap_roughness: bool,

    /// Emitted radiance.
    pub emission: ArcTexture<Spectrum>,
}

impl Default for UberParams {
    fn default() -> Self {
        Self {
            kd: ConstantTexture::arc(Spectrum::new(0.25)),
            ks: ConstantTexture::arc(Spectrum::new(0.25)),
            kr: ConstantTexture::arc(Spectrum::ZERO),
            kt: ConstantTexture::arc(Spectrum::ZERO),
            roughness: ConstantTexture::arc(0.1),
            u_roughness: None,
            v_roughness: None,
            eta: ConstantTexture::arc(1.5),
            opacity: ConstantTexture::arc(Spectrum::ONE),
            remap_roughness: true,
            emission: ConstantTexture::arc(Spectrum::ZERO),
        }
    }
}

/// Implements a catch-all material combining diffuse, glossy, specular and
/// transmissive scattering with partial coverage.
#[derive(Clone)]
pub struct UberMaterial {
    kd: ArcTexture<Spectrum>,
    ks: ArcTexture<Spectrum>,
    kr: ArcTexture<Spectrum>,
    kt: ArcTexture<Spectrum>,
    roughness: ArcTexture<Float>,
    u_roughness: Option<ArcTexture<Float>>,
    v_roughness: Option<ArcTexture<Float>>,
    eta: ArcTexture<Float>,
    opacity: ArcTexture<Spectrum>,
    remap_roughness: bool,
    emission: ArcTexture<Spectrum>,
}

impl UberMaterial {
    /// Create a new `UberMaterial`.
    ///
    /// * `params` - Material parameters.
    pub fn new(params: UberParams) -> Self {
        Self {
            kd: params.kd,
            ks: params.ks,
            kr: params.kr,
            kt: params.kt,
            roughness: params.roughness,
            u_roughness: params.u_roughness,
            v_roughness: params.v_roughness,
            eta: params.eta,
            opacity: params.opacity,
            remap_roughness: params.remap_roughness,
            emission: params.emission,
        }
    }
}

impl SurfaceMaterial for UberMaterial {
    /// Returns up to five lobes: pass-through, diffuse, glossy, specular
    /// reflection and specular transmission, in that order.
    ///
    /// * `si`                    - The surface interaction at the intersection.
    /// * `mode`                  - Transport mode.
    /// * `_allow_multiple_lobes` - Ignored.
    fn compute_bsdf(
        &self,
        si: &SurfaceInteraction,
        mode: TransportMode,
        _allow_multiple_lobes: bool,
    ) -> Option<BSDF> {
        let e = sanitize_eta(self.eta.evaluate(si));
        let op = self.opacity.evaluate(si).clamp_default();
        let t = (Spectrum::ONE - op).clamp_default();

        let mut bxdfs: Vec<BxDF> = Vec::with_capacity(5);
        let eta = if t.is_black() {
            e
        } else {
            bxdfs.push(SpecularTransmission::new(t, 1.0, 1.0, mode).into());
            1.0
        };

        let kd = op * self.kd.evaluate(si).clamp_default();
        if !kd.is_black() {
            bxdfs.push(LambertianReflection::new(kd).into());
        }

        let ks = op * self.ks.evaluate(si).clamp_default();
        if !ks.is_black() {
            let u_rough = self.u_roughness.as_ref().unwrap_or(&self.roughness).evaluate(si);
            let v_rough = self.v_roughness.as_ref().unwrap_or(&self.roughness).evaluate(si);
            let distribution = TrowbridgeReitzDistribution::new(
                roughness_alpha(u_rough.clamp_default(), self.remap_roughness),
                roughness_alpha(v_rough.clamp_default(), self.remap_roughness),
                true,
            )
            .into();
            let fresnel = FresnelDielectric::new(1.0, e);
            bxdfs.push(MicrofacetReflection::new(ks, distribution, fresnel).into());
        }

        let kr = op * self.kr.evaluate(si).clamp_default();
        if !kr.is_black() {
            let fresnel = FresnelDielectric::new(1.0, e);
            bxdfs.push(SpecularReflection::new(kr, fresnel).into());
        }

        let kt = op * self.kt.evaluate(si).clamp_default();
        if !kt.is_black() {
            bxdfs.push(SpecularTransmission::new(kt, 1.0, e, mode).into());
        }

        BSDF::new(si, Some(eta), bxdfs)
    }

    fn emission(&self) -> &ArcTexture<Spectrum> {
        &self.emission
    }

    fn textures(&self) -> Vec<TextureNode> {
        let mut nodes = vec![
            TextureNode::spectrum("Kd", &self.kd),
            TextureNode::spectrum("Ks", &self.ks),
            TextureNode::spectrum("Kr", &self.kr),
            TextureNode::spectrum("Kt", &self.kt),
            TextureNode::float("roughness", &self.roughness),
        ];
        if let Some(t) = &self.u_roughness {
            nodes.push(TextureNode::float("uroughness", t));
        }
        if let Some(t) = &self.v_roughness {
            nodes.push(TextureNode::float("vroughness", t));
        }
        nodes.push(TextureNode::float("eta", &self.eta));
        nodes.push(TextureNode::spectrum("opacity", &self.opacity));
        nodes
    }
}

impl TryFrom<&TextureParams> for UberMaterial {
    type Error = MaterialError;

    /// Create an uber material from given parameter set.
    ///
    /// * `tp` - Texture parameter set.
    fn try_from(tp: &TextureParams) -> Result<Self, Self::Error> {
        let eta = match tp.get_float_texture_or_none("eta", ConstantTexture::arc)? {
            Some(tex) => tex,
            None => tp.get_float_texture_or_else("index", 1.5, ConstantTexture::arc)?,
        };

        Ok(Self::new(UberParams {
            kd: tp.get_spectrum_texture_or_else("Kd", Spectrum::new(0.25), ConstantTexture::arc)?,
            ks: tp.get_spectrum_texture_or_else("Ks", Spectrum::new(0.25), ConstantTexture::arc)?,
            kr: tp.get_spectrum_texture_or_else("Kr", Spectrum::ZERO, ConstantTexture::arc)?,
            kt: tp.get_spectrum_texture_or_else("Kt", Spectrum::ZERO, ConstantTexture::arc)?,
            roughness: tp.get_float_texture_or_else("roughness", 0.1, ConstantTexture::arc)?,
            u_roughness: tp.get_float_texture_or_none("uroughness", ConstantTexture::arc)?,
            v_roughness: tp.get_float_texture_or_none("vroughness", ConstantTexture::arc)?,
            eta,
            opacity: tp.get_spectrum_texture_or_else(
                "opacity",
                Spectrum::ONE,
                ConstantTexture::arc,
            )?,
            remap_roughness: tp.find_bool("remaproughness", true),
            emission: tp.get_spectrum_texture_or_else(
                "emission",
                Spectrum::ZERO,
                ConstantTexture::arc,
            )?,
        }))
    }
}
