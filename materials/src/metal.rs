//! Metal Material

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

/// Index of refraction of copper.
pub const COPPER_ETA: Spectrum = Spectrum::from_rgb([0.200438, 0.924033, 1.10221]);

/// Absorption coefficient of copper.
pub const COPPER_K: Spectrum = Spectrum::from_rgb([3.91295, 2.45285, 2.14219]);

/// Parameters of `MetalMaterial`.
#[derive(Clone)]
pub struct MetalParams {
    /// Index of refraction of the conductor.
    pub eta: ArcTexture<Spectrum>,

    /// Absorption coefficient of the conductor.
    pub k: ArcTexture<Spectrum>,

    /// Isotropic roughness used when `u_roughness`/`v_roughness` are absent.
    pub roughness: ArcTexture<Float>,

    /// Optional roughness in the u direction.
    pub u_roughness: Option<ArcTexture<Float>>,

    /// Optional roughness in the v direction.
    pub v_roughness: Option<ArcTexture<Float>>,

    /// Remap roughness values in [0, 1] to microfacet alpha.
    pub remap_roughness: bool,

    /// Emitted radiance.
    pub emission: ArcTexture<Spectrum>,
}

impl Default for MetalParams {
    fn default() -> Self {
        Self {
            eta: ConstantTexture::arc(COPPER_ETA),
            k: ConstantTexture::arc(COPPER_K),
            roughness: ConstantTexture::arc(0.01),
            u_roughness: None,
            v_roughness: None,
            remap_roughness: true,
            emission: ConstantTexture::arc(Spectrum::ZERO),
        }
    }
}

/// Implements rough conductors.
#[derive(Clone)]
pub struct MetalMaterial {
    eta: ArcTexture<Spectrum>,
    k: ArcTexture<Spectrum>,
    roughness: ArcTexture<Float>,
    u_roughness: Option<ArcTexture<Float>>,
    v_roughness: Option<ArcTexture<Float>>,
    remap_roughness: bool,
    emission: ArcTexture<Spectrum>,
}

impl MetalMaterial {
    /// Create a new `MetalMaterial`.
    ///
    /// * `params` - Material parameters.
    pub fn new(params: MetalParams) -> Self {
        Self {
            eta: params.eta,
            k: params.k,
            roughness: params.roughness,
            u_roughness: params.u_roughness,
            v_roughness: params.v_roughness,
            remap_roughness: params.remap_roughness,
            emission: params.emission,
        }
    }
}

impl SurfaceMaterial for MetalMaterial {
    /// Always returns exactly one microfacet reflection lobe.
    ///
    /// * `si`                    - The surface interaction at the intersection.
    /// * `_mode`                 - Transport mode (ignored).
    /// * `_allow_multiple_lobes` - Ignored.
    fn compute_bsdf(
        &self,
        si: &SurfaceInteraction,
        _mode: TransportMode,
        _allow_multiple_lobes: bool,
    ) -> Option<BSDF> {
        let u_rough = self.u_roughness.as_ref().unwrap_or(&self.roughness).evaluate(si);
        let v_rough = self.v_roughness.as_ref().unwrap_or(&self.roughness).evaluate(si);
        let u_rough = roughness_alpha(u_rough.clamp_default(), self.remap_roughness);
        let v_rough = roughness_alpha(v_rough.clamp_default(), self.remap_roughness);

        let fresnel = FresnelConductor::new(
            Spectrum::ONE,
            self.eta.evaluate(si).clamp_default(),
            self.k.evaluate(si).clamp_default(),
        );
        let distribution = TrowbridgeReitzDistribution::new(u_rough, v_rough, true).into();
        BSDF::new(
            si,
            None,
            vec![MicrofacetReflection::new(Spectrum::ONE, distribution, fresnel).into()],
        )
    }

    fn emission(&self) -> &ArcTexture<Spectrum> {
        &self.emission
    }

    fn textures(&self) -> Vec<TextureNode> {
        let mut nodes = vec![
            TextureNode::spectrum("eta", &self.eta),
            TextureNode::spectrum("k", &self.k),
            TextureNode::float("roughness", &self.roughness),
        ];
        if let Some(t) = &self.u_roughness {
            nodes.push(TextureNode::float("uroughness", t));
        }
        if let Some(t) = &self.v_roughness {
            nodes.push(TextureNode::float("vroughness", t));
        }
        nodes
    }
}

impl TryFrom<&TextureParams> for MetalMaterial {
    type Error = MaterialError;

    /// Create a metal material from given parameter set.
    ///
    /// * `tp` - Texture parameter set.
    fn try_from(tp: &TextureParams) -> Result<Self, Self::Error> {
        Ok(Self::new(MetalParams {
            eta: tp.get_spectrum_texture_or_else("eta", COPPER_ETA, ConstantTexture::arc)?,
            k: tp.get_spectrum_texture_or_else("k", COPPER_K, ConstantTexture::arc)?,
            roughness: tp.get_float_texture_or_else("roughness", 0.01, ConstantTexture::arc)?,
            u_roughness: tp.get_float_texture_or_none("uroughness", ConstantTexture::arc)?,
            v_roughness: tp.get_float_texture_or_none("vroughness", ConstantTexture::arc)?,
            remap_roughness: tp.find_bool("remaproughness", true),
            emission: tp.get_spectrum_texture_or_else(
                "emission",
                Spectrum::ZERO,
                ConstantTexture::arc,
            )?,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;
    use proptest::prelude::*;
    use shading::paramset::ParamSet;
    use std::collections::HashMap;

    fn glossy_reflection() -> BxDFType {
        BxDFType::BSDF_REFLECTION | BxDFType::BSDF_GLOSSY
    }

    #[test]
    fn one_glossy_reflection_lobe() {
        let bsdf = MetalMaterial::new(MetalParams::default())
            .compute_bsdf(&interaction(0.5, 0.5), TransportMode::Radiance, true)
            .unwrap();
        assert_eq!(lobe_types(&bsdf), vec![glossy_reflection()]);
        match bsdf.bxdfs() {
            [BxDF::MicrofacetReflection(m)] => {
                assert_eq!(m.r(), Spectrum::ONE);
                assert_eq!(
                    *m.fresnel(),
                    FresnelConductor::new(Spectrum::ONE, COPPER_ETA, COPPER_K)
                );
                assert_eq!(m.distribution().alpha_x(), MIN_ALPHA);
            }
            other => panic!("unexpected lobes {:?}", other),
        }
    }

    #[test]
    fn anisotropic_roughness_overrides_roughness() {
        let m = MetalMaterial::new(MetalParams {
            u_roughness: Some(float_tex(0.5)),
            v_roughness: Some(float_tex(0.1)),
            remap_roughness: false,
            ..MetalParams::default()
        });
        let bsdf = m
            .compute_bsdf(&interaction(0.5, 0.5), TransportMode::Radiance, true)
            .unwrap();
        match bsdf.bxdfs() {
            [BxDF::MicrofacetReflection(m)] => {
                assert_eq!(m.distribution().alpha_x(), 0.5);
                assert_eq!(m.distribution().alpha_y(), 0.1);
            }
            other => panic!("unexpected lobes {:?}", other),
        }
    }

    #[test]
    fn from_params_reads_uroughness() {
        let mut mat = ParamSet::new();
        mat.add_float("uroughness", &[0.5]);
        mat.add_bool("remaproughness", &[true]);
        let tp = TextureParams::new(ParamSet::new(), mat, HashMap::new(), HashMap::new());
        let bsdf = MetalMaterial::try_from(&tp)
            .unwrap()
            .compute_bsdf(&interaction(0.5, 0.5), TransportMode::Radiance, true)
            .unwrap();
        match bsdf.bxdfs() {
            [BxDF::MicrofacetReflection(m)] => {
                assert!((m.distribution().alpha_x() - 0.25).abs() < 1e-6);
                assert_eq!(m.distribution().alpha_y(), MIN_ALPHA);
            }
            other => panic!("unexpected lobes {:?}", other),
        }
    }

    proptest! {
        #[test]
        fn never_transmits(
            eta in 0.0..4.0f32,
            k in 0.0..5.0f32,
            rough in 0.0..1.0f32,
            remap in proptest::bool::ANY,
        ) {
            let m = MetalMaterial::new(MetalParams {
                eta: spectrum_tex(eta),
                k: spectrum_tex(k),
                roughness: float_tex(rough),
                remap_roughness: remap,
                ..MetalParams::default()
            });
            let bsdf = m.compute_bsdf(&interaction(0.5, 0.5), TransportMode::Radiance, true);
            prop_assert!(bsdf.is_some());
            let bsdf = bsdf.unwrap();
            prop_assert_eq!(lobe_types(&bsdf), vec![glossy_reflection()]);
            prop_assert_eq!(bsdf.num_components(BxDFType::BSDF_TRANSMISSION | BxDFType::BSDF_DIFFUSE
                | BxDFType::BSDF_GLOSSY | BxDFType::BSDF_SPECULAR), 0);
        }
    }
}
