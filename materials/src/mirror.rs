//! Mirror Material

use crate::material::*;
use shading::interaction::*;
use shading::material::*;
use shading::paramset::*;
use shading::pbrt::*;
use shading::reflection::*;
use shading::spectrum::*;
use shading::texture::*;
use std::convert::TryFrom;
use textures::*;

/// Parameters of `MirrorMaterial`.
#[derive(Clone)]
pub struct MirrorParams {
    /// Spectral reflection scale.
    pub kr: ArcTexture<Spectrum>,

    /// Emitted radiance.
    pub emission: ArcTexture<Spectrum>,
}

impl Default for MirrorParams {
    fn default() -> Self {
        Self {
            kr: ConstantTexture::arc(Spectrum::new(0.9)),
            emission: ConstantTexture::arc(Spectrum::ZERO),
        }
    }
}

/// Implements a perfect specular mirror.
#[derive(Clone)]
pub struct MirrorMaterial {
    /// Spectral reflection scale.
    kr: ArcTexture<Spectrum>,

    /// Emitted radiance.
    emission: ArcTexture<Spectrum>,
}

impl MirrorMaterial {
    /// Create a new `MirrorMaterial`.
    ///
    /// * `params` - Material parameters.
    pub fn new(params: MirrorParams) -> Self {
        Self {
            kr: params.kr,
            emission: params.emission,
        }
    }
}

impl SurfaceMaterial for MirrorMaterial {
    fn compute_bsdf(
        &self,
        si: &SurfaceInteraction,
        _mode: TransportMode,
        _allow_multiple_lobes: bool,
    ) -> Option<BSDF> {
        let r = self.kr.evaluate(si).clamp_default();
        if r.is_black() {
            return None;
        }
        let fresnel = FresnelConstant::new(Spectrum::ONE);
        BSDF::new(si, None, vec![SpecularReflection::new(r, fresnel).into()])
    }

    fn emission(&self) -> &ArcTexture<Spectrum> {
        &self.emission
    }

    fn textures(&self) -> Vec<TextureNode> {
        vec![TextureNode::spectrum("Kr", &self.kr)]
    }
}

impl TryFrom<&TextureParams> for MirrorMaterial {
    type Error = MaterialError;

    /// Create a mirror material from given parameter set.
    ///
    /// * `tp` - Texture parameter set.
    fn try_from(tp: &TextureParams) -> Result<Self, Self::Error> {
        let kr = tp.get_spectrum_texture_or_else("Kr", Spectrum::new(0.9), ConstantTexture::arc)?;
        let emission =
            tp.get_spectrum_texture_or_else("emission", Spectrum::ZERO, ConstantTexture::arc)?;
        Ok(Self::new(MirrorParams { kr, emission }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;
    use shading::geometry::{Point2f, Vector3f};

    #[test]
    fn single_specular_reflection() {
        let bsdf = MirrorMaterial::new(MirrorParams::default())
            .compute_bsdf(&interaction(0.5, 0.5), TransportMode::Radiance, true)
            .unwrap();
        assert_eq!(
            lobe_types(&bsdf),
            vec![BxDFType::BSDF_REFLECTION | BxDFType::BSDF_SPECULAR]
        );
        match bsdf.bxdfs() {
            [BxDF::SpecularReflection(s)] => {
                assert_eq!(s.r(), Spectrum::new(0.9));
                assert_eq!(*s.fresnel(), FresnelConstant::new(Spectrum::ONE));
            }
            other => panic!("unexpected lobes {:?}", other),
        }
    }

    #[test]
    fn reflects_about_the_normal() {
        let bsdf = MirrorMaterial::new(MirrorParams {
            kr: spectrum_tex(1.0),
            ..MirrorParams::default()
        })
        .compute_bsdf(&interaction(0.5, 0.5), TransportMode::Radiance, true)
        .unwrap();
        let wo = Vector3f::new(0.6, 0.0, 0.8);
        let s = bsdf.sample_f(&wo, &Point2f::new(0.5, 0.5), BxDFType::BSDF_ALL);
        assert!((s.wi.x + 0.6).abs() < 1e-5);
        assert!((s.wi.z - 0.8).abs() < 1e-5);
        assert_eq!(s.pdf, 1.0);
    }

    #[test]
    fn black_is_no_bsdf() {
        let m = MirrorMaterial::new(MirrorParams {
            kr: spectrum_tex(0.0),
            ..MirrorParams::default()
        });
        assert!(m
            .compute_bsdf(&interaction(0.5, 0.5), TransportMode::Importance, false)
            .is_none());
    }
}
