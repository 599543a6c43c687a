//! Matte Material

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

/// Parameters of `MatteMaterial`.
#[derive(Clone)]
pub struct MatteParams {
    /// Spectral diffuse reflection.
    pub kd: ArcTexture<Spectrum>,

    /// Standard deviation of the microfacet angle in degrees. Zero selects the
    /// Lambertian model.
    pub sigma: ArcTexture<Float>,

    /// Emitted radiance.
    pub emission: ArcTexture<Spectrum>,
}

impl Default for MatteParams {
    fn default() -> Self {
        Self {
            kd: ConstantTexture::arc(Spectrum::new(0.5)),
            sigma: ConstantTexture::arc(0.0),
            emission: ConstantTexture::arc(Spectrum::ZERO),
        }
    }
}

/// Implements purely diffuse surfaces.
#[derive(Clone)]
pub struct MatteMaterial {
    /// Spectral diffuse reflection.
    kd: ArcTexture<Spectrum>,

    /// Roughness angle in degrees.
    sigma: ArcTexture<Float>,

    /// Emitted radiance.
    emission: ArcTexture<Spectrum>,
}

impl MatteMaterial {
    /// Create a new `MatteMaterial`.
    ///
    /// * `params` - Material parameters.
    pub fn new(params: MatteParams) -> Self {
        Self {
            kd: params.kd,
            sigma: params.sigma,
            emission: params.emission,
        }
    }
}

impl SurfaceMaterial for MatteMaterial {
    /// Returns a single Lambertian or Oren-Nayar lobe.
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
        let r = self.kd.evaluate(si).clamp_default();
        if r.is_black() {
            return None;
        }

        let sig = clamp(self.sigma.evaluate(si).clamp_default(), 0.0, 90.0);
        let bxdf: BxDF = if sig == 0.0 {
            LambertianReflection::new(r).into()
        } else {
            OrenNayar::new(r, sig).into()
        };
        BSDF::new(si, None, vec![bxdf])
    }

    fn emission(&self) -> &ArcTexture<Spectrum> {
        &self.emission
    }

    fn textures(&self) -> Vec<TextureNode> {
        vec![
            TextureNode::spectrum("Kd", &self.kd),
            TextureNode::float("sigma", &self.sigma),
        ]
    }
}

impl TryFrom<&TextureParams> for MatteMaterial {
    type Error = MaterialError;

    /// Create a matte material from given parameter set.
    ///
    /// * `tp` - Texture parameter set.
    fn try_from(tp: &TextureParams) -> Result<Self, Self::Error> {
        let kd = tp.get_spectrum_texture_or_else("Kd", Spectrum::new(0.5), ConstantTexture::arc)?;
        let sigma = tp.get_float_texture_or_else("sigma", 0.0, ConstantTexture::arc)?;
        let emission =
            tp.get_spectrum_texture_or_else("emission", Spectrum::ZERO, ConstantTexture::arc)?;
        Ok(Self::new(MatteParams {
            kd,
            sigma,
            emission,
        }))
    }
}
