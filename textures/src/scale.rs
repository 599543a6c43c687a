//! Scale Texture

use super::*;
use shading::interaction::*;
use shading::material::MaterialError;
use shading::paramset::*;
use shading::pbrt::*;
use shading::spectrum::*;
use shading::texture::*;
use std::convert::TryFrom;
use std::ops::Mul;

/// Implements a texture that returns the product of 2 textures.
#[derive(Clone)]
pub struct ScaleTexture<T> {
    /// First texture.
    tex1: ArcTexture<T>,

    /// Second texture.
    tex2: ArcTexture<T>,
}

impl<T> ScaleTexture<T> {
    /// Create a new `ScaleTexture`.
    ///
    /// * `tex1` - The first texture.
    /// * `tex2` - The second texture.
    pub fn new(tex1: ArcTexture<T>, tex2: ArcTexture<T>) -> Self {
        Self { tex1, tex2 }
    }
}

impl<T> Texture<T> for ScaleTexture<T>
where
    T: TextureValue + Mul<Output = T>,
{
    /// Evaluate the texture at surface interaction.
    ///
    /// * `si` - Surface interaction.
    fn evaluate(&self, si: &SurfaceInteraction) -> T {
        self.tex1.evaluate(si) * self.tex2.evaluate(si)
    }

    /// Returns the two factors.
    fn children(&self) -> Vec<TextureNode> {
        vec![T::node("tex1", &self.tex1), T::node("tex2", &self.tex2)]
    }
}

macro_rules! from_params {
    ($t: ty, $get_texture_or_else_func: ident) => {
        impl TryFrom<&TextureParams> for ScaleTexture<$t> {
            type Error = MaterialError;

            /// Create a `ScaleTexture<$t>` from given parameter set.
            ///
            /// * `tp` - Texture parameters.
            fn try_from(tp: &TextureParams) -> Result<Self, Self::Error> {
                let tex1 = tp.$get_texture_or_else_func(
                    "tex1",
                    <$t>::from(1.0),
                    ConstantTexture::arc,
                )?;
                let tex2 = tp.$get_texture_or_else_func(
                    "tex2",
                    <$t>::from(1.0),
                    ConstantTexture::arc,
                )?;
                Ok(Self::new(tex1, tex2))
            }
        }
    };
}
from_params!(Float, get_float_texture_or_else);
from_params!(Spectrum, get_spectrum_texture_or_else);
