//! Mix Texture

use super::*;
use shading::interaction::*;
use shading::material::MaterialError;
use shading::paramset::*;
use shading::pbrt::*;
use shading::spectrum::*;
use shading::texture::*;
use std::convert::TryFrom;
use std::ops::{Add, Mul};

/// Implements a texture that linearly interpolates between two textures with a third texture.
#[derive(Clone)]
pub struct MixTexture<T> {
    /// First texture.
    tex1: ArcTexture<T>,

    /// Second texture.
    tex2: ArcTexture<T>,

    /// Scale amount.
    amount: ArcTexture<Float>,
}

impl<T> MixTexture<T> {
    /// Create a new `MixTexture<T>`.
    ///
    /// * `tex1`   - The first texture.
    /// * `tex2`   - The second texture.
    /// * `amount` - Scale amount.
    pub fn new(tex1: ArcTexture<T>, tex2: ArcTexture<T>, amount: ArcTexture<Float>) -> Self {
        Self { tex1, tex2, amount }
    }
}

impl<T> Texture<T> for MixTexture<T>
where
    T: TextureValue + Add<Output = T>,
    Float: Mul<T, Output = T>,
{
    /// Evaluate the texture at surface interaction.
    ///
    /// * `si` - Surface interaction.
    fn evaluate(&self, si: &SurfaceInteraction) -> T {
        let t1 = self.tex1.evaluate(si);
        let t2 = self.tex2.evaluate(si);
        let amt = self.amount.evaluate(si);
        (1.0 - amt) * t1 + amt * t2
    }

    fn children(&self) -> Vec<TextureNode> {
        vec![
            T::node("tex1", &self.tex1),
            T::node("tex2", &self.tex2),
            TextureNode::float("amount", &self.amount),
        ]
    }
}

macro_rules! from_params {
    ($t: ty, $get_texture_or_else_func: ident) => {
        impl TryFrom<&TextureParams> for MixTexture<$t> {
            type Error = MaterialError;

            /// Create a `MixTexture<$t>` from given parameter set.
            ///
            /// * `tp` - Texture parameters.
            fn try_from(tp: &TextureParams) -> Result<Self, Self::Error> {
                let tex1 =
                    tp.$get_texture_or_else_func("tex1", <$t>::from(0.0), ConstantTexture::arc)?;
                let tex2 =
                    tp.$get_texture_or_else_func("tex2", <$t>::from(1.0), ConstantTexture::arc)?;
                let amt = tp.get_float_texture_or_else("amount", 0.5, ConstantTexture::arc)?;
                Ok(Self::new(tex1, tex2, amt))
            }
        }
    };
}
from_params!(Float, get_float_texture_or_else);
from_params!(Spectrum, get_spectrum_texture_or_else);

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;
    use shading::graph::WalkControl;
    use std::sync::Arc;

    #[test]
    fn interpolates_by_amount() {
        let t = MixTexture::new(
            ConstantTexture::arc(Spectrum::new(0.0)),
            ConstantTexture::arc(Spectrum::new(1.0)),
            ConstantTexture::arc(0.25),
        );
        let v = t.evaluate(&SurfaceInteraction::default());
        assert!(approx_eq!(Float, v[0], 0.25));
        assert!(approx_eq!(Float, v[2], 0.25));
    }

    #[test]
    fn walk_visits_nested_inputs_depth_first() {
        let amount: ArcTexture<Float> = Arc::new(ScaleTexture::new(
            ConstantTexture::arc(0.5),
            ConstantTexture::arc(0.5),
        ));
        let mix: ArcTexture<Spectrum> = Arc::new(MixTexture::new(
            ConstantTexture::arc(Spectrum::ZERO),
            ConstantTexture::arc(Spectrum::ONE),
            amount,
        ));

        let mut seen = vec![];
        let stopped = walk_textures(vec![TextureNode::spectrum("Kd", &mix)], |n, d| {
            seen.push((n.name, d));
            WalkControl::Continue
        });
        assert!(!stopped);
        assert_eq!(
            seen,
            vec![
                ("Kd", 0),
                ("tex1", 1),
                ("tex2", 1),
                ("amount", 1),
                ("tex1", 2),
                ("tex2", 2)
            ]
        );
    }

    #[test]
    fn walk_stops_early() {
        let mix: ArcTexture<Float> = Arc::new(MixTexture::new(
            ConstantTexture::arc(0.0),
            ConstantTexture::arc(1.0),
            ConstantTexture::arc(0.5),
        ));
        let mut count = 0;
        let stopped = walk_textures(vec![TextureNode::float("sigma", &mix)], |n, _| {
            count += 1;
            if n.name == "tex2" {
                WalkControl::Stop
            } else {
                WalkControl::Continue
            }
        });
        assert!(stopped);
        assert_eq!(count, 3);
    }

    #[test]
    fn from_params_defaults() {
        let tp = TextureParams::default();
        let t = MixTexture::<Float>::try_from(&tp).unwrap();
        assert!(approx_eq!(Float, t.evaluate(&SurfaceInteraction::default()), 0.5));
    }
}
