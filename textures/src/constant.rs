//! Constant Texture

use shading::interaction::*;
use shading::paramset::*;
use shading::pbrt::*;
use shading::spectrum::*;
use shading::texture::*;
use std::sync::Arc;

/// Implements a texture that returns the same value everywhere.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ConstantTexture<T> {
    /// The texture value.
    value: T,
}

impl<T> ConstantTexture<T> {
    /// Create a new `ConstantTexture<T>`.
    ///
    /// * `value` - The texture value.
    pub fn new(value: T) -> Self {
        Self { value }
    }
}

impl<T> ConstantTexture<T>
where
    T: Copy + Send + Sync + 'static,
{
    /// Returns a shared constant texture. Suitable as the `constant_tex_fn`
    /// argument of `TextureParams` lookups.
    ///
    /// * `value` - The texture value.
    pub fn arc(value: T) -> ArcTexture<T> {
        Arc::new(Self::new(value))
    }
}

impl<T> Texture<T> for ConstantTexture<T>
where
    T: Copy,
{
    /// Evaluate the texture at surface interaction.
    ///
    /// * `_si` - Surface interaction.
    fn evaluate(&self, _si: &SurfaceInteraction) -> T {
        self.value
    }
}

macro_rules! from_params {
    ($t: ty, $find_func: ident) => {
        impl From<&TextureParams> for ConstantTexture<$t> {
            /// Create a `ConstantTexture<$t>` from given parameter set.
            ///
            /// * `tp` - Texture parameters.
            fn from(tp: &TextureParams) -> Self {
                Self::new(tp.$find_func("value", <$t>::from(1.0)))
            }
        }
    };
}
from_params!(Float, find_float);
from_params!(Spectrum, find_spectrum);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluates_to_value_everywhere() {
        let t = ConstantTexture::new(0.25 as Float);
        let mut si = SurfaceInteraction::default();
        assert_eq!(t.evaluate(&si), 0.25);
        si.uv.x = 0.9;
        assert_eq!(t.evaluate(&si), 0.25);
        assert!(t.children().is_empty());
    }

    #[test]
    fn from_params_reads_value() {
        let mut mat = ParamSet::new();
        mat.add_rgb_spectrum("value", &[0.1, 0.2, 0.3]);
        let tp = TextureParams::new(ParamSet::new(), mat, Default::default(), Default::default());

        let s = ConstantTexture::<Spectrum>::from(&tp);
        assert_eq!(s.evaluate(&SurfaceInteraction::default()).to_rgb(), [0.1, 0.2, 0.3]);

        let f = ConstantTexture::<Float>::from(&tp);
        assert_eq!(f.evaluate(&SurfaceInteraction::default()), 1.0);
    }
}
