//! Texture Parameters

use super::*;
use crate::material::MaterialError;
use crate::texture::{ArcTexture, FloatTextureMap, SpectrumTextureMap};
use std::sync::Arc;

/// Stores texture, geometry and material parameters of different types in hashmaps.
#[derive(Clone)]
pub struct TextureParams {
    /// Floating point textures.
    float_textures: FloatTextureMap,

    /// Spectrum textures.
    spectrum_textures: SpectrumTextureMap,

    /// Geometry parameters.
    pub geom_params: ParamSet,

    /// Material parameters.
    pub mat_params: ParamSet,
}

/// Define a macro that can be used to generate a function for finding a
/// single parameter value. Geometry parameters override material parameters.
macro_rules! texture_params_find {
    ($func: ident, $t: ty, $paramset_func: ident) => {
        pub fn $func(&self, name: &str, mat_default: $t) -> $t {
            self.geom_params
                .$paramset_func(name)
                .or_else(|| self.mat_params.$paramset_func(name))
                .unwrap_or(mat_default)
        }
    };
}

/// Define a macro that can be used to generate a function that looks up a
/// texture parameter. The texture name is searched first, then a constant
/// value, in the geometry parameters and then the material parameters.
macro_rules! texture_params_lookup {
    ($func: ident, $t: ty, $textures: ident, $find_one_value: ident, $is_finite: expr) => {
        fn $func<F>(
            &self,
            name: &str,
            constant_tex_fn: &F,
        ) -> Result<Option<ArcTexture<$t>>, MaterialError>
        where
            F: Fn($t) -> ArcTexture<$t>,
        {
            let is_finite: fn(&$t) -> bool = $is_finite;

            for params in [&self.geom_params, &self.mat_params] {
                if let Some(tex_name) = params.find_one_texture(name) {
                    return match self.$textures.get(&tex_name) {
                        Some(tex) => Ok(Some(Arc::clone(tex))),
                        None => Err(MaterialError::MissingTexture {
                            param: String::from(name),
                            texture: tex_name,
                        }),
                    };
                }

                if let Some(v) = params.$find_one_value(name) {
                    if !is_finite(&v) {
                        return Err(MaterialError::InvalidParameter {
                            param: String::from(name),
                            reason: format!("{} is not finite", v),
                        });
                    }
                    return Ok(Some(constant_tex_fn(v)));
                }
            }

            Ok(None)
        }
    };
}

impl TextureParams {
    /// Create a new `TextureParams`.
    ///
    /// * `geom_params`       - Geometry parameters.
    /// * `mat_params`        - Material parameters.
    /// * `float_textures`    - Floating point textures.
    /// * `spectrum_textures` - Spectrum textures.
    pub fn new(
        geom_params: ParamSet,
        mat_params: ParamSet,
        float_textures: FloatTextureMap,
        spectrum_textures: SpectrumTextureMap,
    ) -> Self {
        Self {
            float_textures,
            spectrum_textures,
            geom_params,
            mat_params,
        }
    }

    texture_params_lookup!(
        lookup_float_texture,
        Float,
        float_textures,
        find_one_float,
        |v| v.is_finite()
    );

    texture_params_lookup!(
        lookup_spectrum_texture,
        Spectrum,
        spectrum_textures,
        find_one_spectrum,
        |s| s.to_rgb().iter().all(|c| c.is_finite())
    );

    /// Returns a floating point texture, a constant texture built from a
    /// floating point value or a constant texture with the given default.
    /// Referencing an undeclared texture is an error.
    ///
    /// * `name`            - Parameter name.
    /// * `default`         - Default floating point value.
    /// * `constant_tex_fn` - Function that will generate specific texture given
    ///                       a floating point value.
    pub fn get_float_texture_or_else<F>(
        &self,
        name: &str,
        default: Float,
        constant_tex_fn: F,
    ) -> Result<ArcTexture<Float>, MaterialError>
    where
        F: Fn(Float) -> ArcTexture<Float>,
    {
        Ok(self
            .lookup_float_texture(name, &constant_tex_fn)?
            .unwrap_or_else(|| constant_tex_fn(default)))
    }

    /// Returns a floating point texture or a constant texture built from a
    /// floating point value. Returns `None` if the parameter is absent.
    ///
    /// * `name`            - Parameter name.
    /// * `constant_tex_fn` - Function that will generate specific texture given
    ///                       a floating point value.
    pub fn get_float_texture_or_none<F>(
        &self,
        name: &str,
        constant_tex_fn: F,
    ) -> Result<Option<ArcTexture<Float>>, MaterialError>
    where
        F: Fn(Float) -> ArcTexture<Float>,
    {
        self.lookup_float_texture(name, &constant_tex_fn)
    }

    /// Returns a spectrum texture, a constant texture built from a spectrum
    /// value or a constant texture with the given default. Referencing an
    /// undeclared texture is an error.
    ///
    /// * `name`            - Parameter name.
    /// * `default`         - Default spectrum value.
    /// * `constant_tex_fn` - Function that will generate specific texture given
    ///                       a spectrum value.
    pub fn get_spectrum_texture_or_else<F>(
        &self,
        name: &str,
        default: Spectrum,
        constant_tex_fn: F,
    ) -> Result<ArcTexture<Spectrum>, MaterialError>
    where
        F: Fn(Spectrum) -> ArcTexture<Spectrum>,
    {
        Ok(self
            .lookup_spectrum_texture(name, &constant_tex_fn)?
            .unwrap_or_else(|| constant_tex_fn(default)))
    }

    /// Returns a spectrum texture or a constant texture built from a spectrum
    /// value. Returns `None` if the parameter is absent.
    ///
    /// * `name`            - Parameter name.
    /// * `constant_tex_fn` - Function that will generate specific texture given
    ///                       a spectrum value.
    pub fn get_spectrum_texture_or_none<F>(
        &self,
        name: &str,
        constant_tex_fn: F,
    ) -> Result<Option<ArcTexture<Spectrum>>, MaterialError>
    where
        F: Fn(Spectrum) -> ArcTexture<Spectrum>,
    {
        self.lookup_spectrum_texture(name, &constant_tex_fn)
    }

    /// Logs a warning for every material parameter that no lookup has read.
    pub fn report_unused(&self) {
        for name in self.mat_params.unused() {
            warn!("Ignoring unknown material parameter '{}'.", name);
        }
    }

    texture_params_find!(find_float, Float, find_one_float);
    texture_params_find!(find_string, String, find_one_string);
    texture_params_find!(find_int, Int, find_one_int);
    texture_params_find!(find_bool, bool, find_one_bool);
    texture_params_find!(find_spectrum, Spectrum, find_one_spectrum);
}

impl Default for TextureParams {
    /// Initializes a new `TextureParams` with default values.
    fn default() -> Self {
        Self::new(
            ParamSet::new(),
            ParamSet::new(),
            HashMap::new(),
            HashMap::new(),
        )
    }
}
