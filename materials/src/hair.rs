//! Hair Material

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

/// Eumelanin concentration used when no absorption input is given. Produces
/// brown hair.
pub const DEFAULT_EUMELANIN: Float = 1.3;

/// Parameters of `HairMaterial`.
#[derive(Clone)]
pub struct HairParams {
    /// Absorption coefficient of the fiber interior. Takes precedence over
    /// `color` and the melanin concentrations where non-black.
    pub sigma_a: Option<ArcTexture<Spectrum>>,

    /// Desired hair color. Used where `sigma_a` is absent or black.
    pub color: Option<ArcTexture<Spectrum>>,

    /// Eumelanin concentration.
    pub eumelanin: ArcTexture<Float>,

    /// Pheomelanin concentration.
    pub pheomelanin: ArcTexture<Float>,

    /// Index of refraction of the fiber interior.
    pub eta: ArcTexture<Float>,

    /// Longitudinal roughness in [0, 1].
    pub beta_m: ArcTexture<Float>,

    /// Azimuthal roughness in [0, 1].
    pub beta_n: ArcTexture<Float>,

    /// Angle of the cuticle scales in degrees.
    pub alpha: ArcTexture<Float>,

    /// Emitted radiance.
    pub emission: ArcTexture<Spectrum>,
}

impl Default for HairParams {
    fn default() -> Self {
        Self {
            sigma_a: None,
            color: None,
            eumelanin: ConstantTexture::arc(DEFAULT_EUMELANIN),
            pheomelanin: ConstantTexture::arc(0.0),
            eta: ConstantTexture::arc(1.55),
            beta_m: ConstantTexture::arc(0.3),
            beta_n: ConstantTexture::arc(0.3),
            alpha: ConstantTexture::arc(2.0),
            emission: ConstantTexture::arc(Spectrum::ZERO),
        }
    }
}

/// Implements scattering from hair fibers.
#[derive(Clone)]
pub struct HairMaterial {
    sigma_a: Option<ArcTexture<Spectrum>>,
    color: Option<ArcTexture<Spectrum>>,
    eumelanin: ArcTexture<Float>,
    pheomelanin: ArcTexture<Float>,
    eta: ArcTexture<Float>,
    beta_m: ArcTexture<Float>,
    beta_n: ArcTexture<Float>,
    alpha: ArcTexture<Float>,
    emission: ArcTexture<Spectrum>,
}

impl HairMaterial {
    /// Create a new `HairMaterial`.
    ///
    /// * `params` - Material parameters.
    pub fn new(params: HairParams) -> Self {
        Self {
            sigma_a: params.sigma_a,
            color: params.color,
            eumelanin: params.eumelanin,
            pheomelanin: params.pheomelanin,
            eta: params.eta,
            beta_m: params.beta_m,
            beta_n: params.beta_n,
            alpha: params.alpha,
            emission: params.emission,
        }
    }

    /// Returns the absorption coefficient at the surface interaction.
    ///
    /// * `si`     - The surface interaction.
    /// * `beta_n` - Azimuthal roughness.
    fn absorption(&self, si: &SurfaceInteraction, beta_n: Float) -> Spectrum {
        if let Some(sigma_a) = &self.sigma_a {
            let s = sigma_a.evaluate(si).clamp_default();
            if !s.is_black() {
                return s;
            }
        }
        if let Some(color) = &self.color {
            let c = color.evaluate(si).clamp_default();
            if !c.is_black() {
                return HairBxDF::sigma_a_from_reflectance(&c, beta_n);
            }
        }
        HairBxDF::sigma_a_from_concentration(
            self.eumelanin.evaluate(si).clamp_default(),
            self.pheomelanin.evaluate(si).clamp_default(),
        )
    }
}

impl SurfaceMaterial for HairMaterial {
    /// Returns a single hair fiber lobe. The offset across the fiber is
    /// derived from the v coordinate of the curve.
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
        let bm = clamp(self.beta_m.evaluate(si).clamp_default(), 0.0, 1.0);
        let bn = clamp(self.beta_n.evaluate(si).clamp_default(), 0.0, 1.0);
        let a = self.alpha.evaluate(si);
        // eta below 1 leaves no refracted path through the fiber.
        let e = max(sanitize_eta(self.eta.evaluate(si)), 1.0);
        let sigma_a = self.absorption(si, bn);

        let h = clamp(-1.0 + 2.0 * si.uv[1], -1.0, 1.0);
        BSDF::new(si, None, vec![HairBxDF::new(h, e, sigma_a, bm, bn, a).into()])
    }

    fn emission(&self) -> &ArcTexture<Spectrum> {
        &self.emission
    }

    fn textures(&self) -> Vec<TextureNode> {
        let mut nodes = vec![];
        if let Some(t) = &self.sigma_a {
            nodes.push(TextureNode::spectrum("sigma_a", t));
        }
        if let Some(t) = &self.color {
            nodes.push(TextureNode::spectrum("color", t));
        }
        nodes.push(TextureNode::float("eumelanin", &self.eumelanin));
        nodes.push(TextureNode::float("pheomelanin", &self.pheomelanin));
        nodes.push(TextureNode::float("eta", &self.eta));
        nodes.push(TextureNode::float("beta_m", &self.beta_m));
        nodes.push(TextureNode::float("beta_n", &self.beta_n));
        nodes.push(TextureNode::float("alpha", &self.alpha));
        nodes
    }
}

impl TryFrom<&TextureParams> for HairMaterial {
    type Error = MaterialError;

    /// Create a hair material from given parameter set.
    ///
    /// * `tp` - Texture parameter set.
    fn try_from(tp: &TextureParams) -> Result<Self, Self::Error> {
        let sigma_a = tp.get_spectrum_texture_or_none("sigma_a", ConstantTexture::arc)?;
        let color = tp.get_spectrum_texture_or_none("color", ConstantTexture::arc)?;
        let eumelanin = tp.get_float_texture_or_none("eumelanin", ConstantTexture::arc)?;
        let pheomelanin = tp.get_float_texture_or_none("pheomelanin", ConstantTexture::arc)?;

        let eumelanin = match eumelanin {
            Some(tex) => tex,
            None if sigma_a.is_none() && color.is_none() && pheomelanin.is_none() => {
                warn!(
                    "No hair absorption parameters given; using eumelanin {}.",
                    DEFAULT_EUMELANIN
                );
                ConstantTexture::arc(DEFAULT_EUMELANIN)
            }
            None => ConstantTexture::arc(0.0),
        };

        Ok(Self::new(HairParams {
            sigma_a,
            color,
            eumelanin,
            pheomelanin: pheomelanin.unwrap_or_else(|| ConstantTexture::arc(0.0)),
            eta: tp.get_float_texture_or_else("eta", 1.55, ConstantTexture::arc)?,
            beta_m: tp.get_float_texture_or_else("beta_m", 0.3, ConstantTexture::arc)?,
            beta_n: tp.get_float_texture_or_else("beta_n", 0.3, ConstantTexture::arc)?,
            alpha: tp.get_float_texture_or_else("alpha", 2.0, ConstantTexture::arc)?,
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
    use float_cmp::approx_eq;
    use shading::paramset::ParamSet;
    use std::collections::HashMap;

    fn hair_lobe(m: &HairMaterial, v: Float) -> HairBxDF {
        let bsdf = m
            .compute_bsdf(&interaction(0.5, v), TransportMode::Radiance, true)
            .unwrap();
        match bsdf.bxdfs() {
            [BxDF::Hair(h)] => *h,
            other => panic!("unexpected lobes {:?}", other),
        }
    }

    #[test]
    fn offset_follows_v() {
        let m = HairMaterial::new(HairParams::default());
        assert!(approx_eq!(Float, hair_lobe(&m, 0.0).h(), -1.0));
        assert!(approx_eq!(Float, hair_lobe(&m, 0.5).h(), 0.0));
        assert!(approx_eq!(Float, hair_lobe(&m, 0.75).h(), 0.5));
        assert!(approx_eq!(Float, hair_lobe(&m, 1.0).h(), 1.0));
    }

    #[test]
    fn defaults() {
        let h = hair_lobe(&HairMaterial::new(HairParams::default()), 0.5);
        assert_eq!(h.eta(), 1.55);
        assert_eq!(h.beta(), (0.3, 0.3));
        assert_eq!(
            h.sigma_a(),
            HairBxDF::sigma_a_from_concentration(DEFAULT_EUMELANIN, 0.0)
        );
    }

    #[test]
    fn absorption_priority() {
        let sigma = Spectrum::from_rgb([0.2, 0.4, 0.6]);
        let color = Spectrum::from_rgb([0.5, 0.3, 0.1]);

        let m = HairMaterial::new(HairParams {
            sigma_a: Some(ConstantTexture::arc(sigma)),
            color: Some(ConstantTexture::arc(color)),
            ..HairParams::default()
        });
        assert_eq!(hair_lobe(&m, 0.5).sigma_a(), sigma);

        let m = HairMaterial::new(HairParams {
            sigma_a: Some(spectrum_tex(0.0)),
            color: Some(ConstantTexture::arc(color)),
            ..HairParams::default()
        });
        assert_eq!(
            hair_lobe(&m, 0.5).sigma_a(),
            HairBxDF::sigma_a_from_reflectance(&color, 0.3)
        );

        let m = HairMaterial::new(HairParams {
            color: Some(spectrum_tex(0.0)),
            eumelanin: float_tex(0.5),
            pheomelanin: float_tex(2.0),
            ..HairParams::default()
        });
        assert_eq!(
            hair_lobe(&m, 0.5).sigma_a(),
            HairBxDF::sigma_a_from_concentration(0.5, 2.0)
        );
    }

    #[test]
    fn lobe_scatters_both_ways() {
        let h = hair_lobe(&HairMaterial::new(HairParams::default()), 0.5);
        assert_eq!(
            BxDF::from(h).get_type(),
            BxDFType::BSDF_GLOSSY | BxDFType::BSDF_REFLECTION | BxDFType::BSDF_TRANSMISSION
        );
    }

    #[test]
    fn from_params_melanin_default_only_without_inputs() {
        let tp = TextureParams::default();
        let h = hair_lobe(&HairMaterial::try_from(&tp).unwrap(), 0.5);
        assert_eq!(
            h.sigma_a(),
            HairBxDF::sigma_a_from_concentration(DEFAULT_EUMELANIN, 0.0)
        );

        let mut mat = ParamSet::new();
        mat.add_float("pheomelanin", &[1.0]);
        let tp = TextureParams::new(ParamSet::new(), mat, HashMap::new(), HashMap::new());
        let h = hair_lobe(&HairMaterial::try_from(&tp).unwrap(), 0.5);
        assert_eq!(h.sigma_a(), HairBxDF::sigma_a_from_concentration(0.0, 1.0));
    }

    #[test]
    fn zero_roughness_is_usable() {
        let params = [
            HairParams {
                beta_m: float_tex(0.0),
                ..HairParams::default()
            },
            HairParams {
                beta_n: float_tex(0.0),
                ..HairParams::default()
            },
        ];
        for p in params.iter() {
            let bsdf = HairMaterial::new(p.clone())
                .compute_bsdf(&interaction(0.5, 0.3), TransportMode::Radiance, true)
                .unwrap();
            assert_total(&bsdf);
        }
    }

    #[test]
    fn eta_below_one_is_raised() {
        for &eta in [-1.0, 0.0, 0.5].iter() {
            let m = HairMaterial::new(HairParams {
                eta: float_tex(eta),
                ..HairParams::default()
            });
            assert_eq!(hair_lobe(&m, 0.3).eta(), 1.0);
            let bsdf = m
                .compute_bsdf(&interaction(0.5, 0.3), TransportMode::Radiance, true)
                .unwrap();
            assert_total(&bsdf);
        }
    }
}
