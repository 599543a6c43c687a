//! Disney Material

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

/// Parameters of `DisneyMaterial`.
#[derive(Clone)]
pub struct DisneyParams {
    /// Base color.
    pub color: ArcTexture<Spectrum>,

    /// Blend between dielectric (0) and metallic (1) response.
    pub metallic: ArcTexture<Float>,

    /// Index of refraction.
    pub eta: ArcTexture<Float>,

    /// Perceptual roughness.
    pub roughness: ArcTexture<Float>,

    /// Tints the dielectric specular toward the base color.
    pub specular_tint: ArcTexture<Float>,

    /// Stretches the specular highlight along the tangent.
    pub anisotropic: ArcTexture<Float>,

    /// Strength of the grazing retro sheen.
    pub sheen: ArcTexture<Float>,

    /// Tints the sheen toward the base color.
    pub sheen_tint: ArcTexture<Float>,

    /// Strength of the clearcoat layer.
    pub clearcoat: ArcTexture<Float>,

    /// Glossiness of the clearcoat layer.
    pub clearcoat_gloss: ArcTexture<Float>,

    /// Amount of specular transmission.
    pub spec_trans: ArcTexture<Float>,

    /// Mean free path for subsurface scattering. Non-black values select the
    /// subsurface path.
    pub scatter_distance: ArcTexture<Spectrum>,

    /// Thin surfaces use the flatness and diffuse transmission terms.
    pub thin: bool,

    /// Blend between diffuse (0) and fake subsurface (1) for thin surfaces.
    pub flatness: ArcTexture<Float>,

    /// Fraction of diffuse light transmitted by thin surfaces.
    pub diff_trans: ArcTexture<Float>,

    /// Emitted radiance.
    pub emission: ArcTexture<Spectrum>,
}

impl Default for DisneyParams {
    fn default() -> Self {
        Self {
            color: ConstantTexture::arc(Spectrum::new(0.5)),
            metallic: ConstantTexture::arc(0.0),
            eta: ConstantTexture::arc(1.5),
            roughness: ConstantTexture::arc(0.5),
            specular_tint: ConstantTexture::arc(0.0),
            anisotropic: ConstantTexture::arc(0.0),
            sheen: ConstantTexture::arc(0.0),
            sheen_tint: ConstantTexture::arc(0.5),
            clearcoat: ConstantTexture::arc(0.0),
            clearcoat_gloss: ConstantTexture::arc(0.5),
            spec_trans: ConstantTexture::arc(0.0),
            scatter_distance: ConstantTexture::arc(Spectrum::ZERO),
            thin: false,
            flatness: ConstantTexture::arc(0.0),
            diff_trans: ConstantTexture::arc(0.5),
            emission: ConstantTexture::arc(Spectrum::ZERO),
        }
    }
}

/// Implements the Disney principled BSDF.
#[derive(Clone)]
pub struct DisneyMaterial {
    color: ArcTexture<Spectrum>,
    metallic: ArcTexture<Float>,
    eta: ArcTexture<Float>,
    roughness: ArcTexture<Float>,
    specular_tint: ArcTexture<Float>,
    anisotropic: ArcTexture<Float>,
    sheen: ArcTexture<Float>,
    sheen_tint: ArcTexture<Float>,
    clearcoat: ArcTexture<Float>,
    clearcoat_gloss: ArcTexture<Float>,
    spec_trans: ArcTexture<Float>,
    scatter_distance: ArcTexture<Spectrum>,
    thin: bool,
    flatness: ArcTexture<Float>,
    diff_trans: ArcTexture<Float>,
    emission: ArcTexture<Spectrum>,
}

/// Evaluates a weight texture clamped to [0, 1].
fn unit(tex: &ArcTexture<Float>, si: &SurfaceInteraction) -> Float {
    clamp(tex.evaluate(si).clamp_default(), 0.0, 1.0)
}

impl DisneyMaterial {
    /// Create a new `DisneyMaterial`.
    ///
    /// * `params` - Material parameters.
    pub fn new(params: DisneyParams) -> Self {
        Self {
            color: params.color,
            metallic: params.metallic,
            eta: params.eta,
            roughness: params.roughness,
            specular_tint: params.specular_tint,
            anisotropic: params.anisotropic,
            sheen: params.sheen,
            sheen_tint: params.sheen_tint,
            clearcoat: params.clearcoat,
            clearcoat_gloss: params.clearcoat_gloss,
            spec_trans: params.spec_trans,
            scatter_distance: params.scatter_distance,
            thin: params.thin,
            flatness: params.flatness,
            diff_trans: params.diff_trans,
            emission: params.emission,
        }
    }

    /// Returns whether the surface is thin.
    pub fn thin(&self) -> bool {
        self.thin
    }
}

impl SurfaceMaterial for DisneyMaterial {
    /// Returns up to eight lobes: diffuse or subsurface, retro-reflection,
    /// sheen, specular, clearcoat, specular and diffuse transmission.
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
        let mut bxdfs: Vec<BxDF> = Vec::with_capacity(MAX_BXDFS);

        let c = self.color.evaluate(si).clamp_default();
        let metallic_weight = unit(&self.metallic, si);
        let e = sanitize_eta(self.eta.evaluate(si));
        let strans = unit(&self.spec_trans, si);
        let diffuse_weight = (1.0 - metallic_weight) * (1.0 - strans);
        let dt = unit(&self.diff_trans, si);
        let rough = unit(&self.roughness, si);

        // Normalize luminance to isolate hue and saturation.
        let lum = c.y();
        let c_tint = if lum > 0.0 { c / lum } else { Spectrum::ONE };

        if diffuse_weight > 0.0 {
            if self.thin {
                // Blend between a diffuse and a fake subsurface lobe.
                let flat = unit(&self.flatness, si);
                let diffuse = diffuse_weight * (1.0 - flat) * (1.0 - dt) * c;
                let fake_ss = diffuse_weight * flat * (1.0 - dt) * c;
                bxdfs.push(DisneyDiffuse::new(diffuse).into());
                bxdfs.push(DisneyFakeSS::new(fake_ss, rough).into());
            } else if self.scatter_distance.evaluate(si).clamp_default().is_black() {
                bxdfs.push(DisneyDiffuse::new(diffuse_weight * c).into());
            } else {
                // Subsurface transport enters through a specular interface and
                // has no BSSRDF to continue with.
                bxdfs.push(SpecularTransmission::new(Spectrum::ONE, 1.0, e, mode).into());
            }

            bxdfs.push(DisneyRetro::new(diffuse_weight * c, rough).into());

            let sheen_weight = unit(&self.sheen, si);
            if sheen_weight > 0.0 {
                let c_sheen = lerp(unit(&self.sheen_tint, si), Spectrum::ONE, c_tint);
                bxdfs.push(DisneySheen::new(diffuse_weight * sheen_weight * c_sheen).into());
            }
        }

        // Specular is Trowbridge-Reitz with a modified Fresnel function.
        let anisotropic = unit(&self.anisotropic, si);
        let (ax, ay) = anisotropic_alpha(rough, anisotropic);
        let distribution: MicrofacetDistribution = DisneyMicrofacetDistribution::new(ax, ay).into();

        let spec_tint = unit(&self.specular_tint, si);
        let c_spec0 = lerp(
            metallic_weight,
            schlick_r0_from_eta(e) * lerp(spec_tint, Spectrum::ONE, c_tint),
            c,
        );
        let fresnel = FresnelDisney::new(c_spec0, e, metallic_weight);
        bxdfs.push(MicrofacetReflection::new(Spectrum::ONE, distribution, fresnel).into());

        let cc = unit(&self.clearcoat, si);
        if cc > 0.0 {
            let gloss = lerp(unit(&self.clearcoat_gloss, si), 0.1, 0.001);
            bxdfs.push(DisneyClearcoat::new(cc, gloss).into());
        }

        if strans > 0.0 {
            // Light crossing the surface twice is tinted by the full color.
            let t = strans * c.sqrt();
            let transmission_distribution = if self.thin {
                // Scale roughness based on IOR.
                let rscaled = (0.65 * e - 0.35) * rough;
                let (ax, ay) = anisotropic_alpha(rscaled, anisotropic);
                TrowbridgeReitzDistribution::new(ax, ay, true).into()
            } else {
                distribution
            };
            bxdfs.push(
                MicrofacetTransmission::new(t, transmission_distribution, 1.0, e, mode).into(),
            );
        }

        if self.thin {
            // Diffuse transmission through the thin sheet.
            bxdfs.push(LambertianTransmission::new(dt * c).into());
        }

        let eta = if self.thin { None } else { Some(e) };
        BSDF::new(si, eta, bxdfs)
    }

    fn emission(&self) -> &ArcTexture<Spectrum> {
        &self.emission
    }

    fn textures(&self) -> Vec<TextureNode> {
        vec![
            TextureNode::spectrum("color", &self.color),
            TextureNode::float("metallic", &self.metallic),
            TextureNode::float("eta", &self.eta),
            TextureNode::float("roughness", &self.roughness),
            TextureNode::float("speculartint", &self.specular_tint),
            TextureNode::float("anisotropic", &self.anisotropic),
            TextureNode::float("sheen", &self.sheen),
            TextureNode::float("sheentint", &self.sheen_tint),
            TextureNode::float("clearcoat", &self.clearcoat),
            TextureNode::float("clearcoatgloss", &self.clearcoat_gloss),
            TextureNode::float("spectrans", &self.spec_trans),
            TextureNode::spectrum("scatterdistance", &self.scatter_distance),
            TextureNode::float("flatness", &self.flatness),
            TextureNode::float("difftrans", &self.diff_trans),
        ]
    }
}

impl TryFrom<&TextureParams> for DisneyMaterial {
    type Error = MaterialError;

    /// Create a Disney material from given parameter set.
    ///
    /// * `tp` - Texture parameter set.
    fn try_from(tp: &TextureParams) -> Result<Self, Self::Error> {
        let float = |name: &str, default: Float| {
            tp.get_float_texture_or_else(name, default, ConstantTexture::arc)
        };

        Ok(Self::new(DisneyParams {
            color: tp.get_spectrum_texture_or_else(
                "color",
                Spectrum::new(0.5),
                ConstantTexture::arc,
            )?,
            metallic: float("metallic", 0.0)?,
            eta: float("eta", 1.5)?,
            roughness: float("roughness", 0.5)?,
            specular_tint: float("speculartint", 0.0)?,
            anisotropic: float("anisotropic", 0.0)?,
            sheen: float("sheen", 0.0)?,
            sheen_tint: float("sheentint", 0.5)?,
            clearcoat: float("clearcoat", 0.0)?,
            clearcoat_gloss: float("clearcoatgloss", 0.5)?,
            spec_trans: float("spectrans", 0.0)?,
            scatter_distance: tp.get_spectrum_texture_or_else(
                "scatterdistance",
                Spectrum::ZERO,
                ConstantTexture::arc,
            )?,
            thin: tp.find_bool("thin", false),
            flatness: float("flatness", 0.0)?,
            diff_trans: float("difftrans", 0.5)?,
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
    use proptest::prelude::*;
    use shading::paramset::ParamSet;
    use std::collections::HashMap;

    fn lobes(params: DisneyParams) -> Vec<BxDF> {
        DisneyMaterial::new(params)
            .compute_bsdf(&interaction(0.5, 0.5), TransportMode::Radiance, true)
            .unwrap()
            .bxdfs()
            .to_vec()
    }

    fn count<F: Fn(&BxDF) -> bool>(bxdfs: &[BxDF], pred: F) -> usize {
        bxdfs.iter().filter(|b| pred(b)).count()
    }

    #[test]
    fn defaults_are_diffuse_retro_and_specular() {
        match lobes(DisneyParams::default()).as_slice() {
            [BxDF::DisneyDiffuse(d), BxDF::DisneyRetro(r), BxDF::MicrofacetReflection(s)] => {
                assert_eq!(d.r(), Spectrum::new(0.5));
                assert_eq!(r.r(), Spectrum::new(0.5));
                assert_eq!(r.roughness(), 0.5);
                assert_eq!(s.r(), Spectrum::ONE);
                assert!(matches!(s.distribution(), MicrofacetDistribution::Disney(_)));
                match s.fresnel() {
                    Fresnel::Disney(f) => {
                        assert!(approx_eq!(Float, f.r0[0], 0.04, epsilon = 1e-6));
                        assert_eq!(f.metallic, 0.0);
                        assert_eq!(f.eta, 1.5);
                    }
                    other => panic!("unexpected fresnel {:?}", other),
                }
            }
            other => panic!("unexpected lobes {:?}", other),
        }
    }

    #[test]
    fn metallic_has_no_diffuse_lobes() {
        let bxdfs = lobes(DisneyParams {
            metallic: float_tex(1.0),
            sheen: float_tex(1.0),
            flatness: float_tex(0.5),
            ..DisneyParams::default()
        });
        assert_eq!(
            count(&bxdfs, |b| matches!(
                b,
                BxDF::DisneyDiffuse(_)
                    | BxDF::DisneyFakeSS(_)
                    | BxDF::DisneyRetro(_)
                    | BxDF::DisneySheen(_)
            )),
            0
        );
        assert_eq!(count(&bxdfs, |b| matches!(b, BxDF::MicrofacetReflection(_))), 1);
        match bxdfs.as_slice() {
            [BxDF::MicrofacetReflection(s)] => match s.fresnel() {
                Fresnel::Disney(f) => assert_eq!(f.r0, Spectrum::new(0.5)),
                other => panic!("unexpected fresnel {:?}", other),
            },
            other => panic!("unexpected lobes {:?}", other),
        }
    }

    #[test]
    fn clearcoat_only_when_requested() {
        let bxdfs = lobes(DisneyParams::default());
        assert_eq!(count(&bxdfs, |b| matches!(b, BxDF::DisneyClearcoat(_))), 0);

        let bxdfs = lobes(DisneyParams {
            clearcoat: float_tex(0.5),
            ..DisneyParams::default()
        });
        let coats: Vec<&DisneyClearcoat> = bxdfs
            .iter()
            .filter_map(|b| match b {
                BxDF::DisneyClearcoat(c) => Some(c),
                _ => None,
            })
            .collect();
        assert_eq!(coats.len(), 1);
        assert_eq!(coats[0].weight(), 0.5);
        assert!(coats[0].gloss() > 0.001 && coats[0].gloss() < 0.1);
    }

    #[test]
    fn sheen_is_tinted() {
        let bxdfs = lobes(DisneyParams {
            color: ConstantTexture::arc(Spectrum::from_rgb([0.8, 0.4, 0.2])),
            sheen: float_tex(1.0),
            sheen_tint: float_tex(0.0),
            ..DisneyParams::default()
        });
        match bxdfs.as_slice() {
            [_, _, BxDF::DisneySheen(s), _] => assert_eq!(s.r(), Spectrum::ONE),
            other => panic!("unexpected lobes {:?}", other),
        }
    }

    #[test]
    fn scatter_distance_replaces_diffuse() {
        let bxdfs = lobes(DisneyParams {
            scatter_distance: spectrum_tex(0.1),
            ..DisneyParams::default()
        });
        match bxdfs.as_slice() {
            [
                BxDF::SpecularTransmission(t),
                BxDF::DisneyRetro(_),
                BxDF::MicrofacetReflection(_),
            ] => {
                assert_eq!(t.t(), Spectrum::ONE);
                assert_eq!(t.eta(), (1.0, 1.5));
            }
            other => panic!("unexpected lobes {:?}", other),
        }
    }

    #[test]
    fn thin_surfaces_split_diffuse_and_transmit() {
        let bsdf = DisneyMaterial::new(DisneyParams {
            thin: true,
            flatness: float_tex(0.5),
            ..DisneyParams::default()
        })
        .compute_bsdf(&interaction(0.5, 0.5), TransportMode::Radiance, true)
        .unwrap();
        match bsdf.bxdfs() {
            [
                BxDF::DisneyDiffuse(d),
                BxDF::DisneyFakeSS(ss),
                BxDF::DisneyRetro(_),
                BxDF::MicrofacetReflection(_),
                BxDF::LambertianTransmission(t),
            ] => {
                assert!(approx_eq!(Float, d.r()[0], 0.125, epsilon = 1e-6));
                assert!(approx_eq!(Float, ss.r()[0], 0.125, epsilon = 1e-6));
                assert!(approx_eq!(Float, t.t()[0], 0.25, epsilon = 1e-6));
            }
            other => panic!("unexpected lobes {:?}", other),
        }
        assert_eq!(bsdf.eta(), 1.0);
    }

    #[test]
    fn specular_transmission_removes_diffuse() {
        let bxdfs = lobes(DisneyParams {
            spec_trans: float_tex(1.0),
            color: spectrum_tex(0.25),
            ..DisneyParams::default()
        });
        match bxdfs.as_slice() {
            [BxDF::MicrofacetReflection(r), BxDF::MicrofacetTransmission(t)] => {
                assert!(approx_eq!(Float, t.t()[1], 0.5, epsilon = 1e-6));
                assert_eq!(r.distribution(), t.distribution());
            }
            other => panic!("unexpected lobes {:?}", other),
        }
    }

    #[test]
    fn thin_transmission_roughness_scales_with_eta() {
        let bxdfs = lobes(DisneyParams {
            spec_trans: float_tex(1.0),
            thin: true,
            ..DisneyParams::default()
        });
        let t = bxdfs
            .iter()
            .find_map(|b| match b {
                BxDF::MicrofacetTransmission(t) => Some(t),
                _ => None,
            })
            .unwrap();
        let rscaled: Float = (0.65 * 1.5 - 0.35) * 0.5;
        assert!(approx_eq!(
            Float,
            t.distribution().alpha_x(),
            rscaled * rscaled,
            epsilon = 1e-6
        ));
        assert!(matches!(
            t.distribution(),
            MicrofacetDistribution::TrowbridgeReitz(_)
        ));
    }

    #[test]
    fn every_lobe_fits_in_a_bsdf() {
        let bxdfs = lobes(DisneyParams {
            thin: true,
            flatness: float_tex(0.5),
            sheen: float_tex(0.5),
            clearcoat: float_tex(1.0),
            spec_trans: float_tex(0.5),
            ..DisneyParams::default()
        });
        assert_eq!(bxdfs.len(), MAX_BXDFS);
    }

    #[test]
    fn from_params_reads_thin_and_weights() {
        let mut mat = ParamSet::new();
        mat.add_bool("thin", &[true]);
        mat.add_float("clearcoat", &[0.25]);
        let tp = TextureParams::new(ParamSet::new(), mat, HashMap::new(), HashMap::new());
        let m = DisneyMaterial::try_from(&tp).unwrap();
        assert!(m.thin());
        let bsdf = m
            .compute_bsdf(&interaction(0.5, 0.5), TransportMode::Radiance, true)
            .unwrap();
        assert_eq!(
            bsdf.bxdfs()
                .iter()
                .filter(|b| matches!(b, BxDF::DisneyClearcoat(_)))
                .count(),
            1
        );
        assert!(tp.mat_params.unused().is_empty());
    }

    #[test]
    fn non_positive_eta_means_no_interface() {
        for &thin in [false, true].iter() {
            let m = DisneyMaterial::new(DisneyParams {
                eta: float_tex(-1.0),
                spec_trans: float_tex(0.5),
                clearcoat: float_tex(0.5),
                thin,
                ..DisneyParams::default()
            });
            let bsdf = m
                .compute_bsdf(&interaction(0.5, 0.5), TransportMode::Radiance, true)
                .unwrap();
            assert_eq!(bsdf.eta(), 1.0);
            assert_total(&bsdf);
        }
    }

    proptest! {
        #[test]
        fn one_specular_lobe_for_any_inputs(
            metallic in 0.0..=1.0f32,
            spec_trans in 0.0..=1.0f32,
            sheen in 0.0..=1.0f32,
            clearcoat in 0.0..=1.0f32,
            roughness in 0.0..=1.0f32,
            thin in proptest::bool::ANY,
        ) {
            let bxdfs = lobes(DisneyParams {
                metallic: float_tex(metallic),
                spec_trans: float_tex(spec_trans),
                sheen: float_tex(sheen),
                clearcoat: float_tex(clearcoat),
                roughness: float_tex(roughness),
                thin,
                ..DisneyParams::default()
            });
            prop_assert_eq!(count(&bxdfs, |b| matches!(b, BxDF::MicrofacetReflection(_))), 1);
            prop_assert!(bxdfs.len() <= MAX_BXDFS);
        }
    }
}
