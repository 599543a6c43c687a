//! Material

use crate::*;
use shading::bssrdf::BSSRDF;
use shading::graph::WalkControl;
use shading::interaction::SurfaceInteraction;
use shading::material::*;
use shading::microfacet::TrowbridgeReitzDistribution;
use shading::paramset::TextureParams;
use shading::pbrt::*;
use shading::reflection::BSDF;
use shading::spectrum::Spectrum;
use shading::texture::*;
use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

/// Interface implemented by every material recipe.
pub trait SurfaceMaterial {
    /// Samples the material's textures at the intersection and assembles its
    /// BSDF. Returns `None` when no lobe contributes.
    ///
    /// * `si`                   - The surface interaction at the intersection.
    /// * `mode`                 - Transport mode.
    /// * `allow_multiple_lobes` - Indicates whether the material should use
    ///                            BxDFs that aggregate multiple types of
    ///                            scattering into a single BxDF when such BxDFs
    ///                            are available.
    fn compute_bsdf(
        &self,
        si: &SurfaceInteraction,
        mode: TransportMode,
        allow_multiple_lobes: bool,
    ) -> Option<BSDF>;

    /// Returns the emitted radiance texture.
    fn emission(&self) -> &ArcTexture<Spectrum>;

    /// Returns the textures driving the scattering parameters, named by
    /// parameter.
    fn textures(&self) -> Vec<TextureNode>;
}

/// Returns the microfacet alpha for a roughness value.
///
/// * `roughness` - Roughness texture value.
/// * `remap`     - Whether to remap perceptual roughness to alpha.
pub(crate) fn roughness_alpha(roughness: Float, remap: bool) -> Float {
    if remap {
        TrowbridgeReitzDistribution::roughness_to_alpha(roughness)
    } else {
        roughness
    }
}

/// Returns the index of refraction to use for an `eta` texture value.
/// Values that are not finite or not positive describe no interface and
/// become 1.
///
/// * `eta` - Index of refraction texture value.
pub(crate) fn sanitize_eta(eta: Float) -> Float {
    if eta.is_finite() && eta > 0.0 {
        eta
    } else {
        1.0
    }
}

/// Identifies a material recipe.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MaterialKind {
    Matte,
    Glass,
    Metal,
    Mirror,
    Plastic,
    Substrate,
    Uber,
    Disney,
    Hair,
}

impl MaterialKind {
    /// Every material kind.
    pub const ALL: [MaterialKind; 9] = [
        Self::Matte,
        Self::Glass,
        Self::Metal,
        Self::Mirror,
        Self::Plastic,
        Self::Substrate,
        Self::Uber,
        Self::Disney,
        Self::Hair,
    ];

    /// Returns the name used in scene descriptions.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Matte => "matte",
            Self::Glass => "glass",
            Self::Metal => "metal",
            Self::Mirror => "mirror",
            Self::Plastic => "plastic",
            Self::Substrate => "substrate",
            Self::Uber => "uber",
            Self::Disney => "disney",
            Self::Hair => "hair",
        }
    }
}

impl FromStr for MaterialKind {
    type Err = MaterialError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|k| k.name() == s)
            .copied()
            .ok_or_else(|| MaterialError::UnknownMaterial(String::from(s)))
    }
}

impl fmt::Display for MaterialKind {
    /// Formats the value using the given formatter.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The material catalog.
#[derive(Clone)]
pub enum Material {
    Matte(MatteMaterial),
    Glass(GlassMaterial),
    Metal(MetalMaterial),
    Mirror(MirrorMaterial),
    Plastic(PlasticMaterial),
    Substrate(SubstrateMaterial),
    Uber(UberMaterial),
    Disney(DisneyMaterial),
    Hair(HairMaterial),
}

impl Material {
    /// Create a material from the parameters of a scene description.
    ///
    /// * `name` - Material type name.
    /// * `tp`   - Texture parameter set.
    pub fn from_params(name: &str, tp: &TextureParams) -> Result<Self, MaterialError> {
        let kind = MaterialKind::from_str(name)?;
        let material = match kind {
            MaterialKind::Matte => Self::Matte(MatteMaterial::try_from(tp)?),
            MaterialKind::Glass => Self::Glass(GlassMaterial::try_from(tp)?),
            MaterialKind::Metal => Self::Metal(MetalMaterial::try_from(tp)?),
            MaterialKind::Mirror => Self::Mirror(MirrorMaterial::try_from(tp)?),
            MaterialKind::Plastic => Self::Plastic(PlasticMaterial::try_from(tp)?),
            MaterialKind::Substrate => Self::Substrate(SubstrateMaterial::try_from(tp)?),
            MaterialKind::Uber => Self::Uber(UberMaterial::try_from(tp)?),
            MaterialKind::Disney => Self::Disney(DisneyMaterial::try_from(tp)?),
            MaterialKind::Hair => Self::Hair(HairMaterial::try_from(tp)?),
        };
        tp.report_unused();
        debug!("Created {} material", kind);
        Ok(material)
    }

    /// Returns the kind of material.
    pub fn kind(&self) -> MaterialKind {
        match self {
            Self::Matte(_) => MaterialKind::Matte,
            Self::Glass(_) => MaterialKind::Glass,
            Self::Metal(_) => MaterialKind::Metal,
            Self::Mirror(_) => MaterialKind::Mirror,
            Self::Plastic(_) => MaterialKind::Plastic,
            Self::Substrate(_) => MaterialKind::Substrate,
            Self::Uber(_) => MaterialKind::Uber,
            Self::Disney(_) => MaterialKind::Disney,
            Self::Hair(_) => MaterialKind::Hair,
        }
    }

    fn recipe(&self) -> &dyn SurfaceMaterial {
        match self {
            Self::Matte(m) => m,
            Self::Glass(m) => m,
            Self::Metal(m) => m,
            Self::Mirror(m) => m,
            Self::Plastic(m) => m,
            Self::Substrate(m) => m,
            Self::Uber(m) => m,
            Self::Disney(m) => m,
            Self::Hair(m) => m,
        }
    }

    /// Returns the BSDF at the intersection point on the surface or `None`
    /// if the material does not scatter light there.
    ///
    /// * `si`                   - The surface interaction at the intersection.
    /// * `mode`                 - Transport mode.
    /// * `allow_multiple_lobes` - Indicates whether the material should use
    ///                            BxDFs that aggregate multiple types of
    ///                            scattering into a single BxDF when such BxDFs
    ///                            are available.
    pub fn compute_bsdf(
        &self,
        si: &SurfaceInteraction,
        mode: TransportMode,
        allow_multiple_lobes: bool,
    ) -> Option<BSDF> {
        let bsdf = self.recipe().compute_bsdf(si, mode, allow_multiple_lobes);
        if bsdf.is_none() {
            trace!("{} material has no BSDF at uv {:?}", self.kind(), si.uv);
        }
        bsdf
    }

    /// Returns the BSSRDF at the intersection point. Subsurface transport is
    /// not modelled so there is never one.
    ///
    /// * `_si`   - The surface interaction at the intersection.
    /// * `_mode` - Transport mode.
    pub fn compute_bssrdf(&self, _si: &SurfaceInteraction, _mode: TransportMode) -> Option<BSSRDF> {
        None
    }

    /// Returns the emitted radiance at the intersection point.
    ///
    /// * `si` - The surface interaction at the intersection.
    pub fn emittance(&self, si: &SurfaceInteraction) -> Spectrum {
        self.recipe().emission().evaluate(si).clamp_default()
    }

    /// Returns the textures of the material named by parameter, emission last.
    pub fn children(&self) -> Vec<TextureNode> {
        let recipe = self.recipe();
        let mut children = recipe.textures();
        children.push(TextureNode::spectrum("emission", recipe.emission()));
        children
    }

    /// Walks the material's texture trees depth-first. Returns `true` if
    /// `visit` stopped the walk.
    ///
    /// * `visit` - Called with each texture node and its depth.
    pub fn walk_textures<V>(&self, visit: V) -> bool
    where
        V: FnMut(&TextureNode, usize) -> WalkControl,
    {
        walk_textures(self.children(), visit)
    }
}

macro_rules! material_from {
    ($variant: ident, $t: ty) => {
        impl From<$t> for Material {
            fn from(m: $t) -> Self {
                Self::$variant(m)
            }
        }
    };
}
material_from!(Matte, MatteMaterial);
material_from!(Glass, GlassMaterial);
material_from!(Metal, MetalMaterial);
material_from!(Mirror, MirrorMaterial);
material_from!(Plastic, PlasticMaterial);
material_from!(Substrate, SubstrateMaterial);
material_from!(Uber, UberMaterial);
material_from!(Disney, DisneyMaterial);
material_from!(Hair, HairMaterial);
