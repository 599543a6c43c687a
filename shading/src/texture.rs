//! Textures

use crate::graph::*;
use crate::interaction::SurfaceInteraction;
use crate::pbrt::Float;
use crate::spectrum::Spectrum;
use std::collections::HashMap;
use std::sync::Arc;

/// Texture interface. Implementations must be pure so a texture can be
/// evaluated from any number of rendering threads at once.
pub trait Texture<T> {
    /// Evaluate the texture at surface interaction.
    ///
    /// * `si` - Surface interaction.
    fn evaluate(&self, si: &SurfaceInteraction) -> T;

    /// Returns the textures this texture is composed of. Leaf textures have
    /// none.
    fn children(&self) -> Vec<TextureNode> {
        vec![]
    }
}

/// Atomic reference counted `Texture`.
pub type ArcTexture<T> = Arc<dyn Texture<T> + Send + Sync>;

/// Map of floating point textures.
pub type FloatTextureMap = HashMap<String, ArcTexture<Float>>;

/// Map of spectrum textures.
pub type SpectrumTextureMap = HashMap<String, ArcTexture<Spectrum>>;

/// Values textures produce. Connects a typed texture to the untyped
/// `TextureNode` used when walking texture trees.
pub trait TextureValue: Copy + 'static {
    /// Wraps a texture producing this kind of value in a `TextureNode`.
    ///
    /// * `name`    - Parameter name.
    /// * `texture` - The texture.
    fn node(name: &'static str, texture: &ArcTexture<Self>) -> TextureNode;
}

impl TextureValue for Float {
    fn node(name: &'static str, texture: &ArcTexture<Self>) -> TextureNode {
        TextureNode::float(name, texture)
    }
}

impl TextureValue for Spectrum {
    fn node(name: &'static str, texture: &ArcTexture<Self>) -> TextureNode {
        TextureNode::spectrum(name, texture)
    }
}

/// A reference to either kind of texture.
#[derive(Clone)]
pub enum TextureRef {
    Float(ArcTexture<Float>),
    Spectrum(ArcTexture<Spectrum>),
}

impl TextureRef {
    /// Returns the textures the referenced texture is composed of.
    pub fn children(&self) -> Vec<TextureNode> {
        match self {
            Self::Float(t) => t.children(),
            Self::Spectrum(t) => t.children(),
        }
    }
}

/// A named edge in a texture tree: the parameter name a parent uses for the
/// texture along with the texture itself.
#[derive(Clone)]
pub struct TextureNode {
    /// Parameter name.
    pub name: &'static str,

    /// The texture.
    pub texture: TextureRef,
}

impl TextureNode {
    /// Create a node for a floating point texture.
    ///
    /// * `name`    - Parameter name.
    /// * `texture` - The texture.
    pub fn float(name: &'static str, texture: &ArcTexture<Float>) -> Self {
        Self {
            name,
            texture: TextureRef::Float(Arc::clone(texture)),
        }
    }

    /// Create a node for a spectrum texture.
    ///
    /// * `name`    - Parameter name.
    /// * `texture` - The texture.
    pub fn spectrum(name: &'static str, texture: &ArcTexture<Spectrum>) -> Self {
        Self {
            name,
            texture: TextureRef::Spectrum(Arc::clone(texture)),
        }
    }

    /// Returns the child nodes.
    pub fn children(&self) -> Vec<TextureNode> {
        self.texture.children()
    }
}

/// Walks a forest of texture nodes depth-first. Returns `true` if `visit`
/// stopped the walk early.
///
/// * `roots` - The top level nodes.
/// * `visit` - Called with each node and its depth (roots are at depth 0).
pub fn walk_textures<V>(roots: Vec<TextureNode>, visit: V) -> bool
where
    V: FnMut(&TextureNode, usize) -> WalkControl,
{
    walk(roots, TextureNode::children, visit)
}
