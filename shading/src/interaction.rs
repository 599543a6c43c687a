//! Surface Interactions

use crate::geometry::*;
use crate::pbrt::*;

/// Common data for a ray-surface hit.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Hit {
    /// Point of interaction.
    pub p: Point3f,

    /// The negative ray direction (outgoing direction used when computing
    /// lighting at points).
    pub wo: Vector3f,

    /// Geometric surface normal at the point `p`.
    pub n: Normal3f,
}

/// Shading geometry used for perturbed values.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Shading {
    /// Shading normal.
    pub n: Normal3f,

    /// Shading ∂p/∂u.
    pub dpdu: Vector3f,

    /// Shading ∂p/∂v.
    pub dpdv: Vector3f,
}

/// SurfaceInteraction represents geometry of a particular point on a surface.
/// It is handed in by the renderer and only read by materials and textures.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SurfaceInteraction {
    /// The common interaction data.
    pub hit: Hit,

    /// The uv coordinates from surface parametrization.
    pub uv: Point2f,

    /// Parametric partial derivative of the point ∂p/∂u.
    pub dpdu: Vector3f,

    /// Parametric partial derivative of the point ∂p/∂v.
    pub dpdv: Vector3f,

    /// Shading geometry used for perturbed values.
    pub shading: Shading,
}

impl SurfaceInteraction {
    /// Create a new surface interaction. The geometric normal is derived from
    /// the partial derivatives and the shading geometry starts out equal to
    /// the true geometry.
    ///
    /// * `p`    - Point of interaction.
    /// * `uv`   - The uv coordinates from surface parametrization.
    /// * `wo`   - The negative ray direction.
    /// * `dpdu` - Parametric partial derivative of the point ∂p/∂u.
    /// * `dpdv` - Parametric partial derivative of the point ∂p/∂v.
    pub fn new(p: Point3f, uv: Point2f, wo: Vector3f, dpdu: Vector3f, dpdv: Vector3f) -> Self {
        let n = Normal3f::from(dpdu.cross(&dpdv).normalize());
        Self {
            hit: Hit { p, wo, n },
            uv,
            dpdu,
            dpdv,
            shading: Shading { n, dpdu, dpdv },
        }
    }

    /// Returns a copy of the interaction with perturbed shading geometry. The
    /// shading normal is flipped to lie in the hemisphere of the geometric
    /// normal.
    ///
    /// * `dpdus` - Shading ∂p/∂u.
    /// * `dpdvs` - Shading ∂p/∂v.
    pub fn with_shading_geometry(&self, dpdus: Vector3f, dpdvs: Vector3f) -> Self {
        let ns = Normal3f::from(dpdus.cross(&dpdvs).normalize()).face_forward(&self.hit.n);
        Self {
            shading: Shading {
                n: ns,
                dpdu: dpdus,
                dpdv: dpdvs,
            },
            ..*self
        }
    }

    /// Returns the `v` texture coordinate.
    pub fn v(&self) -> Float {
        self.uv.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normal_from_partial_derivatives() {
        let si = SurfaceInteraction::new(
            Point3f::default(),
            Point2f::new(0.25, 0.75),
            Vector3f::new(0.0, 0.0, 1.0),
            Vector3f::new(1.0, 0.0, 0.0),
            Vector3f::new(0.0, 1.0, 0.0),
        );
        assert_eq!(si.hit.n, Normal3f::new(0.0, 0.0, 1.0));
        assert_eq!(si.shading.n, si.hit.n);
        assert_eq!(si.v(), 0.75);
    }

    #[test]
    fn shading_normal_faces_geometric_normal() {
        let si = SurfaceInteraction::new(
            Point3f::default(),
            Point2f::default(),
            Vector3f::new(0.0, 0.0, 1.0),
            Vector3f::new(1.0, 0.0, 0.0),
            Vector3f::new(0.0, 1.0, 0.0),
        )
        .with_shading_geometry(Vector3f::new(0.0, 1.0, 0.0), Vector3f::new(1.0, 0.0, 0.0));
        assert!(si.shading.n.z > 0.0);
    }
}
