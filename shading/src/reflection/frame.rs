//! Shading Frame

use super::*;
use crate::interaction::SurfaceInteraction;

/// Orthonormal basis at a surface point in which the shading normal is the
/// local +z axis.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ShadingFrame {
    /// The shading normal given by per-vertex normals and/or bump mapping.
    /// It is the third axis of the frame and defines the hemispheres used
    /// for surface reflection.
    pub ns: Normal3f,

    /// The geometric normal defined by surface geometry.
    pub ng: Normal3f,

    /// First axis of the frame, aligned with the shading ∂p/∂u.
    pub ss: Vector3f,

    /// Second axis of the frame.
    pub ts: Vector3f,
}

impl ShadingFrame {
    /// Builds the frame from the shading geometry of a surface interaction.
    /// The shading ∂p/∂u is made orthogonal to the shading normal; when it is
    /// degenerate an arbitrary tangent is picked.
    ///
    /// * `si` - The surface interaction.
    pub fn new(si: &SurfaceInteraction) -> Self {
        let ns = si.shading.n;
        let n = Vector3f::from(ns);
        let dpdu = si.shading.dpdu;
        let tangent = dpdu - n * n.dot(&dpdu);
        let ss = if tangent.length_squared() > 1e-12 && !tangent.has_nans() {
            tangent.normalize()
        } else {
            coordinate_system(&n).0
        };
        Self {
            ns,
            ng: si.hit.n,
            ss,
            ts: n.cross(&ss),
        }
    }

    /// Transforms a vector from world space to local space.
    ///
    /// * `v` - The vector to transform.
    pub fn world_to_local(&self, v: &Vector3f) -> Vector3f {
        Vector3f::new(v.dot(&self.ss), v.dot(&self.ts), v.dot(&self.ns))
    }

    /// Transforms a vector from local space to world space.
    ///
    /// * `v` - The vector to transform.
    pub fn local_to_world(&self, v: &Vector3f) -> Vector3f {
        Vector3f::new(
            self.ss.x * v.x + self.ts.x * v.y + self.ns.x * v.z,
            self.ss.y * v.x + self.ts.y * v.y + self.ns.y * v.z,
            self.ss.z * v.x + self.ts.z * v.y + self.ns.z * v.z,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point3f;
    use float_cmp::*;
    use proptest::prelude::*;

    prop_compose! {
        fn unit_vector()(x in -1.0..1.0f32, y in -1.0..1.0f32, z in -1.0..1.0f32) -> Vector3f {
            let v = Vector3f::new(x, y, z);
            if v.length() < 0.01 { Vector3f::new(0.0, 0.0, 1.0) } else { v.normalize() }
        }
    }

    fn tilted() -> SurfaceInteraction {
        SurfaceInteraction::new(
            Point3f::default(),
            Point2f::default(),
            Vector3f::new(0.0, 0.0, 1.0),
            Vector3f::new(1.0, 0.0, 0.0),
            Vector3f::new(0.0, 1.0, 0.0),
        )
        .with_shading_geometry(Vector3f::new(1.0, 0.0, 0.3), Vector3f::new(0.0, 1.0, 0.2))
    }

    #[test]
    fn frame_is_orthonormal() {
        let frame = ShadingFrame::new(&tilted());
        let n = Vector3f::from(frame.ns);
        assert!(approx_eq!(f32, frame.ss.length(), 1.0, epsilon = 1e-5));
        assert!(approx_eq!(f32, frame.ts.length(), 1.0, epsilon = 1e-5));
        assert!(approx_eq!(f32, frame.ss.dot(&n), 0.0, epsilon = 1e-5));
        assert!(approx_eq!(f32, frame.ts.dot(&n), 0.0, epsilon = 1e-5));
        assert!(approx_eq!(f32, frame.ss.dot(&frame.ts), 0.0, epsilon = 1e-5));
    }

    #[test]
    fn normal_maps_to_z() {
        let frame = ShadingFrame::new(&tilted());
        let local = frame.world_to_local(&Vector3f::from(frame.ns));
        assert!(approx_eq!(f32, local.z, 1.0, epsilon = 1e-5));
    }

    #[test]
    fn degenerate_tangent() {
        let mut si = tilted();
        si.shading.dpdu = Vector3f::ZERO;
        let frame = ShadingFrame::new(&si);
        assert!(approx_eq!(f32, frame.ss.length(), 1.0, epsilon = 1e-5));
    }

    proptest! {
        #[test]
        fn round_trip(v in unit_vector()) {
            let frame = ShadingFrame::new(&tilted());
            let w = frame.local_to_world(&frame.world_to_local(&v));
            prop_assert!(approx_eq!(f32, w.x, v.x, epsilon = 1e-5));
            prop_assert!(approx_eq!(f32, w.y, v.y, epsilon = 1e-5));
            prop_assert!(approx_eq!(f32, w.z, v.z, epsilon = 1e-5));
        }
    }
}
