//! Geometry

use crate::pbrt::*;

// Define macros for property based testing.
#[cfg(test)]
#[macro_export]
macro_rules! prop_range {
    ($name: ident, $t: ty, $r: expr) => {
        prop_compose! {
            fn $name()(f in $r) -> $t {
                f
            }
        }
    };
}

#[cfg(test)]
#[macro_export]
macro_rules! prop_vector3 {
    ($name: ident, $t: ty, $xr: expr, $yr: expr, $zr: expr) => {
        prop_compose! {
            fn $name()(x in $xr, y in $yr, z in $zr) -> Vector3<$t> {
                Vector3 { x, y, z }
            }
        }
    };
}

mod common;
mod normal;
mod point2;
mod point3;
mod vector3;

// Re-export
pub use common::*;
pub use normal::*;
pub use point2::*;
pub use point3::*;
pub use vector3::*;

/// Returns a direction from spherical coordinates with respect to the
/// standard basis.
///
/// * `sin_theta` - sin(θ).
/// * `cos_theta` - cos(θ).
/// * `phi`       - φ in radians.
#[inline]
pub fn spherical_direction(sin_theta: Float, cos_theta: Float, phi: Float) -> Vector3f {
    Vector3f::new(
        clamp(sin_theta, -1.0, 1.0) * cos(phi),
        clamp(sin_theta, -1.0, 1.0) * sin(phi),
        clamp(cos_theta, -1.0, 1.0),
    )
}

/// Builds an orthonormal coordinate system from a single unit vector and
/// returns the two remaining axes.
///
/// * `v1` - The first axis (normalized).
pub fn coordinate_system(v1: &Vector3f) -> (Vector3f, Vector3f) {
    let v2 = if abs(v1.x) > abs(v1.y) {
        Vector3f::new(-v1.z, 0.0, v1.x) / (v1.x * v1.x + v1.z * v1.z).sqrt()
    } else {
        Vector3f::new(0.0, v1.z, -v1.y) / (v1.y * v1.y + v1.z * v1.z).sqrt()
    };
    let v3 = v1.cross(&v2);
    (v2, v3)
}
