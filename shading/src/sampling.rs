//! Sampling functions used by the scattering lobes.

use crate::geometry::*;
use crate::pbrt::*;

/// Maps a uniform 2-D sample to a point on the unit disk using Shirley's
/// concentric mapping.
///
/// * `u` - The random sample point.
pub fn concentric_sample_disk(u: &Point2f) -> Point2f {
    // Map uniform random numbers to [-1,1]^2.
    let u_offset = Point2f::new(2.0 * u[0] - 1.0, 2.0 * u[1] - 1.0);

    // Handle degeneracy at the origin.
    if u_offset.x == 0.0 && u_offset.y == 0.0 {
        return Point2f::default();
    }

    // Apply concentric mapping to point.
    let (r, theta) = if abs(u_offset.x) > abs(u_offset.y) {
        (u_offset.x, PI_OVER_FOUR * (u_offset.y / u_offset.x))
    } else {
        (
            u_offset.y,
            PI_OVER_TWO - PI_OVER_FOUR * (u_offset.x / u_offset.y),
        )
    };
    Point2f::new(r * cos(theta), r * sin(theta))
}

/// Cosine-weighted direction on the hemisphere around +z.
///
/// * `u` - The random sample point.
#[inline]
pub fn cosine_sample_hemisphere(u: &Point2f) -> Vector3f {
    let d = concentric_sample_disk(u);
    let z = max(0.0, 1.0 - d.x * d.x - d.y * d.y).sqrt();
    Vector3f::new(d.x, d.y, z)
}

/// Returns the PDF for cosine-weighted hemisphere sampling.
///
/// * `cos_theta` - Cosine of the direction with the z-axis.
#[inline]
pub fn cosine_hemisphere_pdf(cos_theta: Float) -> Float {
    cos_theta * INV_PI
}

/// Uniformly sample a direction on a hemisphere.
///
/// * `u` - The random sample point.
pub fn uniform_sample_hemisphere(u: &Point2f) -> Vector3f {
    let z = u[0];
    let r = max(0.0, 1.0 - z * z).sqrt();
    let phi = TWO_PI * u[1];
    Vector3f::new(r * cos(phi), r * sin(phi), z)
}

/// Returns the PDF for uniformly sampling a direction from a hemisphere.
#[inline]
pub fn uniform_hemisphere_pdf() -> Float {
    INV_TWO_PI
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::*;
    use proptest::prelude::*;

    #[test]
    fn concentric_disk_center() {
        assert_eq!(concentric_sample_disk(&Point2f::new(0.5, 0.5)), Point2f::new(0.0, 0.0));
    }

    proptest! {
        #[test]
        fn cosine_hemisphere_is_unit_and_upper(u0 in 0.0..1.0f32, u1 in 0.0..1.0f32) {
            let w = cosine_sample_hemisphere(&Point2f::new(u0, u1));
            prop_assert!(w.z >= 0.0);
            prop_assert!(approx_eq!(f32, w.length(), 1.0, epsilon = 1e-4));
        }

        #[test]
        fn uniform_hemisphere_is_unit_and_upper(u0 in 0.0..1.0f32, u1 in 0.0..1.0f32) {
            let w = uniform_sample_hemisphere(&Point2f::new(u0, u1));
            prop_assert!(w.z >= 0.0);
            prop_assert!(approx_eq!(f32, w.length(), 1.0, epsilon = 1e-4));
        }
    }
}
