//! Common functions for working with directions in the local shading
//! coordinate system, where the shading normal is the +z axis.

use crate::geometry::*;
use crate::pbrt::*;

/// Returns cos(θ) of a normalized vector.
///
/// * `w` - The vector.
#[inline(always)]
pub fn cos_theta(w: &Vector3f) -> Float {
    w.z
}

/// Returns cos²(θ) of a normalized vector.
///
/// * `w` - The vector.
#[inline(always)]
pub fn cos_2_theta(w: &Vector3f) -> Float {
    w.z * w.z
}

/// Returns |cos(θ)| of a normalized vector.
///
/// * `w` - The vector.
#[inline(always)]
pub fn abs_cos_theta(w: &Vector3f) -> Float {
    abs(w.z)
}

/// Returns sin²(θ) of a normalized vector.
///
/// * `w` - The vector.
#[inline(always)]
pub fn sin_2_theta(w: &Vector3f) -> Float {
    max(0.0, 1.0 - cos_2_theta(w))
}

/// Returns sin(θ) of a normalized vector.
///
/// * `w` - The vector.
#[inline(always)]
pub fn sin_theta(w: &Vector3f) -> Float {
    sin_2_theta(w).sqrt()
}

/// Returns tan(θ) of a normalized vector.
///
/// * `w` - The vector.
#[inline(always)]
pub fn tan_theta(w: &Vector3f) -> Float {
    sin_theta(w) / cos_theta(w)
}

/// Returns tan²(θ) of a normalized vector.
///
/// * `w` - The vector.
#[inline(always)]
pub fn tan_2_theta(w: &Vector3f) -> Float {
    sin_2_theta(w) / cos_2_theta(w)
}

/// Returns cos(φ) of a normalized vector.
///
/// * `w` - The vector.
#[inline(always)]
pub fn cos_phi(w: &Vector3f) -> Float {
    let sin_theta = sin_theta(w);
    if sin_theta == 0.0 {
        1.0
    } else {
        clamp(w.x / sin_theta, -1.0, 1.0)
    }
}

/// Returns sin(φ) of a normalized vector.
///
/// * `w` - The vector.
#[inline(always)]
pub fn sin_phi(w: &Vector3f) -> Float {
    let sin_theta = sin_theta(w);
    if sin_theta == 0.0 {
        0.0
    } else {
        clamp(w.y / sin_theta, -1.0, 1.0)
    }
}

/// Returns cos²(φ) of a normalized vector.
///
/// * `w` - The vector.
#[inline(always)]
pub fn cos_2_phi(w: &Vector3f) -> Float {
    cos_phi(w) * cos_phi(w)
}

/// Returns sin²(φ) of a normalized vector.
///
/// * `w` - The vector.
#[inline(always)]
pub fn sin_2_phi(w: &Vector3f) -> Float {
    sin_phi(w) * sin_phi(w)
}

/// Returns true if two vectors are in the same hemisphere.
///
/// * `w`  - First vector.
/// * `wp` - Second vector.
#[inline(always)]
pub fn same_hemisphere(w: &Vector3f, wp: &Vector3f) -> bool {
    w.z * wp.z > 0.0
}

/// Reflects `wo` about the normal `n`.
///
/// * `wo` - Outgoing direction.
/// * `n`  - Surface normal.
#[inline(always)]
pub fn reflect(wo: &Vector3f, n: &Vector3f) -> Vector3f {
    -(*wo) + *n * (2.0 * wo.dot(n))
}

/// Computes the refracted direction of `wi` through an interface with
/// normal `n` (on the same side as `wi`). Returns `None` on total internal
/// reflection.
///
/// * `wi`  - Incident direction.
/// * `n`   - Surface normal.
/// * `eta` - Ratio of indices of refraction, incident over transmitted.
pub fn refract(wi: &Vector3f, n: &Normal3f, eta: Float) -> Option<Vector3f> {
    // Compute cos(θt) using Snell's law.
    let cos_theta_i = n.dot(wi);
    let sin_2_theta_i = max(0.0, 1.0 - cos_theta_i * cos_theta_i);
    let sin_2_theta_t = eta * eta * sin_2_theta_i;

    // Handle total internal reflection for transmission.
    if sin_2_theta_t >= 1.0 {
        None
    } else {
        let cos_theta_t = (1.0 - sin_2_theta_t).sqrt();
        Some(-(*wi) * eta + Vector3f::from(*n) * (eta * cos_theta_i - cos_theta_t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::*;
    use proptest::prelude::*;

    #[test]
    fn reflect_about_z() {
        let wo = Vector3f::new(0.3, 0.4, 0.5);
        let wi = reflect(&wo, &Vector3f::new(0.0, 0.0, 1.0));
        assert_eq!(wi, Vector3f::new(-0.3, -0.4, 0.5));
    }

    #[test]
    fn refract_total_internal_reflection() {
        // Leaving glass at a grazing angle.
        let wi = Vector3f::new(0.9, 0.0, (1.0 - 0.81 as Float).sqrt());
        assert!(refract(&wi, &Normal3f::new(0.0, 0.0, 1.0), 1.5).is_none());
    }

    #[test]
    fn refract_straight_through() {
        let wi = Vector3f::new(0.0, 0.0, 1.0);
        let wt = refract(&wi, &Normal3f::new(0.0, 0.0, 1.0), 1.0 / 1.5).unwrap();
        assert!(approx_eq!(f32, wt.z, -1.0, epsilon = 1e-6));
    }

    #[test]
    fn phi_at_pole_is_defined() {
        let w = Vector3f::new(0.0, 0.0, 1.0);
        assert_eq!(cos_phi(&w), 1.0);
        assert_eq!(sin_phi(&w), 0.0);
    }

    proptest! {
        #[test]
        fn refract_obeys_snell(x in -0.9..0.9f32, eta in 0.5..2.0f32) {
            let wi = Vector3f::new(x, 0.0, (1.0 - x * x).sqrt());
            if let Some(wt) = refract(&wi, &Normal3f::new(0.0, 0.0, 1.0), eta) {
                prop_assert!(approx_eq!(f32, sin_theta(&wt), eta * sin_theta(&wi), epsilon = 1e-4));
                prop_assert!(wt.z < 0.0);
            } else {
                prop_assert!(eta * sin_theta(&wi) >= 1.0 - 1e-4);
            }
        }

        #[test]
        fn trig_identities(x in -1.0..1.0f32, y in -1.0..1.0f32, z in -1.0..1.0f32) {
            let w = Vector3f::new(x, y, z);
            prop_assume!(w.length() > 0.01);
            let w = w.normalize();
            prop_assert!(approx_eq!(f32, sin_2_theta(&w) + cos_2_theta(&w), 1.0, epsilon = 1e-5));
            if sin_theta(&w) > 1e-3 {
                prop_assert!(approx_eq!(f32, cos_2_phi(&w) + sin_2_phi(&w), 1.0, epsilon = 1e-3));
            }
        }
    }
}
