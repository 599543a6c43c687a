//! Trowbridge-Reitz Distribution

use super::MIN_ALPHA;
use crate::geometry::*;
use crate::pbrt::*;
use crate::reflection::*;

/// Implements the anisotropic variant of the Trowbridge-Reitz distribution.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TrowbridgeReitzDistribution {
    /// Indicates whether or not the visible area is sampled or not.
    sample_visible_area: bool,

    /// For microfacets oriented perpendicular to the x-axis and where
    /// α = sqrt(2) * σ and σ is the RMS slope of microfacets.
    alpha_x: Float,

    /// For microfacets oriented perpendicular to the y-axis and where
    /// α = sqrt(2) * σ and σ is the RMS slope of microfacets.
    alpha_y: Float,
}

impl TrowbridgeReitzDistribution {
    /// Create a new `TrowbridgeReitzDistribution`.
    ///
    /// * `alpha_x`             - For microfacets oriented perpendicular to the
    ///                           x-axis and where α = sqrt(2) * σ and σ is the
    ///                           RMS slope of microfacets.
    /// * `alpha_y`             - For microfacets oriented perpendicular to the
    ///                           y-axis and where α = sqrt(2) * σ and σ is the
    ///                           RMS slope of microfacets.
    /// * `sample_visible_area` - Indicates whether or not the visible area is
    ///                           sampled or not (default to `true`).
    pub fn new(alpha_x: Float, alpha_y: Float, sample_visible_area: bool) -> Self {
        Self {
            sample_visible_area,
            alpha_x: max(MIN_ALPHA, alpha_x),
            alpha_y: max(MIN_ALPHA, alpha_y),
        }
    }

    /// Maps scalar roughness parameter in [0, 1] to alpha values where
    /// values close to 0 are near-perfect specular reflection. The curve is
    /// `r²` floored at `MIN_ALPHA`.
    ///
    /// * `roughness` - Roughness parameter value.
    pub fn roughness_to_alpha(roughness: Float) -> Float {
        let r = clamp(roughness, 0.0, 1.0);
        max(r * r, MIN_ALPHA)
    }

    /// Returns the alpha value along the x-axis.
    pub fn alpha_x(&self) -> Float {
        self.alpha_x
    }

    /// Returns the alpha value along the y-axis.
    pub fn alpha_y(&self) -> Float {
        self.alpha_y
    }

    /// Returns whether or not the visible area is sampled or not.
    pub fn sample_visible_area(&self) -> bool {
        self.sample_visible_area
    }

    /// Return the differential area of microfacets oriented with the surface
    /// normal `wh`.
    ///
    /// * `wh` - A sample normal from the distrubition of normal vectors.
    #[rustfmt::skip]
    pub fn d(&self, wh: &Vector3f) -> Float {
        let tan2_theta = tan_2_theta(wh);
        if tan2_theta.is_infinite() || tan2_theta.is_nan() {
            0.0
        } else {
            let cos4_theta = cos_2_theta(wh) * cos_2_theta(wh);
            let e =
                (cos_2_phi(wh) / (self.alpha_x * self.alpha_x) +
                 sin_2_phi(wh) / (self.alpha_y * self.alpha_y)) *
                tan2_theta;
            1.0 / (PI * self.alpha_x * self.alpha_y * cos4_theta * (1.0 + e) * (1.0 + e))
        }
    }

    /// Returns the invisible masked microfacet area per visible microfacet area.
    ///
    /// * `w` - The direction from camera/viewer.
    #[rustfmt::skip]
    pub fn lambda(&self, w: &Vector3f) -> Float {
        let abs_tan_theta = abs(tan_theta(w));
        if abs_tan_theta.is_infinite() || abs_tan_theta.is_nan() {
            0.0
        } else {
            // Compute alpha for direction w.
            let alpha = (cos_2_phi(w) * self.alpha_x * self.alpha_x +
                         sin_2_phi(w) * self.alpha_y * self.alpha_y).sqrt();
            let alpha2_tan2_theta = (alpha * abs_tan_theta) * (alpha * abs_tan_theta);
            (-1.0 + (1.0 + alpha2_tan2_theta).sqrt()) / 2.0
        }
    }

    /// Returns a sample from the distribution of normal vectors.
    ///
    /// * `wo` - Outgoing direction.
    /// * `u`  - The 2D uniform random values.
    #[rustfmt::skip]
    pub fn sample_wh(&self, wo: &Vector3f, u: &Point2f) -> Vector3f {
        if !self.sample_visible_area {
            let mut phi = TWO_PI * u[1];
            let cos_theta = if self.alpha_x == self.alpha_y {
                let tan_theta2 = self.alpha_x * self.alpha_x * u[0] / (1.0 - u[0]);
                1.0 / (1.0 + tan_theta2).sqrt()
            } else {
                phi = atan(self.alpha_y / self.alpha_x * tan(TWO_PI * u[1] + 0.5 * PI));
                if u[1] > 0.5 {
                    phi += PI;
                }
                let sin_phi = sin(phi);
                let cos_phi = cos(phi);
                let alphax2 = self.alpha_x * self.alpha_x;
                let alphay2 = self.alpha_y * self.alpha_y;
                let alpha2 = 1.0 / (cos_phi * cos_phi / alphax2 + sin_phi * sin_phi / alphay2);
                let tan_theta2 = alpha2 * u[0] / (1.0 - u[0]);
                1.0 / (1.0 + tan_theta2).sqrt()
            };
            let sin_theta = max(0.0, 1.0 - cos_theta * cos_theta).sqrt();
            let wh = spherical_direction(sin_theta, cos_theta, phi);
            if !same_hemisphere(wo, &wh) { -wh } else { wh }
        } else {
            let flip = wo.z < 0.0;
            let wo_copy = if flip { -(*wo) } else { *wo };
            let wh = trowbridge_reitz_sample(&wo_copy, self.alpha_x, self.alpha_y, u[0], u[1]);
            if flip { -wh } else { wh }
        }
    }
}

/// Samples the slopes of the visible normals for an isotropic distribution
/// with unit alpha.
///
/// * `cos_theta` - Cosine of the angle θ measured from the incident direction
///                 to the z-axis.
/// * `u1`        - The uniform random value.
/// * `u2`        - The uniform random value.
fn trowbridge_reitz_sample_11(cos_theta: Float, u1: Float, u2: Float) -> (Float, Float) {
    // Normal incidence.
    if cos_theta > 0.9999 {
        let r = (u1 / (1.0 - u1)).sqrt();
        let phi = TWO_PI * u2;
        return (r * cos(phi), r * sin(phi));
    }

    let sin_theta = max(0.0, 1.0 - cos_theta * cos_theta).sqrt();
    let tan_theta = sin_theta / cos_theta;
    let a = 1.0 / tan_theta;
    let g1 = 2.0 / (1.0 + (1.0 + 1.0 / (a * a)).sqrt());

    // Sample slope_x.
    let a = 2.0 * u1 / g1 - 1.0;
    let tmp = min(1.0 / (a * a - 1.0), 1e10);
    let b = tan_theta;
    let d = max(b * b * tmp * tmp - (a * a - b * b) * tmp, 0.0).sqrt();
    let slope_x_1 = b * tmp - d;
    let slope_x_2 = b * tmp + d;
    let slope_x = if a < 0.0 || slope_x_2 > 1.0 / tan_theta {
        slope_x_1
    } else {
        slope_x_2
    };

    // Sample slope_y.
    let (s, u2) = if u2 > 0.5 {
        (1.0, 2.0 * (u2 - 0.5))
    } else {
        (-1.0, 2.0 * (0.5 - u2))
    };
    let z = (u2 * (u2 * (u2 * 0.27385 - 0.73369) + 0.46341))
        / (u2 * (u2 * (u2 * 0.093073 + 0.309420) - 1.000000) + 0.597999);
    let slope_y = s * z * (1.0 + slope_x * slope_x).sqrt();

    debug_assert!(slope_y.is_finite());

    (slope_x, slope_y)
}

/// Samples a visible microfacet normal for direction `wi` in the upper
/// hemisphere.
///
/// * `wi`      - Incident direction.
/// * `alpha_x` - Alpha along the x-axis.
/// * `alpha_y` - Alpha along the y-axis.
/// * `u1`      - The uniform random value.
/// * `u2`      - The uniform random value.
fn trowbridge_reitz_sample(
    wi: &Vector3f,
    alpha_x: Float,
    alpha_y: Float,
    u1: Float,
    u2: Float,
) -> Vector3f {
    // 1. Stretch wi.
    let wi_stretched = Vector3f::new(alpha_x * wi.x, alpha_y * wi.y, wi.z).normalize();

    // 2. Simulate P22_{wi}(x_slope, y_slope, 1, 1).
    let (slope_x, slope_y) = trowbridge_reitz_sample_11(cos_theta(&wi_stretched), u1, u2);

    // 3. Rotate.
    let (cos_phi, sin_phi) = (cos_phi(&wi_stretched), sin_phi(&wi_stretched));
    let rotated_x = cos_phi * slope_x - sin_phi * slope_y;
    let rotated_y = sin_phi * slope_x + cos_phi * slope_y;

    // 4. Unstretch.
    let slope_x = alpha_x * rotated_x;
    let slope_y = alpha_y * rotated_y;

    // 5. Compute normal.
    Vector3f::new(-slope_x, -slope_y, 1.0).normalize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::*;
    use float_cmp::*;
    use proptest::prelude::*;

    #[test]
    fn roughness_to_alpha_end_points() {
        assert_eq!(TrowbridgeReitzDistribution::roughness_to_alpha(0.0), MIN_ALPHA);
        assert_eq!(TrowbridgeReitzDistribution::roughness_to_alpha(1.0), 1.0);
        assert_eq!(TrowbridgeReitzDistribution::roughness_to_alpha(2.0), 1.0);
        assert_eq!(TrowbridgeReitzDistribution::roughness_to_alpha(-1.0), MIN_ALPHA);
    }

    #[test]
    fn alpha_is_floored() {
        let d = TrowbridgeReitzDistribution::new(0.0, 0.0, true);
        assert_eq!(d.alpha_x(), MIN_ALPHA);
        assert_eq!(d.alpha_y(), MIN_ALPHA);
    }

    #[test]
    fn projected_area_integrates_to_one() {
        // ∫ D(wh) cos θh dωh = 1 over the hemisphere.
        let d = TrowbridgeReitzDistribution::new(0.5, 0.3, false);
        let mut rng = RNG::new(3);
        let n = 200_000;
        let mut sum = 0.0;
        for _ in 0..n {
            let u = rng.uniform_point2f();
            let wh = crate::sampling::uniform_sample_hemisphere(&u);
            sum += d.d(&wh) * cos_theta(&wh) / crate::sampling::uniform_hemisphere_pdf();
        }
        let estimate = sum / n as Float;
        assert!(approx_eq!(f32, estimate, 1.0, epsilon = 0.05), "estimate = {}", estimate);
    }

    proptest! {
        #[test]
        fn roughness_to_alpha_is_monotonic(r1 in 0.0..1.0f32, r2 in 0.0..1.0f32) {
            let (lo, hi) = if r1 < r2 { (r1, r2) } else { (r2, r1) };
            prop_assert!(
                TrowbridgeReitzDistribution::roughness_to_alpha(lo)
                    <= TrowbridgeReitzDistribution::roughness_to_alpha(hi)
            );
        }

        #[test]
        fn lambda_is_non_negative(x in -1.0..1.0f32, y in -1.0..1.0f32, z in -1.0..1.0f32) {
            let w = Vector3f::new(x, y, z);
            prop_assume!(w.length() > 0.01);
            let d = TrowbridgeReitzDistribution::new(0.4, 0.2, true);
            prop_assert!(d.lambda(&w.normalize()) >= 0.0);
        }

        #[test]
        fn sampled_normals_face_wo(
            x in -1.0..1.0f32, y in -1.0..1.0f32, z in -1.0..1.0f32,
            u0 in 0.0..0.999f32, u1 in 0.0..0.999f32,
            visible in proptest::bool::ANY,
        ) {
            prop_assume!(abs(z) > 0.05);
            let wo = Vector3f::new(x, y, z).normalize();
            let d = TrowbridgeReitzDistribution::new(0.3, 0.6, visible);
            let wh = d.sample_wh(&wo, &Point2f::new(u0, u1));
            prop_assert!(same_hemisphere(&wo, &wh));
            prop_assert!(approx_eq!(f32, wh.length(), 1.0, epsilon = 1e-4));
        }
    }
}
