//! Fresnel Dielectrics and Conductors

use super::*;
use std::mem::swap;
use std::ops::{Add, Mul};

/// Interface for computing Fresnel reflection coefficients.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Fresnel {
    Dielectric(FresnelDielectric),
    Conductor(FresnelConductor),
    Constant(FresnelConstant),
    Disney(FresnelDisney),
}

impl Fresnel {
    /// Returns the amount of light reflected by the surface.
    ///
    /// * `cos_theta_i` - Cosine of the angle made by incident direction and
    ///                   surface normal.
    pub fn evaluate(&self, cos_theta_i: Float) -> Spectrum {
        match self {
            Self::Dielectric(f) => f.evaluate(cos_theta_i),
            Self::Conductor(f) => f.evaluate(cos_theta_i),
            Self::Constant(f) => f.evaluate(cos_theta_i),
            Self::Disney(f) => f.evaluate(cos_theta_i),
        }
    }
}

impl fmt::Display for Fresnel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dielectric(d) => write!(
                f,
                "FresnelDielectric {{ eta_i: {}, eta_t: {} }}",
                d.eta_i, d.eta_t
            ),
            Self::Conductor(c) => write!(
                f,
                "FresnelConductor {{ eta_i: {}, eta_t: {}, k: {} }}",
                c.eta_i, c.eta_t, c.k
            ),
            Self::Constant(c) => write!(f, "FresnelConstant {{ r: {} }}", c.r),
            Self::Disney(d) => write!(
                f,
                "FresnelDisney {{ r0: {}, eta: {}, metallic: {} }}",
                d.r0, d.eta, d.metallic
            ),
        }
    }
}

/// Implements `Fresnel` for dielectric materials.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct FresnelDielectric {
    /// Index of refraction for exterior side of the surface.
    pub eta_i: Float,

    /// Index of refraction for interior side of the surface.
    pub eta_t: Float,
}

impl FresnelDielectric {
    /// Create a new `Fresnel::Dielectric`.
    ///
    /// * `eta_i` - Index of refraction for exterior side of the surface.
    /// * `eta_t` - Index of refraction for interior side of the surface.
    pub fn new(eta_i: Float, eta_t: Float) -> Fresnel {
        Fresnel::Dielectric(Self { eta_i, eta_t })
    }

    /// Returns the amount of light reflected by the surface.
    ///
    /// * `cos_theta_i` - Cosine of the angle made by incident direction and
    ///                   surface normal.
    pub fn evaluate(&self, cos_theta_i: Float) -> Spectrum {
        Spectrum::new(fr_dielectric(cos_theta_i, self.eta_i, self.eta_t))
    }
}

/// Implements `Fresnel` for conductors.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct FresnelConductor {
    /// Index of refraction for exterior side of the surface.
    pub eta_i: Spectrum,

    /// Index of refraction for interior side of the surface.
    pub eta_t: Spectrum,

    /// Absorption coefficient.
    pub k: Spectrum,
}

impl FresnelConductor {
    /// Create a new `Fresnel::Conductor`.
    ///
    /// * `eta_i` - Index of refraction for exterior side of the surface.
    /// * `eta_t` - Index of refraction for interior side of the surface.
    /// * `k`     - Absorption coefficient.
    pub fn new(eta_i: Spectrum, eta_t: Spectrum, k: Spectrum) -> Fresnel {
        Fresnel::Conductor(Self { eta_i, eta_t, k })
    }

    /// Returns the amount of light reflected by the surface.
    ///
    /// * `cos_theta_i` - Cosine of the angle made by incident direction and
    ///                   surface normal.
    pub fn evaluate(&self, cos_theta_i: Float) -> Spectrum {
        // Angle is measured on the same side as the normal.
        fr_conductor(abs(cos_theta_i), self.eta_i, self.eta_t, self.k)
    }
}

/// Implements `Fresnel` returning the same reflectance at every angle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FresnelConstant {
    /// Reflectance.
    pub r: Spectrum,
}

impl FresnelConstant {
    /// Create a new `Fresnel::Constant`.
    ///
    /// * `r` - Reflectance.
    pub fn new(r: Spectrum) -> Fresnel {
        Fresnel::Constant(Self { r })
    }

    /// Returns the reflectance regardless of angle.
    pub fn evaluate(&self, _cos_theta_i: Float) -> Spectrum {
        self.r
    }
}

/// Blend of a dielectric response and a Schlick approximation tinted by
/// `r0`, driven by `metallic`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FresnelDisney {
    /// Reflectance at normal incidence.
    pub r0: Spectrum,

    /// Index of refraction.
    pub eta: Float,

    /// Metallic blend factor.
    pub metallic: Float,
}

impl FresnelDisney {
    /// Create a new `Fresnel::Disney`.
    ///
    /// * `r0`       - Reflectance at normal incidence.
    /// * `eta`      - Index of refraction.
    /// * `metallic` - Metallic blend factor.
    pub fn new(r0: Spectrum, eta: Float, metallic: Float) -> Fresnel {
        Fresnel::Disney(Self { r0, eta, metallic })
    }

    /// Returns the amount of light reflected by the surface.
    ///
    /// * `cos_theta_i` - Cosine of the angle made by incident direction and
    ///                   surface normal.
    pub fn evaluate(&self, cos_theta_i: Float) -> Spectrum {
        lerp(
            self.metallic,
            Spectrum::new(fr_dielectric(cos_theta_i, 1.0, self.eta)),
            fr_schlick(self.r0, cos_theta_i),
        )
    }
}

/// Returns the fresnel reflection for dielectric materials and unpolarized
/// light.
///
/// * `cos_theta_i` - cos(θi) for angle between incident direction and
///                   surface normal.
/// * `eta_i`       - Index of refraction for medium that incident ray is in.
/// * `eta_t`       - Index of refraction for medium that incident ray is
///                   entering.
pub fn fr_dielectric(cos_theta_i: Float, eta_i: Float, eta_t: Float) -> Float {
    // No interface, nothing is reflected.
    if eta_i == eta_t {
        return 0.0;
    }

    let mut cos_theta_i = clamp(cos_theta_i, -1.0, 1.0);
    let mut eta_i = eta_i;
    let mut eta_t = eta_t;

    // Potentially swap indices of refraction.
    let entering = cos_theta_i > 0.0;
    if !entering {
        swap(&mut eta_i, &mut eta_t);
        cos_theta_i = abs(cos_theta_i);
    }

    // Compute cos(θt) using Snell's law.
    let sin_theta_i = max(0.0, 1.0 - cos_theta_i * cos_theta_i).sqrt();
    let sin_theta_t = eta_i / eta_t * sin_theta_i;

    // Handle total internal reflection.
    if sin_theta_t >= 1.0 {
        return 1.0;
    }

    let cos_theta_t = max(0.0, 1.0 - sin_theta_t * sin_theta_t).sqrt();
    let r_parl = ((eta_t * cos_theta_i) - (eta_i * cos_theta_t))
        / ((eta_t * cos_theta_i) + (eta_i * cos_theta_t));
    let r_perp = ((eta_i * cos_theta_i) - (eta_t * cos_theta_t))
        / ((eta_i * cos_theta_i) + (eta_t * cos_theta_t));
    (r_parl * r_parl + r_perp * r_perp) / 2.0
}

/// Returns the fresnel reflectance at the boundary between a conductor and a
/// dielectric medium.
///
/// * `cos_theta_i` - cos(θi) for angle between incident direction and
///                   surface normal.
/// * `eta_i`       - Index of refraction of the dielectric.
/// * `eta_t`       - Index of refraction of the conductor.
/// * `k`           - Absorption coefficient of the conductor.
pub fn fr_conductor(cos_theta_i: Float, eta_i: Spectrum, eta_t: Spectrum, k: Spectrum) -> Spectrum {
    let cos_theta_i = clamp(cos_theta_i, -1.0, 1.0);
    let eta = eta_t / eta_i;
    let eta_k = k / eta_i;

    let cos_theta_i_2 = cos_theta_i * cos_theta_i;
    let sin_theta_i_2 = 1.0 - cos_theta_i_2;
    let eta_2 = eta * eta;
    let eta_k_2 = eta_k * eta_k;

    let t0 = eta_2 - eta_k_2 - Spectrum::new(sin_theta_i_2);
    let a2_plus_b2 = (t0 * t0 + 4.0 * eta_2 * eta_k_2).sqrt();
    let t1 = a2_plus_b2 + Spectrum::new(cos_theta_i_2);
    let a = (0.5 * (a2_plus_b2 + t0)).clamp_default().sqrt();
    let t2 = 2.0 * cos_theta_i * a;
    let rs = (t1 - t2) / (t1 + t2);

    let t3 = cos_theta_i_2 * a2_plus_b2 + Spectrum::new(sin_theta_i_2 * sin_theta_i_2);
    let t4 = t2 * sin_theta_i_2;
    let rp = rs * (t3 - t4) / (t3 + t4);

    0.5 * (rp + rs)
}

/// Returns the Schlick weight (1 - cos(θ))⁵ used to interpolate towards
/// grazing reflectance.
///
/// * `cos_theta` - Cosine of the angle with the surface normal.
#[inline(always)]
pub fn schlick_weight(cos_theta: Float) -> Float {
    pow5(clamp(1.0 - cos_theta, 0.0, 1.0))
}

/// Schlick's approximation of the Fresnel reflectance given the reflectance
/// at normal incidence. Works for both `Float` and `Spectrum`.
///
/// * `r0`        - Reflectance at normal incidence.
/// * `cos_theta` - Cosine of the angle with the surface normal.
#[inline(always)]
pub fn fr_schlick<T>(r0: T, cos_theta: Float) -> T
where
    T: Add<T, Output = T> + From<Float> + Copy,
    Float: Mul<T, Output = T>,
{
    lerp(schlick_weight(cos_theta), r0, T::from(1.0))
}

/// Returns the reflectance at normal incidence of a dielectric with relative
/// index of refraction `eta`.
///
/// * `eta` - Relative index of refraction.
#[inline(always)]
pub fn schlick_r0_from_eta(eta: Float) -> Float {
    sqr(eta - 1.0) / sqr(eta + 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::*;
    use proptest::prelude::*;

    #[test]
    fn dielectric_normal_incidence() {
        // ((1.5 - 1) / (1.5 + 1))² = 0.04
        let r = fr_dielectric(1.0, 1.0, 1.5);
        assert!(approx_eq!(f32, r, 0.04, epsilon = 1e-6));
        assert!(approx_eq!(f32, r, schlick_r0_from_eta(1.5), epsilon = 1e-6));
    }

    #[test]
    fn dielectric_total_internal_reflection() {
        // Leaving glass beyond the critical angle (~41.8°).
        assert_eq!(fr_dielectric(-0.5, 1.0, 1.5), 1.0);
    }

    #[test]
    fn dielectric_without_interface_at_grazing_angles() {
        let f = FresnelDielectric::new(1.5, 1.5);
        for &cos in [0.0, 1e-4, -1e-4, 1e-3].iter() {
            assert_eq!(f.evaluate(cos), Spectrum::ZERO);
        }
    }

    #[test]
    fn constant_ignores_angle() {
        let f = FresnelConstant::new(Spectrum::new(0.3));
        assert_eq!(f.evaluate(0.1), Spectrum::new(0.3));
        assert_eq!(f.evaluate(-1.0), Spectrum::new(0.3));
    }

    #[test]
    fn conductor_normal_incidence() {
        // ((n - 1)² + k²) / ((n + 1)² + k²)
        let n = 0.2;
        let k = 3.9;
        let expected = ((n - 1.0) * (n - 1.0) + k * k) / ((n + 1.0) * (n + 1.0) + k * k);
        let f = FresnelConductor::new(Spectrum::ONE, Spectrum::new(n), Spectrum::new(k));
        let r = f.evaluate(1.0);
        for c in 0..3 {
            assert!(approx_eq!(f32, r[c], expected, epsilon = 1e-4));
        }
    }

    #[test]
    fn conductor_grazing_reflects_everything() {
        let f = FresnelConductor::new(Spectrum::ONE, Spectrum::new(1.2), Spectrum::new(2.0));
        let r = f.evaluate(0.0);
        assert!(approx_eq!(f32, r[0], 1.0, epsilon = 1e-4));
    }

    #[test]
    fn disney_blend_end_points() {
        let r0 = Spectrum::from_rgb([0.9, 0.5, 0.1]);
        let dielectric = FresnelDisney::new(r0, 1.5, 0.0);
        let metal = FresnelDisney::new(r0, 1.5, 1.0);
        assert!(approx_eq!(f32, dielectric.evaluate(1.0)[0], 0.04, epsilon = 1e-6));
        assert_eq!(metal.evaluate(1.0), r0);
        assert!(approx_eq!(f32, metal.evaluate(0.0)[2], 1.0, epsilon = 1e-6));
    }

    #[test]
    fn schlick_scalar() {
        assert_eq!(fr_schlick(0.04 as Float, 1.0), 0.04);
        assert!(approx_eq!(f32, fr_schlick(0.04 as Float, 0.0), 1.0, epsilon = 1e-6));
    }

    proptest! {
        #[test]
        fn dielectric_without_interface_reflects_nothing(cos in -1.0..1.0f32, eta in 1.0..3.0f32) {
            let f = FresnelDielectric::new(eta, eta);
            prop_assert!(approx_eq!(f32, f.evaluate(cos)[0], 0.0, epsilon = 1e-6));
        }

        #[test]
        fn dielectric_in_unit_range(cos in -1.0..1.0f32, eta in 1.0..3.0f32) {
            let r = fr_dielectric(cos, 1.0, eta);
            prop_assert!((0.0..=1.0).contains(&r));
        }

        #[test]
        fn conductor_in_unit_range(cos in 0.0..1.0f32, n in 0.1..3.0f32, k in 0.0..5.0f32) {
            let r = fr_conductor(cos, Spectrum::ONE, Spectrum::new(n), Spectrum::new(k));
            prop_assert!(r[0] >= 0.0 && r[0] <= 1.0 + 1e-4);
        }
    }
}
