//! Common

#![allow(dead_code)]

use super::clamp::*;
use num_traits::Num;
use std::ops::{Add, Mul, Neg};

/// Use 32-bit precision for floating point numbers.
pub type Float = f32;

/// Default signed integer to 32-bit.
pub type Int = i32;

/// Infinty (∞)
pub const INFINITY: Float = Float::INFINITY;

/// PI (π)
pub const PI: Float = std::f32::consts::PI;

/// 1/PI (1/π)
pub const INV_PI: Float = 1.0 / PI;

/// PI/2 (π/2)
pub const PI_OVER_TWO: Float = PI * 0.5;

/// PI/4 (π/4)
pub const PI_OVER_FOUR: Float = PI * 0.25;

/// 2*PI (2π)
pub const TWO_PI: Float = PI * 2.0;

/// 1/2*PI (1/2π)
pub const INV_TWO_PI: Float = 1.0 / TWO_PI;

/// 4*PI (4π)
pub const FOUR_PI: Float = PI * 4.0;

/// 1/4*PI (1/4π)
pub const INV_FOUR_PI: Float = 1.0 / FOUR_PI;

/// Machine Epsilon
pub const MACHINE_EPSILON: Float = std::f32::EPSILON * 0.5;

/// Returns the absolute value of a number.
///
/// * `n` - The number.
#[inline(always)]
pub fn abs<T>(n: T) -> T
where
    T: Num + Neg<Output = T> + PartialOrd + Copy,
{
    if n < T::zero() {
        -n
    } else {
        n
    }
}

/// Returns the minimum of 2 numbers.
///
/// * `a` - First number.
/// * `b` - Second number.
#[inline(always)]
pub fn min<T>(a: T, b: T) -> T
where
    T: Num + PartialOrd + Copy,
{
    if a < b {
        a
    } else {
        b
    }
}

/// Returns the maximum of 2 numbers.
///
/// * `a` - First number.
/// * `b` - Second number.
#[inline(always)]
pub fn max<T>(a: T, b: T) -> T
where
    T: Num + PartialOrd + Copy,
{
    if a > b {
        a
    } else {
        b
    }
}

/// Linearly interpolate between two points for parameters in [0, 1] and
/// extrapolate for parameters outside that interval.
///
/// * `t`  - Parameter.
/// * `p0` - Point at t=0.
/// * `p1` - Point at t=1.
#[inline(always)]
pub fn lerp<P>(t: Float, p0: P, p1: P) -> P
where
    Float: Mul<P, Output = P>,
    P: Add<P, Output = P>,
{
    (1.0 - t) * p0 + t * p1
}

/// Returns `v^5`.
///
/// * `v` - The value.
#[inline(always)]
pub fn pow5<T: Mul<T, Output = T> + Copy>(v: T) -> T {
    (v * v) * (v * v) * v
}

/// Returns `v^2`.
///
/// * `v` - The value.
#[inline(always)]
pub fn sqr<T: Mul<T, Output = T> + Copy>(v: T) -> T {
    v * v
}

/// Square root that maps negative arguments (from round-off) to zero.
///
/// * `x` - The value.
#[inline(always)]
pub fn safe_sqrt(x: Float) -> Float {
    max(0.0, x).sqrt()
}

/// Arcsine with its argument clamped to [-1, 1].
///
/// * `x` - The value.
#[inline(always)]
pub fn safe_asin(x: Float) -> Float {
    clamp(x, -1.0, 1.0).asin()
}

/// Return the cosine of an angle.
///
/// * `theta` - The angle in radians.
#[inline(always)]
pub fn cos(theta: Float) -> Float {
    theta.cos()
}

/// Return the sine of an angle.
///
/// * `theta` - The angle in radians.
#[inline(always)]
pub fn sin(theta: Float) -> Float {
    theta.sin()
}

/// Return the tangent of an angle.
///
/// * `theta` - The angle in radians.
#[inline(always)]
pub fn tan(theta: Float) -> Float {
    theta.tan()
}

/// Computes the arctangent of a number. Return value is in radians in the range
/// [-π/2, π/2];
///
/// * `theta` - The angle in radians.
#[inline(always)]
pub fn atan(theta: Float) -> Float {
    theta.atan()
}

/// Computes the four quadrant arctangent of `y/x`.
///
/// * `y` - Proportion of y-coordinate.
/// * `x` - Proportion of x-coordinate.
#[inline(always)]
pub fn atan2(y: Float, x: Float) -> Float {
    y.atan2(x)
}
