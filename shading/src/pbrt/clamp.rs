//! Clamp

use super::{Float, INFINITY};
use num_traits::Num;

/// Clamps a value x to [min, max].
///
/// * `x`   - The number to clamp.
/// * `min` - Minimum value.
/// * `max` - Maximum value.
pub fn clamp<T>(x: T, min: T, max: T) -> T
where
    T: Num + PartialOrd + Copy,
{
    if x < min {
        min
    } else if x > max {
        max
    } else {
        x
    }
}

/// Interface for clamping values.
pub trait Clamp<T: Copy> {
    /// Clamps the values to given [low, high] interval.
    ///
    /// * `low`  - Low value.
    /// * `high` - High value.
    fn clamp(&self, low: T, high: T) -> Self;

    /// Clamps the values to some default [low, high] interval determined by
    /// `T`.
    fn clamp_default(&self) -> Self;
}

impl Clamp<Float> for Float {
    /// Clamps the values to given [low, high] interval.
    ///
    /// * `low`  - Low value.
    /// * `high` - High value.
    fn clamp(&self, low: Float, high: Float) -> Self {
        clamp(*self, low, high)
    }

    /// Clamps the values to [0.0, INFINITY]. NaN maps to 0.0.
    fn clamp_default(&self) -> Self {
        if self.is_nan() {
            0.0
        } else {
            clamp(*self, 0.0, INFINITY)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_default_rejects_negative_energy() {
        assert_eq!((-0.25 as Float).clamp_default(), 0.0);
        assert_eq!((0.25 as Float).clamp_default(), 0.25);
        assert_eq!(Float::NAN.clamp_default(), 0.0);
    }

    #[test]
    fn clamp_to_interval() {
        assert_eq!(clamp(5, 0, 3), 3);
        assert_eq!(clamp(-1.0, 0.0, 1.0), 0.0);
        assert_eq!((0.5 as Float).clamp(0.0, 0.25), 0.25);
    }
}
