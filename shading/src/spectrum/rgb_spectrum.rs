//! RGB Spectrum.

use crate::pbrt::*;
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub};

/// Number of spectral samples to use for `RGBSpectrum`.
pub const RGB_SAMPLES: usize = 3;

/// RGBSpectrum represents an spectral power distribution (SPD) with
/// a weighted sum of red, green and blue components.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct RGBSpectrum {
    /// The sampled spectral values.
    c: [Float; RGB_SAMPLES],
}

impl RGBSpectrum {
    /// Black.
    pub const ZERO: Self = Self { c: [0.0; RGB_SAMPLES] };

    /// White.
    pub const ONE: Self = Self { c: [1.0; RGB_SAMPLES] };

    /// Create a new `RGBSpectrum` with a constant value across all
    /// wavelengths.
    ///
    /// * `v` - Constant value.
    pub const fn new(v: Float) -> Self {
        Self { c: [v; RGB_SAMPLES] }
    }

    /// Create a new `RGBSpectrum` from red, green and blue coefficients.
    ///
    /// * `rgb` - RGB value.
    pub const fn from_rgb(rgb: [Float; 3]) -> Self {
        Self { c: rgb }
    }

    /// Returns the RGB coefficients.
    pub fn to_rgb(&self) -> [Float; 3] {
        self.c
    }

    /// Returns true if all sample values are zero.
    pub fn is_black(&self) -> bool {
        self.c.iter().all(|v| *v == 0.0)
    }

    /// Returns true if any sample value is NaN.
    pub fn has_nans(&self) -> bool {
        self.c.iter().any(|v| v.is_nan())
    }

    /// Returns the y-coefficient of XYZ colour (luminance).
    pub fn y(&self) -> Float {
        0.212671 * self.c[0] + 0.715160 * self.c[1] + 0.072169 * self.c[2]
    }

    /// Returns the largest sample value.
    pub fn max_component_value(&self) -> Float {
        max(self.c[0], max(self.c[1], self.c[2]))
    }

    /// Applies `f` to every sample value.
    ///
    /// * `f` - The function.
    pub fn map<F: Fn(Float) -> Float>(&self, f: F) -> Self {
        Self {
            c: [f(self.c[0]), f(self.c[1]), f(self.c[2])],
        }
    }

    /// Takes the square root of all sample values.
    pub fn sqrt(&self) -> Self {
        self.map(|v| v.sqrt())
    }

    /// Raises e to the sample values.
    pub fn exp(&self) -> Self {
        self.map(|v| v.exp())
    }

    /// Raises the sample values to a given power.
    ///
    /// * `p` - The power.
    pub fn pow(&self, p: Float) -> Self {
        self.map(|v| v.powf(p))
    }
}

impl Clamp<Float> for RGBSpectrum {
    /// Clamps the sample values to given [low, high] interval.
    ///
    /// * `low`  - Low value.
    /// * `high` - High value.
    fn clamp(&self, low: Float, high: Float) -> Self {
        self.map(|v| clamp(v, low, high))
    }

    /// Clamps the sample values to [0.0, INFINITY]. NaN maps to 0.0.
    fn clamp_default(&self) -> Self {
        self.map(|v| v.clamp_default())
    }
}

/// Generates the per-sample binary operators.
macro_rules! spectrum_binop {
    ($trait: ident, $func: ident, $assign_trait: ident, $assign_func: ident, $op: tt) => {
        impl $trait for RGBSpectrum {
            type Output = Self;

            fn $func(self, other: Self) -> Self::Output {
                Self {
                    c: [
                        self.c[0] $op other.c[0],
                        self.c[1] $op other.c[1],
                        self.c[2] $op other.c[2],
                    ],
                }
            }
        }

        impl $trait<Float> for RGBSpectrum {
            type Output = Self;

            fn $func(self, f: Float) -> Self::Output {
                Self {
                    c: [self.c[0] $op f, self.c[1] $op f, self.c[2] $op f],
                }
            }
        }

        impl $assign_trait for RGBSpectrum {
            fn $assign_func(&mut self, other: Self) {
                *self = *self $op other;
            }
        }

        impl $assign_trait<Float> for RGBSpectrum {
            fn $assign_func(&mut self, f: Float) {
                *self = *self $op f;
            }
        }
    };
}

spectrum_binop!(Add, add, AddAssign, add_assign, +);
spectrum_binop!(Mul, mul, MulAssign, mul_assign, *);
spectrum_binop!(Div, div, DivAssign, div_assign, /);

impl Sub for RGBSpectrum {
    type Output = Self;

    /// Subtracts the corresponding sample values from another `RGBSpectrum`.
    ///
    /// * `other` - The other `RGBSpectrum`.
    fn sub(self, other: Self) -> Self::Output {
        Self {
            c: [
                self.c[0] - other.c[0],
                self.c[1] - other.c[1],
                self.c[2] - other.c[2],
            ],
        }
    }
}

impl Mul<RGBSpectrum> for Float {
    type Output = RGBSpectrum;

    /// Scales the sample values of an `RGBSpectrum`.
    ///
    /// * `s` - Sample values.
    fn mul(self, s: RGBSpectrum) -> Self::Output {
        s * self
    }
}

impl Neg for RGBSpectrum {
    type Output = Self;

    /// Negates the sample values.
    fn neg(self) -> Self::Output {
        self.map(|v| -v)
    }
}

impl Index<usize> for RGBSpectrum {
    type Output = Float;

    /// Returns a sample value at given index.
    ///
    /// * `i` - The index.
    fn index(&self, i: usize) -> &Self::Output {
        &self.c[i]
    }
}

impl IndexMut<usize> for RGBSpectrum {
    /// Returns a mutable sample value at given index.
    ///
    /// * `i` - The index.
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        &mut self.c[i]
    }
}

impl From<Float> for RGBSpectrum {
    /// Create a constant `RGBSpectrum`.
    ///
    /// * `v` - Constant value.
    fn from(v: Float) -> Self {
        Self::new(v)
    }
}

impl fmt::Display for RGBSpectrum {
    /// Formats the value using the given formatter.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self.c[0], self.c[1], self.c[2])
    }
}
