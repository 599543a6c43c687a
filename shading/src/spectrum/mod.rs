//! Spectrum

mod rgb_spectrum;

// Re-export
pub use rgb_spectrum::*;

/// Renders use RGB coefficients throughout.
pub type Spectrum = RGBSpectrum;
