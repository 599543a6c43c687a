//! Microfacet Distribution Models

use crate::geometry::*;
use crate::pbrt::*;
use crate::reflection::*;
use std::fmt;

mod disney;
mod trowbridge_reitz;

// Re-exports
pub use disney::*;
pub use trowbridge_reitz::*;

/// Smallest alpha handed to a distribution. Alpha of exactly zero turns the
/// distribution into a delta and produces NaNs.
pub const MIN_ALPHA: Float = 0.001;

/// Microfacet distribution models.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MicrofacetDistribution {
    /// Trowbridge-Reitz (GGX) with height-correlated masking-shadowing.
    TrowbridgeReitz(TrowbridgeReitzDistribution),

    /// Trowbridge-Reitz with the separable masking-shadowing used by the
    /// Disney BRDF.
    Disney(DisneyMicrofacetDistribution),
}

impl MicrofacetDistribution {
    /// Returns the underlying Trowbridge-Reitz distribution.
    fn base(&self) -> &TrowbridgeReitzDistribution {
        match self {
            Self::TrowbridgeReitz(d) => d,
            Self::Disney(d) => d.base(),
        }
    }

    /// Returns the alpha value along the x-axis.
    pub fn alpha_x(&self) -> Float {
        self.base().alpha_x()
    }

    /// Returns the alpha value along the y-axis.
    pub fn alpha_y(&self) -> Float {
        self.base().alpha_y()
    }

    /// Returns whether or not the visible area is sampled.
    pub fn sample_visible_area(&self) -> bool {
        self.base().sample_visible_area()
    }

    /// Return the differential area of microfacets oriented with the surface
    /// normal `wh`.
    ///
    /// * `wh` - A sample normal from the distrubition of normal vectors.
    pub fn d(&self, wh: &Vector3f) -> Float {
        self.base().d(wh)
    }

    /// Returns the invisible masked microfacet area per visible microfacet area.
    ///
    /// * `w` - The direction from camera/viewer.
    pub fn lambda(&self, w: &Vector3f) -> Float {
        self.base().lambda(w)
    }

    /// Evaluates Smith's masking function which gives the fraction of
    /// microfacets that are visible from a given direction.
    ///
    /// * `w` - The direction from camera/viewer.
    pub fn g1(&self, w: &Vector3f) -> Float {
        1.0 / (1.0 + self.lambda(w))
    }

    /// Returns the fraction of microfacets in a differential area that are
    /// visible from both directions `wo` and `wi`.
    ///
    /// * `wo` - Outgoing direction.
    /// * `wi` - Incident direction.
    pub fn g(&self, wo: &Vector3f, wi: &Vector3f) -> Float {
        match self {
            Self::TrowbridgeReitz(_) => 1.0 / (1.0 + self.lambda(wo) + self.lambda(wi)),
            Self::Disney(_) => self.g1(wo) * self.g1(wi),
        }
    }

    /// Returns a sample from the distribution of normal vectors.
    ///
    /// * `wo` - Outgoing direction.
    /// * `u`  - The 2D uniform random values.
    pub fn sample_wh(&self, wo: &Vector3f, u: &Point2f) -> Vector3f {
        self.base().sample_wh(wo, u)
    }

    /// Evaluates the PDF for the given outgoing direction and sampled surface
    /// normal.
    ///
    /// * `wo` - Outgoing direction.
    /// * `wh` - A sample normal from the distrubition of normal vectors.
    pub fn pdf(&self, wo: &Vector3f, wh: &Vector3f) -> Float {
        if self.sample_visible_area() {
            let cos_o = abs_cos_theta(wo);
            if cos_o == 0.0 {
                0.0
            } else {
                self.d(wh) * self.g1(wo) * wo.abs_dot(wh) / cos_o
            }
        } else {
            self.d(wh) * abs_cos_theta(wh)
        }
    }
}

impl From<TrowbridgeReitzDistribution> for MicrofacetDistribution {
    fn from(d: TrowbridgeReitzDistribution) -> Self {
        Self::TrowbridgeReitz(d)
    }
}

impl From<DisneyMicrofacetDistribution> for MicrofacetDistribution {
    fn from(d: DisneyMicrofacetDistribution) -> Self {
        Self::Disney(d)
    }
}

impl fmt::Display for MicrofacetDistribution {
    /// Formats the value using the given formatter.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::TrowbridgeReitz(_) => "TrowbridgeReitz",
            Self::Disney(_) => "Disney",
        };
        write!(
            f,
            "{} {{ alpha_x: {}, alpha_y: {}, sample_visible_area: {} }}",
            name,
            self.alpha_x(),
            self.alpha_y(),
            self.sample_visible_area()
        )
    }
}

/// Derives anisotropic alphas from a perceptual roughness and an
/// anisotropy amount in [0, 1]. Returns `(alpha_x, alpha_y)`.
///
/// * `roughness`   - Perceptual roughness.
/// * `anisotropic` - Anisotropy amount.
pub fn anisotropic_alpha(roughness: Float, anisotropic: Float) -> (Float, Float) {
    let aspect = (1.0 - 0.9 * clamp(anisotropic, 0.0, 1.0)).sqrt();
    let r2 = roughness * roughness;
    (max(MIN_ALPHA, r2 / aspect), max(MIN_ALPHA, r2 * aspect))
}
