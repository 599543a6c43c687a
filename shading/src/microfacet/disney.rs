//! Disney Microfacet Distribution

use super::*;

/// Trowbridge-Reitz distribution whose masking-shadowing term is the
/// product of the two single direction masking terms instead of the height
/// correlated form.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DisneyMicrofacetDistribution {
    /// The wrapped distribution providing `D`, `Λ` and sampling.
    base: TrowbridgeReitzDistribution,
}

impl DisneyMicrofacetDistribution {
    /// Create a new `DisneyMicrofacetDistribution`. Visible area sampling is
    /// always used.
    ///
    /// * `alpha_x` - Alpha along the x-axis.
    /// * `alpha_y` - Alpha along the y-axis.
    pub fn new(alpha_x: Float, alpha_y: Float) -> Self {
        Self {
            base: TrowbridgeReitzDistribution::new(alpha_x, alpha_y, true),
        }
    }

    /// Returns the wrapped Trowbridge-Reitz distribution.
    pub fn base(&self) -> &TrowbridgeReitzDistribution {
        &self.base
    }
}
