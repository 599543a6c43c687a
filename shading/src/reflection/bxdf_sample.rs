//! BxDF Sample

use super::*;

/// Stores evaluation of BxDF samples.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct BxDFSample {
    /// The sample value.
    pub f: Spectrum,

    /// The value of the PDF.
    pub pdf: Float,

    /// The sampled inbound direction.
    pub wi: Vector3f,

    /// The type of BxDF that produced the sample.
    pub bxdf_type: BxDFType,
}

impl BxDFSample {
    /// Create a new `BxDFSample`.
    ///
    /// * `f`         - The sample value.
    /// * `pdf`       - The value of the PDF.
    /// * `wi`        - The sampled inbound direction.
    /// * `bxdf_type` - The type of BxDF.
    pub fn new(f: Spectrum, pdf: Float, wi: Vector3f, bxdf_type: BxDFType) -> Self {
        Self {
            f,
            pdf,
            wi,
            bxdf_type,
        }
    }

    /// Returns true when sampling failed and the sample must be ignored.
    pub fn is_empty(&self) -> bool {
        self.pdf == 0.0 || self.f.is_black()
    }
}

impl From<BxDFType> for BxDFSample {
    /// Create a failed `BxDFSample` with just the BxDF type and other fields
    /// set to default.
    ///
    /// * `bxdf_type` - The type of BxDF.
    fn from(bxdf_type: BxDFType) -> Self {
        Self::new(Spectrum::ZERO, 0.0, Vector3f::ZERO, bxdf_type)
    }
}
