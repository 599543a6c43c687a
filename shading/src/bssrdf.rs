//! BSSRDF

/// Subsurface scattering functions. There are no variants yet so a value
/// can never be produced; materials that would scatter below the surface
/// report `None` and fall back to surface lobes.
#[derive(Clone, Debug)]
pub enum BSSRDF {}
