//! Materials

#[macro_use]
extern crate log;

mod disney;
mod glass;
mod hair;
mod material;
mod matte;
mod metal;
mod mirror;
mod plastic;
mod substrate;
mod uber;

#[cfg(test)]
mod test_utils;

// Re-export
pub use disney::*;
pub use glass::*;
pub use hair::*;
pub use material::*;
pub use matte::*;
pub use metal::*;
pub use mirror::*;
pub use plastic::*;
pub use substrate::*;
pub use uber::*;
