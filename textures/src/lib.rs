//! Textures

mod constant;
mod mix;
mod scale;

// Re-export
pub use constant::*;
pub use mix::*;
pub use scale::*;
