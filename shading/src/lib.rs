//! Surface shading core: scattering lobes, BSDFs and the parameter plumbing
//! used by materials.

#[macro_use]
extern crate hexf;

#[macro_use]
extern crate log;

pub mod bssrdf;
pub mod geometry;
pub mod graph;
pub mod interaction;
pub mod material;
pub mod microfacet;
pub mod paramset;
pub mod pbrt;
pub mod reflection;
pub mod rng;
pub mod sampling;
pub mod spectrum;
pub mod texture;
