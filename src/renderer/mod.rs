//! WebGPU rendering module
//!
//! Three pipelines share one WGSL module: lit meshes, matcap-shaded meshes,
//! and the hairy-sphere line strips.

pub mod pipeline;
pub mod vertex;

pub use pipeline::RenderState;
