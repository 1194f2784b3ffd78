//! Geometric Primitives and Operations

pub mod quantize;
pub mod segments;

// Re-export commonly used items
pub use quantize::{Quantizer, SurfaceRect};
pub use segments::{segment_count, segments};
