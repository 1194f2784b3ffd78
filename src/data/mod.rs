//! Glyph data: the alphabet, points and paths, and the two text formats
//! a glyph set can be written as.

pub mod alphabet;
pub mod glyph_set;
pub mod json;
pub mod source_export;

pub use glyph_set::{GlyphImport, GlyphSet, Path, Point};
