//! JSON clipboard format.
//!
//! A glyph set is exchanged as an object from single-character keys to
//! arrays of `{"x": number, "y": number}` objects.

use anyhow::Context;
use serde_json::{Map, Value};
use tracing::warn;

use crate::core::errors::GlyphResult;
use crate::data::alphabet;
use crate::data::glyph_set::{GlyphImport, GlyphSet, Path};

/// Serialize the whole glyph set in alphabet order.
pub fn to_json(glyphs: &GlyphSet) -> GlyphResult<String> {
    serde_json::to_string(glyphs).context("Failed to serialize glyph set")
}

/// Parse clipboard text into an import.
///
/// Keys that are not a single alphabet character are skipped, whatever their
/// value, so that a merge can never change the glyph set's key set. A glyph
/// key whose value is not a point array rejects the whole import.
pub fn parse_import(text: &str) -> GlyphResult<GlyphImport> {
    let raw: Map<String, Value> =
        serde_json::from_str(text.trim()).context("Clipboard does not contain a glyph set")?;

    let mut import = GlyphImport::default();
    for (key, value) in raw {
        let mut chars = key.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if alphabet::contains(c) => {
                let path: Path = serde_json::from_value(value)
                    .with_context(|| format!("Glyph {key:?} is not a list of points"))?;
                import.entries.push((c, path));
            }
            _ => {
                warn!("Skipping unknown glyph key {:?} in import", key);
                import.skipped.push(key);
            }
        }
    }

    // Map key order is not the alphabet order
    import
        .entries
        .sort_by_key(|(c, _)| alphabet::index_of(*c).unwrap_or(usize::MAX));
    Ok(import)
}
