//! C++ source export.
//!
//! Produces a `std::unordered_map<char, std::vector<Vec2>>` initializer that
//! can be pasted into a renderer. One-way: this text is never imported.

use crate::data::glyph_set::{GlyphSet, Point};

const HEADER: &str = "std::unordered_map<char, std::vector<Vec2>> glyphs{\n";
const FOOTER: &str = "};";

/// Render every glyph, empty ones included, in alphabet order.
pub fn to_cpp_source(glyphs: &GlyphSet) -> String {
    let mut cpp = String::from(HEADER);
    for (c, path) in glyphs.iter() {
        cpp.push_str(&format!("\t{{ '\\x{:x}', {{", c as u32));
        for point in path {
            cpp.push_str(&format_point(point));
        }
        cpp.push_str("}},\n");
    }
    cpp.push_str(FOOTER);
    cpp
}

/// Magnitudes outside this range are written in exponent form.
const PLAIN_RANGE: std::ops::Range<f64> = 1e-5..1e16;

/// `{ x, y }, ` with shortest round-trip decimals (`0`, `0.25`, `1`).
fn format_point(point: &Point) -> String {
    format!("{{ {}, {} }}, ", format_coordinate(point.x), format_coordinate(point.y))
}

/// Plain decimals for ordinary values, `1e300` style past [`PLAIN_RANGE`] so
/// huge imported values stay valid C++ floating literals.
fn format_coordinate(value: f64) -> String {
    if value == 0.0 || PLAIN_RANGE.contains(&value.abs()) {
        format!("{value}")
    } else {
        format!("{value:e}")
    }
}
