//! Glyph data model: points, paths and the per-character glyph set.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::data::alphabet;

/// A point in the normalized viewport. `x` grows rightward, `y` upward.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Ordered points of one glyph. Consecutive pairs form stroke segments.
pub type Path = Vec<Point>;

/// `path` with `point` appended.
pub fn appended(path: &[Point], point: Point) -> Path {
    let mut next = Vec::with_capacity(path.len() + 1);
    next.extend_from_slice(path);
    next.push(point);
    next
}

/// `path` without its final point. Empty stays empty.
pub fn without_last(path: &[Point]) -> Path {
    path[..path.len().saturating_sub(1)].to_vec()
}

/// The empty path.
pub fn cleared(_path: &[Point]) -> Path {
    Vec::new()
}

/// Paths for every alphabet character, stored in alphabet order.
///
/// The key set is fixed: every alphabet character always has a path
/// (possibly empty) and nothing else can be stored.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphSet {
    paths: Vec<Path>,
}

impl Default for GlyphSet {
    fn default() -> Self {
        Self::new()
    }
}

impl GlyphSet {
    /// Every alphabet character mapped to an empty path.
    pub fn new() -> Self {
        Self {
            paths: vec![Vec::new(); alphabet::ALPHABET_LEN],
        }
    }

    pub fn path(&self, c: char) -> Option<&[Point]> {
        alphabet::index_of(c).map(|i| self.paths[i].as_slice())
    }

    /// Replace the path for `c`. Returns false when `c` is not in the alphabet.
    pub fn set_path(&mut self, c: char, path: Path) -> bool {
        match alphabet::index_of(c) {
            Some(i) => {
                self.paths[i] = path;
                true
            }
            None => false,
        }
    }

    /// Replace the path for `c` with `f(old path)`.
    pub fn update_path(&mut self, c: char, f: impl FnOnce(&[Point]) -> Path) -> bool {
        match alphabet::index_of(c) {
            Some(i) => {
                self.paths[i] = f(&self.paths[i]);
                true
            }
            None => false,
        }
    }

    /// `(character, path)` pairs in alphabet order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &[Point])> + '_ {
        alphabet::chars().zip(self.paths.iter().map(Vec::as_slice))
    }

    pub fn keys(&self) -> impl Iterator<Item = char> + '_ {
        self.iter().map(|(c, _)| c)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn total_points(&self) -> usize {
        self.paths.iter().map(Vec::len).sum()
    }

    /// Overwrite the path of every character present in `import`.
    /// Characters absent from the import keep their paths.
    pub fn merge(&mut self, import: GlyphImport) -> usize {
        let mut replaced = 0;
        for (c, path) in import.entries {
            if self.set_path(c, path) {
                replaced += 1;
            }
        }
        replaced
    }
}

impl Serialize for GlyphSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (c, path) in self.iter() {
            map.serialize_entry(&c, path)?;
        }
        map.end()
    }
}

/// Glyph paths read back from the clipboard, ready to merge.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GlyphImport {
    pub entries: Vec<(char, Path)>,
    /// Keys that were not a single alphabet character.
    pub skipped: Vec<String>,
}
