//! Viewport quantization
//!
//! Maps a pointer position on the editing surface into the normalized
//! viewport and snaps it to the editor grid.

use crate::data::Point;

/// The editing surface in display coordinates (pixels or terminal cells).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl SurfaceRect {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Normalize a display position. The vertical axis is flipped so that
    /// screen-down becomes value-up. Positions outside the rect are not clamped.
    pub fn normalize(&self, px: f64, py: f64) -> (f64, f64) {
        let x = (px - self.left) / self.width;
        let y = 1.0 - (py - self.top) / self.height;
        (x, y)
    }
}

/// Snaps coordinates to `grid_size` evenly spaced values spanning `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quantizer {
    grid_size: usize,
}

impl Quantizer {
    pub const MIN_GRID_SIZE: usize = 2;

    /// The coarsest grid: just the two edges.
    pub const MIN: Self = Self {
        grid_size: Self::MIN_GRID_SIZE,
    };

    /// `None` when `grid_size` is below [`Quantizer::MIN_GRID_SIZE`].
    pub fn new(grid_size: usize) -> Option<Self> {
        (grid_size >= Self::MIN_GRID_SIZE).then_some(Self { grid_size })
    }

    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    fn steps(&self) -> f64 {
        (self.grid_size - 1) as f64
    }

    /// Nearest grid value to `c`.
    pub fn snap(&self, c: f64) -> f64 {
        let steps = self.steps();
        // + 0.0 turns -0.0 into 0.0
        (c * steps).round() / steps + 0.0
    }

    /// Normalize a display position on `surface` and snap both axes.
    pub fn quantize(&self, surface: &SurfaceRect, px: f64, py: f64) -> Point {
        let (x, y) = surface.normalize(px, py);
        Point::new(self.snap(x), self.snap(y))
    }

    /// The `i`-th grid value, `i / (grid_size - 1)`.
    pub fn grid_value(&self, i: usize) -> f64 {
        i as f64 / self.steps()
    }

    /// All grid values from 0 to 1.
    pub fn grid_values(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.grid_size).map(|i| self.grid_value(i))
    }

    /// Grid node at column `col` (from the left) and row `row` (from the bottom).
    pub fn grid_point(&self, col: usize, row: usize) -> Point {
        Point::new(self.grid_value(col), self.grid_value(row))
    }
}
