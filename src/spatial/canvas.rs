//! Canvas trait consumed by the painter and an ndarray-backed implementation
//!
//! Cells are addressed as `(row, col)`. The painter never resizes a canvas; it
//! only reads dimensions and overwrites individual cells.

use ndarray::Array2;

use crate::art::palette::Color;

/// Mutable grid of colors with fixed dimensions
pub trait Canvas {
    /// Number of columns
    fn width(&self) -> usize;

    /// Number of rows
    fn height(&self) -> usize;

    /// Color at `(row, col)`, `None` when out of range
    fn get(&self, row: usize, col: usize) -> Option<Color>;

    /// Overwrite the color at `(row, col)`; out-of-range writes are ignored
    fn set(&mut self, row: usize, col: usize, color: Color);
}

/// Half-open rectangle of canvas cells
///
/// `x1..x2` are columns and `y1..y2` are rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    /// Leftmost column (inclusive)
    pub x1: usize,
    /// Rightmost column (exclusive)
    pub x2: usize,
    /// Top row (inclusive)
    pub y1: usize,
    /// Bottom row (exclusive)
    pub y2: usize,
}

impl Region {
    /// Create a region from its column and row bounds
    pub const fn new(x1: usize, x2: usize, y1: usize, y2: usize) -> Self {
        Self { x1, x2, y1, y2 }
    }

    /// Region covering the whole canvas
    pub fn full<C: Canvas + ?Sized>(canvas: &C) -> Self {
        Self::new(0, canvas.width(), 0, canvas.height())
    }

    /// Number of columns spanned
    pub const fn width(&self) -> usize {
        self.x2.saturating_sub(self.x1)
    }

    /// Number of rows spanned
    pub const fn height(&self) -> usize {
        self.y2.saturating_sub(self.y1)
    }

    /// Check if a cell lies inside the region
    pub const fn contains(&self, row: usize, col: usize) -> bool {
        row >= self.y1 && row < self.y2 && col >= self.x1 && col < self.x2
    }
}

/// Owned canvas storing one [`Color`] per cell, initialized to black
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    /// Cell colors indexed by `[row, col]`
    pub pixels: Array2<Color>,
}

impl PixelGrid {
    /// Create a black canvas with the given dimensions
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, Color::Black)
    }

    /// Create a canvas with every cell set to `color`
    pub fn filled(width: usize, height: usize, color: Color) -> Self {
        Self {
            pixels: Array2::from_elem((height, width), color),
        }
    }

    /// Canvas with no cells, which every painting entry point rejects
    pub fn empty() -> Self {
        Self::new(0, 0)
    }

    /// Count cells holding `color`
    pub fn count(&self, color: Color) -> usize {
        self.pixels.iter().filter(|&&c| c == color).count()
    }

    /// Iterate over all cell colors in row-major order
    pub fn colors(&self) -> impl Iterator<Item = Color> + '_ {
        self.pixels.iter().copied()
    }
}

impl Canvas for PixelGrid {
    fn width(&self) -> usize {
        self.pixels.ncols()
    }

    fn height(&self) -> usize {
        self.pixels.nrows()
    }

    fn get(&self, row: usize, col: usize) -> Option<Color> {
        self.pixels.get([row, col]).copied()
    }

    fn set(&mut self, row: usize, col: usize, color: Color) {
        if let Some(cell) = self.pixels.get_mut([row, col]) {
            *cell = color;
        }
    }
}
