//! Canvas abstraction and the in-memory pixel grid

/// Mutable 2D color grids
pub mod canvas;

pub use canvas::{Canvas, PixelGrid, Region};
