//! Mondrian-style grid art by recursive random partitioning
//!
//! A canvas is split at random points until every region is smaller than a
//! quarter of the canvas on both axes. Each leaf region is then painted as a
//! flat rectangle, an inscribed square or an inscribed circle, leaving black
//! borders between regions.

#![forbid(unsafe_code)]

/// Recursive partitioning, fill strategies and the color palette
pub mod art;
/// Command-line processing, PNG export, configuration and error handling
pub mod io;
/// Injectable random sources
pub mod math;
/// Canvas abstraction and pixel grid storage
pub mod spatial;

pub use art::palette::Color;
pub use art::partition::{Mode, PartitionStats, paint, paint_basic, paint_complex};
pub use io::error::{MondrianError, Result};
pub use math::random::{RandomSource, ScriptedRandom, SeededRandom};
pub use spatial::{Canvas, PixelGrid, Region};
