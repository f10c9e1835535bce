//! Recursive random partitioning of a canvas into Mondrian-style regions
//!
//! The full canvas is split at random points until both extents of a region
//! drop below a quarter of the corresponding canvas extent. Each such leaf is
//! handed to a [`FillStrategy`]. Children are visited depth-first in a fixed
//! order so a seeded random source always produces the same canvas.

use crate::art::fill::FillStrategy;
use crate::io::configuration::{
    MIN_CANVAS_DIMENSION, SPLIT_MARGIN, SPLIT_SPAN_TRIM, THRESHOLD_DIVISOR,
};
use crate::io::error::{MondrianError, Result};
use crate::math::random::RandomSource;
use crate::spatial::{Canvas, Region};

/// How leaf regions are filled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum Mode {
    /// Every leaf is a plain rectangle
    Basic,
    /// Every leaf picks a rectangle, circle or square at random
    #[default]
    Complex,
}

impl Mode {
    /// Lowercase name used in file names and messages
    pub const fn name(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Complex => "complex",
        }
    }
}

/// Summary of one painting run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PartitionStats {
    /// Leaves filled with a plain rectangle
    pub rectangles: usize,
    /// Leaves filled with a circle
    pub circles: usize,
    /// Leaves filled with a square
    pub squares: usize,
    /// Deepest recursion level reached, the full canvas being level 0
    pub max_depth: usize,
}

impl PartitionStats {
    /// Total number of leaf regions
    pub const fn leaves(&self) -> usize {
        self.rectangles + self.circles + self.squares
    }

    fn record(&mut self, strategy: FillStrategy, depth: usize) {
        match strategy {
            FillStrategy::Rectangle => self.rectangles += 1,
            FillStrategy::Circle => self.circles += 1,
            FillStrategy::Square => self.squares += 1,
        }
        self.max_depth = self.max_depth.max(depth);
    }
}

/// Paint a Mondrian-style artwork made only of rectangles
///
/// # Errors
///
/// Returns [`MondrianError::InvalidArgument`] if either canvas dimension is
/// below 300. The canvas is not modified in that case.
pub fn paint_basic<C, R>(canvas: &mut C, rng: &mut R) -> Result<()>
where
    C: Canvas + ?Sized,
    R: RandomSource + ?Sized,
{
    paint(canvas, rng, Mode::Basic).map(|_| ())
}

/// Paint a Mondrian-style artwork mixing rectangles, squares and circles
///
/// # Errors
///
/// Returns [`MondrianError::InvalidArgument`] if either canvas dimension is
/// below 300. The canvas is not modified in that case.
pub fn paint_complex<C, R>(canvas: &mut C, rng: &mut R) -> Result<()>
where
    C: Canvas + ?Sized,
    R: RandomSource + ?Sized,
{
    paint(canvas, rng, Mode::Complex).map(|_| ())
}

/// Validate the canvas, then partition and fill it in the given mode
///
/// # Errors
///
/// Returns [`MondrianError::InvalidArgument`] if either canvas dimension is
/// below 300. The canvas is not modified in that case.
pub fn paint<C, R>(canvas: &mut C, rng: &mut R, mode: Mode) -> Result<PartitionStats>
where
    C: Canvas + ?Sized,
    R: RandomSource + ?Sized,
{
    validate_canvas(&*canvas)?;

    let region = Region::full(&*canvas);
    let mut partitioner = Partitioner::new(canvas, rng, mode);
    partitioner.partition(region, 0);
    Ok(partitioner.stats)
}

/// Check the entry point size requirement
///
/// # Errors
///
/// Returns [`MondrianError::InvalidArgument`] if either dimension is below
/// [`MIN_CANVAS_DIMENSION`]
pub fn validate_canvas<C: Canvas + ?Sized>(canvas: &C) -> Result<()> {
    let (width, height) = (canvas.width(), canvas.height());
    if width < MIN_CANVAS_DIMENSION || height < MIN_CANVAS_DIMENSION {
        return Err(MondrianError::InvalidArgument {
            width,
            height,
            minimum: MIN_CANVAS_DIMENSION,
        });
    }
    Ok(())
}

/// Draw a split coordinate strictly inside `start..start + extent`
///
/// The result leaves at least [`SPLIT_MARGIN`] cells on either side. Callers
/// only split extents well above [`SPLIT_SPAN_TRIM`]; smaller extents collapse
/// to `start + SPLIT_MARGIN`.
pub fn split_point<R: RandomSource + ?Sized>(start: usize, extent: usize, rng: &mut R) -> usize {
    let span = extent.saturating_sub(SPLIT_SPAN_TRIM);
    let offset = (rng.next_unit() * span as f64) as usize;
    start + SPLIT_MARGIN + offset.min(span.saturating_sub(1))
}

/// Recursion state shared by every level of a painting run
struct Partitioner<'a, C: ?Sized, R: ?Sized> {
    canvas: &'a mut C,
    rng: &'a mut R,
    mode: Mode,
    quarter_width: usize,
    quarter_height: usize,
    stats: PartitionStats,
}

impl<'a, C, R> Partitioner<'a, C, R>
where
    C: Canvas + ?Sized,
    R: RandomSource + ?Sized,
{
    fn new(canvas: &'a mut C, rng: &'a mut R, mode: Mode) -> Self {
        let quarter_width = canvas.width() / THRESHOLD_DIVISOR;
        let quarter_height = canvas.height() / THRESHOLD_DIVISOR;
        Self {
            canvas,
            rng,
            mode,
            quarter_width,
            quarter_height,
            stats: PartitionStats::default(),
        }
    }

    fn partition(&mut self, region: Region, depth: usize) {
        let width = region.width();
        let height = region.height();
        let wide = width >= self.quarter_width;
        let tall = height >= self.quarter_height;

        let Region { x1, x2, y1, y2 } = region;
        match (wide, tall) {
            (false, false) => self.fill_leaf(region, depth),
            (true, true) => {
                let split_x = split_point(x1, width, self.rng);
                let split_y = split_point(y1, height, self.rng);
                self.partition(Region::new(x1, split_x, y1, split_y), depth + 1);
                self.partition(Region::new(split_x, x2, y1, split_y), depth + 1);
                self.partition(Region::new(x1, split_x, split_y, y2), depth + 1);
                self.partition(Region::new(split_x, x2, split_y, y2), depth + 1);
            }
            (true, false) => {
                let split_x = split_point(x1, width, self.rng);
                self.partition(Region::new(x1, split_x, y1, y2), depth + 1);
                self.partition(Region::new(split_x, x2, y1, y2), depth + 1);
            }
            (false, true) => {
                let split_y = split_point(y1, height, self.rng);
                self.partition(Region::new(x1, x2, y1, split_y), depth + 1);
                self.partition(Region::new(x1, x2, split_y, y2), depth + 1);
            }
        }
    }

    fn fill_leaf(&mut self, region: Region, depth: usize) {
        let strategy = match self.mode {
            Mode::Basic => FillStrategy::Rectangle,
            Mode::Complex => FillStrategy::choose(self.rng),
        };
        strategy.apply(self.canvas, region, self.rng);
        self.stats.record(strategy, depth);
    }
}
