//! Partition constants and runtime configuration defaults

// Canvas requirements enforced at the public entry points
/// Minimum width and height accepted by the painting entry points
pub const MIN_CANVAS_DIMENSION: usize = 300;

// Partition geometry
/// Minimum distance kept between a split line and either edge of the region
pub const SPLIT_MARGIN: usize = 10;

/// Amount subtracted from a region extent to get the split draw span
pub const SPLIT_SPAN_TRIM: usize = 19;

/// Divisor applied to the full canvas dimensions to get the leaf thresholds
pub const THRESHOLD_DIVISOR: usize = 4;

/// Width of the black ring left around every rectangle fill
pub const SHAPE_BORDER_WIDTH: usize = 1;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

/// Default canvas width in pixels
pub const DEFAULT_WIDTH: usize = 800;

/// Default canvas height in pixels
pub const DEFAULT_HEIGHT: usize = 600;

/// Default number of artworks produced per run
pub const DEFAULT_COUNT: usize = 1;

// Output settings
/// Prefix for generated artwork file names in batch mode
pub const OUTPUT_PREFIX: &str = "mondrian";
/// Extension of exported artworks
pub const OUTPUT_EXTENSION: &str = "png";
