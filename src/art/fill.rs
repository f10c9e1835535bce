//! Leaf fills: plain rectangle, inscribed square and inscribed circle
//!
//! Every fill draws its color from the palette and writes straight into the
//! canvas. Cells a fill does not cover keep their previous color, which on a
//! fresh canvas is the black background that forms the visible borders.

use crate::art::palette::{Color, random_fill_color};
use crate::io::configuration::SHAPE_BORDER_WIDTH;
use crate::math::random::RandomSource;
use crate::spatial::{Canvas, Region};

/// Shape painted into a leaf region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FillStrategy {
    /// Region interior inside a one-cell border
    Rectangle,
    /// Largest circle centered in the region
    Circle,
    /// Largest centered square, then filled like a rectangle
    Square,
}

/// Strategies in the order they are drawn by [`FillStrategy::choose`]
pub const COMPLEX_STRATEGIES: [FillStrategy; 3] = [
    FillStrategy::Rectangle,
    FillStrategy::Circle,
    FillStrategy::Square,
];

impl FillStrategy {
    /// Draw a strategy uniformly, consuming one random value
    pub fn choose<R: RandomSource + ?Sized>(rng: &mut R) -> Self {
        let index = rng.choose_index(COMPLEX_STRATEGIES.len());
        COMPLEX_STRATEGIES
            .get(index)
            .copied()
            .unwrap_or(Self::Square)
    }

    /// Paint this shape into `region`
    pub fn apply<C, R>(self, canvas: &mut C, region: Region, rng: &mut R)
    where
        C: Canvas + ?Sized,
        R: RandomSource + ?Sized,
    {
        match self {
            Self::Rectangle => fill_rectangle(canvas, region, rng),
            Self::Circle => fill_circle(canvas, region, rng),
            Self::Square => fill_square(canvas, region, rng),
        }
    }
}

/// Fill the interior of `region` with one random palette color
///
/// Rows `y1 + 1 ..= y2 - 2` and columns `x1 + 1 ..= x2 - 2` are painted; the
/// outer ring is left untouched. Regions two cells wide or tall (or less)
/// have no interior and leave the canvas unchanged, though a color is still
/// drawn.
pub fn fill_rectangle<C, R>(canvas: &mut C, region: Region, rng: &mut R)
where
    C: Canvas + ?Sized,
    R: RandomSource + ?Sized,
{
    let color = random_fill_color(rng);
    paint_interior(canvas, region, color);
}

/// Fill the largest centered square inside `region`
///
/// See [`inscribed_square`] for the geometry.
pub fn fill_square<C, R>(canvas: &mut C, region: Region, rng: &mut R)
where
    C: Canvas + ?Sized,
    R: RandomSource + ?Sized,
{
    fill_rectangle(canvas, inscribed_square(region), rng);
}

/// Fill the largest circle centered in `region`
///
/// The radius is `min(width, height) / 2 - 1` around center
/// `(x1 + width / 2, y1 + height / 2)`. Every cell of the canvas within that
/// distance of the center is painted, without clipping to `region`.
pub fn fill_circle<C, R>(canvas: &mut C, region: Region, rng: &mut R)
where
    C: Canvas + ?Sized,
    R: RandomSource + ?Sized,
{
    let color = random_fill_color(rng);
    let (center_col, center_row, radius) = inscribed_circle(region);
    let radius_squared = radius * radius;

    // Cells outside the circle's bounding box never pass the distance test
    let reach = radius.unsigned_abs() as usize;
    let row_start = (center_row as usize).saturating_sub(reach);
    let row_end = (center_row as usize + reach + 1).min(canvas.height());
    let col_start = (center_col as usize).saturating_sub(reach);
    let col_end = (center_col as usize + reach + 1).min(canvas.width());

    for row in row_start..row_end {
        let dy = row as i64 - center_row;
        for col in col_start..col_end {
            let dx = col as i64 - center_col;
            if dy * dy + dx * dx <= radius_squared {
                canvas.set(row, col, color);
            }
        }
    }
}

/// Largest centered square inside `region`
///
/// The longer axis is shrunk by half the difference of the two extents on
/// each side. Integer division keeps odd differences one cell closer to the
/// start of the axis.
pub const fn inscribed_square(region: Region) -> Region {
    let width = region.width();
    let height = region.height();
    if height > width {
        let change = (height - width) / 2;
        Region::new(region.x1, region.x2, region.y1 + change, region.y2 - change)
    } else {
        let change = (width - height) / 2;
        Region::new(region.x1 + change, region.x2 - change, region.y1, region.y2)
    }
}

/// Center column, center row and radius of the circle inscribed in `region`
///
/// Degenerate regions narrower than two cells produce a negative radius.
pub const fn inscribed_circle(region: Region) -> (i64, i64, i64) {
    let width = region.width();
    let height = region.height();
    let shorter = if width < height { width } else { height };
    let radius = (shorter / 2) as i64 - 1;
    let center_col = (region.x1 + width / 2) as i64;
    let center_row = (region.y1 + height / 2) as i64;
    (center_col, center_row, radius)
}

fn paint_interior<C: Canvas + ?Sized>(canvas: &mut C, region: Region, color: Color) {
    let rows = region.y1 + SHAPE_BORDER_WIDTH..region.y2.saturating_sub(SHAPE_BORDER_WIDTH);
    let cols = region.x1 + SHAPE_BORDER_WIDTH..region.x2.saturating_sub(SHAPE_BORDER_WIDTH);
    for row in rows {
        for col in cols.clone() {
            canvas.set(row, col, color);
        }
    }
}
