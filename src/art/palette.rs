//! Closed color palette used by every fill

use crate::math::random::RandomSource;

/// Cell color of a painted canvas
///
/// `Black` is reserved for background and borders and is never drawn by
/// [`random_fill_color`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    /// Fill color
    Red,
    /// Fill color
    Yellow,
    /// Fill color
    Cyan,
    /// Fill color
    White,
    /// Background and border color
    #[default]
    Black,
}

/// Colors a region can be filled with, in draw order
pub const FILL_PALETTE: [Color; 4] = [Color::Red, Color::Yellow, Color::Cyan, Color::White];

impl Color {
    /// RGBA value used when the canvas is rasterized
    pub const fn rgba(self) -> [u8; 4] {
        match self {
            Self::Red => [255, 0, 0, 255],
            Self::Yellow => [255, 255, 0, 255],
            Self::Cyan => [0, 255, 255, 255],
            Self::White => [255, 255, 255, 255],
            Self::Black => [0, 0, 0, 255],
        }
    }

    /// Whether the color belongs to the fill palette
    pub const fn is_fill(self) -> bool {
        !matches!(self, Self::Black)
    }
}

/// Draw one fill color uniformly from the palette
///
/// Consumes exactly one value from the random source.
pub fn random_fill_color<R: RandomSource + ?Sized>(rng: &mut R) -> Color {
    let index = rng.choose_index(FILL_PALETTE.len());
    FILL_PALETTE.get(index).copied().unwrap_or(Color::White)
}
