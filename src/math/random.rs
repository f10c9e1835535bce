//! Uniform random sources threaded through the painter
//!
//! Every random decision (split points, fill colors, shape choice) pulls a
//! single value in `[0, 1)` from a [`RandomSource`], so seeding or scripting
//! the source fully determines the painted canvas.

use rand::{Rng, SeedableRng, rngs::StdRng};

/// Source of uniform floats in `[0, 1)`
pub trait RandomSource {
    /// Next uniform value in `[0, 1)`
    fn next_unit(&mut self) -> f64;

    /// Uniform index in `0..count`
    ///
    /// Scales one unit draw and truncates, then clamps so a source that
    /// misbehaves at the top of its range still yields a valid index.
    /// Returns 0 when `count` is 0.
    fn choose_index(&mut self, count: usize) -> usize {
        let scaled = (self.next_unit() * count as f64) as usize;
        scaled.min(count.saturating_sub(1))
    }
}

impl RandomSource for StdRng {
    fn next_unit(&mut self) -> f64 {
        self.random::<f64>()
    }
}

/// Seeded random source for reproducible artworks
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    /// Create a deterministic random source
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// Replays a fixed sequence of values, wrapping around at the end
///
/// Values are clamped into `[0, 1)` on construction. An empty script always
/// yields 0.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    values: Vec<f64>,
    cursor: usize,
}

impl ScriptedRandom {
    /// Create a source that replays `values` in order
    pub fn new(values: impl IntoIterator<Item = f64>) -> Self {
        let values = values
            .into_iter()
            .map(|v| v.clamp(0.0, 1.0 - f64::EPSILON))
            .collect();
        Self { values, cursor: 0 }
    }

    /// Number of values drawn so far
    pub const fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedRandom {
    fn next_unit(&mut self) -> f64 {
        let value = if self.values.is_empty() {
            0.0
        } else {
            self.values
                .get(self.cursor % self.values.len())
                .copied()
                .unwrap_or(0.0)
        };
        self.cursor += 1;
        value
    }
}
