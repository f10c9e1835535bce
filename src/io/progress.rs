//! Artwork batch progress with automatic batching for large runs

use crate::art::partition::PartitionStats;
use crate::io::configuration::{MAX_INDIVIDUAL_PROGRESS_BARS, PROGRESS_BAR_WIDTH};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

/// Display state of one artwork line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtworkState {
    /// Output file name
    pub name: String,
    /// Whether painting and export have finished
    pub done: bool,
    /// Leaf regions painted, known once done
    pub leaves: usize,
    /// Time spent painting and exporting, known once done
    pub elapsed: Duration,
}

impl ArtworkState {
    /// Status text shown next to the artwork name
    pub fn status_message(&self) -> String {
        if self.done {
            format!("{} regions in {:?}", self.leaves, self.elapsed)
        } else {
            "painting".to_string()
        }
    }
}

/// Coordinates progress display for a batch of artworks
///
/// Shows one line per artwork for small batches, keeping only the most recent
/// lines visible, and adds an overall batch bar once the batch grows past the
/// visible line count
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    artwork_bars: Vec<ProgressBar>,
    artwork_count: usize,
    artwork_states: Vec<ArtworkState>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static ARTWORK_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner:.cyan} {prefix} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template =
        format!("[{{elapsed_precise}}] Artworks: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}}");
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            artwork_bars: Vec::new(),
            artwork_count: 0,
            artwork_states: Vec::new(),
        }
    }

    /// Initialize progress lines based on artwork count
    pub fn initialize(&mut self, artwork_count: usize) {
        self.artwork_count = artwork_count;

        // Switch to batch mode for large runs to avoid terminal spam
        if artwork_count > MAX_INDIVIDUAL_PROGRESS_BARS + 1 {
            let batch_bar = ProgressBar::new(artwork_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        let bars_to_create = artwork_count.min(MAX_INDIVIDUAL_PROGRESS_BARS);
        for _ in 0..bars_to_create {
            let pb = ProgressBar::new_spinner();
            pb.set_style(ARTWORK_STYLE.clone());
            self.artwork_bars.push(self.multi_progress.add(pb));
        }
    }

    /// Number of artworks announced by [`ProgressManager::initialize`]
    pub const fn artwork_count(&self) -> usize {
        self.artwork_count
    }

    /// Tracked state of every artwork started so far
    pub fn states(&self) -> &[ArtworkState] {
        &self.artwork_states
    }

    /// Register an artwork as in progress
    pub fn start_artwork(&mut self, index: usize, path: &Path) {
        let display_name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        if index >= self.artwork_states.len() {
            self.artwork_states
                .resize(index + 1, ArtworkState::default());
        }
        if let Some(state) = self.artwork_states.get_mut(index) {
            *state = ArtworkState {
                name: display_name,
                ..ArtworkState::default()
            };
        }
        self.update_bars();
    }

    /// Mark an artwork as completed and update batch progress
    pub fn complete_artwork(&mut self, index: usize, stats: &PartitionStats, elapsed: Duration) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }

        if let Some(state) = self.artwork_states.get_mut(index) {
            state.done = true;
            state.leaves = stats.leaves();
            state.elapsed = elapsed;
        }
        self.update_bars();
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All artworks painted");
        }
        for bar in &self.artwork_bars {
            bar.finish();
        }
        let _ = self.multi_progress.clear();
    }

    /// Update all lines to show the last N started artworks
    fn update_bars(&self) {
        let started: Vec<&ArtworkState> = self
            .artwork_states
            .iter()
            .filter(|state| !state.name.is_empty())
            .collect();

        let start_idx = started.len().saturating_sub(MAX_INDIVIDUAL_PROGRESS_BARS);
        let visible = started.get(start_idx..).unwrap_or(&[]);

        for (bar_idx, state) in visible.iter().enumerate() {
            if let Some(bar) = self.artwork_bars.get(bar_idx) {
                if state.done {
                    bar.set_prefix(format!("✓ {}", state.name));
                } else {
                    bar.set_prefix(state.name.clone());
                    bar.tick();
                }
                bar.set_message(state.status_message());
            }
        }

        for bar_idx in visible.len()..self.artwork_bars.len() {
            if let Some(bar) = self.artwork_bars.get(bar_idx) {
                bar.set_message(String::new());
                bar.set_prefix(String::new());
            }
        }
    }
}
