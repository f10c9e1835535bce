//! Command-line interface for painting one artwork or a seeded batch

use crate::art::partition::{Mode, PartitionStats, paint};
use crate::io::configuration::{
    DEFAULT_COUNT, DEFAULT_HEIGHT, DEFAULT_SEED, DEFAULT_WIDTH, OUTPUT_EXTENSION, OUTPUT_PREFIX,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::export_canvas_as_png;
use crate::io::progress::ProgressManager;
use crate::math::random::SeededRandom;
use crate::spatial::PixelGrid;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "mondrian")]
#[command(
    author,
    version,
    about = "Paint Mondrian-style grid art by recursive random partitioning"
)]
/// Command-line arguments for the artwork generator
pub struct Cli {
    /// Output PNG file, or directory for a batch
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Leaf fill mode
    #[arg(short = 'M', long, value_enum, default_value_t = Mode::Complex)]
    pub mode: Mode,

    /// Canvas width in pixels (at least 300)
    #[arg(short = 'w', long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Canvas height in pixels (at least 300)
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// Random seed for reproducible generation; artwork i uses seed + i
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Number of artworks to paint
    #[arg(short, long, default_value_t = DEFAULT_COUNT)]
    pub count: usize,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Paint artworks even if output exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Whether the target names a single PNG file rather than a directory
    pub fn targets_single_file(&self) -> bool {
        self.target
            .extension()
            .and_then(|s| s.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(OUTPUT_EXTENSION))
    }
}

/// One artwork scheduled by the processor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtworkJob {
    /// Seed driving the artwork's random source
    pub seed: u64,
    /// Where the PNG is written
    pub output_path: PathBuf,
}

/// Orchestrates painting and export of artworks with progress tracking
pub struct ArtworkProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl ArtworkProcessor {
    /// Create a new processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Paint and export every artwork requested by the CLI arguments
    ///
    /// Returns the statistics of every artwork actually painted.
    ///
    /// # Errors
    ///
    /// Returns an error if the arguments are invalid, a canvas is rejected by
    /// the painter, or an export fails
    pub fn process(&mut self) -> Result<Vec<PartitionStats>> {
        let jobs = self.collect_jobs()?;

        if jobs.is_empty() {
            return Ok(Vec::new());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(jobs.len());
        }

        let mut painted = Vec::with_capacity(jobs.len());
        for (index, job) in jobs.iter().enumerate() {
            painted.push(self.process_job(job, index)?);
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        Ok(painted)
    }

    /// Build the list of artworks to paint, dropping those whose output exists
    ///
    /// # Errors
    ///
    /// Returns an error if the count is zero, or if a single-file target is
    /// combined with a count above one
    pub fn collect_jobs(&self) -> Result<Vec<ArtworkJob>> {
        if self.cli.count == 0 {
            return Err(invalid_parameter(
                "count",
                &self.cli.count,
                &"at least one artwork must be requested",
            ));
        }

        let jobs: Vec<ArtworkJob> = if self.cli.targets_single_file() {
            if self.cli.count > 1 {
                return Err(invalid_parameter(
                    "count",
                    &self.cli.count,
                    &"a batch needs a directory target, not a PNG file",
                ));
            }
            vec![ArtworkJob {
                seed: self.cli.seed,
                output_path: self.cli.target.clone(),
            }]
        } else {
            (0..self.cli.count as u64)
                .map(|offset| {
                    let seed = self.cli.seed.wrapping_add(offset);
                    ArtworkJob {
                        seed,
                        output_path: Self::get_output_path(&self.cli.target, self.cli.mode, seed),
                    }
                })
                .collect()
        };

        Ok(jobs
            .into_iter()
            .filter(|job| self.should_process(&job.output_path))
            .collect())
    }

    fn should_process(&self, output_path: &Path) -> bool {
        if !self.cli.skip_existing() || !output_path.exists() {
            return true;
        }

        // Allow print for user feedback for progress messages
        #[allow(clippy::print_stderr)]
        if !self.cli.quiet {
            eprintln!("Skipping: {} (output exists)", output_path.display());
        }
        false
    }

    fn process_job(&mut self, job: &ArtworkJob, index: usize) -> Result<PartitionStats> {
        let start_time = Instant::now();

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_artwork(index, &job.output_path);
        }

        let mut canvas = PixelGrid::new(self.cli.width, self.cli.height);
        let mut rng = SeededRandom::new(job.seed);
        let stats = paint(&mut canvas, &mut rng, self.cli.mode)?;

        export_canvas_as_png(&canvas, &job.output_path)?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_artwork(index, &stats, start_time.elapsed());
        }

        Ok(stats)
    }

    /// Batch file name for an artwork: `<prefix>_<mode>_<seed>.png` inside `dir`
    pub fn get_output_path(dir: &Path, mode: Mode, seed: u64) -> PathBuf {
        dir.join(format!(
            "{OUTPUT_PREFIX}_{}_{seed}.{OUTPUT_EXTENSION}",
            mode.name()
        ))
    }
}
