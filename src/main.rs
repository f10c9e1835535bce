//! CLI entry point for the Mondrian-style artwork generator

use clap::Parser;
use mondrian::io::cli::{ArtworkProcessor, Cli};

fn main() -> mondrian::Result<()> {
    let cli = Cli::parse();
    let mut processor = ArtworkProcessor::new(cli);
    processor.process().map(|_| ())
}
