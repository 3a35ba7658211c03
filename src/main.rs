//! CLI entry point for the photo-to-avatar tool

use clap::Parser;
use toonface::io::cli::{Cli, FileProcessor};
use toonface::io::logging::init_logging;

fn main() -> toonface::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let mut processor = FileProcessor::new(cli)?;
    processor.process().map(|_| ())
}
