//! CLI entry point for panel colour matrix generation

use clap::Parser;
use panelmatrix::io::cli::{Cli, FileProcessor};
use panelmatrix::io::logging::{LoggingConfig, init_logging};

fn main() -> panelmatrix::Result<()> {
    let cli = Cli::parse();
    init_logging(if cli.quiet {
        LoggingConfig::quiet()
    } else {
        LoggingConfig::default()
    });

    let mut processor = FileProcessor::new(cli);
    processor.process()
}
