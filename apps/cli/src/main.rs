//! octodoc CLI — doc-comment to Markdown documentation generator.
//!
//! Scans a source directory for MATLAB/Octave files, converts their leading
//! doc-comments into cross-linked Markdown pages, and writes one page per
//! source file into the output directory.

mod commands;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(cli)
}
