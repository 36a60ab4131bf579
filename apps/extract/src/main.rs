//! md2m — extract tagged code from a Markdown file.
//!
//! Prints the verbatim contents of every `matlab`-tagged fenced code block
//! in the given Markdown file to stdout, and nothing else. Exit codes are
//! part of the contract: `0` on success, `1` for a usage error, `2` when the
//! file is missing. stdout carries only extracted code, so no log output is
//! ever installed here.

use std::path::PathBuf;
use std::process::exit;

use clap::Parser;
use clap::error::ErrorKind;

use octodoc_markdown::extract_code_blocks;
use octodoc_shared::LanguageConfig;

/// Exit status for a usage error (wrong argument count).
const EXIT_USAGE: i32 = 1;

/// Exit status for a missing or unreadable input file.
const EXIT_NOT_FOUND: i32 = 2;

/// md2m — print the tagged fenced code blocks of a Markdown file.
#[derive(Parser)]
#[command(
    name = "md2m",
    version,
    about = "Extract the matlab-tagged fenced code blocks of a Markdown file to stdout.",
    long_about = None,
)]
struct Cli {
    /// Path to the Markdown file.
    file: PathBuf,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            exit(0);
        }
        Err(err) => {
            // Wrong argument count: usage text, distinct exit status.
            let _ = err.print();
            exit(EXIT_USAGE);
        }
    };

    if !cli.file.exists() {
        eprintln!("File '{}' does not exist!", cli.file.display());
        exit(EXIT_NOT_FOUND);
    }

    let markdown = match std::fs::read_to_string(&cli.file) {
        Ok(markdown) => markdown,
        Err(err) => {
            eprintln!("Cannot read file '{}': {err}", cli.file.display());
            exit(EXIT_NOT_FOUND);
        }
    };

    let label = LanguageConfig::default().fence_label;
    print!("{}", extract_code_blocks(&markdown, &label));
}
