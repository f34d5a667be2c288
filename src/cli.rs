//! Command-line interface for chlog.
//!
//! One required positional argument (the changelog path) plus a logging
//! level flag.

use clap::Parser;
use std::path::PathBuf;

/// chlog - extract the current version's section from a changelog.
///
/// Prints the body of the topmost version section (the first `## ` heading)
/// to stdout, line for line.
#[derive(Parser, Debug)]
#[command(
    name = "chlog",
    version,
    about = "Extract the current version's section from a changelog",
    after_help = "Examples:\n  \
                  chlog CHANGELOG.md\n  \
                  chlog -l debug CHANGELOG.md"
)]
pub struct Cli {
    /// Path to the changelog file
    #[arg(value_name = "CHANGELOG_PATH")]
    pub changelog: PathBuf,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(short = 'l', long = "loglevel", default_value = "warn")]
    pub log_level: String,
}
