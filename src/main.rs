//! chlog - extract the current version's section from a changelog.
//!
//! This binary reads a changelog file, locates the topmost version section
//! and prints its body lines to stdout. Release tooling pipes the output
//! into release notes.

mod cli;

use clap::error::ErrorKind;
use clap::Parser as ClapParser;
use cli::Cli;
use log::{debug, error, info, trace, LevelFilter};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

use chlog_core::{ChlogError, Result};
use chlog_extract::SectionExtractor;

fn main() {
    let cli = match <Cli as ClapParser>::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            return;
        }
        Err(err) => {
            // Wrong arguments: usage diagnostic on stderr, exit code 1.
            let _ = err.print();
            std::process::exit(1);
        }
    };

    // Set up logging
    setup_logging(&cli.log_level);
    info!("chlog v{}", env!("CARGO_PKG_VERSION"));

    // Run the main application
    if let Err(e) = run(&cli) {
        error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Set up logging based on the log level argument.
fn setup_logging(level: &str) {
    let filter = match level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Warn,
    };

    env_logger::Builder::new()
        .filter_level(filter)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

/// Main application logic: stream the changelog through the extractor.
fn run(cli: &Cli) -> Result<()> {
    info!("Processing changelog: {}", cli.changelog.display());

    let file = File::open(&cli.changelog).map_err(|source| ChlogError::Open {
        path: cli.changelog.clone(),
        source,
    })?;
    let reader = BufReader::new(file);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let mut extractor = SectionExtractor::new();
    for line in reader.lines() {
        let line = line?;
        trace!("Input line: {}", line);

        if let Some(body) = extractor.process_line(&line) {
            writeln!(out, "{}", body)?;
        }
        if extractor.is_finished() {
            debug!("Current section closed; stopping read");
            break;
        }
    }

    out.flush()?;
    debug!("Final state: {}", extractor.state());
    Ok(())
}
