// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! revqrs - homework review queue listing.
//!
//! This crate provides the functionality behind the `revq` CLI tool, which
//! reads a JSON export of a tracker queue of homework review tickets and
//! renders a filtered, sorted listing.
//!
//! # Main Components
//!
//! - [`Cli`] - the command-line surface
//! - [`Config`] - user configuration (month start, cohort labels, tracker)
//! - [`source`] - raw tracker records and the [`IssueSource`] seam
//! - [`display`] - text and JSON rendering
//! - [`Error`] - error types for all operations
//!
//! The domain model (homework entities, statuses, deadlines, filtering)
//! lives in `revq-core`; this crate only wires I/O around it.

mod cli;

pub mod config;
pub mod display;
pub mod error;
pub mod source;

pub use cli::{Cli, OutputFormat};
pub use config::Config;
pub use error::{Error, Result};
pub use source::{IssueSource, JsonExportSource};

use chrono::{Local, Utc};

use revq_core::{filter_homeworks, sort_homeworks};

/// Install the global tracing subscriber: warnings by default, debug with
/// `--verbose`, always to stderr so listings stay pipeable. `RUST_LOG`
/// overrides both.
pub fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Execute a parsed invocation. This is the main entry point for library
/// users and keeps the binary itself trivial.
pub fn run(cli: &Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::load_default()?,
    };
    let source = JsonExportSource::from_file(&cli.input)?;
    run_with_source(cli, &config, &source)
}

/// Like [`run`], but over any issue source.
pub fn run_with_source<S: IssueSource>(cli: &Cli, config: &Config, source: &S) -> Result<()> {
    let homeworks = source::build_homeworks(source, config)?;
    let options = cli.filter_options();
    let now = Utc::now();
    let today = Local::now().date_naive();
    let filtered = filter_homeworks(homeworks, cli.mode, &options, config.month_start, today)?;
    let sorted = sort_homeworks(filtered);

    match cli.output {
        OutputFormat::Text => {
            for homework in &sorted {
                println!(
                    "{}",
                    display::format_homework_line(homework, &config.tracker.base_url, now)
                );
            }
        }
        OutputFormat::Json => {
            let output =
                display::ListOutputJson::from_homeworks(&sorted, &config.tracker.base_url, now);
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}
