// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command-line interface definition.

use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use revq_core::{FilterMode, FilterOptions};

/// Parse a filter mode, surfacing the domain error text (with its hint)
/// through clap's own error reporting.
fn parse_mode(s: &str) -> Result<FilterMode, String> {
    s.parse::<FilterMode>().map_err(|e| e.to_string())
}

/// Output format for the listing.
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "revq")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "List homework review tickets from a tracker export")]
pub struct Cli {
    /// JSON export of the tracker queue to read
    #[arg(short, long, value_name = "path")]
    pub input: PathBuf,

    /// Filter mode: standard, all, open, closed, closed-this-month,
    /// closed-previous-month
    #[arg(short, long, default_value_t = FilterMode::Standard, value_parser = parse_mode)]
    pub mode: FilterMode,

    /// Show only the homework with this listing number
    #[arg(short, long, value_name = "number")]
    pub no: Option<u32>,

    /// Keep only these problem numbers
    #[arg(short, long, value_delimiter = ',', value_name = "numbers")]
    pub problems: Vec<u32>,

    /// Keep homeworks whose student column contains this (case-insensitive)
    #[arg(short, long, value_name = "substring")]
    pub student: Option<String>,

    /// Keep only these cohorts
    #[arg(short, long, value_delimiter = ',', value_name = "labels")]
    pub cohorts: Vec<String>,

    /// Keep homeworks updated on or after this date (YYYY-MM-DD)
    #[arg(long, value_name = "date")]
    pub from: Option<NaiveDate>,

    /// Keep homeworks updated on or before this date (YYYY-MM-DD)
    #[arg(long, value_name = "date")]
    pub to: Option<NaiveDate>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t)]
    pub output: OutputFormat,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "path")]
    pub config: Option<PathBuf>,

    /// Log debug detail to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// The refinement filters carried by this invocation.
    pub fn filter_options(&self) -> FilterOptions {
        FilterOptions {
            no: self.no,
            problems: self.problems.clone(),
            student: self.student.clone(),
            cohorts: self.cohorts.clone(),
            from: self.from,
            to: self.to,
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
