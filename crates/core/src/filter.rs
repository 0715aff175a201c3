// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The filter engine: selects the subset of homeworks a listing shows.
//!
//! A listing is built in two steps: a named [`FilterMode`] picks the base
//! subset by status, then the optional refinements in [`FilterOptions`] are
//! applied conjunctively. Sorting is a separate, subsequent step
//! ([`sort_homeworks`](crate::homework::sort_homeworks)).

use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;
use tracing::warn;

use crate::dates::{month_start_and_end, previous_month_window};
use crate::error::{Error, Result};
use crate::homework::Homework;

/// Named strategy selecting the base subset of homeworks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    /// Everything not yet resolved or closed (includes on-the-side-of-user).
    #[default]
    Standard,
    /// No status restriction.
    All,
    /// Open or in review only.
    Open,
    /// Resolved or closed.
    Closed,
    /// Closed within the custom month containing today.
    ClosedThisMonth,
    /// Closed within the custom month before the one containing today.
    ClosedPreviousMonth,
}

impl FilterMode {
    /// Returns the canonical string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterMode::Standard => "standard",
            FilterMode::All => "all",
            FilterMode::Open => "open",
            FilterMode::Closed => "closed",
            FilterMode::ClosedThisMonth => "closed-this-month",
            FilterMode::ClosedPreviousMonth => "closed-previous-month",
        }
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FilterMode {
    type Err = Error;

    /// Case-insensitive; `-` and `_` are interchangeable. An unrecognized
    /// token is a configuration error, not a silent fallback.
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "standard" => Ok(FilterMode::Standard),
            "all" => Ok(FilterMode::All),
            "open" => Ok(FilterMode::Open),
            "closed" => Ok(FilterMode::Closed),
            "closed-this-month" => Ok(FilterMode::ClosedThisMonth),
            "closed-previous-month" => Ok(FilterMode::ClosedPreviousMonth),
            _ => Err(Error::InvalidMode(s.to_string())),
        }
    }
}

/// Optional refinements applied on top of the mode's base subset.
/// Absent fields restrict nothing.
#[derive(Debug, Clone, Default)]
pub struct FilterOptions {
    /// Exact lookup by listing number; overrides every other filter.
    pub no: Option<u32>,
    /// Problem numbers to keep.
    pub problems: Vec<u32>,
    /// Case-insensitive substring to find in the student column.
    pub student: Option<String>,
    /// Cohort labels to keep (exact match).
    pub cohorts: Vec<String>,
    /// Keep homeworks updated on or after this day.
    pub from: Option<NaiveDate>,
    /// Keep homeworks updated on or before this day.
    pub to: Option<NaiveDate>,
}

/// Select the homeworks a listing should show.
///
/// `month_start` configures the custom month for the closed-this/previous-
/// month modes; `today` anchors those windows (passed in so callers and
/// tests control the clock).
///
/// # Errors
///
/// Returns [`Error::HomeworkNotFound`] when a `no` lookup matches nothing:
/// unlike an empty filter result, a lookup by number is expected to
/// succeed.
pub fn filter_homeworks(
    homeworks: Vec<Homework>,
    mode: FilterMode,
    options: &FilterOptions,
    month_start: u32,
    today: NaiveDate,
) -> Result<Vec<Homework>> {
    if let Some(no) = options.no {
        let found: Vec<Homework> = homeworks.into_iter().filter(|h| h.number == no).collect();
        if found.is_empty() {
            return Err(Error::HomeworkNotFound(no));
        }
        return Ok(found);
    }

    let mut from = options.from;
    let mut to = options.to;
    let mut result = homeworks;

    match mode {
        FilterMode::Standard => result.retain(|h| !h.status.is_closed()),
        FilterMode::All => {}
        FilterMode::Open => result.retain(|h| h.status.is_open()),
        FilterMode::Closed => result.retain(|h| h.status.is_closed()),
        FilterMode::ClosedThisMonth | FilterMode::ClosedPreviousMonth => {
            if from.is_some() || to.is_some() {
                warn!("--from/--to are ignored with mode {}: the mode computes its own window", mode);
            }
            let (start, end) = if mode == FilterMode::ClosedThisMonth {
                month_start_and_end(today, month_start)
            } else {
                previous_month_window(today, month_start)
            };
            result.retain(|h| h.status.is_closed());
            from = Some(start);
            to = Some(end);
        }
    }

    if !options.problems.is_empty() {
        result.retain(|h| options.problems.contains(&h.problem));
    }
    if let Some(student) = &options.student {
        let needle = student.to_lowercase();
        result.retain(|h| h.student.to_lowercase().contains(&needle));
    }
    if !options.cohorts.is_empty() {
        result.retain(|h| options.cohorts.iter().any(|c| c == &h.cohort));
    }
    // Inclusive full-day bounds on the local date of the last status change.
    if let Some(from) = from {
        result.retain(|h| h.status_updated.date_naive() >= from);
    }
    if let Some(to) = to {
        result.retain(|h| h.status_updated.date_naive() <= to);
    }

    Ok(result)
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
