// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The homework entity: one student submission tracked through its review
//! lifecycle.
//!
//! A `Homework` is built once from a freshly fetched issue record plus its
//! status history and never mutated; a refresh produces new entities. The
//! transition-derived fields (`iteration`, `last_opened`) are computed at
//! construction since the inputs cannot change without a refetch; the
//! time-sensitive accessors take `now` as a parameter instead of reading a
//! hidden clock.

use chrono::{DateTime, Duration, Local, Utc};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;
use tracing::warn;

use crate::dates::parse_datetime;
use crate::error::{Error, Result};
use crate::status::Status;
use crate::transition::{iteration_count, last_opened, StatusTransition};

// Pre-compiled patterns, verified at test time.
static SUMMARY_RE: LazyLock<Regex> = LazyLock::new(|| {
    match Regex::new(r"^\[(?P<problem>\d+)( \(back_cohort_(?P<cohort>\d+)\))?\] (?P<student>.*)$") {
        Ok(re) => re,
        Err(_) => unreachable!("static regex pattern"),
    }
});
static REVISOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    match Regex::new(
        r"==(?P<url>https://praktikum-admin\.yandex-team\.ru/office/revisor-review/(\d+)/(\w+))\b",
    ) {
        Ok(re) => re,
        Err(_) => unreachable!("static regex pattern"),
    }
});

const DEADLINE_FORMAT: &str = "%A, %H:%M";
const UPDATED_FORMAT: &str = "%m-%d (%A), %H:%M";
const UPDATED_LONG_AGO_FORMAT: &str = "%m-%d";

/// One student's submission, tracked as one tracker ticket.
#[derive(Debug, Clone)]
pub struct Homework {
    /// Tracker ticket identifier, e.g. `PCR-12345`.
    pub issue_key: String,
    /// 1-based ordinal in the key-sorted listing; stable within one fetch.
    pub number: u32,
    /// Course the submission belongs to (tracker component name).
    pub course: String,
    /// Student group label.
    pub cohort: String,
    /// Problem number extracted from the summary.
    pub problem: u32,
    /// Student name/mail as it appears in the summary.
    pub student: String,
    pub status: Status,
    /// When the current status was entered.
    pub status_updated: DateTime<Local>,
    /// Ticket description; only used to locate the embedded revisor link.
    pub description: String,
    iteration: Option<u32>,
    last_opened: Option<DateTime<Local>>,
}

impl Homework {
    /// Build a homework from raw tracker fields.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedSummary`] if the summary does not look like
    /// `"[<problem>] <student>"`, and [`Error::InvalidTimestamp`] for a bad
    /// `status_updated`. Both are structural violations upstream, so they
    /// fail the record instead of being logged away.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        issue_key: String,
        summary: &str,
        cohort: String,
        status_code: &str,
        status_updated: &str,
        description: String,
        number: u32,
        course: String,
        transitions: Option<&[StatusTransition]>,
    ) -> Result<Self> {
        let (problem, student) = parse_summary(summary)?;
        Ok(Homework {
            status: Status::from_code(status_code),
            status_updated: parse_datetime(status_updated)?,
            iteration: iteration_count(transitions),
            last_opened: last_opened(transitions),
            issue_key,
            number,
            course,
            cohort,
            problem,
            student,
            description,
        })
    }

    /// How many times this homework entered review; `None` when the history
    /// was never fetched.
    pub fn iteration(&self) -> Option<u32> {
        self.iteration
    }

    /// When the homework last (re)entered review.
    pub fn last_opened(&self) -> Option<DateTime<Local>> {
        self.last_opened
    }

    /// The review deadline: one day after the last (re)opening, falling back
    /// to the last status change. Defined exactly for open-ish homeworks.
    pub fn deadline(&self) -> Option<DateTime<Local>> {
        if !self.status.is_open() {
            return None;
        }
        Some(self.last_opened.unwrap_or(self.status_updated) + Duration::days(1))
    }

    /// True iff a deadline exists and `now` is past it.
    pub fn deadline_missed(&self, now: DateTime<Utc>) -> bool {
        self.deadline().is_some_and(|d| now > d)
    }

    /// Time to the deadline as `H:MM`, or `-H:MM` when overdue.
    /// Hours are not zero-padded; minutes always are.
    pub fn left(&self, now: DateTime<Utc>) -> Option<String> {
        let deadline = self.deadline()?;
        let total = deadline.signed_duration_since(now).num_seconds();
        let (sign, remaining) = if total < 0 { ("-", -total) } else { ("", total) };
        let hours = remaining / 3600;
        let minutes = (remaining % 3600) / 60;
        Some(format!("{sign}{hours}:{minutes:02}"))
    }

    /// The deadline as e.g. `"Wednesday, 04:23"`, in local time.
    pub fn deadline_string(&self) -> Option<String> {
        self.deadline().map(|d| d.format(DEADLINE_FORMAT).to_string())
    }

    /// When the status last changed, for homeworks without a deadline.
    /// Falls back to a `"%m-%d (N days ago)"` form once older than a week.
    pub fn updated_string(&self, now: DateTime<Utc>) -> Option<String> {
        if self.deadline().is_some() {
            return None;
        }
        let age = now.signed_duration_since(self.status_updated);
        if age > Duration::days(7) {
            Some(format!(
                "{} ({} days ago)",
                self.status_updated.format(UPDATED_LONG_AGO_FORMAT),
                age.num_days()
            ))
        } else {
            Some(self.status_updated.format(UPDATED_FORMAT).to_string())
        }
    }

    /// Status glyph for the listing. A missed deadline on an `Open` homework
    /// overrides the normal glyph; unmapped statuses get a fallback. Never
    /// fails.
    pub fn pretty_status(&self, now: DateTime<Utc>) -> &'static str {
        if self.status == Status::Open && self.deadline_missed(now) {
            return "🙀";
        }
        match self.status {
            Status::InReview => "🔎",
            Status::Open => "🔧",
            Status::OnTheSideOfUser => "🎓",
            Status::Resolved | Status::Closed => "✔️",
            Status::Unknown => "⁉️",
        }
    }

    /// Web page of the ticket under the given tracker base URL.
    pub fn issue_url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self.issue_key)
    }

    /// Numeric tail of this homework's issue key.
    pub fn issue_key_number(&self) -> Result<u32> {
        issue_key_number(&self.issue_key)
    }

    /// Link to the external review tool, embedded in the description.
    ///
    /// Optional: older tickets lack it, so absence is a warning for the
    /// caller to handle, not an error.
    pub fn revisor_url(&self) -> Option<String> {
        match REVISOR_RE.captures(&self.description) {
            Some(caps) => caps.name("url").map(|m| m.as_str().to_string()),
            None => {
                warn!("no revisor url in the description of {}", self.issue_key);
                None
            }
        }
    }

    /// Sort key for listings: status first, then chronological within a
    /// status. Ties are left to the (stable) sort, i.e. fetch order.
    pub fn order_key(&self) -> (Status, DateTime<Local>) {
        (self.status, self.status_updated)
    }
}

impl fmt::Display for Homework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "no {}: {} {} ({})",
            self.number, self.student, self.problem, self.status
        )
    }
}

/// Numeric tail of an issue key, e.g. `"PCR-69105"` -> `69105`.
pub fn issue_key_number(key: &str) -> Result<u32> {
    key.rsplit_once('-')
        .and_then(|(_, digits)| digits.parse().ok())
        .ok_or_else(|| Error::InvalidIssueKey(key.to_string()))
}

/// Stable-sort homeworks by [`Homework::order_key`].
pub fn sort_homeworks(mut homeworks: Vec<Homework>) -> Vec<Homework> {
    homeworks.sort_by(|a, b| a.order_key().cmp(&b.order_key()));
    homeworks
}

fn parse_summary(summary: &str) -> Result<(u32, String)> {
    let caps = SUMMARY_RE
        .captures(summary)
        .ok_or_else(|| Error::MalformedSummary(summary.to_string()))?;
    let problem = caps
        .name("problem")
        .and_then(|m| m.as_str().parse().ok())
        .ok_or_else(|| Error::MalformedSummary(summary.to_string()))?;
    let student = caps
        .name("student")
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| Error::MalformedSummary(summary.to_string()))?;
    Ok((problem, student))
}

#[cfg(test)]
#[path = "homework_tests.rs"]
mod tests;
