// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Status-transition history of a single homework.
//!
//! The tracker changelog yields a sequence of status changes, ordered by
//! occurrence. Two values derive from it: the iteration count (how many
//! times the homework entered `Open`) and the timestamp of the most recent
//! (re)opening, which anchors the review deadline.

use chrono::{DateTime, Local};

use crate::status::Status;

/// One recorded status change from a ticket's changelog.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusTransition {
    /// Status before the change; the tracker omits it for the first event.
    pub from: Option<Status>,
    /// Status after the change.
    pub to: Status,
    /// When the change happened.
    pub at: DateTime<Local>,
}

impl StatusTransition {
    pub fn new(from: Option<Status>, to: Status, at: DateTime<Local>) -> Self {
        StatusTransition { from, to, at }
    }
}

/// Number of review iterations: transitions into `Open`.
///
/// `None` (history never fetched) and an empty history both yield `None` —
/// a homework with unknown history is distinct from one known to have zero
/// reopenings.
pub fn iteration_count(transitions: Option<&[StatusTransition]>) -> Option<u32> {
    let transitions = transitions.filter(|t| !t.is_empty())?;
    Some(transitions.iter().filter(|t| t.to == Status::Open).count() as u32)
}

/// Timestamp of the most recent transition into `Open`, if any.
pub fn last_opened(transitions: Option<&[StatusTransition]>) -> Option<DateTime<Local>> {
    transitions?
        .iter()
        .filter(|t| t.to == Status::Open)
        .next_back()
        .map(|t| t.at)
}

#[cfg(test)]
#[path = "transition_tests.rs"]
mod tests;
