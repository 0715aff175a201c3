// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Review status taxonomy.
//!
//! Statuses carry a total order used for sorting listings: tickets being
//! reviewed come first, finished ones last. The string codes are the ones
//! the tracker API reports.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::error;

/// Review state of a homework ticket.
///
/// Declaration order is the sort order. `Unknown` sorts before everything
/// so that malformed records surface at the top of a listing instead of
/// disappearing at the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// The tracker reported a code we do not recognize.
    Unknown,
    /// The reviewer is working on the submission.
    InReview,
    /// Waiting for the reviewer to pick it up (first submission or a revision).
    Open,
    /// Waiting on the student to revise.
    OnTheSideOfUser,
    /// Review accepted, pending final closure.
    Resolved,
    /// Finished.
    Closed,
}

impl Status {
    /// Parse a tracker status code.
    ///
    /// Total over all inputs: an unknown code is logged and mapped to
    /// [`Status::Unknown`] so a single malformed record cannot abort a
    /// whole batch.
    pub fn from_code(code: &str) -> Status {
        match code {
            "inReview" => Status::InReview,
            "open" => Status::Open,
            "onTheSideOfUser" => Status::OnTheSideOfUser,
            "resolved" => Status::Resolved,
            "closed" => Status::Closed,
            other => {
                error!("unexpected status code: '{}'", other);
                Status::Unknown
            }
        }
    }

    /// The tracker code for this status, if it has one.
    ///
    /// The match is exhaustive so the compiler keeps this in sync with the
    /// enum; `Unknown` is the only status without a code.
    pub fn as_code(&self) -> Option<&'static str> {
        match self {
            Status::Unknown => None,
            Status::InReview => Some("inReview"),
            Status::Open => Some("open"),
            Status::OnTheSideOfUser => Some("onTheSideOfUser"),
            Status::Resolved => Some("resolved"),
            Status::Closed => Some("closed"),
        }
    }

    /// Returns true if the homework sits with the reviewer (open or in review).
    pub fn is_open(&self) -> bool {
        matches!(self, Status::Open | Status::InReview)
    }

    /// Returns true if the review is finished (resolved or closed).
    ///
    /// Disjoint from [`is_open`](Status::is_open); `OnTheSideOfUser` and
    /// `Unknown` belong to neither set.
    pub fn is_closed(&self) -> bool {
        matches!(self, Status::Resolved | Status::Closed)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_code().unwrap_or("unknown"))
    }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
