// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for revq-core operations.

use thiserror::Error;

/// All possible errors that can occur in revq-core operations.
///
/// A malformed summary or timestamp means the upstream business process is
/// broken, so entity construction fails hard instead of papering over it.
#[derive(Debug, Error)]
pub enum Error {
    #[error("could not parse summary '{0}'\n  hint: expected the form \"[<problem>] <student>\"")]
    MalformedSummary(String),

    #[error("unexpected timestamp '{0}'\n  hint: tracker timestamps must end with the literal '+0000'")]
    InvalidTimestamp(String),

    #[error("invalid issue key '{0}'\n  hint: expected the form \"<queue>-<digits>\", e.g. \"PCR-69105\"")]
    InvalidIssueKey(String),

    #[error("invalid mode: '{0}'\n  hint: valid modes are: standard, all, open, closed, closed-this-month, closed-previous-month")]
    InvalidMode(String),

    #[error("homework with no {0} was not found")]
    HomeworkNotFound(u32),
}

pub type Result<T> = std::result::Result<T, Error>;
