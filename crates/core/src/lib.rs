// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! revq-core: domain model for the homework review queue
//!
//! This crate contains the pure, I/O-free half of revq: homework entities
//! built from raw tracker records, the review status taxonomy, deadline and
//! iteration computation, and the filter engine the CLI applies before
//! rendering a listing. All inputs arrive as already-fetched immutable
//! values; nothing here touches the network or the file system.

pub mod dates;
pub mod error;
pub mod filter;
pub mod homework;
pub mod status;
pub mod transition;

pub use error::{Error, Result};
pub use filter::{filter_homeworks, FilterMode, FilterOptions};
pub use homework::{issue_key_number, sort_homeworks, Homework};
pub use status::Status;
pub use transition::StatusTransition;
