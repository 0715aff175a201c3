// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Integration specs for the `revq` CLI.
//!
//! The spec files under `cli/` are compiled as `[[test]]` targets of the
//! `revq` crate so they can exercise the built binary; this package only
//! groups them in the workspace.
