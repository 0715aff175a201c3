// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the revq CLI layer.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from loading inputs and rendering output. Domain errors from
/// revq-core pass through unchanged so their hints reach the user.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] revq_core::Error),

    #[error("could not read {path}: {source}\n  hint: check that the file exists and is readable")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not parse issue export {path}: {source}\n  hint: the input must be a JSON array of tracker issues")]
    ExportParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("could not parse config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("could not serialize output: {0}")]
    OutputSerialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
