// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! User configuration.
//!
//! Configuration lives in `<config dir>/revq/config.toml` (e.g.
//! `~/.config/revq/config.toml`) and is entirely optional: a missing file
//! means built-in defaults. Includes:
//! - `month_start`: day of month the reporting window rolls over on
//! - `component_suffixes`: tracker component name -> short cohort label
//! - `tracker`: queue name and web base URL

use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

const CONFIG_DIR_NAME: &str = "revq";
const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_MONTH_START: u32 = 15;
const DEFAULT_QUEUE: &str = "PCR";
const DEFAULT_BASE_URL: &str = "https://st.yandex-team.ru";

/// User configuration for revq.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Day of month (1..=28) on which the reporting month rolls over.
    pub month_start: u32,
    /// Tracker component name to short cohort label. Components without an
    /// entry keep their full name as the label.
    pub component_suffixes: BTreeMap<String, String>,
    pub tracker: TrackerConfig,
}

/// Tracker connection details.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TrackerConfig {
    /// Queue the homework tickets live in.
    pub queue: String,
    /// Base URL of the tracker web UI, used to build ticket links.
    pub base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            month_start: DEFAULT_MONTH_START,
            component_suffixes: BTreeMap::new(),
            tracker: TrackerConfig::default(),
        }
    }
}

impl Default for TrackerConfig {
    fn default() -> Self {
        TrackerConfig {
            queue: DEFAULT_QUEUE.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from an explicit file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&text).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load from the default location; a missing file yields the defaults.
    pub fn load_default() -> Result<Self> {
        let Some(config_dir) = dirs::config_dir() else {
            return Ok(Config::default());
        };
        let path = config_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME);
        if path.is_file() {
            Self::load(&path)
        } else {
            Ok(Config::default())
        }
    }

    // month_start beyond 28 would fall off the end of February.
    fn validate(&self) -> Result<()> {
        if !(1..=28).contains(&self.month_start) {
            return Err(Error::Config(format!(
                "month_start must be between 1 and 28, got {}",
                self.month_start
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
