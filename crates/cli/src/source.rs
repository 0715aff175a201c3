// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Issue sources: where raw tracker records come from.
//!
//! The only shipped source reads a JSON export of the tracker queue from
//! disk; the [`IssueSource`] trait keeps the rest of the CLI independent of
//! that choice. Records keep the tracker's field names at this layer and
//! are turned into [`Homework`] entities by [`build_homeworks`].

use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

use revq_core::{issue_key_number, Homework, Status, StatusTransition};
use revq_core::dates::parse_datetime;

use crate::config::Config;
use crate::error::{Error, Result};

/// One issue as the tracker exports it.
#[derive(Debug, Clone, Deserialize)]
pub struct RawIssue {
    pub key: String,
    pub summary: String,
    pub status: RawStatus,
    #[serde(rename = "statusStartTime")]
    pub status_start_time: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub components: Vec<RawComponent>,
    #[serde(default)]
    pub changelog: Vec<RawChange>,
}

/// A status reference as the tracker serializes it.
#[derive(Debug, Clone, Deserialize)]
pub struct RawStatus {
    pub key: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawComponent {
    pub id: u64,
    pub name: String,
}

/// One changelog entry: a batch of field changes at one instant.
#[derive(Debug, Clone, Deserialize)]
pub struct RawChange {
    #[serde(rename = "updatedAt")]
    pub updated_at: String,
    #[serde(default)]
    pub fields: Vec<RawFieldChange>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawFieldChange {
    pub field: RawFieldId,
    #[serde(default)]
    pub from: Option<RawStatus>,
    #[serde(default)]
    pub to: Option<RawStatus>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawFieldId {
    pub id: String,
}

/// Supplies raw issues and, on demand, their status history.
pub trait IssueSource {
    /// All issues of the queue, in source order.
    fn issues(&self) -> &[RawIssue];

    /// Status history of one issue, or `Ok(None)` when the source does not
    /// provide one for it.
    fn status_history(&self, key: &str) -> Result<Option<Vec<StatusTransition>>>;
}

/// Issue source backed by a JSON export file.
#[derive(Debug)]
pub struct JsonExportSource {
    issues: Vec<RawIssue>,
}

impl JsonExportSource {
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let issues: Vec<RawIssue> =
            serde_json::from_str(&text).map_err(|source| Error::ExportParse {
                path: path.to_path_buf(),
                source,
            })?;
        debug!("loaded {} issues from {}", issues.len(), path.display());
        Ok(JsonExportSource { issues })
    }
}

impl IssueSource for JsonExportSource {
    fn issues(&self) -> &[RawIssue] {
        &self.issues
    }

    /// The history only matters for deadline computation, so it is withheld
    /// for homeworks no longer sitting with the reviewer.
    fn status_history(&self, key: &str) -> Result<Option<Vec<StatusTransition>>> {
        let Some(issue) = self.issues.iter().find(|i| i.key == key) else {
            return Ok(None);
        };
        if !Status::from_code(&issue.status.key).is_open() {
            return Ok(None);
        }
        Ok(Some(convert_changelog(&issue.key, &issue.changelog)))
    }
}

/// Extract the status transitions from a ticket changelog.
///
/// Non-status field changes are skipped; an unparseable timestamp drops
/// that entry with a warning instead of failing the whole ticket.
fn convert_changelog(key: &str, changelog: &[RawChange]) -> Vec<StatusTransition> {
    let mut transitions = Vec::new();
    for change in changelog {
        let at = match parse_datetime(&change.updated_at) {
            Ok(at) => at,
            Err(e) => {
                warn!("skipping a changelog entry of {}: {}", key, e);
                continue;
            }
        };
        for field in &change.fields {
            if field.field.id != "status" {
                continue;
            }
            let Some(to) = &field.to else { continue };
            transitions.push(StatusTransition::new(
                field.from.as_ref().map(|s| Status::from_code(&s.key)),
                Status::from_code(&to.key),
                at,
            ));
        }
    }
    transitions
}

/// Resolves tracker components to short cohort labels, memoized per id.
pub struct ComponentLabelCache<'a> {
    suffixes: &'a BTreeMap<String, String>,
    labels: HashMap<u64, String>,
}

impl<'a> ComponentLabelCache<'a> {
    pub fn new(suffixes: &'a BTreeMap<String, String>) -> Self {
        ComponentLabelCache {
            suffixes,
            labels: HashMap::new(),
        }
    }

    /// The label of a component: the suffix configured for its name, or the
    /// full name when no suffix is configured. Memoized by component id,
    /// the stable identifier.
    pub fn label(&mut self, component: &RawComponent) -> String {
        if let Some(hit) = self.labels.get(&component.id) {
            return hit.clone();
        }
        let label = self
            .suffixes
            .get(&component.name)
            .cloned()
            .unwrap_or_else(|| component.name.clone());
        self.labels.insert(component.id, label.clone());
        label
    }
}

/// Turn the source's raw issues into homework entities.
///
/// Issues are ordered by the numeric tail of their key and numbered from 1
/// in that order, so listing numbers are stable within one export.
pub fn build_homeworks<S: IssueSource>(source: &S, config: &Config) -> Result<Vec<Homework>> {
    let mut cache = ComponentLabelCache::new(&config.component_suffixes);

    let mut issues: Vec<&RawIssue> = source.issues().iter().collect();
    issues.sort_by_key(|issue| issue_key_number(&issue.key).unwrap_or(u32::MAX));

    let mut homeworks = Vec::with_capacity(issues.len());
    for (index, issue) in issues.iter().enumerate() {
        let transitions = source.status_history(&issue.key)?;
        let course = issue
            .components
            .first()
            .map(|c| c.name.clone())
            .unwrap_or_default();
        let cohort = issue
            .components
            .first()
            .map(|c| cache.label(c))
            .unwrap_or_default();
        let homework = Homework::new(
            issue.key.clone(),
            &issue.summary,
            cohort,
            &issue.status.key,
            &issue.status_start_time,
            issue.description.clone(),
            (index + 1) as u32,
            course,
            transitions.as_deref(),
        )?;
        homeworks.push(homework);
    }
    Ok(homeworks)
}

#[cfg(test)]
#[path = "source_tests.rs"]
mod tests;
