// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rendering of homework listings as text lines or JSON.

use chrono::{DateTime, Local, Utc};
use serde::Serialize;

use revq_core::{Homework, Status};

/// One listing line: glyph, number, problem, student, then either the time
/// left to the deadline or the last-update time, then the ticket link.
pub fn format_homework_line(homework: &Homework, base_url: &str, now: DateTime<Utc>) -> String {
    let mut parts = vec![
        homework.pretty_status(now).to_string(),
        format!("no {:>3}", homework.number),
        format!("[{}]", homework.problem),
        homework.student.clone(),
    ];
    if let Some(iteration) = homework.iteration() {
        parts.push(format!("(iteration {iteration})"));
    }
    match (homework.left(now), homework.deadline_string()) {
        (Some(left), Some(deadline)) => {
            parts.push(format!("left {left} (until {deadline})"));
        }
        _ => {
            if let Some(updated) = homework.updated_string(now) {
                parts.push(format!("updated {updated}"));
            }
        }
    }
    parts.push(homework.issue_url(base_url));
    parts.join(" ")
}

/// JSON shape of one homework in `--output json` listings.
#[derive(Debug, Serialize)]
pub struct HomeworkJson {
    pub number: u32,
    pub issue_key: String,
    pub problem: u32,
    pub student: String,
    pub cohort: String,
    pub course: String,
    pub status: Status,
    pub status_updated: DateTime<Local>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iteration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<DateTime<Local>>,
    pub deadline_missed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<String>,
    pub url: String,
}

impl HomeworkJson {
    pub fn from_homework(homework: &Homework, base_url: &str, now: DateTime<Utc>) -> Self {
        HomeworkJson {
            number: homework.number,
            issue_key: homework.issue_key.clone(),
            problem: homework.problem,
            student: homework.student.clone(),
            cohort: homework.cohort.clone(),
            course: homework.course.clone(),
            status: homework.status,
            status_updated: homework.status_updated,
            iteration: homework.iteration(),
            deadline: homework.deadline(),
            deadline_missed: homework.deadline_missed(now),
            left: homework.left(now),
            url: homework.issue_url(base_url),
        }
    }
}

/// Top-level JSON output of a listing.
#[derive(Debug, Serialize)]
pub struct ListOutputJson {
    pub homeworks: Vec<HomeworkJson>,
}

impl ListOutputJson {
    pub fn from_homeworks(homeworks: &[Homework], base_url: &str, now: DateTime<Utc>) -> Self {
        ListOutputJson {
            homeworks: homeworks
                .iter()
                .map(|h| HomeworkJson::from_homework(h, base_url, now))
                .collect(),
        }
    }
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
