// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Temporal utilities: tracker timestamp parsing and the custom "month"
//! window used for closed-this-month reporting.
//!
//! The custom month is a calendar-month-like window that starts on a
//! configurable day-of-month instead of the 1st, matching how the review
//! work is paid out.

use chrono::{DateTime, Datelike, Duration, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::error::{Error, Result};

const UTC_SUFFIX: &str = "+0000";

/// Parse a tracker timestamp such as `2020-09-23T22:14:37.658+0000` into
/// the local timezone.
///
/// The literal `+0000` suffix is mandatory: the tracker always reports UTC
/// and anything else means the record is not what we expect. This is a
/// deliberately narrow contract, not general ISO-8601 parsing.
pub fn parse_datetime(s: &str) -> Result<DateTime<Local>> {
    let body = s
        .strip_suffix(UTC_SUFFIX)
        .ok_or_else(|| Error::InvalidTimestamp(s.to_string()))?;
    let naive = body
        .parse::<NaiveDateTime>()
        .map_err(|_| Error::InvalidTimestamp(s.to_string()))?;
    Ok(Utc.from_utc_datetime(&naive).with_timezone(&Local))
}

/// [`parse_datetime`] lifted over an optional input.
pub fn parse_datetime_opt(s: Option<&str>) -> Result<Option<DateTime<Local>>> {
    s.map(parse_datetime).transpose()
}

/// Inclusive `[start, end]` of the custom month containing `day`.
///
/// With `month_start = 15`, the window for 2021-05-26 is
/// 2021-05-16 ..= 2021-06-15, and the window for 2021-05-15 is
/// 2021-04-16 ..= 2021-05-15: a day on the cut point still belongs to the
/// earlier window. `month_start` must be in 1..=28 so the cut point exists
/// in every calendar month.
pub fn month_start_and_end(day: NaiveDate, month_start: u32) -> (NaiveDate, NaiveDate) {
    let end = if day.day() <= month_start {
        cut_point(day.year(), day.month(), month_start)
    } else {
        let (year, month) = next_month(day.year(), day.month());
        cut_point(year, month, month_start)
    };
    let (year, month) = previous_month(end.year(), end.month());
    let start = cut_point(year, month, month_start) + Duration::days(1);
    (start, end)
}

/// The custom month immediately before the one containing `day`.
pub fn previous_month_window(day: NaiveDate, month_start: u32) -> (NaiveDate, NaiveDate) {
    let (start, _) = month_start_and_end(day, month_start);
    month_start_and_end(start - Duration::days(1), month_start)
}

fn cut_point(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        // month_start is capped at 28, so the cut point exists in any month
        None => unreachable!("cut point day out of range"),
    }
}

fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

fn previous_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

#[cfg(test)]
#[path = "dates_tests.rs"]
mod tests;
