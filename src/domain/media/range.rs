// SPDX-License-Identifier: MPL-2.0
//! Date range validation and filtering.
//!
//! Validation is a pure function of the two raw input strings and the
//! caller's notion of "today", so it can be checked without a clock.

use super::types::{MediaEntry, DATE_FORMAT};
use chrono::NaiveDate;
use std::fmt;

/// Why a date range was rejected before any network call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    /// One or both inputs are empty.
    MissingDate,
    /// An input is not a `YYYY-MM-DD` calendar date.
    InvalidDate(String),
    /// An input is strictly later than today.
    FutureDate(NaiveDate),
}

impl RangeError {
    /// Returns the i18n message key for the alert shown to the user.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            RangeError::MissingDate => "alert-missing-dates",
            RangeError::InvalidDate(_) => "alert-invalid-date",
            RangeError::FutureDate(_) => "alert-future-dates",
        }
    }
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeError::MissingDate => write!(f, "start or end date is missing"),
            RangeError::InvalidDate(raw) => write!(f, "not a YYYY-MM-DD date: {raw:?}"),
            RangeError::FutureDate(date) => write!(f, "date is in the future: {date}"),
        }
    }
}

/// A validated, inclusive range of publication dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Validates the raw input strings against `today`.
    ///
    /// Checks run in order: both present, both well-formed, neither later
    /// than `today`. The order of `start` and `end` is not checked.
    pub fn validate(start: &str, end: &str, today: NaiveDate) -> Result<Self, RangeError> {
        let (start, end) = (start.trim(), end.trim());
        if start.is_empty() || end.is_empty() {
            return Err(RangeError::MissingDate);
        }

        let start = parse_input(start)?;
        let end = parse_input(end)?;

        for date in [start, end] {
            if date > today {
                return Err(RangeError::FutureDate(date));
            }
        }

        Ok(Self { start, end })
    }

    #[must_use]
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Inclusive membership; a reversed range is read as its normalized form.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        let (low, high) = if self.start <= self.end {
            (self.start, self.end)
        } else {
            (self.end, self.start)
        };
        (low..=high).contains(&date)
    }

    /// Keeps the entries whose date lies inside the range, preserving order.
    #[must_use]
    pub fn filter(&self, entries: Vec<MediaEntry>) -> Vec<MediaEntry> {
        entries
            .into_iter()
            .filter(|entry| entry.parsed_date().is_some_and(|date| self.contains(date)))
            .collect()
    }
}

fn parse_input(raw: &str) -> Result<NaiveDate, RangeError> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|_| RangeError::InvalidDate(raw.into()))
}
