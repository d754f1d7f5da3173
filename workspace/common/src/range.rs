use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Length of the default reporting window, ending today.
pub const DEFAULT_RANGE_DAYS: i64 = 30;

/// Inclusive date range sent to every dashboard endpoint.
///
/// The range is user-editable and deliberately not validated: a start after
/// the end is passed to the backend as-is.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// The last [`DEFAULT_RANGE_DAYS`] days ending on `today`.
    pub fn trailing(today: NaiveDate) -> Self {
        Self {
            start: today - Duration::days(DEFAULT_RANGE_DAYS),
            end: today,
        }
    }

    pub fn start_iso(&self) -> String {
        crate::format::iso_date(self.start)
    }

    pub fn end_iso(&self) -> String {
        crate::format::iso_date(self.end)
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", self.start_iso(), self.end_iso())
    }
}
