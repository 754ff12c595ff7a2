//! Shared helpers: calendar dates and identifier sequences.

use chrono::NaiveDate;

use crate::error::LibraryError;

/// Fixed `yyyy-MM-dd` layout used for input and output.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `yyyy-MM-dd` date, ignoring surrounding whitespace.
pub fn parse_date(input: &str) -> Result<NaiveDate, LibraryError> {
    let trimmed = input.trim();
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|_| LibraryError::InvalidDateFormat {
        input: trimmed.to_string(),
    })
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Monotonic identifier counter starting at 1. Values are never reused.
#[derive(Debug, Clone)]
pub struct Sequence {
    next: u64,
}

impl Sequence {
    pub const fn new() -> Self {
        Self { next: 1 }
    }

    /// Hand out the current value and advance.
    pub fn advance(&mut self) -> u64 {
        let value = self.next;
        self.next += 1;
        value
    }
}

impl Default for Sequence {
    fn default() -> Self {
        Self::new()
    }
}
