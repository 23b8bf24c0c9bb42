use chrono::{Days, Local, NaiveDate};

use crate::error::{PlannerError, Result};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a `YYYY-MM-DD` date. The raw input is kept in the error.
///
/// Only ASCII digits and `-` are accepted, so surrounding whitespace or a
/// signed year is an error. Month and day may omit the leading zero
/// (`2026-5-1`).
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    let invalid = || PlannerError::InvalidDateFormat(input.to_string());

    if input.is_empty() || !input.chars().all(|c| c.is_ascii_digit() || c == '-') {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|_| invalid())
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// `None` only at the end of chrono's calendar
pub fn next_day(date: NaiveDate) -> Option<NaiveDate> {
    date.checked_add_days(Days::new(1))
}
