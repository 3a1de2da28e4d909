use crate::core::value::{PickerValue, SelectionMode};
use crate::date::{CalendarDate, DateRange};
use chrono::{Datelike, NaiveDate};
use regex::Regex;
use std::sync::LazyLock;

pub const DATE_FORMAT: &str = "DD/MM/YYYY";
pub const DATE_LEN: usize = 10;
pub const RANGE_SEPARATOR: &str = " - ";
pub const RANGE_LEN: usize = DATE_LEN * 2 + RANGE_SEPARATOR.len();

static DATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{2}/[0-9]{2}/[0-9]{4}$").expect("date pattern is valid"));

pub fn format(date: CalendarDate) -> String {
    format_naive(date.date())
}

pub fn format_naive(date: NaiveDate) -> String {
    format!("{:02}/{:02}/{:04}", date.day(), date.month(), date.year())
}

pub fn format_range(range: &DateRange) -> String {
    format!(
        "{}{}{}",
        format(range.start()),
        RANGE_SEPARATOR,
        format(range.end())
    )
}

/// Display text for a committed value; empty when nothing is committed.
pub fn format_value(value: Option<&PickerValue>) -> String {
    match value {
        None => String::new(),
        Some(PickerValue::Single(date)) => format(*date),
        Some(PickerValue::Range(range)) => format_range(range),
    }
}

pub fn placeholder(mode: SelectionMode) -> String {
    match mode {
        SelectionMode::Single => DATE_FORMAT.to_string(),
        SelectionMode::Range => format!("{DATE_FORMAT}{RANGE_SEPARATOR}{DATE_FORMAT}"),
    }
}

/// Drops every character outside `[0-9/-]`.
pub fn sanitize(raw: &str) -> String {
    raw.chars()
        .filter(|ch| ch.is_ascii_digit() || *ch == '/' || *ch == '-')
        .collect()
}

pub fn is_strictly_valid(text: &str) -> bool {
    strict_date(text).is_some()
}

/// Parses `DD/MM/YYYY` into a start-of-day date. Impossible calendar dates
/// are rejected rather than rolled over into the next month.
pub fn parse(text: &str) -> Option<CalendarDate> {
    strict_date(text).map(CalendarDate::from_date)
}

pub fn parse_naive(text: &str) -> Option<NaiveDate> {
    strict_date(text)
}

/// Parses display text for `mode` without applying any bounds policy.
/// Used for initial values supplied by configuration.
pub fn parse_value(text: &str, mode: SelectionMode) -> Option<PickerValue> {
    let text = sanitize(text);
    match mode {
        SelectionMode::Single => parse(&text).map(PickerValue::Single),
        SelectionMode::Range => {
            let (start, end) = text.split_once('-')?;
            DateRange::whole_days(parse(start)?, parse(end)?).map(PickerValue::Range)
        }
    }
}

fn strict_date(text: &str) -> Option<NaiveDate> {
    if !DATE_PATTERN.is_match(text) {
        return None;
    }

    let day: u32 = text[0..2].parse().ok()?;
    let month: u32 = text[3..5].parse().ok()?;
    let year: i32 = text[6..10].parse().ok()?;

    if !(1..=12).contains(&month) || !(1..=31).contains(&day) || !(1000..=9999).contains(&year) {
        return None;
    }

    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    (format_naive(date) == text).then_some(date)
}
