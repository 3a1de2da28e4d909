pub mod codec;
pub mod grid;
pub mod math;

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use serde::Serialize;
use std::fmt;

/// Milliseconds from midnight to the last representable instant of a day.
const LAST_MILLI_OF_DAY: i64 = 86_400_000 - 1;

/// A concrete calendar day pinned to either the first or the last
/// millisecond of that day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct CalendarDate(NaiveDateTime);

impl CalendarDate {
    /// Midnight of `date`.
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date.and_time(NaiveTime::MIN))
    }

    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self::from_date)
    }

    pub(crate) fn last_instant_of(date: NaiveDate) -> Self {
        Self(date.and_time(NaiveTime::MIN) + TimeDelta::milliseconds(LAST_MILLI_OF_DAY))
    }

    pub fn date(self) -> NaiveDate {
        self.0.date()
    }

    pub fn timestamp(self) -> NaiveDateTime {
        self.0
    }

    pub fn year(self) -> i32 {
        self.0.year()
    }

    pub fn month(self) -> u32 {
        self.0.month()
    }

    pub fn day(self) -> u32 {
        self.0.day()
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self::from_date(date)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&codec::format(*self))
    }
}

/// Inclusive `(start, end)` selection with `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DateRange {
    start: CalendarDate,
    end: CalendarDate,
}

impl DateRange {
    /// Returns `None` when `end` precedes `start`.
    pub fn new(start: CalendarDate, end: CalendarDate) -> Option<Self> {
        (start <= end).then_some(Self { start, end })
    }

    /// Range covering whole days: start of `first` to end of `last`.
    pub fn whole_days(first: CalendarDate, last: CalendarDate) -> Option<Self> {
        Self::new(math::start_of_day(first), math::end_of_day(last))
    }

    pub fn start(&self) -> CalendarDate {
        self.start
    }

    pub fn end(&self) -> CalendarDate {
        self.end
    }

    pub fn contains_day(&self, day: CalendarDate) -> bool {
        let day = day.date();
        day >= self.start.date() && day <= self.end.date()
    }
}
