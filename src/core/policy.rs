use crate::core::value::SelectionMode;
use crate::date::CalendarDate;
use crate::date::math::{end_of_day, is_after, is_before, start_of_day};
use chrono::NaiveDate;

/// Which days may be selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoundsPolicy {
    pub min_date: Option<NaiveDate>,
    pub max_date: Option<NaiveDate>,
    pub disable_past_dates: bool,
}

impl BoundsPolicy {
    /// Lower bound after folding in `disable_past_dates`.
    pub fn effective_min(&self, reference_date: NaiveDate) -> Option<NaiveDate> {
        match (self.min_date, self.disable_past_dates) {
            (Some(min), true) => Some(min.max(reference_date)),
            (None, true) => Some(reference_date),
            (min, false) => min,
        }
    }

    pub fn is_disabled(&self, day: CalendarDate, reference_date: NaiveDate) -> bool {
        let day = start_of_day(day);
        if let Some(min) = self.effective_min(reference_date)
            && is_before(day, CalendarDate::from_date(min))
        {
            return true;
        }
        if let Some(max) = self.max_date
            && is_after(day, end_of_day(CalendarDate::from_date(max)))
        {
            return true;
        }
        false
    }
}

/// Everything the surrounding form decides about one picker instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickerPolicy {
    pub mode: SelectionMode,
    pub bounds: BoundsPolicy,
    /// Reject ranges whose end precedes their start.
    pub validate_range: bool,
}

impl Default for PickerPolicy {
    fn default() -> Self {
        Self {
            mode: SelectionMode::Single,
            bounds: BoundsPolicy::default(),
            validate_range: true,
        }
    }
}

impl PickerPolicy {
    pub fn single() -> Self {
        Self::default()
    }

    pub fn range() -> Self {
        Self {
            mode: SelectionMode::Range,
            ..Self::default()
        }
    }

    pub fn with_bounds(mut self, bounds: BoundsPolicy) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn with_validate_range(mut self, validate_range: bool) -> Self {
        self.validate_range = validate_range;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn day(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn default_policy_disables_nothing() {
        let bounds = BoundsPolicy::default();
        assert!(!bounds.is_disabled(day(1000, 1, 1), ymd(2024, 6, 15)));
        assert!(!bounds.is_disabled(day(9999, 12, 31), ymd(2024, 6, 15)));
    }

    #[test]
    fn past_dates_are_disabled_relative_to_reference() {
        let bounds = BoundsPolicy {
            disable_past_dates: true,
            ..Default::default()
        };
        let today = ymd(2024, 6, 15);
        assert!(bounds.is_disabled(day(2024, 6, 10), today));
        assert!(!bounds.is_disabled(day(2024, 6, 15), today));
        assert!(!bounds.is_disabled(day(2024, 6, 20), today));
    }

    #[test]
    fn effective_min_takes_later_of_min_and_today() {
        let today = ymd(2024, 6, 15);
        let early = BoundsPolicy {
            min_date: Some(ymd(2024, 1, 1)),
            disable_past_dates: true,
            ..Default::default()
        };
        assert_eq!(early.effective_min(today), Some(today));

        let late = BoundsPolicy {
            min_date: Some(ymd(2024, 7, 1)),
            disable_past_dates: true,
            ..Default::default()
        };
        assert_eq!(late.effective_min(today), Some(ymd(2024, 7, 1)));
        assert!(late.is_disabled(day(2024, 6, 20), today));
    }

    #[test]
    fn max_date_is_inclusive() {
        let bounds = BoundsPolicy {
            max_date: Some(ymd(2024, 6, 30)),
            ..Default::default()
        };
        let today = ymd(2024, 6, 15);
        assert!(!bounds.is_disabled(day(2024, 6, 30), today));
        assert!(!bounds.is_disabled(end_of_day(day(2024, 6, 30)), today));
        assert!(bounds.is_disabled(day(2024, 7, 1), today));
    }
}
