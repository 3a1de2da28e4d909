//! Calendar comparisons over [`CalendarDate`]. All functions are total.

use super::{CalendarDate, DateRange};

pub fn start_of_day(d: CalendarDate) -> CalendarDate {
    CalendarDate::from_date(d.date())
}

pub fn end_of_day(d: CalendarDate) -> CalendarDate {
    CalendarDate::last_instant_of(d.date())
}

pub fn is_before(a: CalendarDate, b: CalendarDate) -> bool {
    a.timestamp() < b.timestamp()
}

pub fn is_after(a: CalendarDate, b: CalendarDate) -> bool {
    a.timestamp() > b.timestamp()
}

pub fn is_same_day(a: CalendarDate, b: CalendarDate) -> bool {
    a.date() == b.date()
}

/// Inclusive on both ends.
pub fn is_within_interval(day: CalendarDate, range: &DateRange) -> bool {
    !is_before(day, range.start()) && !is_after(day, range.end())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn ordering_is_strict() {
        let a = day(2024, 6, 5);
        let b = day(2024, 6, 20);
        assert!(is_before(a, b));
        assert!(is_after(b, a));
        assert!(!is_before(a, a));
        assert!(!is_after(a, a));
    }

    #[test]
    fn end_of_day_is_after_start_of_same_day() {
        let a = day(2024, 2, 29);
        assert!(is_after(end_of_day(a), start_of_day(a)));
        assert!(is_same_day(end_of_day(a), start_of_day(a)));
        assert_eq!(start_of_day(end_of_day(a)), a);
    }

    #[test]
    fn interval_is_inclusive() {
        let a = day(2024, 6, 5);
        let b = day(2024, 6, 20);
        let range = DateRange::new(a, b).unwrap();
        assert!(is_within_interval(a, &range));
        assert!(is_within_interval(b, &range));
        assert!(is_within_interval(day(2024, 6, 12), &range));
        assert!(!is_within_interval(day(2024, 6, 4), &range));
        // end is midnight of the 20th, so later that day is outside
        assert!(!is_within_interval(end_of_day(b), &range));
    }

    #[test]
    fn same_day_ignores_time_of_day() {
        let a = day(2023, 12, 31);
        assert!(is_same_day(a, end_of_day(a)));
        assert!(!is_same_day(a, day(2024, 1, 1)));
    }
}
