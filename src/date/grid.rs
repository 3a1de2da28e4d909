use chrono::{Datelike, Months, NaiveDate};

pub const WEEKDAY_NAMES: [&str; 7] = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"];

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// The month currently shown by a picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MonthView {
    first: NaiveDate,
}

impl MonthView {
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            first: date.with_day(1).unwrap_or(date),
        }
    }

    pub fn year(self) -> i32 {
        self.first.year()
    }

    pub fn month(self) -> u32 {
        self.first.month()
    }

    pub fn first_day(self) -> NaiveDate {
        self.first
    }

    pub fn month_name(self) -> &'static str {
        MONTH_NAMES[(self.month() as usize).saturating_sub(1) % 12]
    }

    pub fn contains(self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }

    /// Shifts by `delta` months. Out-of-calendar results leave the view as is.
    pub fn shift_months(self, delta: i32) -> Self {
        let months = Months::new(delta.unsigned_abs());
        let shifted = if delta >= 0 {
            self.first.checked_add_months(months)
        } else {
            self.first.checked_sub_months(months)
        };
        shifted.map(|first| Self { first }).unwrap_or(self)
    }

    pub fn days_in_month(self) -> u32 {
        self.shift_months(1)
            .first
            .pred_opt()
            .filter(|last| self.contains(*last))
            .map(|last| last.day())
            .unwrap_or(31)
    }

    pub fn grid(self) -> MonthGrid {
        MonthGrid::new(self)
    }
}

/// Monday-first 6x7 layout of the days in one month.
pub struct MonthGrid {
    pub view: MonthView,
    pub cells: [[Option<NaiveDate>; 7]; 6],
}

impl MonthGrid {
    pub fn new(view: MonthView) -> Self {
        let first_wd = view.first.weekday().num_days_from_monday() as usize;
        let mut cells = [[None; 7]; 6];
        for (offset, date) in view.first.iter_days().take(view.days_in_month() as usize).enumerate() {
            let pos = first_wd + offset;
            cells[pos / 7][pos % 7] = Some(date);
        }
        MonthGrid { view, cells }
    }

    /// Rows that hold at least one day.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<NaiveDate>; 7]> {
        self.cells.iter().filter(|row| row.iter().any(Option::is_some))
    }

    pub fn position_of(&self, date: NaiveDate) -> Option<(usize, usize)> {
        (0..6)
            .flat_map(|r| (0..7).map(move |c| (r, c)))
            .find(|&(r, c)| self.cells[r][c] == Some(date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn june_2024_starts_on_saturday() {
        let grid = MonthView::containing(ymd(2024, 6, 15)).grid();
        assert_eq!(grid.cells[0][5], Some(ymd(2024, 6, 1)));
        assert_eq!(grid.position_of(ymd(2024, 6, 30)), Some((4, 6)));
        assert_eq!(grid.rows().count(), 5);
    }

    #[test]
    fn days_in_month_handles_leap_years() {
        assert_eq!(MonthView::containing(ymd(2024, 2, 1)).days_in_month(), 29);
        assert_eq!(MonthView::containing(ymd(2023, 2, 1)).days_in_month(), 28);
        assert_eq!(MonthView::containing(ymd(2024, 4, 1)).days_in_month(), 30);
        assert_eq!(MonthView::containing(ymd(2024, 12, 1)).days_in_month(), 31);
    }

    #[test]
    fn shifting_crosses_year_boundaries() {
        let view = MonthView::containing(ymd(2024, 1, 31));
        let prev = view.shift_months(-1);
        assert_eq!((prev.year(), prev.month()), (2023, 12));
        let next = view.shift_months(12);
        assert_eq!((next.year(), next.month()), (2025, 1));
        assert_eq!(next.month_name(), "January");
    }
}
