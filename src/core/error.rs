//! Validation errors surfaced next to the input box.

use crate::date::codec;
use chrono::NaiveDate;

/// Recoverable input problems. These are rendered as inline text; the engine
/// stays editable while one is active.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The text is complete but not a real calendar date in `DD/MM/YYYY`.
    #[error("{input:?} is not a valid date, expected DD/MM/YYYY")]
    InvalidDate {
        /// The offending piece of input.
        input: String,
    },

    /// The range end precedes its start.
    #[error("end date {} must not be before start date {}", dmy(.end), dmy(.start))]
    StartAfterEnd {
        /// Range start.
        start: NaiveDate,
        /// Range end.
        end: NaiveDate,
    },

    /// The date is disabled by the bounds policy.
    #[error("{} is outside the selectable dates", dmy(.date))]
    OutOfBounds {
        /// The disabled date.
        date: NaiveDate,
    },
}

fn dmy(date: &NaiveDate) -> String {
    codec::format_naive(*date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn error_invalid_date() {
        let e = ValidationError::InvalidDate {
            input: "31/02/2024".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "\"31/02/2024\" is not a valid date, expected DD/MM/YYYY"
        );
    }

    #[test]
    fn error_start_after_end() {
        let e = ValidationError::StartAfterEnd {
            start: ymd(2024, 6, 15),
            end: ymd(2024, 6, 10),
        };
        assert_eq!(
            e.to_string(),
            "end date 10/06/2024 must not be before start date 15/06/2024"
        );
    }

    #[test]
    fn error_out_of_bounds() {
        let e = ValidationError::OutOfBounds {
            date: ymd(2024, 6, 10),
        };
        assert_eq!(e.to_string(), "10/06/2024 is outside the selectable dates");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error + Send + Sync>() {}
        assert_impl::<ValidationError>();
    }
}
