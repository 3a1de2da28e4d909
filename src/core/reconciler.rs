//! Turns day clicks and typed text into committed values.
//!
//! Clicks and keystrokes are two entry points into the same checks
//! ([`Reconciler::check_single`] and [`Reconciler::check_range`]), so ordering
//! and bounds rules cannot differ between input methods.
//!
//! Range mode walks `Empty -> AnchorSet -> Complete`; a click while `Complete`
//! starts a new anchor. Single mode has no intermediate state.

use crate::core::error::ValidationError;
use crate::core::policy::PickerPolicy;
use crate::core::value::{PickerValue, SelectionMode};
use crate::date::codec::{self, DATE_LEN};
use crate::date::math::{is_before, start_of_day};
use crate::date::{CalendarDate, DateRange};
use chrono::NaiveDate;
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RangeState {
    #[default]
    Empty,
    /// Start picked, end pending.
    AnchorSet(CalendarDate),
    Complete(DateRange),
}

impl RangeState {
    /// State that corresponds to an externally supplied value.
    pub fn for_value(value: Option<&PickerValue>) -> Self {
        match value {
            Some(PickerValue::Range(range)) => RangeState::Complete(*range),
            _ => RangeState::Empty,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A new committed value; `None` clears the selection.
    Commit(Option<PickerValue>),
    /// Range start picked; nothing committed yet.
    Anchored(CalendarDate),
    /// Text is still being typed.
    Pending,
    Rejected(ValidationError),
    /// Click on a disabled day.
    Ignored,
}

pub struct Reconciler<'a> {
    policy: &'a PickerPolicy,
    reference_date: NaiveDate,
}

impl<'a> Reconciler<'a> {
    pub fn new(policy: &'a PickerPolicy, reference_date: NaiveDate) -> Self {
        Self {
            policy,
            reference_date,
        }
    }

    pub fn is_disabled(&self, day: CalendarDate) -> bool {
        self.policy.bounds.is_disabled(day, self.reference_date)
    }

    /// Applies a day-cell click. Returns the next range state and what
    /// happened; rejected and ignored clicks keep `state` as it was.
    pub fn click(&self, state: RangeState, day: CalendarDate) -> (RangeState, Outcome) {
        if self.is_disabled(day) {
            trace!(day = %day, "click on disabled day ignored");
            return (state, Outcome::Ignored);
        }

        match self.policy.mode {
            SelectionMode::Single => match self.check_single(day) {
                Ok(date) => (
                    RangeState::Empty,
                    Outcome::Commit(Some(PickerValue::Single(date))),
                ),
                Err(err) => (state, Outcome::Rejected(err)),
            },
            SelectionMode::Range => match state {
                RangeState::Empty | RangeState::Complete(_) => {
                    let anchor = start_of_day(day);
                    (RangeState::AnchorSet(anchor), Outcome::Anchored(anchor))
                }
                RangeState::AnchorSet(anchor) => match self.check_range(anchor, day) {
                    Ok(range) => (
                        RangeState::Complete(range),
                        Outcome::Commit(Some(PickerValue::Range(range))),
                    ),
                    Err(err) => (state, Outcome::Rejected(err)),
                },
            },
        }
    }

    /// Reconciles sanitized text from the input box. Incomplete text is
    /// `Pending`, never an error.
    pub fn text(&self, text: &str) -> Outcome {
        if text.is_empty() {
            return Outcome::Commit(None);
        }

        match self.policy.mode {
            SelectionMode::Single => self.single_text(text),
            SelectionMode::Range => self.range_text(text),
        }
    }

    /// Tentative range shown while hovering `day` with an anchor set.
    pub fn preview(&self, state: RangeState, day: CalendarDate) -> Option<DateRange> {
        let RangeState::AnchorSet(anchor) = state else {
            return None;
        };
        if self.is_disabled(day) {
            return None;
        }
        let (first, last) = if is_before(day, anchor) {
            (day, anchor)
        } else {
            (anchor, day)
        };
        DateRange::whole_days(first, last)
    }

    fn single_text(&self, text: &str) -> Outcome {
        if text.len() < DATE_LEN {
            trace!(len = text.len(), "date text incomplete");
            return Outcome::Pending;
        }
        let Some(date) = codec::parse(text) else {
            return Outcome::Rejected(invalid(text));
        };
        match self.check_single(date) {
            Ok(date) => Outcome::Commit(Some(PickerValue::Single(date))),
            Err(err) => Outcome::Rejected(err),
        }
    }

    fn range_text(&self, text: &str) -> Outcome {
        let mut halves = text.split('-');
        let start_text = halves.next().unwrap_or_default();
        let end_text = halves.next();
        if halves.next().is_some() {
            return Outcome::Rejected(invalid(text));
        }

        if start_text.len() > DATE_LEN {
            return Outcome::Rejected(invalid(start_text));
        }
        let Some(end_text) = end_text else {
            trace!(len = text.len(), "range text has no end yet");
            return Outcome::Pending;
        };
        if end_text.len() > DATE_LEN {
            return Outcome::Rejected(invalid(end_text));
        }
        if start_text.len() < DATE_LEN || end_text.len() < DATE_LEN {
            trace!(len = text.len(), "range text incomplete");
            return Outcome::Pending;
        }

        let Some(start) = codec::parse(start_text) else {
            return Outcome::Rejected(invalid(start_text));
        };
        let Some(end) = codec::parse(end_text) else {
            return Outcome::Rejected(invalid(end_text));
        };

        match self.check_range(start, end) {
            Ok(range) => Outcome::Commit(Some(PickerValue::Range(range))),
            Err(err) => Outcome::Rejected(err),
        }
    }

    fn check_single(&self, day: CalendarDate) -> Result<CalendarDate, ValidationError> {
        if self.is_disabled(day) {
            debug!(day = %day, "date outside bounds");
            return Err(ValidationError::OutOfBounds { date: day.date() });
        }
        Ok(start_of_day(day))
    }

    /// Ordering first, then bounds on both ends. With `validate_range` off a
    /// reversed pair is swapped so the committed range stays ordered.
    fn check_range(
        &self,
        start: CalendarDate,
        end: CalendarDate,
    ) -> Result<DateRange, ValidationError> {
        let (first, last) = if end.date() < start.date() {
            if self.policy.validate_range {
                debug!(start = %start, end = %end, "range end before start");
                return Err(ValidationError::StartAfterEnd {
                    start: start.date(),
                    end: end.date(),
                });
            }
            (end, start)
        } else {
            (start, end)
        };

        for day in [first, last] {
            self.check_single(day)?;
        }

        DateRange::whole_days(first, last).ok_or(ValidationError::StartAfterEnd {
            start: first.date(),
            end: last.date(),
        })
    }
}

fn invalid(input: &str) -> ValidationError {
    ValidationError::InvalidDate {
        input: input.to_string(),
    }
}
