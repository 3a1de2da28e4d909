use crate::core::error::ValidationError;
use crate::core::reconciler::{Outcome, RangeState, Reconciler};
use crate::core::value::PickerValue;
use crate::date::codec::{self, RANGE_SEPARATOR};
use crate::date::{CalendarDate, DateRange};
use tracing::debug;

/// Everything that changes in response to input, kept in one place so the
/// committed value, the text and the error cannot drift apart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineState {
    pub committed: Option<PickerValue>,
    pub display_text: String,
    pub error: Option<ValidationError>,
    pub range: RangeState,
    pub hover: Option<CalendarDate>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Raw keystroke text; sanitized before use.
    Text(String),
    Click(CalendarDate),
    Hover(Option<CalendarDate>),
    /// Controlled value pushed in by the surrounding form.
    Sync(Option<PickerValue>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Notify the form of a new committed value.
    Changed(Option<PickerValue>),
    /// Bring the month holding this day into view.
    Reveal(CalendarDate),
}

pub struct Reducer;

impl Reducer {
    pub fn reduce(state: &mut EngineState, event: Event, reconciler: &Reconciler) -> Vec<Effect> {
        match event {
            Event::Text(raw) => Self::handle_text(state, &raw, reconciler),
            Event::Click(day) => Self::handle_click(state, day, reconciler),
            Event::Hover(day) => {
                state.hover = day;
                vec![]
            }
            Event::Sync(value) => Self::handle_sync(state, value),
        }
    }

    fn handle_text(state: &mut EngineState, raw: &str, reconciler: &Reconciler) -> Vec<Effect> {
        let text = codec::sanitize(raw);
        let outcome = reconciler.text(&text);
        state.display_text = text;

        match outcome {
            Outcome::Commit(value) => {
                state.range = RangeState::for_value(value.as_ref());
                Self::commit(state, value)
            }
            Outcome::Pending => {
                state.error = None;
                vec![]
            }
            Outcome::Rejected(err) => {
                state.error = Some(err);
                vec![]
            }
            Outcome::Anchored(_) | Outcome::Ignored => vec![],
        }
    }

    fn handle_click(state: &mut EngineState, day: CalendarDate, reconciler: &Reconciler) -> Vec<Effect> {
        let (next, outcome) = reconciler.click(state.range, day);
        state.range = next;

        match outcome {
            Outcome::Commit(value) => {
                state.display_text = codec::format_value(value.as_ref());
                Self::commit(state, value)
            }
            Outcome::Anchored(anchor) => {
                state.error = None;
                state.display_text = format!("{}{}", codec::format(anchor), RANGE_SEPARATOR);
                vec![]
            }
            Outcome::Rejected(err) => {
                state.error = Some(err);
                vec![]
            }
            Outcome::Pending | Outcome::Ignored => vec![],
        }
    }

    fn handle_sync(state: &mut EngineState, value: Option<PickerValue>) -> Vec<Effect> {
        if state.committed == value {
            return vec![];
        }
        state.display_text = codec::format_value(value.as_ref());
        state.range = RangeState::for_value(value.as_ref());
        state.error = None;
        state.hover = None;
        state.committed = value;
        value.map(|v| Effect::Reveal(v.anchor())).into_iter().collect()
    }

    fn commit(state: &mut EngineState, value: Option<PickerValue>) -> Vec<Effect> {
        debug!(value = ?value, "commit");
        state.error = None;
        state.hover = None;
        state.committed = value;
        let mut effects = vec![Effect::Changed(value)];
        if let Some(value) = value {
            effects.push(Effect::Reveal(value.anchor()));
        }
        effects
    }

    /// Range to highlight as a hover preview, if any.
    pub fn preview(state: &EngineState, reconciler: &Reconciler) -> Option<DateRange> {
        state.hover.and_then(|day| reconciler.preview(state.range, day))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::policy::PickerPolicy;
    use chrono::NaiveDate;

    fn day(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::from_ymd(y, m, d).unwrap()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    #[test]
    fn anchor_click_shows_partial_text() {
        let policy = PickerPolicy::range();
        let rec = Reconciler::new(&policy, today());
        let mut state = EngineState::default();

        let effects = Reducer::reduce(&mut state, Event::Click(day(2024, 6, 5)), &rec);
        assert!(effects.is_empty());
        assert_eq!(state.display_text, "05/06/2024 - ");
        assert_eq!(state.committed, None);
    }

    #[test]
    fn rejected_text_keeps_previous_commit() {
        let policy = PickerPolicy::single();
        let rec = Reconciler::new(&policy, today());
        let mut state = EngineState::default();

        Reducer::reduce(&mut state, Event::Text("05/06/2024".into()), &rec);
        let committed = state.committed;
        assert!(committed.is_some());

        let effects = Reducer::reduce(&mut state, Event::Text("31/06/2024".into()), &rec);
        assert!(effects.is_empty());
        assert_eq!(state.committed, committed);
        assert!(state.error.is_some());
        assert_eq!(state.display_text, "31/06/2024");
    }

    #[test]
    fn pending_text_clears_error() {
        let policy = PickerPolicy::single();
        let rec = Reconciler::new(&policy, today());
        let mut state = EngineState::default();

        Reducer::reduce(&mut state, Event::Text("31/06/2024".into()), &rec);
        assert!(state.error.is_some());
        Reducer::reduce(&mut state, Event::Text("31/06/202".into()), &rec);
        assert!(state.error.is_none());
    }

    #[test]
    fn sync_with_same_value_is_a_no_op() {
        let mut state = EngineState::default();
        assert!(Reducer::handle_sync(&mut state, None).is_empty());

        let value = Some(PickerValue::Single(day(2024, 6, 5)));
        let effects = Reducer::handle_sync(&mut state, value);
        assert_eq!(effects, vec![Effect::Reveal(day(2024, 6, 5))]);
        assert!(Reducer::handle_sync(&mut state, value).is_empty());
    }
}
