use crate::core::error::ValidationError;
use crate::core::policy::PickerPolicy;
use crate::core::reconciler::{RangeState, Reconciler};
use crate::core::reducer::{Effect, EngineState, Event, Reducer};
use crate::core::value::{PickerValue, SelectionMode};
use crate::date::codec;
use crate::date::grid::MonthView;
use crate::date::{CalendarDate, DateRange};
use chrono::{Datelike, NaiveDate, TimeDelta};

/// Called once per successful commit with the new value.
pub type ChangeHandler = Box<dyn FnMut(Option<&PickerValue>) + Send>;

/// Date-picker input logic: owns the committed value, the text shown in the
/// input box, the current validation error and the visible month.
///
/// `reference_date` stands in for "today" in every policy decision; the
/// engine never reads the clock.
pub struct DateInputEngine {
    policy: PickerPolicy,
    reference_date: NaiveDate,
    state: EngineState,
    view: MonthView,
    cursor: NaiveDate,
    on_change: Option<ChangeHandler>,
}

impl DateInputEngine {
    pub fn new(policy: PickerPolicy, reference_date: NaiveDate) -> Self {
        Self {
            policy,
            reference_date,
            state: EngineState::default(),
            view: MonthView::containing(reference_date),
            cursor: reference_date,
            on_change: None,
        }
    }

    pub fn with_value(mut self, value: Option<PickerValue>) -> Self {
        self.sync_value(value);
        self
    }

    pub fn on_change(mut self, handler: impl FnMut(Option<&PickerValue>) + Send + 'static) -> Self {
        self.on_change = Some(Box::new(handler));
        self
    }

    // ── Input events ─────────────────────────────────────────────────────────

    pub fn handle_text(&mut self, raw: &str) {
        self.dispatch(Event::Text(raw.to_string()));
    }

    pub fn handle_click(&mut self, day: CalendarDate) {
        self.dispatch(Event::Click(day));
    }

    pub fn handle_hover(&mut self, day: Option<CalendarDate>) {
        self.dispatch(Event::Hover(day));
    }

    /// Controlled-value sync. Never fires the change handler.
    pub fn sync_value(&mut self, value: Option<PickerValue>) {
        self.dispatch(Event::Sync(value));
    }

    pub fn clear(&mut self) {
        self.handle_text("");
    }

    fn dispatch(&mut self, event: Event) {
        let reconciler = Reconciler::new(&self.policy, self.reference_date);
        let effects = Reducer::reduce(&mut self.state, event, &reconciler);
        for effect in effects {
            match effect {
                Effect::Changed(value) => {
                    if let Some(handler) = self.on_change.as_mut() {
                        handler(value.as_ref());
                    }
                }
                Effect::Reveal(day) => {
                    self.view = MonthView::containing(day.date());
                    self.cursor = day.date();
                }
            }
        }
    }

    // ── Navigation ───────────────────────────────────────────────────────────

    pub fn next_month(&mut self) {
        self.shift_view(1);
    }

    pub fn prev_month(&mut self) {
        self.shift_view(-1);
    }

    pub fn next_year(&mut self) {
        self.shift_view(12);
    }

    pub fn prev_year(&mut self) {
        self.shift_view(-12);
    }

    fn shift_view(&mut self, months: i32) {
        self.view = self.view.shift_months(months);
        let last = self.view.days_in_month();
        let day = self.cursor.day().min(last);
        let first = self.view.first_day();
        self.cursor = first
            .checked_add_signed(TimeDelta::days(i64::from(day) - 1))
            .unwrap_or(first);
        self.hover_cursor();
    }

    /// Moves the keyboard cursor; the view follows it across months.
    pub fn move_cursor(&mut self, days: i64) {
        if let Some(next) = self.cursor.checked_add_signed(TimeDelta::days(days)) {
            self.cursor = next;
            if !self.view.contains(next) {
                self.view = MonthView::containing(next);
            }
            self.hover_cursor();
        }
    }

    /// Clicks the day under the keyboard cursor.
    pub fn select_cursor(&mut self) {
        self.handle_click(CalendarDate::from_date(self.cursor));
    }

    pub fn go_to_today(&mut self) {
        self.cursor = self.reference_date;
        self.view = MonthView::containing(self.reference_date);
        self.hover_cursor();
    }

    fn hover_cursor(&mut self) {
        if matches!(self.state.range, RangeState::AnchorSet(_)) {
            self.handle_hover(Some(CalendarDate::from_date(self.cursor)));
        }
    }

    pub fn set_reference_date(&mut self, reference_date: NaiveDate) {
        self.reference_date = reference_date;
    }

    // ── Queries ──────────────────────────────────────────────────────────────

    pub fn committed(&self) -> Option<&PickerValue> {
        self.state.committed.as_ref()
    }

    pub fn display_text(&self) -> &str {
        &self.state.display_text
    }

    pub fn error(&self) -> Option<&ValidationError> {
        self.state.error.as_ref()
    }

    pub fn range_state(&self) -> RangeState {
        self.state.range
    }

    pub fn policy(&self) -> &PickerPolicy {
        &self.policy
    }

    pub fn mode(&self) -> SelectionMode {
        self.policy.mode
    }

    pub fn placeholder(&self) -> String {
        codec::placeholder(self.policy.mode)
    }

    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }

    pub fn view(&self) -> MonthView {
        self.view
    }

    pub fn cursor(&self) -> NaiveDate {
        self.cursor
    }

    pub fn is_disabled(&self, day: CalendarDate) -> bool {
        self.policy.bounds.is_disabled(day, self.reference_date)
    }

    pub fn hover_preview(&self) -> Option<DateRange> {
        let reconciler = Reconciler::new(&self.policy, self.reference_date);
        Reducer::preview(&self.state, &reconciler)
    }
}
