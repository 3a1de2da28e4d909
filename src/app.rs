use crate::core::engine::DateInputEngine;
use crate::terminal::{KeyCode, KeyEvent, KeyModifiers, Terminal, TerminalEvent};
use crate::ui::calendar_view;
use crate::ui::span::{Span, SpanLine};
use crate::ui::style::{Color, Style};
use std::io;
use std::time::Duration;
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input,
    Grid,
}

/// Interactive preview of one date input: a text box above a month grid.
pub struct PickerApp {
    engine: DateInputEngine,
    label: String,
    focus: Focus,
    should_exit: bool,
}

impl PickerApp {
    pub fn new(engine: DateInputEngine, label: impl Into<String>) -> Self {
        Self {
            engine,
            label: label.into(),
            focus: Focus::Input,
            should_exit: false,
        }
    }

    pub fn engine(&self) -> &DateInputEngine {
        &self.engine
    }

    pub fn into_engine(self) -> DateInputEngine {
        self.engine
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn should_exit(&self) -> bool {
        self.should_exit
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        trace!(?key, focus = ?self.focus, "key");
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => self.should_exit = true,
            KeyCode::Char('c') if ctrl => self.should_exit = true,
            KeyCode::Tab | KeyCode::BackTab => self.toggle_focus(),
            _ => match self.focus {
                Focus::Input => self.input_key(key),
                Focus::Grid => self.grid_key(key),
            },
        }
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Input => Focus::Grid,
            Focus::Grid => {
                self.engine.handle_hover(None);
                Focus::Input
            }
        };
    }

    fn input_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(ch) => {
                let mut text = self.engine.display_text().to_string();
                text.push(ch);
                self.engine.handle_text(&text);
            }
            KeyCode::Backspace => {
                let mut text = self.engine.display_text().to_string();
                text.pop();
                self.engine.handle_text(&text);
            }
            KeyCode::Delete => self.engine.clear(),
            KeyCode::Enter => self.should_exit = true,
            KeyCode::Down => self.focus = Focus::Grid,
            _ => {}
        }
    }

    fn grid_key(&mut self, key: KeyEvent) {
        let shift = key.modifiers.contains(KeyModifiers::SHIFT);
        match key.code {
            KeyCode::Left => self.engine.move_cursor(-1),
            KeyCode::Right => self.engine.move_cursor(1),
            KeyCode::Up => self.engine.move_cursor(-7),
            KeyCode::Down => self.engine.move_cursor(7),
            KeyCode::PageUp if shift => self.engine.prev_year(),
            KeyCode::PageDown if shift => self.engine.next_year(),
            KeyCode::PageUp => self.engine.prev_month(),
            KeyCode::PageDown => self.engine.next_month(),
            KeyCode::Enter | KeyCode::Char(' ') => self.engine.select_cursor(),
            KeyCode::Char('t') => self.engine.go_to_today(),
            KeyCode::Backspace | KeyCode::Delete => self.engine.clear(),
            _ => {}
        }
    }

    pub fn lines(&self) -> Vec<SpanLine> {
        let mut lines =
            calendar_view::render(&self.engine, &self.label, self.focus == Focus::Grid);
        let hint = match self.focus {
            Focus::Input => "  type DD/MM/YYYY · tab: calendar · enter: done · esc: quit",
            Focus::Grid => "  arrows: move · pgup/pgdn: month · enter: pick · t: today · tab: input",
        };
        lines.push(vec![Span::styled(hint, Style::new().color(Color::DarkGrey))]);
        lines
    }
}

pub fn run(app: &mut PickerApp, terminal: &mut Terminal) -> io::Result<()> {
    terminal.enter_raw_mode()?;
    terminal.hide_cursor()?;

    let result = event_loop(app, terminal);

    terminal.clear()?;
    terminal.show_cursor()?;
    terminal.exit_raw_mode()?;

    result
}

fn event_loop(app: &mut PickerApp, terminal: &mut Terminal) -> io::Result<()> {
    let mut render_requested = true;

    loop {
        if render_requested {
            terminal.render(&app.lines())?;
            render_requested = false;
        }

        if terminal.poll(Duration::from_millis(100))? {
            match terminal.read_event()? {
                TerminalEvent::Key(key) => {
                    app.handle_key(key);
                    render_requested = true;
                }
                TerminalEvent::Resize { .. } => {
                    render_requested = true;
                }
            }
        }

        if app.should_exit() {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::policy::PickerPolicy;
    use crate::core::value::PickerValue;
    use crate::date::CalendarDate;
    use chrono::NaiveDate;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn press(app: &mut PickerApp, code: KeyCode) {
        app.handle_key(KeyEvent::plain(code));
    }

    fn type_text(app: &mut PickerApp, text: &str) {
        for ch in text.chars() {
            press(app, KeyCode::Char(ch));
        }
    }

    #[test]
    fn typing_commits_once_complete() {
        let engine = DateInputEngine::new(PickerPolicy::single(), ymd(2024, 6, 15));
        let mut app = PickerApp::new(engine, "Date");

        type_text(&mut app, "05/06/202");
        assert!(app.engine().committed().is_none());
        type_text(&mut app, "4");
        assert_eq!(
            app.engine().committed(),
            Some(&PickerValue::Single(CalendarDate::from_ymd(2024, 6, 5).unwrap()))
        );

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.engine().display_text(), "05/06/202");
        assert!(app.engine().committed().is_some());
    }

    #[test]
    fn grid_keys_pick_a_range() {
        let engine = DateInputEngine::new(PickerPolicy::range(), ymd(2024, 6, 15));
        let mut app = PickerApp::new(engine, "Stay");

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus(), Focus::Grid);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Enter);

        let range = app
            .engine()
            .committed()
            .and_then(PickerValue::as_range)
            .copied()
            .expect("range committed");
        assert_eq!(range.start().date(), ymd(2024, 6, 15));
        assert_eq!(range.end().date(), ymd(2024, 6, 23));
        assert_eq!(app.engine().display_text(), "15/06/2024 - 23/06/2024");
    }

    #[test]
    fn escape_exits() {
        let engine = DateInputEngine::new(PickerPolicy::single(), ymd(2024, 6, 15));
        let mut app = PickerApp::new(engine, "Date");
        assert!(!app.should_exit());
        press(&mut app, KeyCode::Esc);
        assert!(app.should_exit());
    }
}
