use crate::core::engine::DateInputEngine;
use crate::core::reconciler::RangeState;
use crate::core::value::PickerValue;
use crate::date::grid::WEEKDAY_NAMES;
use crate::date::CalendarDate;
use crate::ui::span::{Span, SpanLine};
use crate::ui::style::{Color, Style};
use chrono::{Datelike, NaiveDate};
use unicode_width::UnicodeWidthStr;

/// How one day cell should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DayFlags {
    pub disabled: bool,
    pub today: bool,
    /// Committed single date, or either end of a range (including the anchor).
    pub selected: bool,
    pub in_range: bool,
    pub preview: bool,
    pub cursor: bool,
}

pub fn day_flags(engine: &DateInputEngine, date: NaiveDate, grid_focused: bool) -> DayFlags {
    let day = CalendarDate::from_date(date);
    let mut flags = DayFlags {
        disabled: engine.is_disabled(day),
        today: date == engine.reference_date(),
        cursor: grid_focused && date == engine.cursor(),
        ..DayFlags::default()
    };

    match engine.range_state() {
        RangeState::AnchorSet(anchor) => {
            flags.selected = anchor.date() == date;
        }
        _ => match engine.committed() {
            Some(PickerValue::Single(selected)) => flags.selected = selected.date() == date,
            Some(PickerValue::Range(range)) => {
                flags.selected = range.start().date() == date || range.end().date() == date;
                flags.in_range = range.contains_day(day);
            }
            None => {}
        },
    }

    if let Some(preview) = engine.hover_preview() {
        flags.preview = preview.contains_day(day);
    }

    flags
}

fn day_style(flags: DayFlags) -> Style {
    let mut style = if flags.cursor {
        Style::new().color(Color::Yellow).bold()
    } else if flags.selected {
        Style::new().color(Color::Cyan).bold()
    } else if flags.in_range {
        Style::new().color(Color::Cyan)
    } else if flags.preview {
        Style::new().color(Color::Blue)
    } else if flags.disabled {
        Style::new().color(Color::DarkGrey).dim()
    } else {
        Style::default()
    };
    if flags.today {
        style = style.underline();
    }
    style
}

/// Input box, inline error and the month grid.
pub fn render(engine: &DateInputEngine, label: &str, grid_focused: bool) -> Vec<SpanLine> {
    let mut lines: Vec<SpanLine> = Vec::new();
    lines.push(input_line(engine, label, !grid_focused));

    if let Some(err) = engine.error() {
        lines.push(vec![Span::styled(
            format!("  ✗ {err}"),
            Style::new().color(Color::Red),
        )]);
    }

    let view = engine.view();
    let header_style = if grid_focused {
        Style::new().color(Color::Cyan)
    } else {
        Style::default()
    };
    lines.push(vec![Span::styled(
        format!("  ‹ {} {} ›", view.month_name(), view.year()),
        header_style,
    )]);

    let mut header = vec![Span::new("  ")];
    for name in WEEKDAY_NAMES {
        header.push(Span::styled(
            format!(" {name} "),
            Style::new().color(Color::DarkGrey),
        ));
    }
    lines.push(header);

    let grid = view.grid();
    for row in grid.rows() {
        let mut line: SpanLine = vec![Span::new("  ")];
        for cell in row {
            match cell {
                None => line.push(Span::new("    ")),
                Some(date) => {
                    let flags = day_flags(engine, *date, grid_focused);
                    let (l, r) = if flags.cursor { ("[", "]") } else { (" ", " ") };
                    line.push(Span::styled(
                        format!("{l}{:2}{r}", date.day()),
                        day_style(flags),
                    ));
                }
            }
        }
        lines.push(line);
    }

    lines
}

fn input_line(engine: &DateInputEngine, label: &str, focused: bool) -> SpanLine {
    let marker = if focused { ">" } else { " " };
    let placeholder = engine.placeholder();
    let text = engine.display_text();

    let mut line = vec![Span::new(format!("{marker} {label}: "))];
    if text.is_empty() {
        line.push(Span::styled(
            placeholder.clone(),
            Style::new().color(Color::DarkGrey),
        ));
    } else {
        let style = if engine.error().is_some() {
            Style::new().color(Color::Red)
        } else {
            Style::default()
        };
        line.push(Span::styled(text.to_string(), style));
        let pad = placeholder.width().saturating_sub(text.width());
        if pad > 0 {
            line.push(Span::new(" ".repeat(pad)));
        }
    }
    line
}
