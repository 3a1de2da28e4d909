use crate::terminal::terminal_event::TerminalEvent;
use crate::ui::span::Span;
use crate::ui::style::Color;
use crossterm::event::{Event, KeyEventKind, poll, read};
use crossterm::style::{
    Attribute, Color as CrosstermColor, Print, ResetColor, SetAttribute, SetBackgroundColor,
    SetForegroundColor,
};
use crossterm::terminal::{Clear, ClearType};
use crossterm::{cursor, execute, queue, terminal};
use std::io::{self, Stdout, Write};
use std::time::Duration;

/// Inline renderer: each frame overwrites the lines drawn by the previous one.
pub struct Terminal {
    stdout: Stdout,
    drawn_lines: u16,
}

impl Terminal {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            drawn_lines: 0,
        }
    }

    pub fn enter_raw_mode(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()
    }

    pub fn exit_raw_mode(&mut self) -> io::Result<()> {
        terminal::disable_raw_mode()
    }

    pub fn hide_cursor(&mut self) -> io::Result<()> {
        execute!(self.stdout, cursor::Hide)
    }

    pub fn show_cursor(&mut self) -> io::Result<()> {
        execute!(self.stdout, cursor::Show)
    }

    pub fn poll(&self, timeout: Duration) -> io::Result<bool> {
        poll(timeout)
    }

    pub fn read_event(&mut self) -> io::Result<TerminalEvent> {
        loop {
            match read()? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    return Ok(TerminalEvent::Key(key.into()));
                }
                Event::Resize(width, height) => {
                    return Ok(TerminalEvent::Resize { width, height });
                }
                _ => continue,
            }
        }
    }

    pub fn render(&mut self, lines: &[Vec<Span>]) -> io::Result<()> {
        if self.drawn_lines > 0 {
            queue!(self.stdout, cursor::MoveUp(self.drawn_lines))?;
        }
        queue!(
            self.stdout,
            cursor::MoveToColumn(0),
            Clear(ClearType::FromCursorDown)
        )?;

        for line in lines {
            for span in line {
                self.queue_span(span)?;
            }
            queue!(self.stdout, Print("\r\n"))?;
        }
        self.drawn_lines = u16::try_from(lines.len()).unwrap_or(u16::MAX);
        self.stdout.flush()
    }

    /// Erases the last frame, leaving the cursor where it started.
    pub fn clear(&mut self) -> io::Result<()> {
        if self.drawn_lines > 0 {
            queue!(self.stdout, cursor::MoveUp(self.drawn_lines))?;
        }
        queue!(
            self.stdout,
            cursor::MoveToColumn(0),
            Clear(ClearType::FromCursorDown)
        )?;
        self.drawn_lines = 0;
        self.stdout.flush()
    }

    fn queue_span(&mut self, span: &Span) -> io::Result<()> {
        let style = span.style;
        if let Some(fg) = style.color {
            queue!(self.stdout, SetForegroundColor(map_color(fg)))?;
        }
        if let Some(bg) = style.background {
            queue!(self.stdout, SetBackgroundColor(map_color(bg)))?;
        }
        if style.bold {
            queue!(self.stdout, SetAttribute(Attribute::Bold))?;
        }
        if style.dim {
            queue!(self.stdout, SetAttribute(Attribute::Dim))?;
        }
        if style.underline {
            queue!(self.stdout, SetAttribute(Attribute::Underlined))?;
        }

        queue!(self.stdout, Print(&span.text))?;

        if !style.is_plain() {
            queue!(self.stdout, SetAttribute(Attribute::Reset), ResetColor)?;
        }
        Ok(())
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new()
    }
}

fn map_color(color: Color) -> CrosstermColor {
    match color {
        Color::DarkGrey => CrosstermColor::DarkGrey,
        Color::Red => CrosstermColor::Red,
        Color::Green => CrosstermColor::Green,
        Color::Yellow => CrosstermColor::Yellow,
        Color::Blue => CrosstermColor::Blue,
        Color::Cyan => CrosstermColor::Cyan,
        Color::White => CrosstermColor::White,
    }
}
