pub mod terminal;
pub mod terminal_event;

pub use terminal::Terminal;
pub use terminal_event::{KeyCode, KeyEvent, KeyModifiers, TerminalEvent};
