pub mod calendar_view;
pub mod span;
pub mod style;
