pub mod app;
pub mod config;
pub mod core;
pub mod date;
pub mod terminal;
pub mod ui;

pub use crate::core::engine::{ChangeHandler, DateInputEngine};
pub use crate::core::error::ValidationError;
pub use crate::core::policy::{BoundsPolicy, PickerPolicy};
pub use crate::core::reconciler::RangeState;
pub use crate::core::value::{PickerValue, SelectionMode};

pub use crate::date::codec;
pub use crate::date::math;
pub use crate::date::{CalendarDate, DateRange};
