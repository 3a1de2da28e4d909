pub mod engine;
pub mod error;
pub mod policy;
pub mod reconciler;
pub mod reducer;
pub mod value;
