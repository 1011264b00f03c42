//! Core types for classgrid.
//!
//! This crate holds everything the CLI needs that isn't terminal output:
//! - `time`, `weekday` and `color` for the fixed form enumerations
//! - `section` and `schedule` for the persisted records
//! - `conflict` for the same-day overlap check
//! - `grid` for projecting a section's week onto hourly rows
//! - `store` for the repository trait and its JSON-file implementation

pub mod color;
pub mod config;
pub mod conflict;
pub mod error;
pub mod grid;
pub mod notification;
pub mod schedule;
pub mod section;
pub mod store;
pub mod time;
pub mod weekday;

pub use color::Color;
pub use conflict::{Conflict, Decision};
pub use error::{ClassGridError, ClassGridResult};
pub use schedule::{Schedule, ScheduleDraft};
pub use section::Section;
pub use store::{JsonStore, ScheduleRepository};
pub use time::TimeOfDay;
pub use weekday::Weekday;
