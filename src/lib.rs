//! Library and Binary to pick a date range on a calendar grid and report the weekend dates it contains
//! for an example how to use: see main.rs

pub mod calendar;
pub mod config;
pub mod csv;
pub mod dates;
pub mod gui;
pub mod picker;
pub mod presets;
pub mod result;
pub mod selection;

pub use picker::{DatePicker, PickerEvent};
pub use result::{CommittedRange, RangeResult};
pub use selection::{Selection, SelectionStateMachine};
