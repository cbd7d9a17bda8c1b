mod carpentry_report;
mod cell;
mod drag_gesture;
mod footprint;
mod language;
mod layout_command;
mod layout_event;
pub mod limits;

pub use carpentry_report::CarpentryReport;
pub use cell::{Cell, Side};
pub use drag_gesture::{DragGesture, DragMode};
pub use footprint::{ExposedSides, Footprint};
pub use language::Language;
pub use layout_command::LayoutCommand;
pub use layout_event::LayoutEvent;
