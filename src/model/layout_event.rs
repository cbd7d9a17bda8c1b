use super::{CarpentryReport, Footprint};

#[derive(Debug, Clone)]
pub enum LayoutEvent {
    FootprintUpdated(Footprint),
    ReportUpdated(CarpentryReport),
    GridSizeChanged(usize),
}
