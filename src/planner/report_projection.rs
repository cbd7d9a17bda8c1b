use crate::events::EventHandler;
use crate::model::limits::DEFAULT_GRID_SIZE;
use crate::model::{CarpentryReport, Footprint, LayoutEvent};
use std::cell::RefCell;
use std::rc::Rc;

/// Latest layout state as seen through engine events, for renderers.
#[derive(Debug)]
pub struct ReportProjection {
    report: CarpentryReport,
    footprint: Footprint,
    grid_size: usize,
}

impl ReportProjection {
    pub fn new() -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self {
            report: CarpentryReport::default(),
            footprint: Footprint::new(),
            grid_size: DEFAULT_GRID_SIZE,
        }))
    }

    pub fn report(&self) -> &CarpentryReport {
        &self.report
    }

    pub fn footprint(&self) -> &Footprint {
        &self.footprint
    }

    pub fn grid_size(&self) -> usize {
        self.grid_size
    }
}

impl EventHandler<LayoutEvent> for ReportProjection {
    fn handle_event(&mut self, event: &LayoutEvent) {
        match event {
            LayoutEvent::FootprintUpdated(footprint) => self.footprint = footprint.clone(),
            LayoutEvent::ReportUpdated(report) => self.report = report.clone(),
            LayoutEvent::GridSizeChanged(size) => self.grid_size = *size,
        }
    }
}
