use super::{Cell, Footprint};
use log::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragMode {
    Select,
    Deselect,
}

impl DragMode {
    fn selects(&self) -> bool {
        matches!(self, DragMode::Select)
    }
}

/// A paint stroke across the grid. The mode is decided by the cell the
/// stroke starts on and is applied unchanged to every cell entered after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragGesture {
    mode: DragMode,
    start: Cell,
}

impl DragGesture {
    /// Starts a stroke: an occupied start cell makes this a deselect stroke,
    /// an empty one a select stroke. The start cell itself is flipped.
    pub fn begin(footprint: &mut Footprint, start: Cell) -> Self {
        let mode = if footprint.is_occupied(&start) {
            DragMode::Deselect
        } else {
            DragMode::Select
        };
        footprint.toggle(start);
        trace!(target: "drag", "Drag started at {} in {:?} mode", start, mode);
        Self { mode, start }
    }

    /// Returns true if the footprint changed.
    pub fn enter(&self, footprint: &mut Footprint, cell: Cell) -> bool {
        footprint.set_selected(cell, self.mode.selects())
    }

    pub fn mode(&self) -> DragMode {
        self.mode
    }

    pub fn start(&self) -> Cell {
        self.start
    }
}
