use log::{debug, trace};
use std::cell::RefCell;
use std::rc::Rc;

use crate::events::{EventEmitter, EventObserver, Unsubscriber};
use crate::model::limits::{clamp_floors, clamp_grid_size, DEFAULT_GRID_SIZE, MIN_FLOORS};
use crate::model::{CarpentryReport, Cell, DragGesture, Footprint, LayoutCommand, LayoutEvent};

/// Owns the footprint and the two sliders, applies `LayoutCommand`s and
/// publishes a fresh report after every change.
pub struct LayoutEngine {
    footprint: Footprint,
    drag: Option<DragGesture>,
    floors: i32,
    grid_size: usize,
    subscription: Option<Unsubscriber<LayoutCommand>>,
    layout_event_emitter: EventEmitter<LayoutEvent>,
}

impl LayoutEngine {
    pub fn new(
        layout_command_observer: EventObserver<LayoutCommand>,
        layout_event_emitter: EventEmitter<LayoutEvent>,
    ) -> Rc<RefCell<Self>> {
        let engine = Self {
            footprint: Footprint::new(),
            drag: None,
            floors: MIN_FLOORS,
            grid_size: DEFAULT_GRID_SIZE,
            subscription: None,
            layout_event_emitter,
        };
        let refcell = Rc::new(RefCell::new(engine));
        LayoutEngine::wire_subscription(refcell.clone(), layout_command_observer);
        refcell
    }

    fn wire_subscription(
        engine: Rc<RefCell<Self>>,
        layout_command_observer: EventObserver<LayoutCommand>,
    ) {
        // Weak so the engine can be dropped while the observer lives on.
        let handler = Rc::downgrade(&engine);
        let subscription = layout_command_observer.subscribe(move |command| {
            if let Some(engine) = handler.upgrade() {
                engine.borrow_mut().handle_command(command.clone());
            }
        });
        engine.borrow_mut().subscription = Some(subscription);
    }

    /// Stops listening for commands.
    pub fn detach(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.unsubscribe();
        }
    }

    pub fn handle_command(&mut self, command: LayoutCommand) {
        trace!(target: "layout_engine", "Handling command: {:?}", command);
        match command {
            LayoutCommand::ToggleTile(cell) => {
                self.footprint.toggle(cell);
                self.sync_footprint();
            }
            LayoutCommand::DragStart(cell) => self.start_drag(cell),
            LayoutCommand::DragEnter(cell) => self.enter_drag(cell),
            LayoutCommand::DragEnd => {
                if let Some(drag) = self.drag.take() {
                    debug!(target: "layout_engine", "Drag from {} released", drag.start());
                }
            }
            LayoutCommand::SelectRange(from, to, selected) => {
                let Some((from, to)) = self.visible_range(from, to) else {
                    debug!(target: "layout_engine", "Range {}..{} is off the grid", from, to);
                    return;
                };
                let changed = self.footprint.set_range(from, to, selected);
                debug!(
                    target: "layout_engine",
                    "Range {}..{} set to {}: {} cells changed", from, to, selected, changed
                );
                self.sync_footprint();
            }
            LayoutCommand::Clear => {
                self.drag = None;
                self.footprint.clear();
                self.sync_footprint();
            }
            LayoutCommand::SetFloors(floors) => {
                self.floors = clamp_floors(floors);
                self.sync_report();
            }
            LayoutCommand::SetGridSize(size) => {
                self.grid_size = clamp_grid_size(size);
                self.layout_event_emitter
                    .emit(LayoutEvent::GridSizeChanged(self.grid_size));
            }
        }
    }

    /// The part of the rectangle spanned by `from` and `to` that lies on the
    /// visible grid, as top-left and bottom-right corners.
    fn visible_range(&self, from: Cell, to: Cell) -> Option<(Cell, Cell)> {
        let last = self.grid_size as i32 - 1;
        let top = from.row.min(to.row).max(0);
        let bottom = from.row.max(to.row).min(last);
        let left = from.col.min(to.col).max(0);
        let right = from.col.max(to.col).min(last);
        (top <= bottom && left <= right).then(|| (Cell::new(top, left), Cell::new(bottom, right)))
    }

    fn start_drag(&mut self, cell: Cell) {
        self.drag = Some(DragGesture::begin(&mut self.footprint, cell));
        self.sync_footprint();
    }

    fn enter_drag(&mut self, cell: Cell) {
        // Entering a cell with no stroke in progress is just a hover.
        let Some(drag) = &self.drag else {
            return;
        };
        if drag.enter(&mut self.footprint, cell) {
            self.sync_footprint();
        }
    }

    fn sync_footprint(&mut self) {
        self.layout_event_emitter
            .emit(LayoutEvent::FootprintUpdated(self.footprint.clone()));
        self.sync_report();
    }

    fn sync_report(&mut self) {
        self.layout_event_emitter
            .emit(LayoutEvent::ReportUpdated(self.report()));
    }

    pub fn report(&self) -> CarpentryReport {
        CarpentryReport::for_footprint(&self.footprint, self.floors)
    }

    pub fn footprint(&self) -> &Footprint {
        &self.footprint
    }

    pub fn floors(&self) -> i32 {
        self.floors
    }

    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }
}
