use super::Cell;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutCommand {
    ToggleTile(Cell),
    DragStart(Cell),
    DragEnter(Cell),
    DragEnd,
    SelectRange(Cell, Cell, bool), // corners, selected
    Clear,
    SetFloors(i32),
    SetGridSize(usize),
}
