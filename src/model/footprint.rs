use super::cell::{Cell, Side};
use super::limits::MAX_GRID_SIZE;
use itertools::{iproduct, Itertools};
use std::collections::HashSet;

/// Which sides of an occupied cell border an unoccupied cell, i.e. which of
/// its walls are outer walls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExposedSides {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
}

impl ExposedSides {
    pub fn is_exposed(&self, side: Side) -> bool {
        match side {
            Side::Top => self.top,
            Side::Bottom => self.bottom,
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn count(&self) -> usize {
        Side::all()
            .into_iter()
            .filter(|side| self.is_exposed(*side))
            .count()
    }

    pub fn any(&self) -> bool {
        self.count() > 0
    }
}

/// The set of tiles making up a building footprint.
///
/// Cells are unbounded and need not be connected; disjoint islands are simply
/// summed by every query.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Footprint {
    cells: HashSet<Cell>,
}

impl std::fmt::Debug for Footprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut output = String::new();
        output.push('\n');

        let drawable = self.bounds().filter(|(min, max)| {
            let span = |low: i32, high: i32| {
                i64::from(high) - i64::from(low) < 2 * MAX_GRID_SIZE as i64
            };
            span(min.row, max.row) && span(min.col, max.col)
        });

        if let Some((min, max)) = drawable {
            for row in min.row..=max.row {
                output.push_str(&format!("{:>4}|", row));
                for col in min.col..=max.col {
                    let cell = Cell::new(row, col);
                    output.push(if self.is_occupied(&cell) { '#' } else { '.' });
                }
                output.push('\n');
            }
        } else if !self.is_empty() {
            // too spread out to draw
            let mut cells = self.cells.iter().sorted().map(|cell| format!("{:?}", cell));
            output.push_str(&cells.join(" "));
            output.push('\n');
        }
        output.push_str(&format!(
            "tiles: {}, exposed edges: {}",
            self.len(),
            self.count_exposed_edges()
        ));

        write!(f, "{}", output)
    }
}

impl Footprint {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the cell is now occupied.
    pub fn toggle(&mut self, cell: Cell) -> bool {
        if self.cells.remove(&cell) {
            false
        } else {
            self.cells.insert(cell);
            true
        }
    }

    /// Returns true if membership changed.
    pub fn set_selected(&mut self, cell: Cell, selected: bool) -> bool {
        if selected {
            self.cells.insert(cell)
        } else {
            self.cells.remove(&cell)
        }
    }

    /// Applies `set_selected` to every cell of the rectangle spanned by the
    /// two corners, inclusive, in either order. Returns the number of cells
    /// whose membership changed.
    pub fn set_range(&mut self, from: Cell, to: Cell, selected: bool) -> usize {
        let rows = from.row.min(to.row)..=from.row.max(to.row);
        let cols = from.col.min(to.col)..=from.col.max(to.col);
        let mut changed = 0;
        for (row, col) in iproduct!(rows, cols) {
            if self.set_selected(Cell::new(row, col), selected) {
                changed += 1;
            }
        }
        changed
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn is_occupied(&self, cell: &Cell) -> bool {
        self.cells.contains(cell)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Number of occupied-cell sides that border an unoccupied cell, summed
    /// over the whole footprint. Recomputed from scratch on every call.
    pub fn count_exposed_edges(&self) -> usize {
        self.cells
            .iter()
            .flat_map(|cell| cell.neighbors())
            .filter(|(_, neighbor)| !neighbor.is_some_and(|n| self.cells.contains(&n)))
            .count()
    }

    /// Outer-wall flags for an occupied cell; `None` when the cell is empty.
    pub fn exposed_sides(&self, cell: &Cell) -> Option<ExposedSides> {
        if !self.is_occupied(cell) {
            return None;
        }
        let open = |side: Side| !cell.neighbor(side).is_some_and(|n| self.is_occupied(&n));
        Some(ExposedSides {
            top: open(Side::Top),
            bottom: open(Side::Bottom),
            left: open(Side::Left),
            right: open(Side::Right),
        })
    }

    /// Top-left and bottom-right corners of the bounding box of occupied
    /// cells.
    pub fn bounds(&self) -> Option<(Cell, Cell)> {
        let (min_row, max_row) = self.cells.iter().map(|cell| cell.row).minmax().into_option()?;
        let (min_col, max_col) = self.cells.iter().map(|cell| cell.col).minmax().into_option()?;
        Some((Cell::new(min_row, min_col), Cell::new(max_row, max_col)))
    }

    /// Parse a footprint from a picture where `#` is an occupied cell and
    /// any other character is empty. The first non-blank line is row 0.
    pub fn parse(input: &str) -> Self {
        let mut footprint = Footprint::new();
        for (row, line) in input
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .enumerate()
        {
            for (col, ch) in line.chars().enumerate() {
                if ch == '#' {
                    footprint.set_selected(Cell::new(row as i32, col as i32), true);
                }
            }
        }
        footprint
    }
}

impl FromIterator<Cell> for Footprint {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}
