#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

impl Side {
    pub fn all() -> [Side; 4] {
        [Side::Top, Side::Bottom, Side::Left, Side::Right]
    }

    fn offset(&self) -> (i32, i32) {
        match self {
            Side::Top => (-1, 0),
            Side::Bottom => (1, 0),
            Side::Left => (0, -1),
            Side::Right => (0, 1),
        }
    }
}

/// A grid position. The model places no bounds on either coordinate; the
/// visible grid size is a presentation concern.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// `None` past the edge of the `i32` plane; nothing can be built there.
    pub fn neighbor(&self, side: Side) -> Option<Cell> {
        let (d_row, d_col) = side.offset();
        Some(Cell::new(
            self.row.checked_add(d_row)?,
            self.col.checked_add(d_col)?,
        ))
    }

    pub fn neighbors(&self) -> impl Iterator<Item = (Side, Option<Cell>)> + '_ {
        Side::all()
            .into_iter()
            .map(move |side| (side, self.neighbor(side)))
    }
}

impl From<(i32, i32)> for Cell {
    fn from((row, col): (i32, i32)) -> Self {
        Cell::new(row, col)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.row, self.col)
    }
}

impl std::fmt::Debug for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighbors() {
        let cell = Cell::new(3, 7);
        let neighbors: Vec<(Side, Option<Cell>)> = cell.neighbors().collect();
        assert_eq!(
            neighbors,
            vec![
                (Side::Top, Some(Cell::new(2, 7))),
                (Side::Bottom, Some(Cell::new(4, 7))),
                (Side::Left, Some(Cell::new(3, 6))),
                (Side::Right, Some(Cell::new(3, 8))),
            ]
        );
    }

    #[test]
    fn test_negative_coordinates_are_valid() {
        let cell = Cell::new(0, 0);
        assert_eq!(cell.neighbor(Side::Top), Some(Cell::new(-1, 0)));
        assert_eq!(cell.neighbor(Side::Left), Some(Cell::new(0, -1)));
    }

    #[test]
    fn test_no_neighbor_past_i32_limits() {
        let east = Cell::new(0, i32::MAX);
        assert_eq!(east.neighbor(Side::Right), None);
        assert_eq!(east.neighbor(Side::Left), Some(Cell::new(0, i32::MAX - 1)));

        let corner = Cell::new(i32::MIN, i32::MIN);
        assert_eq!(corner.neighbor(Side::Top), None);
        assert_eq!(corner.neighbor(Side::Left), None);
        assert_eq!(corner.neighbors().filter(|(_, n)| n.is_some()).count(), 2);
    }

    #[test]
    fn test_display_uses_row_col_key() {
        assert_eq!(Cell::new(4, 11).to_string(), "4-11");
        assert_eq!(format!("{:?}", Cell::from((-2, 5))), "(-2, 5)");
    }
}
