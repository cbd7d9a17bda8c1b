//! Carpentry skill needed to build a house.
//!
//! The shape of the footprint gives a base requirement; the number of floors
//! imposes a minimum on top of it.

/// Minimum skill per floor count, indexed from floor 1.
pub const FLOOR_REQUIREMENTS: [i64; 16] = [0, 21, 30, 39, 47, 55, 63, 70, 77, 83, 88, 92, 95, 97, 98, 99];

/// Requirement for any floor count outside the table.
pub const FLOOR_REQUIREMENT_CEILING: i64 = 99;

const BASE_OFFSET: i64 = 5;

/// `tiles + exposed_edges - 5`, or 0 for an empty footprint. Not clamped:
/// the smallest real footprint, a single tile, already comes out at 0.
pub fn base_requirement(tiles: usize, exposed_edges: usize) -> i64 {
    if tiles == 0 {
        return 0;
    }
    tiles as i64 + exposed_edges as i64 - BASE_OFFSET
}

pub fn floor_requirement(floors: i32) -> i64 {
    usize::try_from(floors)
        .ok()
        .and_then(|floors| floors.checked_sub(1))
        .and_then(|index| FLOOR_REQUIREMENTS.get(index))
        .copied()
        .unwrap_or(FLOOR_REQUIREMENT_CEILING)
}

pub fn effective_requirement(tiles: usize, exposed_edges: usize, floors: i32) -> i64 {
    base_requirement(tiles, exposed_edges).max(floor_requirement(floors))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CarpentryReport, Cell, Footprint};

    #[test]
    fn test_empty_footprint_needs_nothing() {
        assert_eq!(base_requirement(0, 0), 0);
        assert_eq!(base_requirement(0, 40), 0);
        assert_eq!(effective_requirement(0, 17, 1), 0);
    }

    #[test]
    fn test_single_tile() {
        assert_eq!(base_requirement(1, 4), 0);
    }

    #[test]
    fn test_base_requirement_is_not_clamped() {
        assert_eq!(base_requirement(1, 0), -4);
        assert_eq!(base_requirement(2, 1), -2);
    }

    #[test]
    fn test_squares() {
        assert_eq!(base_requirement(4, 8), 7);
        assert_eq!(base_requirement(9, 12), 16);
        assert_eq!(base_requirement(100, 40), 135);
    }

    #[test]
    fn test_floor_table() {
        let expected = [
            (1, 0),
            (2, 21),
            (3, 30),
            (4, 39),
            (5, 47),
            (6, 55),
            (7, 63),
            (8, 70),
            (9, 77),
            (10, 83),
            (11, 88),
            (12, 92),
            (13, 95),
            (14, 97),
            (15, 98),
            (16, 99),
        ];
        for (floors, requirement) in expected {
            assert_eq!(floor_requirement(floors), requirement, "floor {}", floors);
        }
    }

    #[test]
    fn test_floors_outside_table_hit_ceiling() {
        assert_eq!(floor_requirement(17), 99);
        assert_eq!(floor_requirement(0), 99);
        assert_eq!(floor_requirement(-3), 99);
        assert_eq!(floor_requirement(i32::MAX), 99);
        assert_eq!(floor_requirement(i32::MIN), 99);
    }

    #[test]
    fn test_effective_requirement_takes_larger_value() {
        // 10x10 house: 100 tiles, 40 walls
        assert_eq!(effective_requirement(100, 40, 1), 135);
        assert_eq!(effective_requirement(100, 40, 16), 135);
        // 3x3 house
        assert_eq!(effective_requirement(9, 12, 2), 21);
        assert_eq!(effective_requirement(9, 12, 1), 16);
    }

    #[test]
    fn test_effective_requirement_never_below_floor_requirement() {
        let mut footprint = Footprint::new();
        for step in 0..30 {
            footprint.toggle(Cell::new(step % 5, step / 3));
            for floors in -2..20 {
                let report = CarpentryReport::for_footprint(&footprint, floors);
                assert!(report.effective_requirement >= floor_requirement(floors));
                assert!(report.effective_requirement >= report.base_requirement);
            }
        }
    }
}
