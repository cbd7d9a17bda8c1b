use super::Footprint;
use crate::planner::carpentry;

/// Everything the stats panel shows for one footprint and floor count.
#[readonly::make]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarpentryReport {
    pub tiles: usize,
    pub exposed_edges: usize,
    pub floors: i32,
    pub base_requirement: i64,
    pub floor_requirement: i64,
    pub effective_requirement: i64,
}

impl CarpentryReport {
    pub fn new(tiles: usize, exposed_edges: usize, floors: i32) -> Self {
        Self {
            tiles,
            exposed_edges,
            floors,
            base_requirement: carpentry::base_requirement(tiles, exposed_edges),
            floor_requirement: carpentry::floor_requirement(floors),
            effective_requirement: carpentry::effective_requirement(tiles, exposed_edges, floors),
        }
    }

    pub fn for_footprint(footprint: &Footprint, floors: i32) -> Self {
        Self::new(footprint.len(), footprint.count_exposed_edges(), floors)
    }

    pub fn has_tiles(&self) -> bool {
        self.tiles > 0
    }

    pub fn is_multi_story(&self) -> bool {
        self.floors > 1
    }
}

impl Default for CarpentryReport {
    fn default() -> Self {
        Self::new(0, 0, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_for_square() {
        let footprint = Footprint::parse(
            "\
            ###
            ###
            ###",
        );
        let report = CarpentryReport::for_footprint(&footprint, 1);
        assert_eq!(report.tiles, 9);
        assert_eq!(report.exposed_edges, 12);
        assert_eq!(report.base_requirement, 16);
        assert_eq!(report.floor_requirement, 0);
        assert_eq!(report.effective_requirement, 16);

        let report = CarpentryReport::for_footprint(&footprint, 3);
        assert_eq!(report.base_requirement, 16);
        assert_eq!(report.floor_requirement, 30);
        assert_eq!(report.effective_requirement, 30);
        assert!(report.is_multi_story());
    }

    #[test]
    fn test_default_report_is_empty() {
        let report = CarpentryReport::default();
        assert!(!report.has_tiles());
        assert_eq!(report.effective_requirement, 0);
        assert_eq!(report.floors, 1);
    }
}
