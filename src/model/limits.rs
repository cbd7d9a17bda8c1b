pub const MIN_FLOORS: i32 = 1;
pub const MAX_FLOORS: i32 = 16;

pub const MIN_GRID_SIZE: usize = 8;
pub const MAX_GRID_SIZE: usize = 24;
pub const DEFAULT_GRID_SIZE: usize = 12;

pub fn clamp_floors(floors: i32) -> i32 {
    floors.clamp(MIN_FLOORS, MAX_FLOORS)
}

pub fn clamp_grid_size(size: usize) -> usize {
    size.clamp(MIN_GRID_SIZE, MAX_GRID_SIZE)
}
