use crate::i18n::Messages;
use crate::model::{Cell, Footprint};
use itertools::Itertools;

const OUTER_WALL: char = '#';
const INNER_TILE: char = '+';
const EMPTY: char = '.';

fn tile_char(footprint: &Footprint, cell: &Cell) -> char {
    match footprint.exposed_sides(cell) {
        Some(sides) if sides.any() => OUTER_WALL,
        Some(_) => INNER_TILE,
        None => EMPTY,
    }
}

/// Draws rows and columns `0..grid_size`. Occupied cells outside that range
/// are still part of the footprint; they just are not drawn.
pub fn render_grid(footprint: &Footprint, grid_size: usize) -> String {
    let size = grid_size as i32;
    let header = (0..size).map(|col| col % 10).join("");
    let rows = (0..size).map(|row| {
        let tiles: String = (0..size)
            .map(|col| tile_char(footprint, &Cell::new(row, col)))
            .collect();
        format!("{:>3} {}", row, tiles)
    });

    std::iter::once(format!("    {}", header))
        .chain(rows)
        .join("\n")
}

/// The layout panel: heading, usage hint, grid and legend.
pub fn render_layout(footprint: &Footprint, grid_size: usize, messages: &Messages) -> String {
    [
        messages.get("building-layout"),
        format!("  {}", messages.get("click-or-drag")),
        String::new(),
        render_grid(footprint, grid_size),
        format!("    {}", messages.get("legend")),
    ]
    .join("\n")
}
