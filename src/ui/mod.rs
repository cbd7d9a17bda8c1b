mod command_line;
mod grid_view;
mod stats_view;

pub use command_line::{parse_line, CommandParseError, InputLine};
pub use grid_view::{render_grid, render_layout};
pub use stats_view::render_stats;
