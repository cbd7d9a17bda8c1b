mod app_context;
pub mod carpentry;
mod layout_engine;
pub mod preferences;
mod report_projection;

pub use app_context::{AppContext, AppContextBuilder, ConfigError};
pub use layout_engine::LayoutEngine;
pub use report_projection::ReportProjection;

/// `DEBUG=1` prints the footprint after every command.
pub fn is_debug_mode() -> bool {
    std::env::var("DEBUG").map(|v| v == "1").unwrap_or(false)
}
