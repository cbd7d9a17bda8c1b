use crate::i18n::Messages;
use crate::model::CarpentryReport;

fn row(label: String, value: impl std::fmt::Display) -> String {
    format!("  {:<24}{:>8}", label, value)
}

/// The stats, floors and requirement panels as plain text.
pub fn render_stats(report: &CarpentryReport, grid_size: usize, messages: &Messages) -> String {
    let mut lines = vec![
        messages.get("building-stats"),
        row(messages.get("tiles"), report.tiles),
        row(messages.get("outer-walls"), report.exposed_edges),
        row(
            messages.get("formula"),
            format!("{} + {} - 5", report.tiles, report.exposed_edges),
        ),
        String::new(),
        row(messages.get("floors"), report.floors),
    ];
    if report.is_multi_story() {
        lines.push(format!(
            "  {}",
            messages.floor_requires(report.floors, report.floor_requirement)
        ));
    }
    lines.push(row(
        messages.get("grid-size"),
        messages.grid_dimensions(grid_size, grid_size),
    ));

    lines.push(String::new());
    lines.push(messages.get("carpentry-required"));
    if report.has_tiles() {
        lines.push(row(messages.get("per-floor"), report.base_requirement));
        if report.is_multi_story() {
            lines.push(row(messages.get("floor-requirement"), report.floor_requirement));
            lines.push(row(messages.get("effective-skill"), report.effective_requirement));
        }
    } else {
        lines.push(format!("  {}", messages.get("select-tiles")));
    }

    lines.push(String::new());
    lines.push(format!(
        "  {} {}",
        messages.get("info-formula"),
        messages.get("info-formula-text")
    ));
    lines.push(format!("  {}", messages.get("info-multi-story")));

    lines.join("\n")
}
