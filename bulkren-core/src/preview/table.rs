use crate::planner::RenamePlan;
use comfy_table::{Cell, Color, ContentArrangement, Table};
use std::io::{self, IsTerminal};

/// Render plan as a table of old path, new path and status
pub fn render_table(plan: &RenamePlan, use_color: bool) -> String {
    let mut table = Table::new();

    if io::stdout().is_terminal() {
        table.set_content_arrangement(ContentArrangement::Dynamic);
    } else {
        table.set_content_arrangement(ContentArrangement::Disabled);
    }

    // Force styling even in non-TTY environments when colors are explicitly requested
    if use_color {
        table.enforce_styling();
        table.set_header(vec![
            Cell::new("Old path").fg(Color::Cyan),
            Cell::new("New path").fg(Color::Cyan),
            Cell::new("Status").fg(Color::Cyan),
        ]);
    } else {
        table.set_header(vec!["Old path", "New path", "Status"]);
    }

    for item in plan {
        let old_path = item.old_path().display().to_string();
        let new_path = item.new_path().display().to_string();
        let status = if item.is_noop() { "unchanged" } else { "rename" };

        if use_color {
            let status_color = if item.is_noop() {
                Color::DarkGrey
            } else {
                Color::Green
            };
            table.add_row(vec![
                Cell::new(&old_path),
                Cell::new(&new_path).fg(Color::Magenta),
                Cell::new(status).fg(status_color),
            ]);
        } else {
            table.add_row(vec![old_path.as_str(), new_path.as_str(), status]);
        }
    }

    let changed = plan.changed_count();
    let totals = format!("{} renames, {} unchanged", changed, plan.len() - changed);
    if use_color {
        table.add_row(vec![
            Cell::new("TOTALS").fg(Color::Cyan),
            Cell::new(""),
            Cell::new(totals).fg(Color::Yellow),
        ]);
    } else {
        table.add_row(vec!["TOTALS", "", totals.as_str()]);
    }

    table.to_string()
}
