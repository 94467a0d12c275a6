mod json;
mod plain;
mod table;

pub use json::render_json;
pub use plain::render_plain;
pub use table::render_table;

use crate::planner::RenamePlan;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::{self, IsTerminal, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preview {
    #[default]
    Plain,
    Table,
    Json,
}

/// Determine whether to use colors based on explicit preference or terminal detection
pub fn should_use_color_with_detector<F>(use_color: Option<bool>, is_terminal: F) -> bool
where
    F: Fn() -> bool,
{
    match use_color {
        Some(explicit_color) => explicit_color,
        None => is_terminal(),
    }
}

pub fn should_use_color(use_color: Option<bool>) -> bool {
    should_use_color_with_detector(use_color, || io::stdout().is_terminal())
}

/// Render the plan in the specified format
pub fn render_plan(plan: &RenamePlan, format: Preview, use_color: Option<bool>) -> String {
    match format {
        Preview::Plain => render_plain(plan),
        Preview::Table => render_table(plan, should_use_color(use_color)),
        Preview::Json => render_json(plan),
    }
}

/// Write plan preview to stdout
pub fn write_preview(plan: &RenamePlan, format: Preview, use_color: Option<bool>) -> Result<()> {
    let output = render_plan(plan, format, use_color);
    let mut stdout = io::stdout();
    write!(stdout, "{}", output)?;
    if !output.ends_with('\n') {
        writeln!(stdout)?;
    }
    stdout.flush()?;
    Ok(())
}
