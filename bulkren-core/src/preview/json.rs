use crate::planner::RenamePlan;
use serde_json::json;

/// Render plan as JSON, with the derived old/new paths spelled out per item
pub fn render_json(plan: &RenamePlan) -> String {
    let items: Vec<_> = plan
        .iter()
        .map(|item| {
            json!({
                "old_path": item.old_path(),
                "new_path": item.new_path(),
                "changed": !item.is_noop(),
            })
        })
        .collect();

    serde_json::to_string_pretty(&json!({
        "pattern": plan.pattern,
        "replacement": plan.replacement,
        "items": items,
    }))
    .unwrap_or_else(|_| "null".to_string())
}
