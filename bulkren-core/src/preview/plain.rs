use crate::planner::RenamePlan;
use std::fmt::Write;

/// Render one `<old> --> <new>` line per item, matching dry-run output.
pub fn render_plain(plan: &RenamePlan) -> String {
    let mut output = String::new();
    for item in plan {
        let _ = writeln!(
            output,
            "{} --> {}",
            item.old_path().display(),
            item.new_path().display()
        );
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::compute_plan;
    use std::path::Path;

    #[test]
    fn test_render_plain_lines_in_plan_order() {
        let plan = compute_plan("b", "B", &["sub/b.txt", "a.txt"]).unwrap();
        let expected = format!(
            "{} --> {}\n{} --> {}\n",
            Path::new("sub").join("b.txt").display(),
            Path::new("sub").join("B.txt").display(),
            Path::new(".").join("a.txt").display(),
            Path::new(".").join("a.txt").display()
        );
        assert_eq!(render_plain(&plan), expected);
    }
}
