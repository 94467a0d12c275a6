use crate::executor::{ExecutionReport, RenameFailure};
use crate::planner::RenamePlan;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt::Write;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Summary,
    Json,
}

/// Result of a bulk rename run
#[derive(Debug, Serialize, Deserialize)]
pub struct RenameResult {
    pub pattern: String,
    pub replacement: String,
    pub dry_run: bool,
    pub planned: usize,
    pub renamed: usize,
    pub unchanged: usize,
    pub failures: Vec<RenameFailure>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<RenamePlan>,
}

impl RenameResult {
    pub fn new(plan: RenamePlan, report: ExecutionReport) -> Self {
        Self {
            pattern: plan.pattern.clone(),
            replacement: plan.replacement.clone(),
            dry_run: report.dry_run,
            planned: report.planned,
            renamed: report.renamed,
            unchanged: report.unchanged,
            failures: report.failures,
            plan: Some(plan),
        }
    }
}

/// Trait for formatting output in different formats
pub trait OutputFormatter {
    fn format(&self, format: OutputFormat) -> String;
    fn format_json(&self) -> String;
    fn format_summary(&self) -> String;
}

impl OutputFormatter for RenameResult {
    fn format(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => self.format_json(),
            OutputFormat::Summary => self.format_summary(),
        }
    }

    fn format_json(&self) -> String {
        serde_json::to_string(&json!({
            "success": self.failures.is_empty(),
            "operation": "rename",
            "pattern": self.pattern,
            "replacement": self.replacement,
            "dry_run": self.dry_run,
            "summary": {
                "planned": self.planned,
                "renamed": self.renamed,
                "unchanged": self.unchanged,
                "failed": self.failures.len(),
            },
            "failures": self.failures,
            "plan": self.plan,
        }))
        .unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        let mut output = String::new();

        if self.dry_run {
            writeln!(
                output,
                "Would rename {} files ({} unchanged)",
                self.planned - self.unchanged,
                self.unchanged
            )
            .unwrap();
            return output;
        }

        writeln!(
            output,
            "Renamed {} files ({} unchanged)",
            self.renamed, self.unchanged
        )
        .unwrap();

        for failure in &self.failures {
            writeln!(
                output,
                "Failed: {} --> {}: {}",
                failure.from.display(),
                failure.to.display(),
                failure.message
            )
            .unwrap();
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn create_result(dry_run: bool) -> RenameResult {
        RenameResult {
            pattern: "old".to_string(),
            replacement: "new".to_string(),
            dry_run,
            planned: 4,
            renamed: if dry_run { 0 } else { 3 },
            unchanged: 1,
            failures: vec![],
            plan: None,
        }
    }

    #[test]
    fn test_rename_result_json_format() {
        let result = create_result(false);
        let json: serde_json::Value = serde_json::from_str(&result.format_json()).unwrap();

        assert_eq!(json["success"], true);
        assert_eq!(json["operation"], "rename");
        assert_eq!(json["pattern"], "old");
        assert_eq!(json["dry_run"], false);
        assert_eq!(json["summary"]["renamed"], 3);
        assert_eq!(json["summary"]["failed"], 0);
        assert!(json["plan"].is_null());
    }

    #[test]
    fn test_rename_result_summary_format() {
        let result = create_result(false);
        assert_eq!(
            result.format(OutputFormat::Summary),
            "Renamed 3 files (1 unchanged)\n"
        );
    }

    #[test]
    fn test_dry_run_summary_format() {
        let result = create_result(true);
        assert_eq!(
            result.format_summary(),
            "Would rename 3 files (1 unchanged)\n"
        );
    }

    #[test]
    fn test_summary_lists_failures() {
        let mut result = create_result(false);
        result.failures.push(RenameFailure {
            from: PathBuf::from("a_old.txt"),
            to: PathBuf::from("a_new.txt"),
            message: "target already exists".to_string(),
        });

        let summary = result.format_summary();
        assert!(summary.contains("Failed: a_old.txt --> a_new.txt: target already exists"));

        let json: serde_json::Value = serde_json::from_str(&result.format_json()).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["failures"][0]["message"], "target already exists");
    }
}
