use crate::error::{RenameError, Result};
use crate::executor::{execute, ExecuteOptions, ExecutionReport, FailurePolicy};
use crate::planner::{compute_plan, RenamePlan};
use crate::validator::validate;
use log::debug;
use std::io::Write;
use std::path::PathBuf;

/// Parameters for a bulk rename, as handed over by the CLI.
#[derive(Debug, Clone, Default)]
pub struct RenameParams {
    pub pattern: String,
    pub replacement: String,
    pub dry_run: bool,
    pub files: Vec<PathBuf>,
}

/// Fail with `MissingInputs` unless every path names an existing regular file.
pub fn check_inputs_exist(files: &[PathBuf]) -> Result<()> {
    let missing: Vec<PathBuf> = files.iter().filter(|f| !f.is_file()).cloned().collect();
    if missing.is_empty() {
        return Ok(());
    }

    debug!("missing input files: {:?}", missing);
    Err(RenameError::MissingInputs { missing })
}

/// Plan, validate and run a bulk rename.
///
/// Nothing is renamed unless the whole plan is valid. Dry-run lines are
/// written to `out`. With [`FailurePolicy::Continue`] failures stay in the
/// returned report; see [`ExecutionReport::ensure_success`].
pub fn rename_operation<W: Write + ?Sized>(
    params: &RenameParams,
    on_failure: FailurePolicy,
    out: &mut W,
) -> Result<(RenamePlan, ExecutionReport)> {
    let plan = compute_plan(&params.pattern, &params.replacement, &params.files)?;
    validate(&plan)?;

    let options = ExecuteOptions {
        dry_run: params.dry_run,
        on_failure,
    };
    let report = execute(&plan, &options, out)?;

    Ok((plan, report))
}
