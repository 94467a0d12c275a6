use crate::error::{RenameError, Result};
use crate::planner::RenamePlan;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// What to do with the rest of the plan after a rename fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Stop at the first failure. Earlier renames stay applied.
    #[default]
    Abort,
    /// Attempt every item and report all failures at the end.
    Continue,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ExecuteOptions {
    pub dry_run: bool,
    pub on_failure: FailurePolicy,
}

/// A rename that failed under [`FailurePolicy::Continue`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameFailure {
    pub from: PathBuf,
    pub to: PathBuf,
    pub message: String,
}

/// Outcome of running a plan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionReport {
    pub dry_run: bool,
    pub planned: usize,
    pub renamed: usize,
    pub unchanged: usize,
    pub failures: Vec<RenameFailure>,
}

impl ExecutionReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Turn a report that recorded failures into `PartialFailure`.
    pub fn ensure_success(&self) -> Result<()> {
        if self.is_success() {
            return Ok(());
        }

        Err(RenameError::PartialFailure {
            failed: self.failures.len(),
            total: self.planned,
        })
    }
}

/// Run a validated plan.
///
/// In dry-run mode each item is written to `out` as `<old> --> <new>` and
/// nothing on disk changes. Otherwise items are renamed one at a time in
/// plan order. Renames that already happened are never rolled back.
pub fn execute<W: Write + ?Sized>(
    plan: &RenamePlan,
    options: &ExecuteOptions,
    out: &mut W,
) -> Result<ExecutionReport> {
    let mut report = ExecutionReport {
        dry_run: options.dry_run,
        planned: plan.len(),
        ..Default::default()
    };

    if options.dry_run {
        for item in plan {
            writeln!(
                out,
                "{} --> {}",
                item.old_path().display(),
                item.new_path().display()
            )?;
            if item.is_noop() {
                report.unchanged += 1;
            }
        }
        out.flush()?;
        return Ok(report);
    }

    for item in plan {
        let from = item.old_path();
        let to = item.new_path();

        if item.is_noop() {
            debug!("{} unchanged", from.display());
            report.unchanged += 1;
            continue;
        }

        match perform_rename(&from, &to) {
            Ok(()) => {
                info!("renamed {} -> {}", from.display(), to.display());
                report.renamed += 1;
            },
            Err(source) => match options.on_failure {
                FailurePolicy::Abort => {
                    return Err(RenameError::RenameIo { from, to, source });
                },
                FailurePolicy::Continue => {
                    warn!(
                        "failed to rename {} to {}: {}",
                        from.display(),
                        to.display(),
                        source
                    );
                    report.failures.push(RenameFailure {
                        from,
                        to,
                        message: source.to_string(),
                    });
                },
            },
        }
    }

    Ok(report)
}

/// True when `from` and `to` differ only by letter case.
pub fn is_case_only_change(from: &Path, to: &Path) -> bool {
    from != to && from.to_string_lossy().to_lowercase() == to.to_string_lossy().to_lowercase()
}

/// Check if the filesystem at the given path is case-insensitive
pub fn detect_case_insensitive_fs(path: &Path) -> bool {
    let Ok(temp_dir) = TempDir::new_in(path) else {
        // Assume case-sensitive if we can't test
        return false;
    };

    let lower = temp_dir.path().join("case_probe_a");
    let upper = temp_dir.path().join("case_probe_A");

    if fs::write(&lower, b"probe").is_err() {
        return false;
    }

    fs::metadata(&upper).is_ok()
}

fn perform_rename(from: &Path, to: &Path) -> io::Result<()> {
    let parent = from.parent().unwrap_or_else(|| Path::new("."));

    if is_case_only_change(from, to) && detect_case_insensitive_fs(parent) {
        // Same directory entry either way, so go through a temporary name
        let temp_name = staging_path(from);
        debug!(
            "case-only rename of {} staged through {}",
            from.display(),
            temp_name.display()
        );
        rename_no_clobber(from, &temp_name)?;
        if let Err(e) = fs::rename(&temp_name, to) {
            let _ = fs::rename(&temp_name, from);
            return Err(e);
        }
        return Ok(());
    }

    rename_no_clobber(from, to)
}

fn rename_no_clobber(from: &Path, to: &Path) -> io::Result<()> {
    // rename(2) silently replaces an existing target
    if fs::symlink_metadata(to).is_ok() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            "target already exists",
        ));
    }

    fs::rename(from, to)
}

fn staging_path(from: &Path) -> PathBuf {
    let name = from
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    from.with_file_name(format!(".{}.{}.bulkren.tmp", name, std::process::id()))
}
