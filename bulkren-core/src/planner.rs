use crate::error::{RenameError, Result};
use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Directory used for inputs given without a directory component.
pub const CURRENT_DIR: &str = ".";

/// A single planned rename: one input file and the name it will receive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameItem {
    pub directory: PathBuf,
    pub base_name: String,
    pub new_name: String,
}

impl RenameItem {
    pub fn old_path(&self) -> PathBuf {
        self.directory.join(&self.base_name)
    }

    pub fn new_path(&self) -> PathBuf {
        self.directory.join(&self.new_name)
    }

    /// True when the pattern left the base name untouched.
    pub fn is_noop(&self) -> bool {
        self.base_name == self.new_name
    }
}

/// Ordered rename plan, one item per input file, in input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenamePlan {
    pub pattern: String,
    pub replacement: String,
    pub items: Vec<RenameItem>,
}

impl RenamePlan {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RenameItem> {
        self.items.iter()
    }

    /// Number of items whose name actually changes
    pub fn changed_count(&self) -> usize {
        self.items.iter().filter(|item| !item.is_noop()).count()
    }
}

impl<'a> IntoIterator for &'a RenamePlan {
    type Item = &'a RenameItem;
    type IntoIter = std::slice::Iter<'a, RenameItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Compile a user supplied pattern, mapping failures to `InvalidPattern`.
pub fn compile_pattern(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| RenameError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}

/// Split a path into its directory and base name.
///
/// Paths without a directory component get [`CURRENT_DIR`] so that
/// `old.txt` and `./old.txt` plan to the same place.
pub fn split_path(path: &Path) -> Result<(PathBuf, String)> {
    let file_name = path
        .file_name()
        .ok_or_else(|| RenameError::InvalidInputPath {
            path: path.to_path_buf(),
            reason: "path has no file name component".to_string(),
        })?;

    let base_name = file_name
        .to_str()
        .ok_or_else(|| RenameError::InvalidInputPath {
            path: path.to_path_buf(),
            reason: "file name is not valid UTF-8".to_string(),
        })?
        .to_string();

    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from(CURRENT_DIR),
    };

    Ok((directory, base_name))
}

/// Reject substitution results that cannot name a file in `directory`.
fn check_new_name(path: &Path, new_name: &str) -> Result<()> {
    let reason = if new_name.is_empty() {
        "replacement produces an empty file name"
    } else if new_name == "." || new_name == ".." {
        "replacement produces a reserved file name"
    } else {
        return Ok(());
    };

    Err(RenameError::InvalidTargetName {
        path: path.to_path_buf(),
        new_name: new_name.to_string(),
        reason: reason.to_string(),
    })
}

/// Compute the rename plan for `files`.
///
/// Every non-overlapping match of `pattern` in each base name is replaced
/// by `replacement`, which may reference capture groups as `$1`, `${1}` or
/// `${name}`. Files whose base name does not match are kept in the plan
/// unchanged.
pub fn compute_plan<P: AsRef<Path>>(
    pattern: &str,
    replacement: &str,
    files: &[P],
) -> Result<RenamePlan> {
    let regex = compile_pattern(pattern)?;

    let mut items = Vec::with_capacity(files.len());
    for file in files {
        let path = file.as_ref();
        let (directory, base_name) = split_path(path)?;
        let new_name = regex.replace_all(&base_name, replacement).into_owned();
        check_new_name(path, &new_name)?;

        debug!("planned {} -> {}", base_name, new_name);

        items.push(RenameItem {
            directory,
            base_name,
            new_name,
        });
    }

    Ok(RenamePlan {
        pattern: pattern.to_string(),
        replacement: replacement.to_string(),
        items,
    })
}
