use crate::error::{RenameError, Result};
use crate::executor::detect_case_insensitive_fs;
use crate::planner::{RenameItem, RenamePlan};
use log::debug;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::{Path, PathBuf};

/// A target path claimed by more than one input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameCollision {
    pub target: PathBuf,
    pub sources: Vec<PathBuf>,
}

/// Check that every planned target path is unique.
///
/// Runs over the whole plan before anything is renamed; a single duplicate
/// rejects the batch. Targets in a directory on a case-insensitive file
/// system are compared ignoring case.
pub fn validate(plan: &RenamePlan) -> Result<()> {
    validate_with_detector(plan, detect_case_insensitive_fs)
}

pub fn validate_with_detector<F>(plan: &RenamePlan, is_case_insensitive: F) -> Result<()>
where
    F: Fn(&Path) -> bool,
{
    let keys = target_keys(plan, is_case_insensitive);
    let unique: HashSet<&PathBuf> = keys.iter().collect();
    if unique.len() == plan.len() {
        return Ok(());
    }

    for collision in group_collisions(plan, &keys) {
        debug!(
            "{} sources map to {}: {:?}",
            collision.sources.len(),
            collision.target.display(),
            collision.sources
        );
    }

    Err(RenameError::Collision)
}

/// Group colliding sources by target, ordered by target path.
pub fn find_collisions(plan: &RenamePlan) -> Vec<RenameCollision> {
    find_collisions_with_detector(plan, detect_case_insensitive_fs)
}

pub fn find_collisions_with_detector<F>(
    plan: &RenamePlan,
    is_case_insensitive: F,
) -> Vec<RenameCollision>
where
    F: Fn(&Path) -> bool,
{
    let keys = target_keys(plan, is_case_insensitive);
    group_collisions(plan, &keys)
}

/// One comparison key per item. The file system is probed once per directory.
fn target_keys<F>(plan: &RenamePlan, is_case_insensitive: F) -> Vec<PathBuf>
where
    F: Fn(&Path) -> bool,
{
    let mut probed: HashMap<&Path, bool> = HashMap::new();
    plan.iter()
        .map(|item| {
            let folds_case = *probed
                .entry(item.directory.as_path())
                .or_insert_with(|| is_case_insensitive(&item.directory));
            target_key(item, folds_case)
        })
        .collect()
}

fn target_key(item: &RenameItem, folds_case: bool) -> PathBuf {
    if folds_case {
        item.directory.join(item.new_name.to_lowercase())
    } else {
        item.new_path()
    }
}

fn group_collisions(plan: &RenamePlan, keys: &[PathBuf]) -> Vec<RenameCollision> {
    let mut by_key: BTreeMap<&PathBuf, (PathBuf, Vec<PathBuf>)> = BTreeMap::new();
    for (item, key) in plan.iter().zip(keys) {
        by_key
            .entry(key)
            .or_insert_with(|| (item.new_path(), Vec::new()))
            .1
            .push(item.old_path());
    }

    by_key
        .into_values()
        .filter(|(_, sources)| sources.len() > 1)
        .map(|(target, sources)| RenameCollision { target, sources })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::compute_plan;
    use std::path::Path;

    #[test]
    fn test_unique_targets_pass() {
        let plan = compute_plan("file", "doc", &["file1.txt", "file2.txt"]).unwrap();
        assert!(validate(&plan).is_ok());
    }

    #[test]
    fn test_collision_detected() {
        let plan = compute_plan("[0-9]", "", &["file1.txt", "file2.txt"]).unwrap();
        let err = validate(&plan).unwrap_err();
        assert!(matches!(err, RenameError::Collision));
    }

    #[test]
    fn test_same_name_in_different_directories_is_fine() {
        let plan = compute_plan("[0-9]", "", &["a/file1.txt", "b/file2.txt"]).unwrap();
        assert!(validate(&plan).is_ok());
    }

    #[test]
    fn test_duplicate_input_collides_with_itself() {
        let plan = compute_plan("zzz", "", &["same.txt", "same.txt"]).unwrap();
        assert!(matches!(validate(&plan), Err(RenameError::Collision)));
    }

    #[test]
    fn test_find_collisions_groups_sources() {
        let plan =
            compute_plan("[0-9]", "", &["file1.txt", "file2.txt", "other.txt"]).unwrap();
        let collisions = find_collisions(&plan);
        assert_eq!(collisions.len(), 1);
        assert_eq!(collisions[0].target, Path::new(".").join("file.txt"));
        assert_eq!(
            collisions[0].sources,
            vec![
                Path::new(".").join("file1.txt"),
                Path::new(".").join("file2.txt")
            ]
        );
    }

    #[test]
    fn test_case_insensitive_targets_collide() {
        let mut plan = compute_plan("[0-9]", "", &["photos/x1.txt", "photos/x2.txt"]).unwrap();
        plan.items[0].new_name = "X.txt".to_string();

        assert!(validate_with_detector(&plan, |_| false).is_ok());
        assert!(matches!(
            validate_with_detector(&plan, |_| true),
            Err(RenameError::Collision)
        ));

        let collisions = find_collisions_with_detector(&plan, |_| true);
        assert_eq!(collisions.len(), 1);
        assert_eq!(collisions[0].target, Path::new("photos").join("X.txt"));
        assert_eq!(collisions[0].sources.len(), 2);
    }

    #[test]
    fn test_case_only_rename_is_not_a_collision() {
        let plan = compute_plan("readme", "README", &["docs/readme.md"]).unwrap();
        assert!(validate_with_detector(&plan, |_| true).is_ok());
    }

    #[test]
    fn test_detector_runs_once_per_directory() {
        let plan = compute_plan("a", "b", &["d/a1", "d/a2", "e/a3"]).unwrap();
        let calls = std::cell::Cell::new(0);
        validate_with_detector(&plan, |_| {
            calls.set(calls.get() + 1);
            false
        })
        .unwrap();
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_empty_plan_is_valid() {
        let files: [&str; 0] = [];
        let plan = compute_plan("a", "b", &files).unwrap();
        assert!(validate(&plan).is_ok());
        assert!(find_collisions(&plan).is_empty());
    }
}
