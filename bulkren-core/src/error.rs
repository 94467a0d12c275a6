use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while planning or applying a bulk rename.
#[derive(Error, Debug)]
pub enum RenameError {
    #[error("Invalid pattern '{pattern}'")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Invalid input path {}: {reason}", path.display())]
    InvalidInputPath { path: PathBuf, reason: String },

    /// Some input files are missing or are not regular files.
    #[error("One or more files do not exist")]
    MissingInputs { missing: Vec<PathBuf> },

    #[error("Cannot rename {} to '{new_name}': {reason}", path.display())]
    InvalidTargetName {
        path: PathBuf,
        new_name: String,
        reason: String,
    },

    /// Two or more planned renames share a target. The colliding targets
    /// are only logged at debug level.
    #[error("New file names are not unique")]
    Collision,

    #[error("Failed to rename {} to {}", from.display(), to.display())]
    RenameIo {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{failed} of {total} renames failed")]
    PartialFailure { failed: usize, total: usize },

    #[error("Failed to write output")]
    Output(#[from] io::Error),
}

pub type Result<T, E = RenameError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collision_message_is_minimal() {
        assert_eq!(
            RenameError::Collision.to_string(),
            "New file names are not unique"
        );
    }

    #[test]
    fn test_rename_io_names_both_paths() {
        let err = RenameError::RenameIo {
            from: PathBuf::from("a.txt"),
            to: PathBuf::from("b.txt"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "Failed to rename a.txt to b.txt");
        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "denied");
    }

    #[test]
    fn test_invalid_pattern_keeps_source() {
        let source = regex::Regex::new("(").unwrap_err();
        let err = RenameError::InvalidPattern {
            pattern: "(".to_string(),
            source,
        };
        assert_eq!(err.to_string(), "Invalid pattern '('");
        assert!(std::error::Error::source(&err).is_some());
    }
}
