#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod config;
pub mod error;
pub mod executor;
pub mod operations;
pub mod output;
pub mod planner;
pub mod preview;
pub mod validator;

pub use config::Config;
pub use error::{RenameError, Result};
pub use executor::{
    detect_case_insensitive_fs, execute, ExecuteOptions, ExecutionReport, FailurePolicy,
    RenameFailure,
};
pub use operations::{check_inputs_exist, rename_operation, RenameParams};
pub use output::{OutputFormat, OutputFormatter, RenameResult};
pub use planner::{compute_plan, split_path, RenameItem, RenamePlan, CURRENT_DIR};
pub use preview::{render_plan, write_preview, Preview};
pub use validator::{
    find_collisions, find_collisions_with_detector, validate, validate_with_detector,
    RenameCollision,
};
