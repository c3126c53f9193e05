//! File system storage management
//!
//! Handles directory creation, access probes, path generation and path validation.

pub mod filesystem;
pub mod paths;
pub mod permissions;
pub mod validation;

pub use filesystem::ensure_directory;
pub use paths::generate_unique_path;
pub use validation::{is_within, normalize_absolute};
