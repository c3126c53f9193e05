//! Path generation
//!
//! Synthesizes fresh file names inside a directory.

use log::warn;
use std::path::{Path, PathBuf, is_separator};
use uuid::Uuid;

use crate::storage::filesystem::entry_exists;
use crate::storage::validation::is_single_component;

/// Build `<UUID>.<ext>`; the extension may carry a leading dot or be empty.
///
/// An extension that would not keep the name a single path component
/// (separators, NUL) is dropped and the bare UUID is returned.
pub fn random_file_name(extension: &str) -> String {
    let stem = Uuid::new_v4().hyphenated().to_string().to_uppercase();
    let name = match extension.trim_start_matches('.') {
        "" => return stem,
        ext => format!("{}.{}", stem, ext),
    };

    if name.contains('\0') || name.chars().any(is_separator) || !is_single_component(&name) {
        warn!("Ignoring unusable file extension {:?}", extension);
        return stem;
    }
    name
}

/// Return a path in `directory` that nothing occupies right now.
///
/// Nothing is created, so the path is only guaranteed free at call time.
pub fn generate_unique_path(directory: &Path, extension: &str) -> PathBuf {
    loop {
        let candidate = directory.join(random_file_name(extension));
        if !entry_exists(&candidate) {
            return candidate;
        }
    }
}
