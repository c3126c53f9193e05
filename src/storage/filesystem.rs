//! File system operations
//!
//! Directory creation and existence checks backing the provider.

use log::{debug, warn};
use std::fs;
use std::io::{Error, ErrorKind, Result};
use std::path::Path;

/// Create a directory and any missing parents.
///
/// `create_dir_all` treats a directory created concurrently by another caller as success.
pub fn create_directory(path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(Error::new(ErrorKind::InvalidInput, "empty directory path"));
    }
    fs::create_dir_all(path)
}

/// Ensure `path` is a directory, reporting failure as `false`.
pub fn ensure_directory(path: &Path) -> bool {
    match create_directory(path) {
        Ok(()) => {
            debug!("Directory ready: {}", path.display());
            true
        }
        Err(e) => {
            warn!("Failed to create directory {}: {}", path.display(), e);
            false
        }
    }
}

/// Check if anything (file, directory or dangling symlink) occupies `path`
pub fn entry_exists(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok()
}

/// Check if directory exists
pub fn directory_exists(path: &Path) -> bool {
    path.is_dir()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_ensure_directory_creates_intermediates() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("a/b/c");

        assert!(ensure_directory(&target));
        assert!(directory_exists(&target));
        assert!(ensure_directory(&target));
    }

    #[test]
    fn test_ensure_directory_rejects_file() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("plain.txt");
        fs::write(&file, b"x").unwrap();

        assert!(!ensure_directory(&file));
        assert!(!ensure_directory(&file.join("nested")));
        assert!(!directory_exists(&file.join("nested")));
    }

    #[test]
    fn test_empty_path() {
        assert!(!ensure_directory(Path::new("")));
    }

    #[test]
    fn test_entry_exists() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("f");
        assert!(!entry_exists(&file));
        fs::write(&file, b"").unwrap();
        assert!(entry_exists(&file));
        assert!(entry_exists(temp.path()));
    }
}
