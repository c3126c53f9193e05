//! Path validation
//!
//! Lexical normalization and root containment checks.

use std::path::{Component, Path, PathBuf};

/// Resolve `.`, `..` and repeated separators without touching the file system.
///
/// Returns `None` for relative paths: containment is only meaningful for absolute ones.
pub fn normalize_absolute(path: &Path) -> Option<PathBuf> {
    if !path.is_absolute() {
        return None;
    }
    Some(path_clean::clean(path))
}

/// Whether `path` is `root` or lies beneath it, after normalizing both.
pub fn is_within(root: &Path, path: &Path) -> bool {
    match (normalize_absolute(root), normalize_absolute(path)) {
        (Some(root), Some(path)) => path.starts_with(root),
        _ => false,
    }
}

/// Whether `name` is usable as a single directory component (no separators, no `..`).
pub fn is_single_component(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}
