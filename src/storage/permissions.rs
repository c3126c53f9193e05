//! File permissions
//!
//! Access probes for paths outside the managed roots. Probes ask the kernel
//! about the caller's rights and never open the path, so FIFOs and device
//! nodes are classified without blocking or side effects.

use std::path::Path;

/// Source of read/write access decisions for a path
pub trait AccessProbe: Send + Sync {
    fn readable(&self, path: &Path) -> bool;
    fn writable(&self, path: &Path) -> bool;
}

/// Probe backed by the operating system's access checks
#[derive(Debug, Clone, Copy, Default)]
pub struct OsAccess;

impl AccessProbe for OsAccess {
    fn readable(&self, path: &Path) -> bool {
        is_readable(path)
    }

    fn writable(&self, path: &Path) -> bool {
        is_writable(path)
    }
}

/// Check if the calling process may read `path`. Missing paths are unreadable.
#[cfg(unix)]
pub fn is_readable(path: &Path) -> bool {
    use nix::unistd::{AccessFlags, access};
    access(path, AccessFlags::R_OK).is_ok()
}

/// Check if the calling process may write `path`. Missing paths are unwritable.
#[cfg(unix)]
pub fn is_writable(path: &Path) -> bool {
    use nix::unistd::{AccessFlags, access};
    access(path, AccessFlags::W_OK).is_ok()
}

#[cfg(not(unix))]
pub fn is_readable(path: &Path) -> bool {
    std::fs::metadata(path).is_ok()
}

#[cfg(not(unix))]
pub fn is_writable(path: &Path) -> bool {
    std::fs::metadata(path)
        .map(|meta| !meta.permissions().readonly())
        .unwrap_or(false)
}
