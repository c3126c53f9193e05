//! File-system capability provider
//!
//! The interface plugins depend on, and the host implementation backed by
//! the local file system.

pub mod core;
pub mod roots;

use std::path::{Path, PathBuf};

use crate::permissions::{PermissionFlags, Uri};

pub use self::core::FileSystemProvider;
pub use roots::DirectoryRoots;

/// File paths and access decisions a host hands to its plugins.
///
/// Implementations must be safe to call from several threads at once; every
/// operation is a stateless query or derivation against the live file system.
pub trait FileSystemInterface: Send + Sync {
    /// Durable, app-private storage root. Stable for the provider's lifetime.
    fn document_directory(&self) -> &Path;

    /// Storage root whose contents may be purged without notice.
    fn caches_directory(&self) -> &Path;

    /// Read-only root of assets packaged with the application.
    fn bundle_directory(&self) -> &Path;

    /// Read/Write rights the caller holds for `uri`. Performs no mutation.
    fn permissions_for_uri(&self, uri: &Uri) -> PermissionFlags;

    /// A path in `directory`, ending in `extension`, that does not exist at call time.
    ///
    /// Neither the file nor `directory` is created.
    fn generate_path_in_directory(&self, directory: &Path, extension: &str) -> PathBuf;

    /// Create `path` and missing parents; `true` if it is a directory on return.
    fn ensure_dir_exists_with_path(&self, path: &Path) -> bool;
}
