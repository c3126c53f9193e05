//! URI classification
//!
//! Maps a URI onto the permission flags a caller holds for it.

use log::trace;
use std::path::Path;

use crate::permissions::flags::PermissionFlags;
use crate::permissions::uri::Uri;
use crate::provider::roots::DirectoryRoots;
use crate::storage::permissions::{AccessProbe, OsAccess};
use crate::storage::validation::{is_within, normalize_absolute};

/// Schemes loaded through host-side readers; never writable.
pub const READ_ONLY_SCHEMES: &[&str] = &["http", "https", "assets-library", "ph"];

/// Policy for locations outside the managed roots
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExternalPolicy {
    /// Ask the OS whether the caller may read or write the path
    OsAccess,
    /// Grant nothing
    Deny,
}

/// Permissions for `uri` against `roots`.
pub fn classify(roots: &DirectoryRoots, policy: ExternalPolicy, uri: &Uri) -> PermissionFlags {
    let flags = match uri.file_path() {
        Some(path) => classify_path(roots, policy, &path),
        None if READ_ONLY_SCHEMES.contains(&uri.scheme()) => PermissionFlags::READ,
        None => PermissionFlags::NONE,
    };
    trace!("Permissions for {}: {}", uri, flags);
    flags
}

/// Permissions for a local path.
///
/// The bundle is checked first so it stays read-only even when nested in another root.
pub fn classify_path(roots: &DirectoryRoots, policy: ExternalPolicy, path: &Path) -> PermissionFlags {
    let Some(path) = normalize_absolute(path) else {
        return PermissionFlags::NONE;
    };

    if is_within(&roots.bundle, &path) {
        return PermissionFlags::READ;
    }
    if is_within(&roots.document, &path) || is_within(&roots.caches, &path) {
        return PermissionFlags::READ_WRITE;
    }

    match policy {
        ExternalPolicy::Deny => PermissionFlags::NONE,
        ExternalPolicy::OsAccess => external_permissions(&OsAccess, &path),
    }
}

/// Permissions the probe reports for a path outside every managed root.
pub fn external_permissions(probe: &dyn AccessProbe, path: &Path) -> PermissionFlags {
    let mut flags = PermissionFlags::NONE;
    if probe.readable(path) {
        flags |= PermissionFlags::READ;
    }
    if probe.writable(path) {
        flags |= PermissionFlags::WRITE;
    }
    flags
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn roots() -> DirectoryRoots {
        DirectoryRoots {
            document: PathBuf::from("/app/Documents"),
            caches: PathBuf::from("/app/Library/Caches"),
            bundle: PathBuf::from("/app/Bundle"),
        }
    }

    fn classify_str(raw: &str) -> PermissionFlags {
        classify(&roots(), ExternalPolicy::Deny, &Uri::parse(raw).unwrap())
    }

    #[test]
    fn test_managed_roots() {
        assert_eq!(classify_str("file:///app/Documents/a.jpg"), PermissionFlags::READ_WRITE);
        assert_eq!(classify_str("/app/Documents"), PermissionFlags::READ_WRITE);
        assert_eq!(classify_str("file:///app/Library/Caches/x/y"), PermissionFlags::READ_WRITE);
        assert_eq!(classify_str("file:///app/Bundle/assets/logo.png"), PermissionFlags::READ);
    }

    #[test]
    fn test_traversal_does_not_inherit_root() {
        assert_eq!(
            classify_str("file:///app/Bundle/../Documents/a"),
            PermissionFlags::READ_WRITE
        );
        assert_eq!(classify_str("file:///app/Documents/../../etc/passwd"), PermissionFlags::NONE);
        assert_eq!(classify_str("file:///app/DocumentsEvil/a"), PermissionFlags::NONE);
    }

    #[test]
    fn test_bundle_nested_in_document_stays_read_only() {
        let roots = DirectoryRoots {
            document: PathBuf::from("/app"),
            caches: PathBuf::from("/app/Caches"),
            bundle: PathBuf::from("/app/Bundle"),
        };
        let flags = classify_path(&roots, ExternalPolicy::Deny, Path::new("/app/Bundle/a"));
        assert_eq!(flags, PermissionFlags::READ);
        assert!(!flags.can_write());
    }

    #[test]
    fn test_schemes() {
        assert_eq!(classify_str("https://example.com/a.png"), PermissionFlags::READ);
        assert_eq!(classify_str("http://example.com/a.png"), PermissionFlags::READ);
        assert_eq!(classify_str("assets-library://asset/a.JPG"), PermissionFlags::READ);
        assert_eq!(classify_str("ph://ABC-123"), PermissionFlags::READ);
        assert_eq!(classify_str("content://media/1"), PermissionFlags::NONE);
        assert_eq!(classify_str("data:text/plain,hi"), PermissionFlags::NONE);
    }

    struct FixedAccess {
        read: bool,
        write: bool,
    }

    impl AccessProbe for FixedAccess {
        fn readable(&self, _path: &Path) -> bool {
            self.read
        }

        fn writable(&self, _path: &Path) -> bool {
            self.write
        }
    }

    #[test]
    fn test_external_permissions_follow_probe() {
        let path = Path::new("/usr");
        let read_only = FixedAccess { read: true, write: false };
        assert_eq!(external_permissions(&read_only, path), PermissionFlags::READ);

        let full = FixedAccess { read: true, write: true };
        assert_eq!(external_permissions(&full, path), PermissionFlags::READ_WRITE);

        let write_only = FixedAccess { read: false, write: true };
        assert_eq!(external_permissions(&write_only, path), PermissionFlags::WRITE);

        let denied = FixedAccess { read: false, write: false };
        assert_eq!(external_permissions(&denied, path), PermissionFlags::NONE);
    }

    #[test]
    fn test_relative_path_grants_nothing() {
        let flags = classify_path(&roots(), ExternalPolicy::OsAccess, Path::new("Documents/a"));
        assert_eq!(flags, PermissionFlags::NONE);
    }
}
