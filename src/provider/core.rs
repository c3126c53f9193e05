use log::info;
use std::path::{Path, PathBuf};

use crate::config::ProviderConfig;
use crate::error::ProviderError;
use crate::permissions::{ExternalPolicy, PermissionFlags, Uri, classify};
use crate::provider::FileSystemInterface;
use crate::provider::roots::DirectoryRoots;
use crate::storage::{ensure_directory, generate_unique_path};

/// Host implementation of [`FileSystemInterface`] over the local file system.
#[derive(Debug, Clone)]
pub struct FileSystemProvider {
    roots: DirectoryRoots,
    external: ExternalPolicy,
}

impl FileSystemProvider {
    pub fn new(config: &ProviderConfig) -> Result<Self, ProviderError> {
        let roots = DirectoryRoots::resolve(config)?;
        let external = if config.external_access {
            ExternalPolicy::OsAccess
        } else {
            ExternalPolicy::Deny
        };

        info!("File system provider ready (external access: {:?})", external);

        Ok(Self { roots, external })
    }
}

impl FileSystemInterface for FileSystemProvider {
    fn document_directory(&self) -> &Path {
        &self.roots.document
    }

    fn caches_directory(&self) -> &Path {
        &self.roots.caches
    }

    fn bundle_directory(&self) -> &Path {
        &self.roots.bundle
    }

    fn permissions_for_uri(&self, uri: &Uri) -> PermissionFlags {
        classify(&self.roots, self.external, uri)
    }

    fn generate_path_in_directory(&self, directory: &Path, extension: &str) -> PathBuf {
        generate_unique_path(directory, extension)
    }

    fn ensure_dir_exists_with_path(&self, path: &Path) -> bool {
        ensure_directory(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn provider(temp: &TempDir) -> FileSystemProvider {
        let config = ProviderConfig::new(
            temp.path().join("Documents"),
            temp.path().join("Library/Caches"),
            temp.path().join("Bundle"),
        );
        FileSystemProvider::new(&config).unwrap()
    }

    #[test]
    fn test_directory_accessors_are_stable() {
        let temp = TempDir::new().unwrap();
        let provider = provider(&temp);

        assert_eq!(provider.document_directory(), temp.path().join("Documents"));
        assert_eq!(provider.document_directory(), provider.document_directory());
        assert_eq!(provider.caches_directory(), provider.caches_directory());
        assert_eq!(provider.bundle_directory(), temp.path().join("Bundle"));
    }

    #[test]
    fn test_external_policy() {
        let temp = TempDir::new().unwrap();
        let outside = temp.path().join("outside.txt");
        fs::write(&outside, b"x").unwrap();
        let uri = Uri::from_path(&outside);

        let open = provider(&temp);
        assert_eq!(open.permissions_for_uri(&uri), PermissionFlags::READ_WRITE);
        assert_eq!(
            open.permissions_for_uri(&Uri::from_path(temp.path().join("missing"))),
            PermissionFlags::NONE
        );

        let config = ProviderConfig::new(
            temp.path().join("Documents"),
            temp.path().join("Library/Caches"),
            temp.path().join("Bundle"),
        )
        .with_external_access(false);
        let closed = FileSystemProvider::new(&config).unwrap();
        assert_eq!(closed.permissions_for_uri(&uri), PermissionFlags::NONE);
    }

    #[test]
    fn test_usable_as_trait_object() {
        let temp = TempDir::new().unwrap();
        let provider: Box<dyn FileSystemInterface> = Box::new(provider(&temp));
        let target = provider.caches_directory().join("downloads");

        assert!(provider.ensure_dir_exists_with_path(&target));
        let path = provider.generate_path_in_directory(&target, "mp4");
        assert_eq!(path.parent(), Some(target.as_path()));
    }
}
