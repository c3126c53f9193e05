//! Storage roots
//!
//! The three fixed directories a provider answers for, resolved once from config.

use log::{info, warn};
use std::path::{Path, PathBuf};

use crate::config::ProviderConfig;
use crate::error::ProviderError;
use crate::storage::filesystem::{create_directory, directory_exists};
use crate::storage::validation::normalize_absolute;

/// Resolved document, caches and bundle roots
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryRoots {
    pub document: PathBuf,
    pub caches: PathBuf,
    pub bundle: PathBuf,
}

impl DirectoryRoots {
    /// Normalize the configured roots and, if asked, create document and caches.
    pub fn resolve(config: &ProviderConfig) -> Result<Self, ProviderError> {
        config.validate()?;

        let roots = Self {
            document: normalize_root("document", &config.document_path())?,
            caches: normalize_root("caches", &config.caches_path())?,
            bundle: normalize_root("bundle", &config.bundle_path())?,
        };

        if config.create_roots {
            for (role, path) in [("document", &roots.document), ("caches", &roots.caches)] {
                create_directory(path).map_err(|source| ProviderError::RootUnavailable {
                    role,
                    path: path.clone(),
                    source,
                })?;
            }
        }

        if !directory_exists(&roots.bundle) {
            warn!("Bundle directory does not exist: {}", roots.bundle.display());
        }

        info!(
            "Resolved roots - document: {}, caches: {}, bundle: {}",
            roots.document.display(),
            roots.caches.display(),
            roots.bundle.display()
        );

        Ok(roots)
    }
}

fn normalize_root(role: &'static str, path: &Path) -> Result<PathBuf, ProviderError> {
    normalize_absolute(path).ok_or_else(|| ProviderError::InvalidRoot {
        role,
        path: path.to_path_buf(),
    })
}
