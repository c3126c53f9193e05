//! Configuration management for the file-system capability provider
//!
//! Roots and access policy come from `config.toml`, with environment overrides
//! prefixed `FS_CAP` (e.g. `FS_CAP__CACHES_DIRECTORY=/tmp/caches`).

use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::storage::validation::is_single_component;

/// Provider configuration, loaded once at startup
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ProviderConfig {
    /// Durable, app-private storage root
    pub document_directory: String,

    /// Purgeable storage root
    pub caches_directory: String,

    /// Read-only root holding packaged assets
    pub bundle_directory: String,

    /// Sub-directory isolating one consumer's document and caches data
    #[serde(default)]
    pub scope: Option<String>,

    /// Create document and caches roots when the provider is built
    #[serde(default = "default_true")]
    pub create_roots: bool,

    /// Consult OS access checks for paths outside the managed roots
    #[serde(default = "default_true")]
    pub external_access: bool,
}

fn default_true() -> bool {
    true
}

impl ProviderConfig {
    pub fn new(
        document_directory: impl AsRef<Path>,
        caches_directory: impl AsRef<Path>,
        bundle_directory: impl AsRef<Path>,
    ) -> Self {
        Self {
            document_directory: document_directory.as_ref().to_string_lossy().into_owned(),
            caches_directory: caches_directory.as_ref().to_string_lossy().into_owned(),
            bundle_directory: bundle_directory.as_ref().to_string_lossy().into_owned(),
            scope: None,
            create_roots: true,
            external_access: true,
        }
    }

    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    pub fn with_external_access(mut self, enabled: bool) -> Self {
        self.external_access = enabled;
        self
    }

    pub fn with_create_roots(mut self, enabled: bool) -> Self {
        self.create_roots = enabled;
        self
    }

    /// Load configuration from config.toml with environment overrides
    pub fn load() -> Result<Self, config::ConfigError> {
        // Installed layout first, then the working directory
        let config_paths = ["fs-capability/config", "config"];

        let mut last_error = None;

        for config_path in &config_paths {
            match Config::builder()
                .add_source(File::with_name(config_path))
                .add_source(Environment::with_prefix("FS_CAP").separator("__"))
                .build()
            {
                Ok(settings) => {
                    let config: ProviderConfig = settings.try_deserialize()?;
                    config.validate()?;
                    return Ok(config);
                }
                Err(e) => {
                    last_error = Some(e);
                    continue;
                }
            }
        }

        Err(last_error.unwrap_or_else(|| {
            config::ConfigError::Message(format!(
                "No configuration found. Tried: {config_paths:?}"
            ))
        }))
    }

    /// Load configuration from an explicit file, still honoring environment overrides
    pub fn load_from(path: &Path) -> Result<Self, config::ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path))
            .add_source(Environment::with_prefix("FS_CAP").separator("__"))
            .build()?;
        let config: ProviderConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    pub fn validate(&self) -> Result<(), config::ConfigError> {
        for (role, value) in [
            ("document_directory", &self.document_directory),
            ("caches_directory", &self.caches_directory),
            ("bundle_directory", &self.bundle_directory),
        ] {
            if value.is_empty() {
                return Err(config::ConfigError::Message(format!(
                    "{role} cannot be empty"
                )));
            }
            if !Path::new(value).is_absolute() {
                return Err(config::ConfigError::Message(format!(
                    "{role} must be an absolute path, got {value}"
                )));
            }
        }

        if let Some(scope) = &self.scope {
            if !is_single_component(scope) {
                return Err(config::ConfigError::Message(format!(
                    "scope must be a single directory name, got {scope:?}"
                )));
            }
        }

        Ok(())
    }

    /// Document root with the scope applied
    pub fn document_path(&self) -> PathBuf {
        self.scoped(&self.document_directory)
    }

    /// Caches root with the scope applied
    pub fn caches_path(&self) -> PathBuf {
        self.scoped(&self.caches_directory)
    }

    /// Bundle root; never scoped
    pub fn bundle_path(&self) -> PathBuf {
        PathBuf::from(&self.bundle_directory)
    }

    fn scoped(&self, root: &str) -> PathBuf {
        let root = PathBuf::from(root);
        match &self.scope {
            Some(scope) => root.join(scope),
            None => root,
        }
    }
}
