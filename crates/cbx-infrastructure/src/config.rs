//! Configuration loader
//!
//! Loads declarative injection metadata from TOML files and environment
//! variables. Uses Figment for layered configuration management.

use std::path::{Path, PathBuf};

use cbx_domain::error::{Error, Result};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use tracing::{debug, warn};

use crate::registry::MetadataRegistry;

/// Environment variable prefix for metadata overrides
pub const METADATA_ENV_PREFIX: &str = "CBX_";

/// Layered loader for a [`MetadataRegistry`]
///
/// Configuration sources are merged in this order (later sources override
/// earlier):
/// 1. Empty registry defaults
/// 2. TOML configuration file (if one was set and exists)
/// 3. Environment variables with the configured prefix
///
/// ## TOML shape
///
/// ```toml
/// [types.Mailer.properties]
/// transport = "smtp.transport"
///
/// [types.Mailer.methods.send]
/// signer = "mail.signer"
/// ```
#[derive(Clone)]
pub struct MetadataLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,
    /// Environment variable prefix
    env_prefix: String,
}

impl MetadataLoader {
    /// Create a loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: METADATA_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load the metadata registry from all sources
    pub fn load(&self) -> Result<MetadataRegistry> {
        let mut figment =
            Figment::new().merge(Serialized::defaults(MetadataRegistry::default()));

        if let Some(config_path) = &self.config_path {
            if config_path.exists() {
                debug!(path = %config_path.display(), "loading metadata configuration");
                figment = figment.merge(Toml::file(config_path));
            } else {
                warn!(
                    path = %config_path.display(),
                    "metadata configuration file not found, using defaults"
                );
            }
        }

        figment = figment.merge(Env::prefixed(&self.env_prefix).split("__"));

        figment.extract().map_err(|e| Error::Configuration {
            message: format!("failed to load metadata configuration: {e}"),
        })
    }
}

impl Default for MetadataLoader {
    fn default() -> Self {
        Self::new()
    }
}
