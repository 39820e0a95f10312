use serde::Deserialize;
use std::{
    io,
    path::{Path, PathBuf},
    sync::Arc,
};
use tessera_core::registry::{ConversionRegistry, RegistryConfig};
use thiserror::Error as ThisError;

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("failed to read config file at {}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config: {source}")]
    Parse {
        #[from]
        source: toml::de::Error,
    },

    #[error(transparent)]
    Registry(#[from] tessera_core::Error),
}

///
/// Config
///
/// Top-level configuration file.
///
/// ```toml
/// [registry]
/// fallback = "strict"   # "strict" | "identity" | "identity-then-text"
/// ```
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub registry: RegistryConfig,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("loading config from {}", path.display());

        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents)?;
        log::debug!("registry fallback policy: {:?}", config.registry.fallback);

        Ok(config)
    }

    /// Standard registry under this configuration.
    #[must_use]
    pub fn build_registry(&self) -> ConversionRegistry {
        ConversionRegistry::from_config(&self.registry)
    }

    /// Build the registry and publish it process-wide.
    pub fn install(&self) -> Result<Arc<ConversionRegistry>, ConfigError> {
        let registry = ConversionRegistry::install(self.build_registry())?;

        Ok(registry)
    }
}
