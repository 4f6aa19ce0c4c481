//! Configuration for the WPS module.
//!
//! The host hands each module a raw JSON section under `modules.<name>`; the
//! typed settings live in its `config` field:
//!
//! ```yaml
//! modules:
//!   wps:
//!     config:
//!       data_dir: /var/lib/app
//!       file_name: wps.yaml
//! ```
//!
//! Two loaders are provided:
//!
//! 1. **Lenient** (`module_config_or_default`): falls back to `T::default()` when
//!    the section is missing.
//! 2. **Strict** (`module_config_required`): the section must be present and valid.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Yaml};
use serde::Deserialize;
use serde::de::DeserializeOwned;

/// Name of the module section in the host configuration.
pub const MODULE_NAME: &str = "wps";

/// Prefix of environment variables overriding the configuration file.
pub const ENV_PREFIX: &str = "APP__";

/// Typed settings of the WPS module.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WpsModuleConfig {
    /// Directory holding the persisted service document.
    pub data_dir: PathBuf,

    /// File name of the service document inside `data_dir`.
    pub file_name: String,
}

impl Default for WpsModuleConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            file_name: "wps.yaml".to_owned(),
        }
    }
}

impl WpsModuleConfig {
    /// Full path of the service document.
    #[must_use]
    pub fn service_file(&self) -> PathBuf {
        self.data_dir.join(&self.file_name)
    }
}

/// Configuration error for typed config operations
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("module '{module}' not found")]
    ModuleNotFound { module: String },
    #[error("module '{module}' config must be an object")]
    InvalidModuleStructure { module: String },
    #[error("missing 'config' section in module '{module}'")]
    MissingConfigSection { module: String },
    #[error("invalid config for module '{module}': {source}")]
    InvalidConfig {
        module: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to load configuration: {source}")]
    Load {
        #[source]
        source: Box<figment::Error>,
    },
}

/// Provider of module-specific configuration (raw JSON sections only).
pub trait ConfigProvider: Send + Sync {
    /// Returns raw JSON section for the module, if any.
    fn get_module_config(&self, module_name: &str) -> Option<&serde_json::Value>;
}

/// Top-level shape of the host configuration; everything but `modules` is ignored.
#[derive(Debug, Default, Deserialize)]
struct HostConfig {
    #[serde(default)]
    modules: HashMap<String, serde_json::Value>,
}

/// [`ConfigProvider`] backed by a layered `figment` configuration.
#[derive(Debug, Default, Clone)]
pub struct FigmentConfigProvider {
    modules: HashMap<String, serde_json::Value>,
}

impl FigmentConfigProvider {
    /// Extracts module sections from an already assembled figment.
    ///
    /// # Errors
    /// Returns `ConfigError::Load` if the figment cannot be extracted.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let host: HostConfig = figment.extract().map_err(|e| ConfigError::Load {
            source: Box::new(e),
        })?;
        Ok(Self {
            modules: host.modules,
        })
    }

    /// Reads the YAML file at `path` (if present) and layers `APP__`-prefixed
    /// environment variables on top, using `__` as the nesting separator.
    ///
    /// # Errors
    /// Returns `ConfigError::Load` if the file or environment cannot be parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let figment = Figment::new()
            .merge(Yaml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"));
        Self::from_figment(&figment)
    }
}

impl ConfigProvider for FigmentConfigProvider {
    fn get_module_config(&self, module_name: &str) -> Option<&serde_json::Value> {
        self.modules.get(module_name)
    }
}

/// Lenient configuration loader that falls back to defaults.
///
/// - If the module is not present in config → returns `Ok(T::default())`
/// - If the module value is not an object → returns `Ok(T::default())`
/// - If the module has no "config" field → returns `Ok(T::default())`
/// - If "config" is present but invalid → returns `Err(ConfigError::InvalidConfig)`
///
/// # Errors
/// Returns `ConfigError::InvalidConfig` if the config section exists but cannot be deserialized.
pub fn module_config_or_default<T: DeserializeOwned + Default>(
    provider: &dyn ConfigProvider,
    module_name: &str,
) -> Result<T, ConfigError> {
    let Some(module_raw) = provider.get_module_config(module_name) else {
        return Ok(T::default());
    };

    let Some(obj) = module_raw.as_object() else {
        return Ok(T::default());
    };

    let Some(config_section) = obj.get("config") else {
        return Ok(T::default());
    };

    parse_section(module_name, config_section)
}

/// Strict configuration loader that requires configuration to be present.
///
/// - If the module is not present → returns `Err(ConfigError::ModuleNotFound)`
/// - If the module value is not an object → returns `Err(ConfigError::InvalidModuleStructure)`
/// - If the module has no "config" field → returns `Err(ConfigError::MissingConfigSection)`
/// - If "config" is present but invalid → returns `Err(ConfigError::InvalidConfig)`
///
/// # Errors
/// Returns `ConfigError` if the module is not found, has invalid structure, or config is invalid.
pub fn module_config_required<T: DeserializeOwned>(
    provider: &dyn ConfigProvider,
    module_name: &str,
) -> Result<T, ConfigError> {
    let module_raw =
        provider
            .get_module_config(module_name)
            .ok_or_else(|| ConfigError::ModuleNotFound {
                module: module_name.to_owned(),
            })?;

    let obj = module_raw
        .as_object()
        .ok_or_else(|| ConfigError::InvalidModuleStructure {
            module: module_name.to_owned(),
        })?;

    let config_section = obj
        .get("config")
        .ok_or_else(|| ConfigError::MissingConfigSection {
            module: module_name.to_owned(),
        })?;

    parse_section(module_name, config_section)
}

fn parse_section<T: DeserializeOwned>(
    module_name: &str,
    section: &serde_json::Value,
) -> Result<T, ConfigError> {
    serde_json::from_value(section.clone()).map_err(|e| ConfigError::InvalidConfig {
        module: module_name.to_owned(),
        source: e,
    })
}
