//! Hierarchical configuration loader with precedence
//!
//! Loads configuration from multiple sources with the following precedence (low to high):
//! 1. Embedded defaults (built into binary)
//! 2. Global config (~/.ngscaffold/config.yaml)
//! 3. Explicit config file (`--config`)
//! 4. Environment variables (NGSCAFFOLD_* prefix)
//! 5. CLI flags (handled by caller)
//!
//! Files are merged key by key, so a user file only needs the keys it changes.

use crate::error::{Error, Result};
use crate::types::ScaffoldConfig;
use camino::{Utf8Path, Utf8PathBuf};
use rust_embed::RustEmbed;
use serde_yaml_ng::Value;
use std::env;
use std::fs;
use tracing::debug;

/// Embedded configuration files
#[derive(RustEmbed)]
#[folder = "$CARGO_MANIFEST_DIR/embedded/config/"]
#[prefix = ""]
struct EmbeddedConfigs;

const DEFAULTS_FILE: &str = "defaults.yaml";
const GLOBAL_CONFIG_FILE: &str = "config.yaml";

/// Configuration hierarchy loader
#[derive(Debug, Clone)]
pub struct HierarchicalConfigLoader {
    /// Directory holding the global config file
    config_dir: Utf8PathBuf,

    /// Config file passed explicitly by the user
    explicit_file: Option<Utf8PathBuf>,
}

impl HierarchicalConfigLoader {
    /// Create a loader using the standard config directory (~/.ngscaffold)
    pub fn new() -> Result<Self> {
        Ok(Self::with_dir(Self::default_config_dir()?))
    }

    /// Create a loader with a custom config directory
    pub fn with_dir(config_dir: Utf8PathBuf) -> Self {
        Self {
            config_dir,
            explicit_file: None,
        }
    }

    /// Layer an explicit config file on top of the global one
    pub fn with_config_file(mut self, path: Option<Utf8PathBuf>) -> Self {
        self.explicit_file = path;
        self
    }

    /// Get the standard config directory (~/.ngscaffold)
    ///
    /// `HOME` wins over `dirs::home_dir()` so containers that remap the home
    /// directory through the environment are honoured.
    fn default_config_dir() -> Result<Utf8PathBuf> {
        let home = env::var("HOME")
            .ok()
            .map(Utf8PathBuf::from)
            .or_else(|| dirs::home_dir().and_then(|p| Utf8PathBuf::from_path_buf(p).ok()))
            .ok_or_else(|| Error::invalid_config("Could not determine home directory"))?;

        Ok(home.join(".ngscaffold"))
    }

    /// Get the config directory path
    pub fn config_dir(&self) -> &Utf8Path {
        &self.config_dir
    }

    /// Load the configuration with hierarchical precedence
    pub fn load(&self) -> Result<ScaffoldConfig> {
        let mut merged = Self::load_embedded(DEFAULTS_FILE)?;

        let global = self.config_dir.join(GLOBAL_CONFIG_FILE);
        if global.exists() {
            debug!("Loading global config from {}", global);
            merge_values(&mut merged, Self::load_yaml_file(&global)?);
        }

        if let Some(path) = &self.explicit_file {
            if !path.exists() {
                return Err(Error::config_not_found(path.as_str()));
            }
            debug!("Loading config from {}", path);
            merge_values(&mut merged, Self::load_yaml_file(path)?);
        }

        let config: ScaffoldConfig = serde_yaml_ng::from_value(merged)
            .map_err(|e| Error::invalid_config(format!("Failed to parse configuration: {}", e)))?;

        Self::apply_env_overrides(config)
    }

    fn load_embedded(filename: &str) -> Result<Value> {
        let embedded_file = EmbeddedConfigs::get(filename).ok_or_else(|| {
            Error::config_not_found(format!("Embedded config not found: {}", filename))
        })?;

        let content = std::str::from_utf8(&embedded_file.data).map_err(|_| {
            Error::invalid_config(format!("Invalid UTF-8 in embedded config: {}", filename))
        })?;

        Ok(serde_yaml_ng::from_str(content)?)
    }

    fn load_yaml_file(path: &Utf8Path) -> Result<Value> {
        let content = fs::read_to_string(path)?;
        let value: Value = serde_yaml_ng::from_str(&content)
            .map_err(|e| Error::invalid_config(format!("Failed to parse {}: {}", path, e)))?;
        Ok(value)
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut config: ScaffoldConfig) -> Result<ScaffoldConfig> {
        let generator = &mut config.generator;

        if let Ok(val) = env::var("NGSCAFFOLD_PORT") {
            generator.port = val
                .parse()
                .map_err(|_| Error::invalid_config("NGSCAFFOLD_PORT must be a valid port number"))?;
        }

        if let Ok(val) = env::var("NGSCAFFOLD_STYLE") {
            generator.style = val.parse()?;
        }

        if let Ok(val) = env::var("NGSCAFFOLD_PACKAGE_MANAGER") {
            generator.package_manager = Some(val.parse()?);
        }

        if let Ok(val) = env::var("NGSCAFFOLD_SKIP_FORMAT") {
            generator.skip_format = val.parse().unwrap_or(false);
        }

        if let Ok(val) = env::var("NGSCAFFOLD_SKIP_INSTALL") {
            generator.skip_install = val.parse().unwrap_or(false);
        }

        Ok(config)
    }
}

/// Recursively merge `overlay` into `base`; mappings merge, everything else replaces
fn merge_values(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Mapping(base_map), Value::Mapping(overlay_map)) => {
            for (key, value) in overlay_map {
                match base_map.get_mut(&key) {
                    Some(existing) => merge_values(existing, value),
                    None => {
                        base_map.insert(key, value);
                    }
                }
            }
        }
        (_, Value::Null) => {}
        (base, overlay) => *base = overlay,
    }
}
