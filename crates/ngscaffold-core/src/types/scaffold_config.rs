//! User-facing configuration types

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Resolved ngscaffold configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ScaffoldConfig {
    #[serde(default)]
    pub generator: GeneratorDefaults,
}

/// Defaults applied to every generator run unless a CLI flag overrides them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct GeneratorDefaults {
    /// Dev-server port written to the `serve` target
    #[serde(default = "default_port")]
    pub port: u16,

    /// Stylesheet format
    #[serde(default)]
    pub style: Style,

    /// Generate routing setup
    #[serde(default = "default_true")]
    pub routing: bool,

    /// Skip the formatting pass
    #[serde(default)]
    pub skip_format: bool,

    /// Skip installing packages after generation
    #[serde(default)]
    pub skip_install: bool,

    /// Force a package manager instead of detecting it from lock files
    #[serde(default)]
    pub package_manager: Option<PackageManager>,
}

fn default_port() -> u16 {
    4200
}

fn default_true() -> bool {
    true
}

impl Default for GeneratorDefaults {
    fn default() -> Self {
        Self {
            port: default_port(),
            style: Style::default(),
            routing: true,
            skip_format: false,
            skip_install: false,
            package_manager: None,
        }
    }
}

/// Stylesheet format of the generated application
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    #[default]
    Css,
    Scss,
    Less,
}

impl Style {
    /// All supported formats
    pub const ALL: [Style; 3] = [Style::Css, Style::Scss, Style::Less];

    /// File extension without the dot
    pub fn extension(&self) -> &'static str {
        match self {
            Style::Css => "css",
            Style::Scss => "scss",
            Style::Less => "less",
        }
    }
}

impl std::fmt::Display for Style {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

impl FromStr for Style {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "css" => Ok(Style::Css),
            "scss" => Ok(Style::Scss),
            "less" => Ok(Style::Less),
            other => Err(Error::invalid_config(format!(
                "Unknown style '{}'. Valid styles: css, scss, less",
                other
            ))),
        }
    }
}

/// Node package manager used to install dependencies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    Npm,
    Yarn,
    Pnpm,
}

impl PackageManager {
    /// Executable name
    pub fn command(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
            PackageManager::Pnpm => "pnpm",
        }
    }
}

impl std::fmt::Display for PackageManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.command())
    }
}

impl FromStr for PackageManager {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "npm" => Ok(PackageManager::Npm),
            "yarn" => Ok(PackageManager::Yarn),
            "pnpm" => Ok(PackageManager::Pnpm),
            other => Err(Error::invalid_config(format!(
                "Unknown package manager '{}'. Valid values: npm, yarn, pnpm",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generator_defaults() {
        let defaults = GeneratorDefaults::default();
        assert_eq!(defaults.port, 4200);
        assert_eq!(defaults.style, Style::Css);
        assert!(defaults.routing);
        assert!(defaults.package_manager.is_none());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config: ScaffoldConfig =
            serde_yaml_ng::from_str("generator:\n  style: scss\n  skip-install: true\n").unwrap();
        assert_eq!(config.generator.style, Style::Scss);
        assert!(config.generator.skip_install);
        assert_eq!(config.generator.port, 4200);
    }

    #[test]
    fn test_style_from_str() {
        assert_eq!("SCSS".parse::<Style>().unwrap(), Style::Scss);
        assert!("sass".parse::<Style>().is_err());
    }

    #[test]
    fn test_package_manager_from_str() {
        assert_eq!("pnpm".parse::<PackageManager>().unwrap(), PackageManager::Pnpm);
        assert!("bun".parse::<PackageManager>().is_err());
    }
}
