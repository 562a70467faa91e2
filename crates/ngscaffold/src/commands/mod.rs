//! CLI command implementations

pub mod app;
pub mod completions;
pub mod projects;
pub mod version;

use anyhow::{Context, Result};
use camino::Utf8PathBuf;
use ngscaffold_core::types::ScaffoldConfig;
use ngscaffold_core::HierarchicalConfigLoader;

/// Options shared by every command
#[derive(Debug, Clone, Default)]
pub struct GlobalArgs {
    pub config: Option<Utf8PathBuf>,
    pub cwd: Option<Utf8PathBuf>,
}

impl GlobalArgs {
    /// Workspace root: `--cwd` or the current directory
    pub fn workspace_root(&self) -> Result<Utf8PathBuf> {
        match &self.cwd {
            Some(cwd) => Ok(cwd.clone()),
            None => {
                let dir = std::env::current_dir().context("Failed to read current directory")?;
                Utf8PathBuf::from_path_buf(dir)
                    .map_err(|p| anyhow::anyhow!("Current directory is not UTF-8: {}", p.display()))
            }
        }
    }

    /// Load configuration through the hierarchical loader
    pub fn load_config(&self) -> Result<ScaffoldConfig> {
        let loader = HierarchicalConfigLoader::new()?.with_config_file(self.config.clone());
        loader.load().context("Failed to load configuration")
    }
}
