//! Generator input and its normalized form

use crate::error::{Error, Result};
use ngscaffold_core::layout::{get_workspace_layout, join_path_fragments};
use ngscaffold_core::names::to_file_name;
use ngscaffold_core::types::Style;
use ngscaffold_core::Tree;
use serde::{Deserialize, Serialize};

/// Raw options of the application generator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppGeneratorOptions {
    /// Application name
    pub name: String,

    /// Parent directory under the apps dir
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<String>,

    /// Comma-separated tags
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,

    #[serde(default)]
    pub style: Style,

    #[serde(default = "default_routing")]
    pub routing: bool,

    #[serde(default)]
    pub skip_format: bool,

    #[serde(default)]
    pub skip_install: bool,
}

fn default_routing() -> bool {
    true
}

impl AppGeneratorOptions {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            directory: None,
            tags: None,
            style: Style::default(),
            routing: true,
            skip_format: false,
            skip_install: false,
        }
    }

    pub fn with_directory(mut self, directory: impl Into<String>) -> Self {
        self.directory = Some(directory.into());
        self
    }

    pub fn with_tags(mut self, tags: impl Into<String>) -> Self {
        self.tags = Some(tags.into());
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn with_routing(mut self, routing: bool) -> Self {
        self.routing = routing;
        self
    }

    pub fn with_skip_format(mut self, skip_format: bool) -> Self {
        self.skip_format = skip_format;
        self
    }

    pub fn with_skip_install(mut self, skip_install: bool) -> Self {
        self.skip_install = skip_install;
        self
    }
}

/// Options with the derived project identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedOptions {
    #[serde(flatten)]
    pub options: AppGeneratorOptions,

    /// Registry key, e.g. `clients-my-app`
    pub project_name: String,

    /// Workspace-relative root, e.g. `apps/clients/my-app`
    pub project_root: String,

    /// Path below the apps dir, e.g. `clients/my-app`
    pub project_directory: String,

    pub parsed_tags: Vec<String>,
}

/// Derive project name, root, directory and tags from the raw options
pub fn normalize_options(tree: &dyn Tree, options: &AppGeneratorOptions) -> Result<NormalizedOptions> {
    if options.name.trim().is_empty() {
        return Err(Error::invalid_options("application name must not be empty"));
    }

    let name = to_file_name(options.name.trim());
    let project_directory = match options.directory.as_deref().map(str::trim) {
        Some(directory) if !directory.is_empty() => {
            format!("{}/{}", to_file_name(directory), name)
        }
        _ => name,
    };
    let project_name = project_directory.replace('/', "-");

    let layout = get_workspace_layout(tree)?;
    let project_root = join_path_fragments(&[&layout.apps_dir, &project_directory]);

    Ok(NormalizedOptions {
        options: options.clone(),
        project_name,
        project_root,
        project_directory,
        parsed_tags: parse_tags(options.tags.as_deref()),
    })
}

/// `"a, b ,c"` → `["a", "b", "c"]`
pub fn parse_tags(tags: Option<&str>) -> Vec<String> {
    tags.map(|tags| tags.split(',').map(|tag| tag.trim().to_string()).collect())
        .unwrap_or_default()
}
