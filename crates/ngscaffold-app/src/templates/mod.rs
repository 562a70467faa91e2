//! Application template materialization
//!
//! Each supported Angular major ships a `template-angular-v<major>/`
//! directory. Every file is copied into the project root:
//!
//! - contents are rendered with Tera (`{{ projectName }}`, `{% if routing %}`),
//!   non-UTF-8 files are copied verbatim
//! - path segments of the form `__key__` are replaced by the string value of
//!   `key`; `__template__` expands to nothing, so `main.ts__template__`
//!   lands as `main.ts`

pub mod loader;
pub mod renderer;

pub use loader::{load_template, template_dir_name, TemplateFile};
pub use renderer::{generate_files, render_content, substitute_path};

use crate::error::Result;
use crate::options::NormalizedOptions;
use ngscaffold_core::layout::offset_from_root;
use ngscaffold_core::names::{names, Names};
use serde::Serialize;
use serde_json::{Map, Value};

/// Values available to templates
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateContext {
    #[serde(flatten)]
    pub names: Names,

    pub project_name: String,
    pub project_root: String,
    pub project_directory: String,
    pub offset_from_root: String,
    pub style: String,
    pub routing: bool,
    pub tags: Vec<String>,

    /// Always empty; strips `__template__` markers from file names
    pub template: String,
}

impl TemplateContext {
    /// Context for a normalized application
    pub fn from_options(options: &NormalizedOptions) -> Self {
        Self {
            names: names(&options.options.name),
            project_name: options.project_name.clone(),
            project_root: options.project_root.clone(),
            project_directory: options.project_directory.clone(),
            offset_from_root: offset_from_root(&options.project_root),
            style: options.options.style.to_string(),
            routing: options.options.routing,
            tags: options.parsed_tags.clone(),
            template: String::new(),
        }
    }

    /// Flat key/value view used for path tokens
    pub fn to_map(&self) -> Result<Map<String, Value>> {
        match serde_json::to_value(self)? {
            Value::Object(map) => Ok(map),
            _ => Ok(Map::new()),
        }
    }

    /// Convert to Tera context for content rendering
    pub fn to_tera_context(&self) -> Result<tera::Context> {
        Ok(tera::Context::from_serialize(self)?)
    }
}
