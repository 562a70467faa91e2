//! Application generator orchestration

use crate::dependencies::add_dependencies;
use crate::error::Result;
use crate::format::format_files;
use crate::options::{normalize_options, AppGeneratorOptions};
use crate::project::register_project;
use crate::templates::{generate_files, load_template, TemplateContext};
use crate::version_gate::{check_angular_version, DEFAULT_ANGULAR_VERSION};
use ngscaffold_core::tasks::TaskQueue;
use ngscaffold_core::types::{GeneratorDefaults, PackageManager};
use ngscaffold_core::version::get_installed_angular_version;
use ngscaffold_core::Tree;
use tracing::{debug, info};

/// Workspace-level settings that are not per-application options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorSettings {
    /// Dev-server port of the `serve` target
    pub port: u16,

    /// Package manager for the install task; detected when `None`
    pub package_manager: Option<PackageManager>,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self::from(&GeneratorDefaults::default())
    }
}

impl From<&GeneratorDefaults> for GeneratorSettings {
    fn from(defaults: &GeneratorDefaults) -> Self {
        Self {
            port: defaults.port,
            package_manager: defaults.package_manager,
        }
    }
}

/// Result of a generator run
#[derive(Debug, Clone)]
pub struct GeneratorOutcome {
    pub project_name: String,
    pub project_root: String,

    /// Angular major the template was chosen for
    pub angular_major: u64,

    /// Files materialized from the template
    pub files: Vec<String>,

    /// Tasks to run once the tree is committed
    pub tasks: TaskQueue,
}

/// Generate an application into the tree.
///
/// Nothing is staged when the installed Angular version is unsupported or
/// the version has no dependency manifest. Later failures leave what was
/// already staged in place.
pub async fn generate_application(
    tree: &mut dyn Tree,
    options: &AppGeneratorOptions,
    settings: &GeneratorSettings,
) -> Result<GeneratorOutcome> {
    let installed = get_installed_angular_version(tree, DEFAULT_ANGULAR_VERSION)?;
    let major = check_angular_version(&installed)?;
    info!("Generating application for Angular {}", installed);

    let normalized = normalize_options(tree, options)?;
    debug!(
        "Project '{}' at {}",
        normalized.project_name, normalized.project_root
    );

    let install = add_dependencies(tree, major, settings.package_manager)?;

    register_project(tree, &normalized, settings.port)?;

    let template = load_template(major)?;
    let context = TemplateContext::from_options(&normalized);
    let files = generate_files(tree, &template, &normalized.project_root, &context)?;
    info!("Generated {} files in {}", files.len(), normalized.project_root);

    if !options.skip_format {
        format_files(tree).await;
    }

    let tasks = if options.skip_install {
        debug!("Skipping package installation");
        TaskQueue::default()
    } else {
        install
    };

    Ok(GeneratorOutcome {
        project_name: normalized.project_name,
        project_root: normalized.project_root,
        angular_major: major,
        files,
        tasks,
    })
}
