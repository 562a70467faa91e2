//! Workspace project registry
//!
//! Every project owns a `project.json` at its root. The registry is simply the
//! set of those files; a project's name is the `name` field, or its root with
//! `/` replaced by `-` when the field is absent. A missing `root` defaults to
//! the directory holding the file.

use crate::error::{Error, Result};
use crate::layout::{join_path_fragments, offset_from_root};
use crate::package_json::{read_json, write_json};
use crate::tree::{normalize_path, visit_files, Tree};
use crate::types::ProjectConfiguration;
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Per-project configuration file
pub const PROJECT_CONFIG_FILE: &str = "project.json";

/// Schema path, relative to the workspace root
pub const PROJECT_SCHEMA: &str = "node_modules/nx/schemas/project-schema.json";

/// Register a new project.
///
/// Fails when `name` is already taken or when the project root already holds
/// a `project.json`.
pub fn add_project_configuration(
    tree: &mut dyn Tree,
    name: &str,
    config: &ProjectConfiguration,
) -> Result<()> {
    let root = normalize_path(&config.root);
    let config_path = join_path_fragments(&[&root, PROJECT_CONFIG_FILE]);

    if tree.exists(&config_path) {
        return Err(Error::project_root_occupied(name, &root));
    }
    if get_projects(tree)?.contains_key(name) {
        return Err(Error::project_exists(name));
    }

    let mut record = config.clone();
    record.name = Some(name.to_string());
    record.schema = Some(format!("{}{}", offset_from_root(&root), PROJECT_SCHEMA));

    write_json(tree, &config_path, &record)?;
    info!("Registered project '{}' at {}", name, config_path);
    Ok(())
}

/// Read the configuration of a registered project
pub fn read_project_configuration(tree: &dyn Tree, name: &str) -> Result<ProjectConfiguration> {
    get_projects(tree)?
        .remove(name)
        .ok_or_else(|| Error::project_not_found(name))
}

/// All registered projects keyed by name
pub fn get_projects(tree: &dyn Tree) -> Result<BTreeMap<String, ProjectConfiguration>> {
    let mut projects = BTreeMap::new();

    for path in visit_files(tree, "") {
        let is_project_file = path == PROJECT_CONFIG_FILE
            || path.ends_with(&format!("/{}", PROJECT_CONFIG_FILE));
        if !is_project_file {
            continue;
        }

        let value = read_json(tree, &path)?;
        let mut config: ProjectConfiguration = serde_json::from_value(value)
            .map_err(|e| Error::invalid_json(&path, e.to_string()))?;
        if config.root.is_empty() {
            config.root = project_dir(&path).to_string();
        }
        let name = config
            .name
            .clone()
            .unwrap_or_else(|| project_name_from_root(tree, &config.root));

        debug!("Found project '{}' in {}", name, path);
        projects.insert(name, config);
    }

    Ok(projects)
}

/// Directory of a `project.json`, `.` at the workspace root
fn project_dir(config_path: &str) -> &str {
    config_path
        .rsplit_once('/')
        .map(|(dir, _)| dir)
        .unwrap_or(".")
}

fn project_name_from_root(tree: &dyn Tree, root: &str) -> String {
    let root = normalize_path(root);
    if root.is_empty() {
        // root project: named after the workspace directory
        return tree.root().file_name().unwrap_or("root").to_string();
    }
    root.replace('/', "-")
}
