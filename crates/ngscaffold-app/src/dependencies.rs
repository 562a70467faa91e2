//! Version-keyed dependency manifests

use crate::assets::GeneratorAssets;
use crate::error::{Error, Result};
use ngscaffold_core::package_json::add_dependencies_to_package_json;
use ngscaffold_core::tasks::TaskQueue;
use ngscaffold_core::types::PackageManager;
use ngscaffold_core::Tree;
use serde::Deserialize;
use std::collections::BTreeMap;
use tracing::debug;

/// Packages an application needs for one Angular major version
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyManifest {
    #[serde(default)]
    pub dependencies: BTreeMap<String, String>,

    #[serde(default)]
    pub dev_dependencies: BTreeMap<String, String>,
}

/// Embedded manifest name for a major version
pub fn manifest_name(major: u64) -> String {
    format!("v{}-package.json", major)
}

/// Load the manifest shipped for `major`
pub fn load_manifest(major: u64) -> Result<DependencyManifest> {
    let name = manifest_name(major);
    let file = GeneratorAssets::get(&name).ok_or_else(|| Error::manifest_not_found(major))?;

    serde_json::from_slice(&file.data).map_err(|e| Error::invalid_manifest(&name, e.to_string()))
}

/// Merge the manifest for `major` into the workspace `package.json`.
///
/// The manifest is resolved before `package.json` is touched. The returned
/// queue holds the install task, if one is needed.
pub fn add_dependencies(
    tree: &mut dyn Tree,
    major: u64,
    package_manager: Option<PackageManager>,
) -> Result<TaskQueue> {
    let manifest = load_manifest(major)?;
    debug!(
        "Manifest {} lists {} dependencies and {} devDependencies",
        manifest_name(major),
        manifest.dependencies.len(),
        manifest.dev_dependencies.len()
    );

    Ok(add_dependencies_to_package_json(
        tree,
        &manifest.dependencies,
        &manifest.dev_dependencies,
        package_manager,
    )?)
}
