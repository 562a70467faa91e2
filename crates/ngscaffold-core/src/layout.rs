//! Workspace layout conventions
//!
//! `nx.json` may pin `workspaceLayout.appsDir` / `libsDir`. Without it the
//! first existing directory out of a conventional list wins, falling back to
//! the workspace root.

use crate::error::{Error, Result};
use crate::tree::{normalize_path, Tree};
use serde::Deserialize;

/// Name of the workspace configuration file
pub const NX_JSON: &str = "nx.json";

/// Resolved layout of a workspace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceLayout {
    pub apps_dir: String,
    pub libs_dir: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NxJson {
    #[serde(default)]
    workspace_layout: Option<NxWorkspaceLayout>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NxWorkspaceLayout {
    apps_dir: Option<String>,
    libs_dir: Option<String>,
}

/// Resolve the apps/libs directories of the workspace
pub fn get_workspace_layout(tree: &dyn Tree) -> Result<WorkspaceLayout> {
    let nx_json = match tree.read_to_string(NX_JSON)? {
        Some(content) => serde_json::from_str::<NxJson>(&content)
            .map_err(|e| Error::invalid_json(NX_JSON, e.to_string()))?,
        None => NxJson::default(),
    };
    let layout = nx_json.workspace_layout.unwrap_or_default();

    let apps_dir = layout
        .apps_dir
        .unwrap_or_else(|| in_order_of(tree, &["apps", "packages"], "."));
    let libs_dir = layout
        .libs_dir
        .unwrap_or_else(|| in_order_of(tree, &["libs", "packages"], "."));

    Ok(WorkspaceLayout { apps_dir, libs_dir })
}

fn in_order_of(tree: &dyn Tree, candidates: &[&str], fallback: &str) -> String {
    candidates
        .iter()
        .find(|dir| tree.exists(dir))
        .map(|dir| dir.to_string())
        .unwrap_or_else(|| fallback.to_string())
}

/// Join path fragments and normalize the result (`./apps` + `demo` → `apps/demo`)
pub fn join_path_fragments(fragments: &[&str]) -> String {
    normalize_path(&fragments.join("/"))
}

/// Relative path from `dir` back to the workspace root, with a trailing `/`
pub fn offset_from_root(dir: &str) -> String {
    normalize_path(dir)
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(|_| "../")
        .collect()
}
