//! Workspace `package.json` access and dependency merging

use crate::error::{Error, Result};
use crate::tasks::{GeneratorTask, TaskQueue};
use crate::tree::Tree;
use crate::types::PackageManager;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Root manifest file name
pub const PACKAGE_JSON: &str = "package.json";

/// Read and parse a JSON file from the tree
pub fn read_json(tree: &dyn Tree, path: &str) -> Result<Value> {
    let content = tree
        .read_to_string(path)?
        .ok_or_else(|| Error::file_not_found(path))?;
    serde_json::from_str(&content).map_err(|e| Error::invalid_json(path, e.to_string()))
}

/// Serialize `value` as pretty JSON with a trailing newline and stage it
pub fn write_json<T: Serialize + ?Sized>(tree: &mut dyn Tree, path: &str, value: &T) -> Result<()> {
    let mut content = serde_json::to_string_pretty(value)?;
    content.push('\n');
    tree.write(path, content.into_bytes());
    Ok(())
}

/// Read the root `package.json`
pub fn read_package_json(tree: &dyn Tree) -> Result<Value> {
    read_json(tree, PACKAGE_JSON)
}

/// Pick the package manager from the lock file present in the workspace
pub fn detect_package_manager(tree: &dyn Tree) -> PackageManager {
    if tree.exists("pnpm-lock.yaml") {
        PackageManager::Pnpm
    } else if tree.exists("yarn.lock") {
        PackageManager::Yarn
    } else {
        PackageManager::Npm
    }
}

/// Merge `dependencies` and `dev_dependencies` into the root `package.json`.
///
/// A package already listed in the other section is left where it is. When
/// anything was added the returned queue holds an install task; otherwise it
/// is empty.
pub fn add_dependencies_to_package_json(
    tree: &mut dyn Tree,
    dependencies: &BTreeMap<String, String>,
    dev_dependencies: &BTreeMap<String, String>,
    package_manager: Option<PackageManager>,
) -> Result<TaskQueue> {
    let mut package_json = read_package_json(tree)?;
    let root = package_json
        .as_object_mut()
        .ok_or_else(|| Error::invalid_json(PACKAGE_JSON, "expected a top-level object"))?;

    let deps = filter_existing(dependencies, root.get("devDependencies"));
    let dev_deps = filter_existing(dev_dependencies, root.get("dependencies"));

    let needs_deps = requires_adding(root.get("dependencies"), &deps);
    let needs_dev_deps = requires_adding(root.get("devDependencies"), &dev_deps);

    if !needs_deps && !needs_dev_deps {
        debug!("All requested packages are already present in {}", PACKAGE_JSON);
        return Ok(TaskQueue::default());
    }

    merge_section(root, "dependencies", &deps)?;
    merge_section(root, "devDependencies", &dev_deps)?;
    write_json(tree, PACKAGE_JSON, &package_json)?;

    let package_manager = package_manager.unwrap_or_else(|| detect_package_manager(tree));
    info!(
        "Added {} dependencies and {} devDependencies, install with {}",
        deps.len(),
        dev_deps.len(),
        package_manager
    );

    Ok(TaskQueue::in_serial(vec![GeneratorTask::InstallPackages {
        cwd: tree.root().to_owned(),
        package_manager,
    }]))
}

fn filter_existing(
    requested: &BTreeMap<String, String>,
    other_section: Option<&Value>,
) -> BTreeMap<String, String> {
    requested
        .iter()
        .filter(|(name, _)| {
            other_section
                .and_then(|section| section.get(name.as_str()))
                .is_none()
        })
        .map(|(name, version)| (name.clone(), version.clone()))
        .collect()
}

fn requires_adding(section: Option<&Value>, requested: &BTreeMap<String, String>) -> bool {
    requested.iter().any(|(name, version)| {
        section
            .and_then(|s| s.get(name.as_str()))
            .and_then(|v| v.as_str())
            != Some(version.as_str())
    })
}

fn merge_section(
    root: &mut Map<String, Value>,
    key: &str,
    additions: &BTreeMap<String, String>,
) -> Result<()> {
    let mut merged: BTreeMap<String, Value> = match root.get(key) {
        Some(Value::Object(existing)) => existing
            .iter()
            .map(|(name, version)| (name.clone(), version.clone()))
            .collect(),
        Some(Value::Null) | None => BTreeMap::new(),
        Some(_) => {
            return Err(Error::invalid_json(
                PACKAGE_JSON,
                format!("'{}' must be an object", key),
            ))
        }
    };

    for (name, version) in additions {
        merged.insert(name.clone(), Value::String(version.clone()));
    }

    if merged.is_empty() && !root.contains_key(key) {
        return Ok(());
    }

    root.insert(key.to_string(), Value::Object(merged.into_iter().collect()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::FsTree;
    use camino::Utf8PathBuf;
    use tempfile::TempDir;

    fn tree_with(files: &[(&str, &str)]) -> (FsTree, TempDir) {
        let temp = TempDir::new().unwrap();
        let root = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).unwrap();
        let mut tree = FsTree::new(root);
        for (path, content) in files {
            tree.write(path, content.as_bytes().to_vec());
        }
        (tree, temp)
    }

    fn map(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_adds_and_sorts_dependencies() {
        let (mut tree, _temp) = tree_with(&[(
            PACKAGE_JSON,
            r#"{"name":"ws","dependencies":{"zone.js":"~0.13.0"}}"#,
        )]);

        let tasks = add_dependencies_to_package_json(
            &mut tree,
            &map(&[("@analogjs/router", "^0.2.0")]),
            &map(&[("vite", "^4.3.0")]),
            None,
        )
        .unwrap();

        assert_eq!(tasks.len(), 1);
        let json = read_package_json(&tree).unwrap();
        let deps: Vec<&String> = json["dependencies"].as_object().unwrap().keys().collect();
        assert_eq!(deps, vec!["@analogjs/router", "zone.js"]);
        assert_eq!(json["devDependencies"]["vite"], "^4.3.0");
        assert_eq!(json["name"], "ws");
    }

    #[test]
    fn test_skips_packages_listed_in_the_other_section() {
        let (mut tree, _temp) = tree_with(&[(
            PACKAGE_JSON,
            r#"{"devDependencies":{"marked":"^4.0.0"}}"#,
        )]);

        add_dependencies_to_package_json(
            &mut tree,
            &map(&[("marked", "^4.2.4"), ("prismjs", "^1.29.0")]),
            &BTreeMap::new(),
            Some(PackageManager::Npm),
        )
        .unwrap();

        let json = read_package_json(&tree).unwrap();
        assert!(json["dependencies"].get("marked").is_none());
        assert_eq!(json["dependencies"]["prismjs"], "^1.29.0");
        assert_eq!(json["devDependencies"]["marked"], "^4.0.0");
    }

    #[test]
    fn test_no_task_when_everything_is_present() {
        let (mut tree, _temp) = tree_with(&[(
            PACKAGE_JSON,
            r#"{"dependencies":{"prismjs":"^1.29.0"}}"#,
        )]);

        let tasks = add_dependencies_to_package_json(
            &mut tree,
            &map(&[("prismjs", "^1.29.0")]),
            &BTreeMap::new(),
            None,
        )
        .unwrap();

        assert!(tasks.is_empty());
        assert!(tree.list_changes().iter().all(|c| c.path == PACKAGE_JSON));
    }

    #[test]
    fn test_detect_package_manager_from_lock_files() {
        let (tree, _temp) = tree_with(&[("pnpm-lock.yaml", "")]);
        assert_eq!(detect_package_manager(&tree), PackageManager::Pnpm);

        let (tree, _temp) = tree_with(&[("yarn.lock", "")]);
        assert_eq!(detect_package_manager(&tree), PackageManager::Yarn);

        let (tree, _temp) = tree_with(&[]);
        assert_eq!(detect_package_manager(&tree), PackageManager::Npm);
    }

    #[test]
    fn test_install_task_uses_override() {
        let (mut tree, _temp) = tree_with(&[(PACKAGE_JSON, "{}"), ("yarn.lock", "")]);
        let tasks = add_dependencies_to_package_json(
            &mut tree,
            &map(&[("vite", "^4.3.0")]),
            &BTreeMap::new(),
            Some(PackageManager::Pnpm),
        )
        .unwrap();

        match &tasks.tasks()[0] {
            GeneratorTask::InstallPackages {
                package_manager, ..
            } => assert_eq!(*package_manager, PackageManager::Pnpm),
        }
    }

    #[test]
    fn test_rejects_non_object_sections() {
        let (mut tree, _temp) = tree_with(&[(PACKAGE_JSON, r#"{"dependencies":[]}"#)]);
        let result = add_dependencies_to_package_json(
            &mut tree,
            &map(&[("vite", "^4.3.0")]),
            &BTreeMap::new(),
            None,
        );
        assert!(matches!(result, Err(Error::InvalidJson { .. })));
    }
}
