//! Integration tests for the workspace layer: staged changes, commit,
//! registry discovery and version lookup against a real directory.

use camino::Utf8PathBuf;
use ngscaffold_core::layout::get_workspace_layout;
use ngscaffold_core::package_json::add_dependencies_to_package_json;
use ngscaffold_core::registry::{add_project_configuration, get_projects};
use ngscaffold_core::types::{ProjectConfiguration, ProjectType};
use ngscaffold_core::version::get_installed_angular_version;
use ngscaffold_core::{ChangeKind, Error, FsTree, Tree};
use std::collections::BTreeMap;
use std::fs;
use tempfile::TempDir;

fn workspace(files: &[(&str, &str)]) -> (Utf8PathBuf, TempDir) {
    let temp = TempDir::new().unwrap();
    let root = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).unwrap();
    for (path, content) in files {
        let target = root.join(path);
        fs::create_dir_all(target.parent().unwrap()).unwrap();
        fs::write(target, content).unwrap();
    }
    (root, temp)
}

#[test]
fn test_commit_reports_create_update_delete() {
    let (root, _temp) = workspace(&[("package.json", "{}"), ("old.txt", "bye")]);
    let mut tree = FsTree::new(root.clone());

    tree.write("package.json", b"{\"name\":\"ws\"}".to_vec());
    tree.write("apps/demo/src/main.ts", b"console.log(1);".to_vec());
    tree.delete("old.txt");

    let changes = tree.commit().unwrap();
    let summary: Vec<(&str, ChangeKind)> = changes
        .iter()
        .map(|c| (c.path.as_str(), c.kind))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("apps/demo/src/main.ts", ChangeKind::Create),
            ("old.txt", ChangeKind::Delete),
            ("package.json", ChangeKind::Update),
        ]
    );

    assert!(root.join("apps/demo/src/main.ts").is_file());
    assert!(!root.join("old.txt").exists());
    assert!(tree.list_changes().is_empty());
}

#[test]
fn test_registry_skips_ignored_directories() {
    let (root, _temp) = workspace(&[
        ("apps/web/project.json", r#"{"name":"web","root":"apps/web"}"#),
        (
            "node_modules/some-lib/project.json",
            r#"{"name":"vendored","root":"node_modules/some-lib"}"#,
        ),
    ]);
    let mut tree = FsTree::new(root);

    let config = ProjectConfiguration::new("apps/admin", ProjectType::Application);
    add_project_configuration(&mut tree, "admin", &config).unwrap();

    let projects = get_projects(&tree).unwrap();
    let names: Vec<&String> = projects.keys().collect();
    assert_eq!(names, vec!["admin", "web"]);

    let err = add_project_configuration(&mut tree, "web", &config).unwrap_err();
    assert!(matches!(err, Error::ProjectRootOccupied { .. }));
}

#[test]
fn test_layout_and_version_from_disk() {
    let (root, _temp) = workspace(&[
        ("packages/.gitkeep", ""),
        ("package.json", r#"{"dependencies":{"@angular/core":"^15.2.0"}}"#),
    ]);
    let tree = FsTree::new(root);

    let layout = get_workspace_layout(&tree).unwrap();
    assert_eq!(layout.apps_dir, "packages");
    assert_eq!(layout.libs_dir, "packages");

    let version = get_installed_angular_version(&tree, "16.0.0-next.0").unwrap();
    assert_eq!(version.to_string(), "15.2.0");
}

#[test]
fn test_missing_package_json_is_an_error() {
    let (root, _temp) = workspace(&[]);
    let mut tree = FsTree::new(root);

    assert!(matches!(
        get_installed_angular_version(&tree, "16.0.0-next.0"),
        Err(Error::FileNotFound { .. })
    ));

    let deps = BTreeMap::from([("vite".to_string(), "^4.3.9".to_string())]);
    assert!(add_dependencies_to_package_json(&mut tree, &deps, &BTreeMap::new(), None).is_err());
}
