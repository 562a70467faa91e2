//! Common test utilities for ngscaffold-app
//!
//! Provides throwaway workspaces on disk with a root `package.json` and an
//! `apps/` directory.

#![allow(dead_code)]

use camino::Utf8PathBuf;
use ngscaffold_core::FsTree;
use serde_json::{json, Value};
use std::fs;
use tempfile::TempDir;

/// A workspace living in a temporary directory
pub struct TestWorkspace {
    pub root: Utf8PathBuf,
    _temp: TempDir,
}

impl TestWorkspace {
    /// Workspace pinning `@angular/core` to `angular_version`
    pub fn with_angular(angular_version: &str) -> Self {
        Self::with_package_json(json!({
            "name": "workspace",
            "dependencies": { "@angular/core": angular_version },
            "devDependencies": { "nx": "16.1.0" },
        }))
    }

    /// Workspace without an `@angular/core` entry
    pub fn unpinned() -> Self {
        Self::with_package_json(json!({ "name": "workspace" }))
    }

    pub fn with_package_json(package_json: Value) -> Self {
        let temp = TempDir::new().unwrap();
        let root = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).unwrap();
        fs::create_dir_all(root.join("apps")).unwrap();
        fs::write(
            root.join("package.json"),
            serde_json::to_string_pretty(&package_json).unwrap(),
        )
        .unwrap();

        Self { root, _temp: temp }
    }

    pub fn tree(&self) -> FsTree {
        FsTree::new(self.root.clone())
    }

    /// Read a committed file
    pub fn read(&self, path: &str) -> String {
        fs::read_to_string(self.root.join(path)).unwrap()
    }

    pub fn read_json(&self, path: &str) -> Value {
        serde_json::from_str(&self.read(path)).unwrap()
    }

    pub fn exists(&self, path: &str) -> bool {
        self.root.join(path).exists()
    }

    /// Write a file to disk, creating parent directories
    pub fn write(&self, path: &str, content: &str) {
        let path = self.root.join(path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }
}
