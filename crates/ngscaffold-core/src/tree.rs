//! In-memory workspace tree
//!
//! Generators never touch the filesystem directly. Every write or delete is
//! staged on a [`Tree`] and only flushed by [`FsTree::commit`], so the CLI can
//! preview the change set (`--dry-run`) and a failed precondition leaves the
//! workspace untouched.
//!
//! Paths handed to a tree are workspace-relative and always use `/`.

use crate::error::{Error, Result};
use camino::{Utf8Path, Utf8PathBuf};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::fs;
use tracing::debug;

/// Directories never descended into when visiting workspace files
pub const IGNORED_DIRS: &[&str] = &["node_modules", "dist", "tmp", ".git", ".angular", ".nx"];

/// Kind of a staged change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Create,
    Update,
    Delete,
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChangeKind::Create => write!(f, "CREATE"),
            ChangeKind::Update => write!(f, "UPDATE"),
            ChangeKind::Delete => write!(f, "DELETE"),
        }
    }
}

/// A pending change as reported by [`Tree::list_changes`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileChange {
    /// Workspace-relative path
    pub path: String,
    pub kind: ChangeKind,
    /// New content; `None` for deletions
    pub content: Option<Vec<u8>>,
}

/// Mutable view of a workspace
pub trait Tree: fmt::Debug {
    /// Absolute workspace root
    fn root(&self) -> &Utf8Path;

    /// Read a file, returning `None` when it does not exist
    fn read(&self, path: &str) -> Result<Option<Vec<u8>>>;

    /// Read a file as UTF-8 text
    fn read_to_string(&self, path: &str) -> Result<Option<String>> {
        match self.read(path)? {
            Some(bytes) => String::from_utf8(bytes).map(Some).map_err(|_| {
                Error::Io(std::io::Error::new(
                    std::io::ErrorKind::InvalidData,
                    format!("{} is not valid UTF-8", path),
                ))
            }),
            None => Ok(None),
        }
    }

    /// Stage a write
    fn write(&mut self, path: &str, content: Vec<u8>);

    /// Whether a file or directory exists (staged changes included)
    fn exists(&self, path: &str) -> bool;

    /// Whether `path` is a file (staged changes included)
    fn is_file(&self, path: &str) -> bool;

    /// Stage a deletion
    fn delete(&mut self, path: &str);

    /// Names of the direct children of `dir`, sorted
    fn children(&self, dir: &str) -> Vec<String>;

    /// Pending changes, ordered by path
    fn list_changes(&self) -> Vec<FileChange>;
}

/// Normalize a workspace-relative path: `/` separators, no `.` segments,
/// no leading or trailing slash.
pub fn normalize_path(path: &str) -> String {
    let mut parts: Vec<&str> = Vec::new();
    for segment in path.split(['/', '\\']) {
        match segment {
            "" | "." => {}
            ".." => {
                parts.pop();
            }
            s => parts.push(s),
        }
    }
    parts.join("/")
}

/// Collect every file under `dir`, skipping [`IGNORED_DIRS`]
pub fn visit_files(tree: &dyn Tree, dir: &str) -> Vec<String> {
    let mut files = Vec::new();
    collect_files(tree, &normalize_path(dir), &mut files);
    files
}

fn collect_files(tree: &dyn Tree, dir: &str, files: &mut Vec<String>) {
    for child in tree.children(dir) {
        if IGNORED_DIRS.contains(&child.as_str()) {
            continue;
        }
        let path = if dir.is_empty() {
            child
        } else {
            format!("{}/{}", dir, child)
        };
        if tree.is_file(&path) {
            files.push(path);
        } else {
            collect_files(tree, &path, files);
        }
    }
}

#[derive(Debug, Clone)]
enum Staged {
    Write(Vec<u8>),
    Delete,
}

/// [`Tree`] backed by a directory on disk with an in-memory change overlay
#[derive(Debug)]
pub struct FsTree {
    root: Utf8PathBuf,
    changes: BTreeMap<String, Staged>,
}

impl FsTree {
    /// Create a tree rooted at `root`
    pub fn new(root: impl Into<Utf8PathBuf>) -> Self {
        Self {
            root: root.into(),
            changes: BTreeMap::new(),
        }
    }

    fn disk_path(&self, path: &str) -> Utf8PathBuf {
        if path.is_empty() {
            self.root.clone()
        } else {
            self.root.join(path)
        }
    }

    fn has_staged_descendants(&self, dir: &str) -> bool {
        let prefix = format!("{}/", dir);
        self.changes
            .iter()
            .any(|(path, staged)| matches!(staged, Staged::Write(_)) && path.starts_with(&prefix))
    }

    /// Flush every staged change to disk and return what was written
    pub fn commit(&mut self) -> Result<Vec<FileChange>> {
        let changes = self.list_changes();

        for change in &changes {
            let target = self.disk_path(&change.path);
            match change.kind {
                ChangeKind::Create | ChangeKind::Update => {
                    if let Some(parent) = target.parent() {
                        fs::create_dir_all(parent)?;
                    }
                    fs::write(&target, change.content.as_deref().unwrap_or_default())?;
                }
                ChangeKind::Delete => fs::remove_file(&target)?,
            }
            debug!("{} {}", change.kind, change.path);
        }

        self.changes.clear();
        Ok(changes)
    }
}

impl Tree for FsTree {
    fn root(&self) -> &Utf8Path {
        &self.root
    }

    fn read(&self, path: &str) -> Result<Option<Vec<u8>>> {
        let path = normalize_path(path);
        match self.changes.get(&path) {
            Some(Staged::Write(content)) => Ok(Some(content.clone())),
            Some(Staged::Delete) => Ok(None),
            None => {
                let disk = self.disk_path(&path);
                if disk.is_file() {
                    Ok(Some(fs::read(&disk)?))
                } else {
                    Ok(None)
                }
            }
        }
    }

    fn write(&mut self, path: &str, content: Vec<u8>) {
        let path = normalize_path(path);
        debug!("Staging write: {}", path);
        self.changes.insert(path, Staged::Write(content));
    }

    fn exists(&self, path: &str) -> bool {
        let path = normalize_path(path);
        match self.changes.get(&path) {
            Some(Staged::Write(_)) => true,
            Some(Staged::Delete) => false,
            None => self.has_staged_descendants(&path) || self.disk_path(&path).exists(),
        }
    }

    fn is_file(&self, path: &str) -> bool {
        let path = normalize_path(path);
        match self.changes.get(&path) {
            Some(Staged::Write(_)) => true,
            Some(Staged::Delete) => false,
            None => self.disk_path(&path).is_file(),
        }
    }

    fn delete(&mut self, path: &str) {
        let path = normalize_path(path);
        if self.disk_path(&path).is_file() {
            debug!("Staging delete: {}", path);
            self.changes.insert(path, Staged::Delete);
        } else {
            self.changes.remove(&path);
        }
    }

    fn children(&self, dir: &str) -> Vec<String> {
        let dir = normalize_path(dir);
        let prefix = if dir.is_empty() {
            String::new()
        } else {
            format!("{}/", dir)
        };
        let mut names = BTreeSet::new();

        if let Ok(entries) = fs::read_dir(self.disk_path(&dir)) {
            for entry in entries.flatten() {
                let Ok(name) = entry.file_name().into_string() else {
                    continue;
                };
                let child = format!("{}{}", prefix, name);
                if !matches!(self.changes.get(&child), Some(Staged::Delete)) {
                    names.insert(name);
                }
            }
        }

        for (path, staged) in &self.changes {
            if !matches!(staged, Staged::Write(_)) {
                continue;
            }
            if let Some(first) = path
                .strip_prefix(&prefix)
                .and_then(|rest| rest.split('/').next())
            {
                if !first.is_empty() {
                    names.insert(first.to_string());
                }
            }
        }

        names.into_iter().collect()
    }

    fn list_changes(&self) -> Vec<FileChange> {
        self.changes
            .iter()
            .filter_map(|(path, staged)| {
                let on_disk = self.disk_path(path).is_file();
                match staged {
                    Staged::Write(content) => Some(FileChange {
                        path: path.clone(),
                        kind: if on_disk {
                            ChangeKind::Update
                        } else {
                            ChangeKind::Create
                        },
                        content: Some(content.clone()),
                    }),
                    Staged::Delete if on_disk => Some(FileChange {
                        path: path.clone(),
                        kind: ChangeKind::Delete,
                        content: None,
                    }),
                    Staged::Delete => None,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_tree() -> (FsTree, TempDir) {
        let temp = TempDir::new().unwrap();
        let root = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).unwrap();
        (FsTree::new(root), temp)
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path("./apps/demo/"), "apps/demo");
        assert_eq!(normalize_path("apps//demo/./src"), "apps/demo/src");
        assert_eq!(normalize_path("apps/demo/../other"), "apps/other");
        assert_eq!(normalize_path("."), "");
    }

    #[test]
    fn test_staged_write_is_not_on_disk_until_commit() {
        let (mut tree, temp) = temp_tree();
        tree.write("apps/demo/src/main.ts", b"bootstrap();".to_vec());

        assert!(tree.exists("apps/demo/src/main.ts"));
        assert!(tree.exists("apps/demo"));
        assert!(!temp.path().join("apps/demo/src/main.ts").exists());

        let changes = tree.commit().unwrap();
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].kind, ChangeKind::Create);
        assert_eq!(
            std::fs::read_to_string(temp.path().join("apps/demo/src/main.ts")).unwrap(),
            "bootstrap();"
        );
        assert!(tree.list_changes().is_empty());
    }

    #[test]
    fn test_update_and_delete_of_existing_files() {
        let (mut tree, temp) = temp_tree();
        std::fs::write(temp.path().join("package.json"), "{}").unwrap();
        std::fs::write(temp.path().join("old.txt"), "old").unwrap();

        tree.write("package.json", b"{\"name\":\"ws\"}".to_vec());
        tree.delete("old.txt");

        assert!(!tree.exists("old.txt"));
        let changes = tree.list_changes();
        assert_eq!(changes.len(), 2);
        assert_eq!(changes[0].path, "old.txt");
        assert_eq!(changes[0].kind, ChangeKind::Delete);
        assert_eq!(changes[1].kind, ChangeKind::Update);

        tree.commit().unwrap();
        assert!(!temp.path().join("old.txt").exists());
    }

    #[test]
    fn test_delete_of_staged_only_file_drops_the_change() {
        let (mut tree, _temp) = temp_tree();
        tree.write("scratch.txt", b"x".to_vec());
        tree.delete("scratch.txt");
        assert!(tree.list_changes().is_empty());
        assert!(tree.read("scratch.txt").unwrap().is_none());
    }

    #[test]
    fn test_children_merges_disk_and_staged_entries() {
        let (mut tree, temp) = temp_tree();
        std::fs::create_dir_all(temp.path().join("apps/existing")).unwrap();
        tree.write("apps/new-app/project.json", b"{}".to_vec());
        tree.write("apps/new-app/src/main.ts", b"".to_vec());

        assert_eq!(tree.children("apps"), vec!["existing", "new-app"]);
        assert_eq!(tree.children("apps/new-app"), vec!["project.json", "src"]);
    }

    #[test]
    fn test_visit_files_skips_ignored_dirs() {
        let (mut tree, temp) = temp_tree();
        std::fs::create_dir_all(temp.path().join("node_modules/nx")).unwrap();
        std::fs::write(temp.path().join("node_modules/nx/project.json"), "{}").unwrap();
        tree.write("apps/demo/project.json", b"{}".to_vec());
        tree.write("nx.json", b"{}".to_vec());

        let files = visit_files(&tree, "");
        assert_eq!(files, vec!["apps/demo/project.json", "nx.json"]);
    }

    #[test]
    fn test_read_to_string_rejects_invalid_utf8() {
        let (mut tree, _temp) = temp_tree();
        tree.write("favicon.ico", vec![0xff, 0xfe, 0x00]);
        assert!(tree.read_to_string("favicon.ico").is_err());
        assert!(tree.read("favicon.ico").unwrap().is_some());
    }
}
