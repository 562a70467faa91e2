//! # ngscaffold-core
//!
//! Core library for the ngscaffold CLI providing:
//! - An in-memory workspace tree that stages file changes before they hit disk
//! - The project registry (`project.json` files) and `package.json` helpers
//! - Workspace layout conventions and naming utilities
//! - Hierarchical configuration loading (embedded defaults, user file, env)
//! - Installed Angular version lookup

pub mod config;
pub mod error;
pub mod layout;
pub mod names;
pub mod package_json;
pub mod registry;
pub mod tasks;
pub mod tree;
pub mod types;
pub mod version;

pub use config::HierarchicalConfigLoader;
pub use error::{Error, Result};
pub use tree::{ChangeKind, FileChange, FsTree, Tree};
