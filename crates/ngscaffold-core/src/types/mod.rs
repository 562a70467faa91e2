//! Type definitions for ngscaffold configuration and project records

mod project_types;
mod scaffold_config;

pub use project_types::*;
pub use scaffold_config::*;
