//! # ngscaffold-app
//!
//! Generator for Vite/Analog flavoured Angular applications:
//! - Angular version gate (15 and higher)
//! - Option normalization (project name, root, tags)
//! - Version-keyed dependency manifests merged into `package.json`
//! - Project registration with build/serve/lint/test targets
//! - Template materialization and a formatting pass
//!
//! # Example
//!
//! ```no_run
//! use ngscaffold_app::{generate_application, AppGeneratorOptions, GeneratorSettings};
//! use ngscaffold_core::FsTree;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut tree = FsTree::new("/workspace");
//! let options = AppGeneratorOptions::new("demo").with_tags("scope:web");
//! let outcome = generate_application(&mut tree, &options, &GeneratorSettings::default()).await?;
//! tree.commit()?;
//! outcome.tasks.run_in_serial().await?;
//! # Ok(())
//! # }
//! ```

mod assets;
pub mod dependencies;
pub mod error;
pub mod format;
pub mod generator;
pub mod options;
pub mod project;
pub mod templates;
pub mod version_gate;

pub use error::{Error, Result};
pub use generator::{generate_application, GeneratorOutcome, GeneratorSettings};
pub use options::{normalize_options, AppGeneratorOptions, NormalizedOptions};
pub use version_gate::{
    check_angular_version, supported_angular_majors, DEFAULT_ANGULAR_VERSION, MIN_ANGULAR_VERSION,
};
