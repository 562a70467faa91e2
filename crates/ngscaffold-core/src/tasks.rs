//! Follow-up tasks produced by generators
//!
//! Generators only stage file changes. Work that has to happen after the tree
//! is flushed (installing packages) is returned as a [`TaskQueue`] and run by
//! the caller, one task at a time.

use crate::error::{Error, Result};
use crate::types::PackageManager;
use camino::Utf8PathBuf;
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, info};

/// A single deferred task
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratorTask {
    /// Run `<package manager> install` in `cwd`
    InstallPackages {
        cwd: Utf8PathBuf,
        package_manager: PackageManager,
    },
}

impl GeneratorTask {
    /// Human-readable description
    pub fn description(&self) -> String {
        match self {
            GeneratorTask::InstallPackages {
                package_manager, ..
            } => format!("{} install", package_manager),
        }
    }

    /// Execute the task
    pub async fn run(&self) -> Result<()> {
        match self {
            GeneratorTask::InstallPackages {
                cwd,
                package_manager,
            } => {
                let program = package_manager.command();
                let program_path =
                    which::which(program).map_err(|_| Error::command_not_found(program))?;

                debug!("Running {} install in {}", program, cwd);
                let output = Command::new(program_path)
                    .arg("install")
                    .current_dir(cwd)
                    .stdin(Stdio::null())
                    .output()
                    .await?;

                if !output.status.success() {
                    let stderr = String::from_utf8_lossy(&output.stderr);
                    return Err(Error::task_failed(self.description(), stderr.trim()));
                }
                Ok(())
            }
        }
    }
}

/// Ordered list of tasks executed strictly one after another
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskQueue {
    tasks: Vec<GeneratorTask>,
}

impl TaskQueue {
    /// Compose tasks for serial execution
    pub fn in_serial(tasks: impl IntoIterator<Item = GeneratorTask>) -> Self {
        Self {
            tasks: tasks.into_iter().collect(),
        }
    }

    /// Queued tasks in execution order
    pub fn tasks(&self) -> &[GeneratorTask] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Run every task in order, stopping at the first failure
    pub async fn run_in_serial(&self) -> Result<()> {
        for task in &self.tasks {
            info!("Running task: {}", task.description());
            task.run().await?;
        }
        Ok(())
    }
}
