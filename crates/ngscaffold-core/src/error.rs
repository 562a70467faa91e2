//! Error types for ngscaffold-core

use thiserror::Error;

/// Result type alias using ngscaffold-core's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for ngscaffold
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: String },

    /// Invalid configuration format
    #[error("Invalid configuration format: {message}")]
    InvalidConfig { message: String },

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid semver version
    #[error("Invalid version format: {version}")]
    InvalidVersion { version: String },

    /// A file the workspace is expected to contain is missing
    #[error("Cannot find {path} in the workspace")]
    FileNotFound { path: String },

    /// A JSON file exists but does not have the expected shape
    #[error("Invalid JSON in {path}: {message}")]
    InvalidJson { path: String, message: String },

    /// Project name already registered
    #[error("Cannot create project '{name}'. It already exists.")]
    ProjectExists { name: String },

    /// Another project already lives in the target root
    #[error("Cannot create a new project {name} at {root}. A project already exists in this directory.")]
    ProjectRootOccupied { name: String, root: String },

    /// Project not found in the registry
    #[error("Project not found: {name}")]
    ProjectNotFound { name: String },

    /// Required external command is not available
    #[error("Required command not found: {command}")]
    CommandNotFound { command: String },

    /// An external task exited unsuccessfully
    #[error("Task '{task}' failed: {message}")]
    TaskFailed { task: String, message: String },
}

impl Error {
    /// Create a config not found error
    pub fn config_not_found(path: impl Into<String>) -> Self {
        Self::ConfigNotFound { path: path.into() }
    }

    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create an invalid version error
    pub fn invalid_version(version: impl Into<String>) -> Self {
        Self::InvalidVersion {
            version: version.into(),
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create an invalid JSON error
    pub fn invalid_json(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidJson {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a project exists error
    pub fn project_exists(name: impl Into<String>) -> Self {
        Self::ProjectExists { name: name.into() }
    }

    /// Create a project root occupied error
    pub fn project_root_occupied(name: impl Into<String>, root: impl Into<String>) -> Self {
        Self::ProjectRootOccupied {
            name: name.into(),
            root: root.into(),
        }
    }

    /// Create a project not found error
    pub fn project_not_found(name: impl Into<String>) -> Self {
        Self::ProjectNotFound { name: name.into() }
    }

    /// Create a command not found error
    pub fn command_not_found(command: impl Into<String>) -> Self {
        Self::CommandNotFound {
            command: command.into(),
        }
    }

    /// Create a task failed error
    pub fn task_failed(task: impl Into<String>, message: impl Into<String>) -> Self {
        Self::TaskFailed {
            task: task.into(),
            message: message.into(),
        }
    }
}
