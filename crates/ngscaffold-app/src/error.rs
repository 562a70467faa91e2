//! Error types for ngscaffold-app

use thiserror::Error;

/// Result type alias using ngscaffold-app's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application generator error types
#[derive(Error, Debug)]
pub enum Error {
    /// Installed Angular is older than the supported minimum
    #[error("AnalogJs only supports an Angular version of 15 and higher (found {installed})")]
    UnsupportedAngularVersion { installed: String },

    /// No dependency manifest is shipped for this major version
    #[error("No dependency manifest for Angular v{major} (expected v{major}-package.json)")]
    ManifestNotFound { major: u64 },

    /// Shipped manifest does not parse
    #[error("Invalid dependency manifest {name}: {message}")]
    InvalidManifest { name: String, message: String },

    /// No template directory is shipped for this major version
    #[error("No application template for Angular v{major} (expected template-angular-v{major})")]
    TemplateNotFound { major: u64 },

    /// A `__key__` path segment names a value missing from the context
    #[error("Unknown token '__{token}__' in template path: {path}")]
    UnknownTemplateToken { token: String, path: String },

    /// Template rendering error
    #[error("Template rendering failed for {path}: {message}")]
    TemplateRender { path: String, message: String },

    /// Generator input rejected
    #[error("Invalid options: {message}")]
    InvalidOptions { message: String },

    /// Error from the workspace layer
    #[error(transparent)]
    Core(#[from] ngscaffold_core::Error),

    /// Template error from Tera
    #[error("Template error: {0}")]
    Tera(#[from] tera::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create an unsupported version error
    pub fn unsupported_angular_version(installed: impl Into<String>) -> Self {
        Self::UnsupportedAngularVersion {
            installed: installed.into(),
        }
    }

    pub fn manifest_not_found(major: u64) -> Self {
        Self::ManifestNotFound { major }
    }

    pub fn invalid_manifest(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidManifest {
            name: name.into(),
            message: message.into(),
        }
    }

    pub fn template_not_found(major: u64) -> Self {
        Self::TemplateNotFound { major }
    }

    /// Create an unknown path token error
    pub fn unknown_template_token(token: impl Into<String>, path: impl Into<String>) -> Self {
        Self::UnknownTemplateToken {
            token: token.into(),
            path: path.into(),
        }
    }

    /// Create a template render error
    pub fn template_render(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::TemplateRender {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an invalid options error
    pub fn invalid_options(message: impl Into<String>) -> Self {
        Self::InvalidOptions {
            message: message.into(),
        }
    }
}
