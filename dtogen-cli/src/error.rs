//! Error types for DTO generation

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while locating, reading, or rendering a module's DTOs
#[derive(Debug, Error)]
pub enum DtoGenError {
    /// Module name cannot be used to build paths or class names
    #[error("Invalid module name: '{0}'. Use letters, digits, '-' or '_', starting with a letter")]
    InvalidModuleName(String),

    /// Schema file does not exist at the conventional location
    #[error("Schema not found at: {}", .0.display())]
    MissingSchema(PathBuf),

    /// Explicitly requested config file does not exist
    #[error("Config file not found: {}", .0.display())]
    MissingConfig(PathBuf),

    /// Template override directory does not exist
    #[error("Template directory not found: {}", .0.display())]
    MissingTemplateDir(PathBuf),

    /// Configuration could not be merged or extracted
    #[error("Configuration error: {0}")]
    Config(#[from] figment::Error),

    /// Default configuration could not be serialized
    #[error("Failed to serialize default configuration: {0}")]
    DefaultConfig(#[from] toml::ser::Error),

    /// Template source failed to parse
    #[error("Template error: {0}")]
    Template(#[from] handlebars::TemplateError),

    /// Template failed to render against the field metadata
    #[error("Render error: {0}")]
    Render(#[from] handlebars::RenderError),

    /// Filesystem error
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        /// Path being read or written
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
}

impl DtoGenError {
    /// Wrap an I/O error with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result alias for DTO generation
pub type Result<T> = std::result::Result<T, DtoGenError>;
