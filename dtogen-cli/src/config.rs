//! Configuration for DTO generation
//!
//! Configuration is loaded from multiple sources with clear precedence:
//!
//! 1. Environment variables (highest priority, `DTOGEN_` prefix, `__` for nesting)
//! 2. `<root>/dtogen.toml`, or the file passed with `--config`
//! 3. Hardcoded defaults (fallback)
//!
//! Command-line flags are applied on top of the merged result.
//!
//! # Example Configuration
//!
//! ```toml
//! # dtogen.toml
//! [paths]
//! source_dir = "src"
//! schema = "{module}/schemas/{module}.schema.ts"
//! dto_dir = "{module}/dto"
//!
//! [templates]
//! override_dir = ".dtogen/templates"
//!
//! [pagination]
//! page_example = 1
//! limit_example = 10
//! ```

use crate::error::{DtoGenError, Result};
use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the project-local config file
pub const CONFIG_FILE_NAME: &str = "dtogen.toml";

/// Placeholder substituted with the module name in path patterns
const MODULE_PLACEHOLDER: &str = "{module}";

/// Source and output path conventions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathSettings {
    /// Directory holding the modules, relative to the project root
    pub source_dir: PathBuf,

    /// Schema file pattern, relative to `source_dir`
    pub schema: String,

    /// DTO output directory pattern, relative to `source_dir`
    pub dto_dir: String,
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("src"),
            schema: "{module}/schemas/{module}.schema.ts".to_string(),
            dto_dir: "{module}/dto".to_string(),
        }
    }
}

/// Template lookup settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateSettings {
    /// Directory with `*.hbs` files replacing the embedded templates
    pub override_dir: Option<PathBuf>,
}

/// Example values for the pagination fields of the filter DTO
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationSettings {
    /// Example shown for `page`
    pub page_example: u32,

    /// Example shown for `limit`
    pub limit_example: u32,
}

impl Default for PaginationSettings {
    fn default() -> Self {
        Self {
            page_example: 1,
            limit_example: 10,
        }
    }
}

/// Complete dtogen configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DtoGenConfig {
    /// Path conventions
    #[serde(default)]
    pub paths: PathSettings,

    /// Template settings
    #[serde(default)]
    pub templates: TemplateSettings,

    /// Pagination examples
    #[serde(default)]
    pub pagination: PaginationSettings,
}

impl DtoGenConfig {
    /// Load configuration for a project
    ///
    /// Reads `<root>/dtogen.toml` when `explicit` is `None`; a missing local
    /// file is not an error. An explicit file must exist.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Default configuration cannot be serialized to TOML
    /// - An explicit config file does not exist
    /// - Configuration file contains invalid TOML or wrongly typed values
    pub fn load(root: &Path, explicit: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::new().merge(Toml::string(&toml::to_string(&Self::default())?));

        match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(DtoGenError::MissingConfig(path.to_path_buf()));
                }
                figment = figment.merge(Toml::file(path));
            }
            None => {
                let local_config = root.join(CONFIG_FILE_NAME);
                if local_config.exists() {
                    tracing::debug!(path = %local_config.display(), "Loading project config");
                    figment = figment.merge(Toml::file(&local_config));
                }
            }
        }

        figment = figment.merge(Env::prefixed("DTOGEN_").split("__").lowercase(true));

        Ok(figment.extract()?)
    }

    /// Resolve the schema file for a module
    #[must_use]
    pub fn schema_path(&self, root: &Path, module: &str) -> PathBuf {
        root.join(&self.paths.source_dir)
            .join(Self::expand(&self.paths.schema, module))
    }

    /// Resolve the DTO output directory for a module
    #[must_use]
    pub fn dto_dir(&self, root: &Path, module: &str) -> PathBuf {
        root.join(&self.paths.source_dir)
            .join(Self::expand(&self.paths.dto_dir, module))
    }

    fn expand(pattern: &str, module: &str) -> String {
        pattern.replace(MODULE_PLACEHOLDER, module)
    }
}
