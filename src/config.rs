//! Runner and README settings, read from TOML.
//!
//! Every field has a default, so an empty file, a partial file or no file at
//! all are all valid configurations.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, Category};
use crate::error::{CatalogError, Result};

pub const DEFAULT_CONFIG_PATH: &str = "patterns.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub output: OutputConfig,
    pub run: RunConfig,
    pub readme: ReadmeConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub color: bool,
    pub show_source: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: true,
            show_source: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    pub categories: Vec<Category>,
    /// Explicit slugs or names; when non-empty, `categories` is ignored.
    pub patterns: Vec<String>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            categories: Category::ALL.to_vec(),
            patterns: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReadmeConfig {
    pub title: String,
    pub path: PathBuf,
    pub include_output: bool,
}

impl Default for ReadmeConfig {
    fn default() -> Self {
        Self {
            title: "Design Patterns".to_string(),
            path: PathBuf::from("PATTERNS.md"),
            include_output: true,
        }
    }
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Reads `path`, falling back to defaults when the file does not exist.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(content) => Self::from_toml_str(&content),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            Err(err) => Err(CatalogError::io(path, err)),
        }
    }

    pub fn validate(&self, catalog: &Catalog) -> Result<()> {
        if self.run.categories.is_empty() && self.run.patterns.is_empty() {
            return Err(CatalogError::invalid_config(
                "run.categories",
                "select at least one category or pattern",
            ));
        }
        for name in &self.run.patterns {
            catalog.find(name)?;
        }
        if self.readme.title.trim().is_empty() {
            return Err(CatalogError::invalid_config("readme.title", "must not be empty"));
        }
        Ok(())
    }

    /// Colour is off when `NO_COLOR` is set, whatever the file says.
    pub fn use_color(&self) -> bool {
        self.output.color && std::env::var_os("NO_COLOR").is_none()
    }
}
