use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Unknown pattern '{name}'{}", did_you_mean(.suggestion))]
    UnknownPattern {
        name: String,
        suggestion: Option<&'static str>,
    },

    #[error("Unknown category '{0}': expected creational, structural or behavioral")]
    UnknownCategory(String),

    #[error("Pattern '{slug}' output differs at line {line}: expected {expected:?}, got {actual:?}")]
    OutputMismatch {
        slug: &'static str,
        line: usize,
        expected: Option<String>,
        actual: Option<String>,
    },

    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Invalid value for '{field}': {reason}")]
    InvalidConfig { field: String, reason: String },

    #[error("Failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize catalog: {0}")]
    Json(#[from] serde_json::Error),
}

impl CatalogError {
    pub fn unknown_pattern(name: impl Into<String>, suggestion: Option<&'static str>) -> Self {
        Self::UnknownPattern {
            name: name.into(),
            suggestion,
        }
    }

    pub fn invalid_config(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

fn did_you_mean(suggestion: &Option<&'static str>) -> String {
    suggestion
        .map(|s| format!(" (did you mean '{s}'?)"))
        .unwrap_or_default()
}

pub type Result<T> = std::result::Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_pattern_with_suggestion() {
        let error = CatalogError::unknown_pattern("stratgy", Some("strategy"));
        let display = error.to_string();
        assert!(display.contains("'stratgy'"));
        assert!(display.contains("did you mean 'strategy'?"));
    }

    #[test]
    fn test_unknown_pattern_without_suggestion() {
        let error = CatalogError::unknown_pattern("monad", None);
        assert_eq!(error.to_string(), "Unknown pattern 'monad'");
    }

    #[test]
    fn test_output_mismatch_display() {
        let error = CatalogError::OutputMismatch {
            slug: "strategy",
            line: 2,
            expected: Some("42500".to_string()),
            actual: None,
        };
        let display = error.to_string();
        assert!(display.contains("strategy"));
        assert!(display.contains("line 2"));
        assert!(display.contains("Some(\"42500\")"));
    }

    #[test]
    fn test_io_error_keeps_path() {
        let source = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let error = CatalogError::io("patterns.toml", source);
        assert!(error.to_string().contains("patterns.toml"));
    }
}
