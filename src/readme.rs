//! Renders the catalog as a single Markdown document.

use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

use lazy_static::lazy_static;
use regex::Regex;

use crate::catalog::{Catalog, Category, Pattern};
use crate::config::ReadmeConfig;
use crate::error::{CatalogError, Result};

const INTRO: &str = "Classic object-oriented design patterns, grouped as creational, \
structural and behavioral. Every pattern is one small module with toy domain \
objects and a `demo` whose output is shown below its code.";

lazy_static! {
    static ref NOT_ANCHOR: Regex = Regex::new(r"[^a-z0-9 \-]").unwrap();
}

/// GitHub-style heading anchor: lowercase, punctuation dropped, spaces to hyphens.
pub fn anchor(heading: &str) -> String {
    let lower = heading.trim().to_lowercase();
    NOT_ANCHOR.replace_all(&lower, "").replace(' ', "-")
}

pub fn render(config: &ReadmeConfig, catalog: &Catalog) -> String {
    let mut doc = String::new();
    let _ = writeln!(doc, "# {}\n\n{INTRO}\n", config.title);

    doc.push_str("## Contents\n\n");
    for category in Category::ALL {
        let _ = writeln!(doc, "- [{}](#{})", category.title(), anchor(category.title()));
        for pattern in catalog.in_category(category) {
            let _ = writeln!(doc, "  - [{}](#{})", pattern.name, anchor(pattern.name));
        }
    }

    for category in Category::ALL {
        let patterns = catalog.in_category(category);
        if patterns.is_empty() {
            continue;
        }
        let _ = writeln!(doc, "\n## {}\n\n{}", category.title(), category.summary());
        for pattern in patterns {
            render_pattern(&mut doc, pattern, config.include_output);
        }
    }

    doc
}

fn render_pattern(doc: &mut String, pattern: &Pattern, include_output: bool) {
    let _ = writeln!(doc, "\n### {}\n\n{}\n", pattern.name, pattern.summary);
    let _ = writeln!(doc, "```rust\n{}\n```", pattern.listing());

    if include_output {
        let _ = writeln!(doc, "\nOutput:\n\n```text\n{}\n```", pattern.expected.join("\n"));
    }
}

/// Renders and writes the document to `config.path`, returning that path.
pub fn write_readme(config: &ReadmeConfig, catalog: &Catalog) -> Result<PathBuf> {
    let doc = render(config, catalog);
    fs::write(&config.path, doc).map_err(|err| CatalogError::io(&config.path, err))?;
    tracing::info!(path = %config.path.display(), patterns = catalog.len(), "wrote catalog");
    Ok(config.path.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor() {
        assert_eq!(anchor("Chain of Responsibility"), "chain-of-responsibility");
        assert_eq!(anchor("Template Method"), "template-method");
        assert_eq!(anchor("Q&A: Why?"), "qa-why");
    }

    #[test]
    fn test_render_has_every_pattern_once() {
        let catalog = Catalog::standard();
        let doc = render(&ReadmeConfig::default(), &catalog);

        assert!(doc.starts_with("# Design Patterns\n"));
        for pattern in catalog.iter() {
            let heading = format!("\n### {}\n", pattern.name);
            assert_eq!(doc.matches(&heading).count(), 1, "{}", pattern.name);
            assert!(doc.contains(&format!("(#{})", anchor(pattern.name))));
        }
        assert!(!doc.contains("#[cfg(test)]"));
    }

    #[test]
    fn test_render_includes_documented_output() {
        let doc = render(&ReadmeConfig::default(), &Catalog::standard());
        assert!(doc.contains("```text\n50000\n42500\n32500\n```"));
        assert!(doc.contains("33000 Tesla with autopilot with parktronic"));
    }

    #[test]
    fn test_render_without_output() {
        let config = ReadmeConfig {
            include_output: false,
            ..ReadmeConfig::default()
        };
        let doc = render(&config, &Catalog::standard());
        assert!(!doc.contains("```text"));
        assert_eq!(doc.matches("```rust").count(), 22);
    }

    #[test]
    fn test_write_readme() {
        let dir = tempfile::tempdir().unwrap();
        let config = ReadmeConfig {
            title: "Cars".to_string(),
            path: dir.path().join("CATALOG.md"),
            include_output: true,
        };
        let written = write_readme(&config, &Catalog::standard()).unwrap();
        let content = std::fs::read_to_string(written).unwrap();
        assert!(content.starts_with("# Cars\n"));
    }

    #[test]
    fn test_write_readme_bad_directory() {
        let dir = tempfile::tempdir().unwrap();
        let config = ReadmeConfig {
            path: dir.path().join("missing").join("CATALOG.md"),
            ..ReadmeConfig::default()
        };
        let result = write_readme(&config, &Catalog::standard());
        assert!(matches!(result, Err(CatalogError::Io { .. })));
    }
}
