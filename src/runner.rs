//! Runs a selection of demos to the terminal, the way each chapter's `main`
//! prints its sections.

use colored::Colorize;

use crate::catalog::{Category, Pattern};
use crate::config::OutputConfig;
use crate::console::{Console, Stdout};
use crate::error::CatalogError;

pub struct Runner {
    color: bool,
    show_source: bool,
}

impl Runner {
    pub fn new(output: &OutputConfig) -> Self {
        Self {
            color: output.color,
            show_source: output.show_source,
        }
    }

    pub fn color(mut self, enabled: bool) -> Self {
        self.color = enabled;
        self
    }

    pub fn show_source(mut self, enabled: bool) -> Self {
        self.show_source = enabled;
        self
    }

    fn heading(&self, text: &str, underline: char) -> String {
        let rule = underline.to_string().repeat(text.chars().count());
        if self.color {
            format!("{}\n{}", text.bold().cyan(), rule.cyan())
        } else {
            format!("{text}\n{rule}")
        }
    }

    fn category_heading(&self, category: Category) -> String {
        self.heading(&format!("{category} Patterns"), '=')
    }

    fn title(&self, pattern: &Pattern) -> String {
        let text = format!("=== {} ===", pattern.name);
        if self.color {
            text.bold().yellow().to_string()
        } else {
            text
        }
    }

    fn mark(&self, passed: bool) -> String {
        match (passed, self.color) {
            (true, true) => "ok".green().to_string(),
            (false, true) => "FAILED".red().to_string(),
            (true, false) => "ok".to_string(),
            (false, false) => "FAILED".to_string(),
        }
    }

    /// Prints one pattern: title, optional listing, then its live output.
    pub fn run_pattern(&self, pattern: &Pattern) {
        tracing::debug!(slug = pattern.slug, category = %pattern.category, "running demo");

        println!("{}", self.title(pattern));
        if self.show_source {
            println!("{}\n", pattern.listing());
        }

        let mut out = Stdout::new(self.color).indented(2);
        pattern.run(&mut out);
        println!();
    }

    /// Prints the selection grouped under a heading per category.
    pub fn run_all(&self, patterns: &[&'static Pattern]) {
        let mut current: Option<Category> = None;
        for pattern in patterns {
            if current != Some(pattern.category) {
                current = Some(pattern.category);
                println!("{}\n", self.category_heading(pattern.category));
            }
            self.run_pattern(pattern);
        }
    }

    /// Runs every pattern against its documented output without printing the
    /// demos, reporting each one as it goes.
    pub fn run_and_verify(&self, patterns: &[&'static Pattern]) -> Vec<CatalogError> {
        let mut failures = Vec::new();
        for pattern in patterns {
            match pattern.verify() {
                Ok(()) => println!("{:<26} {}", pattern.slug, self.mark(true)),
                Err(err) => {
                    tracing::warn!(slug = pattern.slug, error = %err, "output mismatch");
                    println!("{:<26} {}", pattern.slug, self.mark(false));
                    failures.push(err);
                }
            }
        }
        failures
    }
}

impl Default for Runner {
    fn default() -> Self {
        Self::new(&OutputConfig::default())
    }
}

/// Writes a run as one uncoloured transcript: a title line per pattern, then
/// its lines without indentation. Backs `patterns run --plain`.
pub fn run_into(patterns: &[&'static Pattern], out: &mut dyn Console) {
    for pattern in patterns {
        out.log(&format!("=== {} ===", pattern.name));
        pattern.run(out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::console::Transcript;

    #[test]
    fn test_heading_without_color() {
        let runner = Runner::default().color(false);
        assert_eq!(runner.heading("Creational", '='), "Creational\n==========");
    }

    #[test]
    fn test_category_heading_underlines_title() {
        let runner = Runner::default().color(false);
        assert_eq!(
            runner.category_heading(Category::Creational),
            "Creational Patterns\n==================="
        );
    }

    #[test]
    fn test_title_without_color() {
        let runner = Runner::default().color(false);
        let pattern = Catalog::standard().find("proxy").unwrap();
        assert_eq!(runner.title(pattern), "=== Proxy ===");
    }

    #[test]
    fn test_run_into_concatenates_transcripts() {
        let catalog = Catalog::standard();
        let selection = vec![
            catalog.find("strategy").unwrap(),
            catalog.find("proxy").unwrap(),
        ];
        let mut out = Transcript::new();
        run_into(&selection, &mut out);
        assert_eq!(
            out.lines(),
            [
                "=== Strategy ===",
                "50000",
                "42500",
                "32500",
                "=== Proxy ===",
                "Access denied!",
                "Opening car door",
                "Closing the car door",
            ]
        );
    }

    #[test]
    fn test_run_and_verify_standard_catalog() {
        let catalog = Catalog::standard();
        let all: Vec<&'static Pattern> = catalog.iter().collect();
        let failures = Runner::default().color(false).run_and_verify(&all);
        assert!(failures.is_empty());
    }
}
