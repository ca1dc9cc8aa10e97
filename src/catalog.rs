//! The registry of every pattern: lookup, selection and output verification.

use std::fmt;
use std::str::FromStr;

use itertools::{EitherOrBoth, Itertools};
use serde::{Deserialize, Serialize};

use crate::config::RunConfig;
use crate::console::{Console, Transcript};
use crate::error::{CatalogError, Result};
use crate::{behavioral, creational, structural};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Creational,
    Structural,
    Behavioral,
}

impl Category {
    pub const ALL: [Category; 3] = [
        Category::Creational,
        Category::Structural,
        Category::Behavioral,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Category::Creational => "Creational",
            Category::Structural => "Structural",
            Category::Behavioral => "Behavioral",
        }
    }

    pub fn summary(self) -> &'static str {
        match self {
            Category::Creational => "Patterns concerned with how objects are created.",
            Category::Structural => "Patterns concerned with how objects are composed.",
            Category::Behavioral => "Patterns concerned with how objects collaborate.",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.title())
    }
}

impl FromStr for Category {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "creational" => Ok(Category::Creational),
            "structural" => Ok(Category::Structural),
            "behavioral" | "behavioural" => Ok(Category::Behavioral),
            _ => Err(CatalogError::UnknownCategory(s.to_string())),
        }
    }
}

/// One catalog entry. `expected` is the documented output of `demo`.
#[derive(Clone, Copy, Serialize)]
pub struct Pattern {
    pub slug: &'static str,
    pub name: &'static str,
    pub category: Category,
    pub summary: &'static str,
    #[serde(skip)]
    pub source: &'static str,
    pub expected: &'static [&'static str],
    #[serde(skip)]
    pub demo: fn(&mut dyn Console),
}

impl Pattern {
    pub fn run(&self, out: &mut dyn Console) {
        (self.demo)(out);
    }

    pub fn transcript(&self) -> Vec<String> {
        let mut out = Transcript::new();
        self.run(&mut out);
        out.into_lines()
    }

    /// Runs the demo and reports the first line that differs from the
    /// documented output, including a missing or extra line.
    pub fn verify(&self) -> Result<()> {
        let actual = self.transcript();
        for (index, pair) in actual.iter().zip_longest(self.expected).enumerate() {
            let (got, want) = match pair {
                EitherOrBoth::Both(got, want) if got == *want => continue,
                EitherOrBoth::Both(got, want) => (Some(got.clone()), Some(want.to_string())),
                EitherOrBoth::Left(got) => (Some(got.clone()), None),
                EitherOrBoth::Right(want) => (None, Some(want.to_string())),
            };
            return Err(CatalogError::OutputMismatch {
                slug: self.slug,
                line: index + 1,
                expected: want,
                actual: got,
            });
        }
        Ok(())
    }

    /// The module source without its test module.
    pub fn listing(&self) -> &'static str {
        let code = match self.source.find("#[cfg(test)]") {
            Some(end) => &self.source[..end],
            None => self.source,
        };
        code.trim()
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Pattern")
            .field("slug", &self.slug)
            .field("category", &self.category)
            .field("expected", &self.expected.len())
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone)]
pub struct Catalog {
    patterns: Vec<&'static Pattern>,
}

impl Catalog {
    /// All patterns, creational first, each category in document order.
    pub fn standard() -> Self {
        let patterns = creational::PATTERNS
            .iter()
            .chain(structural::PATTERNS)
            .chain(behavioral::PATTERNS)
            .collect();
        Self { patterns }
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static Pattern> + '_ {
        self.patterns.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn in_category(&self, category: Category) -> Vec<&'static Pattern> {
        self.iter().filter(|p| p.category == category).collect()
    }

    /// Looks a pattern up by slug or display name. Case, spaces and
    /// underscores are ignored.
    pub fn find(&self, query: &str) -> Result<&'static Pattern> {
        let wanted = normalize(query);
        self.iter()
            .find(|p| p.slug == wanted || normalize(p.name) == wanted)
            .ok_or_else(|| CatalogError::unknown_pattern(query, self.suggest(&wanted)))
    }

    fn suggest(&self, wanted: &str) -> Option<&'static str> {
        const MAX_DISTANCE: usize = 3;
        self.iter()
            .map(|p| (levenshtein_distance(wanted, p.slug), p.slug))
            .filter(|(distance, _)| *distance <= MAX_DISTANCE)
            .min_by_key(|(distance, _)| *distance)
            .map(|(_, slug)| slug)
    }

    /// Explicit pattern names win; otherwise every pattern of the listed
    /// categories, in catalog order.
    pub fn select(&self, run: &RunConfig) -> Result<Vec<&'static Pattern>> {
        if !run.patterns.is_empty() {
            return run.patterns.iter().map(|name| self.find(name)).collect();
        }
        Ok(self
            .iter()
            .filter(|p| run.categories.contains(&p.category))
            .collect())
    }

    /// Every mismatch between a demo and its documented output.
    pub fn verify_all(&self) -> Vec<CatalogError> {
        self.iter().filter_map(|p| p.verify().err()).collect()
    }

    pub fn to_json(&self, category: Option<Category>) -> Result<String> {
        let entries: Vec<&Pattern> = self
            .iter()
            .filter(|p| category.map_or(true, |c| p.category == c))
            .collect();
        Ok(serde_json::to_string_pretty(&entries)?)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

fn normalize(query: &str) -> String {
    query
        .trim()
        .to_lowercase()
        .replace([' ', '_'], "-")
}

pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    let mut previous: Vec<usize> = (0..=b_chars.len()).collect();

    for (i, a_char) in a.chars().enumerate() {
        let mut current = vec![i + 1; b_chars.len() + 1];
        for (j, b_char) in b_chars.iter().enumerate() {
            let cost = usize::from(a_char != *b_char);
            current[j + 1] = (previous[j + 1] + 1)
                .min(current[j] + 1)
                .min(previous[j] + cost);
        }
        previous = current;
    }

    previous[b_chars.len()]
}
