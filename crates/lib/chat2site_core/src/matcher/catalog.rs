//! Keyword/reply/blueprint catalog: immutable matcher configuration.
//!
//! A catalog is built once (the built-in table, or a YAML file with the same
//! shape), validated, and then shared read-only by every request.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{Blueprint, Category, Language};

/// Errors raised while loading a catalog file.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid catalog: {0}")]
    Invalid(String),
}

/// A value available in every supported language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Localized<T> {
    pub ar: T,
    pub en: T,
}

impl<T> Localized<T> {
    pub fn get(&self, language: Language) -> &T {
        match language {
            Language::Ar => &self.ar,
            Language::En => &self.en,
        }
    }

    fn both(&self) -> [(Language, &T); 2] {
        [(Language::Ar, &self.ar), (Language::En, &self.en)]
    }
}

/// Everything the matcher knows about one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryEntry {
    pub category: Category,
    /// Lowercase substrings that select this category.
    #[serde(default)]
    pub keywords: Vec<String>,
    pub replies: Localized<Vec<String>>,
    pub blueprint: Localized<Blueprint>,
}

impl CategoryEntry {
    fn matches(&self, normalized: &str) -> bool {
        self.keywords.iter().any(|k| normalized.contains(k.as_str()))
    }
}

/// The complete matcher table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Opening-turn replies.
    pub greeting: Localized<Vec<String>>,
    /// Keyword-selected categories, in match priority order.
    pub categories: Vec<CategoryEntry>,
    /// Used when no keyword matches. Must be the general category.
    pub fallback: CategoryEntry,
}

impl Catalog {
    /// The shipped table: restaurant, then tech, then ecommerce, else general.
    pub fn builtin() -> Self {
        super::builtin::catalog()
    }

    /// Read and validate a YAML catalog file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Parse and validate a YAML catalog.
    pub fn from_yaml_str(content: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_yaml::from_str(content)?;
        catalog.validated()
    }

    /// Serialize the catalog as YAML (the format accepted by [`Catalog::load`]).
    pub fn to_yaml(&self) -> Result<String, CatalogError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Classify free text: the first ranked category with a keyword contained
    /// in the lowercased input wins; anything else is the fallback category.
    pub fn classify(&self, input: &str) -> Category {
        let normalized = input.to_lowercase();
        self.categories
            .iter()
            .find(|entry| entry.matches(&normalized))
            .map_or(self.fallback.category, |entry| entry.category)
    }

    /// Look up the entry for a category, falling back to the general entry.
    pub fn entry(&self, category: Category) -> &CategoryEntry {
        self.categories
            .iter()
            .find(|entry| entry.category == category)
            .unwrap_or(&self.fallback)
    }

    /// Check structural invariants and normalize keywords to lowercase.
    pub fn validated(mut self) -> Result<Self, CatalogError> {
        if self.fallback.category != Category::General {
            return Err(invalid(format!(
                "fallback must be the general category, got '{}'",
                self.fallback.category
            )));
        }
        if !self.fallback.keywords.is_empty() {
            return Err(invalid("fallback category cannot have keywords"));
        }
        check_pool("greeting", &self.greeting)?;

        let mut seen = HashSet::new();
        for entry in &mut self.categories {
            if entry.category == Category::General {
                return Err(invalid("general is reserved for the fallback entry"));
            }
            if !seen.insert(entry.category) {
                return Err(invalid(format!("duplicate category '{}'", entry.category)));
            }
            if entry.keywords.is_empty() {
                return Err(invalid(format!("category '{}' has no keywords", entry.category)));
            }
            for keyword in &mut entry.keywords {
                if keyword.trim().is_empty() {
                    return Err(invalid(format!(
                        "category '{}' has a blank keyword",
                        entry.category
                    )));
                }
                *keyword = keyword.to_lowercase();
            }
        }

        for entry in self.categories.iter().chain(std::iter::once(&self.fallback)) {
            check_pool(entry.category.as_str(), &entry.replies)?;
            for (language, blueprint) in entry.blueprint.both() {
                if !is_hex_color(&blueprint.primary_color) {
                    return Err(invalid(format!(
                        "category '{}' ({language}) has invalid color '{}'",
                        entry.category, blueprint.primary_color
                    )));
                }
                if blueprint.title.trim().is_empty() {
                    return Err(invalid(format!(
                        "category '{}' ({language}) has an empty title",
                        entry.category
                    )));
                }
            }
        }

        Ok(self)
    }
}

fn invalid(message: impl Into<String>) -> CatalogError {
    CatalogError::Invalid(message.into())
}

fn check_pool(name: &str, pool: &Localized<Vec<String>>) -> Result<(), CatalogError> {
    for (language, replies) in pool.both() {
        if replies.is_empty() {
            return Err(invalid(format!("'{name}' has no {language} replies")));
        }
    }
    Ok(())
}

/// `#rgb` or `#rrggbb`.
fn is_hex_color(value: &str) -> bool {
    value
        .strip_prefix('#')
        .is_some_and(|hex| matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit()))
}
