//! Keyword matcher.
//!
//! Classifies free text into a [`Category`] by substring search and derives
//! both the chat reply ([`selector`]) and the page blueprint
//! ([`synthesizer`]) from that single classification, so a turn's reply and
//! preview always belong to the same category.

mod builtin;
pub mod catalog;
pub mod selector;
pub mod synthesizer;

use std::path::Path;
use std::sync::Arc;

pub use catalog::{Catalog, CatalogError, CategoryEntry, Localized};

use crate::models::Category;

/// Cheap-to-clone handle on a shared, immutable [`Catalog`].
#[derive(Debug, Clone)]
pub struct Matcher {
    catalog: Arc<Catalog>,
}

impl Matcher {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// Matcher over the built-in catalog.
    pub fn builtin() -> Self {
        Self::new(Arc::new(Catalog::builtin()))
    }

    /// Matcher over a validated YAML catalog file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        Ok(Self::new(Arc::new(Catalog::load(path)?)))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Category for `input`; general when nothing matches.
    pub fn classify(&self, input: &str) -> Category {
        self.catalog.classify(input)
    }
}
