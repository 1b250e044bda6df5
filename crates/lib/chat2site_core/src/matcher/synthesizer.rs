//! Preview-data synthesizer: maps input to a fixed page blueprint.

use super::Matcher;
use crate::models::{Category, Language, PreviewData};

impl Matcher {
    /// Blueprint for `input`: the classified category's fixed page for
    /// `language`. Pure: user text only influences which blueprint is chosen.
    pub fn synthesize_preview(&self, input: &str, language: Language) -> PreviewData {
        self.blueprint(self.classify(input), language)
    }

    /// Blueprint of a new, not yet described project.
    pub fn default_preview(&self, language: Language) -> PreviewData {
        self.blueprint(Category::General, language)
    }

    fn blueprint(&self, category: Category, language: Language) -> PreviewData {
        let entry = self.catalog().entry(category);
        entry.blueprint.get(language).to_preview(entry.category)
    }
}
