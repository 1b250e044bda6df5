//! Page blueprint models and the tags that select them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ParseTagError;

/// Reply and blueprint language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Ar,
    #[default]
    En,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Ar => "ar",
            Language::En => "en",
        }
    }

    /// Arabic pages render right-to-left.
    pub fn is_rtl(&self) -> bool {
        matches!(self, Language::Ar)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ar" => Ok(Language::Ar),
            "en" => Ok(Language::En),
            other => Err(ParseTagError::new("language", other)),
        }
    }
}

/// Classification bucket driving both reply and template selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    General,
    Restaurant,
    Tech,
    Ecommerce,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::General,
        Category::Restaurant,
        Category::Tech,
        Category::Ecommerce,
    ];

    /// Database text representation, also used as the template identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::General => "general",
            Category::Restaurant => "restaurant",
            Category::Tech => "tech",
            Category::Ecommerce => "ecommerce",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ParseTagError::new("template", s))
    }
}

/// Structured description of a generated landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewData {
    pub title: String,
    pub subtitle: String,
    /// Accent color as a hex code (e.g. `#dc2626`).
    #[serde(rename = "primaryColor")]
    pub primary_color: String,
    pub sections: Vec<String>,
    pub features: Vec<String>,
    pub template: Category,
}

/// Category-independent part of a [`PreviewData`], as stored in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blueprint {
    pub title: String,
    pub subtitle: String,
    #[serde(alias = "primaryColor")]
    pub primary_color: String,
    pub sections: Vec<String>,
    pub features: Vec<String>,
}

impl Blueprint {
    /// Stamp the blueprint with the template it belongs to.
    pub fn to_preview(&self, template: Category) -> PreviewData {
        PreviewData {
            title: self.title.clone(),
            subtitle: self.subtitle.clone(),
            primary_color: self.primary_color.clone(),
            sections: self.sections.clone(),
            features: self.features.clone(),
            template,
        }
    }
}
