//! Shared data structures for the application state
//!
//! These structs represent the catalog model that flows between
//! the state layer and the UI layer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outfit category, also used as the category filter selection
///
/// `All` is the "no category restriction" selection. A record may carry it
/// too, in which case it only shows up while "all" is selected.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    All,
    Casual,
    Business,
    Sport,
    Evening,
}

impl Category {
    /// Every category in category-bar order
    pub const ALL: [Category; 5] = [
        Category::All,
        Category::Casual,
        Category::Business,
        Category::Sport,
        Category::Evening,
    ];

    /// Stable lowercase key (matches the serialized form)
    pub fn key(self) -> &'static str {
        match self {
            Category::All => "all",
            Category::Casual => "casual",
            Category::Business => "business",
            Category::Sport => "sport",
            Category::Evening => "evening",
        }
    }

    /// Label shown on the category bar
    pub fn label(self) -> &'static str {
        match self {
            Category::All => "Все образы",
            Category::Casual => "Casual",
            Category::Business => "Business",
            Category::Sport => "Спорт",
            Category::Evening => "Вечерний",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A single outfit in the catalog
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct OutfitRecord {
    /// Unique, stable id
    pub id: u32,
    /// Display title (e.g., "Casual Chic")
    pub title: String,
    pub category: Category,
    /// Opaque image reference, resolved against the asset directory
    pub image: String,
    /// Display-formatted price (e.g., "4 500 ₽"), never parsed
    pub price: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub description: String,
}
