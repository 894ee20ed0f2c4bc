use std::collections::HashSet;
use std::path::Path;

use super::data::{Category, OutfitRecord};
use crate::error::CatalogError;

/// The Catalog holds the fixed list of outfits.
/// It is built once at startup and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    records: Vec<OutfitRecord>,
}

impl Catalog {
    /// Build a catalog from a list of records, keeping their order.
    ///
    /// Fails if two records share an id.
    pub fn from_records(records: Vec<OutfitRecord>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id) {
                return Err(CatalogError::DuplicateId(record.id));
            }
        }

        Ok(Catalog { records })
    }

    /// Load a catalog from a JSON file holding an array of records
    pub fn from_json_file(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json(&json)
    }

    /// Parse a catalog from a JSON array of records
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let records: Vec<OutfitRecord> = serde_json::from_str(json)?;
        Self::from_records(records)
    }

    /// The catalog shipped with the application
    pub fn builtin() -> Self {
        let records = vec![
            outfit(
                1,
                "Casual Chic",
                Category::Casual,
                "/img/edb625cf-d428-4073-864c-850a7853fb71.jpg",
                "4 500 ₽",
                &["повседневный", "комфорт", "стиль"],
                "Relaxed layers for everyday city walks.",
            ),
            outfit(
                2,
                "Business Elegance",
                Category::Business,
                "/img/b9d14ed2-fbd8-4716-b7d4-6c894567ec83.jpg",
                "8 900 ₽",
                &["деловой", "классика", "офис"],
                "A tailored suit that works from meeting to dinner.",
            ),
            outfit(
                3,
                "Active Sport",
                Category::Sport,
                "/img/39919b50-545b-47e0-b94d-ffa29f1ff40a.jpg",
                "3 200 ₽",
                &["спортивный", "активный", "комфорт"],
                "Breathable training set for the gym and the track.",
            ),
            outfit(
                4,
                "Evening Style",
                Category::Evening,
                "/img/edb625cf-d428-4073-864c-850a7853fb71.jpg",
                "12 500 ₽",
                &["вечерний", "элегантный", "праздник"],
                "Statement look for evenings out and celebrations.",
            ),
            outfit(
                5,
                "Urban Casual",
                Category::Casual,
                "/img/b9d14ed2-fbd8-4716-b7d4-6c894567ec83.jpg",
                "5 200 ₽",
                &["городской", "стильный", "молодежный"],
                "Streetwear basics with a modern cut.",
            ),
            outfit(
                6,
                "Smart Business",
                Category::Business,
                "/img/39919b50-545b-47e0-b94d-ffa29f1ff40a.jpg",
                "9 800 ₽",
                &["деловой", "современный", "уверенность"],
                "Smart-casual office wear without the tie.",
            ),
        ];

        Catalog { records }
    }

    /// All records in catalog order
    pub fn records(&self) -> &[OutfitRecord] {
        &self.records
    }

    /// Look up a record by id
    pub fn get(&self, id: u32) -> Option<&OutfitRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Check whether a record with this id exists
    pub fn contains(&self, id: u32) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn outfit(
    id: u32,
    title: &str,
    category: Category,
    image: &str,
    price: &str,
    tags: &[&str],
    description: &str,
) -> OutfitRecord {
    OutfitRecord {
        id,
        title: title.to_string(),
        category,
        image: image.to_string(),
        price: price.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        description: description.to_string(),
    }
}
