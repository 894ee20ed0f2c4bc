//! Category + text search filtering of the catalog
//!
//! The visible list is always derived from the full catalog, so it can be
//! recomputed on every keystroke without side effects.

use super::data::{Category, OutfitRecord};

/// Transient filter selection. Not persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Selected category ("all" by default)
    pub category: Category,
    /// Free-text search query ("" by default)
    pub query: String,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_category(&mut self, category: Category) {
        self.category = category;
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Back to "all" with an empty query
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Apply this filter to a list of records
    pub fn apply<'a>(&self, records: &'a [OutfitRecord]) -> Vec<&'a OutfitRecord> {
        filter(records, self.category, &self.query)
    }
}

/// Return the records matching `category` and `query`, in their original order.
///
/// A record matches when the category is `All` or equal to the record's, and
/// the query is empty or a case-insensitive substring of the title or of any tag.
pub fn filter<'a>(records: &'a [OutfitRecord], category: Category, query: &str) -> Vec<&'a OutfitRecord> {
    let needle = query.to_lowercase();

    records
        .iter()
        .filter(|record| matches_category(record, category) && matches_query(record, &needle))
        .collect()
}

fn matches_category(record: &OutfitRecord, category: Category) -> bool {
    category == Category::All || record.category == category
}

/// `needle` must already be lowercased
fn matches_query(record: &OutfitRecord, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }

    record.title.to_lowercase().contains(needle)
        || record.tags.iter().any(|tag| tag.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::catalog::Catalog;

    fn ids(records: &[&OutfitRecord]) -> Vec<u32> {
        records.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_all_empty_query_returns_everything() {
        let catalog = Catalog::builtin();
        let result = filter(catalog.records(), Category::All, "");

        assert_eq!(ids(&result), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_category_only() {
        let catalog = Catalog::builtin();

        assert_eq!(ids(&filter(catalog.records(), Category::Business, "")), vec![2, 6]);
        assert_eq!(ids(&filter(catalog.records(), Category::Sport, "")), vec![3]);
        assert_eq!(ids(&filter(catalog.records(), Category::Evening, "")), vec![4]);
    }

    #[test]
    fn test_query_matches_title_case_insensitively() {
        let catalog = Catalog::builtin();

        assert_eq!(ids(&filter(catalog.records(), Category::All, "casual")), vec![1, 5]);
        assert_eq!(ids(&filter(catalog.records(), Category::All, "CASUAL")), vec![1, 5]);
        assert_eq!(ids(&filter(catalog.records(), Category::All, "eLeGa")), vec![2]);
    }

    #[test]
    fn test_query_matches_tags() {
        let catalog = Catalog::builtin();

        // "комфорт" is a tag on records 1 and 3, not part of any title
        assert_eq!(ids(&filter(catalog.records(), Category::All, "комфорт")), vec![1, 3]);
        assert_eq!(ids(&filter(catalog.records(), Category::All, "ДЕЛОВОЙ")), vec![2, 6]);
    }

    #[test]
    fn test_category_and_query_combine() {
        let catalog = Catalog::builtin();

        assert_eq!(ids(&filter(catalog.records(), Category::Casual, "urban")), vec![5]);
        assert!(filter(catalog.records(), Category::Sport, "business").is_empty());
    }

    #[test]
    fn test_no_results() {
        let catalog = Catalog::builtin();

        assert!(filter(catalog.records(), Category::All, "tuxedo").is_empty());
    }

    #[test]
    fn test_query_is_not_trimmed() {
        let catalog = Catalog::builtin();

        // "Casual Chic" contains "l c", but no title or tag ends with a trailing space
        assert_eq!(ids(&filter(catalog.records(), Category::All, "l c")), vec![1]);
        assert!(filter(catalog.records(), Category::All, "chic ").is_empty());
    }

    #[test]
    fn test_record_with_all_category_only_matches_all() {
        let mut records = Catalog::builtin().records().to_vec();
        records[0].category = Category::All;

        assert_eq!(ids(&filter(&records, Category::All, "")), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(ids(&filter(&records, Category::Casual, "")), vec![5]);
    }

    #[test]
    fn test_matches_predicate_for_every_record() {
        let catalog = Catalog::builtin();
        let queries = ["", "s", "sport", "комф", "Smart", "zzz"];

        for category in Category::ALL {
            for query in queries {
                let result = ids(&filter(catalog.records(), category, query));
                let q = query.to_lowercase();

                for record in catalog.records() {
                    let expected = (category == Category::All || record.category == category)
                        && (q.is_empty()
                            || record.title.to_lowercase().contains(&q)
                            || record.tags.iter().any(|t| t.to_lowercase().contains(&q)));
                    assert_eq!(result.contains(&record.id), expected, "{} / {:?}", category, query);
                }

                // Order preserved: result ids appear in catalog order
                let mut sorted = result.clone();
                sorted.sort_by_key(|id| catalog.records().iter().position(|r| r.id == *id));
                assert_eq!(result, sorted);
            }
        }
    }

    #[test]
    fn test_filter_state() {
        let catalog = Catalog::builtin();
        let mut state = FilterState::new();

        state.select_category(Category::Casual);
        state.set_query("chic");
        assert_eq!(ids(&state.apply(catalog.records())), vec![1]);

        state.reset();
        assert_eq!(state, FilterState::default());
        assert_eq!(state.apply(catalog.records()).len(), 6);
    }
}
