//! In-memory catalog for the current page session.
//!
//! The store is replaced wholesale on every fetch and never patched in place.

use crate::domain::a001_product::{parse_records, ProductId, ProductRecord};

/// Reserved filter value meaning "no category filter".
pub const ALL_CATEGORIES: &str = "all";

/// Category selection for the shop grid.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(String),
}

impl CategoryFilter {
    /// `"all"` is always the sentinel, never a literal category.
    pub fn parse(value: &str) -> Self {
        if value == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Category(value.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Category(category) => category,
        }
    }

    pub fn matches(&self, record: &ProductRecord) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(category) => record.category == *category,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CatalogStore {
    records: Vec<ProductRecord>,
    /// Tags that always get a UI slot, even with zero products
    supplementary: Vec<String>,
}

impl CatalogStore {
    pub fn new(records: Vec<ProductRecord>, supplementary: Vec<String>) -> Self {
        Self {
            records,
            supplementary,
        }
    }

    pub fn from_csv(raw: &str, supplementary: Vec<String>) -> Self {
        Self::new(parse_records(raw), supplementary)
    }

    /// Swaps in a freshly fetched record set.
    pub fn replace(&mut self, records: Vec<ProductRecord>) {
        self.records = records;
    }

    pub fn all(&self) -> &[ProductRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First record with the given id, in row order.
    pub fn find(&self, id: ProductId) -> Option<&ProductRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    pub fn filter(&self, filter: &CategoryFilter) -> Vec<ProductRecord> {
        self.records
            .iter()
            .filter(|record| filter.matches(record))
            .cloned()
            .collect()
    }

    /// Records of one category; `"all"` returns everything.
    pub fn by_category(&self, category: &str) -> Vec<ProductRecord> {
        self.filter(&CategoryFilter::parse(category))
    }

    /// Categories present in the data (first-seen order) followed by the
    /// supplementary tags not already listed.
    pub fn distinct_categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = Vec::new();
        let present = self.records.iter().map(|record| &record.category);

        for category in present.chain(self.supplementary.iter()) {
            if !categories.contains(category) {
                categories.push(category.clone());
            }
        }

        categories
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: ProductId, category: &str) -> ProductRecord {
        ProductRecord::new(id, category, format!("Item {}", id), 100.0, "")
    }

    fn store() -> CatalogStore {
        CatalogStore::new(
            vec![
                record(1, "whiteboard"),
                record(2, "greenboard"),
                record(3, "whiteboard"),
            ],
            vec!["whiteboard".to_string(), "chess".to_string()],
        )
    }

    #[test]
    fn test_by_category_filters_exactly() {
        let store = store();
        let ids: Vec<ProductId> = store.by_category("whiteboard").iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3]);

        assert!(store.by_category("Whiteboard").is_empty());
        assert!(store.by_category("chess").is_empty());
    }

    #[test]
    fn test_all_sentinel_returns_everything() {
        let store = store();
        assert_eq!(store.by_category(ALL_CATEGORIES), store.all().to_vec());
        assert_eq!(store.filter(&CategoryFilter::All).len(), 3);
    }

    #[test]
    fn test_all_is_never_a_literal_category() {
        let store = CatalogStore::new(vec![record(1, "all"), record(2, "chess")], vec![]);
        assert_eq!(store.by_category("all").len(), 2);
        assert_eq!(CategoryFilter::parse("all"), CategoryFilter::All);
    }

    #[test]
    fn test_distinct_categories_includes_supplementary() {
        let categories = store().distinct_categories();
        assert_eq!(categories, vec!["whiteboard", "greenboard", "chess"]);
    }

    #[test]
    fn test_find_and_replace() {
        let mut store = store();
        assert_eq!(store.find(2).map(|r| r.category.as_str()), Some("greenboard"));
        assert!(store.find(42).is_none());

        store.replace(vec![record(42, "easel")]);
        assert_eq!(store.len(), 1);
        assert!(store.find(2).is_none());
        assert!(store.find(42).is_some());
        assert_eq!(store.distinct_categories(), vec!["easel", "whiteboard", "chess"]);
    }

    #[test]
    fn test_from_csv() {
        let store = CatalogStore::from_csv(
            "id,category,name,price,image\n1,easel,Easel,900,e.png",
            vec![],
        );
        assert_eq!(store.len(), 1);
        assert!(!store.is_empty());
    }
}
