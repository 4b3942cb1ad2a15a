use crate::domain::a001_product::ui::card::{grid_cards, CardDescriptor};
use contracts::domain::a001_product::ProductRecord;
use contracts::domain::a002_catalog::CatalogStore;
use contracts::shared::config::SiteConfig;

/// One category block of the home page.
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySection {
    pub category: String,
    pub title: String,
    pub cards: Vec<CardDescriptor>,
    /// False hides the section instead of leaving an empty grid
    pub show: bool,
}

/// A section per known category, capped at `home_card_limit` cards each.
pub fn home_view(
    catalog: &CatalogStore,
    favorites: &[ProductRecord],
    config: &SiteConfig,
) -> Vec<CategorySection> {
    let limit = config.catalog.home_card_limit;

    catalog
        .distinct_categories()
        .into_iter()
        .map(|category| {
            let list: Vec<ProductRecord> = catalog
                .by_category(&category)
                .into_iter()
                .take(limit)
                .collect();
            let cards = grid_cards(&list, favorites, config);

            CategorySection {
                title: category_title(&category),
                show: !cards.is_empty(),
                category,
                cards,
            }
        })
        .collect()
}

/// Orders sections by the page's slots. Categories without a slot are
/// reported and left out.
pub fn arrange_sections(sections: Vec<CategorySection>, slots: &[String]) -> Vec<CategorySection> {
    for section in &sections {
        if !slots.contains(&section.category) {
            log::warn!(
                "Category found in sheet: \"{}\", but the home page has no section for it",
                section.category
            );
        }
    }

    slots
        .iter()
        .filter_map(|slot| sections.iter().find(|s| &s.category == slot).cloned())
        .collect()
}

/// `"noticeboard"` -> `"Noticeboard"`.
pub fn category_title(category: &str) -> String {
    let mut chars = category.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(category: &str, count: i64, start_id: i64) -> Vec<ProductRecord> {
        (0..count)
            .map(|n| ProductRecord::new(start_id + n, category, format!("{} {}", category, n), 100.0, ""))
            .collect()
    }

    fn config() -> SiteConfig {
        SiteConfig::default()
    }

    #[test]
    fn test_sections_are_capped_at_four() {
        let mut all = records("whiteboard", 9, 1);
        all.extend(records("chess", 2, 100));
        let catalog = CatalogStore::new(all, config().catalog.supplementary_categories);

        let sections = home_view(&catalog, &[], &config());
        assert!(sections.iter().all(|s| s.cards.len() <= 4));

        let whiteboard = sections.iter().find(|s| s.category == "whiteboard").unwrap();
        assert_eq!(whiteboard.cards.len(), 4);
        let ids: Vec<i64> = whiteboard.cards.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);

        let chess = sections.iter().find(|s| s.category == "chess").unwrap();
        assert_eq!(chess.cards.len(), 2);
    }

    #[test]
    fn test_empty_known_categories_are_hidden() {
        let catalog = CatalogStore::new(records("easel", 1, 1), config().catalog.supplementary_categories);
        let sections = home_view(&catalog, &[], &config());

        assert_eq!(sections.len(), 8);
        for section in &sections {
            assert_eq!(section.show, section.category == "easel");
        }
    }

    #[test]
    fn test_unknown_category_gets_section() {
        let catalog = CatalogStore::new(records("stand", 1, 1), vec!["chess".to_string()]);
        let sections = home_view(&catalog, &[], &config());

        let categories: Vec<&str> = sections.iter().map(|s| s.category.as_str()).collect();
        assert_eq!(categories, vec!["stand", "chess"]);
        assert!(sections[0].show);
        assert!(!sections[1].show);
    }

    #[test]
    fn test_arrange_sections_follows_slots() {
        let catalog = CatalogStore::new(
            records("stand", 1, 1),
            vec!["chess".to_string(), "easel".to_string()],
        );
        let sections = home_view(&catalog, &[], &config());
        let slots = vec!["easel".to_string(), "chess".to_string(), "carrom".to_string()];

        let arranged = arrange_sections(sections, &slots);
        let categories: Vec<&str> = arranged.iter().map(|s| s.category.as_str()).collect();
        assert_eq!(categories, vec!["easel", "chess"]);
    }

    #[test]
    fn test_category_title() {
        assert_eq!(category_title("noticeboard"), "Noticeboard");
        assert_eq!(category_title(""), "");
    }
}
