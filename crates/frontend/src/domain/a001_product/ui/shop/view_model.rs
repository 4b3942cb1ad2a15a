use crate::domain::a001_product::ui::card::{grid_cards, CardDescriptor};
use crate::shared::empty_state::EmptyState;
use contracts::domain::a001_product::ProductRecord;
use contracts::shared::config::SiteConfig;

/// Shop grid contents. Callers must branch on the empty case.
#[derive(Debug, Clone, PartialEq)]
pub enum ShopView {
    Empty(EmptyState),
    Grid {
        count: usize,
        cards: Vec<CardDescriptor>,
    },
}

impl ShopView {
    /// Value for the product counter.
    pub fn count(&self) -> usize {
        match self {
            ShopView::Empty(_) => 0,
            ShopView::Grid { count, .. } => *count,
        }
    }
}

pub fn shop_view(
    list: &[ProductRecord],
    favorites: &[ProductRecord],
    config: &SiteConfig,
) -> ShopView {
    if list.is_empty() {
        return ShopView::Empty(EmptyState::no_products());
    }

    ShopView::Grid {
        count: list.len(),
        cards: grid_cards(list, favorites, config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_catalog::{CatalogStore, CategoryFilter};

    fn catalog() -> CatalogStore {
        CatalogStore::new(
            vec![
                ProductRecord::new(1, "whiteboard", "Board A", 3500.0, ""),
                ProductRecord::new(2, "greenboard", "Board B", 4500.0, ""),
                ProductRecord::new(3, "whiteboard", "Board C", 5000.0, ""),
            ],
            vec![],
        )
    }

    #[test]
    fn test_empty_list_gives_empty_state() {
        let view = shop_view(&[], &[], &SiteConfig::default());

        match &view {
            ShopView::Empty(state) => {
                assert_eq!(state.message, "No products found in this category.");
                assert_eq!(state.reset, Some(CategoryFilter::All));
            }
            ShopView::Grid { .. } => panic!("expected empty state"),
        }
        assert_eq!(view.count(), 0);
    }

    #[test]
    fn test_single_record() {
        let list = vec![ProductRecord::new(1, "easel", "Easel", 900.0, "")];

        match shop_view(&list, &[], &SiteConfig::default()) {
            ShopView::Grid { count, cards } => {
                assert_eq!(count, 1);
                assert_eq!(cards.len(), 1);
                assert_eq!(cards[0].price_label, "Rs.900.00");
            }
            ShopView::Empty(_) => panic!("expected grid"),
        }
    }

    #[test]
    fn test_filtered_grid() {
        let store = catalog();
        let list = store.by_category("whiteboard");

        match shop_view(&list, &[], &SiteConfig::default()) {
            ShopView::Grid { count, cards } => {
                assert_eq!(count, 2);
                let names: Vec<&str> = cards.iter().map(|c| c.name.as_str()).collect();
                assert_eq!(names, vec!["Board A", "Board C"]);
            }
            ShopView::Empty(_) => panic!("expected grid"),
        }

        let everything = shop_view(&store.by_category("all"), &[], &SiteConfig::default());
        assert_eq!(everything.count(), 3);

        let nothing = shop_view(&store.by_category("chess"), &[], &SiteConfig::default());
        assert!(matches!(nothing, ShopView::Empty(_)));
    }
}
