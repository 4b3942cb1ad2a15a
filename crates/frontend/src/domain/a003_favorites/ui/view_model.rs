use crate::domain::a001_product::ui::card::{card_view, CardContext, CardDescriptor};
use crate::shared::empty_state::EmptyState;
use contracts::domain::a001_product::ProductRecord;
use contracts::shared::config::SiteConfig;

#[derive(Debug, Clone, PartialEq)]
pub enum FavoritesView {
    Empty(EmptyState),
    List(Vec<CardDescriptor>),
}

/// Rows for the favorites panel, in the order products were liked.
pub fn favorites_view(favorites: &[ProductRecord], config: &SiteConfig) -> FavoritesView {
    if favorites.is_empty() {
        return FavoritesView::Empty(EmptyState::empty_wishlist());
    }

    FavoritesView::List(
        favorites
            .iter()
            .map(|product| card_view(product, true, CardContext::Favorites, config))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_favorites() {
        match favorites_view(&[], &SiteConfig::default()) {
            FavoritesView::Empty(state) => {
                assert_eq!(state.message, "Your wishlist is empty.");
                assert!(state.reset.is_none());
            }
            FavoritesView::List(_) => panic!("expected empty state"),
        }
    }

    #[test]
    fn test_favorites_rows_use_plain_price() {
        let favorites = vec![
            ProductRecord::new(2, "greenboard", "Green Chalk Board", 4500.0, "g.png"),
            ProductRecord::new(1, "whiteboard", "Standard White Board", 13500.0, "w.png"),
        ];

        match favorites_view(&favorites, &SiteConfig::default()) {
            FavoritesView::List(rows) => {
                assert_eq!(rows.len(), 2);
                assert_eq!(rows[0].id, 2);
                assert_eq!(rows[0].price_label, "Rs 4,500");
                assert_eq!(rows[1].price_label, "Rs 13,500");
                assert!(rows.iter().all(|r| r.is_favorite));
                assert!(rows[0].enquiry_link.contains("I want to buy Green Chalk Board"));
            }
            FavoritesView::Empty(_) => panic!("expected rows"),
        }
    }
}
