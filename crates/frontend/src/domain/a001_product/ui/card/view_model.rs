//! Card descriptors: what a product card shows, independent of markup.

use crate::shared::number_format::{format_card_price, format_favorite_price};
use contracts::domain::a001_product::{ProductId, ProductRecord};
use contracts::shared::config::SiteConfig;

/// Where the card is shown; selects price format and enquiry message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardContext {
    /// Home-page category grids and the shop grid
    Grid,
    /// Rows in the favorites panel
    Favorites,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardDescriptor {
    pub id: ProductId,
    pub name: String,
    pub price_label: String,
    pub image_url: String,
    /// Swapped in when `image_url` fails to load
    pub fallback_image_url: String,
    pub alt_text: String,
    pub is_favorite: bool,
    pub enquiry_link: String,
}

pub fn card_view(
    product: &ProductRecord,
    is_favorite: bool,
    context: CardContext,
    config: &SiteConfig,
) -> CardDescriptor {
    let (price_label, template) = match context {
        CardContext::Grid => (
            format_card_price(product.price),
            &config.contact.grid_message,
        ),
        CardContext::Favorites => (
            format_favorite_price(product.price),
            &config.contact.favorites_message,
        ),
    };

    CardDescriptor {
        id: product.id,
        name: product.name.clone(),
        price_label,
        image_url: product.image.clone(),
        fallback_image_url: config.catalog.placeholder_image.clone(),
        alt_text: product.name.clone(),
        is_favorite,
        enquiry_link: config.contact.enquiry_link(template, &product.name),
    }
}

/// Grid cards for `list`, favorite state taken from `favorites`.
pub fn grid_cards(
    list: &[ProductRecord],
    favorites: &[ProductRecord],
    config: &SiteConfig,
) -> Vec<CardDescriptor> {
    list.iter()
        .map(|product| {
            let is_favorite = favorites.iter().any(|fav| fav.id == product.id);
            card_view(product, is_favorite, CardContext::Grid, config)
        })
        .collect()
}
