pub mod view_model;

use crate::layout::global_context::use_app_context;
use crate::shared::icons::icon;
use leptos::prelude::*;
pub use view_model::{card_view, grid_cards, CardContext, CardDescriptor};

/// Product card used by the home-page grids and the shop grid.
///
/// The heart keeps its own state: it flips on every click according to the
/// toggle outcome, even when nothing could be stored.
#[component]
pub fn ProductCard(card: CardDescriptor) -> impl IntoView {
    let ctx = use_app_context();
    let CardDescriptor {
        id,
        name,
        price_label,
        image_url,
        fallback_image_url,
        alt_text,
        is_favorite,
        enquiry_link,
    } = card;

    let liked = RwSignal::new(is_favorite);
    let image = RwSignal::new(image_url);

    view! {
        <div class="product-card">
            <div
                class="btn-fav"
                class:active=move || liked.get()
                on:click=move |ev| {
                    ev.stop_propagation();
                    let outcome = ctx.toggle_favorite(id);
                    liked.set(outcome.added);
                }
            >
                {icon("heart")}
            </div>
            <img
                src=move || image.get()
                alt=alt_text
                loading="lazy"
                on:error=move |_| image.set(fallback_image_url.clone())
            />
            <h3 class="product-title">{name}</h3>
            <div class="product-price">{price_label}</div>
            <a href=enquiry_link class="btn-options" target="_blank">
                "ENQUIRE NOW " {icon("message")}
            </a>
        </div>
    }
}
