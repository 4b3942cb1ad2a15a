use super::view_model::{favorites_view, FavoritesView};
use crate::domain::a001_product::ui::card::CardDescriptor;
use crate::layout::global_context::use_app_context;
use crate::shared::empty_state::EmptyStateView;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
fn FavoriteRow(card: CardDescriptor) -> impl IntoView {
    let ctx = use_app_context();
    let id = card.id;

    view! {
        <div class="fav-item">
            <div class="fav-item-body">
                <img src=card.image_url alt=card.alt_text />
                <div class="fav-item-info">
                    <h4>{card.name}</h4>
                    <span class="fav-item-price">{card.price_label}</span>
                </div>
                <button
                    class="fav-remove"
                    title="Remove"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        ctx.toggle_favorite(id);
                    }
                >
                    {icon("trash")}
                </button>
            </div>
            <a href=card.enquiry_link class="btn-options" target="_blank">
                "ENQUIRE NOW " {icon("message")}
            </a>
        </div>
    }
}

/// Wishlist panel. Re-renders whenever the persisted favorites change.
#[component]
pub fn FavoritesModal() -> impl IntoView {
    let ctx = use_app_context();

    let rows = move || {
        let config = ctx.config.get();
        ctx.favorites.with(|favorites| favorites_view(favorites, &config))
    };

    view! {
        <Show when=move || ctx.favorites_open.get()>
            <div id="favorites-modal" class="modal" on:click=move |_| ctx.toggle_favorites_modal()>
                <div class="modal-content" on:click=move |ev| ev.stop_propagation()>
                    <div class="modal-header">
                        <h2>"My Wishlist"</h2>
                        <button class="modal-close" on:click=move |_| ctx.toggle_favorites_modal()>
                            {icon("x")}
                        </button>
                    </div>
                    <div id="favorites-list">
                        {move || match rows() {
                            FavoritesView::Empty(state) => view! {
                                <EmptyStateView state=state />
                            }.into_any(),
                            FavoritesView::List(cards) => cards
                                .into_iter()
                                .map(|card| view! { <FavoriteRow card=card /> })
                                .collect_view()
                                .into_any(),
                        }}
                    </div>
                </div>
            </div>
        </Show>
    }
}
