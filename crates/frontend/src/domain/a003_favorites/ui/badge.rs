use crate::layout::global_context::use_app_context;
use leptos::prelude::*;

/// Favorites counter, refreshed by every toggle.
#[component]
pub fn FavoritesBadge() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <span class="badge">{move || ctx.favorites_count().to_string()}</span>
    }
}
