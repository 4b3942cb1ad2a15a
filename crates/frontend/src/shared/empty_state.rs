use crate::shared::icons::icon;
use contracts::domain::a002_catalog::CategoryFilter;
use leptos::prelude::*;

/// Placeholder rendered instead of an empty list.
#[derive(Debug, Clone, PartialEq)]
pub struct EmptyState {
    pub message: String,
    /// Filter to switch to from the empty state, if any
    pub reset: Option<CategoryFilter>,
}

impl EmptyState {
    pub fn no_products() -> Self {
        Self {
            message: "No products found in this category.".to_string(),
            reset: Some(CategoryFilter::All),
        }
    }

    pub fn empty_wishlist() -> Self {
        Self {
            message: "Your wishlist is empty.".to_string(),
            reset: None,
        }
    }
}

#[component]
pub fn EmptyStateView(
    state: EmptyState,
    #[prop(optional)] on_reset: Option<Callback<CategoryFilter>>,
) -> impl IntoView {
    let EmptyState { message, reset } = state;

    let action = match (reset, on_reset) {
        (Some(filter), Some(handler)) => Some(view! {
            <button class="btn-options" on:click=move |_| handler.run(filter.clone())>
                "View All Products"
            </button>
        }),
        _ => None,
    };

    view! {
        <div class="empty-state">
            {icon("box-open")}
            <p>{message}</p>
            {action}
        </div>
    }
}
