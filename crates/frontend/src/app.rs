use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // The page controller owns catalog, favorites and chrome state.
    let ctx = AppGlobalContext::new();
    provide_context(ctx);

    // Config first, then the sheet; both fall back locally on failure.
    ctx.init();

    view! {
        <Shell />
    }
}
