use crate::shared::dom;
use crate::shared::icons::icon;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Scroll offset (px) after which the button appears
pub const SCROLL_TOP_THRESHOLD: f64 = 300.0;

pub fn scroll_top_visible(offset: f64) -> bool {
    offset > SCROLL_TOP_THRESHOLD
}

#[component]
pub fn ScrollTopButton() -> impl IntoView {
    let visible = RwSignal::new(scroll_top_visible(dom::scroll_offset()));

    let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
        visible.set(scroll_top_visible(dom::scroll_offset()));
    }) as Box<dyn FnMut(_)>);

    if let Some(window) = web_sys::window() {
        let _ = window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
    }
    // Mounted once for the whole page; keep closure alive.
    closure.forget();

    view! {
        <button
            id="scrollTopBtn"
            class="scroll-top"
            style:opacity=move || if visible.get() { "1" } else { "0" }
            style:visibility=move || if visible.get() { "visible" } else { "hidden" }
            on:click=move |_| dom::scroll_to_top()
        >
            {icon("arrow-up")}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_top_threshold() {
        assert!(!scroll_top_visible(0.0));
        assert!(!scroll_top_visible(300.0));
        assert!(scroll_top_visible(300.5));
        assert!(scroll_top_visible(1200.0));
    }
}
