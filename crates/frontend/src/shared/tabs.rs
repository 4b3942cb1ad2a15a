use leptos::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct TabItem {
    pub key: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

/// Buttons plus content panes; exactly one pane is active at a time.
#[component]
pub fn TabSwitcher(tabs: Vec<TabItem>) -> impl IntoView {
    let first = tabs.first().map(|tab| tab.key).unwrap_or_default();
    let active = RwSignal::new(first);

    let buttons = tabs
        .iter()
        .map(|tab| {
            let key = tab.key;
            view! {
                <button
                    class="tab-btn"
                    class:active=move || active.get() == key
                    on:click=move |_| active.set(key)
                >
                    {tab.title}
                </button>
            }
        })
        .collect_view();

    let panes = tabs
        .into_iter()
        .map(|tab| {
            let key = tab.key;
            view! {
                <div id=format!("tab-{}", key) class="tab-content" class:active=move || active.get() == key>
                    <p>{tab.body}</p>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="tabs">
            <div class="tab-buttons">{buttons}</div>
            {panes}
        </div>
    }
}
