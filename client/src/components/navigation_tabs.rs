//! Tab strip switching between the four dashboard panels.
//!
//! Selecting a tab only writes `UiState::active_tab`; no reads are keyed on it.

use leptos::prelude::*;

use crate::state::ui::{Tab, UiState};

#[component]
pub fn NavigationTabs() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <nav class="tabs">
            {Tab::ALL
                .into_iter()
                .map(|tab| {
                    view! {
                        <button
                            class="tabs__tab"
                            class:tabs__tab--active=move || ui.get().active_tab == tab
                            on:click=move |_| ui.update(|u| u.select_tab(tab))
                        >
                            {tab.label()}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </nav>
    }
}
