//! Sidebar listing all events and the connected identity's events.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use contracts::Address;
use contracts::units::short_address;
use leptos::prelude::*;

use crate::state::events::{EventsState, Loadable};
use crate::state::wallet::WalletState;

/// How many entries the "All Events" card shows before summarizing.
pub const ALL_EVENTS_PREVIEW: usize = 5;

pub fn sidebar_label(address: &Address) -> String {
    short_address(address, 8, 6)
}

/// Rendered content of one sidebar card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListView {
    Loading,
    Empty,
    Items { shown: Vec<String>, more: usize },
}

pub fn list_view(list: &Loadable<Vec<Address>>, limit: Option<usize>) -> ListView {
    match list {
        Loadable::Unloaded | Loadable::Loading => ListView::Loading,
        Loadable::Ready(items) if items.is_empty() => ListView::Empty,
        Loadable::Ready(items) => {
            let take = limit.unwrap_or(items.len()).min(items.len());
            ListView::Items { shown: items[..take].iter().map(sidebar_label).collect(), more: items.len() - take }
        }
    }
}

fn render_list(view_state: ListView, loading: &'static str, empty: &'static str) -> AnyView {
    match view_state {
        ListView::Loading => view! { <p class="sidebar__hint">{loading}</p> }.into_any(),
        ListView::Empty => view! { <p class="sidebar__hint">{empty}</p> }.into_any(),
        ListView::Items { shown, more } => {
            view! {
                <ul class="sidebar__list">
                    {shown.into_iter().map(|label| view! { <li class="sidebar__item">{label}</li> }).collect::<Vec<_>>()}
                </ul>
                {(more > 0).then(|| view! { <p class="sidebar__hint">{format!("...and {more} more")}</p> })}
            }
                .into_any()
        }
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let events = expect_context::<RwSignal<EventsState>>();
    let wallet = expect_context::<RwSignal<WalletState>>();

    view! {
        <aside class="sidebar">
            <div class="sidebar__card">
                <h3>"🌟 All Events"</h3>
                {move || {
                    render_list(
                        list_view(&events.get().all_contracts, Some(ALL_EVENTS_PREVIEW)),
                        "Loading events...",
                        "No events created yet.",
                    )
                }}
            </div>
            <Show when=move || wallet.get().is_connected()>
                <div class="sidebar__card">
                    <h3>"👤 Your Events"</h3>
                    {move || {
                        render_list(
                            list_view(&events.get().user_contracts, None),
                            "Loading your events...",
                            "You haven't created any events yet.",
                        )
                    }}
                </div>
            </Show>
        </aside>
    }
}
