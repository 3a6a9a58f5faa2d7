//! Dashboard page: the single route of the app.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the startup side effects (host config, wallet discovery) and the two
//! read loops. The list loop is keyed on factory, identity and refresh
//! counter; the event loop adds the selected contract. Neither key includes
//! the active tab, so switching panels is a pure UI change.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use contracts::U256;
use contracts::calls::ReadCall;
use leptos::prelude::*;

use crate::components::{
    buy_tickets_tab::BuyTicketsTab, create_event_tab::CreateEventTab, header::Header,
    manage_events_tab::ManageEventsTab, my_tickets_tab::MyTicketsTab, navigation_tabs::NavigationTabs,
    sidebar::Sidebar,
};
use crate::net::fetcher::{self, EventKey, ListKey, PlannedRead, ReadUpdate};
use crate::state::events::EventsState;
use crate::state::ui::{Tab, UiState};
use crate::state::wallet::WalletState;

pub fn list_key(events: &EventsState, wallet: &WalletState) -> ListKey {
    ListKey { factory: events.factory, identity: wallet.identity, refresh: events.refresh_seq }
}

pub fn event_key(events: &EventsState, ui: &UiState, wallet: &WalletState) -> EventKey {
    EventKey { factory: events.factory, selection: ui.selected, identity: wallet.identity, refresh: events.refresh_seq }
}

/// Run one read and apply it if `current` still equals `issued`. A ticket
/// list result fans out into per-ticket detail reads under the same key.
fn spawn_read<K>(read: PlannedRead, issued: K, current: Memo<K>, events: RwSignal<EventsState>)
where
    K: Clone + PartialEq + Send + Sync + 'static,
{
    leptos::task::spawn_local(async move {
        let update = match fetcher::fetch(&read).await {
            Ok(update) => update,
            Err(e) => {
                leptos::logging::warn!("read {} failed: {e}", read.call.function);
                return;
            }
        };
        let follow_up = match &update {
            ReadUpdate::UserTickets(ids) => fetcher::ticket_info_reads(read.call.to, ids),
            _ => Vec::new(),
        };
        let now = current.get_untracked();
        let applied = events
            .try_update(|s| fetcher::apply_if_current(s, &issued, &now, update))
            .unwrap_or(false);
        if !applied {
            return;
        }
        for (id, call) in follow_up {
            spawn_ticket_read(id, call, issued.clone(), current, events);
        }
    });
}

fn spawn_ticket_read<K>(id: U256, call: ReadCall, issued: K, current: Memo<K>, events: RwSignal<EventsState>)
where
    K: Clone + PartialEq + Send + Sync + 'static,
{
    leptos::task::spawn_local(async move {
        match fetcher::fetch_ticket(id, &call).await {
            Ok(update) => {
                let now = current.get_untracked();
                events.update(|s| {
                    fetcher::apply_if_current(s, &issued, &now, update);
                });
            }
            Err(e) => leptos::logging::warn!("read {} for ticket {id} failed: {e}", call.function),
        }
    });
}

/// Record provider presence, then any pre-authorized account.
///
/// Runs on the local task queue so the first client render matches the
/// server's provider-less markup during hydration.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn discover_wallet(wallet: RwSignal<WalletState>, provider_available: fn() -> bool) {
    leptos::task::spawn_local(async move {
        wallet.update(|w| w.provider_available = provider_available());
        match crate::net::wallet::accounts().await {
            Ok(accounts) => wallet.update(|w| w.apply_accounts(&accounts)),
            Err(e) => leptos::logging::warn!("wallet accounts unavailable: {e}"),
        }
    });
}

/// Load the host config and discover the wallet. Browser only.
#[cfg(feature = "hydrate")]
fn start_session(wallet: RwSignal<WalletState>, events: RwSignal<EventsState>) {
    use crate::net::{api, wallet as bridge};

    leptos::task::spawn_local(async move {
        if let Some(config) = api::fetch_config().await {
            leptos::logging::log!(
                "factory {} (chain {})",
                config.factory_address,
                config.chain_id.map_or_else(|| "unknown".to_owned(), |id| id.to_string())
            );
            events.update(|e| e.factory = Some(config.factory_address));
        }
    });

    discover_wallet(wallet, bridge::is_available);
    bridge::watch_accounts(move |accounts| wallet.update(|w| w.apply_accounts(&accounts)));
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let wallet = expect_context::<RwSignal<WalletState>>();
    let events = expect_context::<RwSignal<EventsState>>();

    #[cfg(feature = "hydrate")]
    start_session(wallet, events);

    let current_list = Memo::new(move |_| events.with(|e| wallet.with(|w| list_key(e, w))));
    let last_list = StoredValue::new(None::<ListKey>);
    Effect::new(move || {
        let key = current_list.get();
        let previous = last_list.get_value();
        events.update(|s| fetcher::begin_list(s, &key, previous.as_ref()));
        last_list.set_value(Some(key));
        for read in key.plan() {
            spawn_read(read, key, current_list, events);
        }
    });

    let current_event = Memo::new(move |_| events.with(|e| ui.with(|u| wallet.with(|w| event_key(e, u, w)))));
    let last_event = StoredValue::new(None::<EventKey>);
    Effect::new(move || {
        let key = current_event.get();
        let previous = last_event.get_value();
        events.update(|s| fetcher::begin_event(s, &key, previous.as_ref()));
        last_event.set_value(Some(key));
        for read in key.plan() {
            spawn_read(read, key, current_event, events);
        }
    });

    let on_connect = Callback::new(move |()| {
        if wallet.get_untracked().connecting {
            return;
        }
        wallet.update(|w| w.connecting = true);
        leptos::task::spawn_local(async move {
            match crate::net::wallet::connect().await {
                Ok(identity) => wallet.update(|w| {
                    w.identity = identity;
                    w.connecting = false;
                }),
                Err(e) => {
                    leptos::logging::warn!("wallet connect failed: {e}");
                    wallet.update(|w| w.connecting = false);
                }
            }
        });
    });

    let active_tab = Memo::new(move |_| ui.get().active_tab);

    view! {
        <div class="dashboard-page">
            <Header on_connect=on_connect/>
            <NavigationTabs/>
            <div class="dashboard-page__grid">
                <main class="dashboard-page__main">
                    {move || match active_tab.get() {
                        Tab::Create => view! { <CreateEventTab/> }.into_any(),
                        Tab::Buy => view! { <BuyTicketsTab/> }.into_any(),
                        Tab::Manage => view! { <ManageEventsTab/> }.into_any(),
                        Tab::Tickets => view! { <MyTicketsTab/> }.into_any(),
                    }}
                </main>
                <Sidebar/>
            </div>
        </div>
    }
}
