//! Create panel: deploy a new event contract through the factory.

#[cfg(test)]
#[path = "create_event_tab_test.rs"]
mod create_event_tab_test;

use leptos::prelude::*;

use crate::net::dispatch;
use crate::state::events::EventsState;
use crate::state::tx::{TxOp, TxState};
use crate::state::ui::UiState;
use crate::state::wallet::WalletState;

pub fn deploy_disabled(deploying: bool, connected: bool) -> bool {
    deploying || !connected
}

pub fn deploy_label(deploying: bool) -> &'static str {
    if deploying { "🚀 Deploying..." } else { "🏗️ Create Event Contract" }
}

#[component]
pub fn CreateEventTab() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let wallet = expect_context::<RwSignal<WalletState>>();
    let events = expect_context::<RwSignal<EventsState>>();
    let tx = expect_context::<RwSignal<TxState>>();

    let on_deploy = move |_| {
        let request = dispatch::deploy_request(
            wallet.get_untracked().identity,
            events.get_untracked().factory,
            &ui.get_untracked().forms,
        );
        dispatch::dispatch(TxOp::Deploy, request, tx, events);
    };

    view! {
        <section class="panel">
            <h2>"🏗️ Create New Event"</h2>
            <label class="panel__field">
                "Event Name"
                <input
                    type="text"
                    placeholder="Amazing Concert 2025"
                    prop:value=move || ui.get().forms.event_name
                    on:input=move |ev| ui.update(|u| u.forms.event_name = event_target_value(&ev))
                />
            </label>
            <label class="panel__field">
                "Ticket Collection Name"
                <input
                    type="text"
                    placeholder="Concert Tickets"
                    prop:value=move || ui.get().forms.collection_name
                    on:input=move |ev| ui.update(|u| u.forms.collection_name = event_target_value(&ev))
                />
            </label>
            <label class="panel__field">
                "Ticket Symbol"
                <input
                    type="text"
                    placeholder="CNCT"
                    prop:value=move || ui.get().forms.symbol
                    on:input=move |ev| ui.update(|u| u.forms.symbol = event_target_value(&ev))
                />
            </label>
            <button
                class="btn btn--primary panel__submit"
                disabled=move || deploy_disabled(tx.get().deploying, wallet.get().is_connected())
                on:click=on_deploy
            >
                {move || deploy_label(tx.get().deploying)}
            </button>
        </section>
    }
}
