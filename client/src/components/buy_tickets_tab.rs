//! Buy panel: pick an event, review its details, mint a ticket.

#[cfg(test)]
#[path = "buy_tickets_tab_test.rs"]
mod buy_tickets_tab_test;

use contracts::U256;
use contracts::units::format_ether;
use leptos::prelude::*;

use crate::components::event_details::EventDetails;
use crate::components::event_selector::EventSelector;
use crate::net::dispatch;
use crate::state::events::{EventsState, Loadable};
use crate::state::tx::{TxOp, TxState};
use crate::state::ui::UiState;
use crate::state::wallet::WalletState;

/// Minting is only offered while the sale is open, a wallet is connected and
/// no mint is already pending.
pub fn mint_disabled(sale_active: &Loadable<bool>, connected: bool, minting: bool) -> bool {
    minting || !connected || *sale_active != Loadable::Ready(true)
}

pub fn mint_label(minting: bool, price: &Loadable<U256>) -> String {
    if minting {
        return "🎫 Minting...".to_owned();
    }
    let amount = price.ready().map_or_else(|| "0".to_owned(), |p| format_ether(*p));
    format!("🎫 Buy Ticket ({amount} ETH)")
}

#[component]
pub fn BuyTicketsTab() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let wallet = expect_context::<RwSignal<WalletState>>();
    let events = expect_context::<RwSignal<EventsState>>();
    let tx = expect_context::<RwSignal<TxState>>();

    let all_contracts = Signal::derive(move || events.get().all_contracts.ready().cloned().unwrap_or_default());

    let on_mint = move |_| {
        let ui_state = ui.get_untracked();
        let request = dispatch::mint_request(
            wallet.get_untracked().identity,
            ui_state.selected,
            &ui_state.forms.token_uri,
            &events.get_untracked().selected.price,
        );
        dispatch::dispatch(TxOp::Mint, request, tx, events);
    };

    view! {
        <section class="panel">
            <h2>"🎫 Buy Tickets"</h2>
            <EventSelector contracts=all_contracts/>
            <Show when=move || ui.get().selected.is_some()>
                <EventDetails/>
                <label class="panel__field">
                    "Ticket Metadata URI"
                    <input
                        type="text"
                        placeholder="https://ipfs.io/ipfs/your-metadata-hash"
                        prop:value=move || ui.get().forms.token_uri
                        on:input=move |ev| ui.update(|u| u.forms.token_uri = event_target_value(&ev))
                    />
                </label>
                <button
                    class="btn btn--primary panel__submit"
                    disabled=move || {
                        mint_disabled(&events.get().selected.sale_active, wallet.get().is_connected(), tx.get().minting)
                    }
                    on:click=on_mint
                >
                    {move || mint_label(tx.get().minting, &events.get().selected.price)}
                </button>
            </Show>
        </section>
    }
}
