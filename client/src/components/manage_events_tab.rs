//! Manage panel: owner-only controls for one of the identity's events.
//!
//! DESIGN
//! ======
//! The controls are gated on [`is_owner`], which compares typed addresses and
//! is therefore insensitive to hex letter case. The contract enforces the
//! same check on every write; the gate only decides what is rendered.

#[cfg(test)]
#[path = "manage_events_tab_test.rs"]
mod manage_events_tab_test;

use contracts::units::format_ether;
use contracts::{Address, U256};
use leptos::prelude::*;

use crate::components::event_selector::EventSelector;
use crate::net::dispatch;
use crate::state::events::{EventsState, Loadable};
use crate::state::tx::{TxOp, TxState};
use crate::state::ui::UiState;
use crate::state::wallet::WalletState;

pub const NOT_OWNER_WARNING: &str = "⚠️ You can only manage events you created.";

/// Whether the connected identity is the selected contract's owner.
pub fn is_owner(owner: &Loadable<Address>, identity: Option<Address>) -> bool {
    match (owner.ready(), identity) {
        (Some(owner), Some(identity)) => *owner == identity,
        _ => false,
    }
}

pub fn toggle_label(sale_active: &Loadable<bool>) -> &'static str {
    if *sale_active == Loadable::Ready(true) { "⏸️ Pause Sale" } else { "▶️ Start Sale" }
}

pub fn stats_status_label(sale_active: &Loadable<bool>) -> &'static str {
    if *sale_active == Loadable::Ready(true) { "🟢 Active" } else { "🔴 Paused" }
}

fn count_label(value: &Loadable<U256>) -> String {
    value.ready().map(ToString::to_string).unwrap_or_default()
}

fn balance_label(value: &Loadable<U256>) -> String {
    value.ready().map(|b| format!("{} ETH", format_ether(*b))).unwrap_or_default()
}

fn busy_label(busy: bool, idle: &'static str) -> &'static str {
    if busy { "⏳ Pending..." } else { idle }
}

#[component]
pub fn ManageEventsTab() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let wallet = expect_context::<RwSignal<WalletState>>();
    let events = expect_context::<RwSignal<EventsState>>();
    let tx = expect_context::<RwSignal<TxState>>();

    let user_contracts = Signal::derive(move || events.get().user_contracts.ready().cloned().unwrap_or_default());
    let owner_view = move || is_owner(&events.get().selected.owner, wallet.get().identity);
    let has_selection = move || ui.get().selected.is_some();

    let on_update_price = move |_| {
        let request =
            dispatch::price_request(wallet.get_untracked().identity, ui.get_untracked().selected, &ui.get_untracked().forms.new_price);
        dispatch::dispatch(TxOp::UpdatePrice, request, tx, events);
    };
    let on_toggle = move |_| {
        let request = dispatch::toggle_request(wallet.get_untracked().identity, ui.get_untracked().selected);
        dispatch::dispatch(TxOp::ToggleSale, request, tx, events);
    };
    let on_withdraw = move |_| {
        let request = dispatch::withdraw_request(wallet.get_untracked().identity, ui.get_untracked().selected);
        dispatch::dispatch(TxOp::Withdraw, request, tx, events);
    };
    let on_use_ticket = move |_| {
        let request = dispatch::use_ticket_request(
            wallet.get_untracked().identity,
            ui.get_untracked().selected,
            &ui.get_untracked().forms.use_ticket_id,
        );
        dispatch::dispatch(TxOp::UseTicket, request, tx, events);
    };

    view! {
        <section class="panel">
            <h2>"⚙️ Manage Your Events"</h2>
            <EventSelector contracts=user_contracts label="Select Your Event" placeholder="Choose your event..."/>
            <Show when=move || has_selection() && owner_view()>
                <div class="panel__stats">
                    <h3>"Event Stats"</h3>
                    <p><strong>"Name: "</strong>{move || events.get().selected.name.ready().cloned().unwrap_or_default()}</p>
                    <p><strong>"Sold: "</strong>{move || count_label(&events.get().selected.current_supply)}" tickets"</p>
                    <p><strong>"Max Supply: "</strong>{move || count_label(&events.get().selected.max_supply)}</p>
                    <p><strong>"Status: "</strong>{move || stats_status_label(&events.get().selected.sale_active)}</p>
                    <p><strong>"Balance: "</strong>{move || balance_label(&events.get().selected.balance)}</p>
                </div>
                <div class="panel__controls">
                    <label class="panel__field">
                        "New Price (ETH)"
                        <span class="panel__inline">
                            <input
                                type="text"
                                placeholder="0.01"
                                prop:value=move || ui.get().forms.new_price
                                on:input=move |ev| ui.update(|u| u.forms.new_price = event_target_value(&ev))
                            />
                            <button class="btn" disabled=move || tx.get().updating_price on:click=on_update_price>
                                {move || busy_label(tx.get().updating_price, "💰 Update")}
                            </button>
                        </span>
                    </label>
                    <span class="panel__inline">
                        <button
                            class="btn"
                            class:btn--danger=move || events.get().selected.sale_active == Loadable::Ready(true)
                            disabled=move || tx.get().toggling_sale
                            on:click=on_toggle
                        >
                            {move || busy_label(tx.get().toggling_sale, toggle_label(&events.get().selected.sale_active))}
                        </button>
                        <button class="btn" disabled=move || tx.get().withdrawing on:click=on_withdraw>
                            {move || busy_label(tx.get().withdrawing, "💸 Withdraw")}
                        </button>
                    </span>
                    <label class="panel__field">
                        "Mark Ticket Used (ID)"
                        <span class="panel__inline">
                            <input
                                type="text"
                                inputmode="numeric"
                                placeholder="1"
                                prop:value=move || ui.get().forms.use_ticket_id
                                on:input=move |ev| ui.update(|u| u.forms.use_ticket_id = event_target_value(&ev))
                            />
                            <button class="btn" disabled=move || tx.get().using_ticket on:click=on_use_ticket>
                                {move || busy_label(tx.get().using_ticket, "✅ Use Ticket")}
                            </button>
                        </span>
                    </label>
                </div>
            </Show>
            <Show when=move || has_selection() && !owner_view()>
                <p class="panel__warning">{NOT_OWNER_WARNING}</p>
            </Show>
        </section>
    }
}
