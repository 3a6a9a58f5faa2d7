//! My Tickets panel: the identity's tickets for one event.

#[cfg(test)]
#[path = "my_tickets_tab_test.rs"]
mod my_tickets_tab_test;

use contracts::U256;
use leptos::prelude::*;
use time::OffsetDateTime;

use crate::components::event_selector::EventSelector;
use crate::state::events::{EventsState, Loadable, TicketInfo};
use crate::state::ui::UiState;

pub const EMPTY_MESSAGE: &str = "No tickets found for this event.";

/// What the ticket area shows for the current list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TicketsView {
    /// Nothing selected or still loading.
    Hidden,
    Empty,
    Grid(Vec<U256>),
}

pub fn tickets_view(selected: bool, tickets: &Loadable<Vec<U256>>) -> TicketsView {
    match tickets.ready() {
        Some(_) if !selected => TicketsView::Hidden,
        Some(ids) if ids.is_empty() => TicketsView::Empty,
        Some(ids) => TicketsView::Grid(ids.clone()),
        None => TicketsView::Hidden,
    }
}

pub fn validity_label(info: Option<&TicketInfo>) -> &'static str {
    match info {
        Some(info) if info.used => "Used Ticket",
        _ => "Valid Entry Ticket",
    }
}

/// UTC calendar date (`YYYY-MM-DD`) of a unix timestamp in seconds.
/// Timestamps outside the representable calendar fall back to raw seconds.
pub fn format_purchase_date(timestamp: U256) -> String {
    let date = i64::try_from(timestamp)
        .ok()
        .and_then(|secs| OffsetDateTime::from_unix_timestamp(secs).ok())
        .map(OffsetDateTime::date);
    match date {
        Some(date) => format!("{:04}-{:02}-{:02}", date.year(), u8::from(date.month()), date.day()),
        None => format!("{timestamp}s"),
    }
}

#[component]
fn TicketCard(id: U256) -> impl IntoView {
    let events = expect_context::<RwSignal<EventsState>>();
    let info = move || events.get().selected.ticket_info.get(&id).cloned();

    view! {
        <div class="ticket-card" class:ticket-card--used=move || info().is_some_and(|i| i.used)>
            <h4>{format!("🎫 Ticket #{id}")}</h4>
            <p class="ticket-card__name">{move || events.get().selected.name.ready().cloned().unwrap_or_default()}</p>
            <p class="ticket-card__validity">{move || validity_label(info().as_ref())}</p>
            {move || {
                info()
                    .map(|i| {
                        view! {
                            <p class="ticket-card__purchased">
                                {format!("Purchased {}", format_purchase_date(i.purchase_time))}
                            </p>
                        }
                    })
            }}
        </div>
    }
}

#[component]
pub fn MyTicketsTab() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let events = expect_context::<RwSignal<EventsState>>();

    let all_contracts = Signal::derive(move || events.get().all_contracts.ready().cloned().unwrap_or_default());
    let view_state = Memo::new(move |_| tickets_view(ui.get().selected.is_some(), &events.get().selected.user_tickets));

    view! {
        <section class="panel">
            <h2>"🎟️ My Tickets"</h2>
            <EventSelector contracts=all_contracts/>
            {move || match view_state.get() {
                TicketsView::Hidden => ().into_any(),
                TicketsView::Empty => {
                    view! {
                        <div>
                            <h3>{move || format!("Your Tickets for {}", events.get().selected.name.ready().cloned().unwrap_or_default())}</h3>
                            <p class="panel__empty">{EMPTY_MESSAGE}</p>
                        </div>
                    }
                        .into_any()
                }
                TicketsView::Grid(ids) => {
                    view! {
                        <div>
                            <h3>{move || format!("Your Tickets for {}", events.get().selected.name.ready().cloned().unwrap_or_default())}</h3>
                            <div class="ticket-grid">
                                {ids.into_iter().map(|id| view! { <TicketCard id=id/> }).collect::<Vec<_>>()}
                            </div>
                        </div>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}
