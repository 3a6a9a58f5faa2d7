//! Read-only summary of the selected event shown above the buy form.

#[cfg(test)]
#[path = "event_details_test.rs"]
mod event_details_test;

use contracts::U256;
use contracts::units::format_ether;
use leptos::prelude::*;

use crate::state::events::{EventSnapshot, EventsState, Loadable};

pub const LOADING: &str = "Loading...";

pub fn name_label(name: &Loadable<String>) -> String {
    name.ready().map_or_else(|| LOADING.to_owned(), Clone::clone)
}

/// `x.xxxx ETH`, or the loading text until the price is known.
pub fn price_label(price: &Loadable<U256>) -> String {
    price.ready().map_or_else(|| LOADING.to_owned(), |p| format!("{} ETH", format_ether(*p)))
}

/// `available / max`.
pub fn availability_label(snapshot: &EventSnapshot) -> String {
    snapshot
        .availability()
        .map_or_else(|| LOADING.to_owned(), |(available, max)| format!("{available} / {max}"))
}

pub fn sale_status_label(sale_active: &Loadable<bool>) -> &'static str {
    match sale_active {
        Loadable::Ready(true) => "🟢 Sale Active",
        Loadable::Ready(false) => "🔴 Sale Paused",
        Loadable::Unloaded | Loadable::Loading => LOADING,
    }
}

#[component]
pub fn EventDetails() -> impl IntoView {
    let events = expect_context::<RwSignal<EventsState>>();
    let snapshot = move || events.get().selected;

    view! {
        <div class="event-details">
            <h3>"Event Details"</h3>
            <p><strong>"Name: "</strong>{move || name_label(&snapshot().name)}</p>
            <p><strong>"Price: "</strong>{move || price_label(&snapshot().price)}</p>
            <p><strong>"Available: "</strong>{move || availability_label(&snapshot())}</p>
            <p>
                <strong>"Status: "</strong>
                <span
                    class="event-details__status"
                    class:event-details__status--active=move || snapshot().sale_active == Loadable::Ready(true)
                >
                    {move || sale_status_label(&snapshot().sale_active)}
                </span>
            </p>
        </div>
    }
}
