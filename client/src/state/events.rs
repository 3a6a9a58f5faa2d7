//! Fetched contract state: event lists and the selected event's snapshot.
//!
//! DESIGN
//! ======
//! Every field is a [`Loadable`]. `Unloaded` means the inputs the read needs
//! (factory, selection, identity) are absent; `Loading` covers both "asked,
//! no answer yet" and "asked, request failed", so an unreachable node shows
//! as a loading label rather than an error.

#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;

use std::collections::BTreeMap;

use contracts::{Address, U256};

/// Lifecycle of one fetched value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Loadable<T> {
    #[default]
    Unloaded,
    Loading,
    Ready(T),
}

impl<T> Loadable<T> {
    #[must_use]
    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            Self::Unloaded | Self::Loading => None,
        }
    }
}

/// Per-ticket record from `getTicketInfo`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TicketInfo {
    pub used: bool,
    /// Unix seconds.
    pub purchase_time: U256,
    pub original_owner: Address,
    pub current_owner: Address,
}

/// Snapshot of the selected event contract.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventSnapshot {
    pub name: Loadable<String>,
    pub price: Loadable<U256>,
    pub current_supply: Loadable<U256>,
    pub max_supply: Loadable<U256>,
    pub sale_active: Loadable<bool>,
    pub owner: Loadable<Address>,
    pub balance: Loadable<U256>,
    /// Ticket ids owned by the connected identity.
    pub user_tickets: Loadable<Vec<U256>>,
    pub ticket_info: BTreeMap<U256, TicketInfo>,
}

impl EventSnapshot {
    /// Remaining tickets as `(available, max)`, once both supplies are known.
    #[must_use]
    pub fn availability(&self) -> Option<(U256, U256)> {
        let current = self.current_supply.ready()?;
        let max = self.max_supply.ready()?;
        Some((max.saturating_sub(*current), *max))
    }
}

/// All fetched remote state.
///
/// Provided as `RwSignal<EventsState>` via context.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventsState {
    /// Factory address from `/api/config`; `None` until the config loads.
    pub factory: Option<Address>,
    pub all_contracts: Loadable<Vec<Address>>,
    pub user_contracts: Loadable<Vec<Address>>,
    pub selected: EventSnapshot,
    /// Bumped after each successful submission so every read re-runs.
    pub refresh_seq: u64,
}

impl EventsState {
    pub fn bump_refresh(&mut self) {
        self.refresh_seq = self.refresh_seq.wrapping_add(1);
    }
}
