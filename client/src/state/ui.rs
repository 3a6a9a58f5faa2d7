//! Local UI selection state (active tab, selected event, form fields).
//!
//! DESIGN
//! ======
//! Everything here is ephemeral and owned by the dashboard page. Changing the
//! tab touches nothing but `active_tab`; the read fetcher is keyed on the
//! selected event and identity only, so tab switches never trigger reads.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use contracts::Address;
use contracts::units::parse_address;

pub const DEFAULT_COLLECTION_NAME: &str = "Concert Tickets";
pub const DEFAULT_SYMBOL: &str = "CNCT";
pub const DEFAULT_EVENT_NAME: &str = "Rock Concert 2025";
pub const DEFAULT_TOKEN_URI: &str = "https://ipfs.io/ipfs/QmYourHash";
pub const DEFAULT_NEW_PRICE: &str = "0.01";

/// The four mutually exclusive dashboard panels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Create,
    Buy,
    Manage,
    Tickets,
}

impl Tab {
    pub const ALL: [Self; 4] = [Self::Create, Self::Buy, Self::Manage, Self::Tickets];

    /// Button label shown in the navigation strip.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Create => "🏗️ Create Event",
            Self::Buy => "🎫 Buy Tickets",
            Self::Manage => "⚙️ Manage Events",
            Self::Tickets => "🎟️ My Tickets",
        }
    }
}

/// Pending form input, pre-filled with example values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormState {
    pub collection_name: String,
    pub symbol: String,
    pub event_name: String,
    pub token_uri: String,
    pub new_price: String,
    pub use_ticket_id: String,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            collection_name: DEFAULT_COLLECTION_NAME.to_owned(),
            symbol: DEFAULT_SYMBOL.to_owned(),
            event_name: DEFAULT_EVENT_NAME.to_owned(),
            token_uri: DEFAULT_TOKEN_URI.to_owned(),
            new_price: DEFAULT_NEW_PRICE.to_owned(),
            use_ticket_id: String::new(),
        }
    }
}

/// UI state for the dashboard page.
///
/// Provided as `RwSignal<UiState>` via context.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub active_tab: Tab,
    /// Event contract chosen in whichever panel's selector was used last.
    pub selected: Option<Address>,
    pub forms: FormState,
}

impl UiState {
    pub fn select_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    /// Apply the value of an event `<select>`; the empty placeholder clears
    /// the selection.
    pub fn select_contract(&mut self, raw: &str) {
        self.selected = parse_address(raw);
    }
}
