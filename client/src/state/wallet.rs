//! Connected-identity state for the current browser session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Written only by the wallet bridge (`net::wallet`) and read by the fetcher
//! keys, the dispatcher presence checks and the owner gate in the manage panel.

#[cfg(test)]
#[path = "wallet_test.rs"]
mod wallet_test;

use contracts::Address;

/// Wallet session as observed through the injected provider.
///
/// Provided as `RwSignal<WalletState>` via context.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WalletState {
    pub identity: Option<Address>,
    /// Whether an EIP-1193 provider was found on the page.
    pub provider_available: bool,
    pub connecting: bool,
}

impl WalletState {
    /// Replace the identity with the first reported account, if any.
    pub fn apply_accounts(&mut self, accounts: &[Address]) {
        self.identity = accounts.first().copied();
    }

    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.identity.is_some()
    }
}
