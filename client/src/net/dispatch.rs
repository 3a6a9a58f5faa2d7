//! Transaction Dispatcher: validate form input, hand the call to the wallet,
//! hold the operation's busy flag for as long as the wallet is working.
//!
//! DESIGN
//! ======
//! Each `*_request` function performs only the presence checks; the contract
//! itself enforces ownership, payment and sale state. A failed check returns
//! [`SubmitError::Validation`] and nothing is sent.
//!
//! The busy flag is owned by a [`BusyGuard`], so it is cleared on every exit
//! path of [`submit`], including a dropped future.
//!
//! ERROR HANDLING
//! ==============
//! Callers log the error and move on. The only visible effect of a failure is
//! the busy flag reverting.

#[cfg(test)]
#[path = "dispatch_test.rs"]
mod dispatch_test;

use std::future::Future;

use contracts::rpc::TransactionRequest;
use contracts::units::parse_ether;
use contracts::{Address, ContractError, U256, calls};
use leptos::prelude::*;

use crate::state::events::{EventsState, Loadable};
use crate::state::tx::{TxOp, TxState};
use crate::state::ui::FormState;

/// Delay before the second post-submission refresh, giving the chain time to
/// include the transaction.
#[cfg(feature = "hydrate")]
const CONFIRM_REFRESH_DELAY_MS: u32 = 4_000;

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// A required input was missing or malformed; nothing was sent.
    #[error("not submitted: {0}")]
    Validation(&'static str),

    /// The wallet or node rejected the submission.
    #[error(transparent)]
    Remote(#[from] ContractError),
}

/// Something that can record an operation as in flight.
pub trait BusyFlags {
    fn set_busy(&self, op: TxOp, busy: bool);
}

impl BusyFlags for RwSignal<TxState> {
    fn set_busy(&self, op: TxOp, busy: bool) {
        self.update(|s| s.set_busy(op, busy));
    }
}

/// Raises `op`'s flag on creation and lowers it on drop.
pub struct BusyGuard<'a, F: BusyFlags + ?Sized> {
    flags: &'a F,
    op: TxOp,
}

impl<'a, F: BusyFlags + ?Sized> BusyGuard<'a, F> {
    pub fn new(flags: &'a F, op: TxOp) -> Self {
        flags.set_busy(op, true);
        Self { flags, op }
    }
}

impl<F: BusyFlags + ?Sized> Drop for BusyGuard<'_, F> {
    fn drop(&mut self) {
        self.flags.set_busy(self.op, false);
    }
}

/// Await `send` while `op` is flagged busy.
///
/// # Errors
///
/// Returns [`SubmitError::Remote`] with whatever `send` failed with.
pub async fn submit<F, Fut>(flags: &F, op: TxOp, send: Fut) -> Result<String, SubmitError>
where
    F: BusyFlags + ?Sized,
    Fut: Future<Output = Result<String, ContractError>>,
{
    let _guard = BusyGuard::new(flags, op);
    Ok(send.await?)
}

// =============================================================================
// PRESENCE CHECKS
// =============================================================================

fn require<T: Copy>(value: Option<T>, what: &'static str) -> Result<T, SubmitError> {
    value.ok_or(SubmitError::Validation(what))
}

fn require_text<'a>(value: &'a str, what: &'static str) -> Result<&'a str, SubmitError> {
    let trimmed = value.trim();
    if trimmed.is_empty() { Err(SubmitError::Validation(what)) } else { Ok(trimmed) }
}

/// # Errors
///
/// Validation fails without identity, factory or any of the three names.
pub fn deploy_request(
    identity: Option<Address>,
    factory: Option<Address>,
    forms: &FormState,
) -> Result<TransactionRequest, SubmitError> {
    let from = require(identity, "wallet not connected")?;
    let factory = require(factory, "factory address not loaded")?;
    let name = require_text(&forms.collection_name, "collection name is required")?;
    let symbol = require_text(&forms.symbol, "symbol is required")?;
    let event_name = require_text(&forms.event_name, "event name is required")?;
    Ok(calls::deploy_contract(from, factory, name, symbol, event_name))
}

/// # Errors
///
/// Validation fails without identity, selection, token URI or a loaded price.
/// A loaded price of zero is accepted.
pub fn mint_request(
    identity: Option<Address>,
    selection: Option<Address>,
    token_uri: &str,
    price: &Loadable<U256>,
) -> Result<TransactionRequest, SubmitError> {
    let from = require(identity, "wallet not connected")?;
    let contract = require(selection, "no event selected")?;
    let uri = require_text(token_uri, "metadata URI is required")?;
    let price = *price.ready().ok_or(SubmitError::Validation("ticket price not loaded"))?;
    Ok(calls::mint_ticket(from, contract, uri, price))
}

/// # Errors
///
/// Validation fails without identity or selection, or when `new_price` is not
/// a decimal amount.
pub fn price_request(
    identity: Option<Address>,
    selection: Option<Address>,
    new_price: &str,
) -> Result<TransactionRequest, SubmitError> {
    let from = require(identity, "wallet not connected")?;
    let contract = require(selection, "no event selected")?;
    let price = parse_ether(new_price).map_err(|_| SubmitError::Validation("price is not a valid amount"))?;
    Ok(calls::set_ticket_price(from, contract, price))
}

/// # Errors
///
/// Validation fails without identity or selection.
pub fn toggle_request(identity: Option<Address>, selection: Option<Address>) -> Result<TransactionRequest, SubmitError> {
    let from = require(identity, "wallet not connected")?;
    let contract = require(selection, "no event selected")?;
    Ok(calls::toggle_sale(from, contract))
}

/// # Errors
///
/// Validation fails without identity or selection.
pub fn withdraw_request(
    identity: Option<Address>,
    selection: Option<Address>,
) -> Result<TransactionRequest, SubmitError> {
    let from = require(identity, "wallet not connected")?;
    let contract = require(selection, "no event selected")?;
    Ok(calls::withdraw_funds(from, contract))
}

/// # Errors
///
/// Validation fails without identity or selection, or when `raw_id` is not an
/// unsigned integer.
pub fn use_ticket_request(
    identity: Option<Address>,
    selection: Option<Address>,
    raw_id: &str,
) -> Result<TransactionRequest, SubmitError> {
    let from = require(identity, "wallet not connected")?;
    let contract = require(selection, "no event selected")?;
    let raw = require_text(raw_id, "ticket id is required")?;
    if !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SubmitError::Validation("ticket id must be a whole number"));
    }
    let token_id = raw
        .parse::<U256>()
        .map_err(|_| SubmitError::Validation("ticket id must be a whole number"))?;
    Ok(calls::use_ticket(from, contract, token_id))
}

/// Log label for a request: the called function's name.
#[must_use]
pub fn describe(request: &TransactionRequest) -> &'static str {
    contracts::registry::describe_calldata(&request.data).map_or("unknown", |f| f.name())
}

// =============================================================================
// SPAWNING
// =============================================================================

/// Validate, submit through the wallet and refresh reads on success.
///
/// Runs on the local task queue; the returned value is only the validation
/// outcome, the submission itself completes later.
pub fn dispatch(
    op: TxOp,
    request: Result<TransactionRequest, SubmitError>,
    tx_state: RwSignal<TxState>,
    events: RwSignal<EventsState>,
) {
    dispatch_with(op, request, tx_state, events, super::wallet::send_transaction);
}

fn dispatch_with<S, Fut>(
    op: TxOp,
    request: Result<TransactionRequest, SubmitError>,
    tx_state: RwSignal<TxState>,
    events: RwSignal<EventsState>,
    send: S,
) where
    S: FnOnce(TransactionRequest) -> Fut,
    Fut: Future<Output = Result<String, ContractError>> + 'static,
{
    let request = match request {
        Ok(request) => request,
        Err(e) => {
            leptos::logging::warn!("{}: {e}", op.name());
            return;
        }
    };
    if tx_state.get_untracked().is_busy(op) {
        leptos::logging::warn!("{}: already in flight", op.name());
        return;
    }
    let function = describe(&request);
    let pending = send(request);
    leptos::task::spawn_local(async move {
        match submit(&tx_state, op, pending).await {
            Ok(hash) => {
                leptos::logging::log!("{} submitted ({function}): {hash}", op.name());
                events.update(EventsState::bump_refresh);
                #[cfg(feature = "hydrate")]
                {
                    gloo_timers::future::TimeoutFuture::new(CONFIRM_REFRESH_DELAY_MS).await;
                    events.update(EventsState::bump_refresh);
                }
            }
            Err(e) => leptos::logging::warn!("{} failed ({function}): {e}", op.name()),
        }
    });
}
