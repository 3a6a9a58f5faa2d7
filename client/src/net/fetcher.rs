//! Read-State Fetcher: which reads to issue and where their results land.
//!
//! SYSTEM CONTEXT
//! ==============
//! The dashboard page derives a [`ListKey`] and an [`EventKey`] from the
//! config, wallet, UI selection and refresh counter. Whenever a key changes it
//! calls [`begin_list`] / [`begin_event`], spawns one task per planned read,
//! and hands each decoded result to [`apply_if_current`].
//!
//! DESIGN
//! ======
//! Planning is pure and never looks at the active tab, so switching panels
//! issues no reads. A result is applied only if the key it was issued under
//! is still the current key; anything else is a superseded request and is
//! dropped.
//!
//! ERROR HANDLING
//! ==============
//! A failed read is logged by the caller and its field stays `Loading`.

#[cfg(test)]
#[path = "fetcher_test.rs"]
mod fetcher_test;

use contracts::abi::{EventTicket, TicketFactory};
use contracts::calls::{self, ReadCall, decode_return};
use contracts::{Address, ContractError, U256};

use crate::state::events::{EventSnapshot, EventsState, Loadable, TicketInfo};

/// Fields the fetcher knows how to populate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReadField {
    AllContracts,
    UserContracts,
    Name,
    Price,
    CurrentSupply,
    MaxSupply,
    SaleActive,
    Owner,
    Balance,
    UserTickets,
}

/// A read ready to send, tagged with the field it fills.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlannedRead {
    pub field: ReadField,
    pub call: ReadCall,
}

impl PlannedRead {
    fn new(field: ReadField, call: ReadCall) -> Self {
        Self { field, call }
    }
}

/// Decoded result of one read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReadUpdate {
    AllContracts(Vec<Address>),
    UserContracts(Vec<Address>),
    Name(String),
    Price(U256),
    CurrentSupply(U256),
    MaxSupply(U256),
    SaleActive(bool),
    Owner(Address),
    Balance(U256),
    UserTickets(Vec<U256>),
    Ticket(U256, TicketInfo),
}

// =============================================================================
// KEYS
// =============================================================================

/// Inputs of the sidebar/selector lists.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ListKey {
    pub factory: Option<Address>,
    pub identity: Option<Address>,
    pub refresh: u64,
}

impl ListKey {
    #[must_use]
    pub fn plan(&self) -> Vec<PlannedRead> {
        let Some(factory) = self.factory else {
            return Vec::new();
        };
        let mut reads = vec![PlannedRead::new(ReadField::AllContracts, calls::deployed_contracts(factory))];
        if let Some(identity) = self.identity {
            reads.push(PlannedRead::new(ReadField::UserContracts, calls::contracts_by_owner(factory, identity)));
        }
        reads
    }
}

/// Inputs of the selected event's snapshot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EventKey {
    pub factory: Option<Address>,
    pub selection: Option<Address>,
    pub identity: Option<Address>,
    pub refresh: u64,
}

impl EventKey {
    #[must_use]
    pub fn plan(&self) -> Vec<PlannedRead> {
        let Some(contract) = self.selection else {
            return Vec::new();
        };
        let mut reads = Vec::with_capacity(8);
        if let Some(factory) = self.factory {
            reads.push(PlannedRead::new(ReadField::Name, calls::contract_name(factory, contract)));
        }
        reads.extend([
            PlannedRead::new(ReadField::Price, calls::ticket_price(contract)),
            PlannedRead::new(ReadField::CurrentSupply, calls::current_token_id(contract)),
            PlannedRead::new(ReadField::MaxSupply, calls::max_supply(contract)),
            PlannedRead::new(ReadField::SaleActive, calls::sale_active(contract)),
            PlannedRead::new(ReadField::Owner, calls::owner(contract)),
            PlannedRead::new(ReadField::Balance, calls::contract_balance(contract)),
        ]);
        if let Some(identity) = self.identity {
            reads.push(PlannedRead::new(ReadField::UserTickets, calls::tokens_by_owner(contract, identity)));
        }
        reads
    }

    /// Same contract, identity and factory; only the refresh counter may differ.
    #[must_use]
    pub fn same_target(&self, other: &Self) -> bool {
        self.factory == other.factory && self.selection == other.selection && self.identity == other.identity
    }
}

/// Per-ticket detail reads for the My Tickets grid.
#[must_use]
pub fn ticket_info_reads(contract: Address, ids: &[U256]) -> Vec<(U256, ReadCall)> {
    ids.iter().map(|id| (*id, calls::ticket_info(contract, *id))).collect()
}

// =============================================================================
// DECODING
// =============================================================================

/// Decode raw `eth_call` output for `field`.
///
/// # Errors
///
/// Returns [`ContractError::Decode`] when the bytes do not match the
/// function's return type.
pub fn decode_field(field: ReadField, output: &[u8]) -> Result<ReadUpdate, ContractError> {
    Ok(match field {
        ReadField::AllContracts => {
            ReadUpdate::AllContracts(decode_return::<TicketFactory::getDeployedContractsCall>(output)?)
        }
        ReadField::UserContracts => {
            ReadUpdate::UserContracts(decode_return::<TicketFactory::getContractsByOwnerCall>(output)?)
        }
        ReadField::Name => ReadUpdate::Name(decode_return::<TicketFactory::contractNamesCall>(output)?),
        ReadField::Price => ReadUpdate::Price(decode_return::<EventTicket::ticketPriceCall>(output)?),
        ReadField::CurrentSupply => {
            ReadUpdate::CurrentSupply(decode_return::<EventTicket::getCurrentTokenIdCall>(output)?)
        }
        ReadField::MaxSupply => ReadUpdate::MaxSupply(decode_return::<EventTicket::maxSupplyCall>(output)?),
        ReadField::SaleActive => ReadUpdate::SaleActive(decode_return::<EventTicket::saleActiveCall>(output)?),
        ReadField::Owner => ReadUpdate::Owner(decode_return::<EventTicket::ownerCall>(output)?),
        ReadField::Balance => ReadUpdate::Balance(decode_return::<EventTicket::getContractBalanceCall>(output)?),
        ReadField::UserTickets => ReadUpdate::UserTickets(decode_return::<EventTicket::getTokensByOwnerCall>(output)?),
    })
}

/// Decode a `getTicketInfo` reply.
///
/// # Errors
///
/// Returns [`ContractError::Decode`] on malformed output.
pub fn decode_ticket_info(output: &[u8]) -> Result<TicketInfo, ContractError> {
    let ret = decode_return::<EventTicket::getTicketInfoCall>(output)?;
    Ok(TicketInfo {
        used: ret.isUsed,
        purchase_time: ret.purchaseTime,
        original_owner: ret.originalOwner,
        current_owner: ret.currentOwner,
    })
}

/// Execute one planned read through the host proxy.
///
/// # Errors
///
/// Propagates transport, RPC and decode failures.
pub async fn fetch(read: &PlannedRead) -> Result<ReadUpdate, ContractError> {
    let output = super::rpc::eth_call(&read.call).await?;
    decode_field(read.field, &output)
}

/// Execute one `getTicketInfo` read.
///
/// # Errors
///
/// Propagates transport, RPC and decode failures.
pub async fn fetch_ticket(id: U256, call: &ReadCall) -> Result<ReadUpdate, ContractError> {
    let output = super::rpc::eth_call(call).await?;
    Ok(ReadUpdate::Ticket(id, decode_ticket_info(&output)?))
}

// =============================================================================
// APPLYING
// =============================================================================

fn planned<T>(reads: &[PlannedRead], field: ReadField, slot: &mut Loadable<T>, keep_ready: bool) {
    let enabled = reads.iter().any(|r| r.field == field);
    if !enabled {
        *slot = Loadable::Unloaded;
    } else if !(keep_ready && matches!(slot, Loadable::Ready(_))) {
        *slot = Loadable::Loading;
    }
}

/// Mark list fields for a new key. Lists that were already shown stay visible
/// while a refresh is in flight.
pub fn begin_list(state: &mut EventsState, key: &ListKey, previous: Option<&ListKey>) {
    let reads = key.plan();
    let keep = previous.is_some_and(|p| p.factory == key.factory);
    planned(&reads, ReadField::AllContracts, &mut state.all_contracts, keep);
    let keep_user = keep && previous.is_some_and(|p| p.identity == key.identity);
    planned(&reads, ReadField::UserContracts, &mut state.user_contracts, keep_user);
}

/// Mark snapshot fields for a new key. A different target starts from a
/// blank snapshot; a refresh of the same target keeps the current values.
pub fn begin_event(state: &mut EventsState, key: &EventKey, previous: Option<&EventKey>) {
    let keep = previous.is_some_and(|p| p.same_target(key));
    if !keep {
        state.selected = EventSnapshot::default();
    }
    let reads = key.plan();
    let s = &mut state.selected;
    planned(&reads, ReadField::Name, &mut s.name, keep);
    planned(&reads, ReadField::Price, &mut s.price, keep);
    planned(&reads, ReadField::CurrentSupply, &mut s.current_supply, keep);
    planned(&reads, ReadField::MaxSupply, &mut s.max_supply, keep);
    planned(&reads, ReadField::SaleActive, &mut s.sale_active, keep);
    planned(&reads, ReadField::Owner, &mut s.owner, keep);
    planned(&reads, ReadField::Balance, &mut s.balance, keep);
    planned(&reads, ReadField::UserTickets, &mut s.user_tickets, keep);
}

/// Write a decoded value into the state.
pub fn apply(state: &mut EventsState, update: ReadUpdate) {
    let s = &mut state.selected;
    match update {
        ReadUpdate::AllContracts(list) => state.all_contracts = Loadable::Ready(list),
        ReadUpdate::UserContracts(list) => state.user_contracts = Loadable::Ready(list),
        ReadUpdate::Name(name) => s.name = Loadable::Ready(name),
        ReadUpdate::Price(price) => s.price = Loadable::Ready(price),
        ReadUpdate::CurrentSupply(v) => s.current_supply = Loadable::Ready(v),
        ReadUpdate::MaxSupply(v) => s.max_supply = Loadable::Ready(v),
        ReadUpdate::SaleActive(active) => s.sale_active = Loadable::Ready(active),
        ReadUpdate::Owner(owner) => s.owner = Loadable::Ready(owner),
        ReadUpdate::Balance(v) => s.balance = Loadable::Ready(v),
        ReadUpdate::UserTickets(ids) => {
            s.ticket_info.retain(|id, _| ids.contains(id));
            s.user_tickets = Loadable::Ready(ids);
        }
        ReadUpdate::Ticket(id, info) => {
            s.ticket_info.insert(id, info);
        }
    }
}

/// Apply `update` only if the key it was issued under is still current.
/// Returns whether the update was applied.
pub fn apply_if_current<K: PartialEq>(state: &mut EventsState, issued: &K, current: &K, update: ReadUpdate) -> bool {
    if issued != current {
        return false;
    }
    apply(state, update);
    true
}
