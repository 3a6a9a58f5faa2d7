//! Typed builders for the reads and writes the dashboard issues.
//!
//! Reads become `eth_call` payloads ([`ReadCall`]); writes become
//! [`TransactionRequest`]s for the wallet. Return data is decoded through the
//! same `sol!` types so request and response shapes cannot drift apart.

#[cfg(test)]
#[path = "calls_test.rs"]
mod calls_test;

use alloy_primitives::{Address, Bytes, U256};
use alloy_sol_types::SolCall;

use crate::abi::{EventTicket, TicketFactory};
use crate::error::ContractError;
use crate::rpc::TransactionRequest;

/// One `eth_call` against a contract.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReadCall {
    pub to: Address,
    pub data: Bytes,
    pub function: &'static str,
}

impl ReadCall {
    #[must_use]
    pub fn new<C: SolCall>(to: Address, call: &C) -> Self {
        Self { to, data: Bytes::from(call.abi_encode()), function: C::SIGNATURE }
    }
}

/// Decode return data for call type `C`.
///
/// # Errors
///
/// Returns [`ContractError::Decode`] when `output` does not match the
/// declared return shape (including an empty reply from a non-contract
/// address).
pub fn decode_return<C: SolCall>(output: &[u8]) -> Result<C::Return, ContractError> {
    C::abi_decode_returns(output).map_err(|source| ContractError::Decode { function: C::SIGNATURE, source })
}

/// Encode a state-changing call for the wallet.
#[must_use]
pub fn transaction<C: SolCall>(from: Address, to: Address, call: &C, value: Option<U256>) -> TransactionRequest {
    TransactionRequest { from, to, data: Bytes::from(call.abi_encode()), value }
}

// =============================================================================
// FACTORY READS
// =============================================================================

#[must_use]
pub fn deployed_contracts(factory: Address) -> ReadCall {
    ReadCall::new(factory, &TicketFactory::getDeployedContractsCall {})
}

#[must_use]
pub fn contracts_by_owner(factory: Address, owner: Address) -> ReadCall {
    ReadCall::new(factory, &TicketFactory::getContractsByOwnerCall { owner })
}

#[must_use]
pub fn contract_name(factory: Address, contract: Address) -> ReadCall {
    ReadCall::new(factory, &TicketFactory::contractNamesCall { contractAddress: contract })
}

// =============================================================================
// TICKET READS
// =============================================================================

#[must_use]
pub fn ticket_price(contract: Address) -> ReadCall {
    ReadCall::new(contract, &EventTicket::ticketPriceCall {})
}

#[must_use]
pub fn current_token_id(contract: Address) -> ReadCall {
    ReadCall::new(contract, &EventTicket::getCurrentTokenIdCall {})
}

#[must_use]
pub fn max_supply(contract: Address) -> ReadCall {
    ReadCall::new(contract, &EventTicket::maxSupplyCall {})
}

#[must_use]
pub fn sale_active(contract: Address) -> ReadCall {
    ReadCall::new(contract, &EventTicket::saleActiveCall {})
}

#[must_use]
pub fn owner(contract: Address) -> ReadCall {
    ReadCall::new(contract, &EventTicket::ownerCall {})
}

#[must_use]
pub fn tokens_by_owner(contract: Address, owner: Address) -> ReadCall {
    ReadCall::new(contract, &EventTicket::getTokensByOwnerCall { owner })
}

#[must_use]
pub fn ticket_info(contract: Address, token_id: U256) -> ReadCall {
    ReadCall::new(contract, &EventTicket::getTicketInfoCall { tokenId: token_id })
}

#[must_use]
pub fn contract_balance(contract: Address) -> ReadCall {
    ReadCall::new(contract, &EventTicket::getContractBalanceCall {})
}

// =============================================================================
// WRITES
// =============================================================================

#[must_use]
pub fn deploy_contract(from: Address, factory: Address, name: &str, symbol: &str, event_name: &str) -> TransactionRequest {
    let call = TicketFactory::deployContractCall {
        name: name.to_owned(),
        symbol: symbol.to_owned(),
        eventName: event_name.to_owned(),
    };
    transaction(from, factory, &call, None)
}

/// Mint one ticket, attaching `price` as the payment.
#[must_use]
pub fn mint_ticket(from: Address, contract: Address, token_uri: &str, price: U256) -> TransactionRequest {
    let call = EventTicket::mintTicketCall { tokenURI: token_uri.to_owned() };
    transaction(from, contract, &call, Some(price))
}

#[must_use]
pub fn set_ticket_price(from: Address, contract: Address, price: U256) -> TransactionRequest {
    transaction(from, contract, &EventTicket::setTicketPriceCall { _price: price }, None)
}

#[must_use]
pub fn toggle_sale(from: Address, contract: Address) -> TransactionRequest {
    transaction(from, contract, &EventTicket::toggleSaleCall {}, None)
}

#[must_use]
pub fn withdraw_funds(from: Address, contract: Address) -> TransactionRequest {
    transaction(from, contract, &EventTicket::withdrawFundsCall {}, None)
}

#[must_use]
pub fn use_ticket(from: Address, contract: Address, token_id: U256) -> TransactionRequest {
    transaction(from, contract, &EventTicket::useTicketCall { tokenId: token_id }, None)
}
