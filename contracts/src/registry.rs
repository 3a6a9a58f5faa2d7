//! Queryable table of every contract function the dashboard invokes.
//!
//! The `sol!` declarations in [`crate::abi`] carry the full interfaces; this
//! table narrows them to the calls the dashboard actually issues and records
//! their mutability so requests can be labelled in logs by name instead of by
//! raw 4-byte selector.

#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_test;

use alloy_sol_types::SolCall;

use crate::abi::{EventTicket, TicketFactory};

/// Which of the two remote interfaces a function belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContractKind {
    Factory,
    Ticket,
}

/// State mutability as declared in the ABI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mutability {
    View,
    NonPayable,
    Payable,
}

/// Static description of one callable function.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FunctionSpec {
    pub contract: ContractKind,
    pub signature: &'static str,
    pub selector: [u8; 4],
    pub mutability: Mutability,
}

impl FunctionSpec {
    /// Function name without the parameter list, e.g. `"mintTicket"`.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.signature
            .split_once('(')
            .map_or(self.signature, |(name, _)| name)
    }
}

const fn entry<C: SolCall>(contract: ContractKind, mutability: Mutability) -> FunctionSpec {
    FunctionSpec { contract, signature: C::SIGNATURE, selector: C::SELECTOR, mutability }
}

/// Every function the dashboard reads or writes.
pub static FUNCTIONS: &[FunctionSpec] = &[
    // Factory reads.
    entry::<TicketFactory::getDeployedContractsCall>(ContractKind::Factory, Mutability::View),
    entry::<TicketFactory::getContractsByOwnerCall>(ContractKind::Factory, Mutability::View),
    entry::<TicketFactory::contractNamesCall>(ContractKind::Factory, Mutability::View),
    // Factory writes.
    entry::<TicketFactory::deployContractCall>(ContractKind::Factory, Mutability::NonPayable),
    // Ticket reads.
    entry::<EventTicket::ticketPriceCall>(ContractKind::Ticket, Mutability::View),
    entry::<EventTicket::getCurrentTokenIdCall>(ContractKind::Ticket, Mutability::View),
    entry::<EventTicket::maxSupplyCall>(ContractKind::Ticket, Mutability::View),
    entry::<EventTicket::saleActiveCall>(ContractKind::Ticket, Mutability::View),
    entry::<EventTicket::ownerCall>(ContractKind::Ticket, Mutability::View),
    entry::<EventTicket::getTokensByOwnerCall>(ContractKind::Ticket, Mutability::View),
    entry::<EventTicket::getTicketInfoCall>(ContractKind::Ticket, Mutability::View),
    entry::<EventTicket::getContractBalanceCall>(ContractKind::Ticket, Mutability::View),
    // Ticket writes.
    entry::<EventTicket::mintTicketCall>(ContractKind::Ticket, Mutability::Payable),
    entry::<EventTicket::setTicketPriceCall>(ContractKind::Ticket, Mutability::NonPayable),
    entry::<EventTicket::toggleSaleCall>(ContractKind::Ticket, Mutability::NonPayable),
    entry::<EventTicket::withdrawFundsCall>(ContractKind::Ticket, Mutability::NonPayable),
    entry::<EventTicket::useTicketCall>(ContractKind::Ticket, Mutability::NonPayable),
];

/// Look up a function by its 4-byte selector.
#[must_use]
pub fn by_selector(selector: [u8; 4]) -> Option<&'static FunctionSpec> {
    FUNCTIONS.iter().find(|f| f.selector == selector)
}

/// Identify the function encoded at the front of `calldata`.
///
/// Returns `None` for calldata shorter than a selector or an unknown selector.
#[must_use]
pub fn describe_calldata(calldata: &[u8]) -> Option<&'static FunctionSpec> {
    let selector: [u8; 4] = calldata.get(..4)?.try_into().ok()?;
    by_selector(selector)
}
