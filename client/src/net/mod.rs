//! Networking: host endpoints, chain reads and the wallet.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` loads the host config, `rpc` sends `eth_call` through the host
//! proxy, `wallet` talks to the injected EIP-1193 provider, `fetcher` plans
//! and applies reads, and `dispatch` validates and submits transactions.

pub mod api;
pub mod dispatch;
pub mod fetcher;
pub mod rpc;
pub mod wallet;
