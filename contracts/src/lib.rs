//! Shared contract boundary for the ticketing dashboard.
//!
//! This crate owns everything both the browser client and the host server
//! need to agree on: the `sol!` interface declarations of the factory and
//! ticket contracts, the registry of functions the dashboard calls, JSON-RPC
//! envelopes, typed call builders/decoders and amount formatting. It has no
//! I/O of its own and builds for both native and `wasm32` targets.

pub mod abi;
pub mod calls;
pub mod error;
pub mod registry;
pub mod rpc;
pub mod units;

pub use alloy_primitives::{Address, Bytes, U256};
pub use error::ContractError;
