//! JSON-RPC 2.0 envelopes for node reads and wallet submissions.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser builds these envelopes and posts them either to the host's
//! `/api/rpc` proxy (reads) or to the injected wallet (identity and
//! submissions). The proxy parses the same types to enforce its method
//! allowlist before forwarding.

#[cfg(test)]
#[path = "rpc_test.rs"]
mod rpc_test;

use alloy_primitives::{Address, Bytes, U256};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ContractError;

pub const METHOD_CALL: &str = "eth_call";
pub const METHOD_CHAIN_ID: &str = "eth_chainId";
pub const METHOD_BLOCK_NUMBER: &str = "eth_blockNumber";
pub const METHOD_ACCOUNTS: &str = "eth_accounts";
pub const METHOD_REQUEST_ACCOUNTS: &str = "eth_requestAccounts";
pub const METHOD_SEND_TRANSACTION: &str = "eth_sendTransaction";

/// Methods a read-only proxy may forward to the node.
pub const READ_METHODS: &[&str] = &[METHOD_CALL, METHOD_CHAIN_ID, METHOD_BLOCK_NUMBER];

/// JSON-RPC error code for an unknown or disallowed method.
pub const CODE_METHOD_NOT_FOUND: i64 = -32601;

/// Outgoing JSON-RPC request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RpcRequest {
    pub jsonrpc: String,
    /// Number, string or null; echoed back unchanged.
    #[serde(default)]
    pub id: Value,
    pub method: String,
    #[serde(default)]
    pub params: Value,
}

impl RpcRequest {
    #[must_use]
    pub fn new(id: u64, method: &str, params: Value) -> Self {
        Self { jsonrpc: "2.0".to_owned(), id: Value::from(id), method: method.to_owned(), params }
    }

    /// Whether a read-only proxy may forward this request.
    #[must_use]
    pub fn is_read_only(&self) -> bool {
        READ_METHODS.contains(&self.method.as_str())
    }

    /// Calldata carried by an `eth_call`, if any.
    #[must_use]
    pub fn call_data(&self) -> Option<Bytes> {
        if self.method != METHOD_CALL {
            return None;
        }
        let call = self.params.get(0)?;
        let data = call.get("data").or_else(|| call.get("input"))?;
        serde_json::from_value(data.clone()).ok()
    }
}

/// JSON-RPC error object.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RpcErrorObject {
    pub code: i64,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

/// Incoming JSON-RPC response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RpcResponse {
    pub jsonrpc: String,
    #[serde(default)]
    pub id: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcErrorObject>,
}

impl RpcResponse {
    /// Build an error response for `id` without contacting any node.
    #[must_use]
    pub fn error(id: Value, code: i64, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: "2.0".to_owned(),
            id,
            result: None,
            error: Some(RpcErrorObject { code, message: message.into(), data: None }),
        }
    }

    /// Unwrap the `result` member.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::Rpc`] when the response carries an error
    /// object and [`ContractError::InvalidResponse`] when it carries neither.
    pub fn into_result(self) -> Result<Value, ContractError> {
        if let Some(err) = self.error {
            return Err(ContractError::Rpc { code: err.code, message: err.message });
        }
        self.result
            .ok_or_else(|| ContractError::InvalidResponse("missing result field".to_owned()))
    }
}

/// Parameters of an `eth_call` against the latest block.
#[must_use]
pub fn call_params(to: Address, data: &Bytes) -> Value {
    serde_json::json!([{ "to": to, "data": data }, "latest"])
}

/// Decode the hex payload an `eth_call` returns.
///
/// # Errors
///
/// Returns [`ContractError::InvalidResponse`] if the value is not a hex string.
pub fn call_output(result: Value) -> Result<Bytes, ContractError> {
    serde_json::from_value(result).map_err(|e| ContractError::InvalidResponse(format!("eth_call output: {e}")))
}

/// A state-changing call handed to the wallet for signing and broadcast.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRequest {
    pub from: Address,
    pub to: Address,
    pub data: Bytes,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<U256>,
}

impl TransactionRequest {
    /// Parameters of `eth_sendTransaction`.
    #[must_use]
    pub fn to_params(&self) -> Value {
        serde_json::json!([self])
    }
}

/// Parse the account list returned by `eth_accounts` / `eth_requestAccounts`.
///
/// Entries that are not valid addresses are skipped.
#[must_use]
pub fn parse_accounts(result: &Value) -> Vec<Address> {
    result
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .filter_map(crate::units::parse_address)
                .collect()
        })
        .unwrap_or_default()
}
