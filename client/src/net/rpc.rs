//! `eth_call` reads sent through the host's `/api/rpc` proxy.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is returned as [`ContractError`]; the fetcher logs it and
//! leaves the field in its loading state.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "rpc_test.rs"]
mod rpc_test;

use std::sync::atomic::{AtomicU64, Ordering};

use contracts::calls::ReadCall;
use contracts::rpc::{METHOD_CALL, RpcRequest, call_params};
use contracts::{Bytes, ContractError};

#[cfg(any(test, feature = "hydrate"))]
const RPC_ENDPOINT: &str = "/api/rpc";

static NEXT_REQUEST_ID: AtomicU64 = AtomicU64::new(1);

/// Allocate a JSON-RPC request id unique within this page.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
pub(crate) fn next_request_id() -> u64 {
    NEXT_REQUEST_ID.fetch_add(1, Ordering::Relaxed)
}

/// Envelope for one `eth_call`.
#[must_use]
pub fn call_request(id: u64, call: &ReadCall) -> RpcRequest {
    RpcRequest::new(id, METHOD_CALL, call_params(call.to, &call.data))
}

/// Execute a read and return the raw ABI-encoded output.
///
/// # Errors
///
/// Returns [`ContractError::Transport`] when the proxy is unreachable or
/// answers a non-OK status, [`ContractError::Rpc`] when the node rejects the
/// call, and [`ContractError::InvalidResponse`] for malformed replies.
pub async fn eth_call(call: &ReadCall) -> Result<Bytes, ContractError> {
    #[cfg(feature = "hydrate")]
    {
        let request = call_request(next_request_id(), call);
        let resp = gloo_net::http::Request::post(RPC_ENDPOINT)
            .json(&request)
            .map_err(|e| ContractError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ContractError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(ContractError::Transport(format!("rpc proxy returned {}", resp.status())));
        }
        let body: contracts::rpc::RpcResponse = resp
            .json()
            .await
            .map_err(|e| ContractError::InvalidResponse(e.to_string()))?;
        contracts::rpc::call_output(body.into_result()?)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = call;
        Err(ContractError::Transport("not available on server".to_owned()))
    }
}
