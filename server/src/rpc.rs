//! Read-only JSON-RPC proxy between the browser and the upstream node.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser never talks to the node directly. It posts JSON-RPC requests
//! to `/api/rpc`; this module checks the method against an allow-list of
//! read methods and forwards accepted requests to `RPC_URL`.
//!
//! ERROR HANDLING
//! ==============
//! A disallowed method is answered locally with a JSON-RPC error object and
//! never reaches the node. Transport failures, non-2xx upstream statuses and
//! unparsable replies become [`ProxyError`], which the route maps to 502.

use std::time::Duration;

use contracts::registry::describe_calldata;
use contracts::rpc::{CODE_METHOD_NOT_FOUND, RpcRequest, RpcResponse};
use serde_json::Value;

use crate::config::RpcTimeouts;

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    /// The request to the node could not be sent or its body not read.
    #[error("upstream request failed: {0}")]
    Request(String),

    /// The node answered with a non-success HTTP status.
    #[error("upstream status {status}")]
    UpstreamStatus { status: u16, body: String },

    /// The node's body was not a JSON-RPC response.
    #[error("upstream response parse failed: {0}")]
    Parse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

/// Forwarding client for the configured node.
#[derive(Clone)]
pub struct RpcProxy {
    http: reqwest::Client,
    upstream: String,
}

impl RpcProxy {
    /// # Errors
    ///
    /// Returns [`ProxyError::HttpClientBuild`] if the HTTP client cannot be
    /// constructed.
    pub fn new(upstream: impl Into<String>, timeouts: RpcTimeouts) -> Result<Self, ProxyError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| ProxyError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, upstream: upstream.into() })
    }

    /// Answer one JSON-RPC request, forwarding it only if it is a read.
    ///
    /// # Errors
    ///
    /// Returns [`ProxyError`] when an allowed request cannot be completed
    /// upstream. Disallowed methods are not errors; they get a JSON-RPC error
    /// response.
    pub async fn handle(&self, request: &RpcRequest) -> Result<RpcResponse, ProxyError> {
        if !request.is_read_only() {
            tracing::warn!(method = %request.method, "rejected non-read rpc method");
            return Ok(rejection(request));
        }
        let function = request
            .call_data()
            .and_then(|data| describe_calldata(&data))
            .map_or("-", |f| f.signature);
        match self.forward(request).await {
            Ok(response) => {
                tracing::debug!(method = %request.method, function, ok = response.error.is_none(), "rpc forwarded");
                Ok(response)
            }
            Err(e) => {
                tracing::warn!(method = %request.method, function, error = %e, "rpc forward failed");
                Err(e)
            }
        }
    }

    async fn forward(&self, request: &RpcRequest) -> Result<RpcResponse, ProxyError> {
        let response = self
            .http
            .post(&self.upstream)
            .json(request)
            .send()
            .await
            .map_err(|e| ProxyError::Request(e.to_string()))?;

        let status = response.status();
        let text = response.text().await.map_err(|e| ProxyError::Request(e.to_string()))?;
        if !status.is_success() {
            return Err(ProxyError::UpstreamStatus { status: status.as_u16(), body: text });
        }
        serde_json::from_str(&text).map_err(|e| ProxyError::Parse(e.to_string()))
    }
}

/// JSON-RPC "method not found" answer for a method outside the allow-list.
#[must_use]
pub fn rejection(request: &RpcRequest) -> RpcResponse {
    RpcResponse::error(
        request.id.clone(),
        CODE_METHOD_NOT_FOUND,
        format!("method {} is not available through this proxy", request.method),
    )
}

#[cfg(test)]
#[path = "rpc_test.rs"]
mod tests;
