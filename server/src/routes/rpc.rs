//! `POST /api/rpc`: JSON-RPC passthrough for reads.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use contracts::rpc::{RpcRequest, RpcResponse};

use crate::rpc::ProxyError;
use crate::state::AppState;

pub async fn proxy_rpc(
    State(state): State<AppState>,
    Json(request): Json<RpcRequest>,
) -> Result<Json<RpcResponse>, StatusCode> {
    state.proxy.handle(&request).await.map(Json).map_err(proxy_error_to_status)
}

pub(crate) fn proxy_error_to_status(err: ProxyError) -> StatusCode {
    match err {
        ProxyError::Request(_) | ProxyError::UpstreamStatus { .. } | ProxyError::Parse(_) => StatusCode::BAD_GATEWAY,
        ProxyError::HttpClientBuild(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[cfg(test)]
#[path = "rpc_test.rs"]
mod tests;
