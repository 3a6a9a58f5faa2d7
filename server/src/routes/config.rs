//! `GET /api/config`: deployment settings the browser needs at startup.

use axum::Json;
use axum::extract::State;
use contracts::Address;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ClientConfigBody {
    pub factory_address: Address,
    pub chain_id: Option<u64>,
}

pub async fn client_config(State(state): State<AppState>) -> Json<ClientConfigBody> {
    Json(ClientConfigBody { factory_address: state.config.factory_address, chain_id: state.config.chain_id })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
