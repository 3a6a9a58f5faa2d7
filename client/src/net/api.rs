//! REST helpers for the host's own endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None` since the config is only
//! consumed in the browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use contracts::Address;
use serde::Deserialize;

#[cfg(any(test, feature = "hydrate"))]
const CONFIG_ENDPOINT: &str = "/api/config";

/// Deployment settings published by the host.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ClientConfig {
    pub factory_address: Address,
    #[serde(default)]
    pub chain_id: Option<u64>,
}

#[cfg(any(test, feature = "hydrate"))]
fn config_request_failed_message(status: u16) -> String {
    format!("config request failed: {status}")
}

/// Fetch the deployment config from `/api/config`.
/// Returns `None` on failure or on the server.
pub async fn fetch_config() -> Option<ClientConfig> {
    #[cfg(feature = "hydrate")]
    {
        let resp = match gloo_net::http::Request::get(CONFIG_ENDPOINT).send().await {
            Ok(resp) => resp,
            Err(e) => {
                leptos::logging::warn!("config request failed: {e}");
                return None;
            }
        };
        if !resp.ok() {
            leptos::logging::warn!("{}", config_request_failed_message(resp.status()));
            return None;
        }
        resp.json::<ClientConfig>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
