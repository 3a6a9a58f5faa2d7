//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It is
//! immutable after startup: the parsed config and the proxy client.

use std::sync::Arc;

use crate::config::Config;
use crate::rpc::{ProxyError, RpcProxy};

/// Clone is required by Axum; the config is shared behind an `Arc` and the
/// proxy's HTTP client is already reference-counted.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub proxy: RpcProxy,
}

impl AppState {
    /// # Errors
    ///
    /// Returns [`ProxyError::HttpClientBuild`] if the proxy client cannot be
    /// constructed.
    pub fn new(config: Config) -> Result<Self, ProxyError> {
        let proxy = RpcProxy::new(config.rpc_url.clone(), config.timeouts)?;
        Ok(Self { config: Arc::new(config), proxy })
    }
}
