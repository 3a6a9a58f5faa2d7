//! Host configuration parsed from environment variables.

use contracts::Address;
use contracts::units::parse_address;

pub const DEFAULT_FACTORY_ADDRESS: &str = "0x816631D7A13bc45BAbd54e0Bbb14c0eb32D37937";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_RPC_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_RPC_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required variable is not set.
    #[error("missing env var {0}")]
    Missing(&'static str),

    /// A variable is set but malformed.
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RpcTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Upstream JSON-RPC node the proxy forwards reads to.
    pub rpc_url: String,
    pub factory_address: Address,
    /// Informational; published to the browser as-is.
    pub chain_id: Option<u64>,
    pub port: u16,
    pub timeouts: RpcTimeouts,
}

impl Config {
    /// Build typed config from the process environment.
    ///
    /// Required:
    /// - `RPC_URL`
    ///
    /// Optional:
    /// - `FACTORY_ADDRESS`: default [`DEFAULT_FACTORY_ADDRESS`]
    /// - `CHAIN_ID`
    /// - `PORT`: default 3000
    /// - `RPC_REQUEST_TIMEOUT_SECS`: default 30
    /// - `RPC_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `RPC_URL` is missing or any set value is
    /// malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup. Blank values count as unset.
    ///
    /// # Errors
    ///
    /// See [`Config::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let rpc_url = get("RPC_URL").ok_or(ConfigError::Missing("RPC_URL"))?;
        let factory_raw = get("FACTORY_ADDRESS").unwrap_or_else(|| DEFAULT_FACTORY_ADDRESS.to_owned());
        let factory_address = parse_address(&factory_raw)
            .ok_or(ConfigError::Invalid { var: "FACTORY_ADDRESS", value: factory_raw.clone() })?;
        let chain_id = get("CHAIN_ID").map(|v| parse_number("CHAIN_ID", &v)).transpose()?;
        let port = get("PORT").map_or(Ok(DEFAULT_PORT), |v| parse_number("PORT", &v))?;
        let timeouts = RpcTimeouts {
            request_secs: get("RPC_REQUEST_TIMEOUT_SECS")
                .map_or(Ok(DEFAULT_RPC_REQUEST_TIMEOUT_SECS), |v| parse_number("RPC_REQUEST_TIMEOUT_SECS", &v))?,
            connect_secs: get("RPC_CONNECT_TIMEOUT_SECS")
                .map_or(Ok(DEFAULT_RPC_CONNECT_TIMEOUT_SECS), |v| parse_number("RPC_CONNECT_TIMEOUT_SECS", &v))?,
        };

        Ok(Self { rpc_url, factory_address, chain_id, port, timeouts })
    }
}

fn parse_number<T: std::str::FromStr>(var: &'static str, value: &str) -> Result<T, ConfigError> {
    value
        .parse::<T>()
        .map_err(|_| ConfigError::Invalid { var, value: value.to_owned() })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
