//! Error type shared by the read path, the wallet bridge and the proxy.

/// Failure talking to a node or wallet, or interpreting what came back.
#[derive(Debug, thiserror::Error)]
pub enum ContractError {
    /// The node or wallet answered with a JSON-RPC error object.
    #[error("rpc error {code}: {message}")]
    Rpc { code: i64, message: String },

    /// The JSON-RPC envelope was malformed (no `result`, wrong shape).
    #[error("invalid rpc response: {0}")]
    InvalidResponse(String),

    /// Return data could not be ABI-decoded into the expected type.
    #[error("abi decode failed for {function}: {source}")]
    Decode {
        function: &'static str,
        #[source]
        source: alloy_sol_types::Error,
    },

    /// The request never produced a response (network, fetch, promise rejection).
    #[error("transport failed: {0}")]
    Transport(String),

    /// No EIP-1193 provider is injected into the page.
    #[error("no wallet provider available")]
    WalletUnavailable,

    /// A user-entered amount is not a valid decimal in the display unit.
    #[error("invalid amount {input:?}: {reason}")]
    InvalidAmount { input: String, reason: String },
}
