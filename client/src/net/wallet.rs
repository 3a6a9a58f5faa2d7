//! Bridge to the injected EIP-1193 wallet (`window.ethereum`).
//!
//! The wallet owns keys, signing, broadcast and network selection. This
//! module only asks it for the active accounts and hands it transactions.
//! All calls go through `ethereum.request({ method, params })`; arguments and
//! results cross the JS boundary as JSON text.
//!
//! Server-side (SSR) builds get stubs that report the wallet as unavailable.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "wallet_test.rs"]
mod wallet_test;

use contracts::rpc::{METHOD_ACCOUNTS, METHOD_REQUEST_ACCOUNTS, METHOD_SEND_TRANSACTION, TransactionRequest};
use contracts::{Address, ContractError};
use serde_json::Value;

/// Event the provider emits when the user switches or disconnects accounts.
#[cfg(feature = "hydrate")]
const ACCOUNTS_CHANGED_EVENT: &str = "accountsChanged";

/// Body passed to `ethereum.request`.
#[must_use]
pub fn request_body(method: &str, params: Value) -> Value {
    serde_json::json!({ "method": method, "params": params })
}

/// Interpret the result of `eth_sendTransaction` as a transaction hash.
///
/// # Errors
///
/// Returns [`ContractError::InvalidResponse`] when the wallet returns
/// anything other than a string.
pub fn parse_tx_hash(result: &Value) -> Result<String, ContractError> {
    result
        .as_str()
        .map(str::to_owned)
        .ok_or_else(|| ContractError::InvalidResponse(format!("expected transaction hash, got {result}")))
}

#[cfg(feature = "hydrate")]
fn provider() -> Option<wasm_bindgen::JsValue> {
    let window = web_sys::window()?;
    let eth = js_sys::Reflect::get(&window, &wasm_bindgen::JsValue::from_str("ethereum")).ok()?;
    if eth.is_undefined() || eth.is_null() { None } else { Some(eth) }
}

#[cfg(feature = "hydrate")]
fn js_error_message(err: &wasm_bindgen::JsValue) -> String {
    js_sys::Reflect::get(err, &wasm_bindgen::JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .unwrap_or_else(|| format!("{err:?}"))
}

/// Whether a wallet provider is injected into the page.
pub fn is_available() -> bool {
    #[cfg(feature = "hydrate")]
    {
        provider().is_some()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Call `ethereum.request({ method, params })` and return its JSON result.
async fn request(method: &str, params: Value) -> Result<Value, ContractError> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast as _;

        let eth = provider().ok_or(ContractError::WalletUnavailable)?;
        let request_fn: js_sys::Function = js_sys::Reflect::get(&eth, &wasm_bindgen::JsValue::from_str("request"))
            .map_err(|e| ContractError::Transport(js_error_message(&e)))?
            .dyn_into()
            .map_err(|_| ContractError::WalletUnavailable)?;
        let args = js_sys::JSON::parse(&request_body(method, params).to_string())
            .map_err(|e| ContractError::Transport(js_error_message(&e)))?;
        let promise: js_sys::Promise = request_fn
            .call1(&eth, &args)
            .map_err(|e| ContractError::Transport(js_error_message(&e)))?
            .dyn_into()
            .map_err(|_| ContractError::InvalidResponse("request did not return a promise".to_owned()))?;
        let result = wasm_bindgen_futures::JsFuture::from(promise)
            .await
            .map_err(|e| ContractError::Transport(js_error_message(&e)))?;
        if result.is_undefined() || result.is_null() {
            return Ok(Value::Null);
        }
        let text = js_sys::JSON::stringify(&result)
            .ok()
            .and_then(|s| s.as_string())
            .unwrap_or_default();
        serde_json::from_str(&text).map_err(|e| ContractError::InvalidResponse(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (method, params);
        Err(ContractError::WalletUnavailable)
    }
}

/// Ask the wallet to connect and return the first authorized account.
///
/// # Errors
///
/// Returns an error if no wallet is present or the user rejects the request.
pub async fn connect() -> Result<Option<Address>, ContractError> {
    let result = request(METHOD_REQUEST_ACCOUNTS, Value::Array(Vec::new())).await?;
    Ok(contracts::rpc::parse_accounts(&result).first().copied())
}

/// Read the currently authorized accounts without prompting.
///
/// # Errors
///
/// Returns an error if no wallet is present or the provider call fails.
pub async fn accounts() -> Result<Vec<Address>, ContractError> {
    let result = request(METHOD_ACCOUNTS, Value::Array(Vec::new())).await?;
    Ok(contracts::rpc::parse_accounts(&result))
}

/// Hand a transaction to the wallet for signing and broadcast.
///
/// # Errors
///
/// Returns an error if no wallet is present, the user rejects the prompt,
/// or the wallet reports a submission failure.
pub async fn send_transaction(tx: TransactionRequest) -> Result<String, ContractError> {
    let result = request(METHOD_SEND_TRANSACTION, tx.to_params()).await?;
    parse_tx_hash(&result)
}

/// Invoke `on_change` with the new account list whenever the wallet reports
/// an account switch. The listener lives for the rest of the page.
pub fn watch_accounts(on_change: impl Fn(Vec<Address>) + 'static) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast as _;
        use wasm_bindgen::closure::Closure;

        let Some(eth) = provider() else {
            return;
        };
        let Ok(on_fn) = js_sys::Reflect::get(&eth, &wasm_bindgen::JsValue::from_str("on")) else {
            return;
        };
        let Ok(on_fn) = on_fn.dyn_into::<js_sys::Function>() else {
            return;
        };
        let listener = Closure::<dyn Fn(wasm_bindgen::JsValue)>::new(move |accounts: wasm_bindgen::JsValue| {
            let text = js_sys::JSON::stringify(&accounts)
                .ok()
                .and_then(|s| s.as_string())
                .unwrap_or_default();
            let value: Value = serde_json::from_str(&text).unwrap_or(Value::Null);
            on_change(contracts::rpc::parse_accounts(&value));
        });
        let _ = on_fn.call2(
            &eth,
            &wasm_bindgen::JsValue::from_str(ACCOUNTS_CHANGED_EVENT),
            listener.as_ref().unchecked_ref(),
        );
        listener.forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = on_change;
    }
}
