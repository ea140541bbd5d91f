//! Wallet Bridge
//!
//! Bindings to the provider injected at `window.aptos`, plus typed
//! wrappers that marshal through serde-wasm-bindgen at the boundary.

use js_sys::{Function, Reflect};
use thiserror::Error;
use wasm_bindgen::prelude::*;

use crate::models::{EntryFunctionPayload, PendingTransaction, WalletAccount};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "aptos"], catch)]
    async fn connect() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = ["window", "aptos"], catch)]
    async fn disconnect() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = ["window", "aptos"], catch)]
    async fn account() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = ["window", "aptos"], js_name = signAndSubmitTransaction, catch)]
    async fn sign_and_submit_transaction(payload: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = ["window", "aptos"], js_name = onAccountChange)]
    fn on_account_change(callback: &Function);
}

#[derive(Debug, Error)]
pub enum WalletError {
    #[error("no wallet extension detected")]
    NotDetected,
    #[error("wallet call failed: {0}")]
    Provider(String),
    #[error("malformed wallet response: {0}")]
    Decode(String),
}

/// Rejections and provider failures arrive as JS errors; pull the message
/// out if there is one.
fn provider_error(err: JsValue) -> WalletError {
    let message = Reflect::get(&err, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .unwrap_or_else(|| format!("{:?}", err));
    WalletError::Provider(message)
}

fn decode_error(err: serde_wasm_bindgen::Error) -> WalletError {
    WalletError::Decode(err.to_string())
}

/// True when a provider object is injected on `window`.
pub fn detected() -> bool {
    web_sys::window()
        .map(|w| Reflect::has(&w, &JsValue::from_str("aptos")).unwrap_or(false))
        .unwrap_or(false)
}

/// Prompt the user to connect; resolves to the approved account.
pub async fn connect_wallet() -> Result<WalletAccount, WalletError> {
    if !detected() {
        return Err(WalletError::NotDetected);
    }
    let value = connect().await.map_err(provider_error)?;
    serde_wasm_bindgen::from_value(value).map_err(decode_error)
}

pub async fn disconnect_wallet() -> Result<(), WalletError> {
    if !detected() {
        return Err(WalletError::NotDetected);
    }
    disconnect().await.map_err(provider_error)?;
    Ok(())
}

/// Account from an already-authorized session, if the provider has one.
pub async fn connected_account() -> Option<WalletAccount> {
    if !detected() {
        return None;
    }
    let value = account().await.ok()?;
    serde_wasm_bindgen::from_value(value).ok()
}

/// Sign and submit an entry-function payload. The provider signs as the
/// connected account; a user rejection surfaces as `Provider`.
pub async fn sign_and_submit(
    payload: &EntryFunctionPayload,
) -> Result<PendingTransaction, WalletError> {
    if !detected() {
        return Err(WalletError::NotDetected);
    }
    let js_payload = serde_wasm_bindgen::to_value(payload).map_err(decode_error)?;
    let value = sign_and_submit_transaction(js_payload)
        .await
        .map_err(provider_error)?;
    serde_wasm_bindgen::from_value(value).map_err(decode_error)
}

/// Follow wallet-side account switches. The provider keeps the callback
/// for the page's lifetime, so the closure is leaked intentionally.
pub fn subscribe_account_change(on_change: impl Fn(Option<WalletAccount>) + 'static) {
    if !detected() {
        return;
    }
    let closure = Closure::<dyn Fn(JsValue)>::new(move |value: JsValue| {
        let account = serde_wasm_bindgen::from_value(value).ok();
        on_change(account);
    });
    on_account_change(closure.as_ref().unchecked_ref());
    closure.forget();
}
