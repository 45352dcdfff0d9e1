//! Browser wallet injected into `window` by an extension.
//!
//! Looks for `window.phantom.solana` first and falls back to `window.solana`.
//! Transactions go through the provider's `request` entry point with the
//! base58-encoded message, which lets the wallet fill in the signature and
//! submit through its own RPC connection.
//!
//! Server-side (SSR): every call fails with [`WalletError::Unavailable`].

#![allow(clippy::unused_async)]

#[cfg(feature = "hydrate")]
use js_sys::{Array, Function, Object, Promise, Reflect};
#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, JsValue};
#[cfg(feature = "hydrate")]
use wasm_bindgen_futures::JsFuture;

use super::{Wallet, WalletError};
use crate::solana::{Message, Pubkey, TransactionSignature};
#[cfg(feature = "hydrate")]
use crate::solana::message_to_base58;

/// Handle on the injected provider for one reveal attempt.
pub struct InjectedWallet {
    #[cfg(feature = "hydrate")]
    provider: JsValue,
    public_key: Option<Pubkey>,
}

impl InjectedWallet {
    /// Bind to the injected provider, remembering the connected address.
    ///
    /// # Errors
    ///
    /// Returns [`WalletError::NotFound`] when no provider is injected.
    pub fn detect(public_key: Option<Pubkey>) -> Result<Self, WalletError> {
        #[cfg(feature = "hydrate")]
        {
            Ok(Self { provider: provider()?, public_key })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = public_key;
            Err(WalletError::Unavailable)
        }
    }
}

#[async_trait::async_trait(?Send)]
impl Wallet for InjectedWallet {
    fn public_key(&self) -> Option<Pubkey> {
        self.public_key
    }

    async fn sign_and_send(&self, message: &Message) -> Result<TransactionSignature, WalletError> {
        if self.public_key.is_none() {
            return Err(WalletError::NotConnected);
        }

        #[cfg(feature = "hydrate")]
        {
            let params = Object::new();
            set(&params, "message", &JsValue::from_str(&message_to_base58(message)))?;
            let request = Object::new();
            set(&request, "method", &JsValue::from_str("signAndSendTransaction"))?;
            set(&request, "params", &params)?;

            let resp = call_async(&self.provider, "request", &Array::of1(&request)).await?;
            let signature = Reflect::get(&resp, &JsValue::from_str("signature"))
                .ok()
                .and_then(|v| v.as_string())
                .ok_or_else(|| WalletError::InvalidResponse("missing signature".to_owned()))?;
            Ok(TransactionSignature(signature))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = message;
            Err(WalletError::Unavailable)
        }
    }
}

/// Ask the injected wallet to connect and return the approved address.
///
/// # Errors
///
/// Returns [`WalletError::NotFound`] without a provider, or
/// [`WalletError::Rejected`] when the user declines.
pub async fn connect() -> Result<Pubkey, WalletError> {
    #[cfg(feature = "hydrate")]
    {
        let provider = provider()?;
        let resp = call_async(&provider, "connect", &Array::new()).await?;

        // Some providers resolve with `{ publicKey }`, others only set it on
        // the provider object.
        let key = Reflect::get(&resp, &JsValue::from_str("publicKey"))
            .ok()
            .filter(is_present)
            .or_else(|| {
                Reflect::get(&provider, &JsValue::from_str("publicKey"))
                    .ok()
                    .filter(is_present)
            })
            .ok_or_else(|| WalletError::InvalidResponse("missing publicKey".to_owned()))?;

        let text: String = key
            .dyn_into::<Object>()
            .map_err(|_| WalletError::InvalidResponse("publicKey is not an object".to_owned()))?
            .to_string()
            .into();
        crate::solana::parse_address(&text)
            .map_err(|e| WalletError::InvalidResponse(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(WalletError::Unavailable)
    }
}

/// Disconnect the injected wallet. Failures are logged and ignored.
pub async fn disconnect() {
    #[cfg(feature = "hydrate")]
    {
        if let Ok(provider) = provider() {
            if let Err(e) = call_async(&provider, "disconnect", &Array::new()).await {
                log::warn!("wallet disconnect failed: {e}");
            }
        }
    }
}

#[cfg(feature = "hydrate")]
fn is_present(value: &JsValue) -> bool {
    !value.is_undefined() && !value.is_null()
}

#[cfg(feature = "hydrate")]
fn provider() -> Result<JsValue, WalletError> {
    let window: JsValue = web_sys::window().ok_or(WalletError::NotFound)?.into();
    let phantom = Reflect::get(&window, &JsValue::from_str("phantom"))
        .ok()
        .filter(is_present)
        .and_then(|p| Reflect::get(&p, &JsValue::from_str("solana")).ok())
        .filter(is_present);
    phantom
        .or_else(|| Reflect::get(&window, &JsValue::from_str("solana")).ok().filter(is_present))
        .ok_or(WalletError::NotFound)
}

#[cfg(feature = "hydrate")]
fn set(target: &Object, key: &str, value: &JsValue) -> Result<(), WalletError> {
    Reflect::set(target, &JsValue::from_str(key), value)
        .map(|_| ())
        .map_err(js_error)
}

/// Call `target[name](...args)` and await the result as a promise.
#[cfg(feature = "hydrate")]
async fn call_async(target: &JsValue, name: &str, args: &Array) -> Result<JsValue, WalletError> {
    let func: Function = Reflect::get(target, &JsValue::from_str(name))
        .map_err(js_error)?
        .dyn_into()
        .map_err(|_| WalletError::InvalidResponse(format!("provider has no {name}()")))?;
    let ret = func.apply(target, args).map_err(js_error)?;
    JsFuture::from(Promise::resolve(&ret)).await.map_err(js_error)
}

/// Pull a human-readable message out of a thrown JS value.
#[cfg(feature = "hydrate")]
fn js_error(value: JsValue) -> WalletError {
    let message = Reflect::get(&value, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{value:?}"));
    WalletError::Rejected(message)
}
