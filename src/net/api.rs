//! REST API helpers for communicating with the signal backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only called from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so a dead backend degrades
//! to an empty dashboard without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(any(test, feature = "hydrate"))]
use super::types::PaymentOptions;
use super::types::{RevealResponse, Signal};
use crate::config::ConfigError;
use crate::solana::TransactionSignature;

/// Header carrying the payment transaction signature.
pub const PAYMENT_PROOF_HEADER: &str = "X-402-Payment-Proof";
/// Header describing the expected payment on a `402` response.
pub const PAYMENT_OPTIONS_HEADER: &str = "X-402-Payment-Options";

#[cfg(any(test, feature = "hydrate"))]
const STATUS_PAYMENT_REQUIRED: u16 = 402;

/// Errors produced by backend calls.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("request failed: {0}")]
    Request(String),

    #[error("request failed: status {0}")]
    Status(u16),

    #[error("response parse failed: {0}")]
    Parse(String),

    #[error("backend not available on server")]
    Unavailable,
}

/// Backend calls used by the dashboard. Enables mocking in tests.
#[async_trait::async_trait(?Send)]
pub trait SignalBackend {
    /// `GET /signals`.
    async fn list_signals(&self) -> Result<Vec<Signal>, ApiError>;

    /// `POST /reveal/{signal_id}` with the payment proof header.
    async fn reveal(
        &self,
        signal_id: &str,
        proof: &TransactionSignature,
    ) -> Result<RevealResponse, ApiError>;
}

pub(crate) fn signals_endpoint(base: &str) -> String {
    format!("{base}/signals")
}

pub(crate) fn reveal_endpoint(base: &str, signal_id: &str) -> String {
    format!("{base}/reveal/{signal_id}")
}

/// Turn a reveal response into a [`RevealResponse`].
///
/// The backend answers with JSON on both success and failure. The payment
/// middleware in front of it may instead return a plain-text `402`; that is
/// mapped to a failure response carrying the body text, or a description
/// built from the `X-402-Payment-Options` header when the body is empty.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn interpret_reveal_body(
    status: u16,
    body: &str,
    payment_options: Option<&str>,
) -> Result<RevealResponse, ApiError> {
    match serde_json::from_str::<RevealResponse>(body) {
        Ok(resp) => Ok(resp),
        Err(_) if status == STATUS_PAYMENT_REQUIRED => {
            let text = body.trim();
            let message = if text.is_empty() {
                payment_options
                    .and_then(PaymentOptions::parse)
                    .map_or_else(
                        || "Payment Required".to_owned(),
                        |o| {
                            format!("payment of {} {} to {} required", o.amount, o.asset, o.address)
                        },
                    )
            } else {
                text.to_owned()
            };
            Ok(RevealResponse {
                status: Some("payment_required".to_owned()),
                alpha_reasoning: None,
                message: Some(message),
            })
        }
        Err(e) => Err(ApiError::Parse(e.to_string())),
    }
}

/// Backend reached over HTTP at the configured base URL.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    base_url: Option<String>,
}

impl HttpBackend {
    #[must_use]
    pub fn new(base_url: Option<String>) -> Self {
        Self { base_url }
    }

    fn base(&self) -> Result<&str, ApiError> {
        self.base_url.as_deref().ok_or(ApiError::Config(ConfigError::Missing {
            key: crate::config::BACKEND_URL_KEY,
        }))
    }
}

#[async_trait::async_trait(?Send)]
impl SignalBackend for HttpBackend {
    async fn list_signals(&self) -> Result<Vec<Signal>, ApiError> {
        let url = signals_endpoint(self.base()?);

        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&url)
                .send()
                .await
                .map_err(|e| ApiError::Request(e.to_string()))?;
            if !resp.ok() {
                return Err(ApiError::Status(resp.status()));
            }
            resp.json::<Vec<Signal>>()
                .await
                .map_err(|e| ApiError::Parse(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = url;
            Err(ApiError::Unavailable)
        }
    }

    async fn reveal(
        &self,
        signal_id: &str,
        proof: &TransactionSignature,
    ) -> Result<RevealResponse, ApiError> {
        let url = reveal_endpoint(self.base()?, signal_id);

        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&url)
                .header(PAYMENT_PROOF_HEADER, proof.as_str())
                .send()
                .await
                .map_err(|e| ApiError::Request(e.to_string()))?;
            let status = resp.status();
            let options = resp.headers().get(PAYMENT_OPTIONS_HEADER);
            let body = resp.text().await.map_err(|e| ApiError::Parse(e.to_string()))?;
            interpret_reveal_body(status, &body, options.as_deref())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (url, proof);
            Err(ApiError::Unavailable)
        }
    }
}
