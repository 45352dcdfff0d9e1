//! JSON-RPC 2.0 client for the handful of chain calls the reveal flow needs.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call fails with [`RpcError::Unavailable`]; the
//! reveal flow only ever runs in the browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "rpc_test.rs"]
mod rpc_test;

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::transaction::{Hash, TransactionSignature};

/// Errors produced by chain RPC calls.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RpcError {
    /// The HTTP request could not be sent.
    #[error("RPC request failed: {0}")]
    Request(String),

    /// The node answered with a non-success HTTP status.
    #[error("RPC response error: status {0}")]
    Status(u16),

    /// The response body did not match the expected shape.
    #[error("RPC response parse failed: {0}")]
    Parse(String),

    /// The node returned a JSON-RPC error object.
    #[error("RPC error {code}: {message}")]
    Server { code: i64, message: String },

    #[error("chain RPC not available on server")]
    Unavailable,
}

/// Commitment levels, ordered from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Commitment {
    Processed,
    Confirmed,
    Finalized,
}

impl Commitment {
    /// Whether a transaction observed at `observed` meets this level.
    #[must_use]
    pub fn is_met_by(self, observed: Commitment) -> bool {
        observed >= self
    }
}

/// A blockhash plus the last block height at which it is still accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatestBlockhash {
    pub blockhash: Hash,
    pub last_valid_block_height: u64,
}

/// One entry of a `getSignatureStatuses` response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignatureStatus {
    pub slot: u64,
    #[serde(default)]
    pub confirmations: Option<u64>,
    #[serde(default)]
    pub err: Option<serde_json::Value>,
    #[serde(default)]
    pub confirmation_status: Option<Commitment>,
}

/// The chain calls the reveal flow depends on. Enables mocking in tests.
#[async_trait::async_trait(?Send)]
pub trait ChainRpc {
    /// Fetch a recent blockhash for a new transaction.
    async fn latest_blockhash(&self, commitment: Commitment) -> Result<LatestBlockhash, RpcError>;

    /// Look up a signature; `None` when the node has not seen it yet.
    async fn signature_status(
        &self,
        signature: &TransactionSignature,
    ) -> Result<Option<SignatureStatus>, RpcError>;

    /// Current block height.
    async fn block_height(&self, commitment: Commitment) -> Result<u64, RpcError>;

    /// Wait between status polls.
    async fn pause(&self, duration: Duration);
}

// =============================================================================
// WIRE FORMAT
// =============================================================================

#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Serialize)]
struct RpcRequest<'a> {
    jsonrpc: &'static str,
    id: u64,
    method: &'a str,
    params: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct RpcEnvelope<T> {
    result: Option<T>,
    error: Option<RpcErrorBody>,
}

#[derive(Debug, Deserialize)]
struct RpcErrorBody {
    code: i64,
    message: String,
}

/// Results that wrap their payload in `{ context, value }`.
#[derive(Debug, Deserialize)]
struct WithContext<T> {
    value: T,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BlockhashValue {
    blockhash: String,
    last_valid_block_height: u64,
}

fn commitment_config(commitment: Commitment) -> serde_json::Value {
    serde_json::json!({ "commitment": commitment })
}

/// Serialize a JSON-RPC request body.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn request_body(id: u64, method: &str, params: serde_json::Value) -> String {
    let req = RpcRequest { jsonrpc: "2.0", id, method, params };
    serde_json::to_string(&req).unwrap_or_default()
}

/// Decode a JSON-RPC response body into its `result`.
pub(crate) fn decode_response<T: DeserializeOwned>(body: &str) -> Result<T, RpcError> {
    let envelope: RpcEnvelope<T> =
        serde_json::from_str(body).map_err(|e| RpcError::Parse(e.to_string()))?;
    if let Some(err) = envelope.error {
        return Err(RpcError::Server { code: err.code, message: err.message });
    }
    envelope
        .result
        .ok_or_else(|| RpcError::Parse("response has neither result nor error".to_owned()))
}

pub(crate) fn decode_latest_blockhash(body: &str) -> Result<LatestBlockhash, RpcError> {
    let ctx: WithContext<BlockhashValue> = decode_response(body)?;
    let blockhash = ctx
        .value
        .blockhash
        .parse::<Hash>()
        .map_err(|e| RpcError::Parse(format!("blockhash: {e}")))?;
    Ok(LatestBlockhash { blockhash, last_valid_block_height: ctx.value.last_valid_block_height })
}

pub(crate) fn decode_signature_status(body: &str) -> Result<Option<SignatureStatus>, RpcError> {
    let ctx: WithContext<Vec<Option<SignatureStatus>>> = decode_response(body)?;
    Ok(ctx.value.into_iter().next().flatten())
}

// =============================================================================
// HTTP CLIENT
// =============================================================================

/// Chain RPC over HTTP POST to a single endpoint.
#[derive(Debug, Clone)]
pub struct HttpRpc {
    url: String,
}

impl HttpRpc {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    async fn post(&self, method: &str, params: serde_json::Value) -> Result<String, RpcError> {
        #[cfg(feature = "hydrate")]
        {
            let body = request_body(1, method, params);
            let resp = gloo_net::http::Request::post(&self.url)
                .header("Content-Type", "application/json")
                .body(body)
                .map_err(|e| RpcError::Request(e.to_string()))?
                .send()
                .await
                .map_err(|e| RpcError::Request(e.to_string()))?;
            if !resp.ok() {
                return Err(RpcError::Status(resp.status()));
            }
            resp.text().await.map_err(|e| RpcError::Parse(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (method, params);
            Err(RpcError::Unavailable)
        }
    }
}

#[async_trait::async_trait(?Send)]
impl ChainRpc for HttpRpc {
    async fn latest_blockhash(&self, commitment: Commitment) -> Result<LatestBlockhash, RpcError> {
        let body = self
            .post("getLatestBlockhash", serde_json::json!([commitment_config(commitment)]))
            .await?;
        decode_latest_blockhash(&body)
    }

    async fn signature_status(
        &self,
        signature: &TransactionSignature,
    ) -> Result<Option<SignatureStatus>, RpcError> {
        let body = self
            .post("getSignatureStatuses", serde_json::json!([[signature.as_str()]]))
            .await?;
        decode_signature_status(&body)
    }

    async fn block_height(&self, commitment: Commitment) -> Result<u64, RpcError> {
        let body = self
            .post("getBlockHeight", serde_json::json!([commitment_config(commitment)]))
            .await?;
        decode_response(&body)
    }

    async fn pause(&self, duration: Duration) {
        #[cfg(feature = "hydrate")]
        {
            gloo_timers::future::sleep(duration).await;
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = duration;
        }
    }
}
