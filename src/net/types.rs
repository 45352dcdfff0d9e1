//! Backend wire DTOs.
//!
//! DESIGN
//! ======
//! Signals are rendered as the backend sends them, so the struct keeps every
//! field the backend emits and defaults the ones it may omit rather than
//! rejecting the whole list.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A market prediction with a paywalled analysis.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    pub id: String,
    #[serde(default)]
    pub market_id: Option<String>,
    /// Market platform name, e.g. `"Polymarket"`. Unknown names are kept.
    pub platform: String,
    pub title: String,
    /// Estimated win probability, 0–100.
    pub win_probability: f64,
    /// Unlocked analysis. Empty or absent while locked.
    #[serde(default)]
    pub alpha_analysis: Option<String>,
    /// Unlock price in the chain's smallest currency unit.
    pub micropayment_price: u64,
    #[serde(default)]
    pub created_at: Option<String>,
    pub is_locked: bool,
    #[serde(default)]
    pub community_up: u32,
    #[serde(default)]
    pub community_down: u32,
}

/// Body of `POST /reveal/{id}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub alpha_reasoning: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl RevealResponse {
    /// The unlocked content, if the backend delivered any. An empty string
    /// counts as missing.
    #[must_use]
    pub fn unlocked_content(&self) -> Option<&str> {
        self.alpha_reasoning.as_deref().filter(|s| !s.is_empty())
    }
}

/// Parsed `X-402-Payment-Options` header sent with `402 Payment Required`.
///
/// Format: `x402 amount=<u64>, address=<vault>, asset=<asset>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaymentOptions {
    pub amount: u64,
    pub address: String,
    pub asset: String,
}

impl PaymentOptions {
    /// Parse the header value. Returns `None` unless all three fields are
    /// present and `amount` is numeric.
    #[must_use]
    pub fn parse(header: &str) -> Option<Self> {
        let rest = header.trim().strip_prefix("x402")?;
        let mut amount = None;
        let mut address = None;
        let mut asset = None;

        for part in rest.split(',') {
            let Some((key, value)) = part.trim().split_once('=') else {
                continue;
            };
            let value = value.trim();
            match key.trim() {
                "amount" => amount = value.parse::<u64>().ok(),
                "address" => address = Some(value.to_owned()),
                "asset" => asset = Some(value.to_owned()),
                _ => {}
            }
        }

        Some(Self { amount: amount?, address: address?, asset: asset? })
    }
}
