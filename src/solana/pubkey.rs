//! Account addresses and their parsing rules.

#[cfg(test)]
#[path = "pubkey_test.rs"]
mod pubkey_test;

use std::str::FromStr;

pub use solana_pubkey::{ParsePubkeyError, Pubkey};

/// The system program, which owns native transfers.
pub const SYSTEM_PROGRAM_ID: Pubkey = solana_system_interface::program::ID;

/// Errors produced when parsing a configured or wallet-supplied address.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PubkeyError {
    #[error("address is empty")]
    Empty,

    #[error("{0}")]
    Invalid(ParsePubkeyError),
}

/// Parse a base58 address, ignoring surrounding whitespace.
///
/// # Errors
///
/// Returns [`PubkeyError::Empty`] for blank input, otherwise the parser's
/// own [`ParsePubkeyError`].
pub fn parse_address(text: &str) -> Result<Pubkey, PubkeyError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(PubkeyError::Empty);
    }
    Pubkey::from_str(text).map_err(PubkeyError::Invalid)
}

/// Shorten an address for display, e.g. `7xKX…gAsU`.
#[must_use]
pub fn abbreviate(key: &Pubkey) -> String {
    let full = key.to_string();
    if full.len() <= 8 {
        return full;
    }
    format!("{}…{}", &full[..4], &full[full.len() - 4..])
}
