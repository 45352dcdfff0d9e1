//! The one transaction the client builds: a native transfer to the vault.
//!
//! The wallet signs and submits; we only produce the legacy message it signs
//! and its base58 form for the injected provider.

#[cfg(test)]
#[path = "transaction_test.rs"]
mod transaction_test;

use std::fmt;

pub use solana_hash::Hash;
pub use solana_message::legacy::Message;

use super::pubkey::Pubkey;

/// Base58 transaction signature as returned by the wallet. This is the
/// payment proof forwarded to the backend.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct TransactionSignature(pub String);

impl TransactionSignature {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TransactionSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Message moving `lamports` from `from` (fee payer and signer) to `to`
/// through the system program.
#[must_use]
pub fn transfer_message(
    from: &Pubkey,
    to: &Pubkey,
    lamports: u64,
    recent_blockhash: &Hash,
) -> Message {
    let instruction = solana_system_interface::instruction::transfer(from, to, lamports);
    Message::new_with_blockhash(&[instruction], Some(from), recent_blockhash)
}

/// Base58 of the serialized message, the form injected wallets accept.
#[must_use]
pub fn message_to_base58(message: &Message) -> String {
    bs58::encode(message.serialize()).into_string()
}
