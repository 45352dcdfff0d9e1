//! Wallet seam for signing and submitting transfers.
//!
//! DESIGN
//! ======
//! Key management and signing live entirely in the external wallet. The
//! client only needs the connected address and a "sign and send" capability,
//! so that is all the trait exposes. [`injected::InjectedWallet`] is the
//! browser implementation; tests substitute their own.

pub mod injected;

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

use crate::solana::{Message, Pubkey, TransactionSignature};

/// Errors produced by wallet operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WalletError {
    #[error("wallet not connected")]
    NotConnected,

    #[error("no Solana wallet found in this browser")]
    NotFound,

    /// The wallet refused or failed the request. Carries its message verbatim.
    #[error("{0}")]
    Rejected(String),

    #[error("wallet returned an invalid response: {0}")]
    InvalidResponse(String),

    #[error("wallet not available on server")]
    Unavailable,
}

/// A connected wallet able to sign and submit a message.
#[async_trait::async_trait(?Send)]
pub trait Wallet {
    /// The connected account, or `None` when no wallet is connected.
    fn public_key(&self) -> Option<Pubkey>;

    /// Sign `message` with the connected account and submit it to the chain.
    async fn sign_and_send(&self, message: &Message) -> Result<TransactionSignature, WalletError>;
}
