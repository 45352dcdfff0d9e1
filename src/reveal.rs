//! Payment-gated reveal: pay the vault, then trade the signature for content.
//!
//! SYSTEM CONTEXT
//! ==============
//! One attempt runs strictly in order:
//!
//! 1. require a connected wallet (no network activity otherwise)
//! 2. build a single system transfer of the signal's price to the vault
//! 3. have the wallet sign and submit it
//! 4. wait for `confirmed` commitment
//! 5. `POST /reveal/{id}` with the signature as `X-402-Payment-Proof`
//! 6. hand back the unlocked analysis, or the backend's failure message
//!
//! TRADE-OFFS
//! ==========
//! Nothing here is atomic or resumable. A confirmed payment followed by a
//! failed exchange leaves the user paid and still locked, and every attempt
//! that reaches the wallet is a new payment. The backend verifies the payment
//! on-chain; the client forwards the signature without checking amount or
//! recipient itself.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use crate::config::ClientConfig;
use crate::net::api::{ApiError, HttpBackend, SignalBackend};
use crate::solana::confirm::{ConfirmError, confirm_transaction};
use crate::solana::rpc::{ChainRpc, Commitment, HttpRpc, RpcError};
use crate::solana::{Pubkey, PubkeyError, TransactionSignature, parse_address, transfer_message};
use crate::state::signals::SignalsEvent;
use crate::wallet::injected::InjectedWallet;
use crate::wallet::{Wallet, WalletError};

/// Notice shown when a reveal is attempted without a wallet.
pub const NO_WALLET_NOTICE: &str = "Please connect your Solana wallet first!";

/// One reveal attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealRequest {
    pub signal_id: String,
    /// Price in the chain's smallest currency unit.
    pub price: u64,
}

/// A successful reveal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Revealed {
    pub signature: TransactionSignature,
    pub analysis: String,
}

/// Errors that end a reveal attempt.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RevealError {
    #[error("no wallet connected")]
    NoWallet,

    /// The configured vault address is missing or malformed.
    #[error("Invalid destination address: {0}")]
    InvalidDestination(PubkeyError),

    #[error(transparent)]
    Chain(#[from] RpcError),

    #[error(transparent)]
    Wallet(#[from] WalletError),

    #[error(transparent)]
    Confirm(#[from] ConfirmError),

    #[error(transparent)]
    Api(#[from] ApiError),

    /// The backend answered without unlocked content.
    #[error("reveal response has no alpha")]
    ContentMissing { message: Option<String> },
}

impl RevealError {
    /// Text shown to the user for this failure.
    #[must_use]
    pub fn user_notice(&self) -> String {
        match self {
            Self::NoWallet => NO_WALLET_NOTICE.to_owned(),
            Self::ContentMissing { message } => format!(
                "Payment verified, but failed to retrieve alpha: {}",
                message.as_deref().unwrap_or("Unknown error")
            ),
            other => format!("Transaction failed: {other}"),
        }
    }
}

/// The collaborators one reveal attempt talks to.
pub struct RevealFlow<'a, W: ?Sized, C: ?Sized, B: ?Sized> {
    pub wallet: &'a W,
    pub chain: &'a C,
    pub backend: &'a B,
    /// Raw configured vault address.
    pub vault_address: Option<&'a str>,
}

impl<W, C, B> RevealFlow<'_, W, C, B>
where
    W: Wallet + ?Sized,
    C: ChainRpc + ?Sized,
    B: SignalBackend + ?Sized,
{
    /// Run one attempt to completion.
    ///
    /// # Errors
    ///
    /// Returns the first failing step as a [`RevealError`]. Nothing is
    /// retried.
    pub async fn run(&self, request: &RevealRequest) -> Result<Revealed, RevealError> {
        let payer = self.wallet.public_key().ok_or(RevealError::NoWallet)?;
        let vault = parse_address(self.vault_address.unwrap_or_default())
            .map_err(RevealError::InvalidDestination)?;

        let latest = self.chain.latest_blockhash(Commitment::Confirmed).await?;
        let message = transfer_message(&payer, &vault, request.price, &latest.blockhash);

        log::info!(
            "reveal {}: requesting transfer of {} to {vault}",
            request.signal_id,
            request.price
        );
        let signature = self.wallet.sign_and_send(&message).await?;

        log::info!("reveal {}: awaiting confirmation of {signature}", request.signal_id);
        confirm_transaction(
            self.chain,
            &signature,
            latest.last_valid_block_height,
            Commitment::Confirmed,
        )
        .await?;

        let resp = self.backend.reveal(&request.signal_id, &signature).await?;
        match resp.unlocked_content() {
            Some(analysis) => Ok(Revealed { signature, analysis: analysis.to_owned() }),
            None => {
                log::warn!(
                    "reveal {}: paid with {signature} but backend returned no alpha",
                    request.signal_id
                );
                Err(RevealError::ContentMissing { message: resp.message })
            }
        }
    }
}

/// Convert a finished attempt into the state event that ends it.
#[must_use]
pub fn outcome_event(signal_id: String, result: Result<Revealed, RevealError>) -> SignalsEvent {
    match result {
        Ok(revealed) => {
            SignalsEvent::RevealSucceeded { id: signal_id, analysis: revealed.analysis }
        }
        Err(err) => {
            log::error!("reveal {signal_id} failed: {err}");
            SignalsEvent::RevealFailed { id: signal_id, notice: err.user_notice() }
        }
    }
}

/// Run one attempt against the real collaborators named by `config`.
///
/// Always yields the event that ends the attempt, so the caller only has to
/// apply it.
pub async fn reveal_with_config(
    config: &ClientConfig,
    public_key: Option<Pubkey>,
    request: RevealRequest,
) -> SignalsEvent {
    let wallet = match InjectedWallet::detect(public_key) {
        Ok(wallet) => wallet,
        Err(e) => return outcome_event(request.signal_id, Err(e.into())),
    };
    let chain = HttpRpc::new(config.rpc_url.clone());
    let backend = HttpBackend::new(config.backend_url.clone());
    let flow = RevealFlow {
        wallet: &wallet,
        chain: &chain,
        backend: &backend,
        vault_address: config.vault_address.as_deref(),
    };
    let result = flow.run(&request).await;
    outcome_event(request.signal_id, result)
}
