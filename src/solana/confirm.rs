//! Wait for a submitted transaction to reach a commitment level.
//!
//! Polls `getSignatureStatuses` until the signature is at or beyond the
//! requested commitment. The only deadline is the blockhash expiry: once the
//! chain's block height passes `last_valid_block_height` the transaction can
//! no longer land and the wait fails.

#[cfg(test)]
#[path = "confirm_test.rs"]
mod confirm_test;

use std::time::Duration;

use super::rpc::{ChainRpc, Commitment, RpcError, SignatureStatus};
use super::transaction::TransactionSignature;

/// Delay between status polls.
pub const POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Errors produced while waiting for confirmation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfirmError {
    #[error(transparent)]
    Rpc(#[from] RpcError),

    /// The transaction landed but its execution failed.
    #[error("transaction {signature} failed: {err}")]
    TransactionFailed { signature: String, err: String },

    /// The blockhash expired before the transaction reached the commitment.
    #[error("signature {signature} has expired: block height exceeded")]
    BlockHeightExceeded { signature: String },
}

/// Block until `signature` reaches `commitment` or can no longer land.
///
/// # Errors
///
/// Returns [`ConfirmError::TransactionFailed`] when the status carries an
/// execution error, [`ConfirmError::BlockHeightExceeded`] once the blockhash
/// has expired, or the underlying [`RpcError`].
pub async fn confirm_transaction<C>(
    rpc: &C,
    signature: &TransactionSignature,
    last_valid_block_height: u64,
    commitment: Commitment,
) -> Result<SignatureStatus, ConfirmError>
where
    C: ChainRpc + ?Sized,
{
    loop {
        if let Some(done) = check_status(rpc, signature, commitment).await? {
            return Ok(done);
        }

        let height = rpc.block_height(commitment).await?;
        if height > last_valid_block_height {
            // The transaction may have landed between the two calls.
            if let Some(done) = check_status(rpc, signature, commitment).await? {
                return Ok(done);
            }
            log::warn!("signature {signature} expired at block height {height}");
            return Err(ConfirmError::BlockHeightExceeded { signature: signature.to_string() });
        }

        rpc.pause(POLL_INTERVAL).await;
    }
}

/// `Ok(Some(_))` when confirmed, `Ok(None)` when still pending.
async fn check_status<C>(
    rpc: &C,
    signature: &TransactionSignature,
    commitment: Commitment,
) -> Result<Option<SignatureStatus>, ConfirmError>
where
    C: ChainRpc + ?Sized,
{
    let Some(status) = rpc.signature_status(signature).await? else {
        return Ok(None);
    };

    if let Some(err) = &status.err {
        return Err(ConfirmError::TransactionFailed {
            signature: signature.to_string(),
            err: err.to_string(),
        });
    }

    let reached = status
        .confirmation_status
        .is_some_and(|observed| commitment.is_met_by(observed));
    Ok(reached.then_some(status))
}
