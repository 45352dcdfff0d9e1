use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use super::*;
use crate::solana::rpc::LatestBlockhash;

/// Scripted chain: each poll pops the next status and height. The last
/// entry repeats once the script runs out.
struct ScriptedRpc {
    statuses: RefCell<VecDeque<Option<SignatureStatus>>>,
    heights: RefCell<VecDeque<u64>>,
    pauses: Cell<usize>,
    status_calls: Cell<usize>,
}

impl ScriptedRpc {
    fn new(statuses: Vec<Option<SignatureStatus>>, heights: Vec<u64>) -> Self {
        Self {
            statuses: RefCell::new(statuses.into()),
            heights: RefCell::new(heights.into()),
            pauses: Cell::new(0),
            status_calls: Cell::new(0),
        }
    }
}

fn pop_or_last<T: Clone>(queue: &RefCell<VecDeque<T>>) -> T {
    let mut q = queue.borrow_mut();
    if q.len() > 1 { q.pop_front().unwrap() } else { q.front().cloned().unwrap() }
}

#[async_trait::async_trait(?Send)]
impl ChainRpc for ScriptedRpc {
    async fn latest_blockhash(&self, _commitment: Commitment) -> Result<LatestBlockhash, RpcError> {
        unreachable!("confirmation never asks for a blockhash")
    }

    async fn signature_status(
        &self,
        _signature: &TransactionSignature,
    ) -> Result<Option<SignatureStatus>, RpcError> {
        self.status_calls.set(self.status_calls.get() + 1);
        Ok(pop_or_last(&self.statuses))
    }

    async fn block_height(&self, _commitment: Commitment) -> Result<u64, RpcError> {
        Ok(pop_or_last(&self.heights))
    }

    async fn pause(&self, duration: Duration) {
        assert_eq!(duration, POLL_INTERVAL);
        self.pauses.set(self.pauses.get() + 1);
    }
}

fn status(level: Commitment) -> Option<SignatureStatus> {
    Some(SignatureStatus {
        slot: 10,
        confirmations: Some(1),
        err: None,
        confirmation_status: Some(level),
    })
}

fn sig() -> TransactionSignature {
    TransactionSignature("SIG123".to_owned())
}

// =============================================================
// success paths
// =============================================================

#[tokio::test]
async fn returns_immediately_when_already_confirmed() {
    let rpc = ScriptedRpc::new(vec![status(Commitment::Confirmed)], vec![1]);
    let done = confirm_transaction(&rpc, &sig(), 100, Commitment::Confirmed).await.unwrap();
    assert_eq!(done.confirmation_status, Some(Commitment::Confirmed));
    assert_eq!(rpc.pauses.get(), 0);
}

#[tokio::test]
async fn polls_until_commitment_is_reached() {
    let rpc = ScriptedRpc::new(
        vec![None, status(Commitment::Processed), status(Commitment::Finalized)],
        vec![1, 2, 3],
    );
    let done = confirm_transaction(&rpc, &sig(), 100, Commitment::Confirmed).await.unwrap();
    assert_eq!(done.confirmation_status, Some(Commitment::Finalized));
    assert_eq!(rpc.pauses.get(), 2);
}

#[tokio::test]
async fn final_status_check_wins_over_expiry() {
    let rpc = ScriptedRpc::new(vec![None, status(Commitment::Confirmed)], vec![101]);
    let done = confirm_transaction(&rpc, &sig(), 100, Commitment::Confirmed).await;
    assert!(done.is_ok());
    assert_eq!(rpc.status_calls.get(), 2);
}

// =============================================================
// failure paths
// =============================================================

#[tokio::test]
async fn execution_error_fails_confirmation() {
    let failed = Some(SignatureStatus {
        slot: 10,
        confirmations: None,
        err: Some(serde_json::json!({ "InstructionError": [0, { "Custom": 1 }] })),
        confirmation_status: Some(Commitment::Confirmed),
    });
    let rpc = ScriptedRpc::new(vec![failed], vec![1]);
    let err = confirm_transaction(&rpc, &sig(), 100, Commitment::Confirmed).await.unwrap_err();
    assert!(matches!(
        err,
        ConfirmError::TransactionFailed { ref signature, .. } if signature == "SIG123"
    ));
}

#[tokio::test]
async fn expired_blockhash_fails_confirmation() {
    let rpc = ScriptedRpc::new(vec![None], vec![50, 99, 100, 101]);
    let err = confirm_transaction(&rpc, &sig(), 100, Commitment::Confirmed).await.unwrap_err();
    assert_eq!(err, ConfirmError::BlockHeightExceeded { signature: "SIG123".to_owned() });
    assert_eq!(rpc.pauses.get(), 3);
    assert_eq!(err.to_string(), "signature SIG123 has expired: block height exceeded");
}
