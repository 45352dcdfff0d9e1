use super::*;

// =============================================================
// Commitment
// =============================================================

#[test]
fn confirmed_is_met_by_confirmed_and_finalized() {
    assert!(Commitment::Confirmed.is_met_by(Commitment::Confirmed));
    assert!(Commitment::Confirmed.is_met_by(Commitment::Finalized));
    assert!(!Commitment::Confirmed.is_met_by(Commitment::Processed));
}

#[test]
fn commitment_serializes_lowercase() {
    assert_eq!(
        serde_json::to_value(Commitment::Confirmed).unwrap(),
        serde_json::json!("confirmed")
    );
}

// =============================================================
// request_body
// =============================================================

#[test]
fn request_body_is_jsonrpc_2() {
    let params = serde_json::json!([{ "commitment": "confirmed" }]);
    let body = request_body(1, "getBlockHeight", params);
    let value: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "getBlockHeight",
            "params": [{ "commitment": "confirmed" }],
        })
    );
}

// =============================================================
// decode_response
// =============================================================

#[test]
fn decode_response_returns_result() {
    let height: u64 = decode_response(r#"{"jsonrpc":"2.0","result":1234,"id":1}"#).unwrap();
    assert_eq!(height, 1234);
}

#[test]
fn decode_response_surfaces_server_error() {
    let err = decode_response::<u64>(
        r#"{"jsonrpc":"2.0","error":{"code":-32602,"message":"Invalid params"},"id":1}"#,
    )
    .unwrap_err();
    assert_eq!(err, RpcError::Server { code: -32602, message: "Invalid params".to_owned() });
}

#[test]
fn decode_response_rejects_garbage() {
    let err = decode_response::<u64>("<html>").unwrap_err();
    assert!(matches!(err, RpcError::Parse(_)));
}

#[test]
fn decode_response_rejects_empty_envelope() {
    let err = decode_response::<u64>(r#"{"jsonrpc":"2.0","id":1}"#).unwrap_err();
    assert!(matches!(err, RpcError::Parse(_)));
}

// =============================================================
// method decoders
// =============================================================

#[test]
fn decode_latest_blockhash_reads_context_value() {
    let body = r#"{
        "jsonrpc": "2.0",
        "result": {
            "context": { "slot": 2792 },
            "value": {
                "blockhash": "EkSnNWid2cvwEVnVx9aBqawnmiCNiDgp3gUdkDPTKN1N",
                "lastValidBlockHeight": 3090
            }
        },
        "id": 1
    }"#;
    let latest = decode_latest_blockhash(body).unwrap();
    assert_eq!(latest.last_valid_block_height, 3090);
    assert_eq!(latest.blockhash.to_string(), "EkSnNWid2cvwEVnVx9aBqawnmiCNiDgp3gUdkDPTKN1N");
}

#[test]
fn decode_latest_blockhash_rejects_bad_hash() {
    let body = r#"{
        "jsonrpc": "2.0",
        "result": {
            "context": { "slot": 1 },
            "value": { "blockhash": "abc", "lastValidBlockHeight": 1 }
        },
        "id": 1
    }"#;
    assert!(matches!(decode_latest_blockhash(body), Err(RpcError::Parse(_))));
}

#[test]
fn decode_signature_status_reads_first_entry() {
    let body = r#"{
        "jsonrpc": "2.0",
        "result": {
            "context": { "slot": 82 },
            "value": [{
                "slot": 72,
                "confirmations": 10,
                "err": null,
                "status": { "Ok": null },
                "confirmationStatus": "confirmed"
            }]
        },
        "id": 1
    }"#;
    let status = decode_signature_status(body).unwrap().unwrap();
    assert_eq!(status.slot, 72);
    assert_eq!(status.confirmations, Some(10));
    assert!(status.err.is_none());
    assert_eq!(status.confirmation_status, Some(Commitment::Confirmed));
}

#[test]
fn decode_signature_status_unknown_signature_is_none() {
    let body = r#"{"jsonrpc":"2.0","result":{"context":{"slot":82},"value":[null]},"id":1}"#;
    assert_eq!(decode_signature_status(body).unwrap(), None);
}

#[test]
fn decode_signature_status_keeps_transaction_error() {
    let body = r#"{
        "jsonrpc": "2.0",
        "result": {
            "context": { "slot": 82 },
            "value": [{
                "slot": 5,
                "confirmations": null,
                "err": { "InstructionError": [0, { "Custom": 1 }] },
                "confirmationStatus": "finalized"
            }]
        },
        "id": 1
    }"#;
    let status = decode_signature_status(body).unwrap().unwrap();
    assert!(status.err.is_some());
    assert_eq!(status.confirmations, None);
    assert_eq!(status.confirmation_status, Some(Commitment::Finalized));
}

// =============================================================
// HttpRpc off-browser
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[tokio::test]
async fn http_rpc_is_unavailable_without_browser() {
    let rpc = HttpRpc::new("https://rpc.example.test");
    assert_eq!(rpc.url(), "https://rpc.example.test");
    assert_eq!(rpc.block_height(Commitment::Confirmed).await, Err(RpcError::Unavailable));
}
