use super::*;
use crate::solana::SYSTEM_PROGRAM_ID;

#[test]
fn wallet_state_defaults_disconnected() {
    let state = WalletState::default();
    assert!(!state.is_connected());
    assert!(!state.connecting);
    assert_eq!(state.button_label(), "Select Wallet");
}

#[test]
fn connect_lifecycle_updates_label() {
    let mut state = WalletState::default();
    state.connect_started();
    assert_eq!(state.button_label(), "Connecting...");

    state.connected(SYSTEM_PROGRAM_ID);
    assert!(state.is_connected());
    assert!(!state.connecting);
    assert_eq!(state.button_label(), "1111…1111");
}

#[test]
fn connect_failed_keeps_error_and_stays_disconnected() {
    let mut state = WalletState::default();
    state.connect_started();
    state.connect_failed("User rejected the request.");
    assert!(!state.is_connected());
    assert!(!state.connecting);
    assert_eq!(state.error.as_deref(), Some("User rejected the request."));
}

#[test]
fn connect_started_clears_previous_error() {
    let mut state = WalletState { error: Some("old".to_owned()), ..WalletState::default() };
    state.connect_started();
    assert!(state.error.is_none());
}

#[test]
fn disconnected_resets_everything() {
    let mut state = WalletState::default();
    state.connected(SYSTEM_PROGRAM_ID);
    state.disconnected();
    assert_eq!(state, WalletState::default());
}

#[test]
fn clear_error_keeps_connection() {
    let mut state = WalletState::default();
    state.connected(SYSTEM_PROGRAM_ID);
    state.error = Some("stale".to_owned());
    state.clear_error();
    assert!(state.error.is_none());
    assert!(state.is_connected());
}
