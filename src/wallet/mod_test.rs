use super::*;
use crate::solana::SYSTEM_PROGRAM_ID;

#[test]
fn rejected_error_displays_wallet_message_verbatim() {
    let err = WalletError::Rejected("User rejected the request.".to_owned());
    assert_eq!(err.to_string(), "User rejected the request.");
}

#[test]
fn invalid_response_error_names_the_problem() {
    let err = WalletError::InvalidResponse("missing signature".to_owned());
    assert_eq!(err.to_string(), "wallet returned an invalid response: missing signature");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn injected_wallet_is_unavailable_off_browser() {
    assert!(matches!(
        injected::InjectedWallet::detect(Some(SYSTEM_PROGRAM_ID)),
        Err(WalletError::Unavailable)
    ));
}

#[cfg(not(feature = "hydrate"))]
#[tokio::test]
async fn connect_is_unavailable_off_browser() {
    assert_eq!(injected::connect().await, Err(WalletError::Unavailable));
}
