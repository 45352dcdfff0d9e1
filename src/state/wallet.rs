//! Connected-wallet state for the header button and the reveal gate.

#[cfg(test)]
#[path = "wallet_test.rs"]
mod wallet_test;

use crate::solana::Pubkey;
use crate::solana::pubkey::abbreviate;

/// Wallet connection status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WalletState {
    pub public_key: Option<Pubkey>,
    pub connecting: bool,
    pub error: Option<String>,
}

impl WalletState {
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.public_key.is_some()
    }

    pub fn connect_started(&mut self) {
        self.connecting = true;
        self.error = None;
    }

    pub fn connected(&mut self, key: Pubkey) {
        self.public_key = Some(key);
        self.connecting = false;
        self.error = None;
    }

    pub fn connect_failed(&mut self, error: impl Into<String>) {
        self.connecting = false;
        self.error = Some(error.into());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn disconnected(&mut self) {
        *self = Self::default();
    }

    /// Label for the header wallet button.
    #[must_use]
    pub fn button_label(&self) -> String {
        match (&self.public_key, self.connecting) {
            (Some(key), _) => abbreviate(key),
            (None, true) => "Connecting...".to_owned(),
            (None, false) => "Select Wallet".to_owned(),
        }
    }
}
