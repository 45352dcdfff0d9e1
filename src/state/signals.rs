//! Dashboard signal list and reveal bookkeeping.
//!
//! DESIGN
//! ======
//! All changes go through [`SignalsState::apply`] so the page never pokes at
//! fields directly. In-flight reveals are tracked per signal id, which lets
//! two different cards show their own busy state at once while still refusing
//! a second attempt on a card that is already paying.

#[cfg(test)]
#[path = "signals_test.rs"]
mod signals_test;

use std::collections::BTreeSet;

use crate::net::types::Signal;
use crate::reveal::{NO_WALLET_NOTICE, RevealRequest};

/// Signal list state for the dashboard.
#[derive(Clone, Debug, PartialEq)]
pub struct SignalsState {
    /// Signals in backend order.
    pub items: Vec<Signal>,
    /// `true` until the first listing call finishes either way.
    pub loading: bool,
    /// Ids with a reveal in flight.
    pub revealing: BTreeSet<String>,
    /// User-facing message from the last failed action.
    pub notice: Option<String>,
}

impl Default for SignalsState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: true,
            revealing: BTreeSet::new(),
            notice: None,
        }
    }
}

/// Everything that can happen to [`SignalsState`].
#[derive(Clone, Debug, PartialEq)]
pub enum SignalsEvent {
    FetchSucceeded(Vec<Signal>),
    FetchFailed,
    RevealStarted(String),
    RevealSucceeded { id: String, analysis: String },
    RevealFailed { id: String, notice: String },
    NoticeRaised(String),
    NoticeDismissed,
}

impl SignalsState {
    /// Apply one event.
    pub fn apply(&mut self, event: SignalsEvent) {
        match event {
            SignalsEvent::FetchSucceeded(items) => {
                self.items = items;
                self.loading = false;
            }
            SignalsEvent::FetchFailed => {
                self.loading = false;
            }
            SignalsEvent::RevealStarted(id) => {
                self.revealing.insert(id);
            }
            SignalsEvent::RevealSucceeded { id, analysis } => {
                if let Some(signal) = self.items.iter_mut().find(|s| s.id == id) {
                    signal.alpha_analysis = Some(analysis);
                    signal.is_locked = false;
                }
                self.revealing.remove(&id);
            }
            SignalsEvent::RevealFailed { id, notice } => {
                self.revealing.remove(&id);
                self.notice = Some(notice);
            }
            SignalsEvent::NoticeRaised(notice) => {
                self.notice = Some(notice);
            }
            SignalsEvent::NoticeDismissed => {
                self.notice = None;
            }
        }
    }

    #[must_use]
    pub fn is_revealing(&self, id: &str) -> bool {
        self.revealing.contains(id)
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Signal> {
        self.items.iter().find(|s| s.id == id)
    }

    /// Gate a reveal click.
    ///
    /// Without a wallet this raises the connect notice and starts nothing.
    /// Unknown ids and ids already in flight are ignored. Otherwise the id is
    /// marked in flight and the request to run is returned.
    pub fn begin_reveal(&mut self, id: &str, wallet_connected: bool) -> Option<RevealRequest> {
        if !wallet_connected {
            self.apply(SignalsEvent::NoticeRaised(NO_WALLET_NOTICE.to_owned()));
            return None;
        }
        if self.is_revealing(id) {
            return None;
        }
        let price = self.get(id)?.micropayment_price;
        self.apply(SignalsEvent::RevealStarted(id.to_owned()));
        Some(RevealRequest { signal_id: id.to_owned(), price })
    }
}
