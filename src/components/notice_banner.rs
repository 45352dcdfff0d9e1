//! Dismissible banner for user-facing notices.
//!
//! Shows the dashboard notice first, then a pending wallet connect error.

use leptos::prelude::*;

use crate::state::signals::{SignalsEvent, SignalsState};
use crate::state::wallet::WalletState;

#[component]
pub fn NoticeBanner() -> impl IntoView {
    let signals = expect_context::<RwSignal<SignalsState>>();
    let wallet = expect_context::<RwSignal<WalletState>>();

    let message = move || {
        signals
            .with(|s| s.notice.clone())
            .or_else(|| wallet.with(|w| w.error.clone()))
    };

    let dismiss = move |_| {
        signals.update(|s| s.apply(SignalsEvent::NoticeDismissed));
        wallet.update(WalletState::clear_error);
    };

    view! {
        {move || {
            message()
                .map(|text| {
                    view! {
                        <div class="notice-banner" role="alert">
                            <span class="notice-banner__text">{text}</span>
                            <button class="notice-banner__dismiss" title="Dismiss" on:click=dismiss>
                                "×"
                            </button>
                        </div>
                    }
                })
        }}
    }
}
