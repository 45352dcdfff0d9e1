//! Connect / disconnect control for the injected Solana wallet.

use leptos::prelude::*;

use crate::state::wallet::WalletState;

#[component]
pub fn WalletButton() -> impl IntoView {
    let wallet = expect_context::<RwSignal<WalletState>>();

    let on_click = move |_| {
        if wallet.with_untracked(WalletState::is_connected) {
            wallet.update(WalletState::disconnected);
            #[cfg(feature = "hydrate")]
            {
                leptos::task::spawn_local(crate::wallet::injected::disconnect());
            }
            return;
        }
        if wallet.with_untracked(|w| w.connecting) {
            return;
        }

        wallet.update(WalletState::connect_started);
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::wallet::injected::connect().await {
                    Ok(key) => {
                        log::info!("wallet connected: {key}");
                        wallet.update(|w| w.connected(key));
                    }
                    Err(e) => {
                        log::warn!("wallet connect failed: {e}");
                        wallet.update(|w| w.connect_failed(e.to_string()));
                    }
                }
            });
        }
    };

    view! {
        <button
            class="btn btn--wallet"
            class:btn--connected=move || wallet.with(WalletState::is_connected)
            on:click=on_click
        >
            {move || wallet.with(WalletState::button_label)}
        </button>
    }
}
