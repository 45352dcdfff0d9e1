//! Dashboard page: signal grid, wallet header and chat toggle.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::chat_room::ChatRoom;
use crate::components::notice_banner::NoticeBanner;
use crate::components::signal_card::SignalCard;
use crate::components::wallet_button::WalletButton;
use crate::config::ClientConfig;
use crate::net::api::SignalBackend;
use crate::state::signals::{SignalsEvent, SignalsState};
use crate::state::ui::UiState;
use crate::state::wallet::WalletState;

pub const HERO_BADGE: &str = "Powered by Gemini 3 Pro";
pub const HERO_HEADLINE: &str = "Institutional AI Alpha";
pub const HERO_SUBHEADLINE: &str = "for Prediction Markets";
pub const HERO_LEDE: &str = "Signal402 analyzes global liquidity and macro sentiment to deliver \
    high-probability market shifts. Gated by Solana x402 micropayments.";
pub const LOADING_TEXT: &str = "Fetching Institutional Alpha Signals...";

/// Fetch the signal list and turn the outcome into a state event.
///
/// Failures are logged and end loading with whatever list was already held.
pub async fn load_signals<B: SignalBackend + ?Sized>(backend: &B) -> SignalsEvent {
    match backend.list_signals().await {
        Ok(items) => {
            log::debug!("loaded {} signals", items.len());
            SignalsEvent::FetchSucceeded(items)
        }
        Err(e) => {
            log::error!("Failed to fetch signals: {e}");
            SignalsEvent::FetchFailed
        }
    }
}

/// Dashboard page. Loads signals once on mount.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let signals = expect_context::<RwSignal<SignalsState>>();
    let wallet = expect_context::<RwSignal<WalletState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    #[cfg(feature = "hydrate")]
    {
        let backend = crate::net::api::HttpBackend::new(config.backend_url.clone());
        leptos::task::spawn_local(async move {
            let event = load_signals(&backend).await;
            signals.update(|s| s.apply(event));
        });
    }

    let on_reveal = Callback::new(move |id: String| {
        let public_key = wallet.with_untracked(|w| w.public_key);
        let Some(request) = signals
            .try_update(|s| s.begin_reveal(&id, public_key.is_some()))
            .flatten()
        else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let config = config.clone();
            leptos::task::spawn_local(async move {
                let event = crate::reveal::reveal_with_config(&config, public_key, request).await;
                signals.update(|s| s.apply(event));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&config, request);
        }
    });

    let render_card = move |signal: crate::net::types::Signal| {
        view! { <SignalCard signal=signal on_reveal=on_reveal/> }
    };

    let chat_open = Signal::derive(move || ui.with(|u| u.chat_open));
    let on_close_chat = Callback::new(move |()| ui.update(UiState::close_chat));

    view! {
        <div class="dashboard">
            <header class="dashboard__header">
                <div class="dashboard__brand">
                    <div class="dashboard__logo">"S"</div>
                    <span class="dashboard__wordmark">"SIGNAL402"</span>
                </div>
                <nav class="dashboard__nav">
                    <a href="#signals">"Signals"</a>
                    <a href="#">"Markets"</a>
                    <a href="#">"Documentation"</a>
                    <WalletButton/>
                </nav>
            </header>

            <NoticeBanner/>

            <main class="dashboard__main">
                <section class="dashboard__hero">
                    <span class="dashboard__pill">{HERO_BADGE}</span>
                    <h1 class="dashboard__headline">
                        {HERO_HEADLINE}
                        <br/>
                        <span class="dashboard__headline-accent">{HERO_SUBHEADLINE}</span>
                    </h1>
                    <p class="dashboard__lede">{HERO_LEDE}</p>
                </section>

                <section id="signals" class="dashboard__signals">
                    <div class="dashboard__signals-head">
                        <h2>"Active Alpha Signals"</h2>
                        <div class="dashboard__filters">
                            <button class="btn btn--active">"Latest"</button>
                            <button class="btn">"Trending"</button>
                        </div>
                    </div>

                    {move || {
                        if signals.with(|s| s.loading) {
                            view! {
                                <div class="dashboard__loading">
                                    <span class="dashboard__spinner"></span>
                                    <p>{LOADING_TEXT}</p>
                                </div>
                            }
                                .into_any()
                        } else {
                            view! {
                                <div class="dashboard__grid">
                                    {signals
                                        .with(|s| s.items.clone())
                                        .into_iter()
                                        .map(render_card)
                                        .collect::<Vec<_>>()}
                                </div>
                            }
                                .into_any()
                        }
                    }}
                </section>
            </main>

            <ChatRoom is_open=chat_open on_close=on_close_chat/>

            <button
                class="chat-toggle"
                class:chat-toggle--open=move || chat_open.get()
                title="Community Chat"
                on:click=move |_| ui.update(UiState::toggle_chat)
            >
                {move || if chat_open.get() { "×" } else { "💬" }}
                <Show when=move || !chat_open.get()>
                    <span class="chat-toggle__dot"></span>
                </Show>
            </button>

            <footer class="dashboard__footer">
                "© 2026 Signal402 • Protocol Layer Optimized • Non-Custodial"
            </footer>
        </div>
    }
}
