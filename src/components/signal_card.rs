//! One signal on the dashboard grid.

use leptos::prelude::*;

use crate::net::types::Signal;
use crate::state::signals::SignalsState;
use crate::util::format::{format_fee, format_probability, meter_width, platform_label};

/// Card with probability meter, vote tallies, fee and reveal trigger.
///
/// The trigger is disabled only while this card's own reveal is in flight.
#[component]
pub fn SignalCard(signal: Signal, on_reveal: Callback<String>) -> impl IntoView {
    let signals = expect_context::<RwSignal<SignalsState>>();

    let id = signal.id.clone();
    let busy = move || signals.with(|s| s.is_revealing(&id));

    let probability = signal.win_probability;
    let unlocked = (!signal.is_locked)
        .then(|| signal.alpha_analysis.clone())
        .flatten()
        .filter(|text| !text.is_empty());

    let reveal_id = signal.id.clone();
    let on_click = move |_| on_reveal.run(reveal_id.clone());

    view! {
        <div class="signal-card">
            <div class="signal-card__badge">
                <span>{platform_label(&signal.platform)}</span>
                <span class="signal-card__live">"Live"</span>
            </div>

            <h3 class="signal-card__title">{signal.title.clone()}</h3>

            <div class="signal-card__meter">
                <div class="signal-card__meter-head">
                    <span class="signal-card__meter-label">"AI Win Probability"</span>
                    <span class="signal-card__probability">{format_probability(probability)}</span>
                </div>
                <div class="signal-card__track">
                    <div class="signal-card__fill" style:width=meter_width(probability)></div>
                </div>
            </div>

            <div class="signal-card__votes">
                <button class="signal-card__vote signal-card__vote--up">
                    <span>"▲"</span>
                    <span>{signal.community_up}</span>
                </button>
                <button class="signal-card__vote signal-card__vote--down">
                    <span>"▼"</span>
                    <span>{signal.community_down}</span>
                </button>
                <div class="signal-card__consensus">
                    <span>"Consensus: "</span>
                    <span class="signal-card__consensus-value">"Bullish"</span>
                </div>
            </div>

            {match unlocked {
                Some(text) => view! {
                    <div class="signal-card__analysis">
                        <div class="signal-card__analysis-label">"Unlocked Alpha"</div>
                        <p>{text}</p>
                    </div>
                }
                    .into_any(),
                None => view! {
                    <div class="signal-card__actions">
                        <div>
                            <div class="signal-card__fee-label">"Fee to Unlock"</div>
                            <div class="signal-card__fee">
                                {format_fee(signal.micropayment_price)}
                                " "
                                <span class="signal-card__asset">"USDC"</span>
                            </div>
                        </div>
                        <button
                            class="btn btn--primary signal-card__reveal"
                            on:click=on_click
                            disabled=busy.clone()
                        >
                            <Show when=busy.clone() fallback=|| "Reveal Alpha">
                                <span class="signal-card__spinner"></span>
                                "Processing"
                            </Show>
                        </button>
                    </div>
                }
                    .into_any(),
            }}
        </div>
    }
}
