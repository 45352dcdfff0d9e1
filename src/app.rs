//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::ClientConfig;
use crate::pages::dashboard::DashboardPage;
use crate::state::{chat::ChatState, signals::SignalsState, ui::UiState, wallet::WalletState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides configuration and all shared state contexts, then routes.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(ClientConfig::from_env());
    provide_context(RwSignal::new(SignalsState::default()));
    provide_context(RwSignal::new(ChatState::seeded()));
    provide_context(RwSignal::new(UiState::default()));
    provide_context(RwSignal::new(WalletState::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/signal402.css"/>
        <Title text="Signal402 | Institutional Alpha"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=DashboardPage/>
            </Routes>
        </Router>
    }
}
