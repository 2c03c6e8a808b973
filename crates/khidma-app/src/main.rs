// SPDX-License-Identifier: MIT
//
// Khidma — خدمتك أولويتي services portal
//
// Entry point. Initialises logging, the view controllers, app state, and
// launches the Dioxus UI.

mod pages;
mod services;
mod state;

use dioxus::prelude::*;

use pages::landing::Landing;
use services::view_services::ViewServices;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Khidma starting");

    dioxus::launch(app);
}

/// Root component.
fn app() -> Element {
    // Initialise the view controllers (carousel, section tracker, scroll
    // tracking) around the compiled-in catalog.
    let svc = use_hook(|| match ViewServices::init() {
        Ok(s) => {
            tracing::info!("view services initialised");
            s
        }
        Err(e) => {
            tracing::error!(error = %e, "view services init failed");
            panic!("view services init failed: {e}");
        }
    });

    // Provide services and state as context for the whole page
    use_context_provider(|| svc.clone());
    use_context_provider(|| Signal::new(state::AppState::new(&svc)));

    rsx! {
        Landing {}
    }
}
