//! Wirebook - unified composition root binary.

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use std::sync::Arc;

use wirebook_client::application::Api;
use wirebook_client::infrastructure::http_client::ApiAdapter;
use wirebook_client::ports::outbound::RawApiPort;
use wirebook_client::presentation::Services;

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wirebook_client=debug,dioxus=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
    }

    tracing::info!("Starting Wirebook");

    // Phonebook store base URL; paths live under /persons.
    let api_url = std::env::var("WIREBOOK_API_URL")
        .unwrap_or_else(|_| "http://localhost:3001".to_string());

    // HTTP
    let raw_api: Arc<dyn RawApiPort> = Arc::new(ApiAdapter::new(api_url));
    let api = Api::new(raw_api);

    // Launch Dioxus
    dioxus::LaunchBuilder::new()
        .with_context(Services::new(api))
        .launch(wirebook_client::ui::app);
}
