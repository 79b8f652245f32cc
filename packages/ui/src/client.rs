//! Backend client context and hooks for the UI.

use api::EmployeeApi;
use dioxus::prelude::*;
use store::ClientConfig;

/// What every view needs to reach the backend.
#[derive(Clone, Debug)]
pub struct ClientContext {
    pub api: EmployeeApi,
    pub config: ClientConfig,
}

impl ClientContext {
    pub fn new(config: ClientConfig) -> api::Result<Self> {
        let api = EmployeeApi::from_config(&config)?;
        tracing::info!("Employee backend at {}", api.base_url());
        Ok(Self { api, config })
    }
}

impl PartialEq for ClientContext {
    fn eq(&self, other: &Self) -> bool {
        self.config == other.config
    }
}

/// Get the backend client provided by [`ClientProvider`].
pub fn use_client() -> ClientContext {
    use_context::<ClientContext>()
}

/// Provider component that builds the backend client from the startup configuration.
/// Wrap your router with this component; a bad base URL renders an error instead.
#[component]
pub fn ClientProvider(config: ClientConfig, children: Element) -> Element {
    let client = use_hook(move || {
        ClientContext::new(config).map_err(|e| {
            tracing::error!("Failed to create backend client: {e}");
            e.to_string()
        })
    });

    match client {
        Ok(client) => rsx! {
            ClientScope { client, {children} }
        },
        Err(message) => rsx! {
            div {
                class: "container",
                p { class: "error", "Configuration error: {message}" }
            }
        },
    }
}

#[component]
fn ClientScope(client: ClientContext, children: Element) -> Element {
    use_context_provider(move || client);

    rsx! {
        {children}
    }
}
