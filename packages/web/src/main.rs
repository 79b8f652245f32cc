use dioxus::prelude::*;

use store::ClientConfig;
use ui::ClientProvider;
use views::{AddEmployee, NotFound, Shell, ViewEmployees};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        AddEmployee {},
        #[route("/view-employees")]
        ViewEmployees {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

fn main() {
    let config = startup_config();
    let level = config
        .log_level()
        .ok()
        .and_then(|level| level.parse().ok())
        .unwrap_or(tracing::Level::INFO);
    dioxus::logger::init(level).ok();

    dioxus::LaunchBuilder::new().with_context(config).launch(App);
}

/// The browser has no config file, so the base URL is baked in at build time.
fn startup_config() -> ClientConfig {
    match option_env!("EMPLOYEE_API_URL") {
        Some(url) => ClientConfig::default().with_base_url(url),
        None => ClientConfig::default(),
    }
}

#[component]
fn App() -> Element {
    let config = use_context::<ClientConfig>();

    rsx! {
        ClientProvider {
            config,
            Router::<Route> {}
        }
    }
}
