use std::path::PathBuf;

use dioxus::prelude::*;

use store::{ClientConfig, ConfigError};
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

/// Points at an explicit config file, overriding the per-user default location.
const CONFIG_PATH_VAR: &str = "EMPLOYEE_DIRECTORY_CONFIG";
/// Overrides `[api] base_url` from whatever file was loaded.
const BASE_URL_VAR: &str = "EMPLOYEE_API_URL";

fn main() {
    dotenvy::dotenv().ok();

    // The logger can only be set once, so a broken config is reported at the default level.
    let config = load_config();
    let level = config
        .as_ref()
        .ok()
        .and_then(|config| config.log_level().ok())
        .and_then(|level| level.parse().ok())
        .unwrap_or(tracing::Level::INFO);
    dioxus::logger::init(level).ok();

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    dioxus::LaunchBuilder::new().with_context(config).launch(App);
}

fn config_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var(CONFIG_PATH_VAR) {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|dir| dir.join("employee-directory").join(ClientConfig::filename()))
}

/// Read the config file if there is one, then apply the environment override.
/// A missing file means defaults; an unreadable or malformed one is fatal.
fn load_config() -> Result<ClientConfig, ConfigError> {
    let mut config = match config_path() {
        Some(path) => ClientConfig::load(&path)?,
        None => ClientConfig::default(),
    };

    if let Ok(url) = std::env::var(BASE_URL_VAR) {
        config = config.with_base_url(url);
    }
    config.validate()?;
    Ok(config)
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
