use crate::Environment;
use tracing_subscriber::{EnvFilter, prelude::*};

/// Directives used when `RUST_LOG` is unset
pub fn default_directives(environment: &Environment) -> &'static str {
    match environment {
        Environment::Production => "info,sqlx=warn,tower_http=info",
        Environment::Development => "debug,hyper=info,tower=info",
    }
}

fn build_filter(environment: &Environment) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(environment)))
}

/// Installs color-eyre report hooks; call first in `main`.
///
/// Reports show the error location and omit the environment section.
/// Repeated calls are ignored.
pub fn install_color_eyre() {
    let _ = color_eyre::config::HookBuilder::default()
        .display_location_section(true)
        .display_env_section(false)
        .install();
}

/// Sets the global subscriber for `environment`
///
/// Production writes flattened JSON lines without targets; development
/// writes pretty multi-line events. Both carry `tracing_error::ErrorLayer`
/// so eyre reports include span traces, and `RUST_LOG` replaces
/// [`default_directives`].
///
/// Returns `false` when a subscriber was already installed.
pub fn init_tracing(environment: &Environment) -> bool {
    let filter = build_filter(environment);

    let installed = match environment {
        Environment::Production => tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(false)
                    .flatten_event(true),
            )
            .with(tracing_error::ErrorLayer::default())
            .with(filter)
            .try_init(),
        Environment::Development => tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer().with_target(true).pretty())
            .with(tracing_error::ErrorLayer::default())
            .with(filter)
            .try_init(),
    }
    .is_ok();

    if installed {
        tracing::info!(environment = ?environment, "Tracing initialized");
    }
    installed
}
