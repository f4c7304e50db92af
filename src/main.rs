//! Hotel Admin - Dioxus fullstack entry point
//!
//! The same binary serves server-rendered pages (`server` feature) and runs
//! as the hydrated client in the browser (`web` feature).

use hotel_admin::app::App;

fn main() {
    #[cfg(feature = "server")]
    if let Err(e) = server_setup() {
        eprintln!("Failed to load configuration: {e:#}");
        std::process::exit(1);
    }

    dioxus::launch(App);
}

/// Load config, install logging and export the bind address for `dioxus::launch`
#[cfg(feature = "server")]
fn server_setup() -> anyhow::Result<()> {
    use hotel_admin::config;
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let config = config::load_config()?;

    // Installed before launch, so Dioxus keeps this subscriber instead of its default
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()?;

    tracing::info!(
        "Starting Hotel Admin v{} ({})",
        env!("HOTEL_ADMIN_VERSION"),
        env!("HOTEL_ADMIN_GIT_SHA")
    );
    tracing::info!("Hotel API base: {}", config::api_base());

    // dioxus::launch reads the bind address from IP/PORT
    std::env::set_var("IP", &config.ip);
    std::env::set_var("PORT", config.port.to_string());
    tracing::info!("Listening on http://{}:{}", config.ip, config.port);

    Ok(())
}
