//! Application wiring and lifecycle.

use crate::catalog::HttpCatalog;
use crate::config::Config;
use crate::localization::Locale;
use crate::state::AppState;
use crate::web::create_router;
use anyhow::Context;
use figment::{Figment, providers::Env};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use url::Url;

/// Main application struct containing all necessary components
pub struct App {
    config: Config,
    app_state: AppState,
}

impl App {
    /// Create a new App instance with all necessary components initialized.
    ///
    /// Missing or invalid wiring (catalog URL, locale file) fails here rather
    /// than surfacing later as runtime errors.
    pub async fn new() -> Result<Self, anyhow::Error> {
        // Load configuration
        let config: Config = Figment::new()
            .merge(Env::raw())
            .extract()
            .context("Failed to load config")?;

        let base = Url::parse(&config.catalog_base_url).context("Invalid CATALOG_BASE_URL")?;
        let catalog = HttpCatalog::new(base, Duration::from_secs(config.catalog_timeout))
            .context("Failed to create catalog client")?;
        info!(
            catalog = %config.catalog_base_url,
            timeout_secs = config.catalog_timeout,
            "catalog client ready"
        );

        let locale = match &config.locale_file {
            Some(path) => {
                let locale = Locale::from_file(path).context("Failed to load locale file")?;
                info!(path = %path.display(), "locale overrides loaded");
                locale
            }
            None => Locale::default(),
        };

        let app_state = AppState::new(Arc::new(catalog), locale);

        Ok(App { config, app_state })
    }

    /// Bind the listener and serve until a shutdown signal arrives.
    pub async fn run(self) -> Result<(), anyhow::Error> {
        let router = create_router(self.app_state.clone());
        let addr = SocketAddr::from(([0, 0, 0, 0], self.config.port));
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind {addr}"))?;
        info!(%addr, "admin-select API listening");

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal(self.config.shutdown_timeout))
            .await
            .context("Server error")
    }
}

/// Resolve on SIGINT/SIGTERM. Once a signal lands, a watchdog gives in-flight
/// requests `timeout_secs` to drain before forcing the process down.
async fn shutdown_signal(timeout_secs: u64) {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!(timeout_secs, "shutdown signal received, draining connections");

    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_secs(timeout_secs)).await;
        warn!("shutdown grace period expired, exiting");
        std::process::exit(1);
    });
}
