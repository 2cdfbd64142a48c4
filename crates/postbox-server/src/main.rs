//! # postbox-server
//!
//! Contact-form backend for the storefront site.
//!
//! This binary provides:
//! - **POST /contact** -- validate and persist a submission, then fire a
//!   best-effort notification email to the operator
//! - **GET /contacts** -- every stored submission, newest first
//! - **GET /health** -- liveness probe
//! - **Static assets** -- any other path falls through to the configured
//!   static directory

mod api;
mod config;
mod error;
mod validate;

use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use postbox_notify::Mailer;
use postbox_store::Database;

use crate::api::AppState;
use crate::config::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // -----------------------------------------------------------------------
    // 1. Initialize tracing (respects RUST_LOG env var)
    // -----------------------------------------------------------------------
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,postbox_server=debug")),
        )
        .init();

    info!("Starting Postbox contact server v{}", env!("CARGO_PKG_VERSION"));

    // -----------------------------------------------------------------------
    // 2. Load configuration
    // -----------------------------------------------------------------------
    let config = ServerConfig::from_env();
    info!(
        http_addr = %config.http_addr,
        db_path = %config.db_path.display(),
        static_dir = %config.static_dir.display(),
        mail_enabled = config.mail.is_some(),
        "Loaded configuration"
    );

    // -----------------------------------------------------------------------
    // 3. Open the submissions store (idempotent schema setup)
    // -----------------------------------------------------------------------
    let db = Arc::new(Database::open_at(&config.db_path)?);

    // -----------------------------------------------------------------------
    // 4. Build the notification mailer, if credentials are configured
    // -----------------------------------------------------------------------
    let mailer = match &config.mail {
        Some(mail_config) => match Mailer::new(mail_config) {
            Ok(mailer) => Some(Arc::new(mailer)),
            Err(e) => {
                warn!(error = %e, "Mailer misconfigured, notifications disabled");
                None
            }
        },
        None => {
            warn!("MAIL_USERNAME/MAIL_PASSWORD not set, notifications disabled");
            None
        }
    };

    // -----------------------------------------------------------------------
    // 5. Run the HTTP server (blocks until shutdown)
    // -----------------------------------------------------------------------
    let http_addr = config.http_addr;
    let state = AppState {
        db,
        mailer,
        config: Arc::new(config),
    };

    tokio::select! {
        result = api::serve(state, http_addr) => {
            if let Err(e) = result {
                tracing::error!(error = %e, "HTTP server failed");
                return Err(e);
            }
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Received Ctrl+C, shutting down");
        }
    }

    Ok(())
}
