use std::sync::Arc;

use axum::{
    extract::State,
    http::Method,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

use postbox_notify::Mailer;
use postbox_store::{Database, Submission};

use crate::config::ServerConfig;
use crate::error::ApiError;
use crate::validate;

#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
    pub mailer: Option<Arc<Mailer>>,
    pub config: Arc<ServerConfig>,
}

pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    let static_dir = state.config.static_dir.clone();

    Router::new()
        .route("/health", get(health_check))
        .route("/contact", post(submit_contact))
        .route("/contacts", get(list_contacts))
        .fallback_service(ServeDir::new(static_dir))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(Deserialize)]
struct ContactRequest {
    #[serde(default)]
    name: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    message: String,
}

#[derive(Serialize)]
struct ContactResponse {
    success: bool,
    message: &'static str,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Accept a contact form submission: validate, persist, then notify.
///
/// The notification runs on a background task after the row is committed,
/// so a slow or failing mail server never affects the response.
async fn submit_contact(
    State(state): State<AppState>,
    Json(req): Json<ContactRequest>,
) -> Result<Json<ContactResponse>, ApiError> {
    let name = req.name.trim().to_string();
    let email = req.email.trim().to_string();
    let message = req.message.trim().to_string();

    validate::validate_submission(&name, &email, &message)?;

    let submission = state.db.save(&name, &email, &message)?;
    info!(id = submission.id, "Contact submission stored");

    match state.mailer.clone() {
        Some(mailer) => {
            tokio::spawn(async move {
                if let Err(err) = mailer.send(&name, &email, &message).await {
                    warn!(error = %err, "Contact notification failed");
                }
            });
        }
        None => debug!("No mailer configured, skipping notification"),
    }

    Ok(Json(ContactResponse {
        success: true,
        message: "Contact saved successfully",
    }))
}

/// Return every stored submission, newest first.
async fn list_contacts(
    State(state): State<AppState>,
) -> Result<Json<Vec<Submission>>, ApiError> {
    let submissions = state.db.list_all()?;
    debug!(count = submissions.len(), "Listing contact submissions");
    Ok(Json(submissions))
}

pub async fn serve(state: AppState, addr: std::net::SocketAddr) -> anyhow::Result<()> {
    let app = build_router(state);

    info!(addr = %addr, "Starting HTTP server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
