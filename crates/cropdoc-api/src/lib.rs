//! # cropdoc-api
//!
//! HTTP surface for the cropdoc disease catalog and symptom matcher.
//!
//! ## Overview
//!
//! [`router`] wires the handlers over a shared [`AppState`]; [`serve`] binds
//! a listener from a [`ServerConfig`] and runs until Ctrl+C or SIGTERM.
//! Every failure leaves as `{ "success": false, "message": ... }` through
//! [`ApiError`].
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use cropdoc_api::{serve, ServerConfig};
//!
//! let config = ServerConfig::load(None)?;
//! serve(config).await?;
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod identity;
pub mod models;
pub mod state;

pub use config::ServerConfig;
pub use error::ApiError;
pub use identity::{Caller, USER_EMAIL_HEADER};
pub use state::AppState;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tokio::{net::TcpListener, signal};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

use cropdoc_contracts::error::{CropdocError, CropdocResult};

/// Build the application router.
pub fn router(state: Arc<AppState>, cors_allow_any: bool) -> Router {
    let app = Router::new()
        .route("/health", get(handlers::health))
        .route("/api/diseases", get(handlers::list_diseases))
        .route("/api/disease/:id", get(handlers::get_disease))
        .route("/api/search-diseases", post(handlers::search_diseases))
        .route("/api/match-symptoms", post(handlers::match_symptoms))
        .route(
            "/api/diseases-by-plant/:plant",
            get(handlers::diseases_by_plant),
        )
        .route("/api/statistics", get(handlers::statistics))
        .route("/api/user-info", get(handlers::user_info))
        .route("/api/search-history", get(handlers::search_history))
        .fallback(handlers::not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    if cors_allow_any {
        app.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
    } else {
        app
    }
}

/// Load state from `config`, bind, and serve until a shutdown signal.
pub async fn serve(config: ServerConfig) -> CropdocResult<()> {
    let state = Arc::new(AppState::from_config(&config)?);
    let app = router(state, config.cors_allow_any);

    let listener = TcpListener::bind(config.bind)
        .await
        .map_err(|e| CropdocError::ServerError {
            reason: format!("failed to bind {}: {}", config.bind, e),
        })?;
    info!(bind = %config.bind, "cropdoc listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| CropdocError::ServerError {
            reason: format!("server error: {}", e),
        })?;

    info!("cropdoc stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("received Ctrl+C, shutting down"),
            Err(e) => {
                tracing::warn!(error = %e, "failed to install Ctrl+C handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
