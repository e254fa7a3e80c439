use std::sync::Arc;

use anyhow::Context;
use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method},
    routing::{delete, get, post},
    Router,
};
use clap::Parser;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod api;
mod app_state;
mod config;

use api::{
    http_clear, http_complete, http_create_session, http_delete_session, http_health,
    http_prepare, http_rpc, http_session_rpc, http_set_color, http_set_number, http_status,
    not_found,
};
use app_state::AppState;
use config::{load_settings, Settings};

/// HTTP backend for the fiber tester controller.
#[derive(Parser, Debug)]
struct Args {
    /// Port to listen on; replaces the port of the configured bind address.
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let mut settings = load_settings();
    if let Some(port) = args.port {
        settings.override_port(port)?;
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let addr = settings.bind_addr()?;
    let state = AppState::new(addr.port(), settings.max_sessions);
    let app = build_router(Arc::new(state), &settings)?;

    info!(%addr, max_sessions = settings.max_sessions, "fiber tester backend listening");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutting down server");
    }
}

/// Every route answers unsupported methods with the same 404 envelope as
/// unknown paths. Oversized bodies surface as a JSON rejection (413).
fn build_router(state: Arc<AppState>, settings: &Settings) -> anyhow::Result<Router> {
    Ok(Router::new()
        .route("/api/health", get(http_health).fallback(not_found))
        .route("/api/status", get(http_status).fallback(not_found))
        .route("/api/set-color", post(http_set_color).fallback(not_found))
        .route("/api/set-number", post(http_set_number).fallback(not_found))
        .route("/api/prepare", post(http_prepare).fallback(not_found))
        .route("/api/complete", post(http_complete).fallback(not_found))
        .route("/api/clear", post(http_clear).fallback(not_found))
        .route("/api/rpc", post(http_rpc).fallback(not_found))
        .route("/api/sessions", post(http_create_session).fallback(not_found))
        .route(
            "/api/sessions/:session_id",
            delete(http_delete_session).fallback(not_found),
        )
        .route(
            "/api/sessions/:session_id/rpc",
            post(http_session_rpc).fallback(not_found),
        )
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(settings.max_body_bytes))
        .layer(cors_layer(&settings.cors_allow_origin)?)
        .with_state(state))
}

fn cors_layer(allow_origin: &str) -> anyhow::Result<CorsLayer> {
    let origin = if allow_origin.trim() == "*" {
        AllowOrigin::any()
    } else {
        let value = HeaderValue::from_str(allow_origin.trim())
            .with_context(|| format!("invalid CORS origin '{allow_origin}'"))?;
        AllowOrigin::exact(value)
    };

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]))
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
