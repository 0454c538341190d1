//! Acts9 IT Services HTTP Server
//!
//! Axum-based host for the WASM frontend. Serves the built site with a
//! fallback to `index.html` so client-side routes deep-link, and hands the
//! EmailJS identifiers to the browser.

mod handlers;
mod state;

use std::path::{Path, PathBuf};

use axum::{Router, routing::get};
use site_core::EmailConfig;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::handlers::{email_config, health_check};
use crate::state::AppState;

/// Build the router over a directory of built frontend assets
fn app(state: AppState, static_dir: &Path) -> Router {
    // CORS configuration (lets `trunk serve` on another port reach the API)
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let site = ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        .route("/health", get(health_check))
        .route("/api/config", get(email_config))
        // Static files (WASM frontend), unknown paths get the SPA shell
        .fallback_service(site)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let email = match EmailConfig::from_env() {
        Ok(config) => {
            tracing::info!("✓ EmailJS configured (service {})", config.service_id);
            Some(config)
        }
        Err(e) => {
            tracing::warn!("⚠ {} - contact form will report failures", e);
            tracing::warn!("  Set EMAILJS_SERVICE_ID, EMAILJS_TEMPLATE_ID and EMAILJS_PUBLIC_KEY in .env");
            None
        }
    };

    let static_dir = PathBuf::from(std::env::var("STATIC_DIR").unwrap_or_else(|_| "static".into()));
    if !static_dir.join("index.html").exists() {
        tracing::warn!("⚠ {} has no index.html - build the frontend first", static_dir.display());
    }

    let app = app(AppState::new(email), &static_dir);

    // Start server
    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("🚀 site-server running on http://{}", addr);
    tracing::info!("  GET  /health      - Health check");
    tracing::info!("  GET  /api/config  - EmailJS identifiers");
    tracing::info!("  GET  /*           - {}", static_dir.display());

    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    fn configured() -> AppState {
        AppState::new(Some(EmailConfig::new("service_1", "template_1", "pk_1")))
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health_reports_email_configuration() {
        let dir = Path::new("static");

        let (status, body) = get_json(app(configured(), dir), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["email_configured"], true);

        let (_, body) = get_json(app(AppState::default(), dir), "/health").await;
        assert_eq!(body["email_configured"], false);
    }

    #[tokio::test]
    async fn test_config_returns_identifiers() {
        let (status, body) = get_json(app(configured(), Path::new("static")), "/api/config").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            serde_json::json!({
                "service_id": "service_1",
                "template_id": "template_1",
                "public_key": "pk_1",
            })
        );
    }

    #[tokio::test]
    async fn test_config_unavailable_when_unset() {
        let (status, body) = get_json(app(AppState::default(), Path::new("static")), "/api/config").await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["code"], "EMAIL_NOT_CONFIGURED");
    }

    #[tokio::test]
    async fn test_client_routes_fall_back_to_index() {
        let dir = std::env::temp_dir().join(format!("site-server-test-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("index.html"), "<html>shell</html>").unwrap();

        for uri in ["/", "/services", "/contact"] {
            let response = app(configured(), &dir)
                .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK, "{uri}");
            let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
            assert_eq!(&bytes[..], b"<html>shell</html>");
        }

        std::fs::remove_dir_all(&dir).ok();
    }
}
