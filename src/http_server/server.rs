//! # HTTP Server
//!
//! Main HTTP server combining the book routes with health and CORS.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::observability::{Logger, Severity};

use super::book_routes::{book_routes, BooksState};
use super::config::HttpServerConfig;

/// HTTP server for the bookshelf API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server for the given data file and configuration.
    pub fn new(data_path: impl Into<PathBuf>, config: HttpServerConfig) -> Self {
        let router = Self::build_router(data_path.into(), &config);
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    fn build_router(data_path: PathBuf, config: &HttpServerConfig) -> Router {
        let books_state = Arc::new(BooksState::with_data_path(data_path));

        // Permissive CORS when no origins are configured (development),
        // configured origins otherwise.
        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            use tower_http::cors::AllowOrigin;
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .route("/health", get(health_handler))
            .merge(book_routes(books_state))
            .layer(cors)
            .layer(TraceLayer::new_for_http())
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server (async)
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, format!("{}", e)))?;

        Logger::log(
            Severity::Info,
            "server_started",
            &[("addr", &addr.to_string())],
        );

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
