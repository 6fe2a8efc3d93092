//! HTTP server
//!
//! Combines the health, resolve, and webhook routers into the single axum
//! server backing both entry points. Handlers share one `AppState`: the
//! swappable catalog cell plus the default device for selector-less webhook
//! queries.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use crate::catalog::SharedCatalog;
use crate::observability::Logger;

use super::config::HttpServerConfig;
use super::health_routes::health_routes;
use super::resolve_routes::resolve_routes;
use super::webhook_routes::webhook_routes;

/// State shared by all request handlers
pub struct AppState {
    pub catalog: Arc<SharedCatalog>,
    pub default_device: String,
}

/// HTTP server for errdesk
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server over a shared catalog
    pub fn new(
        config: HttpServerConfig,
        catalog: Arc<SharedCatalog>,
        default_device: impl Into<String>,
    ) -> Self {
        let state = Arc::new(AppState {
            catalog,
            default_device: default_device.into(),
        });
        let router = Self::build_router(&config, state);
        Self { config, router }
    }

    fn build_router(config: &HttpServerConfig, state: Arc<AppState>) -> Router {
        let cors = if config.cors_origins.is_empty() {
            // No origins configured: permissive, for development
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
            .merge(health_routes())
            .merge(resolve_routes(state.clone()))
            .nest("/webhook", webhook_routes(state))
            .layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until the process exits
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid socket address: {}", e),
            )
        })?;

        Logger::info("HTTP_SERVER_STARTED", &[("addr", &addr.to_string())]);

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}
