//! # HTTP Server
//!
//! Combines the route modules into one router and serves it.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::db::QueryClient;
use crate::observability::{log_event_with_fields, Event};
use crate::store::{GameStore, OrderStore};

use super::config::HttpServerConfig;
use super::games_routes::games_routes;
use super::health_routes::health_routes;
use super::orders_routes::orders_routes;

/// HTTP server over a database client
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Wire the router against a database client
    pub fn new<C: QueryClient + 'static>(config: HttpServerConfig, client: Arc<C>) -> Self {
        let router = Self::build_router(&config, client);
        Self { config, router }
    }

    fn build_router<C: QueryClient + 'static>(
        config: &HttpServerConfig,
        client: Arc<C>,
    ) -> Router {
        let games = Arc::new(GameStore::new(client.clone()));
        let orders = Arc::new(OrderStore::new(client));

        // Permissive CORS only when no origins are configured
        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
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
            .merge(games_routes(games))
            .merge(orders_routes(orders))
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

    /// Bind and serve until the process is stopped
    pub async fn start(self) -> Result<(), io::Error> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

        let addr_text = addr.to_string();
        log_event_with_fields(Event::HttpServerStart, &[("addr", addr_text.as_str())]);

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router).await?;
        Ok(())
    }
}
