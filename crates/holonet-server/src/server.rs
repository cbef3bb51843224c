use std::net::SocketAddr;
use std::sync::Arc;

use axum::{middleware, routing::get, Router};
use tower_http::trace::TraceLayer;

use holonet_catalog::{CatalogConfig, CatalogService};
use holonet_client::{DynCatalogClient, SwapiClient};

use crate::{config::AppConfig, handlers, middleware as app_middleware};

/// Shared request state: the injected service plus the rewrite override.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<CatalogService>,
    pub rewrite_base: Option<String>,
}

pub struct HolonetServer {
    addr: SocketAddr,
    app: Router,
}

/// Build the gateway router from configuration.
///
/// Constructs the upstream client here and threads it through the
/// service; tests that need a different upstream point
/// `upstream.base_url` at their own mock server.
pub fn build_app(cfg: &AppConfig) -> anyhow::Result<Router> {
    let client: DynCatalogClient = Arc::new(SwapiClient::new(
        cfg.upstream.base_url.clone(),
        cfg.upstream_timeout(),
    )?);
    Ok(build_app_with_client(cfg, client))
}

/// Router assembly with an explicit client, for substituting test doubles.
pub fn build_app_with_client(cfg: &AppConfig, client: DynCatalogClient) -> Router {
    let service = CatalogService::new(
        client,
        cfg.upstream.base_url.trim_end_matches('/'),
        CatalogConfig {
            default_page_size: cfg.pagination.default_size,
            max_page_size: cfg.pagination.max_size,
        },
    );
    let state = AppState {
        service: Arc::new(service),
        rewrite_base: cfg.rewrite_base(),
    };

    Router::new()
        .route("/", get(handlers::query_root))
        .route("/healthz", get(handlers::healthz))
        .route("/{kind}", get(handlers::query_kind))
        .route("/{kind}/{id}", get(handlers::get_record))
        .fallback(handlers::not_found)
        .with_state(state)
        // CORS sits outside routing so OPTIONS preflights short-circuit
        // for every path.
        .layer(middleware::from_fn(app_middleware::cors))
        .layer(TraceLayer::new_for_http())
}

pub struct ServerBuilder {
    addr: SocketAddr,
    config: AppConfig,
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ServerBuilder {
    pub fn new() -> Self {
        let cfg = AppConfig::default();
        Self {
            addr: cfg.addr(),
            config: cfg,
        }
    }

    pub fn with_addr(mut self, addr: SocketAddr) -> Self {
        self.addr = addr;
        self
    }

    pub fn with_config(mut self, cfg: AppConfig) -> Self {
        self.addr = cfg.addr();
        self.config = cfg;
        self
    }

    pub fn build(self) -> anyhow::Result<HolonetServer> {
        let app = build_app(&self.config)?;
        Ok(HolonetServer {
            addr: self.addr,
            app,
        })
    }
}

impl HolonetServer {
    pub async fn run(self) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.addr).await?;
        tracing::info!("listening on {}", self.addr);
        axum::serve(listener, self.app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        Ok(())
    }
}

async fn shutdown_signal() {
    // Wait for Ctrl+C
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("shutdown signal received");
}
