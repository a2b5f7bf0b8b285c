//! Server Implementation
//!
//! HTTP 服务器启动和管理

use std::net::SocketAddr;
use std::time::{Duration, Instant};

use axum::{Router, ServiceExt, extract::Request, middleware};
use tower::Layer;
use tower_http::cors::CorsLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::core::{Config, Result, ServerError, ServerState};
use shared::{AppError, ErrorCode};

/// HTTP 请求日志中间件
async fn log_request(
    request: http::Request<axum::body::Body>,
    next: middleware::Next,
) -> http::Response<axum::body::Body> {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_string();
    let started = Instant::now();

    let response = next.run(request).await;

    let status = response.status();
    let latency_ms = started.elapsed().as_millis() as u64;

    tracing::info!(
        target: "http_access",
        request_id = %request_id,
        latency_ms,
        "{} {} {}",
        method,
        uri,
        status
    );

    response
}

/// Build the Axum router (without state)
pub fn build_app() -> Router<ServerState> {
    crate::api::health::mark_started();

    Router::<ServerState>::new()
        // Core APIs
        .merge(crate::api::health::router())
        // Catalogue and sales
        .merge(crate::api::products::router())
        .merge(crate::api::orders::router())
        // Content
        .merge(crate::api::blog::router())
        .merge(crate::api::faq::router())
        .merge(crate::api::contact::router())
        .merge(crate::api::newsletter::router())
        .merge(crate::api::testimonials::router())
        .merge(crate::api::stats::router())
        .fallback(route_not_found)
}

/// 未知路由也返回统一错误体
async fn route_not_found() -> AppError {
    AppError::new(ErrorCode::NotFound)
}

/// Build the full service: routes, state, middleware and trailing-slash normalisation
///
/// `/api/faq/` and `/api/faq` resolve to the same route.
pub fn build_router(state: ServerState) -> NormalizePath<Router> {
    let app = build_app()
        .with_state(state)
        // HTTP 请求日志中间件
        .layer(middleware::from_fn(log_request))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(CorsLayer::permissive());

    NormalizePathLayer::trim_trailing_slash().layer(app)
}

/// Ctrl-C 或 SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
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

    tracing::info!("Shutting down...");
}

/// HTTP Server
pub struct Server {
    config: Config,
    state: Option<ServerState>,
}

impl Server {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            state: None,
        }
    }

    /// Create server with existing state
    pub fn with_state(config: Config, state: ServerState) -> Self {
        Self {
            config,
            state: Some(state),
        }
    }

    pub async fn run(&self) -> Result<()> {
        // Create application state if not provided
        let state = match &self.state {
            Some(s) => s.clone(),
            None => ServerState::initialize(&self.config).await?,
        };

        let addr: SocketAddr = self
            .config
            .bind_addr()
            .parse()
            .map_err(|e| ServerError::Config(format!("Invalid bind address: {}", e)))?;

        let app = build_router(state);

        let handle = axum_server::Handle::new();
        let shutdown_handle = handle.clone();
        let grace = Duration::from_millis(self.config.shutdown_timeout_ms);
        tokio::spawn(async move {
            shutdown_signal().await;
            shutdown_handle.graceful_shutdown(Some(grace));
        });

        tracing::info!("🚀 Storefront API listening on {}", addr);

        axum_server::bind(addr)
            .handle(handle)
            .serve(ServiceExt::<Request>::into_make_service(app))
            .await?;

        tracing::info!("Server stopped");
        Ok(())
    }
}
