//! Application startup and lifecycle management.
//!
//! One HTTP server: `POST /analyze`, health and metrics endpoints, and the
//! public asset directory for everything else.

use crate::config::PartAnalysisConfig;
use crate::handlers::{analyze::analyze, health::health_check, metrics::metrics};
use crate::services::metrics::{http_metrics_middleware, init_metrics};
use crate::services::providers::gemini::{GeminiConfig, GeminiVisionProvider};
use crate::services::providers::VisionProvider;
use axum::{
    extract::DefaultBodyLimit,
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::request_id::{request_id_middleware, REQUEST_ID_HEADER};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Shared application state. Built once at startup, never mutated.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<PartAnalysisConfig>,
    pub provider: Arc<dyn VisionProvider>,
}

pub fn build_router(state: AppState) -> Router {
    let assets = ServeDir::new(&state.config.assets.public_dir);

    Router::new()
        .route(
            "/analyze",
            post(analyze).layer(DefaultBodyLimit::max(state.config.upload.max_bytes)),
        )
        .route("/health", get(health_check))
        .route("/metrics", get(metrics))
        .fallback_service(assets)
        .layer(from_fn(http_metrics_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get(REQUEST_ID_HEADER)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            }),
        )
        .layer(from_fn(request_id_middleware))
        .with_state(state)
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application with the Gemini provider.
    pub async fn build(config: PartAnalysisConfig) -> Result<Self, AppError> {
        let provider = GeminiVisionProvider::new(GeminiConfig::from(&config.gemini))
            .map_err(AppError::config)?;

        tracing::info!(
            model = %config.gemini.model,
            "Initialized Gemini vision provider"
        );

        Self::build_with_provider(config, Arc::new(provider)).await
    }

    /// Build the application around any provider (port 0 = random port for testing).
    pub async fn build_with_provider(
        config: PartAnalysisConfig,
        provider: Arc<dyn VisionProvider>,
    ) -> Result<Self, AppError> {
        init_metrics().map_err(|e| AppError::InternalError(anyhow::Error::new(e)))?;

        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind HTTP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!(
            public_dir = %config.assets.public_dir.display(),
            "Part analysis service: HTTP on port {}",
            port
        );

        let state = AppState {
            config: Arc::new(config),
            provider,
        };

        Ok(Self {
            port,
            listener,
            router: build_router(state),
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until a shutdown signal arrives.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| {
                tracing::error!("HTTP server error: {}", e);
                e
            })
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
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

    tracing::info!("Shutdown signal received");
}
