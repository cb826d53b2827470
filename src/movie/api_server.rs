//! REST API server for movie and award interval endpoints

use anyhow::Result;
use axum::{extract::State, http::StatusCode, response::Json, routing::get, Router};
use serde::Serialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use super::models::{AwardIntervalResult, MovieRecord};
use super::service::MovieService;

/// API server for the movie endpoints
pub struct ApiServer {
    service: Arc<MovieService>,
    host: String,
    port: u16,
}

impl ApiServer {
    pub fn new(service: Arc<MovieService>, host: impl Into<String>, port: u16) -> Self {
        Self {
            service,
            host: host.into(),
            port,
        }
    }

    /// Bind the configured address and serve until the process stops
    pub async fn start(self) -> Result<()> {
        let addr = format!("{}:{}", self.host, self.port);
        let listener = TcpListener::bind(&addr).await?;
        info!("Starting API server on {}", addr);

        self.serve(listener).await
    }

    /// Serve on an already bound listener
    pub async fn serve(self, listener: TcpListener) -> Result<()> {
        axum::serve(listener, self.router()).await?;
        Ok(())
    }

    pub fn router(&self) -> Router {
        router(self.service.clone())
    }
}

/// Build the API router around a shared service
pub fn router(service: Arc<MovieService>) -> Router {
    let shared_state = Arc::new(ApiState { service });

    Router::new()
        .route("/health", get(health_check))
        .route("/movie", get(list_movies))
        .route("/awards/intervals", get(get_award_intervals))
        .layer(CorsLayer::permissive())
        .with_state(shared_state)
}

/// Bind an ephemeral port on localhost and serve in the background
///
/// Returns the bound address. Used by integration tests and local tooling.
pub async fn spawn_local(service: Arc<MovieService>) -> Result<SocketAddr> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let app = router(service);

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            warn!("API server on {} stopped: {}", addr, e);
        }
    });

    Ok(addr)
}

#[derive(Clone)]
struct ApiState {
    service: Arc<MovieService>,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    movies: usize,
}

// API Handlers

async fn health_check(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<HealthResponse>, StatusCode> {
    match state.service.find_all().await {
        Ok(movies) => Ok(Json(HealthResponse {
            status: "ok",
            movies: movies.len(),
        })),
        Err(e) => {
            warn!("Health check failed: {}", e);
            Err(StatusCode::SERVICE_UNAVAILABLE)
        }
    }
}

async fn list_movies(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<MovieRecord>>, StatusCode> {
    match state.service.find_all().await {
        Ok(movies) => Ok(Json(movies)),
        Err(e) => {
            warn!("Failed to list movies: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

async fn get_award_intervals(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<AwardIntervalResult>, StatusCode> {
    match state.service.get_award_intervals().await {
        Ok(result) => Ok(Json(result)),
        Err(e) => {
            warn!("Failed to compute award intervals: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
