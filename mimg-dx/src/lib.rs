//! mimg-dx library interface
//!
//! Exposes the router and its building blocks for the binary and for
//! integration testing.

pub mod api;
pub mod db;
pub mod error;
pub mod invoker;
pub mod services;

pub use crate::error::{ApiError, ApiResult};

use axum::extract::DefaultBodyLimit;
use axum::http::{header, HeaderValue, Method};
use axum::Router;
use chrono::{DateTime, Utc};
use mimg_common::config::ServiceConfig;
use mimg_common::report::FindingAnnotation;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::db::{DiagnosisRepository, PatientRepository};
use crate::invoker::Invoker;
use crate::services::{DiagnosisService, SegmentationService};

/// Largest accepted request body
pub const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Resolved service configuration
    pub config: Arc<ServiceConfig>,
    pub patients: Arc<dyn PatientRepository>,
    /// Absent when persistence is disabled
    pub diagnoses: Option<Arc<dyn DiagnosisRepository>>,
    pub diagnosis: Arc<DiagnosisService>,
    pub segmentation: Arc<SegmentationService>,
    /// Service startup timestamp for uptime tracking
    pub startup_time: DateTime<Utc>,
    /// Last error for diagnostic purposes
    pub last_error: Arc<RwLock<Option<String>>>,
}

impl AppState {
    pub fn new(
        config: ServiceConfig,
        invoker: Arc<dyn Invoker>,
        patients: Arc<dyn PatientRepository>,
        diagnoses: Option<Arc<dyn DiagnosisRepository>>,
    ) -> Self {
        let diagnosis = DiagnosisService::new(
            Arc::clone(&invoker),
            diagnoses.clone(),
            config.uploads_dir.clone(),
            FindingAnnotation::from_flag(config.show_confidence),
        );
        let segmentation = SegmentationService::new(
            invoker,
            config.python.clone(),
            config.scripts.clone(),
            config.uploads_dir.clone(),
        );

        Self {
            config: Arc::new(config),
            patients,
            diagnoses,
            diagnosis: Arc::new(diagnosis),
            segmentation: Arc::new(segmentation),
            startup_time: Utc::now(),
            last_error: Arc::new(RwLock::new(None)),
        }
    }

    /// Remember `message` for the health endpoint
    pub async fn record_error(&self, message: impl Into<String>) {
        *self.last_error.write().await = Some(message.into());
    }

    /// Record server-side failures of `result` before handing it back
    pub async fn track<T>(&self, result: ApiResult<T>) -> ApiResult<T> {
        if let Err(e) = &result {
            if e.status().is_server_error() {
                self.record_error(e.message()).await;
            }
        }
        result
    }
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true)
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    let uploads = ServeDir::new(&state.config.uploads_dir);
    let cors = cors_layer(&state.config.server.allowed_origins);

    Router::new()
        .merge(api::health_routes())
        .merge(api::diagnosis_routes())
        .merge(api::patient_routes())
        .merge(api::segmentation_routes())
        .nest_service("/uploads", uploads)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
