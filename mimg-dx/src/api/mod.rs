//! HTTP API handlers for mimg-dx
//!
//! Every `/api` response uses the `{ success, data?, message? }` envelope.

pub mod diagnosis;
pub mod health;
pub mod patients;
pub mod segmentation;

pub use diagnosis::diagnosis_routes;
pub use health::health_routes;
pub use patients::patient_routes;
pub use segmentation::segmentation_routes;

use axum::Json;
use serde::Serialize;

/// Response envelope
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T: Serialize> Envelope<T> {
    pub fn data(data: T) -> Json<Self> {
        Json(Self {
            success: true,
            data: Some(data),
            message: None,
        })
    }

    pub fn data_with_message(data: T, message: impl Into<String>) -> Json<Self> {
        Json(Self {
            success: true,
            data: Some(data),
            message: Some(message.into()),
        })
    }
}

impl Envelope<()> {
    pub fn message(message: impl Into<String>) -> Json<Self> {
        Json(Self {
            success: true,
            data: None,
            message: Some(message.into()),
        })
    }
}
