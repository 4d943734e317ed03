//! Diagnosis endpoints
//!
//! POST /api/diagnosis/oral runs the two-class screening flow (with
//! placeholder fallback); POST /api/diagnosis/oral/deep runs the
//! three-class detection flow. The remaining routes read stored history
//! and need persistence.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    routing::{get, post},
    Json, Router,
};
use mimg_common::models::{CreateDiagnosisRequest, DiagnosisResult};
use std::sync::Arc;

use crate::api::Envelope;
use crate::db::DiagnosisRepository;
use crate::error::{ApiError, ApiResult};
use crate::AppState;

/// Validated request fields: (patient_id, image_url)
fn required_fields(request: CreateDiagnosisRequest) -> ApiResult<(String, String)> {
    let patient_id = request.patient_id.trim().to_string();
    if patient_id.is_empty() {
        return Err(ApiError::BadRequest("patientId is required".to_string()));
    }
    let image_url = request
        .image_url
        .map(|url| url.trim().to_string())
        .filter(|url| !url.is_empty())
        .ok_or_else(|| ApiError::BadRequest("imageUrl is required".to_string()))?;
    Ok((patient_id, image_url))
}

fn repository(state: &AppState) -> ApiResult<&Arc<dyn DiagnosisRepository>> {
    state.diagnoses.as_ref().ok_or_else(|| {
        ApiError::BadRequest("Diagnosis history unavailable: persistence disabled".to_string())
    })
}

/// POST /api/diagnosis/oral
pub async fn analyze_oral(
    State(state): State<AppState>,
    payload: Result<Json<CreateDiagnosisRequest>, JsonRejection>,
) -> ApiResult<Json<Envelope<DiagnosisResult>>> {
    let Json(request) = payload?;
    let (patient_id, image_url) = required_fields(request)?;

    let diagnosis = state
        .track(state.diagnosis.analyze_oral(&patient_id, &image_url).await)
        .await?;

    if diagnosis.results.fallback {
        state
            .record_error(format!(
                "Screening inference unavailable for patient {}; placeholder result returned",
                patient_id
            ))
            .await;
    }

    Ok(Envelope::data_with_message(
        diagnosis,
        "Oral analysis completed successfully",
    ))
}

/// POST /api/diagnosis/oral/deep
pub async fn analyze_oral_deep(
    State(state): State<AppState>,
    payload: Result<Json<CreateDiagnosisRequest>, JsonRejection>,
) -> ApiResult<Json<Envelope<DiagnosisResult>>> {
    let Json(request) = payload?;
    let (patient_id, image_url) = required_fields(request)?;

    let diagnosis = state
        .track(state.diagnosis.analyze_oral_deep(&patient_id, &image_url).await)
        .await?;

    Ok(Envelope::data_with_message(
        diagnosis,
        "Oral deep analysis completed successfully",
    ))
}

/// GET /api/diagnosis/:id
pub async fn get_diagnosis(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Envelope<DiagnosisResult>>> {
    let diagnosis = repository(&state)?.get(&id).await?;
    Ok(Envelope::data(diagnosis))
}

/// GET /api/diagnosis/patient/:patient_id
pub async fn list_patient_diagnoses(
    State(state): State<AppState>,
    Path(patient_id): Path<String>,
) -> ApiResult<Json<Envelope<Vec<DiagnosisResult>>>> {
    let diagnoses = repository(&state)?.list_for_patient(&patient_id).await?;
    tracing::debug!(patient_id = %patient_id, count = diagnoses.len(), "Listed diagnoses");
    Ok(Envelope::data(diagnoses))
}

/// DELETE /api/diagnosis/:id
pub async fn delete_diagnosis(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Envelope<()>>> {
    repository(&state)?.delete(&id).await?;
    tracing::info!(diagnosis_id = %id, "Diagnosis deleted");
    Ok(Envelope::message("Diagnosis deleted successfully"))
}

/// Build diagnosis routes
pub fn diagnosis_routes() -> Router<AppState> {
    Router::new()
        .route("/api/diagnosis/oral", post(analyze_oral))
        .route("/api/diagnosis/oral/deep", post(analyze_oral_deep))
        .route(
            "/api/diagnosis/patient/:patient_id",
            get(list_patient_diagnoses),
        )
        .route(
            "/api/diagnosis/:id",
            get(get_diagnosis).delete(delete_diagnosis),
        )
}
