//! Patient endpoints

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use mimg_common::models::{CreatePatientRequest, Patient, UpdatePatientRequest};

use crate::api::Envelope;
use crate::error::ApiResult;
use crate::AppState;

/// GET /api/patients
pub async fn list_patients(State(state): State<AppState>) -> ApiResult<Json<Envelope<Vec<Patient>>>> {
    let patients = state.patients.list().await?;
    Ok(Envelope::data(patients))
}

/// POST /api/patients
pub async fn create_patient(
    State(state): State<AppState>,
    payload: Result<Json<CreatePatientRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Envelope<Patient>>)> {
    let Json(request) = payload?;
    let patient = state.patients.create(request).await?;
    tracing::info!(patient_id = %patient.id, "Patient created");
    Ok((StatusCode::CREATED, Envelope::data(patient)))
}

/// GET /api/patients/:id
pub async fn get_patient(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Envelope<Patient>>> {
    Ok(Envelope::data(state.patients.get(&id).await?))
}

/// PUT /api/patients/:id
pub async fn update_patient(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdatePatientRequest>, JsonRejection>,
) -> ApiResult<Json<Envelope<Patient>>> {
    let Json(update) = payload?;
    let patient = state.patients.update(&id, update).await?;
    tracing::info!(patient_id = %patient.id, "Patient updated");
    Ok(Envelope::data(patient))
}

/// DELETE /api/patients/:id
pub async fn delete_patient(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Envelope<()>>> {
    state.patients.delete(&id).await?;
    tracing::info!(patient_id = %id, "Patient deleted");
    Ok(Envelope::message("Patient deleted successfully"))
}

/// Build patient routes
pub fn patient_routes() -> Router<AppState> {
    Router::new()
        .route("/api/patients", get(list_patients).post(create_patient))
        .route(
            "/api/patients/:id",
            get(get_patient).put(update_patient).delete(delete_patient),
        )
}
