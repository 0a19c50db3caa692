//! # PCV API stub
//!
//! An in-memory stand-in for the record service, for local development and
//! integration tests. Serves the same HTTP contract the real service
//! would:
//! - patient listing, patient fetch, diagnosis reference set
//! - entry submission with content validation and service-assigned ids
//! - OpenAPI document at `/api-docs/openapi.json`
//!
//! State lives in process memory and resets on restart.

pub mod seed;
pub mod validate;

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Path as AxumPath, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use pcv_types::{Diagnosis, Entry, Patient, PatientId, PatientSummary};
use serde::Serialize;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;

/// Shared state behind every request handler.
#[derive(Clone)]
pub struct AppState {
    patients: Arc<RwLock<HashMap<PatientId, Patient>>>,
    diagnoses: Arc<Vec<Diagnosis>>,
}

impl AppState {
    pub fn new(patients: Vec<Patient>, diagnoses: Vec<Diagnosis>) -> Self {
        let patients = patients
            .into_iter()
            .map(|patient| (patient.id.clone(), patient))
            .collect();
        Self {
            patients: Arc::new(RwLock::new(patients)),
            diagnoses: Arc::new(diagnoses),
        }
    }

    /// State preloaded with the fictional development data set.
    pub fn seeded() -> Self {
        Self::new(seed::patients(), seed::diagnoses())
    }
}

/// Wire shape of every failure response.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

type Failure = (StatusCode, Json<ErrorBody>);

fn not_found() -> Failure {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody {
            error: "patient not found".into(),
        }),
    )
}

#[derive(OpenApi)]
#[openapi(paths(ping, list_patients, get_patient, get_diagnoses, add_entry))]
struct ApiDoc;

/// Builds the stub's router over `state`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/ping", get(ping))
        .route("/api/patients", get(list_patients))
        .route("/api/patients/:id", get(get_patient))
        .route("/api/patients/:id/entries", post(add_entry))
        .route("/api/diagnoses", get(get_diagnoses))
        .route("/api-docs/openapi.json", get(openapi_doc))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Serves the stub on an already-bound listener until the task is dropped.
pub async fn serve(listener: tokio::net::TcpListener, state: AppState) -> std::io::Result<()> {
    axum::serve(listener, router(state)).await
}

#[utoipa::path(
    get,
    path = "/api/ping",
    responses(
        (status = 200, description = "Liveness probe, answers 'pong'")
    )
)]
#[axum::debug_handler]
async fn ping() -> &'static str {
    "pong"
}

#[utoipa::path(
    get,
    path = "/api/patients",
    responses(
        (status = 200, description = "Non-sensitive listing of all patients")
    )
)]
/// Lists all patients without ssn or entries.
#[axum::debug_handler]
async fn list_patients(State(state): State<AppState>) -> Json<Vec<PatientSummary>> {
    let patients = state.patients.read().await;
    let mut summaries: Vec<PatientSummary> = patients.values().map(PatientSummary::from).collect();
    summaries.sort_by(|a, b| a.name.cmp(&b.name));
    Json(summaries)
}

#[utoipa::path(
    get,
    path = "/api/patients/{id}",
    params(("id" = String, Path, description = "Patient identifier")),
    responses(
        (status = 200, description = "The full patient record, entries included"),
        (status = 404, description = "No patient with that id")
    )
)]
/// One full patient record.
#[axum::debug_handler]
async fn get_patient(
    State(state): State<AppState>,
    AxumPath(id): AxumPath<String>,
) -> Result<Json<Patient>, Failure> {
    // A non-canonical id cannot name any stored patient.
    let id = PatientId::parse(&id).map_err(|_| not_found())?;
    let patients = state.patients.read().await;
    patients.get(&id).cloned().map(Json).ok_or_else(not_found)
}

#[utoipa::path(
    get,
    path = "/api/diagnoses",
    responses(
        (status = 200, description = "The diagnosis reference set")
    )
)]
#[axum::debug_handler]
async fn get_diagnoses(State(state): State<AppState>) -> Json<Vec<Diagnosis>> {
    Json(state.diagnoses.as_ref().clone())
}

#[utoipa::path(
    post,
    path = "/api/patients/{id}/entries",
    params(("id" = String, Path, description = "Patient identifier")),
    responses(
        (status = 201, description = "The created entry, identifier attached"),
        (status = 400, description = "Submission rejected, message in the error body"),
        (status = 404, description = "No patient with that id")
    )
)]
/// Validates a submitted entry, assigns it an identifier and appends it to
/// the patient's record.
#[axum::debug_handler]
async fn add_entry(
    State(state): State<AppState>,
    AxumPath(id): AxumPath<String>,
    Json(body): Json<serde_json::Value>,
) -> Result<(StatusCode, Json<Entry>), Failure> {
    let id = PatientId::parse(&id).map_err(|_| not_found())?;

    let mut patients = state.patients.write().await;
    let patient = patients.get_mut(&id).ok_or_else(not_found)?;

    let new_entry = validate::parse_new_entry(&body).map_err(|message| {
        tracing::warn!("rejected entry submission for {}: {}", id, message);
        (StatusCode::BAD_REQUEST, Json(ErrorBody { error: message }))
    })?;

    let entry = Entry::from_new(new_entry, uuid::Uuid::new_v4().to_string());
    patient.entries.push(entry.clone());
    tracing::info!("entry {} appended to patient {}", entry.id(), id);

    Ok((StatusCode::CREATED, Json(entry)))
}

#[axum::debug_handler]
async fn openapi_doc() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
