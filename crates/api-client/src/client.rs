//! The record service client.

use pcv_types::{Diagnosis, Entry, NewEntry, Patient, PatientId, PatientSummary};
use reqwest::{Response, StatusCode};
use serde::Deserialize;

use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult};

/// Error payload shape used by the record service.
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Async HTTP client for the record service.
///
/// Every request carries the configured timeout, so no call can hang a
/// session indefinitely.
#[derive(Clone, Debug)]
pub struct RecordsClient {
    http: reqwest::Client,
    base_url: String,
}

impl RecordsClient {
    pub fn new(config: &ClientConfig) -> ApiResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| ApiError::Config(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url().to_owned(),
        })
    }

    /// Liveness probe; the service answers `pong`.
    pub async fn ping(&self) -> ApiResult<String> {
        let url = format!("{}/ping", self.base_url);
        let response = self.send_get(&url).await?;
        response.text().await.map_err(ApiError::Decode)
    }

    /// The non-sensitive patient listing.
    pub async fn list_patients(&self) -> ApiResult<Vec<PatientSummary>> {
        let url = format!("{}/patients", self.base_url);
        let response = self.send_get(&url).await?;
        response.json().await.map_err(ApiError::Decode)
    }

    /// One full patient record, entries included.
    pub async fn get_patient(&self, id: &PatientId) -> ApiResult<Patient> {
        let url = format!("{}/patients/{}", self.base_url, id);
        let response = self.send_get(&url).await?;
        response.json().await.map_err(ApiError::Decode)
    }

    /// The diagnosis reference set.
    pub async fn get_diagnoses(&self) -> ApiResult<Vec<Diagnosis>> {
        let url = format!("{}/diagnoses", self.base_url);
        let response = self.send_get(&url).await?;
        response.json().await.map_err(ApiError::Decode)
    }

    /// Submits a new entry for `id`. On success the service responds with
    /// the created entry, identifier attached.
    pub async fn add_entry(&self, id: &PatientId, new_entry: &NewEntry) -> ApiResult<Entry> {
        let url = format!("{}/patients/{}/entries", self.base_url, id);
        let response = self
            .http
            .post(&url)
            .json(new_entry)
            .send()
            .await
            .map_err(ApiError::Transport)?;
        let response = check_status(response).await?;
        response.json().await.map_err(ApiError::Decode)
    }

    async fn send_get(&self, url: &str) -> ApiResult<Response> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(ApiError::Transport)?;
        check_status(response).await
    }
}

/// Maps the service's failure statuses onto the error taxonomy. `404` is a
/// missing patient, `400` a rejected submission whose message is kept
/// verbatim for display, anything else non-successful is unexpected.
async fn check_status(response: Response) -> ApiResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    match status {
        StatusCode::NOT_FOUND => Err(ApiError::NotFound),
        StatusCode::BAD_REQUEST => Err(ApiError::Validation(rejection_message(response).await)),
        status => {
            tracing::warn!("unexpected status {} from the record service", status);
            Err(ApiError::UnexpectedStatus { status })
        }
    }
}

/// Pulls the message out of a `{ "error": "..." }` body, falling back to
/// the raw text and then to a fixed line when the body is useless.
async fn rejection_message(response: Response) -> String {
    let text = response.text().await.unwrap_or_default();
    match serde_json::from_str::<ErrorBody>(&text) {
        Ok(body) => body.error,
        Err(_) if !text.trim().is_empty() => text,
        Err(_) => "submission rejected by the record service".to_owned(),
    }
}
