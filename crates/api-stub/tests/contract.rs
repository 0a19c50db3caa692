//! HTTP contract tests against a live stub on an ephemeral port.

use api_stub::{seed, AppState};
use serde_json::{json, Value};

async fn spawn_stub() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind an ephemeral port");
    let addr = listener.local_addr().expect("listener has an address");
    tokio::spawn(api_stub::serve(listener, AppState::seeded()));
    format!("http://{addr}")
}

#[tokio::test]
async fn ping_answers_pong() {
    let base = spawn_stub().await;
    let body = reqwest::get(format!("{base}/api/ping"))
        .await
        .expect("ping request")
        .text()
        .await
        .expect("ping body");
    assert_eq!(body, "pong");
}

#[tokio::test]
async fn listing_is_non_sensitive() {
    let base = spawn_stub().await;
    let listing: Value = reqwest::get(format!("{base}/api/patients"))
        .await
        .expect("list request")
        .json()
        .await
        .expect("list body");

    let patients = listing.as_array().expect("listing is an array");
    assert_eq!(patients.len(), 5);
    for patient in patients {
        let object = patient.as_object().expect("patient object");
        assert!(object.contains_key("name"));
        assert!(object.contains_key("dateOfBirth"));
        assert!(!object.contains_key("ssn"));
        assert!(!object.contains_key("entries"));
    }
    assert!(patients.iter().any(|p| p["name"] == "John McClane"));
}

#[tokio::test]
async fn full_record_includes_entries_and_ssn() {
    let base = spawn_stub().await;
    let patient: Value = reqwest::get(format!("{base}/api/patients/d2773598-f723-11e9-8f0b-362b9e155667"))
        .await
        .expect("fetch request")
        .json()
        .await
        .expect("fetch body");

    assert_eq!(patient["name"], "Dana Scully");
    assert_eq!(patient["ssn"], "050174-432N");
    let entries = patient["entries"].as_array().expect("entries array");
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["type"], "Hospital");
}

#[tokio::test]
async fn the_seeded_empty_patient_has_no_entries() {
    let base = spawn_stub().await;
    let patient: Value = reqwest::get(format!("{base}/api/patients/{}", seed::EMPTY_PATIENT_ID))
        .await
        .expect("fetch request")
        .json()
        .await
        .expect("fetch body");

    assert_eq!(patient["name"], "John McClane");
    assert_eq!(patient["entries"], json!([]));
}

#[tokio::test]
async fn unknown_and_malformed_ids_are_not_found() {
    let base = spawn_stub().await;

    let response = reqwest::get(format!(
        "{base}/api/patients/00000000-0000-0000-0000-000000000000"
    ))
    .await
    .expect("fetch request");
    assert_eq!(response.status(), 404);
    let body: Value = response.json().await.expect("error body");
    assert_eq!(body["error"], "patient not found");

    let response = reqwest::get(format!("{base}/api/patients/not-a-real-id"))
        .await
        .expect("fetch request");
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn out_of_range_rating_is_rejected_with_the_message() {
    let base = spawn_stub().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!(
            "{base}/api/patients/{}/entries",
            seed::EMPTY_PATIENT_ID
        ))
        .json(&json!({
            "type": "HealthCheck",
            "date": "2024-01-01",
            "description": "Annual checkup",
            "specialist": "Dr. X",
            "healthCheckRating": 4
        }))
        .send()
        .await
        .expect("submit request");

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.expect("error body");
    assert_eq!(body["error"], "Value of healthCheckRating incorrect: 4");
}

#[tokio::test]
async fn blank_description_is_rejected_with_the_field_named() {
    let base = spawn_stub().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!(
            "{base}/api/patients/{}/entries",
            seed::EMPTY_PATIENT_ID
        ))
        .json(&json!({
            "type": "HealthCheck",
            "date": "2024-01-01",
            "description": "",
            "specialist": "Dr. X",
            "healthCheckRating": 1
        }))
        .send()
        .await
        .expect("submit request");

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.expect("error body");
    assert_eq!(body["error"], "Incorrect or missing description");
}

#[tokio::test]
async fn submitting_to_an_unknown_patient_is_not_found() {
    let base = spawn_stub().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!(
            "{base}/api/patients/00000000-0000-0000-0000-000000000000/entries"
        ))
        .json(&json!({
            "type": "HealthCheck",
            "date": "2024-01-01",
            "description": "Annual checkup",
            "specialist": "Dr. X",
            "healthCheckRating": 1
        }))
        .send()
        .await
        .expect("submit request");

    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn accepted_entry_gets_an_id_and_shows_up_on_refetch() {
    let base = spawn_stub().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!(
            "{base}/api/patients/{}/entries",
            seed::EMPTY_PATIENT_ID
        ))
        .json(&json!({
            "type": "Hospital",
            "date": "2024-02-10",
            "description": "Observation after a fall",
            "specialist": "MD House",
            "diagnosisCodes": ["S62.5"],
            "discharge": { "date": "2024-02-12", "criteria": "Steady on feet" }
        }))
        .send()
        .await
        .expect("submit request");

    assert_eq!(response.status(), 201);
    let created: Value = response.json().await.expect("created entry");
    let assigned_id = created["id"].as_str().expect("id assigned");
    assert!(!assigned_id.is_empty());
    assert_eq!(created["type"], "Hospital");

    let patient: Value = client
        .get(format!("{base}/api/patients/{}", seed::EMPTY_PATIENT_ID))
        .send()
        .await
        .expect("refetch request")
        .json()
        .await
        .expect("refetch body");

    let entries = patient["entries"].as_array().expect("entries array");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["id"], assigned_id);
    assert_eq!(entries[0]["discharge"]["criteria"], "Steady on feet");
}

#[tokio::test]
async fn openapi_document_names_every_operation() {
    let base = spawn_stub().await;
    let doc: Value = reqwest::get(format!("{base}/api-docs/openapi.json"))
        .await
        .expect("openapi request")
        .json()
        .await
        .expect("openapi body");

    let paths = doc["paths"].as_object().expect("paths object");
    for path in [
        "/api/ping",
        "/api/patients",
        "/api/patients/{id}",
        "/api/patients/{id}/entries",
        "/api/diagnoses",
    ] {
        assert!(paths.contains_key(path), "missing {path} in document");
    }
}
