use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_client::{ClientConfig, RecordsClient};
use pcv_core::{DiagnosisRegistry, PatientPage};
use pcv_run::session::run_session;
use pcv_types::PatientId;

/// Main entry point for the PCV patient chart viewer
///
/// Fetches the patient and the diagnosis reference set concurrently, then
/// runs the interactive session loop on stdin/stdout. If the reference set
/// cannot be loaded the page still renders, with diagnosis codes falling
/// back to their unknown-code label; a patient that cannot be loaded ends
/// the session.
///
/// # Environment Variables
/// - `PCV_API_URL`: record service base URL (default: "http://localhost:3001/api")
/// - `PCV_HTTP_TIMEOUT_SECS`: per-request timeout (default: 10)
///
/// # Returns
/// * `Ok(())` - If the session ends normally
/// * `Err(anyhow::Error)` - If startup or the patient fetch fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive("pcv=info".parse()?))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let patient_id = match std::env::args().nth(1) {
        Some(raw) => PatientId::parse(&raw)?,
        None => anyhow::bail!("usage: pcv-run <patient-id>"),
    };

    let config = ClientConfig::from_env()?;
    tracing::info!("++ Record service at {}", config.base_url());
    let client = RecordsClient::new(&config)?;

    let (patient, diagnoses) = tokio::join!(
        client.get_patient(&patient_id),
        client.get_diagnoses()
    );

    let patient = patient.map_err(|err| {
        tracing::error!("patient fetch failed: {err}");
        anyhow::anyhow!("{}", err.user_message())
    })?;
    let registry = match diagnoses {
        Ok(diagnoses) => DiagnosisRegistry::new(diagnoses),
        Err(err) => {
            tracing::warn!("diagnosis reference set unavailable: {err}");
            DiagnosisRegistry::empty()
        }
    };

    let mut page = PatientPage::new(patient, registry);
    let stdin = std::io::stdin().lock();
    let mut stdout = std::io::stdout().lock();
    run_session(&client, &mut page, stdin, &mut stdout).await?;

    Ok(())
}
