//! Standalone record service stub binary.
//!
//! ## Purpose
//! Runs the in-memory record service on its own, preloaded with the
//! fictional development data set.
//!
//! ## Intended use
//! Point the viewer or the CLI at it during development
//! (`PCV_API_URL=http://localhost:3001/api`). State resets on restart.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_stub::AppState;

/// # Environment Variables
/// - `PCV_STUB_ADDR`: listen address (default: "0.0.0.0:3001")
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("api_stub=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = std::env::var("PCV_STUB_ADDR").unwrap_or_else(|_| "0.0.0.0:3001".into());

    tracing::info!("-- Starting PCV record service stub on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    api_stub::serve(listener, AppState::seeded()).await?;

    Ok(())
}
