//! RecidiVision Stub API Server
//!
//! Run with: cargo run --bin recidivision-stub
//!
//! # Configuration
//!
//! Read from the standard config locations (`[stub]` and `[logging]`
//! sections). Environment variables:
//! - `RECIDIVISION_STUB_HOST`: Host to bind to (default: 127.0.0.1)
//! - `RECIDIVISION_STUB_PORT`: Port to listen on (default: 5000)
//! - `RECIDIVISION_LOG_LEVEL`, `RECIDIVISION_LOG_FORMAT`
//! - `RUST_LOG`: Full filter override

use recidivision::config::Config;
use recidivision::logging;
use recidivision::stub::{serve, StubState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load_default()?;

    logging::init(&config.logging, "tower_http=debug");

    tracing::info!(
        "Starting RecidiVision stub API v{}",
        env!("CARGO_PKG_VERSION")
    );
    tracing::info!("Seeded accounts: {}", config.stub.users.len());

    let state = StubState::from_config(&config.stub);
    serve(state, &config.stub).await?;

    Ok(())
}
