//! Battle client binary.
//!
//! Main entry point for the party-vs-boss battle.
//!
//! # Architecture
//!
//! This binary is the composition root that assembles:
//! 1. Battle session (rules and state) from `FrontendConfig`
//! 2. Frontend (UI) - CLI, GUI, etc.
//!
//! Both are built independently and injected into the Client container.
//!
//! # Features
//!
//! - `frontend-cli`: Terminal-based UI (default)
//!
//! # Examples
//!
//! ```bash
//! # Replay a fixed battle
//! BATTLE_SEED=42 cargo run -p battle-client
//! ```

use anyhow::Result;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    #[cfg(feature = "frontend-cli")]
    {
        run_cli().await?;
    }

    #[cfg(not(feature = "frontend-cli"))]
    {
        compile_error!("At least one frontend feature must be enabled (frontend-cli, ...)");
    }

    Ok(())
}

/// Run the CLI frontend.
#[cfg(feature = "frontend-cli")]
async fn run_cli() -> Result<()> {
    use battle_client::Client;
    use client_frontend_cli::{CliConfig, CliFrontend, FrontendConfig, logging};

    // 1. Load configuration from environment
    let frontend_config = FrontendConfig::from_env()?;
    let cli_config = CliConfig::from_env();

    // 2. Setup logging
    let log_path = logging::setup_logging(&frontend_config.session_id)?;

    tracing::info!("Starting battle client");
    tracing::info!("Session ID: {:?}", frontend_config.session_id);
    tracing::info!("Log file: {}", log_path.display());

    // 3. Build the battle session (independent layer)
    let session = frontend_config.session();

    // 4. Build Frontend (independent layer)
    tracing::debug!("Building CLI frontend...");
    let frontend = CliFrontend::new(frontend_config, cli_config);

    // 5. Build and run
    let client = Client::builder()
        .session(session)
        .frontend(frontend)
        .build()?;

    tracing::info!("Client assembled, starting...");
    client.run().await?;

    tracing::info!("Client shutdown complete");
    Ok(())
}
