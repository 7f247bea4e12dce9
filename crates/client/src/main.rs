//! tilecrawl client binary.
//!
//! Composition root: loads `.env`, installs logging, builds the runtime
//! (which generates the dungeon), and hands control to the selected frontend.
//!
//! ```bash
//! # Replay a specific dungeon at a slower pace
//! TILECRAWL_SEED=42 TILECRAWL_TICK_MS=150 cargo run -p tilecrawl-client
//! ```

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    #[cfg(feature = "frontend-cli")]
    {
        run_cli().await?;
    }

    #[cfg(not(feature = "frontend-cli"))]
    {
        compile_error!("At least one frontend feature must be enabled (frontend-cli)");
    }

    Ok(())
}

/// Run the CLI frontend.
#[cfg(feature = "frontend-cli")]
async fn run_cli() -> Result<()> {
    use anyhow::Context;
    use client_frontend_cli::{CliConfig, CliFrontend, FrontendConfig, logging};
    use runtime::{Runtime, RuntimeConfig};
    use tilecrawl_client::Client;

    // 1. Load configuration from environment
    let runtime_config = RuntimeConfig::from_env();
    let frontend_config = FrontendConfig::from_env();
    let cli_config = CliConfig::from_env();

    // 2. Setup logging; the guard flushes the log file on drop
    let _log_guard = logging::setup_logging(cli_config.session_id.as_deref())?;

    tracing::info!("Starting tilecrawl client");
    tracing::info!(
        width = runtime_config.game_config.dimensions.width,
        height = runtime_config.game_config.dimensions.height,
        tick_ms = runtime_config.tick_interval.as_millis() as u64,
        "runtime configuration"
    );

    // 3. Build Runtime; this generates the dungeon
    let max_health = runtime_config.game_config.rules.max_health;
    let runtime = Runtime::builder()
        .config(runtime_config)
        .build()
        .await
        .context("failed to start the game runtime")?;

    tracing::info!(seed = runtime.seed(), "Runtime built successfully");

    // 4. Build Frontend
    let frontend = CliFrontend::new(frontend_config, cli_config).with_max_health(max_health);

    // 5. Build Client and run until the player quits
    let client = Client::builder()
        .runtime(runtime)
        .frontend(frontend)
        .build()?;

    client.run().await?;

    tracing::info!("Client shutdown complete");
    Ok(())
}
