//! Arena binary.
//!
//! Main entry point: loads configuration, sets up logging, runs one battle
//! on stdout and waits for Enter before exiting.
//!
//! ```bash
//! # Run without the pause, with debug-level round logs
//! ARENA_PAUSE_ON_EXIT=false RUST_LOG=arena_core=debug cargo run -p arena-client
//! ```

use std::io;

use anyhow::{Context, Result};
use arena_client::{ClientConfig, logging, run_battle};

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = ClientConfig::from_env()?;
    // An unusable log directory only disables logging
    let _guard = logging::setup_logging_or_warn(&config.resolved_log_dir(), &mut io::stderr());

    tracing::info!("Starting arena");
    tracing::debug!(?config, "Configuration loaded");

    let mut stdout = io::stdout().lock();
    let winner = run_battle(&mut stdout).context("Failed to write battle transcript")?;
    drop(stdout);

    tracing::info!(winner = %winner, "Battle complete");

    if config.pause_on_exit {
        let mut line = String::new();
        io::stdin()
            .read_line(&mut line)
            .context("Failed to read from stdin")?;
    }

    tracing::info!("Arena shutdown complete");
    Ok(())
}
