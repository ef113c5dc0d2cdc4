//! Linkmap CLI binary.

use anyhow::Result;
use linkmap::cli::Cli;
use tracing_subscriber::EnvFilter;

/// Main entry point for the linkmap CLI.
///
/// The pipeline is a synchronous single pass: load the export, build the
/// graph, write the artifact, exit.
fn main() -> Result<()> {
    // Initialize tracing subscriber
    // Can be controlled via RUST_LOG environment variable
    // Example: RUST_LOG=linkmap=debug,linkmap_table=trace cargo run
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("linkmap=info,linkmap_table=info")),
        )
        .with_target(false)
        .init();

    tracing::debug!("Starting linkmap CLI");

    let cli = Cli::parse_args();
    cli.execute()?;

    tracing::debug!("Linkmap CLI completed successfully");
    Ok(())
}
