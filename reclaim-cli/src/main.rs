//! Reclaim Command-Line Interface
//!
//! Entry point for the reclaim-cli binary. Initializes logging, parses
//! command-line arguments, and delegates to the command handlers.

use std::env;

fn main() -> anyhow::Result<()> {
    let filter = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .init();

    reclaim_cli::run_cli()
}
