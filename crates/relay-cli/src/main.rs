//! Relay CLI entry point.

use clap::Parser;
use relay_cli::{log_directive, run, Cli};
use relay_core::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load_or_default(cli.config.as_deref())?;
    config.validate()?;

    // Initialize logging; stdout is reserved for delivery output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_directive(cli.verbose, &config).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Run the command
    run(cli, config).await
}
