//! Relay command-line interface.

pub mod commands;

use clap::{Parser, Subcommand};
use relay_channels::ChannelFactory;
use relay_core::{Clock, Config, ConsoleSink, OutputSink, SystemClock};
use std::sync::Arc;

/// Relay - simulated messaging dispatcher
#[derive(Parser)]
#[command(name = "relay")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase logging verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to config file
    #[arg(short, long, env = "RELAY_CONFIG")]
    pub config: Option<std::path::PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Send the built-in demo messages (default)
    Demo,

    /// Send a single message
    Send(commands::send::SendArgs),

    /// List channel kinds
    Channels,

    /// Show version information
    Version,
}

/// Capabilities shared by every command.
#[derive(Clone)]
pub struct Context {
    pub config: Config,
    pub clock: Arc<dyn Clock>,
    pub sink: Arc<dyn OutputSink>,
}

impl Context {
    /// Context writing to the console and using the system clock.
    pub fn new(config: Config) -> Self {
        Self::with_capabilities(config, Arc::new(SystemClock), Arc::new(ConsoleSink))
    }

    pub fn with_capabilities(
        config: Config,
        clock: Arc<dyn Clock>,
        sink: Arc<dyn OutputSink>,
    ) -> Self {
        Self {
            config,
            clock,
            sink,
        }
    }

    /// Channel factory configured from this context.
    pub fn factory(&self) -> ChannelFactory {
        ChannelFactory::from_config(&self.config.channel, self.clock.clone(), self.sink.clone())
    }
}

/// Tracing filter directive for the given verbosity and config.
pub fn log_directive(verbose: u8, config: &Config) -> String {
    let level = match verbose {
        0 => config.logging.level.as_str(),
        1 => "debug",
        _ => "trace",
    };
    format!("relay={}", level)
}

/// Run the CLI with the given arguments.
pub async fn run(cli: Cli, config: Config) -> anyhow::Result<()> {
    let ctx = Context::new(config);
    run_with(cli.command.unwrap_or(Commands::Demo), &ctx).await
}

/// Run a command against an explicit context.
pub async fn run_with(command: Commands, ctx: &Context) -> anyhow::Result<()> {
    match command {
        Commands::Demo => commands::demo::run(ctx).await,
        Commands::Send(args) => commands::send::run(args, ctx).await,
        Commands::Channels => commands::channels::run(ctx),
        Commands::Version => {
            ctx.sink.log(&format!("relay {}", env!("CARGO_PKG_VERSION")));
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use relay_core::config::LogLevel;

    #[test]
    fn test_log_directive() {
        let mut config = Config::default();
        assert_eq!(log_directive(0, &config), "relay=info");
        assert_eq!(log_directive(1, &config), "relay=debug");
        assert_eq!(log_directive(5, &config), "relay=trace");

        config.logging.level = LogLevel::Warn;
        assert_eq!(log_directive(0, &config), "relay=warn");
    }

    #[test]
    fn test_parse_default_command() {
        let cli = Cli::try_parse_from(["relay"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 0);

        let cli = Cli::try_parse_from(["relay", "-vv", "channels"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Channels)));
        assert_eq!(cli.verbose, 2);
    }
}
