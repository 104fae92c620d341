// hofcast entry point.
//
// Startup sequence:
// 1. Initialize tracing (stderr, so stdout carries only command output)
// 2. Parse arguments
// 3. Load config (copying defaults on first run)
// 4. Run the command against the loaded dataset

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use hofcast_app::commands::Command;
use hofcast_app::config::{self, Sport};
use hofcast_app::output::OutputFormat;
use hofcast_app::{execute, resolve_current_year, Invocation};
use tracing::{error, info};

#[derive(Debug, Parser)]
#[command(name = "hofcast", version)]
#[command(about = "Hall of Fame probability engine for baseball and hockey careers")]
struct Cli {
    /// Sport to evaluate (defaults to config)
    #[arg(long, value_enum, global = true, env = "HOFCAST_SPORT")]
    sport: Option<Sport>,

    /// Directory holding config/ and defaults/; data paths resolve against it
    #[arg(long, global = true, default_value = ".", env = "HOFCAST_HOME")]
    config_dir: PathBuf,

    /// Output format
    #[arg(long, value_enum, global = true, default_value = "text")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

fn main() -> anyhow::Result<()> {
    init_tracing()?;
    let cli = Cli::parse();

    let config = config::load_config(&cli.config_dir).context("failed to load configuration")?;
    let invocation = Invocation {
        sport: cli.sport.unwrap_or(config.engine.sport),
        format: cli.format,
        current_year: resolve_current_year(&config),
    };
    info!(
        sport = %invocation.sport,
        config_dir = %cli.config_dir.display(),
        "hofcast starting"
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = execute(&config, &cli.config_dir, &invocation, &cli.command, &mut out) {
        error!("{:#}", e);
        return Err(e);
    }
    Ok(())
}

/// Initialize tracing on stderr, filtered by `RUST_LOG`.
fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("hofcast=info,hofcast_app=info,warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
