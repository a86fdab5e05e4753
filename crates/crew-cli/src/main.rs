use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "crew")]
#[command(
    about = "CREW CLI - Cross-functional mission planning for a simulated product crew",
    long_about = None
)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Turn an idea into a mission document (reads stdin when no idea is given)
    Mission {
        /// The project idea or instruction
        idea: Vec<String>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// List the crew personas
    Personas {
        /// Print the roster as JSON
        #[arg(long)]
        json: bool,
    },
    /// Serve the mission endpoint over HTTP until Ctrl-C
    Serve {
        /// Path to server.toml
        #[arg(long)]
        config: Option<PathBuf>,

        /// Address to listen on, overriding the config file
        #[arg(long)]
        bind: Option<String>,
    },
}

/// Logs go to stderr so JSON on stdout stays machine-readable.
/// `RUST_LOG` takes precedence over `--verbose` and `default_filter`.
fn init_logging(verbose: bool, default_filter: &str) {
    let default_filter = if verbose { "debug" } else { default_filter };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Mission { idea, pretty } => {
            init_logging(cli.verbose, "warn");
            commands::mission::run(&idea, pretty)?
        }
        Commands::Personas { json } => {
            init_logging(cli.verbose, "warn");
            commands::personas::run(json)?
        }
        Commands::Serve { config, bind } => {
            let settings = commands::serve::load_config(config.as_deref(), bind)?;
            init_logging(cli.verbose, &settings.logging.filter);
            commands::serve::run(settings).await?
        }
    }

    Ok(())
}
