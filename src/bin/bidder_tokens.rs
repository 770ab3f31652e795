//! One-shot bidder token generation
//!
//! Runs every configured bidder once and prints the token JSON to stdout.
//!
//! # Usage
//!
//! ```bash
//! bidder-tokens --bidder "AdNetworkA=tokenA" --bidder "AdNetworkB"
//! ```
//!
//! # Output
//!
//! ```json
//! {"AdNetworkA":"tokenA"}
//! ```

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use advanced_bidding::cli::{GenerateArgs, load_settings, run_generate_mode};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(name = "bidder-tokens")]
struct Cli {
    /// Settings file (TOML)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Bidder as NAME or NAME=TOKEN; TOKEN may be ${ENV_VAR}
    #[arg(short, long = "bidder", value_name = "BIDDER")]
    bidders: Vec<String>,

    /// Disable advanced bidding (prints an empty object)
    #[arg(long)]
    disable_bidding: bool,

    /// Enable verbose logging
    #[arg(long)]
    verbose: bool,
}

impl From<Cli> for GenerateArgs {
    fn from(cli: Cli) -> Self {
        Self {
            config: cli.config,
            bidders: cli.bidders,
            disable_bidding: cli.disable_bidding,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let verbose = cli.verbose;

    let args: GenerateArgs = cli.into();

    let settings = match load_settings(&args) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to load configuration. Error: {}", e);
            std::process::exit(1);
        }
    };

    // RUST_LOG wins over --verbose and the configured level
    let default_level = if verbose || settings.logging.verbose {
        "debug".to_string()
    } else {
        settings.logging.level.clone()
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_level.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run_generate_mode(&settings).await {
        Ok(output) => {
            println!("{}", output);
            Ok(())
        }
        Err(e) => {
            eprintln!("Failed while generating bidder tokens. Error: {}", e);
            std::process::exit(1);
        }
    }
}
