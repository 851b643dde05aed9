use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use flipstack_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "flipstack")]
#[command(author, version, about = "Flippable stacked pages in the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file to use instead of ~/.config/flipstack/config.toml
    #[arg(short = 'c', long = "config", global = true)]
    config_path: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the stacked pages demo
    Run,
    /// Print the transform computed for a range of positions
    Table {
        /// First position
        #[arg(long, default_value_t = -4.0, allow_hyphen_values = true)]
        from: f64,
        /// Last position (inclusive)
        #[arg(long, default_value_t = 1.25, allow_hyphen_values = true)]
        to: f64,
        /// Distance between sampled positions
        #[arg(long, default_value_t = 0.25)]
        step: f64,
        /// Page width
        #[arg(long, default_value_t = 400.0)]
        width: f64,
        /// Page height
        #[arg(long, default_value_t = 1000.0)]
        height: f64,
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Inspect or create the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Print the configuration file path
    Path,
    /// Validate the stack geometry
    Check,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config_path = cli.config_path.unwrap_or_else(AppConfig::config_path);
    let config = AppConfig::load_from(&config_path)?;

    // Initialize logging; RUST_LOG wins over the configured level
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    if !config_path.exists() {
        tracing::info!(path = %config_path.display(), "No config file, using defaults");
    }

    match cli.command {
        Some(Commands::Run) | None => commands::run::run(config),
        Some(Commands::Table {
            from,
            to,
            step,
            width,
            height,
            json,
        }) => commands::table::run(&config, from, to, step, width, height, json),
        Some(Commands::Config { action }) => match action {
            ConfigAction::Show => commands::config::show(&config),
            ConfigAction::Init { force } => commands::config::init(&config_path, force),
            ConfigAction::Path => commands::config::path(&config_path),
            ConfigAction::Check => commands::config::check(&config),
        },
    }
}
