//! Gallery CLI entry point

use clap::{CommandFactory, Parser};
use console::style;
use gallery::cli::{Cli, Commands};
use gallery::config::{Config, ConfigManager};
use gallery::error::GalleryResult;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            if let Some(hint) = e.hint() {
                eprintln!("{} {}", style("Hint:").yellow(), hint);
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> GalleryResult<()> {
    let cli = Cli::parse();

    if let Commands::Completions { shell } = cli.command {
        clap_complete::generate(shell, &mut Cli::command(), "gallery", &mut std::io::stdout());
        return Ok(());
    }

    let config_manager = match cli.config {
        Some(ref path) => ConfigManager::with_path(path.clone()),
        None => ConfigManager::new(),
    };
    let config = config_manager.load().await?;

    init_logging(cli.verbose, &config);
    debug!("Using config {}", config_manager.path().display());

    if config.storage.path.is_none() {
        ConfigManager::ensure_state_dir().await?;
    }
    gallery::ui::init_theme();

    match cli.command {
        Commands::Completions { .. } => unreachable!("Completions handled above"),
        Commands::Login(args) => gallery::cli::commands::login(args, &config).await,
        Commands::Logout => gallery::cli::commands::logout(&config).await,
        Commands::Signup(args) => gallery::cli::commands::signup(args, &config).await,
        Commands::Whoami => gallery::cli::commands::whoami(&config).await,
        Commands::Home(args) => gallery::cli::commands::home(args, &config).await,
        Commands::Profile(args) => gallery::cli::commands::profile(args, &config).await,
        Commands::Album(args) => gallery::cli::commands::album(args, &config).await,
        Commands::Photo(args) => gallery::cli::commands::photo(args, &config).await,
        Commands::Config(args) => {
            gallery::cli::commands::config(args, &config_manager, &config).await
        }
    }
}

/// 0 = warn, 1 = info, 2+ = debug; `RUST_LOG` wins when set
fn init_logging(verbose: u8, config: &Config) {
    let default = match verbose {
        0 => "gallery=warn",
        1 => "gallery=info",
        _ => "gallery=debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    if config.general.log_format == "json" {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .without_time()
            .with_writer(std::io::stderr)
            .init();
    }
}
