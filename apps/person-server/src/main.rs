use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;
use std::path::{Path, PathBuf};
use tokio_util::sync::CancellationToken;

use api_ingress::{ApiIngress, ApiIngressConfig};
use person_api::{PersonModule, StoreOptions};
use runtime::{default_logging_config, AppConfig, CliArgs};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

/// Person Directory Server - CRUD API for person records with request logging
#[derive(Parser)]
#[command(name = "person-server")]
#[command(about = "Person Directory Server - CRUD API for person records with request logging")]
#[command(version = "0.1.0")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port for HTTP server (overrides config and PORT)
    #[arg(short, long)]
    port: Option<u16>,

    /// Print current configuration and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the server
    Run,
    /// Check configuration
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let args = CliArgs {
        config: cli.config.as_ref().map(|p| p.to_string_lossy().to_string()),
        port: cli.port,
        print_config: cli.print_config,
        verbose: cli.verbose,
    };

    let mut config = AppConfig::load_layered(cli.config.as_deref())?;
    config.apply_cli_overrides(&args);

    // Print config and exit if requested
    if args.print_config {
        println!("{}", config.to_yaml()?);
        return Ok(());
    }

    let logging_config = config.logging.clone().unwrap_or_else(default_logging_config);
    runtime::logging::init_logging_from_config(&logging_config, &base_dir(cli.config.as_deref())?);
    tracing::info!("Person Directory Server starting");

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run_server(config).await,
        Commands::Check => check_config(&config),
    }
}

/// Relative log paths resolve against the config file's directory, or the cwd.
fn base_dir(config_path: Option<&Path>) -> Result<PathBuf> {
    match config_path.and_then(Path::parent) {
        Some(dir) if !dir.as_os_str().is_empty() => Ok(dir.to_path_buf()),
        _ => std::env::current_dir().context("Failed to resolve current directory"),
    }
}

async fn run_server(config: AppConfig) -> Result<()> {
    let store = StoreOptions {
        url: config.database.url.clone(),
        max_conns: config.database.max_conns,
        sqlx_logging: config.database.sqlx_logging,
    };
    let db = person_api::connect(&store).await?;

    let module = PersonModule::init(db).await?;
    module
        .seed(config.database.seed_count)
        .await
        .context("Failed to seed persons")?;

    let ingress = ApiIngress::new(ApiIngressConfig {
        bind_addr: config.bind_addr(),
        timeout_sec: config.server.timeout_sec,
        cors_enabled: config.server.cors_enabled,
        ..Default::default()
    });
    let router = ingress.build_router(module.register_rest(axum::Router::new()));
    let listener = ingress.bind().await?;

    let cancel = CancellationToken::new();
    let on_signal = cancel.clone();
    tokio::spawn(async move {
        if let Err(e) = api_ingress::wait_for_shutdown().await {
            tracing::error!(error = %e, "Signal handler failed");
        }
        on_signal.cancel();
    });

    ApiIngress::serve(listener, router, cancel).await?;
    tracing::info!("Server stopped");
    Ok(())
}

fn check_config(config: &AppConfig) -> Result<()> {
    tracing::info!("Checking configuration...");
    // load_layered has already validated it
    println!("Configuration check passed");
    println!("{}", config.to_yaml()?);
    Ok(())
}
