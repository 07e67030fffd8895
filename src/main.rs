//! Environment-info HTTP service entry point.

use std::net::SocketAddr;

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use envinfo_server::api::{create_router, AppState};
use envinfo_server::config::Config;
use envinfo_server::utils::shutdown_signal;

/// Minimal environment-info HTTP service.
#[derive(Parser, Debug)]
#[command(name = "envinfo-server")]
#[command(about = "HTTP service exposing greeting, health, and environment-info endpoints")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// HTTP listen port (overrides the PORT environment variable).
    #[arg(short, long)]
    port: Option<u16>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check configuration validity.
    CheckConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("envinfo_server=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    match args.command {
        Some(Command::CheckConfig) => cmd_check_config(),
        None => cmd_run(args.port).await,
    }
}

/// Check configuration validity.
fn cmd_check_config() -> anyhow::Result<()> {
    let config = Config::load()?;
    config.validate()?;

    println!("Configuration OK");
    println!("  port:         {}", config.port);
    println!("  environment:  {}", config.app_env);
    println!("  hostname:     {}", config.hostname);
    println!("  service:      {}", config.service_name);

    Ok(())
}

/// Run the HTTP server.
async fn cmd_run(port_override: Option<u16>) -> anyhow::Result<()> {
    // Load configuration
    let config = Config::load()?;
    config.validate()?;

    let port = port_override.unwrap_or(config.port);
    let environment = config.app_env.clone();

    // Create app state and router
    let state = AppState::new(config);
    let router = create_router(state);

    // Start HTTP server
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr).await?;
    info!("Listening on {} in {} environment", addr, environment);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
