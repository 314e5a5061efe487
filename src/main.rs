//! roster — server-rendered user directory.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use roster::config::Config;
use roster::constants;
use roster::env::Env;
use roster::fetch::HttpUserSource;
use roster::models::SortKey;
use roster::pages;
use roster::server::{self, AppState};

use std::path::Path;
use std::process;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::args::{Cli, Command, ListArgs, ServeArgs};

#[tokio::main]
async fn main() {
    init_tracing();

    if let Err(err) = run().await {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

/// Log to stderr so `list` output on stdout stays clean. Override via RUST_LOG.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Serve(args) => run_serve(cli.config.as_deref(), args).await,
        Command::List(args) => run_list(cli.config.as_deref(), args).await,
        Command::Version => run_version(),
    }
}

fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let work_dir = std::env::current_dir().ok();
    Config::load(explicit, work_dir.as_deref(), &Env::real())
        .context("failed to load configuration")
}

/// Serve the pages until interrupted.
async fn run_serve(config_path: Option<&Path>, args: ServeArgs) -> Result<()> {
    let mut config = load_config(config_path)?;
    args.apply(&mut config);

    let addr = config.server.socket_addr()?;
    let source =
        HttpUserSource::from_config(&config.source).context("failed to set up user API client")?;
    tracing::info!(users_url = %source.url(), "using user API");

    let state = AppState::new(Arc::new(source), config.source.fetch_options());
    server::serve(addr, state)
        .await
        .with_context(|| format!("server on {addr} failed"))
}

/// Fetch, sort, and print the table once.
async fn run_list(config_path: Option<&Path>, args: ListArgs) -> Result<()> {
    let mut config = load_config(config_path)?;
    args.source.apply(&mut config.source);

    let source =
        HttpUserSource::from_config(&config.source).context("failed to set up user API client")?;
    let sort_order = SortKey::resolve(args.sort_order.as_deref());

    let table = pages::load_table(&source, config.source.fetch_options(), sort_order)
        .await
        .context("failed to fetch users")?;

    print!("{}", args.format.render(&table));
    Ok(())
}

/// Print detailed version and build information.
fn run_version() -> Result<()> {
    use colored::Colorize;

    println!(
        "{} {}",
        constants::APP_NAME.bold(),
        constants::VERSION.green().bold()
    );
    println!("{}    {}", "target:".dimmed(), constants::TARGET);
    println!("{}   {}", "profile:".dimmed(), constants::PROFILE);
    Ok(())
}
