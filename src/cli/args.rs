//! Clap argument types and their overlay onto the loaded config.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use roster::config::{Config, SourceConfig};
use roster::fetch::CachePolicy;
use roster::models::UserTable;

/// Server-rendered user directory backed by a remote JSON API.
#[derive(Parser, Debug)]
#[command(name = "roster", version = roster::constants::VERSION)]
pub struct Cli {
    /// Config file to load instead of ./roster.toml.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Serve the landing and user listing pages over HTTP.
    Serve(ServeArgs),

    /// Fetch and print the user table once.
    List(ListArgs),

    /// Print version and build information.
    Version,
}

/// Flags shared by every command that talks to the user API.
#[derive(clap::Args, Debug, Default)]
pub struct SourceArgs {
    /// Endpoint returning the JSON user array.
    #[arg(long)]
    pub users_url: Option<String>,

    /// Cache directive sent with the fetch.
    #[arg(long)]
    pub cache: Option<CachePolicy>,

    /// Abort the fetch after this many seconds (0 disables the timeout).
    #[arg(long)]
    pub timeout_secs: Option<u64>,
}

impl SourceArgs {
    /// Override config values with any flags that were given.
    pub fn apply(&self, source: &mut SourceConfig) {
        if let Some(ref url) = self.users_url {
            source.users_url = url.clone();
        }
        if let Some(cache) = self.cache {
            source.cache = cache;
        }
        match self.timeout_secs {
            Some(0) => source.timeout_secs = None,
            Some(secs) => source.timeout_secs = Some(secs),
            None => {}
        }
    }
}

/// Arguments for the `serve` subcommand.
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Interface to bind.
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on.
    #[arg(long, short = 'p')]
    pub port: Option<u16>,

    #[command(flatten)]
    pub source: SourceArgs,
}

impl ServeArgs {
    pub fn apply(&self, config: &mut Config) {
        if let Some(ref host) = self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        self.source.apply(&mut config.source);
    }
}

/// Arguments for the `list` subcommand.
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Field to sort by: id, name or email. Anything else sorts by id.
    #[arg(long, short = 's')]
    pub sort_order: Option<String>,

    /// Output format.
    #[arg(long, default_value = "terminal")]
    pub format: OutputFormat,

    #[command(flatten)]
    pub source: SourceArgs,
}

/// Output format options.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    /// The same document the `/users` page serves.
    Html,
    Json,
    Terminal,
}

impl OutputFormat {
    /// Render the table using the renderer for this format.
    pub fn render(&self, table: &UserTable) -> String {
        use roster::output::TableRenderer;
        match self {
            OutputFormat::Html => roster::pages::render_users_page(table),
            OutputFormat::Json => roster::output::json::JsonRenderer.render(table),
            OutputFormat::Terminal => roster::output::terminal::TerminalRenderer.render(table),
        }
    }
}
