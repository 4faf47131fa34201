//! Community CLI - MCP server and command-line access to the Community API.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use community_client::CommunityClient;
use community_core::{Config, Session};
use community_mcp::protocol::ToolCallResult;
use community_mcp::tools::CATALOG;
use community_mcp::{McpServer, ToolHandler};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "community")]
#[command(author, version, about = "Community API tools for AI agents over MCP", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Community API base URL (overrides config and environment)
    #[arg(long, global = true)]
    url: Option<String>,

    /// Pre-obtained bearer token
    #[arg(long, global = true)]
    token: Option<String>,

    /// Path to an alternative config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the MCP server on stdio (default)
    Serve,

    /// List the available tools
    Tools,

    /// Call a single tool and print its result
    Call {
        /// Tool name, e.g. `list_projects`
        tool: String,

        /// Tool arguments as a JSON object
        #[arg(long)]
        args: Option<String>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show effective configuration
    Show,

    /// Get a configuration value (e.g. `api.url`)
    Get { key: String },

    /// Set a configuration value in the config file
    Set { key: String, value: String },

    /// Print the config file path
    Path,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // stdout carries MCP traffic, so logs go to stderr.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match &cli.command {
        Some(Commands::Serve) | None => serve(&cli).await,
        Some(Commands::Tools) => {
            list_tools();
            Ok(())
        }
        Some(Commands::Call { tool, args }) => call(&cli, tool, args.as_deref()).await,
        Some(Commands::Config { command }) => config_command(&cli, command),
    }
}

fn config_path(cli: &Cli) -> anyhow::Result<PathBuf> {
    match &cli.config {
        Some(path) => Ok(path.clone()),
        None => Ok(Config::config_path()?),
    }
}

/// Config file layer only: `--config` or the default location.
fn load_file(cli: &Cli) -> anyhow::Result<Config> {
    match &cli.config {
        Some(path) => Ok(Config::load_from(path)?),
        None => Ok(Config::load()?),
    }
}

fn save_file(cli: &Cli, config: &Config) -> anyhow::Result<()> {
    match &cli.config {
        Some(path) => config.save_to(path)?,
        None => config.save()?,
    }
    Ok(())
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    load_config_with(cli, |key| std::env::var(key).ok())
}

/// Effective configuration: file, then environment, then flags.
fn load_config_with<F>(cli: &Cli, lookup: F) -> anyhow::Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = load_file(cli)?;
    config.apply_env_from(lookup)?;

    if let Some(url) = &cli.url {
        config.set("api.url", url)?;
    }
    if let Some(token) = &cli.token {
        config.token = Some(token.clone());
    }

    Ok(config)
}

fn build_handler(config: &Config) -> anyhow::Result<ToolHandler> {
    let client = CommunityClient::from_config(config)
        .with_context(|| format!("Failed to create client for {}", config.api.url))?;
    let session = Arc::new(Session::with_token(config.token.clone()));

    Ok(ToolHandler::new(Arc::new(client), session))
}

async fn serve(cli: &Cli) -> anyhow::Result<()> {
    let config = load_config(cli)?;
    tracing::info!(
        url = %config.api.url,
        authenticated = config.token.is_some(),
        "Serving Community API tools over stdio"
    );

    let mut server = McpServer::new(build_handler(&config)?);
    server.run().await?;
    Ok(())
}

fn list_tools() {
    for spec in CATALOG {
        let access = if spec.requires_auth { "auth" } else { "public" };
        println!(
            "{:<28} {:<6} {:<42} {}",
            spec.name,
            spec.method.as_str(),
            spec.path,
            access
        );
    }
}

async fn call(cli: &Cli, tool: &str, args: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(cli)?;
    let handler = build_handler(&config)?;
    let result = run_call(&handler, tool, args).await?;

    if let Some(text) = result.first_text() {
        println!("{}", text);
    }
    let code = exit_code(&result);
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}

async fn run_call(
    handler: &ToolHandler,
    tool: &str,
    args: Option<&str>,
) -> anyhow::Result<ToolCallResult> {
    let arguments = args
        .map(serde_json::from_str::<serde_json::Value>)
        .transpose()
        .context("--args must be valid JSON")?;

    Ok(handler.execute(tool, arguments).await)
}

fn exit_code(result: &ToolCallResult) -> i32 {
    if result.is_error() {
        1
    } else {
        0
    }
}

fn config_command(cli: &Cli, command: &ConfigCommands) -> anyhow::Result<()> {
    match command {
        ConfigCommands::Show => {
            let config = load_config(cli)?;
            println!("api.url          = {}", config.api.url);
            match config.api.timeout_secs {
                Some(secs) => println!("api.timeout_secs = {}", secs),
                None => println!("api.timeout_secs = (none)"),
            }
            let token = if config.token.is_some() {
                "(set, hidden)"
            } else {
                "(not set)"
            };
            println!("token            = {}", token);
        }
        ConfigCommands::Get { key } => {
            let config = load_config(cli)?;
            match config.get(key)? {
                Some(value) => println!("{}", value),
                None => println!("(not set)"),
            }
        }
        ConfigCommands::Set { key, value } => {
            // Only the file layer is persisted.
            let mut config = load_file(cli)?;
            config.set(key, value)?;
            save_file(cli, &config)?;
            println!("Set {} in {}", key, config_path(cli)?.display());
        }
        ConfigCommands::Path => {
            println!("{}", config_path(cli)?.display());
        }
    }

    Ok(())
}
