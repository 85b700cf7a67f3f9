//! Kagi MCP server - Main Entry Point

use clap::{Parser, Subcommand};
use kagimcp::config::ServerConfig;
use kagimcp::kagi::{KagiClient, SummaryType};
use kagimcp::observability::{init_logging, LogSettings};
use kagimcp::server::{serve_stdio, KagiMcpServer};
use kagimcp::tools::KagiTools;
use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Kagi search and summarizer tools over the Model Context Protocol
#[derive(Parser)]
#[command(name = "kagimcp")]
#[command(about = "MCP server for Kagi search and summarization")]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the tools over stdio (default)
    Serve,
    /// Run one search and print the formatted results
    Search {
        /// One or more search queries
        #[arg(required = true)]
        queries: Vec<String>,
    },
    /// Summarize a document and print the summary
    Summarize {
        /// URL of the document
        url: String,
        /// summary or takeaway
        #[arg(long, value_parser = parse_summary_type)]
        summary_type: Option<SummaryType>,
        /// Output language code, e.g. EN
        #[arg(long)]
        target_language: Option<String>,
    },
    /// Validate configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}

fn parse_summary_type(s: &str) -> Result<SummaryType, String> {
    s.parse()
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_logging(LogSettings::from_env().with_verbosity(cli.verbose));

    info!("Starting kagimcp v{}", env!("CARGO_PKG_VERSION"));

    let config = match load_configuration(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    let result = match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => run_server(config).await,
        Commands::Search { queries } => run_search(config, queries).await,
        Commands::Summarize {
            url,
            summary_type,
            target_language,
        } => run_summarize(config, url, summary_type, target_language).await,
        Commands::Config { show } => handle_config_command(config, show),
    };

    if let Err(e) = result {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn load_configuration(
    config_path: &Option<PathBuf>,
) -> Result<ServerConfig, Box<dyn std::error::Error>> {
    match config_path {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            Ok(ServerConfig::load_from_file(path)?)
        }
        None => Ok(ServerConfig::from_env()?),
    }
}

/// Bootstrap: wire the HTTP client into the tool handlers
fn build_tools(config: &ServerConfig) -> Result<KagiTools, Box<dyn std::error::Error>> {
    let client = KagiClient::new(config.client_config()?)?;
    Ok(KagiTools::new(
        Arc::new(client),
        config.summarizer.engine.clone(),
    ))
}

async fn run_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let tools = build_tools(&config)?;
    info!(engine = %tools.engine_name(), "Kagi tools initialized");

    serve_stdio(KagiMcpServer::new(tools)).await?;

    info!("Application shutdown complete");
    Ok(())
}

async fn run_search(
    config: ServerConfig,
    queries: Vec<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let tools = build_tools(&config)?;

    match tools.search_fetch(&queries).await {
        Ok(report) => {
            println!("{report}");
            Ok(())
        }
        Err(e) => Err(e.to_tool_text().into()),
    }
}

async fn run_summarize(
    config: ServerConfig,
    url: String,
    summary_type: Option<SummaryType>,
    target_language: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let tools = build_tools(&config)?;

    match tools.summarize(&url, summary_type, target_language).await {
        Ok(summary) => {
            println!("{summary}");
            Ok(())
        }
        Err(e) => Err(e.to_tool_text().into()),
    }
}

fn handle_config_command(
    config: ServerConfig,
    show: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Err(e) = kagimcp::tools::summarizer::resolve_engine(&config.summarizer.engine) {
        return Err(e.to_string().into());
    }

    if config.get_api_key().is_err() {
        warn!(
            "API key variable {} is not set; serve will fail until it is",
            config.kagi.api_key_env
        );
    }

    if show {
        println!("{}", toml::to_string_pretty(&config)?);
    }

    info!("Configuration validation complete");
    Ok(())
}
