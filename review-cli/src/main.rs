//! reviewd - server and administration CLI for the company review service

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use review_core::Config;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{ReviewsArgs, ServeArgs, TokenArgs, UserArgs};

/// Company review API server
#[derive(Parser, Debug)]
#[command(name = "reviewd")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Address to listen on (overrides config and env)
    #[arg(long, global = true, env = "REVIEWD_BIND")]
    bind: Option<String>,

    /// Path to the SQLite database (overrides config and env)
    #[arg(long, global = true, env = "REVIEWD_DATABASE")]
    database: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show version information
    Version,

    /// Run the HTTP API
    #[command(visible_alias = "s")]
    Serve(ServeArgs),

    /// Manage user accounts
    User(UserArgs),

    /// Print a user's API token, issuing one if needed
    Token(TokenArgs),

    /// List recent reviews from all users
    Reviews(ReviewsArgs),

    /// Show current configuration
    Config,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        tracing::info!("Verbose mode enabled");
    }

    // Load configuration with overrides
    let config = Config::load_with_overrides(cli.bind.clone(), cli.database.clone())?;

    if cli.verbose {
        tracing::info!(
            bind = %config.server.bind,
            database = %config.database.path.display(),
            "Configuration loaded"
        );
    }

    match cli.command {
        Some(Commands::Version) => {
            println!("reviewd {}", env!("CARGO_PKG_VERSION"));
        }
        Some(Commands::Serve(args)) => {
            args.execute(&config).await?;
        }
        Some(Commands::User(args)) => {
            args.execute(&config).await?;
        }
        Some(Commands::Token(args)) => {
            args.execute(&config).await?;
        }
        Some(Commands::Reviews(args)) => {
            args.execute(&config).await?;
        }
        Some(Commands::Config) => {
            println!("reviewd Configuration");
            println!("=====================");
            println!();
            println!("Server Settings:");
            println!("  bind: {}", config.server.bind);
            println!();
            println!("Database Settings:");
            println!("  path: {}", config.database.path.display());
            println!("  max_connections: {}", config.database.max_connections);
            println!();
            if let Some(path) = Config::default_config_path() {
                println!("Config file: {}", path.display());
                if path.exists() {
                    println!("  (exists)");
                } else {
                    println!("  (not found - using defaults)");
                }
            }
        }
        None => {
            println!("reviewd - company review API");
            println!();
            println!("Use --help for usage information");
        }
    }

    Ok(())
}
