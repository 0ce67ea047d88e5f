//! CLI administration tool for shortcode-service.
//!
//! Runs the same services as the HTTP API directly against the database,
//! without going through the server.
//!
//! # Usage
//!
//! ```bash
//! # Create the database and tables
//! cargo run --bin admin -- db init
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Create a shortcode
//! cargo run --bin admin -- shorten https://example.com --shortcode asd148
//!
//! # Inspect a shortcode
//! cargo run --bin admin -- show asd148
//!
//! # View totals
//! cargo run --bin admin -- stats
//! ```
//!
//! # Environment Variables
//!
//! Same as the server; see [`shortcode_service::config`].

use shortcode_service::application::services::{BootstrapService, ShortcodeService};
use shortcode_service::config::{self, Config};
use shortcode_service::domain::entities::ShortcodeRecord;
use shortcode_service::infrastructure::persistence::{PgShortcodeRepository, PgStoreBootstrap};
use shortcode_service::server::connect_pool;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing shortcode-service.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },

    /// Create a shortcode
    Shorten {
        /// URL to shorten
        url: String,

        /// Six-character shortcode (random if omitted)
        #[arg(short, long)]
        shortcode: Option<String>,
    },

    /// Show a stored shortcode
    Show {
        /// Shortcode to look up
        shortcode: String,
    },

    /// Show totals across all shortcodes
    Stats,
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Create the database and tables if missing
    Init,

    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let pool = Arc::new(connect_pool(&config)?);

    match cli.command {
        Commands::Db { action } => handle_db_action(action, &config, pool.clone()).await?,
        Commands::Shorten { url, shortcode } => {
            handle_shorten(service(pool.clone()), url, shortcode).await?
        }
        Commands::Show { shortcode } => handle_show(service(pool.clone()), &shortcode).await?,
        Commands::Stats => handle_stats(service(pool.clone())).await?,
    }

    pool.close().await;

    Ok(())
}

fn service(pool: Arc<PgPool>) -> ShortcodeService {
    ShortcodeService::new(Arc::new(PgShortcodeRepository::new(pool)))
}

/// Handles database commands.
async fn handle_db_action(action: DbAction, config: &Config, pool: Arc<PgPool>) -> Result<()> {
    match action {
        DbAction::Init => {
            println!("{}", "Bootstrapping database...".bright_blue());

            let store = PgStoreBootstrap::new(
                pool,
                config.maintenance_url()?,
                config.database_name.clone(),
            );
            let report = BootstrapService::new(Arc::new(store))
                .bootstrap()
                .await
                .context("Bootstrap failed")?;

            println!("{}", report.to_string().green().bold());
        }
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            sqlx::query("SELECT 1")
                .fetch_one(pool.as_ref())
                .await
                .with_context(|| format!("Cannot reach database '{}'", config.database_name))?;

            println!("{}", "Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool.as_ref())
                .await?;

            println!("  Database:   {}", config.database_name.bright_white());
            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}

/// Creates a shortcode and prints it.
async fn handle_shorten(
    service: ShortcodeService,
    url: String,
    shortcode: Option<String>,
) -> Result<()> {
    let record = service
        .shorten(Some(url), shortcode)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create shortcode: {}", e.error_message()))?;

    println!("{}", "Shortcode created".green().bold());
    print_record(&record);

    Ok(())
}

/// Prints a single stored shortcode.
async fn handle_show(service: ShortcodeService, shortcode: &str) -> Result<()> {
    let record = service
        .get(shortcode)
        .await
        .map_err(|e| anyhow::anyhow!("{}: {}", shortcode, e.error_message()))?;

    print_record(&record);

    Ok(())
}

/// Displays totals.
///
/// Shows:
/// - Total number of shortcodes
/// - Total number of redirects
async fn handle_stats(service: ShortcodeService) -> Result<()> {
    println!("{}", "Statistics".bright_blue().bold());
    println!();

    let summary = service
        .summary()
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?;

    println!(
        "  Shortcodes: {}",
        summary.shortcodes.to_string().bright_green().bold()
    );
    println!(
        "  Redirects:  {}",
        summary.redirects.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

fn print_record(record: &ShortcodeRecord) {
    let last_redirect = record
        .redirect_last
        .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| "never".to_string());

    println!();
    println!("  Shortcode:     {}", record.shortcode.cyan());
    println!("  URL:           {}", record.url.bright_white());
    println!(
        "  Created:       {}",
        record
            .created
            .format("%Y-%m-%d %H:%M:%S")
            .to_string()
            .bright_black()
    );
    println!("  Last redirect: {}", last_redirect.bright_black());
    println!(
        "  Redirects:     {}",
        record.redirect_count.to_string().bright_green().bold()
    );
    println!();
}
