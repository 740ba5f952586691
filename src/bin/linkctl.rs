//! Command-line companion for link-cleaner.
//!
//! Runs the same resolution and shortening logic as the HTTP service, without
//! starting a server. Useful for checking what a short link resolves to.
//!
//! # Usage
//!
//! ```bash
//! # Resolve a short link and show extracted identifiers
//! cargo run --bin linkctl -- resolve https://s.shopee.vn/9UuCnuLvMJ
//!
//! # Same, as JSON (the body the service would return)
//! cargo run --bin linkctl -- resolve --json https://s.shopee.vn/9UuCnuLvMJ
//!
//! # Extract identifiers from an already-resolved URL (no network)
//! cargo run --bin linkctl -- extract "https://shopee.vn/product/12345/67890"
//!
//! # Create a short link at the provider
//! cargo run --bin linkctl -- shorten https://shopee.vn/product/12345/67890
//! ```
//!
//! # Environment Variables
//!
//! Reads the same variables as the server (`UPSTREAM_TIMEOUT_MS`,
//! `SHORTENER_API_URL`, `SHORTENER_DOMAIN`, `WHITELIST_MATCH`, ...).

use link_cleaner::config;
use link_cleaner::domain::{ResolutionResult, extract_product_ids};
use link_cleaner::state::AppState;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use std::process::ExitCode;

/// CLI tool for link-cleaner.
#[derive(Parser)]
#[command(name = "linkctl")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a short link and extract product identifiers
    Resolve {
        /// Short link, e.g. https://s.shopee.vn/9UuCnuLvMJ
        url: String,

        /// Print the JSON result instead of a summary
        #[arg(long)]
        json: bool,
    },

    /// Extract product identifiers from a resolved URL without network access
    Extract {
        /// Final product URL
        url: String,
    },

    /// Create a short link at the configured provider
    Shorten {
        /// Target URL
        url: String,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Resolve { url, json } => resolve(&url, json).await,
        Commands::Extract { url } => Ok(extract(&url)),
        Commands::Shorten { url } => shorten(&url).await,
    }
}

/// Resolves a short link using the configured whitelist and timeout.
async fn resolve(url: &str, as_json: bool) -> Result<ExitCode> {
    let config = config::load_from_env()?;
    let state = AppState::from_config(&config)?;

    let result = state.resolver.resolve(url).await;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_resolution(&result);
    }

    Ok(if result.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Prints a resolution summary.
///
/// # Output Format
///
/// ```text
/// 🔗 https://s.shopee.vn/9UuCnuLvMJ
///   Final URL:  https://shopee.vn/product/12345/67890
///   Shop ID:    12345
///   Item ID:    67890
///   Product ID: i.12345.67890
/// ```
fn print_resolution(result: &ResolutionResult) {
    println!("{} {}", "🔗".bright_blue(), result.short_url().bright_white().bold());

    if let Some(error) = result.error() {
        println!("  {} {}", "Error:".red().bold(), error.as_str().red());
        return;
    }

    println!(
        "  Final URL:  {}",
        result.final_url().unwrap_or("-").cyan()
    );

    match result.product_id() {
        Some(product_id) => {
            println!("  Shop ID:    {}", result.shop_id().unwrap_or("-").green());
            println!("  Item ID:    {}", result.item_id().unwrap_or("-").green());
            println!("  Product ID: {}", product_id.bright_green().bold());
        }
        None => println!("  {}", "No product identifiers found".yellow()),
    }
}

fn extract(url: &str) -> ExitCode {
    match extract_product_ids(url) {
        Some(ids) => {
            println!("  Pattern:    {}", ids.pattern.bright_black());
            println!("  Shop ID:    {}", ids.shop_id.green());
            println!("  Item ID:    {}", ids.item_id.green());
            println!("  Product ID: {}", ids.product_id().bright_green().bold());
            ExitCode::SUCCESS
        }
        None => {
            println!("{}", "No product identifiers found".yellow());
            ExitCode::FAILURE
        }
    }
}

async fn shorten(url: &str) -> Result<ExitCode> {
    let config = config::load_from_env()?;
    let state = AppState::from_config(&config)?;

    match state.shortener.shorten(url).await {
        Ok(link) => {
            println!("{} {}", "✂️ ".bright_blue(), link.short_url.bright_green().bold());
            if let Some(slug) = &link.slug {
                println!("  Slug:     {}", slug.cyan());
            }
            println!("  Target:   {}", link.target_url.bright_black());
            println!("  Provider: {}", link.provider.bright_black());
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            println!("{} {}", "Error:".red().bold(), err.code().as_str().red());
            println!("  {}", err.to_string().bright_black());
            Ok(ExitCode::FAILURE)
        }
    }
}
