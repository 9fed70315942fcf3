//! buildquote CLI - PC build quotes from the terminal
//!
//! Pick parts from the price list, watch the running total, save the
//! build to the quote service, and manage saved quotes.

mod api;
mod config;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::{Input, Select};
use std::fs;

use api::{QuoteClient, QuoteRequest, QuoteResponse};
use buildquote::{Catalog, CatalogOption, ComponentCategory, QuoteBuilder};
use config::Config;

#[derive(Parser)]
#[command(name = "buildquote")]
#[command(about = "buildquote CLI - PC build quotes", long_about = None)]
#[command(version)]
struct Cli {
    /// Quote service URL (overrides the configured one)
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the price list
    Catalog,

    /// Build a quote and save it
    Build {
        /// Quote name (will prompt if not provided)
        #[arg(short, long)]
        name: Option<String>,
        /// CPU option number from `buildquote catalog`
        #[arg(long)]
        cpu: Option<usize>,
        /// GPU option number
        #[arg(long)]
        gpu: Option<usize>,
        /// RAM option number
        #[arg(long)]
        ram: Option<usize>,
    },

    /// List saved quotes
    List,

    /// Show one saved quote
    Show {
        /// Quote ID
        id: String,
    },

    /// Rename a saved quote
    Rename {
        /// Quote ID
        id: String,
        /// New name
        name: String,
    },

    /// Delete a saved quote
    Delete {
        /// Quote ID
        id: String,
    },

    /// Export saved quotes as XML
    Export {
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Show or change configuration
    Config {
        /// Store a new default quote service URL
        #[arg(long)]
        set_base_url: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;
    let base_url = config.resolve_base_url(cli.base_url.as_deref());

    match cli.command {
        Commands::Catalog => cmd_catalog(),
        Commands::Build { name, cpu, gpu, ram } => {
            cmd_build(&base_url, name, [cpu, gpu, ram]).await
        }
        Commands::List => cmd_list(&base_url).await,
        Commands::Show { id } => cmd_show(&base_url, &id).await,
        Commands::Rename { id, name } => cmd_rename(&base_url, &id, name).await,
        Commands::Delete { id } => cmd_delete(&base_url, &id).await,
        Commands::Export { output } => cmd_export(&base_url, output).await,
        Commands::Config { set_base_url } => {
            cmd_config(config, set_base_url, cli.base_url).await
        }
    }
}

// ============================================
// Command Implementations
// ============================================

fn cmd_catalog() -> Result<()> {
    let catalog = Catalog::default();

    for category in ComponentCategory::ALL {
        println!("{}", category.to_string().bold());
        for (i, option) in catalog.options(category).iter().enumerate() {
            println!("  {} {}", format!("{}.", i + 1).dimmed(), option_line(option));
        }
    }

    Ok(())
}

async fn cmd_build(base_url: &str, name: Option<String>, picks: [Option<usize>; 3]) -> Result<()> {
    let mut builder = QuoteBuilder::new(Catalog::default());

    for (category, pick) in ComponentCategory::ALL.into_iter().zip(picks) {
        let index = match pick {
            Some(number) => number
                .checked_sub(1)
                .context("Option numbers start at 1")?,
            None => prompt_option(builder.catalog(), category)?,
        };

        let option = builder.select(category, index)?;
        println!("{} {}: {}", "✓".green(), category, option_line(option));
        println!("  Running total: {}", format_price(builder.total()).cyan());
    }

    let name = match name {
        Some(n) => n,
        None => Input::<String>::new()
            .with_prompt("Quote name")
            .allow_empty(true)
            .interact_text()
            .context("Failed to read input")?,
    };

    // Rejected locally; nothing is sent for an incomplete build
    let draft = builder.finish(&name)?;

    let client = QuoteClient::new(base_url);
    let quote = client.create_quote(&QuoteRequest::from(draft)).await?;

    println!("{} Quote saved", "✓".green());
    print_quote(&quote);

    Ok(())
}

async fn cmd_list(base_url: &str) -> Result<()> {
    let client = QuoteClient::new(base_url);
    let quotes = client.list_quotes().await?;

    if quotes.is_empty() {
        println!("No quotes yet.");
        println!("\n{}", "Save one with:".dimmed());
        println!("  buildquote build");
        return Ok(());
    }

    println!("{}", "Saved quotes:".bold());
    for quote in quotes {
        println!(
            "  {} {} {} | {} | {} | {} {}",
            quote.id.dimmed(),
            quote.name.cyan().bold(),
            format_price(quote.total).green(),
            quote.components.cpu,
            quote.components.gpu,
            quote.components.ram,
            quote.created_at.format("%Y-%m-%d %H:%M").to_string().dimmed()
        );
    }

    Ok(())
}

async fn cmd_show(base_url: &str, id: &str) -> Result<()> {
    let client = QuoteClient::new(base_url);
    let quote = client.get_quote(id).await?;
    print_quote(&quote);
    Ok(())
}

async fn cmd_rename(base_url: &str, id: &str, name: String) -> Result<()> {
    let client = QuoteClient::new(base_url);
    let current = client.get_quote(id).await?;

    let request = QuoteRequest {
        name,
        components: current.components,
        total: current.total,
    };
    let updated = client.update_quote(id, &request).await?;

    println!("{} Quote renamed", "✓".green());
    print_quote(&updated);

    Ok(())
}

async fn cmd_delete(base_url: &str, id: &str) -> Result<()> {
    let client = QuoteClient::new(base_url);
    let removed = client.delete_quote(id).await?;

    println!("{} Deleted '{}' ({})", "✓".green(), removed.name, removed.id.dimmed());

    Ok(())
}

async fn cmd_export(base_url: &str, output: Option<String>) -> Result<()> {
    let client = QuoteClient::new(base_url);
    let xml = client.export_xml().await?;

    match output {
        Some(path) => {
            fs::write(&path, xml).with_context(|| format!("Failed to write {}", path))?;
            eprintln!("{} Exported to {}", "✓".green(), path);
        }
        // stdout stays clean for piping
        None => println!("{}", xml),
    }

    Ok(())
}

async fn cmd_config(
    mut config: Config,
    set_base_url: Option<String>,
    override_url: Option<String>,
) -> Result<()> {
    if let Some(url) = set_base_url {
        config.base_url = url;
        config.save()?;
        println!("{} Base URL saved", "✓".green());
    }

    println!("{}", "Configuration:".bold());
    println!("  Path: {:?}", Config::config_path()?);
    println!("  Base URL: {}", config.base_url.cyan());

    let base_url = config.resolve_base_url(override_url.as_deref());
    let status = match QuoteClient::new(&base_url).health().await {
        Ok(true) => "reachable".green(),
        Ok(false) => "unhealthy".yellow(),
        Err(_) => "unreachable".red(),
    };
    println!("  Service: {} ({})", status, base_url);

    Ok(())
}

// ============================================
// Helpers
// ============================================

fn prompt_option(catalog: &Catalog, category: ComponentCategory) -> Result<usize> {
    let items: Vec<String> = catalog.options(category).iter().map(option_line).collect();

    Select::new()
        .with_prompt(format!("Select {}", category))
        .items(&items)
        .default(0)
        .interact()
        .with_context(|| format!("Failed to read {} selection", category))
}

fn option_line(option: &CatalogOption) -> String {
    format!("{} ({})", option.label, format_price(option.price))
}

fn format_price(value: f64) -> String {
    format!("${}", value)
}

fn print_quote(quote: &QuoteResponse) {
    println!("  {} {}", "ID:".dimmed(), quote.id);
    println!("  {} {}", "Name:".dimmed(), quote.name.cyan().bold());
    println!("  {} {}", "CPU:".dimmed(), quote.components.cpu);
    println!("  {} {}", "GPU:".dimmed(), quote.components.gpu);
    println!("  {} {}", "RAM:".dimmed(), quote.components.ram);
    println!("  {} {}", "Total:".dimmed(), format_price(quote.total).green());
    println!("  {} {}", "Created:".dimmed(), quote.created_at.to_rfc3339());
    if let Some(updated) = quote.updated_at {
        println!("  {} {}", "Updated:".dimmed(), updated.to_rfc3339());
    }
}
