//! cropdoc command-line front end
//!
//! Serves the HTTP API, or answers catalog questions offline.
//!
//! Usage:
//!   cropdoc serve --config cropdoc.toml
//!   cropdoc match dark brown spots with yellow halo
//!   cropdoc diseases --plant tomato
//!   cropdoc stats

use std::{
    net::SocketAddr,
    path::{Path, PathBuf},
};

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cropdoc_api::ServerConfig;
use cropdoc_catalog::Catalog;
use cropdoc_contracts::{
    disease::Severity,
    error::{CropdocError, CropdocResult},
    matching::MatchResult,
};
use cropdoc_core::{match_symptoms, search};

// ── CLI definition ────────────────────────────────────────────────────────────

/// cropdoc: plant disease lookup by symptom description.
#[derive(Parser)]
#[command(
    name = "cropdoc",
    version,
    about = "Plant disease catalog and symptom matcher",
    long_about = "Serves the cropdoc HTTP API, or queries the disease catalog\n\
                  directly from the command line."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP API until Ctrl+C or SIGTERM.
    Serve {
        /// TOML configuration file.
        #[arg(long)]
        config: Option<PathBuf>,
        /// Listen address, overriding config and CROPDOC_BIND.
        #[arg(long)]
        bind: Option<SocketAddr>,
        /// Catalog TOML file, overriding config.
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
    /// Rank diseases against a symptom description.
    Match {
        /// Symptom description; multiple words are joined with spaces.
        #[arg(required = true)]
        symptoms: Vec<String>,
        /// Catalog TOML file (built-in catalog by default).
        #[arg(long)]
        catalog: Option<PathBuf>,
        /// Print results as JSON.
        #[arg(long)]
        json: bool,
    },
    /// List catalog diseases, optionally for one plant.
    Diseases {
        #[arg(long)]
        plant: Option<String>,
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
    /// Print catalog statistics.
    Stats {
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
}

// ── Entry point ───────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Set RUST_LOG=debug for verbose output.
    let default_level = match cli.command {
        Command::Serve { .. } => "info",
        _ => "warn",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .compact()
        .init();

    let result = match cli.command {
        Command::Serve {
            config,
            bind,
            catalog,
        } => run_serve(config, bind, catalog).await,
        Command::Match {
            symptoms,
            catalog,
            json,
        } => run_match(&symptoms.join(" "), catalog.as_deref(), json),
        Command::Diseases { plant, catalog } => run_diseases(plant.as_deref(), catalog.as_deref()),
        Command::Stats { catalog } => run_stats(catalog.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("cropdoc error: {}", e);
        std::process::exit(1);
    }
}

// ── Commands ──────────────────────────────────────────────────────────────────

async fn run_serve(
    config_path: Option<PathBuf>,
    bind: Option<SocketAddr>,
    catalog: Option<PathBuf>,
) -> CropdocResult<()> {
    let mut config = ServerConfig::load(config_path.as_deref())?;
    if let Some(bind) = bind {
        config.bind = bind;
    }
    if catalog.is_some() {
        config.catalog_path = catalog;
    }

    cropdoc_api::serve(config).await
}

fn run_match(symptoms: &str, catalog_path: Option<&Path>, json: bool) -> CropdocResult<()> {
    let catalog = load_catalog(catalog_path)?;
    let results = match_symptoms(symptoms, catalog.records())?;

    if json {
        let rendered = serde_json::to_string_pretty(&results).map_err(|e| {
            CropdocError::ServerError {
                reason: format!("failed to render results: {}", e),
            }
        })?;
        println!("{rendered}");
        return Ok(());
    }

    if results.is_empty() {
        println!("No matching diseases.");
        return Ok(());
    }

    print_match_table(&results);
    Ok(())
}

fn run_diseases(plant: Option<&str>, catalog_path: Option<&Path>) -> CropdocResult<()> {
    let catalog = load_catalog(catalog_path)?;
    let diseases = match plant {
        Some(plant) => search::by_plant(plant, catalog.records()),
        None => catalog.records().iter().collect(),
    };

    for disease in &diseases {
        println!(
            "{:<24} {:<28} {:<18} {}",
            disease.id, disease.name, disease.severity, disease.plant
        );
    }
    println!("{} disease(s)", diseases.len());
    Ok(())
}

fn run_stats(catalog_path: Option<&Path>) -> CropdocResult<()> {
    let catalog = load_catalog(catalog_path)?;
    let stats = catalog.statistics();

    println!("Total diseases: {}", stats.total_diseases);
    println!("Severity distribution:");
    for severity in Severity::ALL {
        println!(
            "  {:<18} {}",
            severity.label(),
            stats.severity_distribution.get(severity)
        );
    }
    Ok(())
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn load_catalog(path: Option<&Path>) -> CropdocResult<Catalog> {
    match path {
        Some(path) => Catalog::from_file(path),
        None => Catalog::builtin(),
    }
}

fn print_match_table(results: &[MatchResult<'_>]) {
    println!("{:<28} {:>7} {:>9}", "DISEASE", "MATCHED", "PERCENT");
    for result in results {
        println!(
            "{:<28} {:>3}/{:<3} {:>8}%",
            result.disease.name, result.match_count, result.total_symptoms, result.match_percentage
        );
        for symptom in &result.matched_symptoms {
            println!("    - {symptom}");
        }
    }
}
