//! Habitability CLI - score planet designs and browse archive snapshots.
//!
//! Planet files use the sandbox form's field names and may be JSON or TOML:
//!
//! ```toml
//! name = "Kepler-442 b"
//! type = "terrestrial"
//! mass = 2.3
//! radius = 1.34
//! distance = 0.41
//! starType = "red-dwarf"
//! atmosphere = "nitrogen-oxygen"
//! waterCoverage = 60
//! magneticField = true
//! tectonicActivity = true
//! axialTilt = 20
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use exoplanet_archive::{ApiResponse, ArchiveConfig, Catalog, StaticSource, TapQuery};
use habitability::{PlanetConfig, PlanetExport, evaluate};

mod report;

use report::Report;

/// Planet habitability scoring.
#[derive(Parser)]
#[command(name = "habitability")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a planet design and print the factor breakdown.
    Evaluate {
        /// Planet file (.json or .toml); the Earth-like design if omitted.
        planet: Option<PathBuf>,

        /// Print the assessment as JSON instead of a report.
        #[arg(long)]
        json: bool,
    },

    /// Write a planet design with its results to `<name>.json`.
    Export {
        /// Planet file (.json or .toml); the Earth-like design if omitted.
        planet: Option<PathBuf>,

        /// Output directory.
        #[arg(short, long, default_value = ".")]
        output: PathBuf,
    },

    /// Catalog summaries from a saved archive response.
    Archive {
        #[command(subcommand)]
        command: ArchiveCommand,

        /// Archive settings (TOML).
        #[arg(short, long, global = true)]
        config: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum ArchiveCommand {
    /// List the most recent discoveries.
    List {
        /// Archive JSON response (array of records).
        records: PathBuf,

        /// Number of planets; non-numeric values fall back to the default.
        #[arg(short, long)]
        limit: Option<String>,
    },

    /// Look up one planet by (partial) name.
    Search {
        /// Archive JSON response (array of records).
        records: PathBuf,

        /// Planet name to search for.
        name: String,
    },

    /// Print the archive request URL for a query.
    Url {
        /// Search by name instead of listing recent discoveries.
        #[arg(long)]
        name: Option<String>,

        /// Number of recent discoveries.
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Evaluate { planet, json } => {
            let config = load_planet(planet.as_deref())?;
            let assessment = evaluate(&config);
            if json {
                println!("{}", serde_json::to_string_pretty(&assessment)?);
            } else {
                print!("{}", Report::new(&config, &assessment));
            }
        }

        Commands::Export { planet, output } => {
            let config = load_planet(planet.as_deref())?;
            let export = PlanetExport::new(&config, &evaluate(&config));

            fs::create_dir_all(&output)
                .with_context(|| format!("Failed to create {}", output.display()))?;
            let path = output.join(export.file_name());
            fs::write(&path, export.to_json_pretty()?)
                .with_context(|| format!("Failed to write {}", path.display()))?;

            info!(path = %path.display(), score = export.habitability, "exported planet");
            println!("Exported {} to {}", config.name, path.display());
        }

        Commands::Archive { command, config } => {
            let config = load_archive_config(config.as_deref())?;
            run_archive(command, config)?;
        }
    }

    Ok(())
}

fn run_archive(command: ArchiveCommand, config: ArchiveConfig) -> Result<()> {
    match command {
        ArchiveCommand::List { records, limit } => {
            let catalog = Catalog::new(load_source(&records)?, config);
            let limit = catalog.parse_limit(limit.as_deref());
            print_response(&catalog.list(Some(limit)))
        }

        ArchiveCommand::Search { records, name } => {
            let catalog = Catalog::new(load_source(&records)?, config);
            print_response(&catalog.search(Some(&name)))
        }

        ArchiveCommand::Url { name, limit } => {
            let query = match name {
                Some(name) => TapQuery::by_name(name),
                None => TapQuery::recent(limit.unwrap_or(config.default_limit)),
            };
            println!("{}", query.url(&config.base_url)?);
            Ok(())
        }
    }
}

/// Print the response body; failed responses also fail the command
fn print_response<T: Serialize>(response: &ApiResponse<T>) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(response)?);
    if !response.is_success() {
        bail!(
            "{} (status {})",
            response.error.as_deref().unwrap_or("request failed"),
            response.status
        );
    }
    Ok(())
}

fn load_planet(path: Option<&Path>) -> Result<PlanetConfig> {
    let Some(path) = path else {
        return Ok(PlanetConfig::earth_like());
    };

    let contents =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;

    let config = match path.extension().and_then(|e| e.to_str()) {
        Some("toml") => toml::from_str(&contents)
            .with_context(|| format!("Invalid planet file {}", path.display()))?,
        _ => serde_json::from_str(&contents)
            .with_context(|| format!("Invalid planet file {}", path.display()))?,
    };
    Ok(config)
}

fn load_archive_config(path: Option<&Path>) -> Result<ArchiveConfig> {
    match path {
        Some(path) => {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            ArchiveConfig::from_toml_str(&contents)
                .with_context(|| format!("Invalid archive config {}", path.display()))
        }
        None => Ok(ArchiveConfig::default()),
    }
}

fn load_source(path: &Path) -> Result<StaticSource> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let source = StaticSource::from_json(&contents)
        .with_context(|| format!("Invalid archive records {}", path.display()))?;
    info!(records = source.len(), "loaded archive snapshot");
    Ok(source)
}
