// src/main.rs

use anyhow::Result;
use clap::{Parser, Subcommand};
use rpminv::extract::collect_from;
use rpminv::schema::CanonicalSchema;
use rpminv::source::header::HeaderRecordSource;
use rpminv::source::sqlite::DEFAULT_DB_PATH;
use rpminv::Extraction;
use tracing::info;

#[derive(Parser)]
#[command(name = "rpminv")]
#[command(author, version, about = "Installed package inventory for RPM systems", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan the installed package database
    Scan {
        /// Package database path (default: /var/lib/rpm/rpmdb.sqlite)
        #[arg(short, long, default_value = DEFAULT_DB_PATH)]
        db_path: String,
        /// Emit the package list as JSON
        #[arg(long)]
        json: bool,
    },
    /// Extract metadata from .rpm package files
    Rpm {
        /// Paths to .rpm files
        #[arg(required = true)]
        paths: Vec<String>,
        /// Emit the package list as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the canonical fields and their types
    Fields,
}

fn print_extraction(extraction: &Extraction, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&extraction.packages)?);
    } else if extraction.packages.is_empty() {
        println!("No packages found.");
    } else {
        println!("Installed packages:");
        for package in &extraction.packages {
            print!("  {} {}", package.package, package.version);
            if !package.release.is_empty() {
                print!("-{}", package.release);
            }
            if !package.architecture.is_empty() {
                print!(" [{}]", package.architecture);
            }
            println!();
        }
        println!("\nTotal: {} package(s)", extraction.packages.len());
    }

    if extraction.has_diagnostics() {
        eprintln!("\n{} field diagnostic(s):", extraction.diagnostics.len());
        for diag in &extraction.diagnostics {
            match &diag.package {
                Some(name) => eprintln!(
                    "  record {} ({}): {}: {}",
                    diag.record,
                    name,
                    diag.field.name(),
                    diag.error
                ),
                None => eprintln!(
                    "  record {}: {}: {}",
                    diag.record,
                    diag.field.name(),
                    diag.error
                ),
            }
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Scan { db_path, json }) => {
            info!("Scanning package database at: {}", db_path);
            let extraction = rpminv::extract_packages(&db_path)?;
            print_extraction(&extraction, json)
        }
        Some(Commands::Rpm { paths, json }) => {
            info!("Extracting metadata from {} package file(s)", paths.len());
            let mut source = HeaderRecordSource::open_paths(&paths)?;
            let extraction = collect_from(&mut source)?;
            print_extraction(&extraction, json)
        }
        Some(Commands::Fields) => {
            let schema = CanonicalSchema::new()?;
            println!("Canonical fields:");
            for spec in schema.fields() {
                print!("  {} ({})", spec.name, spec.field_type.as_str());
                if spec.required {
                    print!(" [required]");
                }
                println!();
            }
            Ok(())
        }
        None => {
            // No command provided, show help
            println!("rpminv v{}", env!("CARGO_PKG_VERSION"));
            println!("Run 'rpminv --help' for usage information");
            Ok(())
        }
    }
}
