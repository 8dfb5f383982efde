//! # Main — CLI Entry Point
//!
//! Routes CLI subcommands to the catalog's outer surfaces.
//!
//! ## Subcommands
//!
//! - `list`: print every project in display order.
//! - `export`: write the catalog as a JSON array to stdout or a file.
//! - `serve`: run the read-only HTTP server.
//!
//! ## Global Options
//!
//! - `--catalog` / `SHOWCASE_CATALOG`: read projects from a TOML file instead
//!   of the embedded table.
//!
//! Logging goes to stderr; `LOG_FORMAT=json` switches to JSON lines and
//! `RUST_LOG` sets the filter (default `info`).

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use showcase::project::{self, Catalog};

#[derive(Parser)]
#[command(name = "showcase", about = "Portfolio project catalog")]
struct Cli {
    /// TOML file of [[projects]] entries to use instead of the built-in table
    #[arg(long, global = true, env = "SHOWCASE_CATALOG")]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every project in display order
    List,
    /// Write the catalog as a JSON array
    Export {
        /// Output file (stdout if not set)
        #[arg(long)]
        out: Option<PathBuf>,
        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },
    /// Serve the catalog over HTTP
    Serve {
        /// Port to listen on
        #[arg(long, env = "SHOWCASE_PORT", default_value_t = 7001)]
        port: u16,
        /// Directory to serve static files from (e.g. the exported site)
        #[arg(long, env = "SHOWCASE_STATIC_DIR")]
        static_dir: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    // Structured logging: LOG_FORMAT=json for log shippers, human-readable otherwise
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if std::env::var("LOG_FORMAT").unwrap_or_default() == "json" {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    }

    let cli = Cli::parse();
    let catalog = load_catalog(&cli)?;

    match &cli.command {
        Commands::List => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            for (i, p) in catalog.iter().enumerate() {
                if i > 0 {
                    writeln!(out)?;
                }
                write!(out, "{}", p)?;
            }
            Ok(())
        }
        Commands::Export { out, pretty } => {
            let json = if *pretty {
                catalog.to_json_pretty()?
            } else {
                catalog.to_json()?
            };
            match out {
                Some(path) => {
                    std::fs::write(path, format!("{}\n", json))
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    info!(path = %path.display(), projects = catalog.len(), "exported catalog");
                }
                None => println!("{}", json),
            }
            Ok(())
        }
        Commands::Serve { port, static_dir } => {
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(showcase::server::run(
                *port,
                catalog,
                static_dir.as_deref(),
            ))
        }
    }
}

fn load_catalog(cli: &Cli) -> Result<Catalog> {
    match &cli.catalog {
        Some(path) => {
            let catalog = project::parse_toml_file(path)?;
            info!(path = %path.display(), projects = catalog.len(), "loaded catalog file");
            Ok(catalog)
        }
        None => Ok(Catalog::embedded()),
    }
}
