//! # fastfood
//!
//! Command line front-end for the importers and exporters.
//!
//! ```bash
//! fastfood import-employees employees.json
//! fastfood import-items items.json
//! fastfood import-orders orders.xml
//! fastfood export-orders --employee "Avery Quinn" --order-type ToGo
//! fastfood export-categories "Grill,Beverages"
//! ```
//!
//! Reports go to stdout, logs to stderr (`RUST_LOG` overrides the filter).

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use fastfood_db::Database;
use fastfood_processor::{exporter, importer, AppConfig, ProcessorError};

const DEFAULT_LOG_FILTER: &str = "info,fastfood=debug,sqlx=warn";

#[derive(Parser, Debug)]
#[command(name = "fastfood", version, about = "FastFood data importer/exporter")]
struct Cli {
    /// Database file (overrides FASTFOOD_DB_PATH)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Import employees from a JSON file
    ImportEmployees { file: PathBuf },

    /// Import menu items from a JSON file
    ImportItems { file: PathBuf },

    /// Import orders from an XML file
    ImportOrders { file: PathBuf },

    /// Export an employee's orders of one type as JSON
    ExportOrders {
        #[arg(long)]
        employee: String,

        /// ForHere or ToGo
        #[arg(long)]
        order_type: String,
    },

    /// Export the most popular item per category as XML
    ExportCategories {
        /// Comma-separated category names
        categories: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let mut config = AppConfig::load().map_err(ProcessorError::from)?;
    if let Some(path) = cli.db {
        config = config.with_db_path(path);
    }
    info!(db = %config.db_path.display(), "Configuration loaded");

    let db = Database::new(config.db_config())
        .await
        .context("failed to open database")?;

    let (total, applied) = db
        .migration_status()
        .await
        .context("failed to read migration status")?;
    info!(applied, total, "Database ready");

    let output = match cli.command {
        Command::ImportEmployees { file } => {
            importer::import_employees(&db, &read_input(&file)?).await?
        }
        Command::ImportItems { file } => importer::import_items(&db, &read_input(&file)?).await?,
        Command::ImportOrders { file } => importer::import_orders(&db, &read_input(&file)?).await?,
        Command::ExportOrders {
            employee,
            order_type,
        } => exporter::export_orders_by_employee(&db, &employee, &order_type).await?,
        Command::ExportCategories { categories } => {
            exporter::export_category_statistics(&db, &categories).await?
        }
    };

    println!("{}", output);

    db.close().await;
    Ok(())
}

/// Logs to stderr so stdout carries only the report.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn read_input(path: &Path) -> anyhow::Result<String> {
    let contents = std::fs::read_to_string(path)
        .map_err(ProcessorError::from)
        .with_context(|| format!("failed to read {}", path.display()))?;
    Ok(contents)
}
