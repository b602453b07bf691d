/// A CLI to maintain the exam question bank data layer.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// The command to execute. If no command is given, help is shown.
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Fills missing topic labels in static question bank JSON files, in place.
    #[command(name = "annotate", alias = "a")]
    Annotate {
        /// Bank files to annotate. A directory expands to its *.json files.
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },

    /// Copies topics from a bank file into the question store, fill-only.
    Backfill {
        /// Category slug or display name to backfill.
        category: String,
        /// The source bank JSON file.
        path: PathBuf,
        /// Connection string for the question store.
        #[arg(long, env = "DATABASE_URL")]
        database_url: String,
    },

    /// Recomputes per-category question totals in the store.
    Recount {
        /// Connection string for the question store.
        #[arg(long, env = "DATABASE_URL")]
        database_url: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        // If no command was given, print help.
        Cli::parse_from(["", "--help"]);
        return Ok(());
    };

    match command {
        Commands::Annotate { paths } => {
            println!("\n--- Starting Topic Annotation ---");
            let report = annotate_paths(&paths)?;
            println!(
                "--- Annotation Finished: {} file(s), {} record(s) newly classified ---",
                report.files, report.updated
            );
            if report.failed > 0 {
                anyhow::bail!("{} file(s) could not be annotated", report.failed);
            }
        }

        Commands::Backfill {
            category,
            path,
            database_url,
        } => {
            let pool = connect(&database_url).await?;
            println!("\n--- Starting Topic Backfill ---");
            let report = backfill_category(&pool, &category, &path).await?;
            println!(
                "--- Backfill Finished: {} updated, {} skipped, {} missing ---",
                report.updated, report.skipped, report.missing
            );
        }

        Commands::Recount { database_url } => {
            let pool = connect(&database_url).await?;
            println!("\n--- Recounting Category Totals ---");
            let report = recount_all(&pool).await?;
            println!(
                "--- Recount Finished: {} categories updated ---",
                report.categories_updated
            );
        }
    }

    Ok(())
}

/// Opens a pool to the externally-owned question store.
///
/// The store must already exist with its schema in place; this tool never
/// creates or migrates it.
async fn connect(database_url: &str) -> anyhow::Result<SqlitePool> {
    let options = database_url
        .parse::<sqlx::sqlite::SqliteConnectOptions>()?
        .busy_timeout(Duration::from_secs(5));
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
        .with_context(|| format!("Failed to connect to the question store at '{}'", database_url))?;

    Ok(pool)
}

pub mod annotate;
pub mod backfill;
pub mod categories;
pub mod db;
pub mod error;
pub mod question_bank;
pub mod recount;
pub mod topics;

use crate::annotate::annotate_paths;
use crate::backfill::backfill_category;
use crate::recount::recount_all;
use anyhow::Context;
use clap::Parser;
use clap::Subcommand;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use std::path::PathBuf;
use std::time::Duration;
