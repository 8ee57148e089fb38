//! # Summit Register CLI (`summit`)
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `summit init` | Create the SQLite database and run schema migrations |
//! | `summit import <file>` | Seed hikes from a JSON array |
//! | `summit export` | Dump the catalog as JSON |
//! | `summit list` | Show every hike (or `--completed` ones) |
//! | `summit search ...` | Filter hikes by keyword, ranges, difficulty, travel time |
//! | `summit show <id-or-name>` | Show one hike in detail |
//! | `summit annotate <id-or-name>` | Stage notes/completion edits (not persisted) |
//! | `summit stats` | Catalog summary |
//!
//! ## Examples
//!
//! ```bash
//! # Hikes of at most 8 miles, no harder than Moderate, within 2 hours
//! summit search --distance le:8 --difficulty moderate --travel 2
//!
//! # Sort by distance, then click the header again for descending
//! summit search --keyword lake --sort distance --sort distance
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use summit_core::annotation::Annotation;
use summit_core::criteria::CriteriaInput;
use summit_core::sort::Column;
use summit_register::{
    annotate, config, export, get, import, list, logging, migrate, search, stats,
};

/// Summit Register: browse, filter, sort and annotate a personal catalog
/// of hiking trails.
#[derive(Parser)]
#[command(
    name = "summit",
    about = "Summit Register: browse, filter and sort a personal hiking-trail catalog",
    version
)]
struct Cli {
    /// Path to configuration file (TOML).
    #[arg(long, global = true, default_value = "./config/summit.toml")]
    config: PathBuf,

    /// Enable debug logging on stderr (overridden by RUST_LOG).
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the database schema.
    ///
    /// Creates the SQLite database file and the `hikes` table.
    /// Safe to run more than once.
    Init,

    /// Seed or update hikes from a JSON file (upsert by id).
    Import {
        /// Path to a JSON array of hike records.
        file: PathBuf,
    },

    /// Export the catalog as JSON.
    Export {
        /// Write to this file instead of stdout.
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// List hikes.
    List {
        /// Only hikes marked completed.
        #[arg(long)]
        completed: bool,

        #[command(flatten)]
        view: ViewArgs,
    },

    /// Search hikes by one or more criteria.
    ///
    /// All supplied criteria must hold. At least one is required.
    Search {
        /// Case-insensitive text matched against name, area and notes.
        #[arg(long, short)]
        keyword: Option<String>,

        /// Total distance in miles, as `ge:N` or `le:N`.
        #[arg(long, allow_hyphen_values = true)]
        distance: Option<String>,

        /// Elevation gain in feet, as `ge:N` or `le:N`.
        #[arg(long, allow_hyphen_values = true)]
        gain: Option<String>,

        /// Maximum elevation in feet, as `ge:N` or `le:N`.
        #[arg(long, allow_hyphen_values = true)]
        max_elevation: Option<String>,

        /// Hardest difficulty to include: easy, moderate, hard, expert.
        #[arg(long)]
        difficulty: Option<String>,

        /// Longest travel time from home to include, in hours: 1, 2, 3 or 4.
        #[arg(long)]
        travel: Option<String>,

        #[command(flatten)]
        view: ViewArgs,
    },

    /// Show one hike by id or exact name.
    Show {
        /// Hike id or name.
        hike: String,

        /// Print the record as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Stage notes or completion edits for a hike.
    ///
    /// Edits are validated and echoed but not written to the database.
    Annotate {
        /// Hike id or name.
        hike: String,

        #[arg(long)]
        notes: Option<String>,

        #[arg(long)]
        completed: Option<bool>,
    },

    /// Print a summary of the catalog.
    Stats,
}

/// Table options shared by `list` and `search`.
#[derive(clap::Args)]
struct ViewArgs {
    /// Click a column header. Repeat to click again; the same column
    /// twice sorts descending. Columns: complete, name, distance, gain,
    /// max-elevation, prominence, difficulty, area, travel.
    #[arg(long = "sort", value_parser = parse_column)]
    sort: Vec<Column>,

    /// Print records as JSON instead of a table.
    #[arg(long)]
    json: bool,
}

fn parse_column(s: &str) -> Result<Column, String> {
    s.parse::<Column>().map_err(|e| e.to_string())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let cfg = config::load_config(&cli.config)?;

    match cli.command {
        Commands::Init => {
            migrate::run_migrations(&cfg).await?;
            println!("Database initialized successfully.");
        }
        Commands::Import { file } => {
            import::run_import(&cfg, &file).await?;
        }
        Commands::Export { output } => {
            export::run_export(&cfg, output.as_deref()).await?;
        }
        Commands::List { completed, view } => {
            list::run_list(&cfg, completed, &view.sort, view.json).await?;
        }
        Commands::Search {
            keyword,
            distance,
            gain,
            max_elevation,
            difficulty,
            travel,
            view,
        } => {
            let input = CriteriaInput {
                keyword,
                distance,
                elevation_gain: gain,
                max_elevation,
                max_difficulty: difficulty,
                max_travel_tier: travel,
            };
            search::run_search(&cfg, input, &view.sort, view.json).await?;
        }
        Commands::Show { hike, json } => {
            get::run_show(&cfg, &hike, json).await?;
        }
        Commands::Annotate {
            hike,
            notes,
            completed,
        } => {
            annotate::run_annotate(&cfg, &hike, Annotation { notes, completed }).await?;
        }
        Commands::Stats => {
            stats::run_stats(&cfg).await?;
        }
    }

    Ok(())
}
