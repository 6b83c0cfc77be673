//! `qanit`: chapter selection from the command line or over HTTP.
//!
//! ```bash
//! qanit search --catalog data/chapters.csv --verses 100
//! qanit search --catalog data/chapters.csv --verses 40 --tolerance 0 --json
//! qanit serve --catalog data/chapters.csv --port 8080
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

mod server;

use std::net::IpAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use qanit_harness::config::RunConfig;
use qanit_harness::loader::{load_catalog, CatalogColumns};
use qanit_harness::runner::run_selection;
use qanit_kernel::carrier::catalog::Catalog;

#[derive(Parser)]
#[command(name = "qanit")]
#[command(about = "Select chapters whose verse total lands near a target")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one selection and print the chosen chapters
    Search {
        #[command(flatten)]
        catalog: CatalogArgs,

        /// Target verse count
        #[arg(long)]
        verses: u64,

        #[command(flatten)]
        search: SearchArgs,

        /// Print the canonical JSON report instead of labels
        #[arg(long)]
        json: bool,
    },

    /// Serve selections over HTTP (`POST /api/data`)
    Serve {
        #[command(flatten)]
        catalog: CatalogArgs,

        /// Address to bind
        #[arg(long, default_value = "0.0.0.0")]
        bind: IpAddr,

        /// Port to listen on
        #[arg(long, env = "PORT", default_value_t = 5000)]
        port: u16,

        #[command(flatten)]
        search: SearchArgs,
    },
}

#[derive(Args)]
struct CatalogArgs {
    /// Chapter table (CSV with a header row)
    #[arg(long)]
    catalog: PathBuf,

    /// Column holding the chapter id
    #[arg(long, default_value_t = 0)]
    id_column: usize,

    /// Column holding the chapter name
    #[arg(long, default_value_t = 1)]
    label_column: usize,

    /// Column holding the verse count
    #[arg(long, default_value_t = 3)]
    verses_column: usize,

    /// Column holding the word count
    #[arg(long, default_value_t = 4)]
    words_column: usize,
}

impl CatalogArgs {
    fn load(&self) -> Result<Catalog> {
        let columns = CatalogColumns {
            id: self.id_column,
            label: self.label_column,
            quantity: self.verses_column,
            side_cost: self.words_column,
        };
        load_catalog(&self.catalog, &columns)
            .with_context(|| format!("loading catalog {}", self.catalog.display()))
    }
}

#[derive(Args)]
struct SearchArgs {
    /// Goal band width above the target
    #[arg(long)]
    tolerance: Option<u64>,

    /// Overshoot pruning multiple of the tolerance
    #[arg(long)]
    prune_multiplier: Option<u64>,

    /// Goal nodes to collect before choosing
    #[arg(long)]
    solution_cutoff: Option<usize>,

    /// Maximum selection length
    #[arg(long)]
    max_depth: Option<u32>,

    /// Stop after expanding this many nodes (`serve` defaults to a bound)
    #[arg(long)]
    max_expansions: Option<u64>,

    /// Search strategy
    #[arg(long)]
    strategy: Option<String>,
}

impl SearchArgs {
    fn to_config(&self) -> RunConfig {
        RunConfig {
            tolerance: self.tolerance,
            prune_multiplier: self.prune_multiplier,
            solution_cutoff: self.solution_cutoff,
            max_depth: self.max_depth,
            max_expansions: self.max_expansions,
            strategy: self.strategy.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Search {
            catalog,
            verses,
            search,
            json,
        } => {
            let catalog = catalog.load()?;
            let config = search.to_config();
            // Reject bad flags before spending time on a search.
            config.resolve().context("invalid search options")?;
            run_search(&catalog, verses, &config, json)
        }
        Commands::Serve {
            catalog,
            bind,
            port,
            search,
        } => {
            let catalog = catalog.load()?;
            let state = server::AppState::new(catalog, search.to_config());
            state.config.resolve().context("invalid search options")?;
            server::serve(state, (bind, port).into()).await
        }
    }
}

fn run_search(catalog: &Catalog, verses: u64, config: &RunConfig, json: bool) -> Result<()> {
    let Some(report) = run_selection(catalog, verses, config)? else {
        println!("No chapter selection reaches {verses} verses.");
        return Ok(());
    };

    if json {
        let bytes = report
            .to_canonical_json_bytes()
            .context("serializing report")?;
        println!("{}", String::from_utf8_lossy(&bytes));
    } else {
        println!("Chapters: {}", report.labels.join(", "));
        println!(
            "Verses: {} (target {}, tolerance {})",
            report.quantity, report.goal_quantity, report.tolerance
        );
        println!("Words: {}", report.side_cost);
    }
    Ok(())
}
