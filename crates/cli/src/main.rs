//! Dashboard seed CLI - fill the admin dashboard's database with sample data.
//!
//! # Usage
//!
//! ```bash
//! # Seed everything: admins, products, then orders
//! dbseed all
//!
//! # Reseed only the products, without downloading the placeholder image
//! dbseed --offline products --count 200
//!
//! # Orders with at least 10 per month, reproducibly
//! dbseed --seed 7 orders --count 500 --min-per-month 10
//!
//! # Generate into memory and report, without touching the database
//! dbseed --dry-run all
//!
//! # Document counts per collection
//! dbseed stats
//! ```
//!
//! Configuration comes from the environment (and `.env`); see
//! `dashboard_seed::config`. Failures are logged and the process exits 0
//! unless `--strict` is given.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

use commands::{RunOptions, seed::Routine};

#[derive(Parser)]
#[command(name = "dbseed")]
#[command(author, version, about = "Seed the admin dashboard database with sample data")]
struct Cli {
    /// Fixed RNG seed (overrides `SEED_RNG_SEED`)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Never make HTTP requests; use fallback images
    #[arg(long, global = true)]
    offline: bool,

    /// Write to an in-memory store instead of the database
    #[arg(long, global = true)]
    dry_run: bool,

    /// Exit with status 1 if any routine fails
    #[arg(long, global = true)]
    strict: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replace the admins (master admin plus random admins)
    Admins {
        /// Random admins to generate (default: `SEED_ADMIN_COUNT`)
        #[arg(short, long)]
        count: Option<usize>,
    },
    /// Replace the products
    Products {
        /// Products to generate (default: `SEED_PRODUCT_COUNT`)
        #[arg(short, long)]
        count: Option<usize>,
    },
    /// Replace the orders, using the stored products
    Orders {
        /// Order total target (default: `SEED_ORDER_COUNT`)
        #[arg(short, long)]
        count: Option<usize>,

        /// Minimum orders per month (default: `SEED_MIN_ORDERS_PER_MONTH`)
        #[arg(long)]
        min_per_month: Option<usize>,
    },
    /// Run admins, products and orders in order
    All,
    /// Show document counts per collection
    Stats,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env before tracing so RUST_LOG / SEED_LOG_JSON can come from it
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let options = RunOptions {
        rng_seed: cli.seed,
        offline: cli.offline,
        dry_run: cli.dry_run,
    };

    let succeeded = match cli.command {
        Commands::Admins { count } => commands::seed::run(&options, Routine::Admins { count }).await,
        Commands::Products { count } => {
            commands::seed::run(&options, Routine::Products { count }).await
        }
        Commands::Orders {
            count,
            min_per_month,
        } => {
            commands::seed::run(
                &options,
                Routine::Orders {
                    count,
                    min_per_month,
                },
            )
            .await
        }
        Commands::All => commands::seed::run(&options, Routine::All).await,
        Commands::Stats => commands::stats::run(&options).await,
    };

    if !succeeded && cli.strict {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn init_tracing() {
    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "dashboard_seed=info,dbseed=info".into());
    let json = std::env::var("SEED_LOG_JSON").is_ok_and(|value| !value.is_empty());

    let registry = tracing_subscriber::registry().with(env_filter);
    if json {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
