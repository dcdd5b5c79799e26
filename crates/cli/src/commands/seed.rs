//! Seeding routines.
//!
//! Every routine catches its own failure: the error is logged and the next
//! routine still runs.

use dashboard_seed::db::Store;
use dashboard_seed::{SeedError, SeedReport, Seeder};
use tracing::{error, info};

use super::RunOptions;

/// What to seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Routine {
    Admins {
        count: Option<usize>,
    },
    Products {
        count: Option<usize>,
    },
    Orders {
        count: Option<usize>,
        min_per_month: Option<usize>,
    },
    /// Admins, products, then orders with configured volumes
    All,
}

/// Run a routine. Returns `false` if anything failed.
pub async fn run(options: &RunOptions, routine: Routine) -> bool {
    let mut seeder = match super::connect(options).await {
        Ok(seeder) => seeder,
        Err(e) => {
            error!(error = %e, "An error occurred");
            return false;
        }
    };

    let succeeded = match routine {
        Routine::All => {
            let admins = admins(&mut seeder, None).await;
            let products = products(&mut seeder, None).await;
            let orders = orders(&mut seeder, None, None).await;
            admins && products && orders
        }
        Routine::Admins { count } => admins(&mut seeder, count).await,
        Routine::Products { count } => products(&mut seeder, count).await,
        Routine::Orders {
            count,
            min_per_month,
        } => orders(&mut seeder, count, min_per_month).await,
    };

    seeder.close().await;
    succeeded
}

async fn admins(seeder: &mut Seeder<Store>, count: Option<usize>) -> bool {
    let count = count.unwrap_or(seeder.config().counts.admins);
    report("admins", seeder.seed_admins(count).await.map(Some))
}

async fn products(seeder: &mut Seeder<Store>, count: Option<usize>) -> bool {
    let count = count.unwrap_or(seeder.config().counts.products);
    report("products", seeder.seed_products(count).await.map(Some))
}

async fn orders(
    seeder: &mut Seeder<Store>,
    count: Option<usize>,
    min_per_month: Option<usize>,
) -> bool {
    let mut plan = seeder.order_plan();
    if let Some(count) = count {
        plan.target = count;
    }
    if let Some(min_per_month) = min_per_month {
        plan.min_per_month = min_per_month;
    }
    report("orders", seeder.seed_orders(&plan).await)
}

fn report(routine: &str, result: Result<Option<SeedReport>, SeedError>) -> bool {
    match result {
        Ok(Some(report)) => {
            info!(
                routine,
                deleted = report.deleted,
                inserted = report.inserted,
                "Routine finished"
            );
            true
        }
        Ok(None) => {
            info!(routine, "Routine skipped");
            true
        }
        Err(e) => {
            error!(routine, error = %e, "An error occurred");
            false
        }
    }
}
