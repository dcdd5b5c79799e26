//! Collection statistics.

use tracing::{error, info};

use super::RunOptions;

/// Log the document count of every collection. Returns `false` on failure.
pub async fn run(options: &RunOptions) -> bool {
    let seeder = match super::connect(options).await {
        Ok(seeder) => seeder,
        Err(e) => {
            error!(error = %e, "An error occurred");
            return false;
        }
    };

    let succeeded = match seeder.stats().await {
        Ok(stats) => {
            for (collection, count) in stats {
                info!(%collection, count, "Collection size");
            }
            true
        }
        Err(e) => {
            error!(error = %e, "An error occurred");
            false
        }
    };

    seeder.close().await;
    succeeded
}
