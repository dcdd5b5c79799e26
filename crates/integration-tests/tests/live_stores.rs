//! Seeding against real databases.
//!
//! These tests require:
//! - `SEED_TEST_MONGO_URI` pointing at a disposable MongoDB server
//! - `SEED_TEST_POSTGRES_URI` pointing at a disposable `PostgreSQL` database
//!
//! Run with: cargo test -p dashboard-seed-integration-tests -- --ignored

#![allow(clippy::unwrap_used, clippy::expect_used)]

use dashboard_seed::db::{Collection, DocumentStore, Store};
use dashboard_seed_integration_tests::{offline_seeder, test_config};

async fn seed_and_check(uri: &str, db_name: &str) {
    let config = test_config(&[
        ("MONGO_URI", uri),
        ("MONGO_DB_NAME", db_name),
        ("SEED_ORDER_WINDOW_START", "2024-01"),
        ("SEED_ORDER_WINDOW_END", "2024-04"),
    ]);
    let store = Store::connect(&config.database)
        .await
        .expect("database reachable");
    let mut seeder = offline_seeder(store, config);

    seeder.seed_admins(5).await.unwrap();
    seeder.seed_products(10).await.unwrap();
    let plan = dashboard_seed::generate::OrderPlan {
        target: 20,
        min_per_month: 2,
        ..seeder.order_plan()
    };
    let report = seeder.seed_orders(&plan).await.unwrap().unwrap();

    assert_eq!(seeder.store().count(Collection::Admins).await.unwrap(), 6);
    assert_eq!(seeder.store().count(Collection::Products).await.unwrap(), 10);
    assert_eq!(
        seeder.store().count(Collection::Orders).await.unwrap(),
        report.inserted
    );

    // A second run replaces rather than appends
    let again = seeder.seed_products(4).await.unwrap();
    assert_eq!(again.deleted, 10);
    assert_eq!(seeder.store().count(Collection::Products).await.unwrap(), 4);

    seeder.close().await;
}

#[tokio::test]
#[ignore = "requires SEED_TEST_MONGO_URI"]
async fn test_mongo_store() {
    let uri = std::env::var("SEED_TEST_MONGO_URI").expect("SEED_TEST_MONGO_URI set");
    seed_and_check(&uri, "dashboard_seed_test").await;
}

#[tokio::test]
#[ignore = "requires SEED_TEST_POSTGRES_URI"]
async fn test_postgres_store() {
    let uri = std::env::var("SEED_TEST_POSTGRES_URI").expect("SEED_TEST_POSTGRES_URI set");
    seed_and_check(&uri, "dashboard_seed_test").await;
}
