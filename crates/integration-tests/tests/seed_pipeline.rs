//! Every seeding routine end to end against the in-memory store.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use std::collections::{HashMap, HashSet};

use chrono::{NaiveDate, Utc};
use dashboard_seed::db::{Collection, Document, MemoryStore};
use dashboard_seed::generate::OrderPlan;
use dashboard_seed::generate::window::YearMonth;
use dashboard_seed::models::{Admin, Order, Product};
use dashboard_seed::services::verify_password;
use dashboard_seed_core::{PhoneNumber, Price};
use dashboard_seed_integration_tests::{documents, offline_seeder, test_config};
use serde_json::Map;

fn leftover(id: &str) -> Document {
    Document {
        id: id.to_string(),
        fields: Map::new(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn is_malaysian_mobile(phone: &str) -> bool {
    // ^\+6001[0-9][0-9]{7}$
    phone
        .strip_prefix("+6001")
        .is_some_and(|rest| rest.len() == 8 && rest.chars().all(|c| c.is_ascii_digit()))
}

#[tokio::test]
async fn test_seed_all_on_memory_store() {
    let store = MemoryStore::new();
    let config = test_config(&[
        ("SEED_ADMIN_COUNT", "15"),
        ("SEED_PRODUCT_COUNT", "40"),
        ("SEED_ORDER_COUNT", "300"),
        ("SEED_MIN_ORDERS_PER_MONTH", "8"),
    ]);
    let mut seeder = offline_seeder(store.clone(), config);

    assert_eq!(seeder.seed_admins(15).await.unwrap().inserted, 16);
    assert_eq!(seeder.seed_products(40).await.unwrap().inserted, 40);
    let plan = seeder.order_plan();
    let report = seeder.seed_orders(&plan).await.unwrap().unwrap();
    assert!(report.inserted >= 300);

    let stats: HashMap<_, _> = seeder.stats().await.unwrap().into_iter().collect();
    assert_eq!(stats[&Collection::Admins], 16);
    assert_eq!(stats[&Collection::Products], 40);
    assert_eq!(stats[&Collection::Orders], report.inserted);
}

#[tokio::test]
async fn test_admin_documents() {
    let store = MemoryStore::new();
    let mut seeder = offline_seeder(store.clone(), test_config(&[]));
    seeder.seed_admins(25).await.unwrap();

    let admins: Vec<Admin> = documents(&store, Collection::Admins)
        .await
        .iter()
        .map(|d| d.decode().unwrap())
        .collect();
    assert_eq!(admins.len(), 26);

    let master = admins.iter().find(|a| a.is_master()).unwrap();
    assert_eq!(master.username, "master_admin");
    assert_eq!(master.email.as_str(), "masteradmin@gmail.com");
    assert_eq!(master.phone_number, "None");
    assert!(verify_password("password", &master.password));

    for admin in admins.iter().filter(|a| !a.is_master()) {
        let expected = format!(
            "{}.{}@gmail.com",
            admin.first_name.to_lowercase(),
            admin.last_name.to_lowercase()
        );
        assert_eq!(admin.email.as_str(), expected);
        assert!(is_malaysian_mobile(&admin.phone_number), "{}", admin.phone_number);
        assert!(PhoneNumber::parse(&admin.phone_number).is_ok());
        assert!(admin.password.starts_with("$2b$"));
    }

    let usernames: HashSet<_> = admins.iter().map(|a| a.username.as_str()).collect();
    assert_eq!(usernames.len(), admins.len());
}

#[tokio::test]
async fn test_stored_documents_carry_id_and_version() {
    let store = MemoryStore::new();
    let mut seeder = offline_seeder(store.clone(), test_config(&[]));
    seeder.seed_products(3).await.unwrap();

    for stored in documents(&store, Collection::Products).await {
        assert_eq!(stored.fields["id"], stored.id.as_str());
        assert_eq!(stored.fields["__v"], 0);
        assert!(stored.id.starts_with("PRODUCT-"));
    }
}

#[tokio::test]
async fn test_product_documents() {
    let store = MemoryStore::new();
    let mut seeder = offline_seeder(store.clone(), test_config(&[]));
    seeder.seed_products(200).await.unwrap();

    let products: Vec<Product> = documents(&store, Collection::Products)
        .await
        .iter()
        .map(|d| d.decode().unwrap())
        .collect();
    assert_eq!(products.len(), 200);

    let ids: HashSet<_> = products.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids.len(), 200);
    for product in &products {
        assert!(product.price >= Price::from_cents(1));
        assert!(product.price <= Price::from_cents(5_000));
        assert!(product.stock <= 250);
    }
}

#[tokio::test]
async fn test_order_totals_and_monthly_minimum() {
    let store = MemoryStore::new();
    let mut seeder = offline_seeder(store.clone(), test_config(&[]));
    seeder.seed_products(50).await.unwrap();
    let plan = OrderPlan {
        target: 400,
        min_per_month: 12,
        ..seeder.order_plan()
    };
    seeder.seed_orders(&plan).await.unwrap().unwrap();

    let prices: HashMap<String, Price> = documents(&store, Collection::Products)
        .await
        .iter()
        .map(|d| {
            let product: Product = d.decode().unwrap();
            (product.id.to_string(), product.price)
        })
        .collect();
    let orders: Vec<Order> = documents(&store, Collection::Orders)
        .await
        .iter()
        .map(|d| d.decode().unwrap())
        .collect();

    assert!(orders.len() >= 400);
    assert!(orders.len() <= plan.max_orders().unwrap());

    let mut per_month: HashMap<YearMonth, usize> = HashMap::new();
    for order in &orders {
        let line = &order.products[0];
        assert_eq!(order.products.len(), 1);
        assert!((1..=5).contains(&line.product_quantity));
        assert_eq!(order.total, prices[&line.product_id].times(line.product_quantity));
        assert!(order.date >= NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
        assert!(order.date < NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        *per_month.entry(YearMonth::of(order.date)).or_default() += 1;
    }

    assert_eq!(per_month.len(), 60);
    assert!(per_month.values().all(|count| *count >= 12));

    let ids: HashSet<_> = orders.iter().map(|o| o.id.as_str()).collect();
    assert_eq!(ids.len(), orders.len());
}

#[tokio::test]
async fn test_zero_products_clears_collection() {
    let store = MemoryStore::new();
    store.insert(
        Collection::Products,
        [leftover("PRODUCT-old-1"), leftover("PRODUCT-old-2")],
    );
    let mut seeder = offline_seeder(store.clone(), test_config(&[]));

    let report = seeder.seed_products(0).await.unwrap();

    assert_eq!(report.deleted, 2);
    assert_eq!(report.inserted, 0);
    assert!(store.documents(Collection::Products).is_empty());
}

#[tokio::test]
async fn test_orders_without_products_are_skipped() {
    let store = MemoryStore::new();
    store.insert(Collection::Orders, [leftover("ORDER-old")]);
    let mut seeder = offline_seeder(store.clone(), test_config(&[]));

    let plan = seeder.order_plan();
    assert!(seeder.seed_orders(&plan).await.unwrap().is_none());
    assert_eq!(store.documents(Collection::Orders).len(), 1);
}

#[tokio::test]
async fn test_same_seed_reproduces_catalog() {
    let mut names = Vec::new();
    for _ in 0..2 {
        let store = MemoryStore::new();
        let mut seeder = offline_seeder(store.clone(), test_config(&[("SEED_RNG_SEED", "5")]));
        seeder.seed_products(20).await.unwrap();

        let run: Vec<(String, serde_json::Value)> = documents(&store, Collection::Products)
            .await
            .into_iter()
            .map(|d| (d.fields["name"].to_string(), d.fields["price"].clone()))
            .collect();
        names.push(run);
    }
    assert_eq!(names[0], names[1]);
}

#[tokio::test]
async fn test_too_many_admins_fails_without_writing() {
    let store = MemoryStore::new();
    store.insert(Collection::Admins, [leftover("ADMIN-old")]);
    let mut seeder = offline_seeder(store.clone(), test_config(&[]));

    assert!(seeder.seed_admins(5_000).await.is_err());
    assert_eq!(store.documents(Collection::Admins).len(), 1);
}
