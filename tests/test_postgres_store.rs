//! Live-database test for the Postgres product store.
//!
//! Needs a reachable Postgres in `DATABASE_URL` (a `.env` file works), so it is ignored by
//! default:
//!
//!   cargo test --test test_postgres_store -- --ignored --nocapture

use product_catalog_api::storage::{BackendError, OrderDirection};
use product_catalog_api::{PgProductStore, ProductFields, ProductStore};
use std::env;

#[tokio::test]
#[ignore = "requires DATABASE_URL pointing at a live Postgres"]
async fn test_postgres_store_round_trip() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    let Ok(database_url) = env::var("DATABASE_URL") else {
        println!("DATABASE_URL not set; skipping");
        return Ok(());
    };

    let store = PgProductStore::connect(&database_url, 2).await?;
    store.ping().await?;

    let cheap = store
        .create(&ProductFields {
            name: "pg-test cheap".to_string(),
            price: 0.5,
            quantity: 3.0,
            availability: None,
        })
        .await?;
    let pricey = store
        .create(&ProductFields {
            name: "pg-test pricey".to_string(),
            price: 999_999.0,
            quantity: 1.0,
            availability: Some(false),
        })
        .await?;
    assert!(cheap.id > 0);
    assert!(cheap.availability);
    assert!(!pricey.availability);

    let fetched = store.find_by_id(cheap.id).await?.expect("created row is readable");
    assert_eq!(fetched.name, "pg-test cheap");
    assert_eq!(fetched.price, 0.5);
    assert_eq!(fetched.quantity, 3.0);

    let desc = store.find_all(OrderDirection::Desc).await?;
    let pos = |id| desc.iter().position(|p| p.id == id).unwrap();
    assert!(pos(pricey.id) < pos(cheap.id));

    let mut changed = fetched.clone();
    changed.name = "pg-test renamed".to_string();
    changed.availability = !changed.availability;
    let saved = store.save(&changed).await?;
    assert_eq!(saved.name, "pg-test renamed");
    assert_eq!(saved.availability, !fetched.availability);
    assert_eq!(saved.created_at, fetched.created_at);
    assert!(saved.updated_at >= fetched.updated_at);

    store.destroy(&saved).await?;
    store.destroy(&pricey).await?;
    assert!(store.find_by_id(saved.id).await?.is_none());

    match store.save(&saved).await {
        Err(BackendError::RowMissing(id)) => assert_eq!(id, saved.id),
        other => panic!("expected RowMissing, got {:?}", other.map(|p| p.id)),
    }

    Ok(())
}
