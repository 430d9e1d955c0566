//! Repository tests against a live MongoDB.
//!
//! Point `MONGO_URL` at the server (defaults to `mongodb://localhost:27017`)
//! and run with `--ignored`.

use database::mongodb::{Database, MongoConfig, connect_from_config};
use domain_status_checks::mongodb::MongoStatusCheckRepository;
use domain_status_checks::{StatusCheck, StatusCheckCreate, StatusCheckRepository};
use uuid::Uuid;

async fn scratch_database() -> Database {
    let url = std::env::var("MONGO_URL").unwrap_or_else(|_| "mongodb://localhost:27017".into());
    let name = format!("status_checks_it_{}", Uuid::new_v4().simple());
    let config = MongoConfig::with_database(url, name);

    let client = connect_from_config(&config).await.unwrap();
    client.database(config.database())
}

#[tokio::test]
#[ignore] // Requires actual MongoDB
async fn test_insert_then_list() {
    let db = scratch_database().await;
    let repo = MongoStatusCheckRepository::new(&db);

    assert!(repo.list(10).await.unwrap().is_empty());

    let check = repo
        .insert(StatusCheck::new(StatusCheckCreate {
            client_name: "uptime-bot".to_string(),
        }))
        .await
        .unwrap();

    assert_eq!(repo.list(10).await.unwrap(), vec![check]);

    db.drop().await.unwrap();
}
