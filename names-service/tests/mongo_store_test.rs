//! Exercises `MongoNameStore` against a live deployment.
//!
//! Run with `MONGODB_URI` pointing at a disposable server:
//! `cargo test -p names-service --test mongo_store_test -- --ignored`

use names_service::models::NewName;
use names_service::services::{MongoNameStore, NameStore};

async fn connect() -> (MongoNameStore, String) {
    let uri =
        std::env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
    let database = format!("names_test_{}", uuid::Uuid::new_v4().simple());
    let store = MongoNameStore::connect(&uri, &database)
        .await
        .expect("Failed to connect to MongoDB");
    store
        .initialize_indexes()
        .await
        .expect("Failed to create indexes");
    (store, database)
}

async fn drop_database(store: &MongoNameStore, database: &str) {
    store
        .client()
        .database(database)
        .drop(None)
        .await
        .expect("Failed to drop test database");
}

fn al_malik() -> NewName {
    NewName {
        number: 3,
        arabic_name: "الملك".to_string(),
        transliteration: "Al-Malik".to_string(),
        translation: "The King".to_string(),
        brief_meaning: None,
    }
}

#[tokio::test]
#[ignore = "Requires MongoDB"]
async fn insert_find_update_delete() {
    let (store, database) = connect().await;

    let inserted = store.insert(al_malik()).await.unwrap();
    assert!(inserted.id.is_some());

    let found = store.find_by_number(3).await.unwrap().unwrap();
    assert_eq!(found.transliteration, "Al-Malik");
    assert!(store.exists(99, "", "Al-Malik").await.unwrap());
    assert!(!store.exists(99, "", "Al-Quddus").await.unwrap());

    let updated = store
        .update_brief_meaning(3, "The Sovereign")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.brief_meaning.as_deref(), Some("The Sovereign"));
    assert!(updated.updated_at >= updated.created_at);

    assert!(store.update_brief_meaning(50, "none").await.unwrap().is_none());

    assert!(store.delete_by_number(3).await.unwrap());
    assert!(!store.delete_by_number(3).await.unwrap());
    assert!(store.list_all().await.unwrap().is_empty());

    drop_database(&store, &database).await;
}

#[tokio::test]
#[ignore = "Requires MongoDB"]
async fn keyword_search_is_literal_and_case_insensitive() {
    let (store, database) = connect().await;
    store.insert(al_malik()).await.unwrap();

    assert_eq!(store.find_by_keyword("MALIK").await.unwrap().len(), 1);
    assert_eq!(store.find_by_keyword("الملك").await.unwrap().len(), 1);
    assert!(store.find_by_keyword(".*").await.unwrap().is_empty());

    drop_database(&store, &database).await;
}

#[tokio::test]
#[ignore = "Requires MongoDB"]
async fn health_check_pings_deployment() {
    let (store, database) = connect().await;
    store.health_check().await.unwrap();
    drop_database(&store, &database).await;
}
