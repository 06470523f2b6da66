use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, DateTime as BsonDateTime, Document},
    options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument},
    Client as MongoClient, Collection, Database, IndexModel,
};

use super::metrics::record_store_operation;
use super::store::{NameStore, StoreError};
use crate::models::{Name, NewName};

/// Collection name kept compatible with documents written by the earlier
/// deployment of this catalog.
pub const NAMES_COLLECTION: &str = "namesofallahs";

#[derive(Clone)]
pub struct MongoNameStore {
    client: MongoClient,
    db: Database,
}

impl MongoNameStore {
    /// Connects and pings the deployment so an unreachable database fails
    /// startup instead of the first request.
    pub async fn connect(uri: &str, database: &str) -> Result<Self, StoreError> {
        tracing::info!(database = %database, "Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Failed to parse MongoDB connection string: {}", e);
            StoreError::from(e)
        })?;
        let db = client.database(database);
        let store = Self { client, db };
        store.health_check().await?;
        tracing::info!(database = %database, "Successfully connected to MongoDB database");
        Ok(store)
    }

    pub async fn initialize_indexes(&self) -> Result<(), StoreError> {
        tracing::info!("Creating MongoDB indexes for names-service");

        // `number` stays non-unique: duplicates are rejected best-effort by
        // the add-name handler only.
        let indexes = [
            ("number", "number_idx"),
            ("transliteration", "transliteration_idx"),
            ("translation", "translation_idx"),
        ];

        for (field, index_name) in indexes {
            let model = IndexModel::builder()
                .keys(doc! { field: 1 })
                .options(
                    IndexOptions::builder()
                        .name(index_name.to_string())
                        .build(),
                )
                .build();

            self.names().create_index(model, None).await.map_err(|e| {
                tracing::error!("Failed to create {} index: {}", index_name, e);
                StoreError::from(e)
            })?;
        }

        tracing::info!("Successfully created all MongoDB indexes");
        Ok(())
    }

    pub fn client(&self) -> &MongoClient {
        &self.client
    }

    pub fn names(&self) -> Collection<Name> {
        self.db.collection(NAMES_COLLECTION)
    }

    async fn find_many(&self, filter: Option<Document>) -> Result<Vec<Name>, StoreError> {
        let cursor = self.names().find(filter, None).await?;
        let names: Vec<Name> = cursor.try_collect().await?;
        Ok(names)
    }

    /// Closes pooled connections. Call once after the server has drained.
    pub async fn shutdown(self) {
        tracing::info!("Closing MongoDB connections");
        self.client.shutdown().await;
    }
}

/// Filter matching `keyword` literally and case-insensitively in either
/// searchable field.
pub(crate) fn keyword_filter(keyword: &str) -> Document {
    let pattern = regex::escape(keyword);
    doc! {
        "$or": [
            { "arabicName": { "$regex": pattern.as_str(), "$options": "i" } },
            { "transliteration": { "$regex": pattern.as_str(), "$options": "i" } },
        ]
    }
}

pub(crate) fn duplicate_filter(number: i32, arabic_name: &str, transliteration: &str) -> Document {
    doc! {
        "$or": [
            { "number": number },
            { "arabicName": arabic_name },
            { "transliteration": transliteration },
        ]
    }
}

fn observe<T>(operation: &'static str, result: Result<T, StoreError>) -> Result<T, StoreError> {
    record_store_operation(operation, result.is_ok());
    if let Err(e) = &result {
        tracing::error!(operation, error = %e, "Name store operation failed");
    }
    result
}

#[async_trait]
impl NameStore for MongoNameStore {
    async fn list_all(&self) -> Result<Vec<Name>, StoreError> {
        observe("list_all", self.find_many(None).await)
    }

    async fn find_by_number(&self, number: i32) -> Result<Option<Name>, StoreError> {
        let result = self
            .names()
            .find_one(doc! { "number": number }, None)
            .await
            .map_err(StoreError::from);
        observe("find_by_number", result)
    }

    async fn find_by_keyword(&self, keyword: &str) -> Result<Vec<Name>, StoreError> {
        observe(
            "find_by_keyword",
            self.find_many(Some(keyword_filter(keyword))).await,
        )
    }

    async fn exists(
        &self,
        number: i32,
        arabic_name: &str,
        transliteration: &str,
    ) -> Result<bool, StoreError> {
        let result = self
            .names()
            .find_one(duplicate_filter(number, arabic_name, transliteration), None)
            .await
            .map(|found| found.is_some())
            .map_err(StoreError::from);
        observe("exists", result)
    }

    async fn insert(&self, new: NewName) -> Result<Name, StoreError> {
        let mut name = Name::new(new);
        let result = self
            .names()
            .insert_one(&name, None)
            .await
            .map(|inserted| {
                name.id = inserted.inserted_id.as_object_id();
                name
            })
            .map_err(StoreError::from);
        observe("insert", result)
    }

    async fn update_brief_meaning(
        &self,
        number: i32,
        brief_meaning: &str,
    ) -> Result<Option<Name>, StoreError> {
        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();
        let result = self
            .names()
            .find_one_and_update(
                doc! { "number": number },
                doc! {
                    "$set": {
                        "briefMeaning": brief_meaning,
                        "updatedAt": BsonDateTime::now(),
                    }
                },
                options,
            )
            .await
            .map_err(StoreError::from);
        observe("update_brief_meaning", result)
    }

    async fn delete_by_number(&self, number: i32) -> Result<bool, StoreError> {
        let result = self
            .names()
            .find_one_and_delete(doc! { "number": number }, None)
            .await
            .map(|deleted| deleted.is_some())
            .map_err(StoreError::from);
        observe("delete_by_number", result)
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                StoreError::from(e)
            })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_filter_escapes_regex_metacharacters() {
        let filter = keyword_filter("a.b(c)");
        let clauses = filter.get_array("$or").unwrap();
        let first = clauses[0].as_document().unwrap();
        let regex = first.get_document("arabicName").unwrap();
        assert_eq!(regex.get_str("$regex").unwrap(), r"a\.b\(c\)");
        assert_eq!(regex.get_str("$options").unwrap(), "i");
    }

    #[test]
    fn keyword_filter_searches_both_fields() {
        let filter = keyword_filter("rahman");
        let clauses = filter.get_array("$or").unwrap();
        assert_eq!(clauses.len(), 2);
        assert!(clauses[1]
            .as_document()
            .unwrap()
            .contains_key("transliteration"));
    }

    #[test]
    fn duplicate_filter_ors_three_fields() {
        let filter = duplicate_filter(7, "الملك", "Al-Malik");
        let clauses = filter.get_array("$or").unwrap();
        assert_eq!(clauses.len(), 3);
        assert_eq!(
            clauses[0].as_document().unwrap().get_i32("number").unwrap(),
            7
        );
        assert_eq!(
            clauses[2]
                .as_document()
                .unwrap()
                .get_str("transliteration")
                .unwrap(),
            "Al-Malik"
        );
    }
}
