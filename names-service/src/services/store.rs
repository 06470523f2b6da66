//! Record store gateway.
//!
//! Every handler talks to the catalog through [`NameStore`]; each method maps
//! to exactly one query against the backing collection.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Name, NewName};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait NameStore: Send + Sync {
    /// Every stored record, in store order.
    async fn list_all(&self) -> Result<Vec<Name>, StoreError>;

    async fn find_by_number(&self, number: i32) -> Result<Option<Name>, StoreError>;

    /// Records whose `arabicName` or `transliteration` contains `keyword`,
    /// ignoring case. The keyword is matched literally.
    async fn find_by_keyword(&self, keyword: &str) -> Result<Vec<Name>, StoreError>;

    /// True when any record shares the number, Arabic name or transliteration.
    async fn exists(
        &self,
        number: i32,
        arabic_name: &str,
        transliteration: &str,
    ) -> Result<bool, StoreError>;

    /// Persists a new record and returns it as stored.
    async fn insert(&self, new: NewName) -> Result<Name, StoreError>;

    /// Replaces `briefMeaning` and returns the updated record.
    async fn update_brief_meaning(
        &self,
        number: i32,
        brief_meaning: &str,
    ) -> Result<Option<Name>, StoreError>;

    /// Returns whether a record was removed.
    async fn delete_by_number(&self, number: i32) -> Result<bool, StoreError>;

    async fn health_check(&self) -> Result<(), StoreError>;
}
