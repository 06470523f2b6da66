use async_trait::async_trait;
use chrono::Utc;
use mongodb::bson::oid::ObjectId;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard};

use super::store::{NameStore, StoreError};
use crate::models::{Name, NewName};

/// Process-local store with the same matching rules as the MongoDB gateway.
///
/// Backs the test suites; the service itself always runs on MongoDB. Records
/// keep insertion order.
pub struct InMemoryNameStore {
    names: Mutex<Vec<Name>>,
    available: AtomicBool,
}

impl Default for InMemoryNameStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryNameStore {
    pub fn new() -> Self {
        Self {
            names: Mutex::new(Vec::new()),
            available: AtomicBool::new(true),
        }
    }

    /// Simulates an outage: while unavailable every operation fails.
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    pub fn len(&self) -> usize {
        self.names.lock().map(|names| names.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<Name>>, StoreError> {
        if !self.available.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("in-memory store offline".to_string()));
        }
        self.names
            .lock()
            .map_err(|e| StoreError::Unavailable(format!("in-memory store poisoned: {}", e)))
    }
}

#[async_trait]
impl NameStore for InMemoryNameStore {
    async fn list_all(&self) -> Result<Vec<Name>, StoreError> {
        Ok(self.lock()?.clone())
    }

    async fn find_by_number(&self, number: i32) -> Result<Option<Name>, StoreError> {
        Ok(self.lock()?.iter().find(|n| n.number == number).cloned())
    }

    async fn find_by_keyword(&self, keyword: &str) -> Result<Vec<Name>, StoreError> {
        Ok(self
            .lock()?
            .iter()
            .filter(|n| n.matches_keyword(keyword))
            .cloned()
            .collect())
    }

    async fn exists(
        &self,
        number: i32,
        arabic_name: &str,
        transliteration: &str,
    ) -> Result<bool, StoreError> {
        Ok(self.lock()?.iter().any(|n| {
            n.number == number
                || n.arabic_name == arabic_name
                || n.transliteration == transliteration
        }))
    }

    async fn insert(&self, new: NewName) -> Result<Name, StoreError> {
        let mut name = Name::new(new);
        name.id = Some(ObjectId::new());
        self.lock()?.push(name.clone());
        Ok(name)
    }

    async fn update_brief_meaning(
        &self,
        number: i32,
        brief_meaning: &str,
    ) -> Result<Option<Name>, StoreError> {
        let mut names = self.lock()?;
        Ok(names.iter_mut().find(|n| n.number == number).map(|n| {
            n.brief_meaning = Some(brief_meaning.to_string());
            n.updated_at = Utc::now();
            n.clone()
        }))
    }

    async fn delete_by_number(&self, number: i32) -> Result<bool, StoreError> {
        let mut names = self.lock()?;
        match names.iter().position(|n| n.number == number) {
            Some(index) => {
                names.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        self.lock().map(|_| ())
    }
}
