use async_trait::async_trait;
use portal_core::model::RoleId;
use portal_core::progress::CompletedUnits;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

use crate::progress_codec::{decode_completed, encode_completed, progress_key};

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Durable string-to-string storage, the equivalent of a browser origin's
/// local storage.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be reached.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Insert or replace the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the value cannot be stored.
    async fn put(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Missing keys are not an error.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be reached.
    async fn delete(&self, key: &str) -> Result<(), StorageError>;
}

/// Repository contract for per-role completion records.
#[async_trait]
pub trait ProgressRepository: Send + Sync {
    /// Load the completed units of a role.
    ///
    /// Missing or unreadable records load as an empty set.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` only when the backend itself fails.
    async fn load_completed(&self, role: &RoleId) -> Result<CompletedUnits, StorageError>;

    /// Replace the stored set for a role.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the set cannot be stored.
    async fn save_completed(
        &self,
        role: &RoleId,
        completed: &CompletedUnits,
    ) -> Result<(), StorageError>;

    /// Drop the stored set for a role.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be reached.
    async fn clear_completed(&self, role: &RoleId) -> Result<(), StorageError>;
}

/// Stores each role's set as a JSON list under `progress:<role>`.
#[derive(Clone)]
pub struct KvProgressRepository {
    store: Arc<dyn KeyValueStore>,
}

impl KvProgressRepository {
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ProgressRepository for KvProgressRepository {
    async fn load_completed(&self, role: &RoleId) -> Result<CompletedUnits, StorageError> {
        let key = progress_key(role);
        let Some(raw) = self.store.get(&key).await? else {
            return Ok(CompletedUnits::new());
        };
        Ok(decode_completed(&raw).unwrap_or_else(|| {
            tracing::warn!(%key, "stored progress is unreadable; treating as empty");
            CompletedUnits::new()
        }))
    }

    async fn save_completed(
        &self,
        role: &RoleId,
        completed: &CompletedUnits,
    ) -> Result<(), StorageError> {
        let key = progress_key(role);
        let value = encode_completed(completed)?;
        self.store.put(&key, &value).await?;
        tracing::debug!(%key, count = completed.len(), "progress saved");
        Ok(())
    }

    async fn clear_completed(&self, role: &RoleId) -> Result<(), StorageError> {
        self.store.delete(&progress_key(role)).await
    }
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl KeyValueStore for InMemoryRepository {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(key).cloned())
    }

    async fn put(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        let mut guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.remove(key);
        Ok(())
    }
}

/// Aggregates the raw store and the progress repository behind trait
/// objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub kv: Arc<dyn KeyValueStore>,
    pub progress: Arc<dyn ProgressRepository>,
}

impl Storage {
    #[must_use]
    pub fn from_store(kv: Arc<dyn KeyValueStore>) -> Self {
        let progress: Arc<dyn ProgressRepository> =
            Arc::new(KvProgressRepository::new(Arc::clone(&kv)));
        Self { kv, progress }
    }

    #[must_use]
    pub fn in_memory() -> Self {
        Self::from_store(Arc::new(InMemoryRepository::new()))
    }
}
