//! Store Selection
//!
//! One concrete store type for the app, picked from configuration.

use async_trait::async_trait;

use super::error::StoreResult;
use super::firestore::FirestoreStore;
use super::memory::MemoryStore;
use super::traits::{Document, DocumentStore, Fields};
use crate::config::StoreConfig;

/// The store the app runs against
#[derive(Debug, Clone)]
pub enum StoreBackend {
    Firestore(FirestoreStore),
    Memory(MemoryStore),
}

impl StoreBackend {
    /// Firestore when a project is configured, otherwise an empty memory store
    pub fn from_config(config: &StoreConfig) -> Self {
        match config.project_id.as_deref().filter(|p| !p.is_empty()) {
            Some(project_id) => {
                log::info!("Using Firestore project '{}' ({})", project_id, config.endpoint);
                StoreBackend::Firestore(FirestoreStore::new(
                    &config.endpoint,
                    project_id,
                    &config.database,
                    config.api_key.clone(),
                ))
            }
            None => {
                log::warn!("No Firestore project configured, inventory is kept in memory only");
                StoreBackend::Memory(MemoryStore::new())
            }
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            StoreBackend::Firestore(_) => "firestore",
            StoreBackend::Memory(_) => "memory",
        }
    }
}

#[async_trait(?Send)]
impl DocumentStore for StoreBackend {
    async fn list_all(&self, collection: &str) -> StoreResult<Vec<Document>> {
        match self {
            StoreBackend::Firestore(store) => store.list_all(collection).await,
            StoreBackend::Memory(store) => store.list_all(collection).await,
        }
    }

    async fn get(&self, collection: &str, key: &str) -> StoreResult<Option<Fields>> {
        match self {
            StoreBackend::Firestore(store) => store.get(collection, key).await,
            StoreBackend::Memory(store) => store.get(collection, key).await,
        }
    }

    async fn put(&self, collection: &str, key: &str, fields: &Fields) -> StoreResult<()> {
        match self {
            StoreBackend::Firestore(store) => store.put(collection, key, fields).await,
            StoreBackend::Memory(store) => store.put(collection, key, fields).await,
        }
    }

    async fn delete(&self, collection: &str, key: &str) -> StoreResult<()> {
        match self {
            StoreBackend::Firestore(store) => store.delete(collection, key).await,
            StoreBackend::Memory(store) => store.delete(collection, key).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_project_falls_back_to_memory() {
        let backend = StoreBackend::from_config(&StoreConfig::default());
        assert_eq!(backend.kind(), "memory");
    }

    #[test]
    fn test_project_selects_firestore() {
        let config = StoreConfig {
            project_id: Some("demo".to_string()),
            ..StoreConfig::default()
        };
        assert_eq!(StoreBackend::from_config(&config).kind(), "firestore");
    }
}
