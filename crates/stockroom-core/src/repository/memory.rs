//! In-Memory Document Store
//!
//! Cloneable handle over shared maps. Used for tests and as the local
//! store when no remote database is configured.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use super::error::{StoreError, StoreResult};
use super::traits::{Document, DocumentStore, Fields};

#[derive(Debug, Default)]
struct MemoryState {
    collections: BTreeMap<String, BTreeMap<String, Fields>>,
    offline: bool,
}

/// In-memory implementation of [`DocumentStore`]
///
/// Documents list in key order. Clones share the same data.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a document without going through the async API
    pub fn seed(&self, collection: &str, key: &str, fields: Fields) {
        self.lock()
            .collections
            .entry(collection.to_string())
            .or_default()
            .insert(key.to_string(), fields);
    }

    /// Make every following call fail with [`StoreError::Unavailable`]
    pub fn set_offline(&self, offline: bool) {
        self.lock().offline = offline;
    }

    fn lock(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn online(&self) -> StoreResult<MutexGuard<'_, MemoryState>> {
        let guard = self.lock();
        if guard.offline {
            return Err(StoreError::Unavailable);
        }
        Ok(guard)
    }
}

#[async_trait(?Send)]
impl DocumentStore for MemoryStore {
    async fn list_all(&self, collection: &str) -> StoreResult<Vec<Document>> {
        let state = self.online()?;
        Ok(state
            .collections
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .map(|(key, fields)| Document {
                        key: key.clone(),
                        fields: fields.clone(),
                    })
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn get(&self, collection: &str, key: &str) -> StoreResult<Option<Fields>> {
        let state = self.online()?;
        Ok(state
            .collections
            .get(collection)
            .and_then(|docs| docs.get(key))
            .cloned())
    }

    async fn put(&self, collection: &str, key: &str, fields: &Fields) -> StoreResult<()> {
        let mut state = self.online()?;
        state
            .collections
            .entry(collection.to_string())
            .or_default()
            .insert(key.to_string(), fields.clone());
        Ok(())
    }

    async fn delete(&self, collection: &str, key: &str) -> StoreResult<()> {
        let mut state = self.online()?;
        if let Some(docs) = state.collections.get_mut(collection) {
            docs.remove(key);
        }
        Ok(())
    }
}
