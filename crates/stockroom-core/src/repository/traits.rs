//! Repository Layer - Core Traits
//!
//! Defines the abstract interface for a keyed document collection.
//! Implementations can use a hosted database, in-memory maps, etc.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::error::StoreResult;

/// A typed field value inside a document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
    Integer(i64),
    Double(f64),
    String(String),
    Boolean(bool),
}

impl FieldValue {
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(v) => Some(*v),
            _ => None,
        }
    }
}

/// Field map of a single document
pub type Fields = BTreeMap<String, FieldValue>;

/// A document as listed from a collection
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub key: String,
    pub fields: Fields,
}

/// Keyed document collections
///
/// All operations are async to support remote backends. Futures are not
/// required to be `Send` because the browser runtime is single-threaded.
#[async_trait(?Send)]
pub trait DocumentStore {
    /// List every document of a collection
    async fn list_all(&self, collection: &str) -> StoreResult<Vec<Document>>;

    /// Read one document, `None` if it does not exist
    async fn get(&self, collection: &str, key: &str) -> StoreResult<Option<Fields>>;

    /// Create or fully overwrite a document
    async fn put(&self, collection: &str, key: &str, fields: &Fields) -> StoreResult<()>;

    /// Delete a document (missing documents are not an error)
    async fn delete(&self, collection: &str, key: &str) -> StoreResult<()>;
}
