//! Repository Layer
//!
//! Document store abstraction and implementations.

mod traits;
mod error;
mod memory;
mod firestore;
mod backend;

#[cfg(test)]
mod tests;

pub use traits::{Document, DocumentStore, FieldValue, Fields};
pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use firestore::FirestoreStore;
pub use backend::StoreBackend;
