//! Stockroom Core
//!
//! Layered architecture:
//! - domain: Items, quantities and sort order
//! - repository: Document store abstraction and its backends
//! - inventory: Store operations, each followed by a full refetch
//! - view: In-memory view state (dialogs, search, highlight)

pub mod config;
pub mod domain;
pub mod inventory;
pub mod repository;
pub mod view;

pub use config::StoreConfig;
pub use domain::{display_name, parse_quantity, sort_items, Item, SortMode};
pub use inventory::{Inventory, INVENTORY_COLLECTION};
pub use repository::{
    Document, DocumentStore, FieldValue, Fields, FirestoreStore, MemoryStore, StoreBackend,
    StoreError, StoreResult,
};
pub use view::{
    AddDialog, Highlight, HighlightTicket, InventoryView, NewStock, SearchDialog, SearchOutcome,
    HIGHLIGHT_DURATION,
};
