//! Domain Layer
//!
//! Contains the inventory entity and the pure rules around it.
//! This layer has NO external dependencies.

mod item;
mod sort;

pub use item::{display_name, parse_quantity, Item};
pub use sort::{sort_items, SortMode};
