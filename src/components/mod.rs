//! UI Components
//!
//! Leptos components of the inventory page.

mod modal;
mod inventory_toolbar;
mod inventory_list;
mod inventory_row;
mod add_item_modal;
mod search_modal;
mod not_found_modal;

pub use modal::Modal;
pub use inventory_toolbar::InventoryToolbar;
pub use inventory_list::InventoryList;
pub use inventory_row::InventoryRow;
pub use add_item_modal::AddItemModal;
pub use search_modal::SearchModal;
pub use not_found_modal::NotFoundModal;
