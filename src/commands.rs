//! Inventory Command Wrappers
//!
//! Frontend bindings to the inventory service. Each call returns the
//! refetched list; errors are logged and flattened to strings.

use stockroom_core::{Inventory, Item, StoreBackend, StoreError};

pub type AppInventory = Inventory<StoreBackend>;

pub async fn list_items(inventory: &AppInventory) -> Result<Vec<Item>, String> {
    inventory.refresh().await.map_err(|e| report("list_items", e))
}

pub async fn add_item(inventory: &AppInventory, name: &str, quantity: u32) -> Result<Vec<Item>, String> {
    inventory
        .add_item(name, quantity)
        .await
        .map_err(|e| report("add_item", e))
}

pub async fn remove_item(inventory: &AppInventory, name: &str) -> Result<Vec<Item>, String> {
    inventory
        .remove_one_unit(name)
        .await
        .map_err(|e| report("remove_item", e))
}

/// Failures are already logged and swallowed by the service
pub async fn remove_entire_item(inventory: &AppInventory, name: &str) -> Option<Vec<Item>> {
    inventory.remove_entire_item(name).await
}

fn report(command: &str, e: StoreError) -> String {
    let message = e.to_string();
    log::error!("[{}] {}", command, message);
    message
}
