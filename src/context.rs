//! Application Context
//!
//! Shared state provided via Leptos Context API.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use stockroom_core::{HighlightTicket, InventoryView, Item, HIGHLIGHT_DURATION};

use crate::commands::AppInventory;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Everything the page shows
    pub view: RwSignal<InventoryView>,
    /// Service over the configured document store
    inventory: StoredValue<AppInventory, LocalStorage>,
    /// Trigger to refetch the inventory - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to refetch the inventory - write
    set_reload_trigger: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(
        view: RwSignal<InventoryView>,
        inventory: AppInventory,
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
    ) -> Self {
        Self {
            view,
            inventory: StoredValue::new_local(inventory),
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
        }
    }

    /// Handle to the inventory service for an async task
    pub fn inventory(&self) -> AppInventory {
        self.inventory.get_value()
    }

    /// Trigger a full refetch
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Show a freshly fetched list
    pub fn show(&self, items: Vec<Item>) {
        self.view.update(|v| v.replace_items(items));
    }

    /// Clear the search highlight once its time is up
    pub fn expire_highlight_later(&self, ticket: HighlightTicket) {
        let view = self.view;
        spawn_local(async move {
            TimeoutFuture::new(HIGHLIGHT_DURATION.as_millis() as u32).await;
            view.update(|v| {
                v.expire_highlight(ticket);
            });
        });
    }
}
