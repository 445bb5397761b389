//! Stockroom Frontend App
//!
//! Single inventory page: toolbar, item list and three dialogs.

use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use stockroom_core::{Inventory, InventoryView, StoreBackend};

use crate::commands;
use crate::config::load_store_config;
use crate::context::AppContext;
use crate::components::{AddItemModal, InventoryList, InventoryToolbar, NotFoundModal, SearchModal};

#[component]
pub fn App() -> impl IntoView {
    // State
    let view = RwSignal::new(InventoryView::new());
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    let backend = StoreBackend::from_config(&load_store_config());
    log::info!("[APP] Inventory store: {}", backend.kind());

    let ctx = AppContext::new(view, Inventory::new(backend), (reload_trigger, set_reload_trigger));
    provide_context(ctx);

    // Refetch on mount and whenever the trigger changes
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        let inventory = ctx.inventory();
        log::debug!("[APP] Refreshing inventory, trigger={}", trigger);
        spawn_local(async move {
            if let Ok(items) = commands::list_items(&inventory).await {
                log::debug!("[APP] Loaded {} items", items.len());
                ctx.show(items);
            }
        });
    });

    // Escape closes the top-most dialog wherever focus is
    let escape_handle = window_event_listener(ev::keydown, move |ev| {
        if ev.key() != "Escape" {
            return;
        }
        let mut dismissed = false;
        view.update(|v| dismissed = v.dismiss_top_dialog());
        if dismissed {
            ev.prevent_default();
        }
    });
    on_cleanup(move || escape_handle.remove());

    view! {
        <div class="app-layout">
            <AddItemModal />
            <SearchModal />
            <NotFoundModal />

            <main class="inventory-panel">
                <InventoryToolbar />
                <InventoryList />
            </main>
        </div>
    }
}
