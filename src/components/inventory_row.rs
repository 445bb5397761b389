//! Inventory Row Component
//!
//! One item with its quantity and the add / remove / delete actions.

use leptos::prelude::*;
use leptos::task::spawn_local;
use stockroom_core::Item;

use crate::commands;
use crate::context::AppContext;

/// A single item row
#[component]
pub fn InventoryRow(item: Item) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let name = item.name.clone();
    let title = item.row_label();
    let display_name = item.display_name();
    let quantity = item.quantity;

    let highlighted = {
        let name = name.clone();
        move || ctx.view.with(|v| v.is_highlighted(&name))
    };

    let add_one = {
        let name = name.clone();
        move |_| {
            let name = name.clone();
            let inventory = ctx.inventory();
            spawn_local(async move {
                if let Ok(items) = commands::add_item(&inventory, &name, 1).await {
                    ctx.show(items);
                }
            });
        }
    };

    let remove_one = {
        let name = name.clone();
        move |_| {
            let name = name.clone();
            let inventory = ctx.inventory();
            spawn_local(async move {
                if let Ok(items) = commands::remove_item(&inventory, &name).await {
                    ctx.show(items);
                }
            });
        }
    };

    let delete_all = move |_| {
        let name = name.clone();
        let inventory = ctx.inventory();
        spawn_local(async move {
            if let Some(items) = commands::remove_entire_item(&inventory, &name).await {
                ctx.show(items);
            }
        });
    };

    view! {
        <div
            class=move || if highlighted() { "inventory-row highlighted" } else { "inventory-row" }
            title=title
        >
            <span class="item-name">{display_name}</span>
            <span class="item-quantity">"Quantity: " {quantity}</span>
            <div class="row-actions">
                <button class="text-btn" on:click=add_one>"Add"</button>
                <button class="text-btn" on:click=remove_one>"Remove"</button>
                <button class="text-btn danger" on:click=delete_all>"Delete"</button>
            </div>
        </div>
    }
}
