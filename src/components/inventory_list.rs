//! Inventory List Component
//!
//! Scrollable list of items in the current sort order.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::components::InventoryRow;

#[component]
pub fn InventoryList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let view = ctx.view;

    view! {
        <div class="inventory-list">
            // Keyed on quantity too so a changed count re-renders the row
            <For
                each=move || view.with(|v| v.items().to_vec())
                key=|item| (item.name.clone(), item.quantity)
                children=move |item| view! { <InventoryRow item=item /> }
            />
        </div>
    }
}
