//! Inventory Toolbar Component
//!
//! Sort toggle plus buttons opening the add and search dialogs.

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn InventoryToolbar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let view = ctx.view;

    let toggle_sort = move |_| {
        view.update(|v| {
            let mode = v.toggle_sort();
            log::debug!("[TOOLBAR] Sort mode now {:?}", mode);
        });
        ctx.reload();
    };

    view! {
        <div class="toolbar">
            <button class="primary-btn" on:click=toggle_sort>
                {move || view.with(|v| v.sort_mode().button_label())}
            </button>
            <button class="primary-btn" on:click=move |_| view.update(|v| v.add_dialog.open())>
                "Add Item"
            </button>
            <button class="primary-btn" on:click=move |_| view.update(|v| v.search_dialog.open())>
                "Search"
            </button>
        </div>
    }
}
