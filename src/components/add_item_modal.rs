//! Add Item Dialog
//!
//! Name and quantity form. The Add button stays disabled until a name is typed.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::AppContext;
use crate::components::Modal;

#[component]
pub fn AddItemModal() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let view = ctx.view;

    let submit = move |_| {
        let mut request = None;
        view.update(|v| request = v.add_dialog.submit());
        let Some(request) = request else { return };

        let inventory = ctx.inventory();
        spawn_local(async move {
            if let Ok(items) = commands::add_item(&inventory, &request.name, request.quantity).await {
                ctx.show(items);
            }
        });
    };

    view! {
        <Modal
            open=Signal::derive(move || view.with(|v| v.add_dialog.open))
            on_close=move |_| view.update(|v| v.add_dialog.close())
        >
            <h2 class="modal-title">"Add Item"</h2>
            <label class="field">
                <span class="field-label">"Item Name"</span>
                <input
                    type="text"
                    autofocus=true
                    prop:value=move || view.with(|v| v.add_dialog.name.clone())
                    on:input=move |ev| view.update(|v| v.add_dialog.set_name(event_target_value(&ev)))
                />
            </label>
            <label class="field">
                <span class="field-label">"Quantity"</span>
                <input
                    type="number"
                    min="1"
                    prop:value=move || view.with(|v| v.add_dialog.quantity.to_string())
                    on:input=move |ev| view.update(|v| v.add_dialog.set_quantity_input(&event_target_value(&ev)))
                />
            </label>
            <button
                class="primary-btn"
                disabled=move || view.with(|v| !v.add_dialog.can_submit())
                on:click=submit
            >
                "Add"
            </button>
        </Modal>
    }
}
