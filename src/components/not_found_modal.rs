//! Not Found Notice

use leptos::prelude::*;

use crate::context::AppContext;
use crate::components::Modal;

#[component]
pub fn NotFoundModal() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let view = ctx.view;

    view! {
        <Modal
            open=Signal::derive(move || view.with(|v| v.not_found_open))
            on_close=move |_| view.update(|v| v.close_not_found())
        >
            <h2 class="modal-title">"Item Not Found"</h2>
            <button class="primary-btn" autofocus=true on:click=move |_| view.update(|v| v.close_not_found())>
                "Close"
            </button>
        </Modal>
    }
}
