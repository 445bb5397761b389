//! Search Dialog
//!
//! Looks a name up in the list on screen (no store query).

use leptos::prelude::*;
use stockroom_core::SearchOutcome;

use crate::context::AppContext;
use crate::components::Modal;

#[component]
pub fn SearchModal() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let view = ctx.view;

    let run_search = move |_| {
        let mut outcome = None;
        view.update(|v| outcome = Some(v.search()));

        match outcome {
            Some(SearchOutcome::Found { item, ticket }) => {
                log::debug!("[SEARCH] Found '{}'", item.name);
                ctx.expire_highlight_later(ticket);
            }
            Some(SearchOutcome::NotFound) => log::debug!("[SEARCH] No match"),
            None => {}
        }
    };

    view! {
        <Modal
            open=Signal::derive(move || view.with(|v| v.search_dialog.open))
            on_close=move |_| view.update(|v| v.search_dialog.close())
        >
            <h2 class="modal-title">"Search Item"</h2>
            <label class="field">
                <span class="field-label">"Search Term"</span>
                <input
                    type="text"
                    autofocus=true
                    prop:value=move || view.with(|v| v.search_dialog.term.clone())
                    on:input=move |ev| view.update(|v| v.search_dialog.term = event_target_value(&ev))
                />
            </label>
            <button class="primary-btn" on:click=run_search>"Search"</button>
        </Modal>
    }
}
