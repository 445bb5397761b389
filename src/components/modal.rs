//! Modal Dialog Component
//!
//! Centered dialog over a dimmed backdrop.

use leptos::prelude::*;

/// Modal dialog shell
///
/// Clicking the backdrop calls `on_close`. Clicks inside the box do not
/// reach the backdrop. Escape is handled once for all dialogs in `App`.
#[component]
pub fn Modal(
    open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop" on:click=move |_| on_close.run(())>
                <div
                    class="modal-box"
                    role="dialog"
                    aria-modal="true"
                    on:click=|ev| ev.stop_propagation()
                >
                    {children()}
                </div>
            </div>
        </Show>
    }
}
