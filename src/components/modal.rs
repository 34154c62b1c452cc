//! Modal Component
//!
//! Overlay dialog used by every add/edit form and the document viewer.

use leptos::prelude::*;

/// Clicking the overlay or × runs `on_close`; clicks inside the dialog don't.
#[component]
pub fn Modal(
    #[prop(into)] title: Signal<String>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let dialog_class = if class.is_empty() { "modal".to_string() } else { format!("modal {}", class) };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class=dialog_class on:click=|ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h3>{move || title.get()}</h3>
                    <button class="modal-close" on:click=move |_| on_close.run(())>"×"</button>
                </div>
                <div class="modal-body">{children()}</div>
            </div>
        </div>
    }
}
