//! Log Panel Component
//!
//! Recent console lines in a dialog, so a problem can be reported without
//! opening devtools.

use leptos::prelude::*;

use crate::components::Modal;

/// Newest line first
fn newest_first(mut lines: Vec<String>) -> Vec<String> {
    lines.reverse();
    lines
}

#[component]
pub fn LogPanel() -> impl IntoView {
    let (open, set_open) = signal(false);
    let lines = RwSignal::new(Vec::<String>::new());

    // Snapshot on open; the buffer keeps filling while the dialog is shown
    let show = move |_| {
        lines.set(newest_first(console_logger::recent()));
        set_open.set(true);
    };

    view! {
        <button class="sidebar-item sidebar-footer" on:click=show>"Recent Log"</button>
        <Show when=move || open.get()>
            <Modal title="Recent Log" class="log-dialog" on_close=move |_| set_open.set(false)>
                {move || {
                    let current = lines.get();
                    if current.is_empty() {
                        view! { <p class="empty-state">"No log lines yet"</p> }.into_any()
                    } else {
                        view! { <pre class="log-lines">{current.join("\n")}</pre> }.into_any()
                    }
                }}
            </Modal>
        </Show>
    }
}
