//! Row Delete Control
//!
//! Every table row deletes through this: a × that arms an inline
//! "Delete location?" prompt, confirmed with ✓ or dismissed with ✗.

use leptos::prelude::*;

fn confirm_prompt(noun: &str) -> String {
    format!("Delete {}?", noun)
}

fn delete_tooltip(noun: &str) -> String {
    format!("Delete {}", noun)
}

/// Inline confirm-before-delete for one row
///
/// # Arguments
/// * `noun` - Record kind named in the prompt ("location", "document", ...)
/// * `on_confirm` - Runs once the user confirms; the prompt disarms first
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] noun: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let armed = RwSignal::new(false);
    let prompt = confirm_prompt(&noun);
    let tooltip = delete_tooltip(&noun);

    move || {
        if armed.get() {
            view! {
                <span class="delete-confirm" role="alertdialog">
                    <span class="delete-confirm-text">{prompt.clone()}</span>
                    <button
                        class="confirm-btn"
                        title="Confirm"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            armed.set(false);
                            on_confirm.run(());
                        }
                    >
                        "✓"
                    </button>
                    <button
                        class="cancel-btn"
                        title="Cancel"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            armed.set(false);
                        }
                    >
                        "✗"
                    </button>
                </span>
            }
            .into_any()
        } else {
            view! {
                <button
                    class="delete-btn"
                    title=tooltip.clone()
                    on:click=move |ev| {
                        ev.stop_propagation();
                        armed.set(true);
                    }
                >
                    "×"
                </button>
            }
            .into_any()
        }
    }
}
