//! Toast Component
//!
//! Renders the current notification, if any.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::controllers::NotificationKind;

#[component]
pub fn Toast() -> impl IntoView {
    let notifier = use_app_context().notifier;

    move || {
        notifier.current().map(|notification| {
            let class = match notification.kind {
                NotificationKind::Success => "toast toast-success",
                NotificationKind::Error => "toast toast-error",
            };
            view! {
                <div class=class role="alert">
                    <span class="toast-message">{notification.message}</span>
                    <button class="toast-close" on:click=move |_| notifier.close()>"×"</button>
                </div>
            }
        })
    }
}
