//! List States
//!
//! The four faces of every list: spinner, inline error, empty message, table.

use leptos::prelude::*;

use crate::controllers::LoadState;

/// Render a list state, handing loaded non-empty rows to `table`
pub fn render_list<T, V>(state: LoadState<Vec<T>>, empty_message: &'static str, table: impl FnOnce(Vec<T>) -> V) -> AnyView
where
    V: IntoView + 'static,
{
    match state {
        LoadState::Idle => ().into_any(),
        LoadState::Loading => view! { <Spinner /> }.into_any(),
        LoadState::Error(message) => view! { <p class="inline-error">{message}</p> }.into_any(),
        LoadState::Loaded(rows) if rows.is_empty() => view! { <p class="empty-state">{empty_message}</p> }.into_any(),
        LoadState::Loaded(rows) => table(rows).into_any(),
    }
}

#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div class="spinner" role="status">
            <span class="spinner-label">"Loading..."</span>
        </div>
    }
}
