//! Selection Store
//!
//! The only cross-screen mutable state: which practice is selected, and a
//! counter that makes the practice picker refetch its own list.

use leptos::prelude::*;
use reactive_stores::Store;

/// Selection shared at the top of the view tree
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct SelectionState {
    /// Practice every child list is scoped to
    pub selected_practice_id: Option<String>,
    /// Bumped after a practice is created or edited (increment to trigger reload)
    pub refresh_key: u32,
}

/// Empty id means "nothing selected"
fn normalize_selection(practice_id: &str) -> Option<String> {
    if practice_id.is_empty() {
        None
    } else {
        Some(practice_id.to_string())
    }
}

/// Type alias for the store
pub type SelectionStore = Store<SelectionState>;

/// Get the selection store from context
pub fn use_selection() -> SelectionStore {
    expect_context::<SelectionStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Select a practice; every child list keyed on it refetches
pub fn store_select_practice(store: &SelectionStore, practice_id: &str) {
    let next = normalize_selection(practice_id);
    log::info!("[Selection] practice -> {:?}", next);
    store.selected_practice_id().set(next);
}

/// Make the practice picker refetch its list
pub fn store_bump_refresh(store: &SelectionStore) {
    store.refresh_key().update(|k| *k = k.wrapping_add(1));
}

/// Selected practice as a plain signal for list hooks
pub fn selected_practice_signal(store: SelectionStore) -> Signal<Option<String>> {
    Signal::derive(move || store.selected_practice_id().get())
}
