//! Group Information Component
//!
//! Two tabs for the selected practice: its own details and its documents.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{DocumentList, Spinner};
use crate::context::use_app_context;
use crate::controllers::{use_form, LoadState};
use crate::drafts::PracticeDraft;
use crate::store::{store_bump_refresh, use_selection, SelectionStateStoreFields};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GroupTab {
    PracticeInformation,
    Documents,
}

#[component]
pub fn GroupInformation() -> impl IntoView {
    let (tab, set_tab) = signal(GroupTab::PracticeInformation);
    let tab_class = move |which: GroupTab| {
        if tab.get() == which { "tab active" } else { "tab" }
    };

    view! {
        <section class="page group-information">
            <h2>"Group Information"</h2>
            <div class="tab-bar">
                <button
                    class=move || tab_class(GroupTab::PracticeInformation)
                    on:click=move |_| set_tab.set(GroupTab::PracticeInformation)
                >
                    "Practice Information"
                </button>
                <button
                    class=move || tab_class(GroupTab::Documents)
                    on:click=move |_| set_tab.set(GroupTab::Documents)
                >
                    "Documents"
                </button>
            </div>
            {move || match tab.get() {
                GroupTab::PracticeInformation => view! { <PracticeInformation /> }.into_any(),
                GroupTab::Documents => view! { <DocumentList /> }.into_any(),
            }}
        </section>
    }
}

/// Edit form for the selected practice
#[component]
fn PracticeInformation() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_selection();
    let form = use_form::<PracticeDraft>();
    let loaded = RwSignal::new(LoadState::<()>::Idle);

    // Refetch on practice switch and after every save
    Effect::new(move |_| {
        let _ = store.refresh_key().get();
        let Some(practice_id) = store.selected_practice_id().get() else {
            loaded.set(LoadState::Idle);
            return;
        };
        loaded.set(LoadState::Loading);
        let api = ctx.api();
        spawn_local(async move {
            match api.get_practice(&practice_id).await {
                Ok(practice) => {
                    form.open_edit(&practice);
                    loaded.try_set(LoadState::Loaded(()));
                }
                Err(e) => {
                    log::error!("[GroupInformation] load practice {} failed: {}", practice_id, e);
                    loaded.try_set(LoadState::Error("Failed to load practice".to_string()));
                }
            }
        });
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let practice_id = store.selected_practice_id().get_untracked().unwrap_or_default();
        form.submit(practice_id, move |_| store_bump_refresh(&store));
    };

    move || match loaded.get() {
        LoadState::Idle => ().into_any(),
        LoadState::Loading => view! { <Spinner /> }.into_any(),
        LoadState::Error(message) => view! { <p class="inline-error">{message}</p> }.into_any(),
        LoadState::Loaded(()) => view! {
            <form class="entity-form practice-form" on:submit=on_submit>
                <label>
                    "Name"
                    <input
                        type="text"
                        required=true
                        prop:value=move || form.field(|d| d.name.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.edit(|d| d.name = value);
                        }
                    />
                </label>
                <label>
                    "EIN"
                    <input
                        type="text"
                        prop:value=move || form.field(|d| d.ein.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.edit(|d| d.ein = value);
                        }
                    />
                </label>
                <label>
                    "Owner Name"
                    <input
                        type="text"
                        prop:value=move || form.field(|d| d.owner_name.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.edit(|d| d.owner_name = value);
                        }
                    />
                </label>
                <div class="form-actions">
                    <button type="submit" class="btn btn-primary" disabled=move || form.submitting()>
                        "Save"
                    </button>
                </div>
            </form>
        }.into_any(),
    }
}
