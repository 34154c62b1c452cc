//! Practice Selector Component
//!
//! Header dropdown choosing the practice every page is scoped to, plus the
//! "Create New Practice" dialog.

use leptos::prelude::*;

use crate::components::Modal;
use crate::controllers::{use_form, use_practices, LoadState};
use crate::drafts::PracticeDraft;
use crate::store::{store_bump_refresh, store_select_practice, use_selection, SelectionStateStoreFields};

#[component]
pub fn PracticeSelector() -> impl IntoView {
    let store = use_selection();
    let practices = use_practices(Signal::derive(move || store.refresh_key().get()));
    let form = use_form::<PracticeDraft>();

    let on_change = move |ev: web_sys::Event| {
        let id = event_target_value(&ev);
        store_select_practice(&store, &id);
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        form.submit(String::new(), move |id| {
            store_select_practice(&store, &id);
            store_bump_refresh(&store);
        });
    };

    view! {
        <div class="practice-selector">
            <select
                class="practice-select"
                prop:value=move || store.selected_practice_id().get().unwrap_or_default()
                on:change=on_change
            >
                <option value="">"Select a practice"</option>
                {move || match practices.get() {
                    LoadState::Loaded(rows) => rows
                        .into_iter()
                        .map(|practice| {
                            let selected = store.selected_practice_id().get_untracked().as_deref() == Some(practice.id.as_str());
                            view! {
                                <option value=practice.id.clone() selected=selected>{practice.name}</option>
                            }
                        })
                        .collect_view()
                        .into_any(),
                    LoadState::Loading => view! { <option disabled=true>"Loading..."</option> }.into_any(),
                    LoadState::Error(message) => view! { <option disabled=true>{message}</option> }.into_any(),
                    LoadState::Idle => ().into_any(),
                }}
            </select>
            <button class="btn btn-primary" on:click=move |_| form.open_create()>
                "Create New Practice"
            </button>

            <Show when=move || form.is_open()>
                <Modal title="Create New Practice" on_close=move |_| form.close()>
                    <form class="entity-form" on:submit=on_submit>
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
                            <button type="button" class="btn" on:click=move |_| form.close()>"Cancel"</button>
                            <button type="submit" class="btn btn-primary" disabled=move || form.submitting()>
                                "Create"
                            </button>
                        </div>
                    </form>
                </Modal>
            </Show>
        </div>
    }
}
