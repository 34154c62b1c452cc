//! Location List Component
//!
//! Locations of the selected practice with add/edit modal and delete.

use leptos::prelude::*;

use crate::components::{render_list, DeleteConfirmButton, Modal};
use crate::controllers::{use_form, use_resource_list, FormMode};
use crate::drafts::LocationDraft;
use crate::models::{Entity, Location};
use crate::store::{selected_practice_signal, use_selection, SelectionStateStoreFields};

#[component]
pub fn LocationList() -> impl IntoView {
    let store = use_selection();
    let locations = use_resource_list::<Location>(selected_practice_signal(store));
    let form = use_form::<LocationDraft>();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let practice_id = store.selected_practice_id().get_untracked().unwrap_or_default();
        form.submit(practice_id, move |_| locations.reload());
    };

    let title = Signal::derive(move || match form.mode() {
        Some(FormMode::Edit(_)) => "Edit Location".to_string(),
        _ => "Add Location".to_string(),
    });

    view! {
        <section class="page location-list">
            <div class="page-header">
                <h2>"Locations"</h2>
                <button class="btn btn-primary" on:click=move |_| form.open_create()>"Add Location"</button>
            </div>

            {move || render_list(locations.state(), "No locations yet", move |rows| {
                view! {
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Address"</th>
                                <th class="actions">"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {rows.into_iter().map(|location| {
                                let id = location.id.clone();
                                let address = location.address.clone();
                                view! {
                                    <tr>
                                        <td>{address}</td>
                                        <td class="actions">
                                            <button class="btn btn-small" on:click=move |_| form.open_edit(&location)>
                                                "Edit"
                                            </button>
                                            <DeleteConfirmButton
                                                noun={Location::NOUN}
                                                on_confirm=move |_| locations.remove(id.clone())
                                            />
                                        </td>
                                    </tr>
                                }
                            }).collect_view()}
                        </tbody>
                    </table>
                }
            })}

            <Show when=move || form.is_open()>
                <Modal title=title on_close=move |_| form.close()>
                    <form class="entity-form" on:submit=on_submit>
                        <label>
                            "Address"
                            <input
                                type="text"
                                required=true
                                prop:value=move || form.field(|d| d.address.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    form.edit(|d| d.address = value);
                                }
                            />
                        </label>
                        <div class="form-actions">
                            <button type="button" class="btn" on:click=move |_| form.close()>"Cancel"</button>
                            <button type="submit" class="btn btn-primary" disabled=move || form.submitting()>
                                "Save"
                            </button>
                        </div>
                    </form>
                </Modal>
            </Show>
        </section>
    }
}
