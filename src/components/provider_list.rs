//! Provider List Component

use leptos::prelude::*;

use crate::components::{render_list, DeleteConfirmButton, Modal};
use crate::controllers::{use_form, use_resource_list};
use crate::drafts::ProviderDraft;
use crate::models::{Entity, Provider};
use crate::store::{selected_practice_signal, use_selection, SelectionStateStoreFields};

#[component]
pub fn ProviderList() -> impl IntoView {
    let store = use_selection();
    let providers = use_resource_list::<Provider>(selected_practice_signal(store));
    let form = use_form::<ProviderDraft>();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let practice_id = store.selected_practice_id().get_untracked().unwrap_or_default();
        form.submit(practice_id, move |_| providers.reload());
    };

    let title = Signal::derive(move || {
        if form.mode().is_some_and(|m| m.is_edit()) { "Edit Provider".to_string() } else { "Add Provider".to_string() }
    });

    view! {
        <section class="page provider-list">
            <div class="page-header">
                <h2>"Providers"</h2>
                <button class="btn btn-primary" on:click=move |_| form.open_create()>"Add Provider"</button>
            </div>

            {move || render_list(providers.state(), "No providers yet", move |rows| {
                view! {
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Name"</th>
                                <th>"SSN"</th>
                                <th class="actions">"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {rows.into_iter().map(|provider| {
                                let id = provider.id.clone();
                                let name = provider.name.clone();
                                let ssn = provider.ssn.clone();
                                view! {
                                    <tr>
                                        <td>{name}</td>
                                        <td>{ssn}</td>
                                        <td class="actions">
                                            <button class="btn btn-small" on:click=move |_| form.open_edit(&provider)>
                                                "Edit"
                                            </button>
                                            <DeleteConfirmButton
                                                noun={Provider::NOUN}
                                                on_confirm=move |_| providers.remove(id.clone())
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
                            "SSN"
                            <input
                                type="text"
                                prop:value=move || form.field(|d| d.ssn.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    form.edit(|d| d.ssn = value);
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
