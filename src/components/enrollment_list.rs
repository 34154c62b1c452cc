//! Enrollment List Component
//!
//! Payer enrollments of the selected practice. Location and provider names
//! come from their own lists, fetched independently of the enrollments.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{render_list, DeleteConfirmButton, Modal};
use crate::context::use_app_context;
use crate::controllers::{use_form, use_resource_list, FormMode, LoadState};
use crate::drafts::{EnrollmentDraft, KindChoice};
use crate::models::{Activity, Enrollment, Entity, Location, Provider};
use crate::store::{selected_practice_signal, use_selection, SelectionStateStoreFields};

/// Display label for `id` among `rows`, falling back to the raw id
fn resolve_label<T: Entity>(rows: &[T], id: &str, label: impl Fn(&T) -> String) -> String {
    rows.iter().find(|row| row.id() == id).map(label).unwrap_or_else(|| id.to_string())
}

#[component]
pub fn EnrollmentList() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_selection();
    let practice = selected_practice_signal(store);
    let enrollments = use_resource_list::<Enrollment>(practice);
    let locations = use_resource_list::<Location>(practice);
    let providers = use_resource_list::<Provider>(practice);
    let form = use_form::<EnrollmentDraft>();
    let activities = RwSignal::new(LoadState::<Vec<Activity>>::Idle);

    // Activities only exist for stored enrollments
    Effect::new(move |_| {
        let Some(FormMode::Edit(enrollment_id)) = form.mode() else {
            activities.set(LoadState::Idle);
            return;
        };
        activities.set(LoadState::Loading);
        let api = ctx.api();
        spawn_local(async move {
            let next = match api.list_activities(&enrollment_id).await {
                Ok(rows) => LoadState::Loaded(rows),
                Err(e) => {
                    log::error!("[EnrollmentList] activities for {} failed: {}", enrollment_id, e);
                    LoadState::Error("Failed to load activities".to_string())
                }
            };
            activities.try_set(next);
        });
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let practice_id = store.selected_practice_id().get_untracked().unwrap_or_default();
        form.submit(practice_id, move |_| enrollments.reload());
    };

    let title = Signal::derive(move || {
        if form.mode().is_some_and(|m| m.is_edit()) { "Edit Enrollment".to_string() } else { "Add Enrollment".to_string() }
    });

    view! {
        <section class="page enrollment-list">
            <div class="page-header">
                <h2>"Enrollments"</h2>
                <button class="btn btn-primary" on:click=move |_| form.open_create()>"Add Enrollment"</button>
            </div>

            {move || render_list(enrollments.state(), "No enrollments yet", move |rows| {
                let location_rows = locations.rows();
                let provider_rows = providers.rows();
                view! {
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"State"</th>
                                <th>"Payer"</th>
                                <th>"Status"</th>
                                <th>"Location"</th>
                                <th>"Type"</th>
                                <th>"Provider"</th>
                                <th class="actions">"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {rows.into_iter().map(|enrollment| {
                                let id = enrollment.id.clone();
                                let location = resolve_label(&location_rows, &enrollment.location_id, |l| l.address.clone());
                                let provider = match enrollment.kind.provider_id() {
                                    Some(provider_id) => resolve_label(&provider_rows, provider_id, |p| p.name.clone()),
                                    None => "-".to_string(),
                                };
                                let state = enrollment.state.clone();
                                let payer = enrollment.payer.clone();
                                let status = enrollment.status.clone();
                                let kind = enrollment.kind.label();
                                view! {
                                    <tr>
                                        <td>{state}</td>
                                        <td>{payer}</td>
                                        <td><span class="status-badge">{status}</span></td>
                                        <td>{location}</td>
                                        <td>{kind}</td>
                                        <td>{provider}</td>
                                        <td class="actions">
                                            <button class="btn btn-small" on:click=move |_| form.open_edit(&enrollment)>
                                                "Edit"
                                            </button>
                                            <DeleteConfirmButton
                                                noun={Enrollment::NOUN}
                                                on_confirm=move |_| enrollments.remove(id.clone())
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
                            "State"
                            <input
                                type="text"
                                prop:value=move || form.field(|d| d.state.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    form.edit(|d| d.state = value);
                                }
                            />
                        </label>
                        <label>
                            "Payer"
                            <input
                                type="text"
                                prop:value=move || form.field(|d| d.payer.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    form.edit(|d| d.payer = value);
                                }
                            />
                        </label>
                        <Show when=move || form.mode().is_some_and(|m| m.is_edit())>
                            <label>
                                "Status"
                                <select
                                    prop:value=move || form.field(|d| d.status.clone())
                                    on:change=move |ev| {
                                        let value = event_target_value(&ev);
                                        form.edit(|d| d.status = value);
                                    }
                                >
                                    {move || {
                                        let current = form.field(|d| d.status.clone());
                                        form.field(EnrollmentDraft::status_choices)
                                            .into_iter()
                                            .map(|status| {
                                                let selected = status == current;
                                                view! { <option value=status.clone() selected=selected>{status.clone()}</option> }
                                            })
                                            .collect_view()
                                    }}
                                </select>
                            </label>
                        </Show>
                        <label>
                            "Location"
                            <select
                                prop:value=move || form.field(|d| d.location_id.clone())
                                on:change=move |ev| {
                                    let value = event_target_value(&ev);
                                    form.edit(|d| d.location_id = value);
                                }
                            >
                                <option value="">"Select a location"</option>
                                {move || locations.rows().into_iter().map(|location| {
                                    let selected = form.field(|d| d.location_id == location.id);
                                    view! { <option value=location.id.clone() selected=selected>{location.address}</option> }
                                }).collect_view()}
                            </select>
                        </label>

                        <fieldset class="kind-choice">
                            <legend>"Enrollment Type"</legend>
                            <label>
                                <input
                                    type="radio"
                                    name="enrollment-kind"
                                    prop:checked=move || form.field(|d| d.kind == KindChoice::Group)
                                    on:change=move |_| form.edit(|d| d.set_kind(KindChoice::Group))
                                />
                                "Group"
                            </label>
                            <label>
                                <input
                                    type="radio"
                                    name="enrollment-kind"
                                    prop:checked=move || form.field(|d| d.kind == KindChoice::Provider)
                                    on:change=move |_| form.edit(|d| d.set_kind(KindChoice::Provider))
                                />
                                "Provider"
                            </label>
                        </fieldset>

                        <Show when=move || form.field(|d| d.kind == KindChoice::Provider)>
                            <label>
                                "Provider"
                                <select
                                    prop:value=move || form.field(|d| d.provider_id.clone())
                                    on:change=move |ev| {
                                        let value = event_target_value(&ev);
                                        form.edit(|d| d.choose_provider(&value));
                                    }
                                >
                                    <option value="">"Select a provider"</option>
                                    {move || providers.rows().into_iter().map(|provider| {
                                        let selected = form.field(|d| d.provider_id == provider.id);
                                        view! { <option value=provider.id.clone() selected=selected>{provider.name}</option> }
                                    }).collect_view()}
                                </select>
                            </label>
                        </Show>

                        <Show when=move || form.mode().is_some_and(|m| m.is_edit())>
                            <div class="activity-log">
                                <h4>"Activities"</h4>
                                {move || render_list(activities.get(), "No activities yet", |rows| {
                                    view! {
                                        <ul class="activity-items">
                                            {rows.into_iter().map(|activity| view! { <li>{activity.message}</li> }).collect_view()}
                                        </ul>
                                    }
                                })}
                            </div>
                        </Show>

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
