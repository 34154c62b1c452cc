//! Task List Component
//!
//! Home page: the selected practice's tasks with a Complete action.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::render_list;
use crate::context::use_app_context;
use crate::controllers::{complete_task, use_resource_list};
use crate::models::Task;
use crate::store::{selected_practice_signal, use_selection};

#[component]
pub fn TaskList() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_selection();
    let tasks = use_resource_list::<Task>(selected_practice_signal(store));

    let complete = move |task: Task| {
        spawn_local(async move {
            let api = ctx.api();
            match complete_task(&api, &task).await {
                Ok(()) => {
                    log::info!("[TaskList] completed {}", task.id);
                    ctx.notifier.success("Task marked as completed");
                    tasks.reload();
                }
                Err(e) => {
                    log::error!("[TaskList] complete {} failed: {}", task.id, e);
                    ctx.notifier.error("Failed to update task");
                }
            }
        });
    };

    view! {
        <section class="page task-list">
            <h2>"Tasks"</h2>
            {move || render_list(tasks.state(), "No tasks available", move |rows| {
                view! {
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Task"</th>
                                <th>"Status"</th>
                                <th class="actions">"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || rows.clone()
                                key=|task| (task.id.clone(), task.status.as_str().to_string())
                                children=move |task| {
                                    let badge = format!("status-badge {}", task.status.badge_class());
                                    let status = task.status.as_str().to_string();
                                    let message = task.message.clone();
                                    let done = task.is_completed();
                                    view! {
                                        <tr>
                                            <td>{message}</td>
                                            <td><span class=badge>{status}</span></td>
                                            <td class="actions">
                                                {(!done).then(move || view! {
                                                    <button class="btn btn-small" on:click=move |_| complete(task.clone())>
                                                        "Complete"
                                                    </button>
                                                })}
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                }
            })}
        </section>
    }
}
