//! Practice List Component
//!
//! Card list of every practice; clicking a card selects it.

use leptos::prelude::*;

use crate::components::render_list;
use crate::controllers::use_practices;
use crate::store::{store_select_practice, use_selection, SelectionStateStoreFields};

#[component]
pub fn PracticeList() -> impl IntoView {
    let store = use_selection();
    let practices = use_practices(Signal::derive(move || store.refresh_key().get()));

    view! {
        <section class="page practice-list">
            <h2>"Practices"</h2>
            {move || render_list(practices.get(), "No practices yet", move |rows| {
                view! {
                    <div class="card-grid">
                        <For
                            each=move || rows.clone()
                            key=|practice| practice.id.clone()
                            children=move |practice| {
                                let id = practice.id.clone();
                                let card_id = id.clone();
                                let card_class = move || {
                                    if store.selected_practice_id().get().as_deref() == Some(card_id.as_str()) {
                                        "card practice-card selected"
                                    } else {
                                        "card practice-card"
                                    }
                                };
                                view! {
                                    <div class=card_class on:click=move |_| store_select_practice(&store, &id)>
                                        <h3>{practice.name}</h3>
                                        <p>"EIN: " {practice.ein}</p>
                                        <p>"Owner: " {practice.owner_name}</p>
                                    </div>
                                }
                            }
                        />
                    </div>
                }
            })}
        </section>
    }
}
