//! Ply Console App
//!
//! Shell: sidebar navigation, header with the practice picker, one active page.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{
    EnrollmentList, GroupInformation, LocationList, LogPanel, PracticeList, PracticeSelector, ProviderList, TaskList, Toast,
};
use crate::config::ApiConfig;
use crate::context::AppContext;
use crate::store::{SelectionState, SelectionStateStoreFields, SelectionStore};

/// Console pages, in sidebar order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    GroupInformation,
    Locations,
    Providers,
    Enrollments,
    Practices,
}

impl Page {
    pub const ALL: [Page; 6] = [
        Page::Home,
        Page::GroupInformation,
        Page::Locations,
        Page::Providers,
        Page::Enrollments,
        Page::Practices,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Tasks",
            Page::GroupInformation => "Group Information",
            Page::Locations => "Locations",
            Page::Providers => "Providers",
            Page::Enrollments => "Enrollments",
            Page::Practices => "Practices",
        }
    }

    /// Everything but the practice list is scoped to one practice
    pub fn needs_practice(self) -> bool {
        self != Page::Practices
    }
}

#[component]
pub fn App() -> impl IntoView {
    let config = ApiConfig::from_env();
    log::info!("[App] API at {}", config.endpoint(""));

    // Provide context to all children
    provide_context(AppContext::new(config));
    let store: SelectionStore = Store::new(SelectionState::default());
    provide_context(store);

    let (page, set_page) = signal(Page::Home);
    let has_practice = Memo::new(move |_| store.selected_practice_id().get().is_some());

    view! {
        <div class="app-layout">
            <nav class="sidebar">
                <div class="sidebar-brand">"Ply Console"</div>
                {Page::ALL.into_iter().map(|p| {
                    let item_class = move || if page.get() == p { "sidebar-item active" } else { "sidebar-item" };
                    view! {
                        <button class=item_class on:click=move |_| set_page.set(p)>{p.title()}</button>
                    }
                }).collect_view()}
                <LogPanel />
            </nav>

            <div class="main-column">
                <header class="app-header">
                    <h1>{move || page.get().title()}</h1>
                    <PracticeSelector />
                </header>

                <main class="main-content">
                    {move || {
                        let current = page.get();
                        if current.needs_practice() && !has_practice.get() {
                            return view! {
                                <p class="select-practice-hint">"Please select a practice first"</p>
                            }.into_any();
                        }
                        match current {
                            Page::Home => view! { <TaskList /> }.into_any(),
                            Page::GroupInformation => view! { <GroupInformation /> }.into_any(),
                            Page::Locations => view! { <LocationList /> }.into_any(),
                            Page::Providers => view! { <ProviderList /> }.into_any(),
                            Page::Enrollments => view! { <EnrollmentList /> }.into_any(),
                            Page::Practices => view! { <PracticeList /> }.into_any(),
                        }
                    }}
                </main>
            </div>

            <Toast />
        </div>
    }
}
