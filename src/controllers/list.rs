//! Entity List Controller
//!
//! Owns the rows of one resource for the selected practice. Rows are never
//! patched locally: every change goes through the server and the list is
//! fetched again.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{ApiClient, DeleteApi, ListApi, UpdateApi};
use crate::context::{use_app_context, AppContext};
use crate::error::ApiResult;
use crate::models::{Entity, Practice, Task, TaskStatus};

/// Tri-state every screen renders, plus the state before a practice is chosen
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadState<T> {
    #[default]
    Idle,
    Loading,
    Loaded(T),
    Error(String),
}

impl<T> LoadState<T> {
    pub fn loaded(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(value) => Some(value),
            _ => None,
        }
    }
}

/// Identifies one fetch so its answer can be matched to the practice it was for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub practice_id: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListCore<T> {
    practice_id: Option<String>,
    state: LoadState<Vec<T>>,
}

impl<T> Default for ListCore<T> {
    fn default() -> Self {
        Self { practice_id: None, state: LoadState::Idle }
    }
}

impl<T: Entity> ListCore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fetch for `practice_id`. Rows from before are dropped right away.
    /// Returns `None` (and goes idle) when no practice is selected.
    pub fn begin(&mut self, practice_id: Option<&str>) -> Option<FetchTicket> {
        match practice_id {
            Some(id) if !id.is_empty() => {
                self.practice_id = Some(id.to_string());
                self.state = LoadState::Loading;
                Some(FetchTicket { practice_id: id.to_string() })
            }
            _ => {
                self.practice_id = None;
                self.state = LoadState::Idle;
                None
            }
        }
    }

    /// Apply a fetch result. Answers for a practice that is no longer selected
    /// are dropped; for the same practice the last answer to land wins.
    pub fn finish(&mut self, ticket: &FetchTicket, result: Result<Vec<T>, String>) -> bool {
        if self.practice_id.as_deref() != Some(ticket.practice_id.as_str()) {
            return false;
        }
        self.state = match result {
            Ok(rows) => LoadState::Loaded(rows),
            Err(message) => LoadState::Error(message),
        };
        true
    }

    pub fn state(&self) -> &LoadState<Vec<T>> {
        &self.state
    }

    /// Rows of the last successful fetch, empty otherwise
    pub fn rows(&self) -> &[T] {
        self.state.loaded().map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Run the list call for a ticket, logging failures
pub async fn fetch_rows<T, A>(api: &A, ticket: &FetchTicket) -> Result<Vec<T>, String>
where
    T: Entity,
    A: ListApi<T> + ?Sized,
{
    match api.list(&ticket.practice_id).await {
        Ok(rows) => {
            log::debug!("[{}] loaded {} rows for practice {}", T::NOUN, rows.len(), ticket.practice_id);
            Ok(rows)
        }
        Err(e) => {
            log::error!("[{}] fetch failed for practice {}: {}", T::NOUN, ticket.practice_id, e);
            Err(format!("Failed to load {}s", T::NOUN))
        }
    }
}

/// Post the task back with status `Completed`. Repeating it is harmless.
pub async fn complete_task<A>(api: &A, task: &Task) -> ApiResult<()>
where
    A: UpdateApi<Task> + ?Sized,
{
    let done = Task { status: TaskStatus::Completed, ..task.clone() };
    api.update(&done).await
}

/// Reactive list bound to the selected practice
pub struct ListHandle<T: Send + Sync + 'static> {
    core: RwSignal<ListCore<T>>,
    refresh: RwSignal<u32>,
    ctx: AppContext,
}

impl<T: Send + Sync + 'static> Clone for ListHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for ListHandle<T> {}

impl<T: Entity + Send + Sync> ListHandle<T> {
    /// Invalidate and fetch again
    pub fn reload(&self) {
        self.refresh.update(|n| *n += 1);
    }

    pub fn state(&self) -> LoadState<Vec<T>> {
        self.core.with(|c| c.state().clone())
    }

    pub fn rows(&self) -> Vec<T> {
        self.core.with(|c| c.rows().to_vec())
    }

    /// Delete a row (after the user confirmed) and refetch on success
    pub fn remove(&self, id: String)
    where
        ApiClient: DeleteApi<T>,
    {
        let ctx = self.ctx;
        let handle = *self;
        spawn_local(async move {
            let api = ctx.api();
            match DeleteApi::<T>::delete(&api, &id).await {
                Ok(()) => {
                    log::info!("[{}] deleted {}", T::NOUN, id);
                    ctx.notifier.success(format!("{} deleted successfully", capitalize(T::NOUN)));
                    handle.reload();
                }
                Err(e) => {
                    log::error!("[{}] delete {} failed: {}", T::NOUN, id, e);
                    ctx.notifier.error(format!("Failed to delete {}", T::NOUN));
                }
            }
        });
    }
}

/// Wire a list to the selected practice. Fetches on mount, whenever the
/// practice changes and whenever `reload` is called.
pub fn use_resource_list<T>(practice_id: Signal<Option<String>>) -> ListHandle<T>
where
    T: Entity + Send + Sync,
    ApiClient: ListApi<T>,
{
    let ctx = use_app_context();
    let core = RwSignal::new(ListCore::<T>::new());
    let refresh = RwSignal::new(0u32);

    Effect::new(move |_| {
        let _ = refresh.get();
        let parent = practice_id.get();
        let mut ticket = None;
        core.update(|c| ticket = c.begin(parent.as_deref()));
        let Some(ticket) = ticket else { return };

        let api = ctx.api();
        spawn_local(async move {
            let result = fetch_rows::<T, _>(&api, &ticket).await;
            core.try_update(|c| c.finish(&ticket, result));
        });
    });

    ListHandle { core, refresh, ctx }
}

/// All practices, fetched on mount and again whenever `refresh` changes.
/// Practices have no parent, so this sits outside `ListCore`.
pub fn use_practices(refresh: Signal<u32>) -> RwSignal<LoadState<Vec<Practice>>> {
    let ctx = use_app_context();
    let state = RwSignal::new(LoadState::Idle);

    Effect::new(move |_| {
        let key = refresh.get();
        state.set(LoadState::Loading);
        let api = ctx.api();
        spawn_local(async move {
            let next = match api.list_practices().await {
                Ok(rows) => {
                    log::debug!("[practice] loaded {} practices (refresh {})", rows.len(), key);
                    LoadState::Loaded(rows)
                }
                Err(e) => {
                    log::error!("[practice] list failed: {}", e);
                    LoadState::Error("Failed to load practices".to_string())
                }
            };
            state.try_set(next);
        });
    });

    state
}

pub(crate) fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::CreateApi;
    use crate::models::Location;
    use crate::testing::MemoryBackend;

    fn location(practice_id: &str, address: &str) -> Location {
        Location { practice_id: practice_id.to_string(), address: address.to_string(), ..Default::default() }
    }

    #[test]
    fn test_begin_without_practice_is_idle() {
        let mut core = ListCore::<Location>::new();
        assert!(core.begin(None).is_none());
        assert_eq!(core.state(), &LoadState::Idle);
        assert!(core.begin(Some("")).is_none());
    }

    #[test]
    fn test_switching_practice_clears_rows_immediately() {
        let mut core = ListCore::<Location>::new();
        let ticket = core.begin(Some("p1")).unwrap();
        core.finish(&ticket, Ok(vec![location("p1", "1 Main St")]));
        assert_eq!(core.rows().len(), 1);

        core.begin(Some("p2"));
        assert_eq!(core.state(), &LoadState::Loading);
        assert!(core.rows().is_empty());
    }

    #[test]
    fn test_answer_for_previous_practice_is_dropped() {
        let mut core = ListCore::<Location>::new();
        let old = core.begin(Some("p1")).unwrap();
        let new = core.begin(Some("p2")).unwrap();

        assert!(core.finish(&new, Ok(vec![location("p2", "2 Oak Ave")])));
        assert!(!core.finish(&old, Ok(vec![location("p1", "1 Main St")])));
        assert_eq!(core.rows()[0].address, "2 Oak Ave");
    }

    #[test]
    fn test_same_practice_last_answer_wins() {
        let mut core = ListCore::<Location>::new();
        let first = core.begin(Some("p1")).unwrap();
        let second = core.begin(Some("p1")).unwrap();
        assert!(core.finish(&second, Ok(vec![location("p1", "new")])));
        assert!(core.finish(&first, Ok(vec![location("p1", "old")])));
        assert_eq!(core.rows()[0].address, "old");
    }

    #[test]
    fn test_failure_becomes_error_state() {
        let mut core = ListCore::<Location>::new();
        let ticket = core.begin(Some("p1")).unwrap();
        core.finish(&ticket, Err("Failed to load locations".to_string()));
        assert_eq!(core.state(), &LoadState::Error("Failed to load locations".to_string()));
        assert!(core.rows().is_empty());
    }

    #[tokio::test]
    async fn test_empty_practice_loads_empty_not_error() {
        let api = MemoryBackend::new();
        let mut core = ListCore::<Location>::new();
        let ticket = core.begin(Some("p-empty")).unwrap();
        let result = fetch_rows::<Location, _>(&api, &ticket).await;
        core.finish(&ticket, result);
        assert_eq!(core.state(), &LoadState::Loaded(Vec::new()));
    }

    #[tokio::test]
    async fn test_server_failure_is_reported_as_fetch_failed() {
        let api = MemoryBackend::new();
        api.fail_next();
        let mut core = ListCore::<Location>::new();
        let ticket = core.begin(Some("p1")).unwrap();
        let result = fetch_rows::<Location, _>(&api, &ticket).await;
        core.finish(&ticket, result);
        assert_eq!(core.state(), &LoadState::Error("Failed to load locations".to_string()));
    }

    #[tokio::test]
    async fn test_delete_then_list_shows_row_absent() {
        let api = MemoryBackend::new();
        let keep = api.create(&location("p1", "1 Main St")).await.unwrap();
        let gone = api.create(&location("p1", "2 Oak Ave")).await.unwrap();

        DeleteApi::<Location>::delete(&api, &gone).await.unwrap();

        let mut core = ListCore::<Location>::new();
        let ticket = core.begin(Some("p1")).unwrap();
        let result = fetch_rows::<Location, _>(&api, &ticket).await;
        core.finish(&ticket, result);
        assert!(!core.rows().iter().any(|row| row.id == gone));
        assert!(core.rows().iter().any(|row| row.id == keep));
    }

    #[tokio::test]
    async fn test_completing_task_twice_stays_completed() {
        let api = MemoryBackend::new();
        let task = api.seed_task("p1", "Sign payer contract", TaskStatus::Pending);

        complete_task(&api, &task).await.unwrap();
        complete_task(&api, &task).await.unwrap();

        let tasks: Vec<Task> = ListApi::<Task>::list(&api, "p1").await.unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].id, task.id);
        assert_eq!(tasks[0].status, TaskStatus::Completed);
        assert_eq!(tasks[0].message, "Sign payer contract");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("enrollment"), "Enrollment");
        assert_eq!(capitalize(""), "");
    }
}
