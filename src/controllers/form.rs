//! Form/Modal Controller
//!
//! A draft copy of one record's editable fields. Submitting validates the
//! draft, creates or updates through the API and, on success, closes the
//! modal and refreshes the owning list. On failure the modal stays open with
//! the draft untouched.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{ApiClient, CreateApi, UpdateApi};
use crate::context::{use_app_context, AppContext};
use crate::error::{SubmitError, ValidationError};
use crate::models::Entity;

/// Editable copy of a record
pub trait Draft: Clone + Default + Send + Sync + 'static {
    type Record: Entity;

    fn from_record(record: &Self::Record) -> Self;

    /// Presence checks, then the record to send (id left empty)
    fn validate(&self, practice_id: &str) -> Result<Self::Record, ValidationError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(String),
}

impl FormMode {
    pub fn is_edit(&self) -> bool {
        matches!(self, FormMode::Edit(_))
    }
}

/// Validate and send a draft; returns the id of the stored record
pub async fn submit_draft<D, A>(api: &A, practice_id: &str, mode: &FormMode, draft: &D) -> Result<String, SubmitError>
where
    D: Draft,
    A: CreateApi<D::Record> + UpdateApi<D::Record> + ?Sized,
{
    let record = draft.validate(practice_id)?;
    match mode {
        FormMode::Create => Ok(api.create(&record).await?),
        FormMode::Edit(id) => {
            let record = record.with_id(id.clone());
            api.update(&record).await?;
            Ok(id.clone())
        }
    }
}

/// Open/closed modal plus its draft
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState<D> {
    pub mode: Option<FormMode>,
    pub draft: D,
    pub submitting: bool,
}

impl<D: Draft> FormState<D> {
    pub fn open_create(&mut self) {
        self.mode = Some(FormMode::Create);
        self.draft = D::default();
        self.submitting = false;
    }

    pub fn open_edit(&mut self, record: &D::Record) {
        self.mode = Some(FormMode::Edit(record.id().to_string()));
        self.draft = D::from_record(record);
        self.submitting = false;
    }

    pub fn close(&mut self) {
        *self = Self::default();
    }

    pub fn is_open(&self) -> bool {
        self.mode.is_some()
    }
}

/// Reactive form bound to a modal
pub struct FormHandle<D: Send + Sync + 'static> {
    state: RwSignal<FormState<D>>,
    /// Mode alone, so readers are not woken by draft edits
    mode: Memo<Option<FormMode>>,
    ctx: AppContext,
}

impl<D: Send + Sync + 'static> Clone for FormHandle<D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D: Send + Sync + 'static> Copy for FormHandle<D> {}

impl<D: Draft + PartialEq> FormHandle<D> {
    fn new(ctx: AppContext) -> Self {
        let state = RwSignal::new(FormState::default());
        let mode = Memo::new(move |_| state.with(|s: &FormState<D>| s.mode.clone()));
        Self { state, mode, ctx }
    }

    pub fn open_create(&self) {
        self.state.update(|s| s.open_create());
    }

    pub fn open_edit(&self, record: &D::Record) {
        self.state.update(|s| s.open_edit(record));
    }

    pub fn close(&self) {
        self.state.update(|s| s.close());
    }

    pub fn is_open(&self) -> bool {
        self.mode.with(Option::is_some)
    }

    pub fn mode(&self) -> Option<FormMode> {
        self.mode.get()
    }

    pub fn submitting(&self) -> bool {
        self.state.with(|s| s.submitting)
    }

    /// Read one field of the draft (tracked)
    pub fn field<R>(&self, read: impl Fn(&D) -> R) -> R {
        self.state.with(|s| read(&s.draft))
    }

    /// Change the draft in place
    pub fn edit(&self, change: impl FnOnce(&mut D)) {
        self.state.update(|s| change(&mut s.draft));
    }

    /// Submit the draft; `on_saved` runs after the modal closes
    pub fn submit(&self, practice_id: String, on_saved: impl Fn(String) + 'static)
    where
        ApiClient: CreateApi<D::Record> + UpdateApi<D::Record>,
    {
        let Some(mode) = self.state.with_untracked(|s| s.mode.clone()) else { return };
        if self.state.with_untracked(|s| s.submitting) {
            return;
        }
        let draft = self.state.with_untracked(|s| s.draft.clone());
        let state = self.state;
        let ctx = self.ctx;
        let noun = <D::Record as Entity>::NOUN;

        state.update(|s| s.submitting = true);
        spawn_local(async move {
            let api = ctx.api();
            match submit_draft(&api, &practice_id, &mode, &draft).await {
                Ok(id) => {
                    log::info!("[{}] saved {}", noun, id);
                    state.try_update(|s| s.close());
                    let verb = if mode.is_edit() { "updated" } else { "added" };
                    ctx.notifier.success(format!("{} {} successfully", super::list::capitalize(noun), verb));
                    on_saved(id);
                }
                Err(SubmitError::Invalid(reason)) => {
                    log::warn!("[{}] rejected before submit: {}", noun, reason);
                    state.try_update(|s| s.submitting = false);
                    ctx.notifier.error(reason.to_string());
                }
                Err(SubmitError::Api(e)) => {
                    log::error!("[{}] save failed: {}", noun, e);
                    state.try_update(|s| s.submitting = false);
                    ctx.notifier.error(format!("Failed to save {}", noun));
                }
            }
        });
    }
}

pub fn use_form<D: Draft + PartialEq>() -> FormHandle<D> {
    FormHandle::new(use_app_context())
}
