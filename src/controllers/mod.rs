//! Screen Controllers
//!
//! The request/response/state lifecycle every list-and-form screen repeats:
//! a list that refetches after each change, a draft that validates and
//! submits, and a transient status message.

mod list;
mod form;
mod notification;

pub use list::{complete_task, use_practices, use_resource_list, LoadState};
pub use form::{use_form, Draft, FormMode};
pub use notification::{NotificationKind, Notifier};
