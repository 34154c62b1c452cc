//! UI Components
//!
//! Shared widgets and one component per console page.

mod delete_confirm_button;
mod modal;
mod toast;
mod list_state;
mod log_panel;
mod practice_selector;
mod practice_list;
mod group_information;
mod document_list;
mod location_list;
mod provider_list;
mod enrollment_list;
mod task_list;

pub use delete_confirm_button::DeleteConfirmButton;
pub use modal::Modal;
pub use toast::Toast;
pub use list_state::{render_list, Spinner};
pub use log_panel::LogPanel;
pub use practice_selector::PracticeSelector;
pub use practice_list::PracticeList;
pub use group_information::GroupInformation;
pub use document_list::DocumentList;
pub use location_list::LocationList;
pub use provider_list::ProviderList;
pub use enrollment_list::EnrollmentList;
pub use task_list::TaskList;
