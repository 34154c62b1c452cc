//! Form Drafts
//!
//! Editable copies of each record with the presence checks the forms run
//! before anything is sent. All other shaping (EIN format etc.) is left to
//! the server.

use crate::controllers::Draft;
use crate::error::ValidationError;
use crate::models::{Enrollment, EnrollmentKind, Location, Practice, Provider, DEFAULT_ENROLLMENT_STATUS};

fn required(value: &str, field: &'static str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ValidationError::MissingField(field))
    } else {
        Ok(trimmed.to_string())
    }
}

// ========================
// Practice
// ========================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PracticeDraft {
    pub name: String,
    pub ein: String,
    pub owner_name: String,
}

impl Draft for PracticeDraft {
    type Record = Practice;

    fn from_record(record: &Practice) -> Self {
        Self {
            name: record.name.clone(),
            ein: record.ein.clone(),
            owner_name: record.owner_name.clone(),
        }
    }

    /// A practice is its own parent, so `practice_id` is unused
    fn validate(&self, _practice_id: &str) -> Result<Practice, ValidationError> {
        Ok(Practice {
            id: String::new(),
            name: required(&self.name, "Name")?,
            ein: self.ein.trim().to_string(),
            owner_name: self.owner_name.trim().to_string(),
        })
    }
}

// ========================
// Location
// ========================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocationDraft {
    pub address: String,
}

impl Draft for LocationDraft {
    type Record = Location;

    fn from_record(record: &Location) -> Self {
        Self { address: record.address.clone() }
    }

    fn validate(&self, practice_id: &str) -> Result<Location, ValidationError> {
        Ok(Location {
            id: String::new(),
            practice_id: practice_id.to_string(),
            address: required(&self.address, "Address")?,
        })
    }
}

// ========================
// Provider
// ========================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProviderDraft {
    pub name: String,
    pub ssn: String,
}

impl Draft for ProviderDraft {
    type Record = Provider;

    fn from_record(record: &Provider) -> Self {
        Self { name: record.name.clone(), ssn: record.ssn.clone() }
    }

    fn validate(&self, practice_id: &str) -> Result<Provider, ValidationError> {
        Ok(Provider {
            id: String::new(),
            practice_id: practice_id.to_string(),
            name: required(&self.name, "Name")?,
            ssn: self.ssn.trim().to_string(),
        })
    }
}

// ========================
// Enrollment
// ========================

/// Radio choice in the enrollment form. The provider id lives beside it
/// while the user is still picking one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KindChoice {
    #[default]
    Group,
    Provider,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnrollmentDraft {
    pub state: String,
    pub payer: String,
    pub status: String,
    pub location_id: String,
    pub kind: KindChoice,
    pub provider_id: String,
}

impl Default for EnrollmentDraft {
    fn default() -> Self {
        Self {
            state: String::new(),
            payer: String::new(),
            status: DEFAULT_ENROLLMENT_STATUS.to_string(),
            location_id: String::new(),
            kind: KindChoice::Group,
            provider_id: String::new(),
        }
    }
}

/// Statuses offered when editing an enrollment; new ones always start drafted
pub const ENROLLMENT_STATUSES: [&str; 3] = ["Draft", "Working", "Complete"];

impl EnrollmentDraft {
    /// Options for the status select. A stored status outside the fixed set
    /// (e.g. `drafted`) is listed first so opening the form doesn't change it.
    pub fn status_choices(&self) -> Vec<String> {
        let mut choices: Vec<String> = ENROLLMENT_STATUSES.iter().map(|s| s.to_string()).collect();
        if !self.status.is_empty() && !choices.contains(&self.status) {
            choices.insert(0, self.status.clone());
        }
        choices
    }

    /// Switching to group drops any provider picked earlier
    pub fn set_kind(&mut self, kind: KindChoice) {
        self.kind = kind;
        if kind == KindChoice::Group {
            self.provider_id.clear();
        }
    }

    pub fn choose_provider(&mut self, provider_id: &str) {
        self.kind = KindChoice::Provider;
        self.provider_id = provider_id.to_string();
    }
}

impl Draft for EnrollmentDraft {
    type Record = Enrollment;

    fn from_record(record: &Enrollment) -> Self {
        let (kind, provider_id) = match &record.kind {
            EnrollmentKind::Group => (KindChoice::Group, String::new()),
            EnrollmentKind::Provider { provider_id } => (KindChoice::Provider, provider_id.clone()),
        };
        Self {
            state: record.state.clone(),
            payer: record.payer.clone(),
            status: record.status.clone(),
            location_id: record.location_id.clone(),
            kind,
            provider_id,
        }
    }

    fn validate(&self, practice_id: &str) -> Result<Enrollment, ValidationError> {
        let kind = match self.kind {
            KindChoice::Group => EnrollmentKind::Group,
            KindChoice::Provider => {
                let provider_id = self.provider_id.trim();
                if provider_id.is_empty() {
                    return Err(ValidationError::ProviderRequired);
                }
                EnrollmentKind::Provider { provider_id: provider_id.to_string() }
            }
        };
        let status = if self.status.trim().is_empty() {
            DEFAULT_ENROLLMENT_STATUS.to_string()
        } else {
            self.status.trim().to_string()
        };
        Ok(Enrollment {
            id: String::new(),
            practice_id: practice_id.to_string(),
            state: self.state.trim().to_string(),
            payer: self.payer.trim().to_string(),
            status,
            location_id: self.location_id.clone(),
            kind,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Entity;

    #[test]
    fn test_practice_requires_name() {
        let draft = PracticeDraft { name: "   ".to_string(), ..Default::default() };
        assert_eq!(draft.validate(""), Err(ValidationError::MissingField("Name")));
    }

    #[test]
    fn test_location_carries_practice() {
        let draft = LocationDraft { address: " 1 Main St ".to_string() };
        let location = draft.validate("p1").unwrap();
        assert_eq!(location.practice_id, "p1");
        assert_eq!(location.address, "1 Main St");
        assert!(location.id.is_empty());
    }

    #[test]
    fn test_location_requires_address() {
        assert_eq!(
            LocationDraft::default().validate("p1"),
            Err(ValidationError::MissingField("Address"))
        );
    }

    #[test]
    fn test_provider_kind_requires_provider_id() {
        let mut draft = EnrollmentDraft::default();
        draft.set_kind(KindChoice::Provider);
        assert_eq!(draft.validate("p1"), Err(ValidationError::ProviderRequired));

        draft.choose_provider("pr1");
        let enrollment = draft.validate("p1").unwrap();
        assert_eq!(enrollment.kind, EnrollmentKind::Provider { provider_id: "pr1".to_string() });
    }

    #[test]
    fn test_switching_to_group_clears_provider() {
        let mut draft = EnrollmentDraft::default();
        draft.choose_provider("pr1");
        draft.set_kind(KindChoice::Group);
        assert!(draft.provider_id.is_empty());
        assert_eq!(draft.validate("p1").unwrap().kind, EnrollmentKind::Group);
    }

    #[test]
    fn test_group_ignores_stale_provider_id() {
        let draft = EnrollmentDraft {
            kind: KindChoice::Group,
            provider_id: "pr-stale".to_string(),
            ..Default::default()
        };
        assert_eq!(draft.validate("p1").unwrap().kind, EnrollmentKind::Group);
    }

    #[test]
    fn test_status_choices_keep_stored_value() {
        let draft = EnrollmentDraft::default();
        assert_eq!(draft.status_choices(), vec!["drafted", "Draft", "Working", "Complete"]);

        let working = EnrollmentDraft { status: "Working".to_string(), ..Default::default() };
        assert_eq!(working.status_choices(), vec!["Draft", "Working", "Complete"]);
    }

    #[test]
    fn test_new_enrollment_starts_drafted() {
        let enrollment = EnrollmentDraft::default().validate("p1").unwrap();
        assert_eq!(enrollment.status, "drafted");
    }

    #[test]
    fn test_enrollment_draft_from_record() {
        let record = Enrollment {
            id: "e1".to_string(),
            practice_id: "p1".to_string(),
            state: "TX".to_string(),
            payer: "UHC".to_string(),
            status: "submitted".to_string(),
            location_id: "l1".to_string(),
            kind: EnrollmentKind::Provider { provider_id: "pr2".to_string() },
        };
        let draft = EnrollmentDraft::from_record(&record);
        assert_eq!(draft.kind, KindChoice::Provider);
        assert_eq!(draft.provider_id, "pr2");
        assert_eq!(draft.status, "submitted");
        assert_eq!(draft.validate("p1").unwrap().with_id("e1".to_string()), record);
    }
}
