//! Frontend Models
//!
//! Records exchanged with the practice API. Field names follow the server
//! schema exactly; every field may be omitted on the wire.

use serde::{Deserialize, Serialize};

/// Common contract for records the console lists and edits
pub trait Entity: Clone + PartialEq + 'static {
    /// Singular label used in headings, buttons and log lines
    const NOUN: &'static str;

    /// Server-assigned identifier (empty until created)
    fn id(&self) -> &str;

    /// Copy of this record carrying the given id
    fn with_id(self, id: String) -> Self;
}

/// Records that belong to one practice
pub trait Scoped: Entity {
    fn practice_id(&self) -> &str;
}

fn is_empty(value: &str) -> bool {
    value.is_empty()
}

// ========================
// Practice
// ========================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Practice {
    #[serde(rename = "practiceId", skip_serializing_if = "is_empty")]
    pub id: String,
    pub name: String,
    pub ein: String,
    pub owner_name: String,
}

impl Entity for Practice {
    const NOUN: &'static str = "practice";

    fn id(&self) -> &str {
        &self.id
    }

    fn with_id(self, id: String) -> Self {
        Self { id, ..self }
    }
}

// ========================
// Location
// ========================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Location {
    #[serde(rename = "locationId", skip_serializing_if = "is_empty")]
    pub id: String,
    #[serde(rename = "practiceId")]
    pub practice_id: String,
    pub address: String,
}

impl Entity for Location {
    const NOUN: &'static str = "location";

    fn id(&self) -> &str {
        &self.id
    }

    fn with_id(self, id: String) -> Self {
        Self { id, ..self }
    }
}

impl Scoped for Location {
    fn practice_id(&self) -> &str {
        &self.practice_id
    }
}

// ========================
// Provider
// ========================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Provider {
    #[serde(rename = "providerId", skip_serializing_if = "is_empty")]
    pub id: String,
    #[serde(rename = "practiceId")]
    pub practice_id: String,
    pub name: String,
    pub ssn: String,
}

impl Entity for Provider {
    const NOUN: &'static str = "provider";

    fn id(&self) -> &str {
        &self.id
    }

    fn with_id(self, id: String) -> Self {
        Self { id, ..self }
    }
}

impl Scoped for Provider {
    fn practice_id(&self) -> &str {
        &self.practice_id
    }
}

// ========================
// Enrollment
// ========================

/// Who an enrollment registers with the payer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EnrollmentKind {
    /// The practice as a whole
    #[default]
    Group,
    /// A single provider of the practice
    Provider { provider_id: String },
}

impl EnrollmentKind {
    pub fn label(&self) -> &'static str {
        match self {
            EnrollmentKind::Group => "Group",
            EnrollmentKind::Provider { .. } => "Provider",
        }
    }

    pub fn provider_id(&self) -> Option<&str> {
        match self {
            EnrollmentKind::Group => None,
            EnrollmentKind::Provider { provider_id } => Some(provider_id),
        }
    }
}

/// Status new enrollments start in
pub const DEFAULT_ENROLLMENT_STATUS: &str = "drafted";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "EnrollmentWire", into = "EnrollmentWire")]
pub struct Enrollment {
    pub id: String,
    pub practice_id: String,
    pub state: String,
    pub payer: String,
    pub status: String,
    pub location_id: String,
    pub kind: EnrollmentKind,
}

/// Flat shape the server stores: a `type` string beside a `providerId`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
struct EnrollmentWire {
    #[serde(rename = "enrollmentId", skip_serializing_if = "is_empty")]
    enrollment_id: String,
    #[serde(rename = "practiceId")]
    practice_id: String,
    state: String,
    payer: String,
    status: String,
    #[serde(rename = "locationId")]
    location_id: String,
    #[serde(rename = "type")]
    kind: String,
    #[serde(rename = "providerId")]
    provider_id: String,
}

impl From<EnrollmentWire> for Enrollment {
    fn from(wire: EnrollmentWire) -> Self {
        let kind = match (wire.kind.as_str(), wire.provider_id.is_empty()) {
            ("provider", false) => EnrollmentKind::Provider { provider_id: wire.provider_id },
            ("provider", true) => {
                log::warn!("[Enrollment] {} has type provider but no providerId, reading as group", wire.enrollment_id);
                EnrollmentKind::Group
            }
            _ => EnrollmentKind::Group,
        };
        Self {
            id: wire.enrollment_id,
            practice_id: wire.practice_id,
            state: wire.state,
            payer: wire.payer,
            status: wire.status,
            location_id: wire.location_id,
            kind,
        }
    }
}

impl From<Enrollment> for EnrollmentWire {
    fn from(e: Enrollment) -> Self {
        let (kind, provider_id) = match e.kind {
            EnrollmentKind::Group => ("group".to_string(), String::new()),
            EnrollmentKind::Provider { provider_id } => ("provider".to_string(), provider_id),
        };
        Self {
            enrollment_id: e.id,
            practice_id: e.practice_id,
            state: e.state,
            payer: e.payer,
            status: e.status,
            location_id: e.location_id,
            kind,
            provider_id,
        }
    }
}

impl Entity for Enrollment {
    const NOUN: &'static str = "enrollment";

    fn id(&self) -> &str {
        &self.id
    }

    fn with_id(self, id: String) -> Self {
        Self { id, ..self }
    }
}

impl Scoped for Enrollment {
    fn practice_id(&self) -> &str {
        &self.practice_id
    }
}

/// Read-only log line attached to an enrollment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Activity {
    #[serde(rename = "activityId")]
    pub id: String,
    #[serde(rename = "enrollmentId")]
    pub enrollment_id: String,
    pub message: String,
}

// ========================
// Task
// ========================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TaskStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    /// Any other value the server sends, kept verbatim
    Other(String),
}

impl TaskStatus {
    pub fn as_str(&self) -> &str {
        match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Completed => "Completed",
            TaskStatus::Other(s) => s,
        }
    }

    /// CSS modifier for the status badge
    pub fn badge_class(&self) -> &'static str {
        match self {
            TaskStatus::Completed => "badge completed",
            TaskStatus::InProgress => "badge in-progress",
            _ => "badge",
        }
    }
}

impl From<String> for TaskStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Pending" => TaskStatus::Pending,
            "In Progress" => TaskStatus::InProgress,
            "Completed" => TaskStatus::Completed,
            _ => TaskStatus::Other(s),
        }
    }
}

impl Serialize for TaskStatus {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TaskStatus {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(TaskStatus::from)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Task {
    #[serde(rename = "taskId", skip_serializing_if = "is_empty")]
    pub id: String,
    #[serde(rename = "practiceId")]
    pub practice_id: String,
    pub message: String,
    pub status: TaskStatus,
}

impl Task {
    pub fn is_completed(&self) -> bool {
        self.status == TaskStatus::Completed
    }
}

impl Entity for Task {
    const NOUN: &'static str = "task";

    fn id(&self) -> &str {
        &self.id
    }

    fn with_id(self, id: String) -> Self {
        Self { id, ..self }
    }
}

impl Scoped for Task {
    fn practice_id(&self) -> &str {
        &self.practice_id
    }
}

// ========================
// Document
// ========================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Document {
    #[serde(rename = "documentId", skip_serializing_if = "is_empty")]
    pub id: String,
    #[serde(rename = "practiceId")]
    pub practice_id: String,
    pub file_name: String,
    pub storage_path: String,
}

impl Entity for Document {
    const NOUN: &'static str = "document";

    fn id(&self) -> &str {
        &self.id
    }

    fn with_id(self, id: String) -> Self {
        Self { id, ..self }
    }
}

impl Scoped for Document {
    fn practice_id(&self) -> &str {
        &self.practice_id
    }
}
