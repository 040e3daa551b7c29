//! Task drafts, patches, and validation
//!
//! Validation lives here rather than in the store's mutation paths so
//! the rules stay unit-testable in isolation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::model::{TaskPriority, TaskStatus};

/// Input for creating a task
///
/// Ids and timestamps are assigned by the store, never by the caller.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDraft {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub priority: TaskPriority,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
}

impl TaskDraft {
    /// Check the draft against the task invariants
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut fields = Vec::new();
        if self.title.trim().is_empty() {
            fields.push(DraftField::Title);
        }
        if self.description.trim().is_empty() {
            fields.push(DraftField::Description);
        }
        ValidationError::check(fields)
    }
}

/// Partial update applied to an existing task
///
/// `due_date` is two-level: `None` leaves the deadline untouched,
/// `Some(None)` clears it, `Some(Some(date))` sets it.
#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<TaskPriority>,
    pub status: Option<TaskStatus>,
    pub due_date: Option<Option<NaiveDate>>,
}

impl TaskPatch {
    /// Check the fields present in the patch against the task invariants
    ///
    /// Absent fields are not validated; they leave the task untouched.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut fields = Vec::new();
        if matches!(&self.title, Some(title) if title.trim().is_empty()) {
            fields.push(DraftField::Title);
        }
        if matches!(&self.description, Some(desc) if desc.trim().is_empty()) {
            fields.push(DraftField::Description);
        }
        ValidationError::check(fields)
    }
}

/// A field rejected by validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DraftField {
    Title,
    Description,
}

impl DraftField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
        }
    }
}

/// Raised when a draft or patch carries an empty title or description
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("required field(s) empty: {}", .fields.iter().map(|f| f.as_str()).collect::<Vec<_>>().join(", "))]
pub struct ValidationError {
    pub fields: Vec<DraftField>,
}

impl ValidationError {
    fn check(fields: Vec<DraftField>) -> Result<(), ValidationError> {
        if fields.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { fields })
        }
    }
}
