//! Task model definitions

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Completion state of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
}

impl Default for TaskStatus {
    fn default() -> Self {
        Self::Pending
    }
}

impl TaskStatus {
    pub fn is_completed(self) -> bool {
        matches!(self, Self::Completed)
    }

    /// The status after a completion toggle
    ///
    /// A binary flip between completed and pending; an in-progress task
    /// becomes completed, never the other way around.
    pub fn toggled(self) -> Self {
        match self {
            Self::Completed => Self::Pending,
            Self::Pending | Self::InProgress => Self::Completed,
        }
    }
}

/// Task priority level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    High,
    Medium,
    Low,
}

impl Default for TaskPriority {
    fn default() -> Self {
        Self::Medium
    }
}

/// A task in the tracker
///
/// Constructed only by [`TaskStore::add`](super::TaskStore::add), which
/// assigns the id and timestamps and enforces the draft invariants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: String,
    pub priority: TaskPriority,
    pub status: TaskStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_task() -> Task {
        let now = Utc::now();
        Task {
            id: "task-1".to_string(),
            title: "Buy milk".to_string(),
            description: "2 liters".to_string(),
            priority: TaskPriority::Low,
            status: TaskStatus::Pending,
            due_date: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_toggled_is_binary_flip() {
        assert_eq!(TaskStatus::Pending.toggled(), TaskStatus::Completed);
        assert_eq!(TaskStatus::Completed.toggled(), TaskStatus::Pending);
        assert_eq!(TaskStatus::InProgress.toggled(), TaskStatus::Completed);
        assert_eq!(
            TaskStatus::InProgress.toggled().toggled(),
            TaskStatus::Pending
        );
    }

    #[test]
    fn test_status_wire_form_is_kebab_case() {
        let json = serde_json::to_string(&TaskStatus::InProgress).unwrap();
        assert_eq!(json, "\"in-progress\"");

        let status: TaskStatus = serde_json::from_str("\"in-progress\"").unwrap();
        assert_eq!(status, TaskStatus::InProgress);
    }

    #[test]
    fn test_task_serializes_by_field_name() {
        let task = sample_task();
        let json = serde_json::to_value(&task).unwrap();

        assert_eq!(json["id"], "task-1");
        assert_eq!(json["title"], "Buy milk");
        assert_eq!(json["priority"], "low");
        assert_eq!(json["status"], "pending");
        assert!(json["createdAt"].is_string());
        assert!(json["updatedAt"].is_string());
        // Absent due date is omitted, not null
        assert!(json.get("dueDate").is_none());
    }

    #[test]
    fn test_task_due_date_accepts_null_and_date_string() {
        let mut json = serde_json::to_value(sample_task()).unwrap();
        json["dueDate"] = serde_json::Value::Null;
        let task: Task = serde_json::from_value(json.clone()).unwrap();
        assert!(task.due_date.is_none());

        json["dueDate"] = "2026-09-01".into();
        let task: Task = serde_json::from_value(json).unwrap();
        assert_eq!(
            task.due_date,
            Some(NaiveDate::from_ymd_opt(2026, 9, 1).unwrap())
        );
    }
}
