//! Derived, read-time views over the task list
//!
//! Filtering never mutates and never re-sorts: the output is always a
//! subsequence of the input, in input order. Filter state is ephemeral
//! and lives with the caller; it is never persisted.

use serde::{Deserialize, Serialize};

use crate::task::{Task, TaskPriority};

/// Status portion of the filter state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    All,
    Active,
    Completed,
}

impl Default for StatusFilter {
    fn default() -> Self {
        Self::All
    }
}

impl StatusFilter {
    fn matches(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Active => !task.status.is_completed(),
            Self::Completed => task.status.is_completed(),
        }
    }
}

/// Priority portion of the filter state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriorityFilter {
    All,
    High,
    Medium,
    Low,
}

impl Default for PriorityFilter {
    fn default() -> Self {
        Self::All
    }
}

impl PriorityFilter {
    fn matches(self, priority: TaskPriority) -> bool {
        match self {
            Self::All => true,
            Self::High => priority == TaskPriority::High,
            Self::Medium => priority == TaskPriority::Medium,
            Self::Low => priority == TaskPriority::Low,
        }
    }
}

/// Ephemeral view-selection criteria
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilterState {
    #[serde(default)]
    pub status: StatusFilter,
    #[serde(default)]
    pub priority: PriorityFilter,
    #[serde(default)]
    pub search: String,
}

/// Select the subsequence of `tasks` matching the filter
///
/// The search term is a case-insensitive substring match over title
/// and description; an empty term matches everything.
pub fn derive_view<'a>(tasks: &'a [Task], filter: &FilterState) -> Vec<&'a Task> {
    let search = filter.search.to_lowercase();
    tasks
        .iter()
        .filter(|task| {
            filter.status.matches(task)
                && filter.priority.matches(task.priority)
                && (search.is_empty()
                    || task.title.to_lowercase().contains(&search)
                    || task.description.to_lowercase().contains(&search))
        })
        .collect()
}

/// Aggregate counts for the stats header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TaskCounts {
    pub all: usize,
    pub active: usize,
    pub completed: usize,
}

pub fn counts(tasks: &[Task]) -> TaskCounts {
    let completed = tasks
        .iter()
        .filter(|task| task.status.is_completed())
        .count();
    TaskCounts {
        all: tasks.len(),
        active: tasks.len() - completed,
        completed,
    }
}
