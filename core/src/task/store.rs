//! Task store
//!
//! Exclusive owner of the task list and the language preference. All
//! mutations pass through it, and every mutation is mirrored to the
//! snapshot store. Unknown ids degrade to no-ops, never errors.

use chrono::Utc;
use uuid::Uuid;

use crate::i18n::Language;
use crate::snapshot::SnapshotStore;
use crate::view::{self, TaskCounts};
use crate::Result;

use super::draft::{TaskDraft, TaskPatch};
use super::model::Task;

pub struct TaskStore {
    tasks: Vec<Task>,
    language: Language,
    snapshot: Box<dyn SnapshotStore>,
}

impl TaskStore {
    /// Load the last saved snapshot into a new store
    ///
    /// A missing or malformed snapshot degrades to an empty list and
    /// the default language; the snapshot store logs the failure.
    pub fn open(snapshot: Box<dyn SnapshotStore>) -> Self {
        let tasks = snapshot.load_tasks();
        let language = snapshot.load_language();
        Self {
            tasks,
            language,
            snapshot,
        }
    }

    /// All tasks, most recently created first
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Get a task by id
    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Counts over the unfiltered list
    pub fn counts(&self) -> TaskCounts {
        view::counts(&self.tasks)
    }

    /// Validate a draft and prepend the new task to the list
    pub fn add(&mut self, draft: TaskDraft) -> Result<Task> {
        draft.validate()?;
        let now = Utc::now();
        let task = Task {
            id: Uuid::new_v4().to_string(),
            title: draft.title.trim().to_string(),
            description: draft.description.trim().to_string(),
            priority: draft.priority,
            status: draft.status,
            due_date: draft.due_date,
            created_at: now,
            updated_at: now,
        };
        self.tasks.insert(0, task.clone());
        self.save_tasks();
        Ok(task)
    }

    /// Merge a patch into the matching task and stamp `updated_at`
    ///
    /// Returns `Ok(None)` when no task has the given id; the list is
    /// left untouched.
    pub fn update(&mut self, id: &str, patch: TaskPatch) -> Result<Option<Task>> {
        patch.validate()?;
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            return Ok(None);
        };

        if let Some(title) = patch.title {
            task.title = title.trim().to_string();
        }
        if let Some(description) = patch.description {
            task.description = description.trim().to_string();
        }
        if let Some(priority) = patch.priority {
            task.priority = priority;
        }
        if let Some(status) = patch.status {
            task.status = status;
        }
        if let Some(due_date) = patch.due_date {
            task.due_date = due_date;
        }
        task.updated_at = Utc::now();
        let updated = task.clone();

        self.save_tasks();
        Ok(Some(updated))
    }

    /// Flip a task between completed and pending
    ///
    /// An in-progress task becomes completed. Unknown ids are a no-op.
    pub fn toggle_completion(&mut self, id: &str) -> Option<Task> {
        let task = self.tasks.iter_mut().find(|task| task.id == id)?;
        task.status = task.status.toggled();
        task.updated_at = Utc::now();
        let updated = task.clone();

        self.save_tasks();
        Some(updated)
    }

    /// Remove a task; returns false when the id is unknown
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        let removed = self.tasks.len() != before;
        if removed {
            self.save_tasks();
        }
        removed
    }

    /// The current language preference
    pub fn language(&self) -> Language {
        self.language
    }

    /// Switch the language preference and persist it
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
        if let Err(err) = self.snapshot.save_language(language) {
            tracing::warn!("Failed to save language preference: {}", err);
        }
    }

    // Persistence is best-effort: the in-memory list stays
    // authoritative when a save fails.
    fn save_tasks(&self) {
        if let Err(err) = self.snapshot.save_tasks(&self.tasks) {
            tracing::warn!("Failed to save task snapshot: {}", err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::FileSnapshot;
    use crate::task::{DraftField, TaskPriority, TaskStatus};
    use crate::Error;
    use chrono::NaiveDate;
    use tempfile::{tempdir, TempDir};

    fn create_test_store() -> (TaskStore, TempDir) {
        let dir = tempdir().unwrap();
        let store = TaskStore::open(Box::new(FileSnapshot::new(dir.path())));
        (store, dir)
    }

    fn draft(title: &str, description: &str) -> TaskDraft {
        TaskDraft {
            title: title.to_string(),
            description: description.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_add_task() {
        let (mut store, _dir) = create_test_store();

        let task = store.add(draft("Buy milk", "2 liters")).unwrap();
        assert!(!task.id.is_empty());
        assert_eq!(task.title, "Buy milk");
        assert_eq!(task.status, TaskStatus::Pending);
        assert_eq!(task.priority, TaskPriority::Medium);
        assert_eq!(task.created_at, task.updated_at);
        assert_eq!(store.tasks().len(), 1);
    }

    #[test]
    fn test_add_trims_title_and_description() {
        let (mut store, _dir) = create_test_store();

        let task = store.add(draft("  Buy milk  ", " 2 liters ")).unwrap();
        assert_eq!(task.title, "Buy milk");
        assert_eq!(task.description, "2 liters");
    }

    #[test]
    fn test_add_prepends_newest_first() {
        let (mut store, _dir) = create_test_store();

        let first = store.add(draft("First", "x")).unwrap();
        let second = store.add(draft("Second", "x")).unwrap();

        assert_ne!(first.id, second.id);
        let ids: Vec<_> = store.tasks().iter().map(|t| t.id.clone()).collect();
        assert_eq!(ids, vec![second.id, first.id]);
    }

    #[test]
    fn test_add_rejects_blank_fields_and_leaves_list_unchanged() {
        let (mut store, _dir) = create_test_store();
        store.add(draft("Existing", "x")).unwrap();

        let result = store.add(draft("  ", "x"));
        match result.unwrap_err() {
            Error::Validation(err) => assert_eq!(err.fields, vec![DraftField::Title]),
            e => panic!("Expected Validation error, got: {:?}", e),
        }

        let result = store.add(draft("", ""));
        match result.unwrap_err() {
            Error::Validation(err) => {
                assert_eq!(err.fields, vec![DraftField::Title, DraftField::Description])
            }
            e => panic!("Expected Validation error, got: {:?}", e),
        }

        assert_eq!(store.tasks().len(), 1);
        assert_eq!(store.tasks()[0].title, "Existing");
    }

    #[test]
    fn test_update_merges_fields() {
        let (mut store, _dir) = create_test_store();
        let task = store.add(draft("Original", "x")).unwrap();

        let patch = TaskPatch {
            title: Some("Updated".to_string()),
            status: Some(TaskStatus::InProgress),
            ..Default::default()
        };
        let updated = store.update(&task.id, patch).unwrap().unwrap();

        assert_eq!(updated.title, "Updated");
        assert_eq!(updated.status, TaskStatus::InProgress);
        // Untouched fields survive the merge
        assert_eq!(updated.description, "x");
        assert_eq!(updated.created_at, task.created_at);
        assert!(updated.updated_at >= task.updated_at);
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let (mut store, _dir) = create_test_store();
        store.add(draft("Keep me", "x")).unwrap();
        let before = store.tasks().to_vec();

        let patch = TaskPatch {
            title: Some("Never applied".to_string()),
            ..Default::default()
        };
        let result = store.update("missing-id", patch).unwrap();

        assert!(result.is_none());
        assert_eq!(store.tasks(), &before[..]);
    }

    #[test]
    fn test_update_rejects_blank_title() {
        let (mut store, _dir) = create_test_store();
        let task = store.add(draft("Original", "x")).unwrap();

        let patch = TaskPatch {
            title: Some("   ".to_string()),
            ..Default::default()
        };
        let result = store.update(&task.id, patch);

        assert!(matches!(result, Err(Error::Validation(_))));
        assert_eq!(store.get(&task.id).unwrap().title, "Original");
    }

    #[test]
    fn test_update_sets_and_clears_due_date() {
        let (mut store, _dir) = create_test_store();
        let task = store.add(draft("Dated", "x")).unwrap();
        let date = NaiveDate::from_ymd_opt(2026, 9, 1).unwrap();

        let patch = TaskPatch {
            due_date: Some(Some(date)),
            ..Default::default()
        };
        let updated = store.update(&task.id, patch).unwrap().unwrap();
        assert_eq!(updated.due_date, Some(date));

        let patch = TaskPatch {
            due_date: Some(None),
            ..Default::default()
        };
        let updated = store.update(&task.id, patch).unwrap().unwrap();
        assert!(updated.due_date.is_none());
    }

    #[test]
    fn test_toggle_completion_is_involution_on_pending() {
        let (mut store, _dir) = create_test_store();
        let task = store.add(draft("Flip me", "x")).unwrap();

        let toggled = store.toggle_completion(&task.id).unwrap();
        assert_eq!(toggled.status, TaskStatus::Completed);

        let toggled = store.toggle_completion(&task.id).unwrap();
        assert_eq!(toggled.status, TaskStatus::Pending);
    }

    #[test]
    fn test_toggle_completion_from_in_progress() {
        let (mut store, _dir) = create_test_store();
        let task = store.add(draft("Busy", "x")).unwrap();
        let patch = TaskPatch {
            status: Some(TaskStatus::InProgress),
            ..Default::default()
        };
        store.update(&task.id, patch).unwrap();

        // In-progress lands on completed, then keeps flipping
        // completed/pending.
        let toggled = store.toggle_completion(&task.id).unwrap();
        assert_eq!(toggled.status, TaskStatus::Completed);
        let toggled = store.toggle_completion(&task.id).unwrap();
        assert_eq!(toggled.status, TaskStatus::Pending);
    }

    #[test]
    fn test_toggle_completion_unknown_id_is_noop() {
        let (mut store, _dir) = create_test_store();
        assert!(store.toggle_completion("missing-id").is_none());
    }

    #[test]
    fn test_delete_is_idempotent() {
        let (mut store, _dir) = create_test_store();
        let task = store.add(draft("Doomed", "x")).unwrap();

        assert!(store.delete(&task.id));
        assert!(store.tasks().is_empty());

        // Second delete is a no-op
        assert!(!store.delete(&task.id));
        assert!(store.tasks().is_empty());
    }

    #[test]
    fn test_counts() {
        let (mut store, _dir) = create_test_store();
        let done = store.add(draft("Done", "x")).unwrap();
        store.add(draft("Pending", "x")).unwrap();
        store.toggle_completion(&done.id).unwrap();

        let counts = store.counts();
        assert_eq!(counts.all, 2);
        assert_eq!(counts.active, 1);
        assert_eq!(counts.completed, 1);
    }

    #[test]
    fn test_every_mutation_is_mirrored_to_the_snapshot() {
        let dir = tempdir().unwrap();
        let reload = || TaskStore::open(Box::new(FileSnapshot::new(dir.path())));

        let mut store = reload();
        let task = store.add(draft("Persistent", "x")).unwrap();
        assert_eq!(reload().tasks().len(), 1);

        let patch = TaskPatch {
            title: Some("Renamed".to_string()),
            ..Default::default()
        };
        store.update(&task.id, patch).unwrap();
        assert_eq!(reload().get(&task.id).unwrap().title, "Renamed");

        store.toggle_completion(&task.id).unwrap();
        assert_eq!(
            reload().get(&task.id).unwrap().status,
            TaskStatus::Completed
        );

        store.delete(&task.id);
        assert!(reload().tasks().is_empty());
    }

    #[test]
    fn test_corrupt_snapshot_starts_empty() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("tasks.json"), "not json at all").unwrap();

        let mut store = TaskStore::open(Box::new(FileSnapshot::new(dir.path())));
        assert!(store.tasks().is_empty());

        // The store stays usable and the next save replaces the bad file
        store.add(draft("Fresh start", "x")).unwrap();
        let reloaded = TaskStore::open(Box::new(FileSnapshot::new(dir.path())));
        assert_eq!(reloaded.tasks().len(), 1);
    }

    #[test]
    fn test_language_preference_round_trip() {
        let dir = tempdir().unwrap();

        let mut store = TaskStore::open(Box::new(FileSnapshot::new(dir.path())));
        assert_eq!(store.language(), Language::En);
        store.set_language(Language::Ar);

        let reloaded = TaskStore::open(Box::new(FileSnapshot::new(dir.path())));
        assert_eq!(reloaded.language(), Language::Ar);
    }
}
