//! Persistence adapter
//!
//! The store sees persistence as two independent entries: the
//! serialized task list and the language preference code. A malformed
//! entry is treated as absent, never partially parsed, so loading can
//! always produce a usable state.

use std::fs;
use std::path::{Path, PathBuf};

use crate::i18n::Language;
use crate::task::Task;
use crate::Result;

/// Storage seam between the task store and its backing snapshot
pub trait SnapshotStore: Send + Sync {
    /// The last saved task list; empty when missing or malformed
    fn load_tasks(&self) -> Vec<Task>;

    /// Mirror the current task list
    fn save_tasks(&self, tasks: &[Task]) -> Result<()>;

    /// The last saved language; the default when missing or unrecognized
    fn load_language(&self) -> Language;

    /// Mirror the current language preference
    fn save_language(&self, language: Language) -> Result<()>;
}

/// File-backed snapshot store using one JSON file per entry
pub struct FileSnapshot {
    data_dir: PathBuf,
}

impl FileSnapshot {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    fn tasks_path(&self) -> PathBuf {
        self.data_dir.join("tasks.json")
    }

    fn language_path(&self) -> PathBuf {
        self.data_dir.join("language.json")
    }

    fn write(&self, path: &Path, content: String) -> Result<()> {
        fs::create_dir_all(&self.data_dir)?;
        fs::write(path, content)?;
        Ok(())
    }

    fn read_entry(&self, path: &Path) -> Option<String> {
        if !path.exists() {
            return None;
        }
        match fs::read_to_string(path) {
            Ok(content) => Some(content),
            Err(err) => {
                tracing::warn!("Failed to read {}: {}", path.display(), err);
                None
            }
        }
    }
}

impl SnapshotStore for FileSnapshot {
    fn load_tasks(&self) -> Vec<Task> {
        let path = self.tasks_path();
        let Some(content) = self.read_entry(&path) else {
            return Vec::new();
        };
        match serde_json::from_str(&content) {
            Ok(tasks) => tasks,
            Err(err) => {
                tracing::warn!(
                    "Failed to parse {}, starting with an empty list: {}",
                    path.display(),
                    err
                );
                Vec::new()
            }
        }
    }

    fn save_tasks(&self, tasks: &[Task]) -> Result<()> {
        let content = serde_json::to_string_pretty(tasks)?;
        self.write(&self.tasks_path(), content)
    }

    fn load_language(&self) -> Language {
        let path = self.language_path();
        let Some(content) = self.read_entry(&path) else {
            return Language::default();
        };
        let code: String = match serde_json::from_str(&content) {
            Ok(code) => code,
            Err(err) => {
                tracing::warn!(
                    "Failed to parse {}, using the default language: {}",
                    path.display(),
                    err
                );
                return Language::default();
            }
        };
        match Language::from_code(&code) {
            Some(language) => language,
            None => {
                tracing::warn!("Unrecognized language code {:?}, using the default", code);
                Language::default()
            }
        }
    }

    fn save_language(&self, language: Language) -> Result<()> {
        let content = serde_json::to_string(language.as_str())?;
        self.write(&self.language_path(), content)
    }
}
