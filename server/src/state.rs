//! Application state

use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::RwLock;

use td_core::snapshot::FileSnapshot;
use td_core::task::TaskStore;

/// Shared application state
///
/// The store is the single-writer owner of all task state; the lock
/// only serializes access from concurrent request handlers.
#[derive(Clone)]
pub struct AppState {
    store: Arc<RwLock<TaskStore>>,
}

impl AppState {
    /// Load the store from the snapshot in the given data directory
    pub fn open(data_dir: PathBuf) -> Self {
        let snapshot = FileSnapshot::new(data_dir);
        let store = TaskStore::open(Box::new(snapshot));
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }

    pub fn store(&self) -> &RwLock<TaskStore> {
        &self.store
    }
}
