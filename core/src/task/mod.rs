//! Task module
//!
//! This module contains the task entity, its validators, and the store
//! that owns the task list.

mod draft;
mod model;
mod store;

pub use draft::{DraftField, TaskDraft, TaskPatch, ValidationError};
pub use model::{Task, TaskPriority, TaskStatus};
pub use store::TaskStore;
