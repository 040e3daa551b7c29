//! Core library for TaskDeck
//!
//! This crate contains the task tracker's business logic, including:
//! - The task entity and its validators
//! - The task store (add/update/toggle/delete, language preference)
//! - Derived filter views
//! - The localization table and the persistence adapter

pub mod error;
pub mod i18n;
pub mod snapshot;
pub mod task;
pub mod view;

pub use error::Error;
pub type Result<T> = std::result::Result<T, Error>;
