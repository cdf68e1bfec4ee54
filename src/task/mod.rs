//! Task tracking core
//!
//! This module provides:
//! - The line-oriented record format (`codec`)
//! - The in-memory task list with ordinal completion (`store`)
//! - Whole-file import and export (`gateway`)

pub mod codec;
pub mod error;
pub mod gateway;
pub mod model;
pub mod store;

pub use error::{Result, TaskError};
pub use gateway::{export, import, ExportMode, ImportResult};
pub use model::{DueDate, Task, NO_CATEGORY};
pub use store::{TaskList, TaskSummary, CANCEL_TOKEN};
