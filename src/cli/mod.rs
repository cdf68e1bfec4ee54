//! CLI command implementations

pub mod add;
pub mod definition;
pub mod done;
pub mod example;
pub mod export;
pub mod list;
pub mod session;

pub use definition::{Cli, Commands};

use anyhow::{Context, Result};
use std::path::Path;

use crate::task::{self, Task, TaskError, TaskList};

/// Load a task file. A missing file gives an empty list when `missing_ok`.
pub fn load_task_file(path: &Path, missing_ok: bool) -> Result<TaskList> {
    let mut list = TaskList::new();
    match task::import(path, &mut list) {
        Ok(_) => Ok(list),
        Err(TaskError::FileNotFound(_)) if missing_ok => Ok(list),
        Err(e) => Err(e).with_context(|| format!("Failed to load tasks from {}", path.display())),
    }
}

/// One task as a single display line
pub fn format_task(task: &Task) -> String {
    let mut line = format!(
        "[{}] {} (due {})",
        if task.complete { "x" } else { " " },
        task.name,
        task.due
    );

    if task.has_category() {
        line.push_str(&format!(" #{}", task.category));
    }

    if task.is_overdue() {
        line.push_str(" OVERDUE");
    }

    line
}

pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else if max <= 3 {
        s.chars().take(max).collect()
    } else {
        let head: String = s.chars().take(max - 3).collect();
        format!("{}...", head)
    }
}
