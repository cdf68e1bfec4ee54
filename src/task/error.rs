use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaskError {
    #[error("Malformed record on line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),

    #[error("Failed to read {}: {source}", path.display())]
    ImportIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    ExportIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Selection {selector} is out of range (1-{incomplete} available)")]
    SelectionOutOfRange { selector: usize, incomplete: usize },

    #[error("Task name cannot be empty")]
    EmptyName,

    #[error("Task {field} cannot contain {ch:?}")]
    InvalidCharacter { field: &'static str, ch: char },

    #[error("Cancelled")]
    Cancelled,

    #[error("Example generator did not respond within {}s", .0.as_secs())]
    ExampleTimeout(Duration),

    #[error("Example generator failed: {0}")]
    ExampleFailed(String),
}

impl TaskError {
    /// Errors raised while opening an import file, which callers may answer
    /// by asking for a different path.
    pub fn is_open_failure(&self) -> bool {
        matches!(
            self,
            TaskError::FileNotFound(_) | TaskError::PermissionDenied(_) | TaskError::ImportIo { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, TaskError>;
