//! Producers of example task records

use chrono::{Duration, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use std::process::Command;

use crate::task::{codec, DueDate, Task, NO_CATEGORY};

/// Environment variable through which external generators receive the
/// requested record count
pub const EXAMPLE_COUNT_ENV: &str = "TASK_TRACKER_EXAMPLE_COUNT";

const EXAMPLE_NAMES: &[&str] = &[
    "Renew passport",
    "Call the dentist",
    "Water the plants",
    "Submit expense report",
    "Book train tickets",
    "Fix leaking tap",
    "Read chapter 4",
    "Back up laptop",
    "Pay electricity bill",
    "Plan team offsite",
    "Return library books",
    "Update resume",
];

const EXAMPLE_CATEGORIES: &[&str] = &["home", "work", "errands", "health", "finance", NO_CATEGORY];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExampleRequest {
    pub count: usize,
}

/// Something that turns a request into a block of records in the task file format
pub trait ExampleSource: Send + 'static {
    fn generate(&self, request: &ExampleRequest) -> Result<String, String>;
}

/// Random records drawn from a fixed vocabulary, due within the next month
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinSource;

impl ExampleSource for BuiltinSource {
    fn generate(&self, request: &ExampleRequest) -> Result<String, String> {
        let mut rng = rand::thread_rng();
        let today = Utc::now().date_naive();

        let mut block = String::new();
        for _ in 0..request.count {
            let name = EXAMPLE_NAMES.choose(&mut rng).unwrap_or(&"Example task");
            let category = EXAMPLE_CATEGORIES.choose(&mut rng).unwrap_or(&NO_CATEGORY);
            let due = today + Duration::days(rng.gen_range(0..30));

            let mut task = Task::new(*name, *category, DueDate::from(due));
            if rng.gen_bool(0.25) {
                task.mark_complete();
            }
            block.push_str(&codec::encode(&task));
        }
        Ok(block)
    }
}

/// An external program whose standard output is the example block
#[derive(Debug, Clone)]
pub struct CommandSource {
    program: String,
    args: Vec<String>,
}

impl CommandSource {
    /// Build from an argv list; `None` when the list is empty
    pub fn from_argv(argv: &[String]) -> Option<Self> {
        let (program, args) = argv.split_first()?;
        Some(Self {
            program: program.clone(),
            args: args.to_vec(),
        })
    }
}

impl ExampleSource for CommandSource {
    fn generate(&self, request: &ExampleRequest) -> Result<String, String> {
        let output = Command::new(&self.program)
            .args(&self.args)
            .env(EXAMPLE_COUNT_ENV, request.count.to_string())
            .output()
            .map_err(|e| format!("failed to run '{}': {}", self.program, e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            tracing::debug!("stderr: {}", stderr);
            return Err(format!("'{}' exited with {}", self.program, output.status));
        }

        String::from_utf8(output.stdout)
            .map_err(|_| format!("'{}' produced non UTF-8 output", self.program))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_source_produces_valid_records() {
        let block = BuiltinSource
            .generate(&ExampleRequest { count: 8 })
            .unwrap();

        let lines: Vec<&str> = block.lines().collect();
        assert_eq!(lines.len(), 8);
        for (i, line) in lines.iter().enumerate() {
            let task = codec::decode(line, i + 1).unwrap();
            assert!(task.due.to_naive().is_some());
        }
        assert!(block.ends_with('\n'));
    }

    #[test]
    fn test_builtin_source_zero_count() {
        let block = BuiltinSource
            .generate(&ExampleRequest { count: 0 })
            .unwrap();
        assert!(block.is_empty());
    }

    #[test]
    fn test_command_source_from_empty_argv() {
        assert!(CommandSource::from_argv(&[]).is_none());
    }

    #[cfg(unix)]
    #[test]
    fn test_command_source_captures_stdout() {
        let argv = vec![
            "sh".to_string(),
            "-c".to_string(),
            format!("echo \"0|From helper|2026_01_0${}|None\"", EXAMPLE_COUNT_ENV),
        ];
        let source = CommandSource::from_argv(&argv).unwrap();

        let block = source.generate(&ExampleRequest { count: 7 }).unwrap();
        assert_eq!(block, "0|From helper|2026_01_07|None\n");
    }

    #[cfg(unix)]
    #[test]
    fn test_command_source_reports_failure() {
        let argv = vec!["sh".to_string(), "-c".to_string(), "exit 3".to_string()];
        let source = CommandSource::from_argv(&argv).unwrap();
        assert!(source.generate(&ExampleRequest { count: 1 }).is_err());

        let missing = CommandSource::from_argv(&["/definitely/not/here".to_string()]).unwrap();
        assert!(missing.generate(&ExampleRequest { count: 1 }).is_err());
    }
}
