//! In-memory task list

use tracing::debug;

use super::codec;
use super::error::{Result, TaskError};
use super::model::{DueDate, Task};

/// Input that aborts interactive task creation
pub const CANCEL_TOKEN: &str = "cancel";

/// Ordered list of tasks. Insertion order is display order and file order.
///
/// `incomplete` is updated at every mutation rather than recomputed, and always
/// equals the number of tasks with `complete == false`.
#[derive(Debug, Clone, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
    incomplete: usize,
}

/// Counts shown above the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskSummary {
    pub total: usize,
    pub incomplete: usize,
    pub completed: usize,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tasks in the list
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Number of tasks not yet complete
    pub fn num_incomplete(&self) -> usize {
        self.incomplete
    }

    pub fn summary(&self) -> TaskSummary {
        TaskSummary {
            total: self.len(),
            incomplete: self.incomplete,
            completed: self.len() - self.incomplete,
        }
    }

    /// All tasks in insertion order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Incomplete tasks paired with the 1-based ordinal that
    /// [`TaskList::complete_task`] selects them by.
    pub fn incomplete(&self) -> impl Iterator<Item = (usize, &Task)> {
        self.tasks
            .iter()
            .filter(|t| !t.complete)
            .enumerate()
            .map(|(i, t)| (i + 1, t))
    }

    /// Append a new incomplete task.
    ///
    /// A name equal to [`CANCEL_TOKEN`] aborts with [`TaskError::Cancelled`] and
    /// an empty name with [`TaskError::EmptyName`]. Text the record format
    /// cannot hold gives [`TaskError::InvalidCharacter`]. None of these touch
    /// the list.
    pub fn create_task(&mut self, name: &str, category: &str, due: DueDate) -> Result<&Task> {
        let name = name.trim();
        if name == CANCEL_TOKEN {
            return Err(TaskError::Cancelled);
        }
        if name.is_empty() {
            return Err(TaskError::EmptyName);
        }
        if let Some(ch) = name.chars().find(|c| codec::NAME_RESERVED.contains(c)) {
            return Err(TaskError::InvalidCharacter { field: "name", ch });
        }
        if let Some(ch) = category.chars().find(|c| codec::LINE_BREAKS.contains(c)) {
            return Err(TaskError::InvalidCharacter {
                field: "category",
                ch,
            });
        }

        debug!(name, "Creating task");
        Ok(self.push(Task::new(name, category, due)))
    }

    /// Complete the `selector`-th incomplete task (1-based, counting only
    /// incomplete tasks in list order).
    pub fn complete_task(&mut self, selector: usize) -> Result<&Task> {
        if selector < 1 || selector > self.incomplete {
            return Err(TaskError::SelectionOutOfRange {
                selector,
                incomplete: self.incomplete,
            });
        }

        let mut seen = 0;
        let mut target = None;
        for (index, task) in self.tasks.iter().enumerate() {
            if task.complete {
                continue;
            }
            seen += 1;
            if seen == selector {
                target = Some(index);
                break;
            }
        }

        // The range check above guarantees a match while the counter is accurate
        let index = target.ok_or(TaskError::SelectionOutOfRange {
            selector,
            incomplete: self.incomplete,
        })?;

        self.tasks[index].mark_complete();
        self.incomplete -= 1;

        let task = &self.tasks[index];
        debug!(name = %task.name, selector, "Completed task");
        Ok(task)
    }

    /// Decode and append records in order, returning how many were added.
    ///
    /// Stops at the first malformed record. Tasks decoded before it stay in
    /// the list with accurate counts; nothing after it is read.
    pub fn import_batch<I, S>(&mut self, lines: I) -> Result<usize>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut imported = 0;
        for (index, line) in lines.into_iter().enumerate() {
            let task = codec::decode(line.as_ref(), index + 1)?;
            self.push(task);
            imported += 1;
        }
        Ok(imported)
    }

    fn push(&mut self, task: Task) -> &Task {
        if !task.complete {
            self.incomplete += 1;
        }
        self.tasks.push(task);
        &self.tasks[self.tasks.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::model::NO_CATEGORY;

    fn date() -> DueDate {
        DueDate::new(2026, 5, 1)
    }

    fn assert_counts_match(list: &TaskList) {
        let incomplete = list.tasks().iter().filter(|t| !t.complete).count();
        assert_eq!(list.num_incomplete(), incomplete);
        assert_eq!(list.len(), list.tasks().len());
    }

    /// [A(complete), B, C]
    fn mixed_list() -> TaskList {
        let mut list = TaskList::new();
        list.import_batch([
            "1|A|2026_01_01|None",
            "0|B|2026_01_02|None",
            "0|C|2026_01_03|None",
        ])
        .unwrap();
        list
    }

    #[test]
    fn test_new_list_is_empty() {
        let list = TaskList::new();
        assert!(list.is_empty());
        assert_eq!(list.num_incomplete(), 0);
        assert_eq!(list.tasks().len(), 0);
        assert_eq!(list.incomplete().count(), 0);
    }

    #[test]
    fn test_create_appends_in_order() {
        let mut list = TaskList::new();
        list.create_task("first", "home", date()).unwrap();
        list.create_task("second", "", date()).unwrap();

        let names: Vec<&str> = list.tasks().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second"]);
        assert_eq!(list.len(), 2);
        assert_eq!(list.num_incomplete(), 2);
        assert_counts_match(&list);
    }

    #[test]
    fn test_create_normalizes_empty_category() {
        let mut list = TaskList::new();
        let task = list.create_task("X", "", date()).unwrap();
        assert_eq!(task.category, NO_CATEGORY);
    }

    #[test]
    fn test_create_cancel_does_not_mutate() {
        let mut list = TaskList::new();
        assert!(matches!(
            list.create_task("cancel", "x", date()),
            Err(TaskError::Cancelled)
        ));
        assert!(matches!(
            list.create_task("   ", "x", date()),
            Err(TaskError::EmptyName)
        ));
        assert!(list.is_empty());
        assert_eq!(list.num_incomplete(), 0);
    }

    #[test]
    fn test_create_rejects_text_the_file_cannot_hold() {
        let mut list = TaskList::new();
        assert!(matches!(
            list.create_task("a|b", "", date()),
            Err(TaskError::InvalidCharacter { field: "name", ch: '|' })
        ));
        assert!(matches!(
            list.create_task("two\rparts", "", date()),
            Err(TaskError::InvalidCharacter { field: "name", ch: '\r' })
        ));
        assert!(matches!(
            list.create_task("X", "home\r", date()),
            Err(TaskError::InvalidCharacter {
                field: "category",
                ch: '\r'
            })
        ));
        assert!(list.is_empty());

        // `|` is fine in a category, and what is accepted reads back unchanged
        let task = list.create_task("X", "a|b", date()).unwrap().clone();
        let line = codec::encode(&task);
        assert_eq!(codec::decode(&line, 1).unwrap(), task);
    }

    #[test]
    fn test_complete_selects_by_incomplete_ordinal() {
        let mut list = mixed_list();

        let done = list.complete_task(1).unwrap();
        assert_eq!(done.name, "B");
        assert!(done.complete);
        assert_counts_match(&list);

        let done = list.complete_task(1).unwrap();
        assert_eq!(done.name, "C");
        assert_eq!(list.num_incomplete(), 0);
        assert_eq!(list.len(), 3);
        assert_counts_match(&list);
    }

    #[test]
    fn test_complete_out_of_range() {
        let mut list = mixed_list();

        assert!(matches!(
            list.complete_task(0),
            Err(TaskError::SelectionOutOfRange {
                selector: 0,
                incomplete: 2
            })
        ));
        assert!(matches!(
            list.complete_task(3),
            Err(TaskError::SelectionOutOfRange {
                selector: 3,
                incomplete: 2
            })
        ));
        assert_eq!(list.num_incomplete(), 2);
        assert_counts_match(&list);
    }

    #[test]
    fn test_complete_on_empty_list() {
        let mut list = TaskList::new();
        assert!(list.complete_task(1).is_err());
    }

    #[test]
    fn test_incomplete_renumbers_after_completion() {
        let mut list = TaskList::new();
        for name in ["a", "b", "c", "d"] {
            list.create_task(name, "", date()).unwrap();
        }
        list.complete_task(2).unwrap();

        let menu: Vec<(usize, &str)> = list
            .incomplete()
            .map(|(n, t)| (n, t.name.as_str()))
            .collect();
        assert_eq!(menu, vec![(1, "a"), (2, "c"), (3, "d")]);

        assert_eq!(list.complete_task(3).unwrap().name, "d");
    }

    #[test]
    fn test_import_counts_flags() {
        let list = mixed_list();
        assert_eq!(list.len(), 3);
        assert_eq!(list.num_incomplete(), 2);
        assert_eq!(
            list.summary(),
            TaskSummary {
                total: 3,
                incomplete: 2,
                completed: 1
            }
        );
    }

    #[test]
    fn test_import_stops_at_first_malformed_line() {
        let mut list = TaskList::new();
        let result = list.import_batch([
            "0|Good|2026_01_01|None",
            "0|Bad|not-a-date|None",
            "0|Never read|2026_01_03|None",
        ]);

        match result {
            Err(TaskError::MalformedRecord { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected MalformedRecord, got {:?}", other),
        }
        assert_eq!(list.len(), 1);
        assert_eq!(list.tasks()[0].name, "Good");
        assert_counts_match(&list);
    }

    #[test]
    fn test_import_appends_after_existing_tasks() {
        let mut list = TaskList::new();
        list.create_task("existing", "", date()).unwrap();
        let added = list.import_batch(["1|done|2026_01_01|None"]).unwrap();

        assert_eq!(added, 1);
        assert_eq!(list.len(), 2);
        assert_eq!(list.num_incomplete(), 1);
    }

    #[test]
    fn test_counts_hold_across_mixed_operations() {
        let mut list = TaskList::new();
        list.import_batch(["0|a|2026_01_01|None", "1|b|2026_01_01|None"])
            .unwrap();
        assert_counts_match(&list);

        list.create_task("c", "x", date()).unwrap();
        assert_counts_match(&list);

        list.complete_task(2).unwrap();
        assert_counts_match(&list);

        let _ = list.complete_task(5);
        let _ = list.create_task("cancel", "", date());
        assert_counts_match(&list);
        assert_eq!(list.summary().completed, 2);
    }
}
