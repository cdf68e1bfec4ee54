//! `task-tracker list` command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::task::{Task, TaskList};

const TABLE_COL_NUM: usize = 4;
const TABLE_COL_NAME: usize = 32;
const TABLE_COL_DUE: usize = 12;

#[derive(Args)]
pub struct ListArgs {
    /// Task file to read
    file: PathBuf,

    /// Show only incomplete tasks, numbered for `done`
    #[arg(short, long)]
    pending: bool,
}

fn print_table_header() {
    println!(
        "{:<width_num$} {:<6} {:<width_name$} {:<width_due$} CATEGORY",
        "#",
        "STATUS",
        "NAME",
        "DUE",
        width_num = TABLE_COL_NUM,
        width_name = TABLE_COL_NAME,
        width_due = TABLE_COL_DUE
    );
    println!(
        "{}",
        "-".repeat(TABLE_COL_NUM + 6 + TABLE_COL_NAME + TABLE_COL_DUE + 14)
    );
}

fn print_table_row(number: usize, task: &Task) {
    let status = if task.complete {
        "done"
    } else if task.is_overdue() {
        "late"
    } else {
        "todo"
    };
    let category = if task.has_category() {
        task.category.as_str()
    } else {
        "-"
    };

    println!(
        "{:<width_num$} {:<6} {:<width_name$} {:<width_due$} {}",
        number,
        status,
        super::truncate(&task.name, TABLE_COL_NAME),
        task.due.to_string(),
        category,
        width_num = TABLE_COL_NUM,
        width_name = TABLE_COL_NAME,
        width_due = TABLE_COL_DUE
    );
}

/// Rows to show: list position for all tasks, or the completion ordinal for
/// pending ones.
fn rows(list: &TaskList, pending: bool) -> Vec<(usize, &Task)> {
    if pending {
        list.incomplete().collect()
    } else {
        list.tasks()
            .iter()
            .enumerate()
            .map(|(i, t)| (i + 1, t))
            .collect()
    }
}

pub fn run(args: ListArgs) -> Result<()> {
    let list = super::load_task_file(&args.file, false)?;

    let rows = rows(&list, args.pending);
    if rows.is_empty() {
        if args.pending {
            println!("No incomplete tasks in {}.", args.file.display());
        } else {
            println!("No tasks in {}.", args.file.display());
        }
        return Ok(());
    }

    print_table_header();
    for (number, task) in rows {
        print_table_row(number, task);
    }

    let summary = list.summary();
    println!();
    println!(
        "Total: {} tasks ({} incomplete, {} done)",
        summary.total, summary.incomplete, summary.completed
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_number_pending_by_ordinal() {
        let mut list = TaskList::new();
        list.import_batch([
            "1|A|2026_01_01|None",
            "0|B|2026_01_02|None",
            "0|C|2026_01_03|None",
        ])
        .unwrap();

        let all: Vec<(usize, &str)> = rows(&list, false)
            .into_iter()
            .map(|(n, t)| (n, t.name.as_str()))
            .collect();
        assert_eq!(all, vec![(1, "A"), (2, "B"), (3, "C")]);

        let pending: Vec<(usize, &str)> = rows(&list, true)
            .into_iter()
            .map(|(n, t)| (n, t.name.as_str()))
            .collect();
        assert_eq!(pending, vec![(1, "B"), (2, "C")]);
    }
}
