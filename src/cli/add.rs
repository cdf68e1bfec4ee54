//! `task-tracker add` command implementation

use anyhow::{bail, Result};
use clap::Args;
use std::path::PathBuf;

use crate::task::{self, DueDate, ExportMode, TaskError};

#[derive(Args)]
pub struct AddArgs {
    /// Task file to update (created if missing)
    file: PathBuf,

    /// Task name
    name: String,

    /// Category (defaults to none)
    #[arg(short, long, default_value = "")]
    category: String,

    /// Due date (YYYY_MM_DD or YYYY-MM-DD, defaults to today)
    #[arg(short, long, value_parser = parse_due)]
    due: Option<DueDate>,
}

fn parse_due(s: &str) -> std::result::Result<DueDate, String> {
    DueDate::parse_input(s).ok_or_else(|| format!("'{}' is not a YYYY_MM_DD date", s))
}

pub fn run(args: AddArgs) -> Result<()> {
    let mut list = super::load_task_file(&args.file, true)?;

    let due = args.due.unwrap_or_else(DueDate::today);
    let created = match list.create_task(&args.name, &args.category, due) {
        Ok(task) => super::format_task(task),
        Err(TaskError::Cancelled) => {
            println!("Cancelled.");
            return Ok(());
        }
        Err(e) => bail!(e),
    };

    task::export(&args.file, ExportMode::Overwrite, &list)?;
    println!("Created: {}", created);

    Ok(())
}
