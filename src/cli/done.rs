//! `task-tracker done` command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::task::{self, ExportMode};

#[derive(Args)]
pub struct DoneArgs {
    /// Task file to update
    file: PathBuf,

    /// Position among incomplete tasks, as shown by `list --pending`
    number: usize,
}

pub fn run(args: DoneArgs) -> Result<()> {
    let mut list = super::load_task_file(&args.file, false)?;

    let completed = super::format_task(list.complete_task(args.number)?);
    task::export(&args.file, ExportMode::Overwrite, &list)?;

    println!("Completed: {}", completed);
    if list.num_incomplete() > 0 {
        println!("{} task(s) remaining.", list.num_incomplete());
    } else {
        println!("All tasks complete.");
    }

    Ok(())
}
