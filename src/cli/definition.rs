//! Command line definition

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use super::add::AddArgs;
use super::done::DoneArgs;
use super::example::ExampleArgs;
use super::export::ExportArgs;
use super::list::ListArgs;

#[derive(Parser)]
#[command(name = "task-tracker")]
#[command(about = "Track tasks interactively and keep them in a plain text file")]
#[command(version)]
pub struct Cli {
    /// Task file to import when starting an interactive session
    #[arg(short, long, env = "TASK_TRACKER_FILE")]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List tasks in a task file
    #[command(alias = "ls")]
    List(ListArgs),

    /// Add a task to a task file
    Add(AddArgs),

    /// Complete the N-th incomplete task in a task file
    Done(DoneArgs),

    /// Copy the tasks of one file into another
    Export(ExportArgs),

    /// Print example records from the example generator
    Example(ExampleArgs),

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
