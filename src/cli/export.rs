//! `task-tracker export` command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::config::Config;
use crate::task::{self, ExportMode};

#[derive(Args)]
pub struct ExportArgs {
    /// Task file to read
    source: PathBuf,

    /// File to write
    destination: PathBuf,

    /// What to do with existing content in the destination
    /// (defaults to the configured export mode)
    #[arg(short, long, value_enum)]
    mode: Option<ExportMode>,
}

pub fn run(args: ExportArgs) -> Result<()> {
    let config = Config::load()?;
    let mode = args.mode.unwrap_or(config.tasks.default_export_mode);

    let list = super::load_task_file(&args.source, false)?;
    let written = task::export(&args.destination, mode, &list)?;

    println!(
        "Exported {} task(s) to {} ({}).",
        written,
        args.destination.display(),
        mode.label()
    );
    Ok(())
}
