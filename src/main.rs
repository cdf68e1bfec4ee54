//! Task Tracker - interactive single-user task tracker

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use task_tracker::cli::{self, Cli, Commands};

fn main() -> Result<()> {
    if std::env::var("TASK_TRACKER_DEBUG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter("task_tracker=debug")
            .with_writer(std::io::stderr)
            .init();
    }

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Completion { shell }) => {
            generate(shell, &mut Cli::command(), "task-tracker", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::List(args)) => cli::list::run(args),
        Some(Commands::Add(args)) => cli::add::run(args),
        Some(Commands::Done(args)) => cli::done::run(args),
        Some(Commands::Export(args)) => cli::export::run(args),
        Some(Commands::Example(args)) => cli::example::run(args),
        None => cli::session::run(cli.file),
    }
}
