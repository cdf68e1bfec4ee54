//! `task-tracker example` command implementation

use anyhow::Result;
use clap::Args;

use crate::config::Config;
use crate::example::{self, ExampleRequest};

#[derive(Args)]
pub struct ExampleArgs {
    /// Number of records to request (defaults to the configured count)
    #[arg(short = 'n', long)]
    count: Option<usize>,
}

pub fn run(args: ExampleArgs) -> Result<()> {
    let config = Config::load()?;
    let count = args.count.unwrap_or(config.examples.count);

    let mut generator = example::from_config(&config.examples);
    let block = generator.request(ExampleRequest { count })?;
    print!("{}", block);

    Ok(())
}
