//! Example record generator
//!
//! Produces sample task records in the task file format for the user to look
//! at. Output is only displayed and never imported into a task list.

pub mod generator;
pub mod source;

pub use generator::ExampleGenerator;
pub use source::{BuiltinSource, CommandSource, ExampleRequest, ExampleSource};

use crate::config::ExamplesConfig;

/// Build a generator from configuration: the external command when one is
/// configured, otherwise the built-in source.
pub fn from_config(config: &ExamplesConfig) -> ExampleGenerator {
    match config.command.as_deref().and_then(CommandSource::from_argv) {
        Some(source) => {
            tracing::debug!("Using external example generator");
            ExampleGenerator::new(source, config.timeout())
        }
        None => ExampleGenerator::new(BuiltinSource, config.timeout()),
    }
}
