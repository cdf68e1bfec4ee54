//! Task Tracker library - task list, record format and file import/export

pub mod cli;
pub mod config;
pub mod example;
pub mod task;
