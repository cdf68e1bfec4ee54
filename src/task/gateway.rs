//! Whole-file import and export of task records

use std::fs::{self, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::codec;
use super::error::{Result, TaskError};
use super::store::TaskList;

/// How an export treats an existing file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportMode {
    /// Truncate, then write
    #[default]
    Overwrite,
    /// Write after the existing content
    Append,
}

impl ExportMode {
    /// Parse the interactive menu token (`1` or `2`)
    pub fn from_menu_token(s: &str) -> Option<Self> {
        match s.trim() {
            "1" => Some(Self::Overwrite),
            "2" => Some(Self::Append),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Overwrite => "overwrite",
            Self::Append => "append",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportResult {
    pub path: PathBuf,
    pub imported: usize,
}

/// Read every record in `path` into `list`.
///
/// On a malformed record the tasks read before it remain in `list`. A line
/// that is not valid UTF-8 is malformed like any other. Blank lines at the
/// end of the file are ignored; a blank line followed by a record is not.
pub fn import(path: &Path, list: &mut TaskList) -> Result<ImportResult> {
    let bytes = fs::read(path).map_err(|e| open_error(path, e))?;
    debug!(path = %path.display(), bytes = bytes.len(), "Read task file");

    let mut records: Vec<&[u8]> = bytes.split(|b| *b == b'\n').collect();
    while records.last().is_some_and(|r| is_blank(r)) {
        records.pop();
    }

    let mut lines = Vec::with_capacity(records.len());
    let mut invalid = None;
    for (index, record) in records.iter().enumerate() {
        match std::str::from_utf8(record) {
            Ok(line) => lines.push(line),
            Err(_) => {
                invalid = Some(index + 1);
                break;
            }
        }
    }

    let imported = list.import_batch(lines)?;
    if let Some(line) = invalid {
        return Err(TaskError::MalformedRecord {
            line,
            reason: "not valid UTF-8".to_string(),
        });
    }
    info!(path = %path.display(), imported, "Imported tasks");

    Ok(ImportResult {
        path: path.to_path_buf(),
        imported,
    })
}

fn is_blank(record: &[u8]) -> bool {
    record.is_empty() || record == b"\r"
}

fn open_error(path: &Path, err: io::Error) -> TaskError {
    match err.kind() {
        io::ErrorKind::NotFound => TaskError::FileNotFound(path.to_path_buf()),
        io::ErrorKind::PermissionDenied => TaskError::PermissionDenied(path.to_path_buf()),
        _ => TaskError::ImportIo {
            path: path.to_path_buf(),
            source: err,
        },
    }
}

/// Write every task in `list` to `path`, returning the number of records written.
///
/// A failed write is not rolled back; the file may hold a partial export.
pub fn export(path: &Path, mode: ExportMode, list: &TaskList) -> Result<usize> {
    let export_err = |source: io::Error| TaskError::ExportIo {
        path: path.to_path_buf(),
        source,
    };

    let mut options = OpenOptions::new();
    match mode {
        ExportMode::Overwrite => options.write(true).create(true).truncate(true),
        ExportMode::Append => options.append(true).create(true),
    };
    let file = options.open(path).map_err(export_err)?;

    let mut writer = BufWriter::new(file);
    let written = write_records(&mut writer, list).map_err(export_err)?;
    writer.flush().map_err(export_err)?;

    info!(
        path = %path.display(),
        mode = mode.label(),
        written,
        "Exported tasks"
    );
    Ok(written)
}

/// Write every task in `list` to `writer` in list order
pub fn write_records<W: Write>(writer: &mut W, list: &TaskList) -> io::Result<usize> {
    for task in list.tasks() {
        writer.write_all(codec::encode(task).as_bytes())?;
    }
    Ok(list.len())
}
