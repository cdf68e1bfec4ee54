//! Record codec for the task file format
//!
//! One task per line:
//!
//! ```text
//! <0|1>|<name>|<year>_<month>_<day>|<category>
//! ```
//!
//! The category is everything after the third `|`, so it may itself contain `|`.
//! Lines end in `\n` or `\r\n`, so neither text field can hold a line break or
//! end in `\r`; the name cannot hold `|` either.

use super::error::{Result, TaskError};
use super::model::{DueDate, Task, NO_CATEGORY};

const FIELD_SEPARATOR: char = '|';
const DATE_SEPARATOR: char = '_';

/// Characters a category cannot contain
pub const LINE_BREAKS: &[char] = &['\n', '\r'];

/// Characters a task name cannot contain
pub const NAME_RESERVED: &[char] = &[FIELD_SEPARATOR, '\n', '\r'];

/// Decode one record. `line_number` is 1-based and only used for errors.
pub fn decode(line: &str, line_number: usize) -> Result<Task> {
    let malformed = |reason: String| TaskError::MalformedRecord {
        line: line_number,
        reason,
    };

    let line = line.strip_suffix('\n').unwrap_or(line);
    let line = line.strip_suffix('\r').unwrap_or(line);

    let fields: Vec<&str> = line.splitn(4, FIELD_SEPARATOR).collect();
    if fields.len() != 4 {
        return Err(malformed(format!(
            "expected 4 '|' separated fields, found {}",
            fields.len()
        )));
    }

    let complete = match fields[0] {
        "0" => false,
        "1" => true,
        other => {
            return Err(malformed(format!(
                "completion flag must be 0 or 1, found '{}'",
                other
            )))
        }
    };

    let name = fields[1];
    if name.is_empty() {
        return Err(malformed("task name is empty".to_string()));
    }

    let due = decode_date(fields[2]).map_err(malformed)?;

    Ok(Task {
        complete,
        name: name.to_string(),
        due,
        category: if fields[3].is_empty() {
            NO_CATEGORY.to_string()
        } else {
            fields[3].to_string()
        },
    })
}

fn decode_date(field: &str) -> std::result::Result<DueDate, String> {
    let parts: Vec<&str> = field.split(DATE_SEPARATOR).collect();
    if parts.len() != 3 {
        return Err(format!(
            "due date '{}' must have the form YYYY_MM_DD",
            field
        ));
    }

    let mut values = [0i32; 3];
    for (value, part) in values.iter_mut().zip(&parts) {
        *value = part
            .parse()
            .map_err(|_| format!("due date component '{}' is not an integer", part))?;
    }

    Ok(DueDate::new(values[0], values[1], values[2]))
}

/// Encode one record, including the trailing newline
pub fn encode(task: &Task) -> String {
    format!(
        "{}{sep}{}{sep}{:04}{date}{:02}{date}{:02}{sep}{}\n",
        if task.complete { 1 } else { 0 },
        task.name,
        task.due.year,
        task.due.month,
        task.due.day,
        task.category,
        sep = FIELD_SEPARATOR,
        date = DATE_SEPARATOR,
    )
}

/// Encode a whole file body
pub fn encode_all<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> String {
    tasks.into_iter().map(encode).collect()
}
