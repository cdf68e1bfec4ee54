//! Task data model

use chrono::{Datelike, NaiveDate, Utc};
use std::fmt;

/// Category value meaning "no category". The record format has no null, so
/// this literal is the only representation of an unset category.
pub const NO_CATEGORY: &str = "None";

/// A due date stored exactly as entered. Components are not range checked,
/// so `2024_02_30` is a valid value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DueDate {
    pub year: i32,
    pub month: i32,
    pub day: i32,
}

impl DueDate {
    pub fn new(year: i32, month: i32, day: i32) -> Self {
        Self { year, month, day }
    }

    /// Parse user input. Accepts `YYYY_MM_DD`, `YYYY-MM-DD` and `YYYY MM DD`.
    pub fn parse_input(s: &str) -> Option<Self> {
        let s = s.trim();
        let parts: Vec<&str> = if s.contains('_') {
            s.split('_').collect()
        } else if s.contains('-') && !s.starts_with('-') {
            s.split('-').collect()
        } else {
            s.split_whitespace().collect()
        };

        if parts.len() != 3 {
            return None;
        }

        let year = parts[0].trim().parse().ok()?;
        let month = parts[1].trim().parse().ok()?;
        let day = parts[2].trim().parse().ok()?;
        Some(Self::new(year, month, day))
    }

    pub fn today() -> Self {
        Utc::now().date_naive().into()
    }

    /// The calendar date, if the stored triple names one
    pub fn to_naive(&self) -> Option<NaiveDate> {
        let month = u32::try_from(self.month).ok()?;
        let day = u32::try_from(self.day).ok()?;
        NaiveDate::from_ymd_opt(self.year, month, day)
    }
}

impl From<NaiveDate> for DueDate {
    fn from(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month() as i32, date.day() as i32)
    }
}

impl fmt::Display for DueDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// A tracked task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub complete: bool,
    pub name: String,
    pub due: DueDate,
    /// Free text, or [`NO_CATEGORY`]
    pub category: String,
}

impl Task {
    /// Create an incomplete task. An empty category becomes [`NO_CATEGORY`].
    pub fn new(name: impl Into<String>, category: impl Into<String>, due: DueDate) -> Self {
        Self {
            complete: false,
            name: name.into(),
            due,
            category: normalize_category(category.into()),
        }
    }

    pub fn has_category(&self) -> bool {
        self.category != NO_CATEGORY
    }

    /// Check if the task is overdue. Dates that are not on the calendar never are.
    pub fn is_overdue(&self) -> bool {
        if self.complete {
            return false;
        }
        match self.due.to_naive() {
            Some(due) => due < Utc::now().date_naive(),
            None => false,
        }
    }

    /// Mark task as done
    pub fn mark_complete(&mut self) {
        self.complete = true;
    }
}

fn normalize_category(category: String) -> String {
    let trimmed = category.trim();
    if trimmed.is_empty() {
        NO_CATEGORY.to_string()
    } else if trimmed.len() == category.len() {
        category
    } else {
        trimmed.to_string()
    }
}
