//! Note and category records as read from the Omni Notes store

use crate::error::{OmniTreeError, Result};
use chrono::{DateTime, Utc};

/// A user-defined grouping of notes, mapped 1:1 to an output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Category { name: name.into() }
    }
}

/// A single note row.
///
/// `created_ms` is the Omni Notes primary key, so it doubles as a stable id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub created_ms: i64,
    pub title: String,
    pub body: String,
    pub archived: bool,
    pub trashed: bool,
    pub category: Option<String>,
    pub modified_ms: i64,
}

impl Note {
    /// Creation time in UTC
    pub fn created_at(&self) -> Result<DateTime<Utc>> {
        self.timestamp(self.created_ms)
    }

    /// Last modification time in UTC
    pub fn modified_at(&self) -> Result<DateTime<Utc>> {
        self.timestamp(self.modified_ms)
    }

    fn timestamp(&self, millis: i64) -> Result<DateTime<Utc>> {
        // Whole seconds only, floored.
        DateTime::from_timestamp(millis.div_euclid(1000), 0).ok_or(
            OmniTreeError::InvalidTimestamp {
                note: self.created_ms,
                millis,
            },
        )
    }
}

#[cfg(test)]
pub(crate) fn sample_note(title: &str) -> Note {
    Note {
        // 2022-01-01T00:00:00Z
        created_ms: 1_640_995_200_000,
        title: title.to_string(),
        body: "body".to_string(),
        archived: false,
        trashed: false,
        category: None,
        modified_ms: 1_640_995_200_000,
    }
}
