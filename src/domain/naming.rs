//! Destination path derivation and collision handling

use crate::domain::note::Note;
use crate::domain::placement::{Folder, Placement};
use crate::error::Result;
use chrono::{DateTime, Utc};
use std::collections::HashSet;

/// Extension of every generated note file
pub const NOTE_EXTENSION: &str = "md";

/// Build the filename stem for a note.
///
/// Path separators in the title become `_`. An empty title falls back to the
/// creation time, e.g. `2022-01-01_00-00-00`.
pub fn base_filename(title: &str, created: DateTime<Utc>) -> String {
    if title.is_empty() {
        return created.format("%Y-%m-%d_%H-%M-%S").to_string();
    }
    title.replace(['/', '\\'], "_")
}

/// Relative location of one note file inside the output root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotePath {
    pub category: Option<String>,
    pub folder: Folder,
    /// Filename without extension, including any `.` prefix
    pub stem: String,
}

impl NotePath {
    /// Derive the unsuffixed path for a note.
    pub fn for_note(note: &Note) -> Result<Self> {
        let placement = Placement::from_flags(note.archived, note.trashed);
        let base = base_filename(&note.title, note.created_at()?);
        let stem = if placement.hidden {
            format!(".{}", base)
        } else {
            base
        };

        Ok(NotePath {
            category: note.category.clone(),
            folder: placement.folder,
            stem,
        })
    }

    /// Directory part, `/`-separated, empty for the output root
    pub fn dir(&self) -> String {
        let mut parts: Vec<&str> = Vec::with_capacity(2);
        if let Some(category) = self.category.as_deref().filter(|c| !c.is_empty()) {
            parts.push(category);
        }
        if let Some(reserved) = self.folder.dir_name() {
            parts.push(reserved);
        }
        parts.join("/")
    }

    /// File name including extension
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.stem, NOTE_EXTENSION)
    }

    /// Full relative path, e.g. `Work/.trash/.Plans.md`
    pub fn relative(&self) -> String {
        let dir = self.dir();
        if dir.is_empty() {
            self.file_name()
        } else {
            format!("{}/{}", dir, self.file_name())
        }
    }
}

/// Relative paths already claimed during a run.
///
/// A name is free only if no earlier note claimed it and nothing exists at
/// that location in the output tree (category directories included).
#[derive(Debug, Default)]
pub struct NameLedger {
    claimed: HashSet<String>,
}

impl NameLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim `path`, appending `_` to the stem until it is unique.
    ///
    /// `exists` reports whether something is already at a candidate location.
    /// Returns the claimed path and how many underscores were added.
    pub fn claim<F>(&mut self, mut path: NotePath, exists: F) -> (NotePath, usize)
    where
        F: Fn(&NotePath) -> bool,
    {
        let mut suffixes = 0;
        while self.claimed.contains(&path.relative()) || exists(&path) {
            path.stem.push('_');
            suffixes += 1;
        }
        self.claimed.insert(path.relative());
        (path, suffixes)
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.claimed.len()
    }
}
