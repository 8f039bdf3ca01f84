//! Read-only access to the Omni Notes SQLite database

use crate::domain::{Category, Note};
use crate::error::{OmniTreeError, Result};
use rusqlite::{Connection, OpenFlags, Row};
use std::path::Path;
use tracing::{debug, info};

const CATEGORIES_QUERY: &str = "SELECT name FROM categories";

const NOTES_QUERY: &str = "SELECT creation, title, content, archived, trashed, categories.name, last_modification
     FROM notes
     LEFT JOIN categories ON notes.category_id = categories.category_id";

/// Everything a conversion needs from the store, read up front
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub categories: Vec<Category>,
    pub notes: Vec<Note>,
}

/// Abstract source of notes and categories
pub trait NoteSource {
    /// All categories, in store order
    fn categories(&self) -> Result<Vec<Category>>;

    /// All notes joined with their category name, in store order
    fn notes(&self) -> Result<Vec<Note>>;

    /// Read categories, then notes
    fn snapshot(&self) -> Result<Snapshot> {
        let categories = self.categories()?;
        let notes = self.notes()?;
        Ok(Snapshot { categories, notes })
    }
}

/// SQLite implementation of NoteSource
#[derive(Debug)]
pub struct SqliteSource {
    conn: Connection,
}

impl SqliteSource {
    /// Open an existing database read-only. Never creates a file.
    pub fn open(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(OmniTreeError::SourceMissing(path.to_path_buf()));
        }

        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        info!(path = %path.display(), "opened note database");

        Ok(SqliteSource { conn })
    }

    fn note_from_row(row: &Row<'_>) -> rusqlite::Result<Note> {
        Ok(Note {
            created_ms: row.get(0)?,
            title: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
            body: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
            archived: flag(row, 3)?,
            trashed: flag(row, 4)?,
            category: row.get(5)?,
            modified_ms: row.get::<_, Option<i64>>(6)?.unwrap_or_default(),
        })
    }
}

fn flag(row: &Row<'_>, idx: usize) -> rusqlite::Result<bool> {
    Ok(row.get::<_, Option<i64>>(idx)?.is_some_and(|v| v != 0))
}

impl NoteSource for SqliteSource {
    fn categories(&self) -> Result<Vec<Category>> {
        let mut stmt = self.conn.prepare(CATEGORIES_QUERY)?;
        let categories = stmt
            .query_map([], |row| row.get::<_, String>(0).map(Category::new))?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        debug!(count = categories.len(), "read categories");
        Ok(categories)
    }

    fn notes(&self) -> Result<Vec<Note>> {
        let mut stmt = self.conn.prepare(NOTES_QUERY)?;
        let notes = stmt
            .query_map([], Self::note_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        debug!(count = notes.len(), "read notes");
        Ok(notes)
    }
}
