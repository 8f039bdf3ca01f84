#![allow(dead_code)]

use assert_cmd::Command;
use rusqlite::{params, Connection};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// 2022-01-01T00:00:00Z in epoch milliseconds
pub const NEW_YEAR_2022: i64 = 1_640_995_200_000;

pub fn omnitree_cmd() -> Command {
    let mut cmd = Command::cargo_bin("omnitree").unwrap();
    cmd.env_remove("OMNITREE_DB");
    cmd.env_remove("OMNITREE_OUTPUT");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Fixture database with the Omni Notes tables this tool reads
pub struct NotesDb {
    conn: Connection,
}

impl NotesDb {
    pub fn create(path: &Path) -> Self {
        let conn = Connection::open(path).unwrap();
        conn.execute_batch(
            "CREATE TABLE categories (
                 category_id INTEGER PRIMARY KEY,
                 name TEXT,
                 description TEXT,
                 color TEXT
             );
             CREATE TABLE notes (
                 creation INTEGER PRIMARY KEY,
                 last_modification INTEGER,
                 title TEXT,
                 content TEXT,
                 archived INTEGER,
                 trashed INTEGER,
                 category_id INTEGER
             );",
        )
        .unwrap();
        NotesDb { conn }
    }

    pub fn category(&self, id: i64, name: &str) -> &Self {
        self.conn
            .execute(
                "INSERT INTO categories (category_id, name) VALUES (?1, ?2)",
                params![id, name],
            )
            .unwrap();
        self
    }

    pub fn note(&self, note: TestNote<'_>) -> &Self {
        self.conn
            .execute(
                "INSERT INTO notes (creation, last_modification, title, content, archived, trashed, category_id)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    note.creation,
                    note.last_modification,
                    note.title,
                    note.content,
                    note.archived as i64,
                    note.trashed as i64,
                    note.category_id
                ],
            )
            .unwrap();
        self
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TestNote<'a> {
    pub creation: i64,
    pub last_modification: i64,
    pub title: &'a str,
    pub content: &'a str,
    pub archived: bool,
    pub trashed: bool,
    pub category_id: Option<i64>,
}

impl<'a> TestNote<'a> {
    pub fn new(creation: i64, title: &'a str, content: &'a str) -> Self {
        TestNote {
            creation,
            last_modification: creation,
            title,
            content,
            archived: false,
            trashed: false,
            category_id: None,
        }
    }

    pub fn archived(mut self) -> Self {
        self.archived = true;
        self
    }

    pub fn trashed(mut self) -> Self {
        self.trashed = true;
        self
    }

    pub fn in_category(mut self, id: i64) -> Self {
        self.category_id = Some(id);
        self
    }

    pub fn modified(mut self, at: i64) -> Self {
        self.last_modification = at;
        self
    }
}

/// Every entry under `root`: directories map to `None`, files to their bytes
pub fn snapshot_tree(root: &Path) -> BTreeMap<String, Option<Vec<u8>>> {
    let mut entries = BTreeMap::new();
    for entry in WalkDir::new(root).min_depth(1) {
        let entry = entry.unwrap();
        let rel = entry.path().strip_prefix(root).unwrap();
        let key = rel
            .iter()
            .map(|p| p.to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join("/");
        let value = if entry.file_type().is_dir() {
            None
        } else {
            Some(fs::read(entry.path()).unwrap())
        };
        entries.insert(key, value);
    }
    entries
}

/// Relative paths of the files under `root`
pub fn file_list(root: &Path) -> Vec<String> {
    snapshot_tree(root)
        .into_iter()
        .filter(|(_, v)| v.is_some())
        .map(|(k, _)| k)
        .collect()
}
