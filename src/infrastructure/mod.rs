//! Infrastructure layer - External I/O and persistence

pub mod archive;
pub mod config;
pub mod output_tree;
pub mod source;

pub use archive::{archive_path_for, write_archive};
pub use config::{ConfigFile, Settings};
pub use output_tree::OutputTree;
pub use source::{NoteSource, Snapshot, SqliteSource};
