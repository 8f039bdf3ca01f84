//! Error types for omnitree

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the converter
#[derive(Debug, Error)]
pub enum OmniTreeError {
    #[error("Note database not found: {0}")]
    SourceMissing(PathBuf),

    #[error("Database error: {0}")]
    Source(#[from] rusqlite::Error),

    #[error("Invalid timestamp {millis} on note created at {note}")]
    InvalidTimestamp { note: i64, millis: i64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),
}

impl OmniTreeError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            OmniTreeError::SourceMissing(_)
            | OmniTreeError::Source(_)
            | OmniTreeError::InvalidTimestamp { .. } => 2,
            OmniTreeError::Config(_) | OmniTreeError::TomlDeserialize(_) => 3,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            OmniTreeError::SourceMissing(path) => {
                format!(
                    "Note database not found: {}\n\n\
                    Suggestions:\n\
                    • Export the Omni Notes database and place it next to this tool\n\
                    • Point to it explicitly: omnitree --db path/to/omni-notes\n\
                    • Set OMNITREE_DB environment variable to the database path",
                    path.display()
                )
            }
            OmniTreeError::Source(err) => {
                format!(
                    "Database error: {}\n\n\
                    Suggestions:\n\
                    • Check that the file is an Omni Notes SQLite database\n\
                    • The database needs 'notes' and 'categories' tables",
                    err
                )
            }
            OmniTreeError::Config(msg) => {
                if msg.contains("output root") {
                    format!(
                        "{}\n\n\
                        The output directory is deleted and rebuilt on every run.\n\
                        Example: omnitree --output notes-export",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using OmniTreeError
pub type Result<T> = std::result::Result<T, OmniTreeError>;
