//! omnitree - Omni Notes to markdown folder converter
//!
//! Reads an Omni Notes SQLite database and writes one markdown file per note
//! into a directory tree mirroring the note categories, with archived and
//! trashed notes in reserved `.archive` and `.trash` folders, then zips the
//! tree.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::OmniTreeError;
