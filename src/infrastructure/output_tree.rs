//! Output directory tree

use crate::domain::{Category, Folder, NotePath};
use crate::error::{OmniTreeError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, info};

/// The directory that receives converted notes
#[derive(Debug, Clone)]
pub struct OutputTree {
    root: PathBuf,
}

impl OutputTree {
    /// Create a handle for `root`. Nothing touches the disk yet.
    ///
    /// The root is deleted on reset, so it must end in a normal path
    /// component (not `.`, `..`, or a filesystem root).
    pub fn new(root: PathBuf) -> Result<Self> {
        match root.components().next_back() {
            Some(Component::Normal(_)) => Ok(OutputTree { root }),
            _ => Err(OmniTreeError::Config(format!(
                "output root must name a directory: {}",
                root.display()
            ))),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Remove any previous output and lay out the empty tree.
    ///
    /// Creates the root and, for the root and every category, the reserved
    /// `.archive` and `.trash` folders. A missing root is not an error.
    pub fn reset(&self, categories: &[Category]) -> Result<()> {
        match fs::remove_dir_all(&self.root) {
            Ok(()) => info!(root = %self.root.display(), "removed previous output"),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(root = %self.root.display(), "no previous output");
            }
            Err(e) => return Err(e.into()),
        }

        fs::create_dir_all(&self.root)?;
        Self::create_reserved(&self.root)?;

        for category in categories {
            let dir = self.root.join(&category.name);
            fs::create_dir_all(&dir)?;
            Self::create_reserved(&dir)?;
            debug!(category = %category.name, "created category directory");
        }

        Ok(())
    }

    fn create_reserved(dir: &Path) -> Result<()> {
        for folder in Folder::RESERVED {
            if let Some(name) = folder.dir_name() {
                fs::create_dir_all(dir.join(name))?;
            }
        }
        Ok(())
    }

    /// Absolute location of a note path inside this tree
    pub fn locate(&self, path: &NotePath) -> PathBuf {
        path.relative()
            .split('/')
            .fold(self.root.clone(), |acc, part| acc.join(part))
    }

    /// Write note content verbatim, creating missing parent directories.
    pub fn write_note(&self, path: &NotePath, content: &str) -> Result<PathBuf> {
        let file = self.locate(path);

        if let Some(parent) = file.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(&file, content)?;
        Ok(file)
    }
}
