//! Where an archived or trashed note lands

/// Reserved subfolder inside the output root and every category directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Folder {
    /// Directly in the category directory (or the output root)
    Root,
    /// `.archive/`
    Archive,
    /// `.trash/`
    Trash,
}

impl Folder {
    /// Reserved folders created under the output root and each category
    pub const RESERVED: [Folder; 2] = [Folder::Archive, Folder::Trash];

    /// Directory name, `None` for the enclosing directory itself
    pub fn dir_name(&self) -> Option<&'static str> {
        match self {
            Folder::Root => None,
            Folder::Archive => Some(".archive"),
            Folder::Trash => Some(".trash"),
        }
    }
}

/// Folder and visibility for one note
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub folder: Folder,
    /// Hidden notes get a leading `.` in their filename
    pub hidden: bool,
}

impl Placement {
    /// Decide placement from the two note flags.
    ///
    /// Trash wins the folder, but an archived note stays hidden even when
    /// it is also trashed.
    pub fn from_flags(archived: bool, trashed: bool) -> Self {
        let (folder, hidden) = match (archived, trashed) {
            (false, false) => (Folder::Root, false),
            (true, false) => (Folder::Archive, true),
            (false, true) => (Folder::Trash, false),
            (true, true) => (Folder::Trash, true),
        };
        Placement { folder, hidden }
    }
}
