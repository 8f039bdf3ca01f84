//! Convert use case: database rows to a markdown tree plus zip

use crate::domain::{render_note, Folder, NameLedger, NotePath};
use crate::error::Result;
use crate::infrastructure::{archive_path_for, write_archive, NoteSource, OutputTree};
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::{debug, info};

/// Outcome of one conversion run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionReport {
    pub categories: usize,
    pub notes_written: usize,
    pub per_folder: BTreeMap<Folder, usize>,
    /// Notes whose filename needed `_` suffixes
    pub renamed: usize,
    pub archive: Option<PathBuf>,
}

impl ConversionReport {
    pub fn count(&self, folder: Folder) -> usize {
        self.per_folder.get(&folder).copied().unwrap_or(0)
    }
}

/// Service running the whole conversion
pub struct ConvertService<S: NoteSource> {
    source: S,
    tree: OutputTree,
    archive: bool,
}

impl<S: NoteSource> ConvertService<S> {
    /// Create a new convert service
    pub fn new(source: S, tree: OutputTree, archive: bool) -> Self {
        ConvertService {
            source,
            tree,
            archive,
        }
    }

    /// Run the conversion. The first error aborts; partial output stays on disk.
    pub fn execute(&self) -> Result<ConversionReport> {
        // 1. Read everything first so a bad source leaves the disk untouched
        let snapshot = self.source.snapshot()?;

        // 2. Fresh tree with category and reserved folders
        self.tree.reset(&snapshot.categories)?;

        let mut report = ConversionReport {
            categories: snapshot.categories.len(),
            ..ConversionReport::default()
        };

        // 3. One file per note, in store order
        let mut ledger = NameLedger::new();
        for note in &snapshot.notes {
            let candidate = NotePath::for_note(note)?;
            let (path, suffixes) = ledger.claim(candidate, |p| {
                self.tree.locate(p).exists()
            });
            if suffixes > 0 {
                info!(
                    note = note.created_ms,
                    path = %path.relative(),
                    suffixes,
                    "renamed duplicate note"
                );
                report.renamed += 1;
            }

            let content = render_note(note)?;
            let written = self.tree.write_note(&path, &content)?;
            debug!(note = note.created_ms, file = %written.display(), "wrote note");

            report.notes_written += 1;
            *report.per_folder.entry(path.folder).or_insert(0) += 1;
        }

        // 4. Zip the tree once everything is on disk
        if self.archive {
            let dest = archive_path_for(self.tree.root())?;
            write_archive(self.tree.root(), &dest)?;
            report.archive = Some(dest);
        }

        info!(
            notes = report.notes_written,
            categories = report.categories,
            renamed = report.renamed,
            "conversion complete"
        );
        Ok(report)
    }
}
