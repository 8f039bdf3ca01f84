//! Output formatting utilities

use crate::application::ConversionReport;
use crate::domain::Folder;
use std::path::Path;

/// Format the end-of-run summary
pub fn format_report(report: &ConversionReport, output: &Path) -> String {
    if report.notes_written == 0 {
        return format!("No notes found; created empty tree at {}\n", output.display());
    }

    let mut text = format!(
        "Converted {} notes into {}\n",
        report.notes_written,
        output.display()
    );
    text.push_str(&format!("  categories: {}\n", report.categories));
    text.push_str(&format!(
        "  active: {}  archived: {}  trashed: {}\n",
        report.count(Folder::Root),
        report.count(Folder::Archive),
        report.count(Folder::Trash)
    ));
    if report.renamed > 0 {
        text.push_str(&format!(
            "  renamed {} duplicate title(s) with '_' suffixes\n",
            report.renamed
        ));
    }
    if let Some(archive) = &report.archive {
        text.push_str(&format!("Archive: {}\n", archive.display()));
    }
    text
}
