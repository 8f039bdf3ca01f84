//! Zip archive of the output tree

use crate::error::{OmniTreeError, Result};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

/// Sibling archive path for an output root: `notes/output` -> `notes/output.zip`
pub fn archive_path_for(root: &Path) -> Result<PathBuf> {
    let name = root.file_name().ok_or_else(|| {
        OmniTreeError::Config(format!(
            "output root must name a directory: {}",
            root.display()
        ))
    })?;

    let mut file_name = name.to_os_string();
    file_name.push(".zip");
    Ok(root.with_file_name(file_name))
}

/// Zip the whole tree under `root` into `dest`.
///
/// Entries are relative to `root`, hidden files and empty directories
/// included. Entries are sorted and stamped 1980-01-01 00:00:00, so identical
/// trees produce identical archives. Returns the number of files stored.
pub fn write_archive(root: &Path, dest: &Path) -> Result<usize> {
    let options = SimpleFileOptions::default()
        .last_modified_time(zip::DateTime::default())
        .compression_method(zip::CompressionMethod::Deflated);

    let mut zip = ZipWriter::new(BufWriter::new(File::create(dest)?));
    let mut files = 0;

    for entry in WalkDir::new(root).sort_by_file_name().min_depth(1) {
        let entry = entry?;
        let name = entry_name(root, entry.path())?;

        if entry.file_type().is_dir() {
            zip.add_directory(name, options)?;
        } else if entry.file_type().is_file() {
            debug!(entry = %name, "archiving file");
            zip.start_file(name, options)?;
            zip.write_all(&fs::read(entry.path())?)?;
            files += 1;
        }
    }

    zip.finish()?.flush()?;
    info!(archive = %dest.display(), files, "wrote archive");

    Ok(files)
}

/// `/`-separated entry name relative to the archive root
fn entry_name(root: &Path, path: &Path) -> Result<String> {
    let rel = path.strip_prefix(root).map_err(|_| {
        OmniTreeError::Config(format!(
            "{} is outside the output root {}",
            path.display(),
            root.display()
        ))
    })?;

    let parts: Vec<String> = rel
        .iter()
        .map(|part| part.to_string_lossy().into_owned())
        .collect();
    Ok(parts.join("/"))
}
