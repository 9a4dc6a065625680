//! Batch runners that walk a flat source directory and write transformed
//! copies of every qualifying image into an output directory.
//!
//! Both pipelines share the same shape: list the directory in filesystem
//! order (never recursing), keep entries whose name ends in `.png`, `.jpg`
//! or `.jpeg` case-insensitively, decode, transform, write. The first
//! failure aborts the whole run; nothing is retried or skipped over.

pub mod brightness;
pub mod flip;

use std::fs;
use std::path::Path;

use crate::error::AugmentError;

/// Counts reported by a completed pipeline run.
///
/// `written` is the number of output files produced; `skipped` counts
/// entries passed over (wrong extension, or a duplicate filename in the
/// flip pipeline). Skips are normal, not errors.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub written: usize,
    pub skipped: usize,
}

/// True when `filename` ends in an extension the pipelines accept.
pub fn is_supported_image(filename: &str) -> bool {
    let lower = filename.to_ascii_lowercase();
    lower.ends_with(".png") || lower.ends_with(".jpg") || lower.ends_with(".jpeg")
}

/// Splits a filename at its last `.` into `(stem, extension)`.
///
/// The extension keeps its leading dot; a name without a dot gets an empty
/// extension.
pub fn split_name(filename: &str) -> (&str, &str) {
    match filename.rfind('.') {
        Some(idx) => filename.split_at(idx),
        None => (filename, ""),
    }
}

/// Lists the plain-file entry names of `dir` in filesystem order.
///
/// Subdirectories are ignored (the pipelines never recurse) and so are
/// names that are not valid UTF-8.
pub(crate) fn list_entries(dir: &Path) -> Result<Vec<String>, AugmentError> {
    let entries = fs::read_dir(dir).map_err(|e| AugmentError::SourceDir {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| AugmentError::SourceDir {
            path: dir.to_path_buf(),
            source: e,
        })?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        match entry.file_name().into_string() {
            Ok(name) => names.push(name),
            Err(name) => log::debug!("skipping non-UTF-8 filename {:?}", name),
        }
    }
    Ok(names)
}
