//! Boilerplate file discovery

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Lazily walk `source_dir`, yielding files whose name ends in `.<extension>`.
///
/// Order is whatever the filesystem enumerates; use [`collect_sorted`] when a
/// stable order matters. Unreadable entries are yielded as errors.
pub fn walk(
    source_dir: &Path,
    extension: &str,
) -> impl Iterator<Item = Result<PathBuf, walkdir::Error>> {
    let suffix = format!(".{}", extension);
    WalkDir::new(source_dir)
        .follow_links(false)
        .into_iter()
        .filter_map(move |entry| match entry {
            Ok(entry) if entry.file_type().is_file() && has_suffix(entry.file_name(), &suffix) => {
                Some(Ok(entry.into_path()))
            }
            Ok(_) => None,
            Err(e) => Some(Err(e)),
        })
}

/// Walk and sort, splitting matched paths from walk errors
pub fn collect_sorted(source_dir: &Path, extension: &str) -> (Vec<PathBuf>, Vec<walkdir::Error>) {
    let mut paths = Vec::new();
    let mut errors = Vec::new();
    for entry in walk(source_dir, extension) {
        match entry {
            Ok(path) => paths.push(path),
            Err(e) => errors.push(e),
        }
    }
    paths.sort();
    (paths, errors)
}

fn has_suffix(file_name: &OsStr, suffix: &str) -> bool {
    file_name.to_string_lossy().ends_with(suffix)
}
