//! Filesystem listing and operations
//!
//! Split into modules for reduced complexity.

mod ops;
mod utils;

pub use ops::{create_directory, delete_entry, write_lines};
pub use utils::{count_entries, format_mtime, format_size};

use std::cmp::Ordering;
use std::fs::{self, DirEntry};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::error::NavError;

/// Filesystem entry (file or directory)
#[derive(Clone, Debug)]
pub struct Entry {
    pub name: String,
    pub path: PathBuf,
    pub size: u64,
    pub modified: Option<SystemTime>,
}

impl Entry {
    fn from_dir_entry(entry: &DirEntry) -> Self {
        let path = entry.path();
        let name = entry.file_name().to_string_lossy().into_owned();
        let metadata = entry.metadata().ok();
        let size = metadata.as_ref().map(|m| m.len()).unwrap_or(0);
        let modified = metadata.and_then(|m| m.modified().ok());

        Self {
            name,
            path,
            size,
            modified,
        }
    }
}

/// What a delete removed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeletedKind {
    File,
    Directory,
}

/// Directory contents with directories and files kept apart.
#[derive(Debug, Default)]
pub struct DirListing {
    pub dirs: Vec<Entry>,
    pub files: Vec<Entry>,
}

impl DirListing {
    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty() && self.files.is_empty()
    }
}

/// List a directory, sorted by name within each group.
///
/// Hidden (dot-prefixed) entries are skipped unless `show_hidden` is
/// set. A permission failure maps to [`NavError::AccessDenied`].
pub fn list_dir(path: &Path, show_hidden: bool) -> Result<DirListing, NavError> {
    let read_dir = fs::read_dir(path).map_err(|e| read_error(path, e))?;

    let mut listing = DirListing::default();
    for entry in read_dir.filter_map(|e| e.ok()) {
        let item = Entry::from_dir_entry(&entry);
        if !show_hidden && item.name.starts_with('.') {
            continue;
        }
        if item.path.is_dir() {
            listing.dirs.push(item);
        } else {
            listing.files.push(item);
        }
    }

    listing.dirs.sort_by(compare_by_name);
    listing.files.sort_by(compare_by_name);
    Ok(listing)
}

fn compare_by_name(a: &Entry, b: &Entry) -> Ordering {
    a.name.to_lowercase().cmp(&b.name.to_lowercase())
}

fn read_error(path: &Path, err: std::io::Error) -> NavError {
    match err.kind() {
        std::io::ErrorKind::PermissionDenied => NavError::AccessDenied(path.display().to_string()),
        std::io::ErrorKind::NotFound => NavError::NotFound(path.display().to_string()),
        _ => NavError::Io(err),
    }
}
