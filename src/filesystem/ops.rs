//! File operations (create, write, delete)

use std::fs;
use std::io::Write;
use std::path::Path;

use super::DeletedKind;

/// Create a directory, including missing intermediate segments.
pub fn create_directory(path: &Path) -> std::io::Result<()> {
    fs::create_dir_all(path)
}

/// Write text lines to a file, one per line, replacing any existing
/// file of the same name.
pub fn write_lines(path: &Path, lines: &[String]) -> std::io::Result<()> {
    let mut file = fs::File::create(path)?;
    for line in lines {
        writeln!(file, "{line}")?;
    }
    Ok(())
}

/// Delete `path`, recursively when it is a directory.
///
/// Returns what was removed, or `None` when nothing exists there.
pub fn delete_entry(path: &Path) -> std::io::Result<Option<DeletedKind>> {
    if path.is_dir() {
        fs::remove_dir_all(path)?;
        Ok(Some(DeletedKind::Directory))
    } else if path.is_file() || path.is_symlink() {
        fs::remove_file(path)?;
        Ok(Some(DeletedKind::File))
    } else {
        Ok(None)
    }
}
