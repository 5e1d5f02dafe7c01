//! Working directory access
//!
//! The workspace is the directory being snapshotted. It owns the two
//! filesystem concerns the object types should not: listing directories in a
//! deterministic order and filtering out the reserved metadata directories.

use bytes::Bytes;
use std::io;
use std::path::{Path, PathBuf};

/// Entry names that are never content under version control.
const IGNORED_PATHS: [&str; 2] = [".cask", ".git"];

#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// List a directory's entries in lexicographic name order.
    ///
    /// The filesystem's listing order is not deterministic; sorting here is
    /// what makes two trees with identical children hash identically.
    /// Reserved metadata names are skipped unconditionally.
    pub fn list_dir(&self, dir_path: &Path) -> io::Result<Vec<PathBuf>> {
        let mut entries = std::fs::read_dir(dir_path)?
            .collect::<io::Result<Vec<_>>>()?
            .into_iter()
            .map(|entry| entry.path())
            .filter(|path| !Self::is_ignored(path))
            .collect::<Vec<_>>();

        entries.sort_by(|left, right| left.file_name().cmp(&right.file_name()));

        Ok(entries)
    }

    /// Read one workspace-relative file fully into memory.
    pub fn read_file(&self, file_path: &Path) -> io::Result<Bytes> {
        std::fs::read(self.path.join(file_path)).map(Bytes::from)
    }

    fn is_ignored(path: &Path) -> bool {
        path.file_name()
            .map(|name| IGNORED_PATHS.contains(&name.to_string_lossy().as_ref()))
            .unwrap_or(false)
    }
}
