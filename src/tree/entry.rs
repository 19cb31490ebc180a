use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, TreeError};

/// A single name inside a listed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    /// Full path to the entry
    pub path: PathBuf,

    /// Entry name (last component of path)
    pub name: String,

    /// True if the entry resolves to a directory (symlinks are followed)
    pub is_directory: bool,
}

impl DirectoryEntry {
    /// Resolve an entry by querying the filesystem.
    ///
    /// Follows symlinks, so a dangling link surfaces as a `Filesystem` error.
    pub fn resolve(path: PathBuf, name: String) -> Result<Self> {
        let metadata = fs::metadata(&path).map_err(|e| TreeError::Filesystem {
            path: path.clone(),
            source: e,
        })?;

        Ok(Self {
            path,
            name,
            is_directory: metadata.is_dir(),
        })
    }

    /// Hidden entries start with a dot and are never shown.
    pub fn is_hidden_name(name: &str) -> bool {
        name.starts_with('.')
    }
}

/// List the entries inside `dir` as `(display name, path)` pairs, sorted by name.
///
/// The name is lossy for non-UTF-8 entries; the path is the real one.
pub fn list_names(dir: &Path) -> Result<Vec<(String, PathBuf)>> {
    let read_dir = fs::read_dir(dir).map_err(|e| TreeError::Filesystem {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut names = Vec::new();
    for item in read_dir {
        let item = item.map_err(|e| TreeError::Filesystem {
            path: dir.to_path_buf(),
            source: e,
        })?;
        names.push((item.file_name().to_string_lossy().into_owned(), item.path()));
    }

    names.sort();
    Ok(names)
}
