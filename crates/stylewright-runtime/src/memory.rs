/*
 * memory.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * In-memory filesystem for include sources that never touch disk.
 */

use std::collections::{HashMap, HashSet};
use std::path::{Component, Path, PathBuf};

use crate::traits::{RuntimeError, RuntimeResult, SourceFs};

/// In-memory filesystem.
///
/// Paths are normalized (`.` removed, `..` resolved) before lookup, so
/// `a/./b.scss` and `a/c/../b.scss` name the same file. Relative and
/// absolute paths are distinct keys.
#[derive(Debug, Clone, Default)]
pub struct MemoryFs {
    files: HashMap<PathBuf, Vec<u8>>,
    /// Directory entries (automatically includes parents of all files)
    directories: HashSet<PathBuf>,
}

impl MemoryFs {
    /// Create a new empty filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file, creating all parent directories.
    pub fn add_file(&mut self, path: impl AsRef<Path>, contents: impl Into<Vec<u8>>) {
        let normalized = normalize_path(path.as_ref());
        if let Some(parent) = normalized.parent() {
            self.add_directory_and_parents(parent);
        }
        self.files.insert(normalized, contents.into());
    }

    /// Builder-style variant of [`MemoryFs::add_file`].
    pub fn with_file(mut self, path: impl AsRef<Path>, contents: impl Into<Vec<u8>>) -> Self {
        self.add_file(path, contents);
        self
    }

    /// Number of files stored.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    fn add_directory_and_parents(&mut self, path: &Path) {
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            self.directories.insert(current.clone());
        }
    }
}

impl SourceFs for MemoryFs {
    fn is_file(&self, path: &Path) -> bool {
        self.files.contains_key(&normalize_path(path))
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.directories.contains(&normalize_path(path))
    }

    fn file_read(&self, path: &Path) -> RuntimeResult<Vec<u8>> {
        let normalized = normalize_path(path);
        self.files
            .get(&normalized)
            .cloned()
            .ok_or(RuntimeError::NotFound(normalized))
    }
}

/// Normalize path components (remove `.` and resolve `..`).
fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::ParentDir => {
                normalized.pop();
            }
            Component::CurDir => {}
            other => normalized.push(other),
        }
    }
    normalized
}
