/*
 * native.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Filesystem access backed by std::fs.
 */

use std::path::Path;

use crate::traits::{RuntimeResult, SourceFs};

/// Native filesystem with full read access.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeFs;

impl NativeFs {
    pub fn new() -> Self {
        Self
    }
}

impl SourceFs for NativeFs {
    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn file_read(&self, path: &Path) -> RuntimeResult<Vec<u8>> {
        tracing::trace!(path = %path.display(), "Reading file");
        Ok(std::fs::read(path)?)
    }
}
