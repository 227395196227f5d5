//! SASS compilation using the grass crate.
//!
//! Copyright (c) 2025 Posit, PBC
//!
//! This module provides SASS/SCSS compilation using the grass crate, a pure
//! Rust implementation that targets dart-sass.
//!
//! Key components:
//! - `RuntimeFs`: Adapter implementing `grass::Fs` for any `SourceFs`
//! - `GrassEngine`: `StyleEngine` implementation with load paths

use std::fmt::Debug;
use std::io;
use std::path::{Path, PathBuf};

use grass::{Options, OutputStyle};

use crate::native::NativeFs;
use crate::traits::{RuntimeError, RuntimeResult, SourceFs, StyleEngine, StyleMode};

/// Adapter that implements `grass::Fs` using a `SourceFs`.
///
/// This lets grass resolve `@import` and `@use` through the same
/// filesystem the include sources are read from.
pub struct RuntimeFs<'a> {
    fs: &'a dyn SourceFs,
}

impl<'a> RuntimeFs<'a> {
    /// Create a new RuntimeFs adapter wrapping the given filesystem.
    pub fn new(fs: &'a dyn SourceFs) -> Self {
        Self { fs }
    }
}

impl Debug for RuntimeFs<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuntimeFs")
            .field("fs", &"<SourceFs>")
            .finish()
    }
}

impl grass::Fs for RuntimeFs<'_> {
    fn is_dir(&self, path: &Path) -> bool {
        self.fs.is_dir(path)
    }

    fn is_file(&self, path: &Path) -> bool {
        self.fs.is_file(path)
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        self.fs.file_read(path).map_err(|e| match e {
            RuntimeError::Io(e) => e,
            other => io::Error::new(io::ErrorKind::NotFound, other.to_string()),
        })
    }
}

impl From<StyleMode> for OutputStyle {
    fn from(mode: StyleMode) -> Self {
        match mode {
            StyleMode::Expanded => OutputStyle::Expanded,
            StyleMode::Compressed => OutputStyle::Compressed,
        }
    }
}

/// SASS engine backed by grass.
///
/// `@import`/`@use` targets are resolved through `fs`, searching
/// `load_paths` in order after the importing file's directory.
#[derive(Debug, Clone, Default)]
pub struct GrassEngine<F = NativeFs> {
    fs: F,
    load_paths: Vec<PathBuf>,
}

impl GrassEngine<NativeFs> {
    /// Create an engine reading from the native filesystem.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<F: SourceFs> GrassEngine<F> {
    /// Create an engine reading from the given filesystem.
    pub fn with_fs(fs: F) -> Self {
        Self {
            fs,
            load_paths: Vec::new(),
        }
    }

    /// Replace the load paths.
    pub fn load_paths(mut self, load_paths: impl IntoIterator<Item = PathBuf>) -> Self {
        self.load_paths = load_paths.into_iter().collect();
        self
    }

    /// Append a single load path.
    pub fn load_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.load_paths.push(path.into());
        self
    }

    /// The configured load paths, in search order.
    pub fn get_load_paths(&self) -> &[PathBuf] {
        &self.load_paths
    }
}

impl<F: SourceFs> StyleEngine for GrassEngine<F> {
    fn compile(&self, source: &str, mode: StyleMode) -> RuntimeResult<String> {
        let fs = RuntimeFs::new(&self.fs);

        let options = Options::default()
            .fs(&fs)
            .load_paths(&self.load_paths)
            .style(mode.into());

        grass::from_string(source, &options).map_err(|e| RuntimeError::Compilation(e.to_string()))
    }
}
