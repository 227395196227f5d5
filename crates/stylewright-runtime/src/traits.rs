/*
 * traits.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Defines the filesystem and style-engine traits for the runtime abstraction layer.
 *
 * This abstraction lets the document builder resolve include sources and
 * compile stylesheets without depending on a concrete environment:
 * - NativeFs: Full filesystem access using std
 * - MemoryFs: In-memory sources (tests, hosts that never touch disk)
 * - GrassEngine: SASS compilation through the grass crate
 */

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type for runtime operations
pub type RuntimeResult<T> = Result<T, RuntimeError>;

/// Errors that can occur during runtime operations
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Path was read but does not exist in this filesystem
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    /// SASS compilation failed
    #[error("SASS compilation error: {0}")]
    Compilation(String),
}

/// Output formatting mode of the style engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum StyleMode {
    /// Human-readable, multi-line output
    #[default]
    Expanded,
    /// Minimal whitespace
    Compressed,
}

impl StyleMode {
    /// Map a compression flag to a style mode.
    pub fn from_compress(compress: bool) -> Self {
        if compress {
            StyleMode::Compressed
        } else {
            StyleMode::Expanded
        }
    }

    /// Name of the mode as the engine spells it.
    pub fn as_str(&self) -> &'static str {
        match self {
            StyleMode::Expanded => "expanded",
            StyleMode::Compressed => "compressed",
        }
    }
}

impl std::fmt::Display for StyleMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Synchronous read-only filesystem access.
///
/// Include sources that name a file are resolved through this trait, and
/// the SASS engine resolves `@import`/`@use` through it as well.
pub trait SourceFs {
    /// Check if path exists as a file.
    fn is_file(&self, path: &Path) -> bool;

    /// Check if path exists as a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Read entire file contents as bytes.
    fn file_read(&self, path: &Path) -> RuntimeResult<Vec<u8>>;

    /// Check if path exists at all.
    fn exists(&self, path: &Path) -> bool {
        self.is_file(path) || self.is_dir(path)
    }

    /// Read file as string with UTF-8 encoding.
    ///
    /// Default implementation reads bytes and converts to string.
    fn file_read_string(&self, path: &Path) -> RuntimeResult<String> {
        let bytes = self.file_read(path)?;
        String::from_utf8(bytes).map_err(|e| {
            RuntimeError::Io(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("Invalid UTF-8 in file: {}", e),
            ))
        })
    }
}

/// A compiler from stylesheet-language text to CSS.
///
/// Implementations must return the compiled text unchanged and report
/// invalid input as [`RuntimeError::Compilation`].
pub trait StyleEngine {
    /// Compile `source` using the given output style.
    fn compile(&self, source: &str, mode: StyleMode) -> RuntimeResult<String>;
}

impl<T: StyleEngine + ?Sized> StyleEngine for &T {
    fn compile(&self, source: &str, mode: StyleMode) -> RuntimeResult<String> {
        (**self).compile(source, mode)
    }
}

impl<T: SourceFs + ?Sized> SourceFs for &T {
    fn is_file(&self, path: &Path) -> bool {
        (**self).is_file(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        (**self).is_dir(path)
    }

    fn file_read(&self, path: &Path) -> RuntimeResult<Vec<u8>> {
        (**self).file_read(path)
    }
}
