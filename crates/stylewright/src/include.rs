//! Extra source material merged ahead of a built document.
//!
//! Copyright (c) 2025 Posit, PBC
//!
//! An [`IncludeItem`] is literal SCSS, a file, or a reader. Items are
//! resolved to text in caller order and each is followed by a newline.

use std::fmt;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde_json::Value;
use stylewright_runtime::{RuntimeError, SourceFs};

use crate::error::{StyleError, StyleResult};

/// Name used in errors for reader items.
const READER_NAME: &str = "<reader>";

/// One piece of source material to compile ahead of the document.
pub enum IncludeItem {
    /// File contents if the text names an existing path, otherwise the
    /// text itself. A path that exists but cannot be read (a directory)
    /// is an error.
    Source(String),
    /// Always read from the filesystem.
    Path(PathBuf),
    /// Read to exhaustion, once.
    Reader(Box<dyn Read>),
}

impl IncludeItem {
    /// Wrap a reader.
    pub fn reader(reader: impl Read + 'static) -> Self {
        IncludeItem::Reader(Box::new(reader))
    }

    /// Shape of this item, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            IncludeItem::Source(_) => "string",
            IncludeItem::Path(_) => "path",
            IncludeItem::Reader(_) => "reader",
        }
    }

    /// Resolve this item to text.
    pub fn resolve(self, fs: &dyn SourceFs) -> StyleResult<String> {
        match self {
            IncludeItem::Source(text) => {
                let path = Path::new(&text);
                if fs.exists(path) {
                    tracing::trace!(path = %path.display(), "Include resolved from file");
                    read_file(fs, path)
                } else {
                    tracing::trace!(bytes = text.len(), "Include used verbatim");
                    Ok(text)
                }
            }
            IncludeItem::Path(path) => {
                tracing::trace!(path = %path.display(), "Include resolved from file");
                read_file(fs, &path)
            }
            IncludeItem::Reader(mut reader) => {
                let mut text = String::new();
                reader
                    .read_to_string(&mut text)
                    .map_err(|e| StyleError::Io {
                        name: READER_NAME.to_string(),
                        source: RuntimeError::Io(e),
                    })?;
                tracing::trace!(bytes = text.len(), "Include read from reader");
                Ok(text)
            }
        }
    }
}

fn read_file(fs: &dyn SourceFs, path: &Path) -> StyleResult<String> {
    fs.file_read_string(path).map_err(|source| StyleError::Io {
        name: path.display().to_string(),
        source,
    })
}

impl fmt::Debug for IncludeItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IncludeItem::Source(text) => f.debug_tuple("Source").field(text).finish(),
            IncludeItem::Path(path) => f.debug_tuple("Path").field(path).finish(),
            IncludeItem::Reader(_) => f.debug_tuple("Reader").field(&READER_NAME).finish(),
        }
    }
}

impl From<&str> for IncludeItem {
    fn from(text: &str) -> Self {
        IncludeItem::Source(text.to_string())
    }
}

impl From<String> for IncludeItem {
    fn from(text: String) -> Self {
        IncludeItem::Source(text)
    }
}

impl From<PathBuf> for IncludeItem {
    fn from(path: PathBuf) -> Self {
        IncludeItem::Path(path)
    }
}

impl From<&Path> for IncludeItem {
    fn from(path: &Path) -> Self {
        IncludeItem::Path(path.to_path_buf())
    }
}

/// Only JSON strings are include items; any other shape is rejected
/// with [`StyleError::UnsupportedIncludeType`].
impl TryFrom<Value> for IncludeItem {
    type Error = StyleError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(text) => Ok(IncludeItem::Source(text)),
            other => Err(StyleError::unsupported(json_type_name(&other))),
        }
    }
}

/// Type name of a JSON value, distinguishing integers from floats.
pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_i64() || n.is_u64() => "integer",
        Value::Number(_) => "float",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Resolve every item in order, each followed by a newline.
pub fn resolve_includes(
    fs: &dyn SourceFs,
    items: impl IntoIterator<Item = IncludeItem>,
) -> StyleResult<String> {
    let mut combined = String::new();
    for item in items {
        combined.push_str(&item.resolve(fs)?);
        combined.push('\n');
    }
    Ok(combined)
}
