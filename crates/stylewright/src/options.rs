//! Options for compiling a built document.
//!
//! Copyright (c) 2025 Posit, PBC
//!
//! Options can be assembled in code or read from host configuration:
//!
//! ```json
//! {
//!   "include": ["theme/_variables.scss", "$gutter: 8px;"],
//!   "compress": true,
//!   "load_paths": ["theme"]
//! }
//! ```
//!
//! `include` may also be a single string. Every key is optional.

use std::path::PathBuf;

use serde::Deserialize;
use serde_json::Value;
use stylewright_runtime::StyleMode;

use crate::error::{StyleError, StyleResult};
use crate::include::IncludeItem;

/// How to compile a document.
#[derive(Debug, Default)]
pub struct CompileOptions {
    /// Sources placed ahead of the document, in order.
    pub include: Vec<IncludeItem>,

    /// Produce compressed output instead of expanded.
    pub compress: bool,

    /// Directories searched for `@import`/`@use` by the default engine.
    pub load_paths: Vec<PathBuf>,
}

/// Configuration shape accepted by [`CompileOptions::from_json`].
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawCompileOptions {
    include: Option<Value>,
    compress: bool,
    load_paths: Vec<PathBuf>,
}

impl CompileOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one include item.
    pub fn include(mut self, item: impl Into<IncludeItem>) -> Self {
        self.include.push(item.into());
        self
    }

    /// Append several include items.
    pub fn includes<I>(mut self, items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<IncludeItem>,
    {
        self.include.extend(items.into_iter().map(Into::into));
        self
    }

    pub fn compress(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }

    pub fn load_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.load_paths.push(path.into());
        self
    }

    /// Style mode derived from the compression flag.
    pub fn style_mode(&self) -> StyleMode {
        StyleMode::from_compress(self.compress)
    }

    /// Read options from a JSON value.
    ///
    /// # Errors
    ///
    /// - `InvalidOptions` if the value is not an object of known keys
    /// - `UnsupportedIncludeType` if an include entry is not a string
    pub fn from_json(value: Value) -> StyleResult<Self> {
        let raw: RawCompileOptions =
            serde_json::from_value(value).map_err(|e| StyleError::InvalidOptions {
                message: e.to_string(),
            })?;

        let include = match raw.include {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(items)) => items,
            Some(single) => vec![single],
        }
        .into_iter()
        .map(IncludeItem::try_from)
        .collect::<StyleResult<Vec<_>>>()?;

        Ok(Self {
            include,
            compress: raw.compress,
            load_paths: raw.load_paths,
        })
    }

    /// Read options from JSON text.
    pub fn from_json_str(text: &str) -> StyleResult<Self> {
        let value: Value = serde_json::from_str(text).map_err(|e| StyleError::InvalidOptions {
            message: e.to_string(),
        })?;
        Self::from_json(value)
    }
}
