//! Programmatic SCSS documents.
//!
//! Copyright (c) 2025 Posit, PBC
//!
//! This crate provides:
//! - A document builder (`Renderer`) that turns structured calls into
//!   indented SCSS text
//! - A selector sub-context (`SelectorContext`) for `&:pseudo` blocks
//! - A fixed property vocabulary with a permissive fallback for unknown names
//! - A compilation bridge that merges include sources ahead of the document
//!   and compiles the result to CSS

mod compile;
mod error;
mod include;
mod options;
mod renderer;
mod selector;
pub mod vocabulary;

pub use compile::{compile_document, compile_scss};
pub use error::{StyleError, StyleResult};
pub use include::{IncludeItem, resolve_includes};
pub use options::CompileOptions;
pub use renderer::{Block, INDENT, Renderer, VARIABLE_SIGIL};
pub use selector::SelectorContext;
pub use vocabulary::{Property, PropertyKind, Vocabulary};

// The runtime types callers need to plug in their own engine or filesystem
pub use stylewright_runtime::{
    GrassEngine, MemoryFs, NativeFs, RuntimeError, SourceFs, StyleEngine, StyleMode,
};
