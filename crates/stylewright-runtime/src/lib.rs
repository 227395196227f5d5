/*
 * stylewright-runtime
 * Copyright (c) 2025 Posit, PBC
 *
 * Runtime abstraction layer for stylewright.
 *
 * This crate provides the collaborators the document builder talks to
 * without knowing their concrete form:
 *
 * - SourceFs: synchronous read access to include sources (NativeFs, MemoryFs)
 * - StyleEngine: compilation of stylesheet text into CSS (GrassEngine)
 */

mod memory;
mod native;
pub mod sass_native;
mod traits;

// Re-export core types (API surface)
pub use traits::{RuntimeError, RuntimeResult, SourceFs, StyleEngine, StyleMode};

// Re-export implementations
pub use memory::MemoryFs;
pub use native::NativeFs;
pub use sass_native::{GrassEngine, RuntimeFs};
