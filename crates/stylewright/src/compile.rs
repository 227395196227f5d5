//! Compilation of a built document into CSS.
//!
//! Copyright (c) 2025 Posit, PBC
//!
//! The compilation flow is:
//! 1. Resolve include items to text, in order, each followed by a newline
//! 2. Place the combined includes ahead of the document
//! 3. Hand the result to a `StyleEngine` in the mode chosen by `compress`
//!
//! Engine errors are returned as `StyleError::Compilation` without any
//! change to their message.

use stylewright_runtime::{GrassEngine, NativeFs, SourceFs, StyleEngine};

use crate::error::{StyleError, StyleResult};
use crate::include::resolve_includes;
use crate::options::CompileOptions;

/// Compile `document` with the given engine and filesystem.
///
/// `options.load_paths` is not consulted here; the engine carries its own.
///
/// # Errors
///
/// - `Io` if an include item cannot be read
/// - `Compilation` if the engine rejects the combined text
pub fn compile_document(
    engine: &dyn StyleEngine,
    fs: &dyn SourceFs,
    document: &str,
    options: CompileOptions,
) -> StyleResult<String> {
    let mode = options.style_mode();
    let include_count = options.include.len();

    let mut combined = resolve_includes(fs, options.include)?;
    combined.push_str(document);

    tracing::debug!(
        includes = include_count,
        style = %mode,
        bytes = combined.len(),
        "Compiling SCSS"
    );

    engine
        .compile(&combined, mode)
        .map_err(StyleError::Compilation)
}

/// Compile `document` with grass, reading includes and imports from disk.
pub fn compile_scss(document: &str, options: CompileOptions) -> StyleResult<String> {
    let engine = GrassEngine::new().load_paths(options.load_paths.iter().cloned());
    compile_document(&engine, &NativeFs, document, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::io::Cursor;
    use stylewright_runtime::{MemoryFs, RuntimeError, RuntimeResult, StyleMode};

    /// Engine that records what it was asked to compile.
    #[derive(Default)]
    struct RecordingEngine {
        calls: RefCell<Vec<(String, StyleMode)>>,
        fail: bool,
    }

    impl StyleEngine for RecordingEngine {
        fn compile(&self, source: &str, mode: StyleMode) -> RuntimeResult<String> {
            self.calls.borrow_mut().push((source.to_string(), mode));
            if self.fail {
                Err(RuntimeError::Compilation("boom".to_string()))
            } else {
                Ok(format!("compiled:{source}"))
            }
        }
    }

    #[test]
    fn test_includes_precede_document() {
        let engine = RecordingEngine::default();
        let fs = MemoryFs::new().with_file("/vars.scss", "$b: 2;");
        let options = CompileOptions::new()
            .include("$a: 1;")
            .include("/vars.scss")
            .include(crate::IncludeItem::reader(Cursor::new("$c: 3;")));

        let css = compile_document(&engine, &fs, ".x { y: z; }\n", options).unwrap();

        assert_eq!(css, "compiled:$a: 1;\n$b: 2;\n$c: 3;\n.x { y: z; }\n");
        assert_eq!(engine.calls.borrow()[0].1, StyleMode::Expanded);
    }

    #[test]
    fn test_compress_selects_mode() {
        let engine = RecordingEngine::default();
        let fs = MemoryFs::new();

        compile_document(&engine, &fs, "", CompileOptions::new().compress(true)).unwrap();
        compile_document(&engine, &fs, "", CompileOptions::new()).unwrap();

        let calls = engine.calls.borrow();
        assert_eq!(calls[0].1, StyleMode::Compressed);
        assert_eq!(calls[1].1, StyleMode::Expanded);
    }

    #[test]
    fn test_engine_error_passes_through() {
        let engine = RecordingEngine {
            fail: true,
            ..Default::default()
        };
        let err = compile_document(&engine, &MemoryFs::new(), "x", CompileOptions::new())
            .unwrap_err();

        assert_eq!(err.to_string(), "SASS compilation error: boom");
        assert!(matches!(
            err,
            StyleError::Compilation(RuntimeError::Compilation(ref m)) if m == "boom"
        ));
    }

    #[test]
    fn test_include_failure_skips_engine() {
        let engine = RecordingEngine::default();
        let options = CompileOptions::new().include(std::path::PathBuf::from("/nope.scss"));

        let err = compile_document(&engine, &MemoryFs::new(), "x", options).unwrap_err();

        assert!(matches!(err, StyleError::Io { .. }));
        assert!(engine.calls.borrow().is_empty());
    }

    #[test]
    fn test_compile_scss_with_grass() {
        let css = compile_scss(".a { b: c; }", CompileOptions::new()).unwrap();
        assert!(css.contains(".a {"));
        assert!(css.contains("b: c;"));
    }
}
