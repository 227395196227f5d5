//! The SCSS document builder.
//!
//! Copyright (c) 2025 Posit, PBC
//!
//! A [`Renderer`] turns a sequence of builder calls into indented SCSS text.
//! Each call appends one or more lines to an internal buffer, prefixed by two
//! spaces per nesting level. Block constructs open a line ending in `{`,
//! run their nested body one level deeper and close with `}`.
//!
//! # Example
//!
//! ```
//! use stylewright::Renderer;
//!
//! let mut renderer = Renderer::new(|r| {
//!     let primary = r.v("primary", "#007bff");
//!     r.rule(".button", |r| {
//!         r.property("background_color", &primary);
//!         r.property("padding", "10px 15px");
//!     });
//! });
//!
//! assert_eq!(
//!     renderer.to_sass(),
//!     "$primary: #007bff;\n.button {\n  background-color: $primary;\n  padding: 10px 15px;\n}\n"
//! );
//! ```
//!
//! # Dispatch
//!
//! [`Renderer::invoke`] goes through two tiers. It first consults the
//! [vocabulary](crate::vocabulary); names outside it fall back to a plain
//! declaration with every `_` replaced by `-`. [`Renderer::property`] always
//! writes a declaration, so `container` and `page` stay properties even
//! though their call names also name directives. Nothing is ever rejected:
//! the builder does not validate SCSS, it only emits what it is told.

use std::collections::HashMap;
use std::fmt::{self, Display};

use stylewright_runtime::{SourceFs, StyleEngine};

use crate::compile::{compile_document, compile_scss};
use crate::error::StyleResult;
use crate::options::CompileOptions;
use crate::selector::SelectorContext;
use crate::vocabulary::{self, DIRECTIVE_MARKER};

/// Prefix written once per nesting level.
pub const INDENT: &str = "  ";

/// Sigil that marks an SCSS variable.
pub const VARIABLE_SIGIL: char = '$';

/// A nested operation sequence for the dynamic [`Renderer::invoke`] path.
pub type Block<'a> = Box<dyn FnOnce(&mut Renderer<'a>) + 'a>;

/// Builds an SCSS document from structured calls.
///
/// A renderer is created with an optional deferred body ([`Renderer::new`]),
/// which runs on the first call to [`Renderer::to_sass`]. Operations may
/// also be issued directly against a renderer before it is finalized.
/// Finalization happens once; later calls return the cached text.
///
/// The lifetime `'a` bounds what the deferred body and dynamic blocks may
/// borrow from the caller.
#[derive(Default)]
pub struct Renderer<'a> {
    output: String,
    indentation: usize,
    variables: HashMap<String, String>,
    input_block: Option<Block<'a>>,
    sass_output: Option<String>,
}

impl fmt::Debug for Renderer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Renderer")
            .field("indentation", &self.indentation)
            .field("variables", &self.variables)
            .field("pending_body", &self.input_block.is_some())
            .field("finalized", &self.sass_output.is_some())
            .finish()
    }
}

impl<'a> Renderer<'a> {
    /// Create a renderer whose body runs when the document is first requested.
    pub fn new(body: impl FnOnce(&mut Renderer<'a>) + 'a) -> Self {
        Self {
            input_block: Some(Box::new(body)),
            ..Self::default()
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // DECLARATIONS
    // ═══════════════════════════════════════════════════════════════════════

    /// Write `name: value;` with `name` taken verbatim.
    pub fn declare(&mut self, name: &str, value: impl Display) -> &mut Self {
        self.write_line(format!("{name}: {value};"))
    }

    /// Write a declaration through the vocabulary.
    ///
    /// Property call names render their word (`max_width` → `max-width`);
    /// any other name, including one the vocabulary knows as a directive,
    /// has every `_` replaced by `-`.
    pub fn property(&mut self, name: &str, value: impl Display) -> &mut Self {
        match vocabulary::lookup(name) {
            Some(property) if !property.is_directive() => self.declare(property.word, value),
            _ => self.declare(&vocabulary::normalize_name(name), value),
        }
    }

    /// Declare `$name: value;` and return the reference token `$name`.
    pub fn v(&mut self, name: impl Display, value: impl Display) -> String {
        let name = name.to_string();
        let token = format!("{VARIABLE_SIGIL}{name}");
        self.variables.insert(name, token.clone());
        self.write_line(format!("{token}: {value};"));
        token
    }

    /// `@include name(args);`, with no parentheses when `args` is empty.
    pub fn include(&mut self, name: &str, args: &[&str]) -> &mut Self {
        self.write_line(format!("@include {name}{};", arg_list(args)))
    }

    /// `@import 'path';`
    pub fn import(&mut self, path: &str) -> &mut Self {
        self.write_line(format!("@import '{path}';"))
    }

    /// `@extend selector;`
    pub fn extend(&mut self, selector: &str) -> &mut Self {
        self.write_line(format!("@extend {selector};"))
    }

    /// `@return value;`
    pub fn return_value(&mut self, value: impl Display) -> &mut Self {
        self.write_line(format!("@return {value};"))
    }

    /// Append `text` verbatim: no indentation, no newline.
    pub fn raw(&mut self, text: &str) -> &mut Self {
        self.output.push_str(text);
        self
    }

    // ═══════════════════════════════════════════════════════════════════════
    // BLOCKS
    // ═══════════════════════════════════════════════════════════════════════

    /// `selector { ... }` with the body written directly into this renderer.
    pub fn rule(
        &mut self,
        selector: impl Display,
        body: impl FnOnce(&mut Renderer<'a>),
    ) -> &mut Self {
        self.open_block(selector, body)
    }

    /// Shorthand for [`Renderer::rule`].
    pub fn s(
        &mut self,
        selector: impl Display,
        body: impl FnOnce(&mut Renderer<'a>),
    ) -> &mut Self {
        self.rule(selector, body)
    }

    /// `selector { ... }` with the body given a [`SelectorContext`] for
    /// writing `&:pseudo` blocks.
    pub fn rule_with(
        &mut self,
        selector: impl Display,
        body: impl FnOnce(&mut SelectorContext<'_, 'a>),
    ) -> &mut Self {
        self.open_block(selector, |r| body(&mut SelectorContext::new(r)))
    }

    /// `@name args { ... }` for any directive.
    ///
    /// A leading `@` on `name` is accepted. With no arguments the header is
    /// `@name {`.
    pub fn directive(
        &mut self,
        name: &str,
        args: &[&str],
        body: impl FnOnce(&mut Renderer<'a>),
    ) -> &mut Self {
        let name = name.trim_start_matches(DIRECTIVE_MARKER);
        let header = if args.is_empty() {
            format!("{DIRECTIVE_MARKER}{name}")
        } else {
            format!("{DIRECTIVE_MARKER}{name} {}", args.join(" "))
        };
        self.open_block(header, body)
    }

    /// `@media query { ... }`
    pub fn media(
        &mut self,
        query: impl Display,
        body: impl FnOnce(&mut Renderer<'a>),
    ) -> &mut Self {
        self.open_block(format!("@media {query}"), body)
    }

    /// `@keyframes name { ... }`
    pub fn keyframes(
        &mut self,
        name: impl Display,
        body: impl FnOnce(&mut Renderer<'a>),
    ) -> &mut Self {
        self.open_block(format!("@keyframes {name}"), body)
    }

    /// `@mixin name(params) { ... }`
    pub fn mixin(
        &mut self,
        name: &str,
        params: &[&str],
        body: impl FnOnce(&mut Renderer<'a>),
    ) -> &mut Self {
        self.open_block(format!("@mixin {name}{}", arg_list(params)), body)
    }

    /// `@function name(params) { ... }`
    pub fn function(
        &mut self,
        name: &str,
        params: &[&str],
        body: impl FnOnce(&mut Renderer<'a>),
    ) -> &mut Self {
        self.open_block(format!("@function {name}{}", arg_list(params)), body)
    }

    /// `@if condition { ... }`
    pub fn if_statement(
        &mut self,
        condition: impl Display,
        body: impl FnOnce(&mut Renderer<'a>),
    ) -> &mut Self {
        self.open_block(format!("@if {condition}"), body)
    }

    /// `@else if condition { ... }`
    pub fn else_if_statement(
        &mut self,
        condition: impl Display,
        body: impl FnOnce(&mut Renderer<'a>),
    ) -> &mut Self {
        self.open_block(format!("@else if {condition}"), body)
    }

    /// `@else { ... }`
    pub fn else_statement(&mut self, body: impl FnOnce(&mut Renderer<'a>)) -> &mut Self {
        self.open_block("@else", body)
    }

    /// `@for $variable from from through to { ... }` (inclusive bounds).
    pub fn for_loop(
        &mut self,
        variable: impl Display,
        from: impl Display,
        to: impl Display,
        body: impl FnOnce(&mut Renderer<'a>),
    ) -> &mut Self {
        self.open_block(
            format!("@for {VARIABLE_SIGIL}{variable} from {from} through {to}"),
            body,
        )
    }

    /// `@each $variable in list { ... }`
    pub fn each_loop(
        &mut self,
        variable: impl Display,
        list: impl Display,
        body: impl FnOnce(&mut Renderer<'a>),
    ) -> &mut Self {
        self.open_block(format!("@each {VARIABLE_SIGIL}{variable} in {list}"), body)
    }

    /// `@while condition { ... }`
    pub fn while_loop(
        &mut self,
        condition: impl Display,
        body: impl FnOnce(&mut Renderer<'a>),
    ) -> &mut Self {
        self.open_block(format!("@while {condition}"), body)
    }

    // ═══════════════════════════════════════════════════════════════════════
    // DYNAMIC DISPATCH
    // ═══════════════════════════════════════════════════════════════════════

    /// Perform the operation named `name`.
    ///
    /// Typed operations are matched first (`s`, `media`, `mixin`, `include`,
    /// `v`, `if_statement`, ...). Otherwise the vocabulary decides: a
    /// directive word opens `@word args { ... }`, a property word writes
    /// `word: args[0];`. Any other name becomes a fallback declaration with
    /// `_` translated to `-`. A missing body opens an empty block.
    ///
    /// A call with the wrong number of arguments still renders, with
    /// missing arguments as empty text and extras dropped, and logs a
    /// warning naming the call.
    pub fn invoke(&mut self, name: &str, args: &[&str], body: Option<Block<'a>>) -> &mut Self {
        if let Some((min, max)) =
            arity(name).filter(|&(min, max)| !(min..=max).contains(&args.len()))
        {
            tracing::warn!(
                call = name,
                expected_min = min,
                expected_max = max,
                got = args.len(),
                "Wrong number of arguments in dynamic call"
            );
        }

        let arg = |i: usize| args.get(i).copied().unwrap_or_default();
        let rest = |i: usize| args.get(i..).unwrap_or_default();
        let body = |r: &mut Renderer<'a>| {
            if let Some(body) = body {
                body(r)
            }
        };

        match name {
            "s" | "rule" => self.rule(arg(0), body),
            "media" => self.media(args.join(" "), body),
            "keyframes" => self.keyframes(arg(0), body),
            "mixin" => self.mixin(arg(0), rest(1), body),
            "function" => self.function(arg(0), rest(1), body),
            "include" => self.include(arg(0), rest(1)),
            "v" => {
                self.v(arg(0), arg(1));
                self
            }
            "import" => self.import(arg(0)),
            "extend" => self.extend(arg(0)),
            "return" | "return_value" => self.return_value(arg(0)),
            "raw" => self.raw(arg(0)),
            "if_statement" => self.if_statement(args.join(" "), body),
            "else_if_statement" => self.else_if_statement(args.join(" "), body),
            "else_statement" => self.else_statement(body),
            "for_loop" => self.for_loop(arg(0), arg(1), arg(2), body),
            "each_loop" => self.each_loop(arg(0), rest(1).join(", "), body),
            "while_loop" => self.while_loop(args.join(" "), body),
            _ => match vocabulary::lookup(name) {
                Some(property) if property.is_directive() => {
                    self.directive(property.word, args, body)
                }
                Some(property) => self.declare(property.word, arg(0)),
                None => self.declare(&vocabulary::normalize_name(name), arg(0)),
            },
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // STATE
    // ═══════════════════════════════════════════════════════════════════════

    /// Variables declared so far, keyed by name, valued by reference token.
    pub fn variables(&self) -> &HashMap<String, String> {
        &self.variables
    }

    /// Reference token of a declared variable.
    pub fn variable(&self, name: &str) -> Option<&str> {
        self.variables.get(name).map(String::as_str)
    }

    /// Current nesting level.
    pub fn depth(&self) -> usize {
        self.indentation
    }

    pub fn is_finalized(&self) -> bool {
        self.sass_output.is_some()
    }

    // ═══════════════════════════════════════════════════════════════════════
    // OUTPUT
    // ═══════════════════════════════════════════════════════════════════════

    /// Run the deferred body (once) and return the finished document.
    ///
    /// The text is cached on first call; calling again neither re-runs the
    /// body nor picks up operations issued in between.
    pub fn to_sass(&mut self) -> &str {
        if let Some(body) = self.input_block.take() {
            body(self);
        }
        let output = &self.output;
        self.sass_output.get_or_insert_with(|| {
            tracing::trace!(bytes = output.len(), "Finalized SCSS document");
            output.clone()
        })
    }

    /// Consume the renderer and return the finished document.
    pub fn into_sass(mut self) -> String {
        self.to_sass();
        self.sass_output.unwrap_or_default()
    }

    /// Finalize and compile with grass on the native filesystem.
    pub fn to_css(&mut self, options: CompileOptions) -> StyleResult<String> {
        compile_scss(self.to_sass(), options)
    }

    /// Finalize and compile with a caller-chosen engine and filesystem.
    pub fn to_css_with(
        &mut self,
        engine: &dyn StyleEngine,
        fs: &dyn SourceFs,
        options: CompileOptions,
    ) -> StyleResult<String> {
        compile_document(engine, fs, self.to_sass(), options)
    }

    fn open_block(
        &mut self,
        header: impl Display,
        body: impl FnOnce(&mut Renderer<'a>),
    ) -> &mut Self {
        self.write_line(format!("{header} {{"));
        self.indent();
        body(self);
        self.dedent();
        self.write_line("}")
    }

    fn write_line(&mut self, line: impl AsRef<str>) -> &mut Self {
        for _ in 0..self.indentation {
            self.output.push_str(INDENT);
        }
        self.output.push_str(line.as_ref());
        self.output.push('\n');
        self
    }

    fn indent(&mut self) {
        self.indentation += 1;
    }

    fn dedent(&mut self) {
        self.indentation = self.indentation.saturating_sub(1);
    }
}

/// Accepted argument counts for a dynamic call, `None` when any count goes.
fn arity(name: &str) -> Option<(usize, usize)> {
    let open = usize::MAX;
    match name {
        "else_statement" => Some((0, 0)),
        "s" | "rule" | "keyframes" | "import" | "extend" | "return" | "return_value" | "raw" => {
            Some((1, 1))
        }
        "media" | "if_statement" | "else_if_statement" | "while_loop" | "mixin" | "function"
        | "include" => Some((1, open)),
        "v" => Some((2, 2)),
        "each_loop" => Some((2, open)),
        "for_loop" => Some((3, 3)),
        _ => match vocabulary::lookup(name) {
            Some(property) if property.is_directive() => None,
            _ => Some((1, 1)),
        },
    }
}

/// `(a, b)` for a non-empty list, nothing otherwise.
fn arg_list(args: &[&str]) -> String {
    if args.is_empty() {
        String::new()
    } else {
        format!("({})", args.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::Cell;
    use std::rc::Rc;
    use std::sync::{Arc, Mutex};

    fn render<'a>(body: impl FnOnce(&mut Renderer<'a>) + 'a) -> String {
        Renderer::new(body).into_sass()
    }

    #[test]
    fn test_declarations_at_top_level() {
        let text = render(|r| {
            r.declare("color", "red");
            r.property("max_width", "10px");
        });
        assert_eq!(text, "color: red;\nmax-width: 10px;\n");
    }

    #[test]
    fn test_fallback_name_translation() {
        let text = render(|r| {
            r.property("webkit_line_clamp", 3);
            r.property("custom_prop_x", "1");
        });
        assert_eq!(text, "webkit-line-clamp: 3;\ncustom-prop-x: 1;\n");
    }

    #[test]
    fn test_declare_keeps_name_verbatim() {
        let text = render(|r| {
            r.declare("--my_var", "1px");
        });
        assert_eq!(text, "--my_var: 1px;\n");
    }

    #[test]
    fn test_empty_blocks_open_and_close() {
        let text = render(|r| {
            r.rule(".a", |_| {});
            r.media("print", |_| {});
            r.else_statement(|_| {});
        });
        assert_eq!(text, ".a {\n}\n@media print {\n}\n@else {\n}\n");
    }

    #[test]
    fn test_nested_indentation() {
        let text = render(|r| {
            r.media("screen", |r| {
                r.rule(".a", |r| {
                    r.rule(".b", |r| {
                        r.declare("top", 0);
                    });
                });
            });
        });
        assert_eq!(
            text,
            "@media screen {\n  .a {\n    .b {\n      top: 0;\n    }\n  }\n}\n"
        );
    }

    #[test]
    fn test_depth_restored_after_blocks() {
        let mut renderer = Renderer::default();
        renderer.rule(".outer", |r| {
            assert_eq!(r.depth(), 1);
            r.for_loop("i", 1, 2, |r| {
                assert_eq!(r.depth(), 2);
            });
            assert_eq!(r.depth(), 1);
        });
        assert_eq!(renderer.depth(), 0);
        renderer.invoke("while_loop", &["$i > 0"], None);
        assert_eq!(renderer.depth(), 0);
    }

    #[test]
    fn test_variable_returns_token() {
        let mut renderer = Renderer::default();
        let token = renderer.v("primary_color", "#007bff");
        renderer.rule(".btn", |r| {
            r.property("color", &token);
        });

        assert_eq!(token, "$primary_color");
        assert_eq!(renderer.variable("primary_color"), Some("$primary_color"));
        assert_eq!(renderer.variables().len(), 1);
        assert_eq!(
            renderer.to_sass(),
            "$primary_color: #007bff;\n.btn {\n  color: $primary_color;\n}\n"
        );
    }

    #[test]
    fn test_include_argument_list() {
        let text = render(|r| {
            r.include("reset", &[]);
            r.include("button", &["#fff", "2px"]);
        });
        assert_eq!(text, "@include reset;\n@include button(#fff, 2px);\n");
    }

    #[test]
    fn test_mixin_and_function_argument_list() {
        let text = render(|r| {
            r.mixin("center", &[], |r| {
                r.property("display", "flex");
            });
            r.function("double", &["$n"], |r| {
                r.return_value("$n * 2");
            });
        });
        assert_eq!(
            text,
            "@mixin center {\n  display: flex;\n}\n@function double($n) {\n  @return $n * 2;\n}\n"
        );
    }

    #[test]
    fn test_import_and_extend() {
        let text = render(|r| {
            r.import("variables");
            r.rule(".btn", |r| {
                r.extend(".base");
            });
        });
        assert_eq!(text, "@import 'variables';\n.btn {\n  @extend .base;\n}\n");
    }

    #[test]
    fn test_loops() {
        let text = render(|r| {
            r.each_loop("c", "red, blue", |_| {});
            r.while_loop("$i > 0", |_| {});
        });
        assert_eq!(text, "@each $c in red, blue {\n}\n@while $i > 0 {\n}\n");
    }

    #[test]
    fn test_else_if() {
        let text = render(|r| {
            r.if_statement("$a", |_| {});
            r.else_if_statement("$b", |_| {});
        });
        assert_eq!(text, "@if $a {\n}\n@else if $b {\n}\n");
    }

    #[test]
    fn test_raw_is_verbatim() {
        let text = render(|r| {
            r.rule(".a", |r| {
                r.raw("x: 1;");
                r.raw("\n");
            });
        });
        assert_eq!(text, ".a {\nx: 1;\n}\n");
    }

    #[test]
    fn test_directive_header() {
        let text = render(|r| {
            r.directive("font-face", &[], |r| {
                r.property("font_family", "Inter");
            });
            r.directive("@supports", &["(display:", "grid)"], |_| {});
        });
        assert_eq!(
            text,
            "@font-face {\n  font-family: Inter;\n}\n@supports (display: grid) {\n}\n"
        );
    }

    #[test]
    fn test_invoke_vocabulary_directive() {
        let mut renderer = Renderer::default();
        renderer.invoke(
            "supports",
            &["(display: grid)"],
            Some(Box::new(|r: &mut Renderer<'_>| {
                r.property("display", "grid");
            })),
        );
        assert_eq!(
            renderer.to_sass(),
            "@supports (display: grid) {\n  display: grid;\n}\n"
        );
    }

    #[test]
    fn test_invoke_typed_operations() {
        let mut renderer = Renderer::default();
        renderer
            .invoke("v", &["gap", "4px"], None)
            .invoke("include", &["shadow"], None)
            .invoke("mixin", &["m", "$a", "$b"], None)
            .invoke("for_loop", &["i", "1", "3"], None)
            .invoke("return", &["1"], None);
        assert_eq!(
            renderer.to_sass(),
            "$gap: 4px;\n@include shadow;\n@mixin m($a, $b) {\n}\n@for $i from 1 through 3 {\n}\n@return 1;\n"
        );
        assert_eq!(renderer.variable("gap"), Some("$gap"));
    }

    #[test]
    fn test_invoke_missing_value() {
        let mut renderer = Renderer::default();
        renderer.invoke("color", &[], None);
        assert_eq!(renderer.to_sass(), "color: ;\n");
    }

    #[test]
    fn test_invoke_else_if_keeps_body() {
        let mut renderer = Renderer::default();
        renderer.invoke("if_statement", &["$a"], None).invoke(
            "else_if_statement",
            &["$b"],
            Some(Box::new(|r: &mut Renderer<'_>| {
                r.declare("color", "red");
            })),
        );
        assert_eq!(
            renderer.to_sass(),
            "@if $a {\n}\n@else if $b {\n  color: red;\n}\n"
        );
    }

    #[test]
    fn test_property_with_directive_call_name_is_declaration() {
        let text = render(|r| {
            r.rule(".a", |r| {
                r.property("container", "sidebar / inline-size");
                r.property("page", "narrow");
                r.property("media", "print");
            });
        });
        assert_eq!(
            text,
            ".a {\n  container: sidebar / inline-size;\n  page: narrow;\n  media: print;\n}\n"
        );
    }

    #[test]
    fn test_invoke_with_directive_call_name_opens_block() {
        let mut renderer = Renderer::default();
        renderer.invoke("container", &["sidebar (min-width: 400px)"], None);
        assert_eq!(renderer.to_sass(), "@container sidebar (min-width: 400px) {\n}\n");
    }

    #[test]
    fn test_arity() {
        assert_eq!(arity("color"), Some((1, 1)));
        assert_eq!(arity("unknown_thing"), Some((1, 1)));
        assert_eq!(arity("v"), Some((2, 2)));
        assert_eq!(arity("for_loop"), Some((3, 3)));
        assert_eq!(arity("else_statement"), Some((0, 0)));
        assert_eq!(arity("include"), Some((1, usize::MAX)));
        assert_eq!(arity("supports"), None);
    }

    #[test]
    fn test_invoke_wrong_arity_warns_and_still_renders() {
        let logs = SharedBuffer::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_writer(move || writer.clone())
            .finish();

        let text = tracing::subscriber::with_default(subscriber, || {
            let mut renderer = Renderer::default();
            renderer
                .invoke("width", &["1px", "2px"], None)
                .invoke("v", &["x"], None)
                .invoke("margin", &["0"], None);
            renderer.into_sass()
        });

        assert_eq!(text, "width: 1px;\n$x: ;\nmargin: 0;\n");
        let logs = logs.contents();
        assert_eq!(logs.matches("Wrong number of arguments").count(), 2);
        assert!(logs.contains("width"));
    }

    #[test]
    fn test_body_borrows_caller_locals() {
        let brand = String::from("#3a7bd5");
        let sizes = vec!["sm", "lg"];
        let mut renderer = Renderer::new(|r| {
            for size in &sizes {
                r.rule(format!(".btn-{size}"), |r| {
                    r.property("color", &brand);
                });
            }
        });

        assert_eq!(
            renderer.to_sass(),
            ".btn-sm {\n  color: #3a7bd5;\n}\n.btn-lg {\n  color: #3a7bd5;\n}\n"
        );
    }

    /// Log sink shared between a test and its subscriber.
    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl SharedBuffer {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl std::io::Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_to_sass_is_memoized() {
        let runs = Rc::new(Cell::new(0));
        let counter = Rc::clone(&runs);
        let mut renderer = Renderer::new(move |r| {
            counter.set(counter.get() + 1);
            r.declare("a", "b");
        });

        assert!(!renderer.is_finalized());
        let first = renderer.to_sass().to_string();
        let second = renderer.to_sass().to_string();

        assert_eq!(first, "a: b;\n");
        assert_eq!(first, second);
        assert_eq!(runs.get(), 1);
        assert!(renderer.is_finalized());
    }

    #[test]
    fn test_operations_after_finalize_do_not_change_output() {
        let mut renderer = Renderer::default();
        renderer.declare("a", "b");
        assert_eq!(renderer.to_sass(), "a: b;\n");
        renderer.declare("c", "d");
        assert_eq!(renderer.to_sass(), "a: b;\n");
    }

    #[test]
    fn test_direct_operations_precede_deferred_body() {
        let mut renderer = Renderer::new(|r| {
            r.declare("body", "1");
        });
        renderer.declare("direct", "0");
        assert_eq!(renderer.to_sass(), "direct: 0;\nbody: 1;\n");
    }

    #[test]
    fn test_debug_output() {
        let renderer = Renderer::new(|_| {});
        let debug_str = format!("{:?}", renderer);
        assert!(debug_str.contains("pending_body: true"));
    }

    #[test]
    fn test_arg_list() {
        assert_eq!(arg_list(&[]), "");
        assert_eq!(arg_list(&["$a"]), "($a)");
        assert_eq!(arg_list(&["$a", "$b"]), "($a, $b)");
    }
}
