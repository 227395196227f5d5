//! The fixed vocabulary of recognized property and directive names.
//!
//! Copyright (c) 2025 Posit, PBC
//!
//! Every word is either a plain CSS property (rendered as `name: value;`) or
//! a directive, marked by a leading `@` (rendered as a block opener).
//!
//! Words are looked up by their *call name*: the word with every `-`
//! replaced by `_` and the `@` marker removed, so `background-color` is
//! called as `background_color` and `@font-face` as `font_face`.
//!
//! ```
//! use stylewright::vocabulary::{self, PropertyKind};
//!
//! let prop = vocabulary::lookup("max_width").unwrap();
//! assert_eq!(prop.word, "max-width");
//! assert_eq!(prop.kind, PropertyKind::Declaration);
//!
//! let media = vocabulary::lookup("media").unwrap();
//! assert_eq!(media.word, "@media");
//! assert_eq!(media.kind, PropertyKind::Directive);
//! ```

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Marker that introduces a directive word.
pub const DIRECTIVE_MARKER: char = '@';

/// Word list the global vocabulary is built from, in declaration order.
///
/// Call names must stay unique, so a CSS property whose call name would
/// collide with a directive (`page`, `container`) is left out. The
/// dynamic path opens the directive for such a name; `Renderer::property`
/// still writes it as a declaration.
static WORDS: &[&str] = &[
    // Box model
    "width",
    "height",
    "min-width",
    "min-height",
    "max-width",
    "max-height",
    "margin",
    "margin-top",
    "margin-right",
    "margin-bottom",
    "margin-left",
    "padding",
    "padding-top",
    "padding-right",
    "padding-bottom",
    "padding-left",
    "box-sizing",
    "box-shadow",
    "aspect-ratio",
    "overflow",
    "overflow-x",
    "overflow-y",
    // Borders
    "border",
    "border-top",
    "border-right",
    "border-bottom",
    "border-left",
    "border-width",
    "border-style",
    "border-color",
    "border-radius",
    "border-collapse",
    "border-spacing",
    "outline",
    "outline-offset",
    // Layout
    "display",
    "position",
    "top",
    "right",
    "bottom",
    "left",
    "inset",
    "float",
    "clear",
    "z-index",
    "visibility",
    "vertical-align",
    // Flexbox
    "flex",
    "flex-direction",
    "flex-wrap",
    "flex-flow",
    "flex-grow",
    "flex-shrink",
    "flex-basis",
    "justify-content",
    "justify-items",
    "justify-self",
    "align-items",
    "align-content",
    "align-self",
    "order",
    "gap",
    "row-gap",
    "column-gap",
    // Grid
    "grid",
    "grid-area",
    "grid-template",
    "grid-template-columns",
    "grid-template-rows",
    "grid-template-areas",
    "grid-auto-flow",
    "grid-auto-columns",
    "grid-auto-rows",
    "grid-column",
    "grid-row",
    "place-items",
    "place-content",
    // Typography
    "color",
    "font",
    "font-family",
    "font-size",
    "font-weight",
    "font-style",
    "font-variant",
    "line-height",
    "letter-spacing",
    "word-spacing",
    "text-align",
    "text-decoration",
    "text-transform",
    "text-indent",
    "text-overflow",
    "text-shadow",
    "white-space",
    "word-break",
    "overflow-wrap",
    "list-style",
    "list-style-type",
    "quotes",
    "content",
    // Backgrounds
    "background",
    "background-color",
    "background-image",
    "background-position",
    "background-size",
    "background-repeat",
    "background-attachment",
    "background-clip",
    "opacity",
    "filter",
    "backdrop-filter",
    "mix-blend-mode",
    // Transforms and motion
    "transform",
    "transform-origin",
    "transition",
    "transition-property",
    "transition-duration",
    "transition-timing-function",
    "transition-delay",
    "animation",
    "animation-name",
    "animation-duration",
    "animation-timing-function",
    "animation-delay",
    "animation-iteration-count",
    "animation-direction",
    "animation-fill-mode",
    "will-change",
    // Interaction
    "cursor",
    "pointer-events",
    "user-select",
    "resize",
    "scroll-behavior",
    "object-fit",
    "object-position",
    "table-layout",
    "caption-side",
    "empty-cells",
    "src",
    "unicode-range",
    // Directives
    "@media",
    "@keyframes",
    "@font-face",
    "@supports",
    "@page",
    "@layer",
    "@container",
    "@document",
    "@at-root",
    "@mixin",
    "@function",
    "@if",
    "@else",
    "@for",
    "@each",
    "@while",
    "@import",
    "@use",
    "@forward",
    "@include",
    "@extend",
    "@return",
];

static VOCABULARY: Lazy<Vocabulary> = Lazy::new(|| Vocabulary::from_words(WORDS));

/// How a vocabulary word renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyKind {
    /// `name: value;`
    Declaration,
    /// `@name args { ... }`
    Directive,
}

/// One vocabulary entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Property {
    /// The word as it is written in the stylesheet (`max-width`, `@media`).
    pub word: &'static str,
    pub kind: PropertyKind,
}

impl Property {
    fn new(word: &'static str) -> Self {
        let kind = if is_directive(word) {
            PropertyKind::Directive
        } else {
            PropertyKind::Declaration
        };
        Self { word, kind }
    }

    /// The name this entry is called by.
    pub fn call_name(&self) -> String {
        call_name(self.word)
    }

    pub fn is_directive(&self) -> bool {
        self.kind == PropertyKind::Directive
    }
}

/// An ordered, immutable lookup table of vocabulary words.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    entries: Vec<Property>,
    /// Call name -> index into `entries`
    index: HashMap<String, usize>,
}

impl Vocabulary {
    /// The process-wide vocabulary, built on first use.
    pub fn global() -> &'static Vocabulary {
        &VOCABULARY
    }

    /// Build a vocabulary from a word list.
    ///
    /// When two words share a call name, the first one wins.
    pub fn from_words(words: &[&'static str]) -> Self {
        let mut entries = Vec::with_capacity(words.len());
        let mut index = HashMap::with_capacity(words.len());
        for &word in words {
            let property = Property::new(word);
            index.entry(property.call_name()).or_insert_with(|| {
                entries.push(property);
                entries.len() - 1
            });
        }
        Self { entries, index }
    }

    /// Find the entry for a call name.
    pub fn lookup(&self, call_name: &str) -> Option<Property> {
        self.index.get(call_name).map(|&i| self.entries[i])
    }

    pub fn contains(&self, call_name: &str) -> bool {
        self.index.contains_key(call_name)
    }

    /// Entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Property> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Look up a call name in the global vocabulary.
pub fn lookup(call_name: &str) -> Option<Property> {
    Vocabulary::global().lookup(call_name)
}

/// Whether a word is a directive (starts with the `@` marker).
pub fn is_directive(word: &str) -> bool {
    word.starts_with(DIRECTIVE_MARKER)
}

/// The call name of a vocabulary word: `-` becomes `_`, `@` is dropped.
pub fn call_name(word: &str) -> String {
    word.chars()
        .filter(|&c| c != DIRECTIVE_MARKER)
        .map(|c| if c == '-' { '_' } else { c })
        .collect()
}

/// The property name for a call name outside the vocabulary: every `_`
/// becomes `-`.
pub fn normalize_name(call_name: &str) -> String {
    call_name.replace('_', "-")
}
