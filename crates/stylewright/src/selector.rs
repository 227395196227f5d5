//! Parent-and-state selectors inside a rule block.
//!
//! Copyright (c) 2025 Posit, PBC

use std::ops::{Deref, DerefMut};

use crate::renderer::{Block, Renderer};
use crate::vocabulary::normalize_name;

/// A view of a [`Renderer`] inside [`Renderer::rule_with`].
///
/// Every pseudo-class call opens a nested `&:<name> { ... }` block on the
/// parent renderer. The context holds no text of its own; it dereferences
/// to the parent, so ordinary declarations can be written through it too.
///
/// ```
/// use stylewright::Renderer;
///
/// let mut renderer = Renderer::default();
/// renderer.rule_with(".link", |link| {
///     link.property("color", "blue");
///     link.hover(|r| {
///         r.property("color", "red");
///     });
/// });
///
/// assert_eq!(
///     renderer.to_sass(),
///     ".link {\n  color: blue;\n  &:hover {\n    color: red;\n  }\n}\n"
/// );
/// ```
#[derive(Debug)]
pub struct SelectorContext<'r, 'a> {
    renderer: &'r mut Renderer<'a>,
}

impl<'r, 'a> SelectorContext<'r, 'a> {
    pub(crate) fn new(renderer: &'r mut Renderer<'a>) -> Self {
        Self { renderer }
    }

    /// Open `&:<name> { ... }`, with `name` used as given.
    pub fn pseudo(&mut self, name: &str, body: impl FnOnce(&mut Renderer<'a>)) -> &mut Self {
        self.renderer.rule(format!("&:{name}"), body);
        self
    }

    /// Open `&:<name> { ... }` for any call name (`_` becomes `-`, so
    /// `first_child` opens `&:first-child`). A missing body opens an empty
    /// block.
    pub fn invoke(&mut self, name: &str, body: Option<Block<'a>>) -> &mut Self {
        self.pseudo(&normalize_name(name), |r| {
            if let Some(body) = body {
                body(r)
            }
        })
    }

    pub fn hover(&mut self, body: impl FnOnce(&mut Renderer<'a>)) -> &mut Self {
        self.pseudo("hover", body)
    }

    pub fn focus(&mut self, body: impl FnOnce(&mut Renderer<'a>)) -> &mut Self {
        self.pseudo("focus", body)
    }

    pub fn active(&mut self, body: impl FnOnce(&mut Renderer<'a>)) -> &mut Self {
        self.pseudo("active", body)
    }

    pub fn visited(&mut self, body: impl FnOnce(&mut Renderer<'a>)) -> &mut Self {
        self.pseudo("visited", body)
    }

    /// The parent renderer.
    pub fn renderer(&mut self) -> &mut Renderer<'a> {
        self.renderer
    }
}

impl<'a> Deref for SelectorContext<'_, 'a> {
    type Target = Renderer<'a>;

    fn deref(&self) -> &Renderer<'a> {
        self.renderer
    }
}

impl<'a> DerefMut for SelectorContext<'_, 'a> {
    fn deref_mut(&mut self) -> &mut Renderer<'a> {
        self.renderer
    }
}
