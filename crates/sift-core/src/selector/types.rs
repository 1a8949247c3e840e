//! Selector AST node types.

use serde::Serialize;

use super::builder::{AnyElementBuilder, NameBuilder};

/// A terminal named path: `@inside1 @inside2 .name`.
///
/// `inside_names` followed by `name` forms the full path, outer-most ancestor first.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Name {
    pub(super) name: String,
    pub(super) inside_names: Vec<String>,
    pub(super) is_selected: bool,
}

impl Name {
    pub fn builder(name: impl Into<String>) -> NameBuilder {
        NameBuilder::new(name)
    }

    /// The target name (last path segment).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ancestor path segments leading to [`Name::name`], outer-most first.
    pub fn inside_names(&self) -> &[String] {
        &self.inside_names
    }

    pub fn has_inside_names(&self) -> bool {
        !self.inside_names.is_empty()
    }

    pub fn is_selected(&self) -> bool {
        self.is_selected
    }

    /// Full path: inside names followed by the target name.
    pub fn path(&self) -> Vec<&str> {
        self.inside_names
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(self.name.as_str()))
            .collect()
    }
}

/// Anchors of a wildcard.
///
/// An `Open` wildcard matches the token's full remaining text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Content {
    Open,
    Prefix(Name),
    Suffix(Name),
    Both { prefix: Name, suffix: Name },
}

impl Content {
    pub fn prefix(&self) -> Option<&Name> {
        match self {
            Self::Prefix(prefix) | Self::Both { prefix, .. } => Some(prefix),
            Self::Open | Self::Suffix(_) => None,
        }
    }

    pub fn suffix(&self) -> Option<&Name> {
        match self {
            Self::Suffix(suffix) | Self::Both { suffix, .. } => Some(suffix),
            Self::Open | Self::Prefix(_) => None,
        }
    }

    pub fn has_prefix(&self) -> bool {
        self.prefix().is_some()
    }

    pub fn has_suffix(&self) -> bool {
        self.suffix().is_some()
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open)
    }
}

/// A wildcard (`*`) with optional prefix/suffix anchors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct AnyElement {
    pub(super) is_selected: bool,
    pub(super) content: Content,
}

impl AnyElement {
    pub fn builder() -> AnyElementBuilder {
        AnyElementBuilder::new()
    }

    /// True when the wildcard itself was written as `+*`.
    pub fn is_selected(&self) -> bool {
        self.is_selected
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    /// Whether evaluating this wildcard produces output.
    ///
    /// Either the wildcard or its prefix must carry the selection flag:
    /// `+ .a *` and `.a +*` both emit, `.a *` does not. Suffixes are never selected.
    pub fn emits(&self) -> bool {
        self.is_selected || self.content.prefix().is_some_and(Name::is_selected)
    }
}

/// A single occurrence inside a selector.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Element {
    Name(Name),
    Any(AnyElement),
}

/// The compiled query.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Selector {
    element: Element,
}

impl Selector {
    pub fn new(element: Element) -> Self {
        Self { element }
    }

    pub fn element(&self) -> &Element {
        &self.element
    }

    pub fn is_name(&self) -> bool {
        matches!(self.element, Element::Name(_))
    }

    pub fn is_any(&self) -> bool {
        matches!(self.element, Element::Any(_))
    }

    pub fn name(&self) -> Option<&Name> {
        match &self.element {
            Element::Name(name) => Some(name),
            Element::Any(_) => None,
        }
    }

    pub fn any(&self) -> Option<&AnyElement> {
        match &self.element {
            Element::Any(any) => Some(any),
            Element::Name(_) => None,
        }
    }
}

impl From<Name> for Selector {
    fn from(name: Name) -> Self {
        Self::new(Element::Name(name))
    }
}

impl From<AnyElement> for Selector {
    fn from(any: AnyElement) -> Self {
        Self::new(Element::Any(any))
    }
}
