//! Canonical script rendering.
//!
//! `Display` output compiles back into an equal selector.

use std::fmt;

use super::types::{AnyElement, Content, Element, Name, Selector};

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_selected {
            f.write_str("+ ")?;
        }
        for inside in &self.inside_names {
            write!(f, "@{inside} ")?;
        }
        write!(f, ".{}", self.name)
    }
}

/// Writes a suffix path. Builders reject selected suffixes, so there is no `+` to write.
struct SuffixPath<'a>(&'a Name);

impl fmt::Display for SuffixPath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for inside in self.0.inside_names() {
            write!(f, "@{inside} ")?;
        }
        write!(f, ".{}", self.0.name())
    }
}

impl fmt::Display for AnyElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(prefix) = self.content.prefix() {
            write!(f, "{prefix} ")?;
        }
        f.write_str(if self.is_selected { "+*" } else { "*" })?;
        if let Some(suffix) = self.content.suffix() {
            write!(f, " {}", SuffixPath(suffix))?;
        }
        Ok(())
    }
}

impl fmt::Display for Content {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Content::Open => f.write_str("open"),
            Content::Prefix(prefix) => write!(f, "prefix({prefix})"),
            Content::Suffix(suffix) => write!(f, "suffix({})", SuffixPath(suffix)),
            Content::Both { prefix, suffix } => {
                write!(f, "prefix({prefix}) suffix({})", SuffixPath(suffix))
            }
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Name(name) => fmt::Display::fmt(name, f),
            Element::Any(any) => fmt::Display::fmt(any, f),
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.element(), f)
    }
}
