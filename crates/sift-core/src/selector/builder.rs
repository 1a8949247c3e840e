//! Builders for selector AST nodes.
//!
//! Builders accumulate parts and validate them in `build()`. A built node is never
//! mutated afterwards.

use crate::utils::is_identifier;

use super::types::{AnyElement, Content, Name};

/// Errors raised when a builder is asked to produce an invalid node.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    #[error("a name is mandatory in order to build a Name")]
    EmptyName,

    #[error("`{0}` is not a valid identifier")]
    InvalidIdentifier(String),

    #[error("the wildcard already has a prefix")]
    DuplicatePrefix,

    #[error("the wildcard already has a suffix")]
    DuplicateSuffix,

    #[error("a wildcard suffix cannot be selected")]
    SelectedSuffix,
}

#[derive(Debug, Clone)]
pub struct NameBuilder {
    name: String,
    inside_names: Vec<String>,
    is_selected: bool,
}

impl NameBuilder {
    pub(super) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            inside_names: Vec::new(),
            is_selected: false,
        }
    }

    /// Append an ancestor path segment. Segments are kept in call order.
    pub fn inside(mut self, name: impl Into<String>) -> Self {
        self.inside_names.push(name.into());
        self
    }

    pub fn inside_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inside_names.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn selected(mut self) -> Self {
        self.is_selected = true;
        self
    }

    pub fn is_selected(mut self, is_selected: bool) -> Self {
        self.is_selected = is_selected;
        self
    }

    pub fn build(self) -> Result<Name, BuildError> {
        if self.name.is_empty() {
            return Err(BuildError::EmptyName);
        }

        if let Some(bad) = std::iter::once(&self.name)
            .chain(&self.inside_names)
            .find(|s| !is_identifier(s))
        {
            return Err(BuildError::InvalidIdentifier(bad.clone()));
        }

        Ok(Name {
            name: self.name,
            inside_names: self.inside_names,
            is_selected: self.is_selected,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct AnyElementBuilder {
    is_selected: bool,
    prefix: Option<Name>,
    suffix: Option<Name>,
    duplicate: Option<BuildError>,
}

impl AnyElementBuilder {
    pub(super) fn new() -> Self {
        Self::default()
    }

    pub fn selected(mut self) -> Self {
        self.is_selected = true;
        self
    }

    pub fn is_selected(mut self, is_selected: bool) -> Self {
        self.is_selected = is_selected;
        self
    }

    pub fn prefix(mut self, prefix: Name) -> Self {
        if self.prefix.replace(prefix).is_some() {
            self.duplicate.get_or_insert(BuildError::DuplicatePrefix);
        }
        self
    }

    pub fn suffix(mut self, suffix: Name) -> Self {
        if self.suffix.replace(suffix).is_some() {
            self.duplicate.get_or_insert(BuildError::DuplicateSuffix);
        }
        self
    }

    pub fn build(self) -> Result<AnyElement, BuildError> {
        if let Some(err) = self.duplicate {
            return Err(err);
        }

        if self.suffix.as_ref().is_some_and(Name::is_selected) {
            return Err(BuildError::SelectedSuffix);
        }

        let content = match (self.prefix, self.suffix) {
            (None, None) => Content::Open,
            (Some(prefix), None) => Content::Prefix(prefix),
            (None, Some(suffix)) => Content::Suffix(suffix),
            (Some(prefix), Some(suffix)) => Content::Both { prefix, suffix },
        };

        Ok(AnyElement {
            is_selected: self.is_selected,
            content,
        })
    }
}
