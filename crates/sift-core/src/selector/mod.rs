//! Compiled selector AST.
//!
//! Every node is an immutable value object. Names and wildcards are built through
//! [`NameBuilder`] and [`AnyElementBuilder`], which reject invalid combinations, so
//! that a [`Selector`] in hand is always well-formed.
//!
//! ```text
//! Selector ─ Element ┬─ Name { inside_names, name, is_selected }
//!                    └─ AnyElement { is_selected, Content }
//!                                      ├─ Open
//!                                      ├─ Prefix(Name)
//!                                      ├─ Suffix(Name)
//!                                      └─ Both { prefix, suffix }
//! ```

mod builder;
mod display;
mod types;


pub use builder::{AnyElementBuilder, BuildError, NameBuilder};
pub use types::{AnyElement, Content, Element, Name, Selector};
