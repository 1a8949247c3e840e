//! Merge policy of a path resolution result.

/// Outcome of resolving a path on one token.
///
/// `Inline` means the call itself produced locally contiguous data (raw bytes or a
/// full token span) and an ancestor resolver concatenates its entries into the
/// line it is building. `Lines` means the call only forwarded results from deeper
/// lines, each of which the ancestor keeps as an independent output entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Inline(Vec<Vec<u8>>),
    Lines(Vec<Vec<u8>>),
}

impl Resolution {
    pub(super) fn new(is_inline: bool, entries: Vec<Vec<u8>>) -> Self {
        if is_inline {
            Self::Inline(entries)
        } else {
            Self::Lines(entries)
        }
    }

    pub fn is_inline(&self) -> bool {
        matches!(self, Self::Inline(_))
    }

    pub fn entries(&self) -> &[Vec<u8>] {
        match self {
            Self::Inline(entries) | Self::Lines(entries) => entries,
        }
    }

    pub fn into_entries(self) -> Vec<Vec<u8>> {
        match self {
            Self::Inline(entries) | Self::Lines(entries) => entries,
        }
    }
}
