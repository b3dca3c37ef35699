//! Row positions within a list widget.
//!
//! A `Position` identifies a row the same way a list widget does: a section
//! and a row inside that section. Adapters in this crate only populate
//! section 0, so most code builds positions with [`Position::row`].

use std::fmt;

/// The only section an adapter populates.
pub const DEFAULT_SECTION: usize = 0;

/// A (section, row) pair addressing one row of a list widget.
///
/// Positions are plain values: they are not tied to a particular adapter and
/// do not track later mutations. A position obtained before an insert or
/// removal may point at a different item afterwards.
///
/// Ordering is by section, then row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Position {
    /// The section within the widget.
    pub section: usize,
    /// The row within the section.
    pub row: usize,
}

impl Position {
    /// Creates a position at `row` within `section`.
    #[inline]
    pub const fn new(section: usize, row: usize) -> Self {
        Self { section, row }
    }

    /// Creates a position at `row` in the default section.
    #[inline]
    pub const fn row(row: usize) -> Self {
        Self::new(DEFAULT_SECTION, row)
    }

    /// Builds the positions `first..first + count` in the default section.
    pub fn rows(first: usize, count: usize) -> Vec<Self> {
        (first..first + count).map(Self::row).collect()
    }

    /// Returns a position in the same section at another row.
    #[inline]
    pub const fn sibling_at_row(&self, row: usize) -> Self {
        Self::new(self.section, row)
    }
}

impl From<usize> for Position {
    fn from(row: usize) -> Self {
        Self::row(row)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}:{}]", self.section, self.row)
    }
}
