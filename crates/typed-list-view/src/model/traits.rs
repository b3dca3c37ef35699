//! Core traits for binding collections to list widgets.

use typed_list_view_core::Signal;

use super::change::Change;
use super::position::Position;
use crate::error::Result;

/// The pull side of the widget contract.
///
/// A list widget calls these during its own layout and render passes to
/// learn how many rows exist and to obtain a configured cell per row.
pub trait ListDataSource {
    /// The cell type handed back to the widget.
    type Cell;

    /// Returns the number of sections.
    fn section_count(&self) -> usize;

    /// Returns the number of rows in `section`.
    fn row_count(&self, section: usize) -> usize;

    /// Returns a cell configured for the item at `position`.
    fn cell_for(&self, position: Position) -> Result<Self::Cell>;

    /// Returns `true` if no section holds any row.
    fn is_empty(&self) -> bool {
        (0..self.section_count()).all(|section| self.row_count(section) == 0)
    }
}

/// Signals emitted by list adapters.
///
/// `changed` fires after the attached widget (if any) has been told about a
/// change, carrying the same change record. It fires whether or not a widget
/// is attached.
#[derive(Debug, Default)]
pub struct AdapterSignals {
    /// Emitted after every mutation that changed rows.
    pub changed: Signal<Change>,
}

impl AdapterSignals {
    /// Creates a new set of adapter signals.
    pub fn new() -> Self {
        Self::default()
    }
}
