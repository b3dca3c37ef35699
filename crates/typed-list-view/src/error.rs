//! Error types for list adapters.

/// Result type alias for adapter operations.
pub type Result<T> = std::result::Result<T, AdapterError>;

/// Errors returned by adapter operations.
///
/// Every failing operation leaves the collection untouched and sends no
/// notification.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AdapterError {
    /// A read, write or removal addressed a row past the end.
    #[error("row {index} is out of bounds for a list of {len} rows")]
    OutOfBounds { index: usize, len: usize },

    /// An insertion addressed a row past the end of the list.
    #[error("cannot insert at row {index} in a list of {len} rows")]
    InsertOutOfBounds { index: usize, len: usize },

    /// `remove_first` or `remove_last` on an empty list.
    #[error("the list is empty")]
    Empty,

    /// A section other than the single supported one was addressed.
    #[error("section {section} does not exist; adapters only populate section 0")]
    InvalidSection { section: usize },

    /// The stored item is not the type the cell displays.
    #[error("cell expects items of type `{expected}` but the row holds `{found}`")]
    ItemTypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
}

impl AdapterError {
    /// Create an out-of-bounds error.
    pub fn out_of_bounds(index: usize, len: usize) -> Self {
        Self::OutOfBounds { index, len }
    }

    /// Create an insertion out-of-bounds error.
    pub fn insert_out_of_bounds(index: usize, len: usize) -> Self {
        Self::InsertOutOfBounds { index, len }
    }

    /// Create a type-mismatch error for item type `T` and cell item type `I`.
    pub fn item_type_mismatch<T: ?Sized, I: ?Sized>() -> Self {
        Self::ItemTypeMismatch {
            expected: std::any::type_name::<I>(),
            found: std::any::type_name::<T>(),
        }
    }
}
