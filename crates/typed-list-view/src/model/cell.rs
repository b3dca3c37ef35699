//! Renderable cells.
//!
//! A cell is the widget-side object that displays one row. The adapter never
//! draws anything; it asks the widget for a reusable cell, hands it the item
//! for that row through [`ConfigurableCell::configure`], and returns it.
//!
//! # Usage
//!
//! ```
//! use typed_list_view::model::ConfigurableCell;
//!
//! #[derive(Default)]
//! struct NumberCell {
//!     text: String,
//! }
//!
//! impl ConfigurableCell for NumberCell {
//!     type Item = i32;
//!
//!     fn configure(&mut self, item: &i32) {
//!         self.text = format!("Cell number: {item}");
//!     }
//! }
//!
//! let mut cell = NumberCell::default();
//! cell.configure(&7);
//! assert_eq!(cell.text, "Cell number: 7");
//! ```

use std::any::Any;

/// A cell that can display one item of type [`Item`](Self::Item).
///
/// Cells must be `Default` so the adapter can build a fresh one when the
/// widget's reuse pool has nothing to offer.
pub trait ConfigurableCell: Default + Send + 'static {
    /// The item type this cell displays.
    type Item: 'static;

    /// The key under which the widget pools cells of this type.
    ///
    /// Defaults to the cell's type name, which is unique per cell type.
    fn reuse_identifier() -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Prepares the cell to display `item`.
    ///
    /// Cells are reused, so this must overwrite everything a previous item
    /// may have set.
    fn configure(&mut self, item: &Self::Item);
}

/// Resolves a stored item to the item type a cell expects.
///
/// Items stored directly as `I` resolve immediately. Items stored as
/// `Box<dyn Any + Send + Sync>` (for lists mixing item types) resolve when the
/// boxed value is an `I`. Anything else yields `None`.
pub(crate) fn resolve_item<T: 'static, I: 'static>(item: &T) -> Option<&I> {
    let any: &dyn Any = item;
    if let Some(item) = any.downcast_ref::<I>() {
        return Some(item);
    }
    any.downcast_ref::<Box<dyn Any + Send + Sync>>()
        .and_then(|boxed| boxed.as_ref().downcast_ref::<I>())
}
