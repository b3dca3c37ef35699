//! typed-list-view - bind a typed, ordered collection to a list widget.
//!
//! A [`TypedListAdapter`](model::TypedListAdapter) owns a `Vec<T>` and keeps
//! a [`ListWidget`](model::ListWidget) in sync with it, turning every
//! mutation into the smallest row update (insert, delete, reload) plus an
//! animation hint.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use typed_list_view::prelude::*;
//!
//! #[derive(Default)]
//! struct NumberCell(String);
//!
//! impl ConfigurableCell for NumberCell {
//!     type Item = i32;
//!
//!     fn configure(&mut self, item: &i32) {
//!         self.0 = format!("Cell number: {item}");
//!     }
//! }
//!
//! struct NullWidget;
//!
//! impl ListWidget for NullWidget {
//!     fn insert_rows(&self, _: &[Position], _: RowAnimation) {}
//!     fn delete_rows(&self, _: &[Position], _: RowAnimation) {}
//!     fn reload_rows(&self, _: &[Position], _: RowAnimation) {}
//!     fn reload_data(&self) {}
//! }
//!
//! let widget = Arc::new(NullWidget);
//! let adapter = TypedListAdapter::<i32, NumberCell>::with_widget((0..=100).collect(), &widget);
//!
//! adapter.append(101);
//! assert_eq!(adapter.row_count(0), 102);
//! ```

pub use typed_list_view_core::*;

pub mod error;
pub mod model;
pub mod prelude;

pub use error::{AdapterError, Result};
