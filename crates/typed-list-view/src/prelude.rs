//! Prelude module for typed-list-view.
//!
//! ```ignore
//! use typed_list_view::prelude::*;
//! ```

pub use crate::error::{AdapterError, Result};
pub use crate::model::{
    AdapterSignals, AnimationPolicy, Change, ChangeKind, ConfigurableCell, ListDataSource,
    ListWidget, Position, RowAnimation, TypedListAdapter,
};
pub use crate::signal::{ConnectionId, Signal};
