//! Model layer: typed collections bound to list widgets.
//!
//! # Core Types
//!
//! - `Position`: a (section, row) pair addressing one row
//! - `Change`: a row insert/update/delete (or full reload) with its animation
//! - `AnimationPolicy`: which `RowAnimation` each kind of change uses
//! - `ConfigurableCell`: a cell that displays one item type
//! - `ListWidget`: the push side of the widget contract
//! - `ListDataSource`: the pull side of the widget contract
//! - `TypedListAdapter`: owns the items and keeps a widget in sync
//!
//! # Architecture Overview
//!
//! ```text
//! ┌──────────────────┐  insert/delete/reload rows  ┌────────────┐
//! │ TypedListAdapter │ ──────────────────────────> │ ListWidget │
//! │    (Vec<T>)      │ <────────────────────────── │            │
//! └──────────────────┘   row_count / cell_for      └────────────┘
//!          │
//!          └──> AdapterSignals::changed (other observers)
//! ```

mod animation;
mod cell;
mod change;
mod list_adapter;
mod position;
mod traits;
mod widget;

pub use animation::{AnimationPolicy, RowAnimation};
pub use cell::ConfigurableCell;
pub use change::{Change, ChangeKind};
pub use list_adapter::TypedListAdapter;
pub use position::{Position, DEFAULT_SECTION};
pub use traits::{AdapterSignals, ListDataSource};
pub use widget::ListWidget;
