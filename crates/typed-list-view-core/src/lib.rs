//! Core systems for typed-list-view.
//!
//! - **Signal/Slot System**: type-safe change notification ([`Signal`])
//! - **Logging**: `tracing` targets shared by the workspace ([`logging::targets`])
//!
//! # Signal/Slot Example
//!
//! ```
//! use typed_list_view_core::Signal;
//!
//! let value_changed = Signal::<i32>::new();
//!
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! value_changed.emit(42);
//! value_changed.disconnect(conn_id);
//! ```

pub mod logging;
pub mod signal;

pub use signal::{ConnectionId, Signal};
