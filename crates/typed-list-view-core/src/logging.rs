//! Logging facilities for typed-list-view.
//!
//! typed-list-view uses the `tracing` crate for instrumentation. Nothing is
//! printed unless the host application installs a subscriber:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("typed_list_view=trace")
//!     .init();
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "typed_list_view_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "typed_list_view_core::signal";
    /// List adapter target (mutations and widget notifications).
    pub const ADAPTER: &str = "typed_list_view::adapter";
}
