//! Signal/slot primitive for typed-list-view.
//!
//! A [`Signal<Args>`] holds any number of connected slots (closures). Emitting
//! the signal invokes every slot synchronously on the emitting thread, in
//! connection order.
//!
//! # Example
//!
//! ```
//! use typed_list_view_core::Signal;
//!
//! let rows_changed = Signal::<usize>::new();
//!
//! let conn_id = rows_changed.connect(|count| {
//!     println!("now showing {} rows", count);
//! });
//!
//! rows_changed.emit(3);
//! rows_changed.disconnect(conn_id);
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use slotmap::{new_key_type, SlotMap};

use crate::logging::targets;

new_key_type! {
    /// A unique identifier for a signal-slot connection.
    ///
    /// Returned by [`Signal::connect`] and used with [`Signal::disconnect`].
    /// The ID stays valid until the connection is removed or the signal is
    /// dropped.
    pub struct ConnectionId;
}

type Slot<Args> = Arc<dyn Fn(&Args) + Send + Sync>;

/// A type-safe signal that can have multiple connected slots.
///
/// # Type Parameter
///
/// - `Args`: The argument type passed to connected slots. Use `()` for signals
///   with no arguments, or a tuple for multiple arguments.
///
/// # Re-entrancy
///
/// The connection table is not locked while slots run. A slot may connect,
/// disconnect, or emit on the same signal; such changes take effect from the
/// next emission.
pub struct Signal<Args> {
    connections: Mutex<SlotMap<ConnectionId, Slot<Args>>>,
    blocked: AtomicBool,
}

impl<Args> Default for Signal<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args> std::fmt::Debug for Signal<Args> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signal")
            .field("connections", &self.connection_count())
            .field("blocked", &self.is_blocked())
            .finish()
    }
}

impl<Args> Signal<Args> {
    /// Create a new signal with no connections.
    pub fn new() -> Self {
        Self {
            connections: Mutex::new(SlotMap::with_key()),
            blocked: AtomicBool::new(false),
        }
    }

    /// Connect a slot (closure) to this signal.
    ///
    /// Returns a `ConnectionId` that can be used to disconnect the slot later.
    ///
    /// # Example
    ///
    /// ```
    /// use typed_list_view_core::Signal;
    ///
    /// let signal = Signal::<String>::new();
    /// let id = signal.connect(|s| println!("Got: {}", s));
    /// signal.emit("Hello".to_string());
    /// assert!(signal.disconnect(id));
    /// ```
    pub fn connect<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        self.connections.lock().insert(Arc::new(slot))
    }

    /// Disconnect a specific slot by its connection ID.
    ///
    /// Returns `true` if the connection was found and removed, `false` otherwise.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        self.connections.lock().remove(id).is_some()
    }

    /// Disconnect all slots from this signal.
    pub fn disconnect_all(&self) {
        self.connections.lock().clear();
    }

    /// Get the number of connected slots.
    pub fn connection_count(&self) -> usize {
        self.connections.lock().len()
    }

    /// Block signal emission temporarily.
    ///
    /// While blocked, calls to `emit()` do nothing.
    pub fn set_blocked(&self, blocked: bool) {
        self.blocked.store(blocked, Ordering::SeqCst);
    }

    /// Check if signal emission is currently blocked.
    pub fn is_blocked(&self) -> bool {
        self.blocked.load(Ordering::SeqCst)
    }

    /// Emit the signal, invoking all connected slots with `args`.
    ///
    /// If the signal is blocked, this does nothing.
    #[tracing::instrument(skip_all, target = "typed_list_view_core::signal", level = "trace")]
    pub fn emit(&self, args: Args) {
        if self.is_blocked() {
            tracing::trace!(target: targets::SIGNAL, "signal blocked, skipping emit");
            return;
        }

        let slots: Vec<Slot<Args>> = self.connections.lock().values().cloned().collect();
        tracing::trace!(target: targets::SIGNAL, connection_count = slots.len(), "emitting signal");

        for slot in slots {
            slot(&args);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    fn recorder<Args: Clone + Send + 'static>(
        signal: &Signal<Args>,
    ) -> (ConnectionId, Arc<Mutex<Vec<Args>>>) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let sink = log.clone();
        let id = signal.connect(move |args: &Args| sink.lock().push(args.clone()));
        (id, log)
    }

    #[test]
    fn test_slots_run_in_connection_order() {
        let rows_inserted = Signal::<(usize, usize)>::new();
        let order = Arc::new(Mutex::new(Vec::new()));

        for name in ["view", "selection"] {
            let order = order.clone();
            rows_inserted.connect(move |&(first, last)| {
                order.lock().push(format!("{name}:{first}-{last}"));
            });
        }

        rows_inserted.emit((2, 4));

        assert_eq!(*order.lock(), vec!["view:2-4", "selection:2-4"]);
    }

    #[test]
    fn test_disconnected_slot_misses_later_rows() {
        let row_count = Signal::<usize>::new();
        let (id, seen) = recorder(&row_count);

        row_count.emit(3);
        assert!(row_count.disconnect(id));
        assert!(!row_count.disconnect(id));
        row_count.emit(4);

        assert_eq!(*seen.lock(), vec![3]);
        assert_eq!(row_count.connection_count(), 0);
    }

    #[test]
    fn test_blocking_suppresses_batch_updates() {
        let reloaded = Signal::<Vec<usize>>::new();
        let (_, seen) = recorder(&reloaded);

        reloaded.set_blocked(true);
        for row in 0..3 {
            reloaded.emit(vec![row]);
        }
        reloaded.set_blocked(false);
        reloaded.emit(vec![0, 1, 2]);

        assert!(!reloaded.is_blocked());
        assert_eq!(*seen.lock(), vec![vec![0, 1, 2]]);
    }

    #[test]
    fn test_disconnect_all_drops_every_observer() {
        let changed = Signal::<&'static str>::new();
        let (_, first) = recorder(&changed);
        let (_, second) = recorder(&changed);

        changed.disconnect_all();
        changed.emit("reload");

        assert!(first.lock().is_empty());
        assert!(second.lock().is_empty());
        assert_eq!(changed.connection_count(), 0);
    }

    #[test]
    fn test_slot_can_reenter_signal() {
        let signal = Arc::new(Signal::<usize>::new());
        let hits = Arc::new(AtomicUsize::new(0));

        let weak = Arc::downgrade(&signal);
        let hits_clone = hits.clone();
        signal.connect(move |&depth| {
            hits_clone.fetch_add(1, Ordering::SeqCst);
            if depth == 0 {
                if let Some(signal) = weak.upgrade() {
                    signal.connect(|_| {});
                    signal.emit(1);
                }
            }
        });

        signal.emit(0);

        assert_eq!(hits.load(Ordering::SeqCst), 2);
        assert_eq!(signal.connection_count(), 2);
    }

    #[test]
    fn test_slot_can_disconnect_itself() {
        let signal = Arc::new(Signal::<()>::new());
        let hits = Arc::new(AtomicUsize::new(0));
        let own_id = Arc::new(Mutex::new(None::<ConnectionId>));

        let weak = Arc::downgrade(&signal);
        let hits_clone = hits.clone();
        let id_slot = own_id.clone();
        let id = signal.connect(move |_| {
            hits_clone.fetch_add(1, Ordering::SeqCst);
            if let (Some(signal), Some(id)) = (weak.upgrade(), *id_slot.lock()) {
                signal.disconnect(id);
            }
        });
        *own_id.lock() = Some(id);

        signal.emit(());
        signal.emit(());

        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert_eq!(signal.connection_count(), 0);
    }
}
