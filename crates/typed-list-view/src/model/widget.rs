//! The list widget contract.
//!
//! [`ListWidget`] is what a toolkit binding implements so an adapter can push
//! row updates to it. The adapter holds the widget through a weak handle and
//! never keeps it alive.

use std::any::Any;
use std::sync::{Arc, Weak};

use parking_lot::RwLock;

use super::animation::RowAnimation;
use super::position::Position;

/// A scrollable list widget that renders rows supplied by a data source.
///
/// Row positions passed to [`insert_rows`](Self::insert_rows) refer to the
/// collection after the insert; positions passed to
/// [`delete_rows`](Self::delete_rows) refer to the collection before the
/// delete. The adapter releases all of its internal locks before calling
/// these methods, so implementations may query the data source from inside
/// them.
pub trait ListWidget: Send + Sync {
    /// Inserts rows at `positions`.
    fn insert_rows(&self, positions: &[Position], animation: RowAnimation);

    /// Deletes the rows at `positions`.
    fn delete_rows(&self, positions: &[Position], animation: RowAnimation);

    /// Redraws the rows at `positions` in place.
    fn reload_rows(&self, positions: &[Position], animation: RowAnimation);

    /// Discards every row and queries the data source again.
    fn reload_data(&self);

    /// Registers a cell type's reuse identifier with the widget's reuse pool.
    ///
    /// The default does nothing.
    fn register_cell(&self, _identifier: &'static str) {}

    /// Takes a reusable cell for `identifier` out of the reuse pool.
    ///
    /// Returns `None` when the pool is empty; the adapter then builds a
    /// fresh cell. The default never pools anything.
    fn dequeue_reusable_cell(
        &self,
        _identifier: &str,
        _position: Position,
    ) -> Option<Box<dyn Any + Send>> {
        None
    }
}

/// A non-owning, swappable reference to a [`ListWidget`].
#[derive(Default)]
pub(crate) struct WidgetHandle {
    inner: RwLock<Option<Weak<dyn ListWidget>>>,
}

impl WidgetHandle {
    /// Points the handle at `widget` without taking ownership.
    pub(crate) fn attach<W: ListWidget + 'static>(&self, widget: &Arc<W>) {
        let weak: Weak<W> = Arc::downgrade(widget);
        *self.inner.write() = Some(weak);
    }

    /// Clears the handle. Returns `true` if a widget was set.
    pub(crate) fn detach(&self) -> bool {
        self.inner.write().take().is_some()
    }

    /// Returns the widget if one is attached and still alive.
    pub(crate) fn upgrade(&self) -> Option<Arc<dyn ListWidget>> {
        self.inner.read().as_ref().and_then(Weak::upgrade)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct CountingWidget {
        reloads: AtomicUsize,
    }

    impl ListWidget for CountingWidget {
        fn insert_rows(&self, _positions: &[Position], _animation: RowAnimation) {}
        fn delete_rows(&self, _positions: &[Position], _animation: RowAnimation) {}
        fn reload_rows(&self, _positions: &[Position], _animation: RowAnimation) {}

        fn reload_data(&self) {
            self.reloads.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_handle_does_not_own_widget() {
        let handle = WidgetHandle::default();
        assert!(handle.upgrade().is_none());

        let widget = Arc::new(CountingWidget::default());
        handle.attach(&widget);
        assert_eq!(Arc::strong_count(&widget), 1);

        if let Some(w) = handle.upgrade() {
            w.reload_data();
        }
        assert_eq!(widget.reloads.load(Ordering::SeqCst), 1);

        drop(widget);
        assert!(handle.upgrade().is_none());
    }

    #[test]
    fn test_detach() {
        let handle = WidgetHandle::default();
        let widget = Arc::new(CountingWidget::default());

        handle.attach(&widget);
        assert!(handle.detach());
        assert!(!handle.detach());
        assert!(handle.upgrade().is_none());
    }

    #[test]
    fn test_default_pool_is_empty() {
        let widget = CountingWidget::default();
        widget.register_cell("row");
        assert!(widget.dequeue_reusable_cell("row", Position::row(0)).is_none());
    }
}
