//! Typed list adapter.
//!
//! `TypedListAdapter<T, C>` owns an ordered collection of `T` and keeps a
//! [`ListWidget`] in sync with it. Every mutation updates the collection
//! first and then tells the widget which rows to insert, delete or reload,
//! with the animation the adapter's [`AnimationPolicy`] assigns.

use std::marker::PhantomData;
use std::sync::Arc;

use parking_lot::RwLock;
use typed_list_view_core::logging::targets;

use super::animation::AnimationPolicy;
use super::cell::{resolve_item, ConfigurableCell};
use super::change::{Change, ChangeKind};
use super::position::{Position, DEFAULT_SECTION};
use super::traits::{AdapterSignals, ListDataSource};
use super::widget::{ListWidget, WidgetHandle};
use crate::error::{AdapterError, Result};

/// Binds a list of `T` to a list widget displaying rows with cells of type `C`.
///
/// The widget is held weakly: dropping it elsewhere turns notifications into
/// no-ops, and the adapter stays fully usable.
///
/// All methods take `&self`. The adapter never holds a lock while it calls
/// out to the widget or to signal slots, so the widget may call
/// [`row_count`](ListDataSource::row_count) or
/// [`cell_for`](ListDataSource::cell_for) from inside a notification.
///
/// # Example
///
/// ```
/// use typed_list_view::model::{ConfigurableCell, ListDataSource, Position, TypedListAdapter};
///
/// #[derive(Default)]
/// struct NumberCell(String);
///
/// impl ConfigurableCell for NumberCell {
///     type Item = i32;
///
///     fn configure(&mut self, item: &i32) {
///         self.0 = format!("Cell number: {item}");
///     }
/// }
///
/// let adapter = TypedListAdapter::<i32, NumberCell>::new(vec![0, 1, 2]);
/// adapter.insert(99, 1).unwrap();
/// adapter.remove_first().unwrap();
/// adapter.set(1, 7).unwrap();
///
/// assert_eq!(adapter.to_vec(), vec![99, 7, 2]);
/// assert_eq!(adapter.cell_for(Position::row(0)).unwrap().0, "Cell number: 99");
/// ```
pub struct TypedListAdapter<T, C> {
    items: RwLock<Vec<T>>,
    widget: WidgetHandle,
    policy: RwLock<AnimationPolicy>,
    signals: AdapterSignals,
    _cell: PhantomData<fn() -> C>,
}

impl<T: 'static, C: ConfigurableCell> TypedListAdapter<T, C> {
    /// Creates an adapter over `items` with no widget attached.
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items: RwLock::new(items),
            widget: WidgetHandle::default(),
            policy: RwLock::new(AnimationPolicy::default()),
            signals: AdapterSignals::new(),
            _cell: PhantomData,
        }
    }

    /// Creates an empty adapter with no widget attached.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Creates an adapter over `items` and attaches `widget`.
    ///
    /// See [`attach`](Self::attach).
    pub fn with_widget<W: ListWidget + 'static>(items: Vec<T>, widget: &Arc<W>) -> Self {
        let adapter = Self::new(items);
        adapter.attach(widget);
        adapter
    }

    /// Replaces the animation policy (builder style).
    pub fn with_policy(self, policy: AnimationPolicy) -> Self {
        *self.policy.write() = policy;
        self
    }

    // -------------------------------------------------------------------------
    // Widget and configuration
    // -------------------------------------------------------------------------

    /// Attaches `widget`, replacing any previous one.
    ///
    /// Registers `C`'s reuse identifier with the widget, then asks it to
    /// reload everything. The adapter keeps only a weak reference.
    pub fn attach<W: ListWidget + 'static>(&self, widget: &Arc<W>) {
        self.widget.attach(widget);
        tracing::debug!(
            target: targets::ADAPTER,
            identifier = C::reuse_identifier(),
            rows = self.len(),
            "attached widget"
        );
        widget.register_cell(C::reuse_identifier());
        widget.reload_data();
    }

    /// Detaches the current widget. Returns `true` if one was attached.
    pub fn detach(&self) -> bool {
        let detached = self.widget.detach();
        if detached {
            tracing::debug!(target: targets::ADAPTER, "detached widget");
        }
        detached
    }

    /// Returns `true` if a widget is attached and still alive.
    pub fn is_attached(&self) -> bool {
        self.widget.upgrade().is_some()
    }

    /// Returns the current animation policy.
    pub fn animation_policy(&self) -> AnimationPolicy {
        *self.policy.read()
    }

    /// Replaces the animation policy used for subsequent changes.
    pub fn set_animation_policy(&self, policy: AnimationPolicy) {
        *self.policy.write() = policy;
    }

    /// Returns the adapter's signals.
    pub fn signals(&self) -> &AdapterSignals {
        &self.signals
    }

    // -------------------------------------------------------------------------
    // Reading
    // -------------------------------------------------------------------------

    /// Returns the number of items.
    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    /// Returns `true` if there are no items.
    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }

    /// Returns read-only access to the items.
    ///
    /// Drop the returned guard before mutating the adapter.
    pub fn items(&self) -> impl std::ops::Deref<Target = Vec<T>> + '_ {
        self.items.read()
    }

    /// Calls `f` with the item at `index`.
    pub fn with_item<F, R>(&self, index: usize, f: F) -> Result<R>
    where
        F: FnOnce(&T) -> R,
    {
        let items = self.items.read();
        items
            .get(index)
            .map(f)
            .ok_or_else(|| AdapterError::out_of_bounds(index, items.len()))
    }

    // -------------------------------------------------------------------------
    // Bulk reload
    // -------------------------------------------------------------------------

    /// Replaces every item and asks the widget to redraw everything without
    /// animation.
    pub fn reload(&self, items: Vec<T>) {
        *self.items.write() = items;
        tracing::trace!(target: targets::ADAPTER, rows = self.len(), "reloaded");
        self.dispatch(Change::Reload);
    }

    /// Replaces every item with animation.
    ///
    /// Deletes all current rows in one batch, then inserts all of `items` in
    /// one batch. The final contents equal those of [`reload`](Self::reload).
    pub fn reload_with_animation(&self, items: Vec<T>) {
        self.remove_all();
        let count = items.len();
        self.items.write().splice(0..0, items);
        self.apply_change(ChangeKind::Insert, Position::rows(0, count));
    }

    // -------------------------------------------------------------------------
    // Insertion
    // -------------------------------------------------------------------------

    /// Appends `item` and inserts one row at the end.
    pub fn append(&self, item: T) {
        let row = {
            let mut items = self.items.write();
            items.push(item);
            items.len() - 1
        };
        self.apply_change(ChangeKind::Insert, vec![Position::row(row)]);
    }

    /// Inserts `item` at `index`, shifting later items down by one.
    ///
    /// Fails with [`AdapterError::InsertOutOfBounds`] if `index > len()`.
    pub fn insert(&self, item: T, index: usize) -> Result<()> {
        {
            let mut items = self.items.write();
            if index > items.len() {
                return Err(AdapterError::insert_out_of_bounds(index, items.len()));
            }
            items.insert(index, item);
        }
        self.apply_change(ChangeKind::Insert, vec![Position::row(index)]);
        Ok(())
    }

    /// Inserts `items` in order starting at `index`.
    ///
    /// The widget receives one batched insert covering
    /// `index..index + items.len()`. Fails with
    /// [`AdapterError::InsertOutOfBounds`] if `index > len()`.
    pub fn insert_many<I>(&self, items: I, index: usize) -> Result<()>
    where
        I: IntoIterator<Item = T>,
    {
        let new_items: Vec<T> = items.into_iter().collect();
        let count = new_items.len();
        {
            let mut current = self.items.write();
            if index > current.len() {
                return Err(AdapterError::insert_out_of_bounds(index, current.len()));
            }
            current.splice(index..index, new_items);
        }
        self.apply_change(ChangeKind::Insert, Position::rows(index, count));
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Removal
    // -------------------------------------------------------------------------

    /// Removes and returns the item at `index`, deleting its row.
    ///
    /// Fails with [`AdapterError::OutOfBounds`] if `index >= len()`.
    pub fn remove_at(&self, index: usize) -> Result<T> {
        let removed = {
            let mut items = self.items.write();
            if index >= items.len() {
                return Err(AdapterError::out_of_bounds(index, items.len()));
            }
            items.remove(index)
        };
        self.apply_change(ChangeKind::Delete, vec![Position::row(index)]);
        Ok(removed)
    }

    /// Removes and returns the first item.
    ///
    /// Fails with [`AdapterError::Empty`] if there are no items.
    pub fn remove_first(&self) -> Result<T> {
        if self.is_empty() {
            return Err(AdapterError::Empty);
        }
        self.remove_at(0)
    }

    /// Removes and returns the last item.
    ///
    /// Fails with [`AdapterError::Empty`] if there are no items.
    pub fn remove_last(&self) -> Result<T> {
        let removed = self.items.write().pop().ok_or(AdapterError::Empty)?;
        let row = self.len();
        self.apply_change(ChangeKind::Delete, vec![Position::row(row)]);
        Ok(removed)
    }

    /// Removes and returns every item, deleting all rows in one batch.
    pub fn remove_all(&self) -> Vec<T> {
        let removed = std::mem::take(&mut *self.items.write());
        self.apply_change(ChangeKind::Delete, Position::rows(0, removed.len()));
        removed
    }

    // -------------------------------------------------------------------------
    // Updates
    // -------------------------------------------------------------------------

    /// Replaces the item at `index`, returning the old one, and reloads its row.
    ///
    /// Fails with [`AdapterError::OutOfBounds`] if `index >= len()`.
    pub fn set(&self, index: usize, item: T) -> Result<T> {
        let old = {
            let mut items = self.items.write();
            let len = items.len();
            let slot = items
                .get_mut(index)
                .ok_or_else(|| AdapterError::out_of_bounds(index, len))?;
            std::mem::replace(slot, item)
        };
        self.apply_change(ChangeKind::Update, vec![Position::row(index)]);
        Ok(old)
    }

    /// Edits the item at `index` in place and reloads its row.
    pub fn modify<F, R>(&self, index: usize, f: F) -> Result<R>
    where
        F: FnOnce(&mut T) -> R,
    {
        let result = {
            let mut items = self.items.write();
            let len = items.len();
            let item = items
                .get_mut(index)
                .ok_or_else(|| AdapterError::out_of_bounds(index, len))?;
            f(item)
        };
        self.apply_change(ChangeKind::Update, vec![Position::row(index)]);
        Ok(result)
    }

    /// Swaps two items and reloads both rows in one change.
    pub fn swap(&self, a: usize, b: usize) -> Result<()> {
        {
            let mut items = self.items.write();
            let len = items.len();
            for index in [a, b] {
                if index >= len {
                    return Err(AdapterError::out_of_bounds(index, len));
                }
            }
            items.swap(a, b);
        }
        let positions = if a == b {
            vec![Position::row(a)]
        } else {
            vec![Position::row(a.min(b)), Position::row(a.max(b))]
        };
        self.apply_change(ChangeKind::Update, positions);
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Change dispatch
    // -------------------------------------------------------------------------

    /// Builds a row change from `kind` and dispatches it.
    ///
    /// Every row-level mutation goes through here. Empty position sets are
    /// dropped.
    fn apply_change(&self, kind: ChangeKind, positions: Vec<Position>) {
        if positions.is_empty() {
            return;
        }

        let change = Change::rows(kind, positions, &self.policy.read());
        tracing::trace!(
            target: targets::ADAPTER,
            ?kind,
            rows = change.positions().len(),
            animation = ?change.animation(),
            "applying change"
        );
        self.dispatch(change);
    }

    /// Sends `change` to the widget, then emits it on `changed`.
    fn dispatch(&self, change: Change) {
        match self.widget.upgrade() {
            Some(widget) => match &change {
                Change::Insert {
                    positions,
                    animation,
                } => widget.insert_rows(positions, *animation),
                Change::Update {
                    positions,
                    animation,
                } => widget.reload_rows(positions, *animation),
                Change::Delete {
                    positions,
                    animation,
                } => widget.delete_rows(positions, *animation),
                Change::Reload => widget.reload_data(),
            },
            None => tracing::trace!(target: targets::ADAPTER, "no widget, skipping notification"),
        }

        self.signals.changed.emit(change);
    }

    // -------------------------------------------------------------------------
    // Cells
    // -------------------------------------------------------------------------

    /// Like [`cell_for`](ListDataSource::cell_for), but a row whose item is
    /// not a `C::Item` yields an unconfigured `C::default()` instead of an
    /// error.
    ///
    /// The mismatch is logged at `warn`. Prefer `cell_for`; this exists for
    /// hosts that must always hand the widget a cell.
    pub fn cell_for_or_default(&self, position: Position) -> Result<C> {
        match self.cell_for(position) {
            Err(err @ AdapterError::ItemTypeMismatch { .. }) => {
                tracing::warn!(
                    target: targets::ADAPTER,
                    %position,
                    error = %err,
                    "item type mismatch, using a default cell"
                );
                Ok(C::default())
            }
            other => other,
        }
    }

    fn dequeue_cell(&self, position: Position) -> C {
        self.widget
            .upgrade()
            .and_then(|widget| widget.dequeue_reusable_cell(C::reuse_identifier(), position))
            .and_then(|cell| cell.downcast::<C>().ok())
            .map(|cell| *cell)
            .unwrap_or_default()
    }
}

impl<T: Clone + 'static, C: ConfigurableCell> TypedListAdapter<T, C> {
    /// Returns a clone of the item at `index`.
    ///
    /// Fails with [`AdapterError::OutOfBounds`] if `index >= len()`.
    pub fn get(&self, index: usize) -> Result<T> {
        self.with_item(index, T::clone)
    }

    /// Returns a clone of all items.
    pub fn to_vec(&self) -> Vec<T> {
        self.items.read().clone()
    }
}

impl<T: 'static, C: ConfigurableCell> Default for TypedListAdapter<T, C> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T, C> std::fmt::Debug for TypedListAdapter<T, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypedListAdapter")
            .field("len", &self.items.read().len())
            .field("policy", &*self.policy.read())
            .finish_non_exhaustive()
    }
}

impl<T: 'static, C: ConfigurableCell> ListDataSource for TypedListAdapter<T, C> {
    type Cell = C;

    /// Always 1, including for an empty list.
    fn section_count(&self) -> usize {
        1
    }

    fn row_count(&self, section: usize) -> usize {
        if section == DEFAULT_SECTION {
            self.len()
        } else {
            0
        }
    }

    fn cell_for(&self, position: Position) -> Result<C> {
        if position.section != DEFAULT_SECTION {
            return Err(AdapterError::InvalidSection {
                section: position.section,
            });
        }

        // Check the item before taking a cell out of the widget's pool.
        self.with_item(position.row, |item| {
            resolve_item::<T, C::Item>(item)
                .map(|_| ())
                .ok_or_else(AdapterError::item_type_mismatch::<T, C::Item>)
        })??;

        let mut cell = self.dequeue_cell(position);

        let items = self.items.read();
        let item = items
            .get(position.row)
            .ok_or_else(|| AdapterError::out_of_bounds(position.row, items.len()))?;
        let item = resolve_item::<T, C::Item>(item)
            .ok_or_else(AdapterError::item_type_mismatch::<T, C::Item>)?;
        cell.configure(item);
        Ok(cell)
    }
}
