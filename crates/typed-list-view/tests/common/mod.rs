//! Shared fixtures for adapter integration tests.

#![allow(dead_code)]

use std::any::Any;
use std::collections::HashMap;

use parking_lot::Mutex;
use typed_list_view::model::{ConfigurableCell, ListWidget, Position, RowAnimation};

/// A cell showing an `i32`, like the demo's number rows.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct NumberCell {
    pub text: String,
    pub hue: f32,
}

impl ConfigurableCell for NumberCell {
    type Item = i32;

    fn reuse_identifier() -> &'static str {
        "NumberCell"
    }

    fn configure(&mut self, item: &i32) {
        self.text = format!("Cell number: {item}");
        self.hue = 0.01 * *item as f32;
    }
}

/// One call the adapter made on a widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Register(&'static str),
    Insert(Vec<usize>, RowAnimation),
    Delete(Vec<usize>, RowAnimation),
    Reload(Vec<usize>, RowAnimation),
    ReloadData,
}

fn rows(positions: &[Position]) -> Vec<usize> {
    positions.iter().map(|p| p.row).collect()
}

/// A widget that records every call and serves cells from a reuse pool.
#[derive(Default)]
pub struct RecordingWidget {
    calls: Mutex<Vec<Call>>,
    pool: Mutex<HashMap<String, Vec<Box<dyn Any + Send>>>>,
}

impl RecordingWidget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns and clears the recorded calls.
    pub fn take_calls(&self) -> Vec<Call> {
        std::mem::take(&mut *self.calls.lock())
    }

    /// Puts a cell back into the reuse pool under `identifier`.
    pub fn enqueue(&self, identifier: &str, cell: Box<dyn Any + Send>) {
        self.pool
            .lock()
            .entry(identifier.to_string())
            .or_default()
            .push(cell);
    }

    pub fn pooled(&self, identifier: &str) -> usize {
        self.pool.lock().get(identifier).map_or(0, Vec::len)
    }
}

impl ListWidget for RecordingWidget {
    fn insert_rows(&self, positions: &[Position], animation: RowAnimation) {
        self.calls.lock().push(Call::Insert(rows(positions), animation));
    }

    fn delete_rows(&self, positions: &[Position], animation: RowAnimation) {
        self.calls.lock().push(Call::Delete(rows(positions), animation));
    }

    fn reload_rows(&self, positions: &[Position], animation: RowAnimation) {
        self.calls.lock().push(Call::Reload(rows(positions), animation));
    }

    fn reload_data(&self) {
        self.calls.lock().push(Call::ReloadData);
    }

    fn register_cell(&self, identifier: &'static str) {
        self.calls.lock().push(Call::Register(identifier));
        self.pool.lock().entry(identifier.to_string()).or_default();
    }

    fn dequeue_reusable_cell(
        &self,
        identifier: &str,
        _position: Position,
    ) -> Option<Box<dyn Any + Send>> {
        self.pool.lock().get_mut(identifier).and_then(Vec::pop)
    }
}
