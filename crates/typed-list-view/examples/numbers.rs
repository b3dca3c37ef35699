//! Numbers demo
//!
//! Binds the numbers 0..=100 to a console "list widget" that prints every
//! row update it receives, then walks through the adapter's mutations.
//!
//! Run with: RUST_LOG=typed_list_view=trace cargo run -p typed-list-view --example numbers

use std::any::Any;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing_subscriber::EnvFilter;
use typed_list_view::prelude::*;

/// A row showing a number on a background whose hue follows the value.
#[derive(Default)]
struct NumberCell {
    text: String,
    hue: f32,
}

impl ConfigurableCell for NumberCell {
    type Item = i32;

    fn configure(&mut self, item: &i32) {
        self.text = format!("Cell number: {item}");
        self.hue = 0.01 * *item as f32;
    }
}

/// Prints row updates and keeps a small reuse pool.
#[derive(Default)]
struct ConsoleList {
    pool: Mutex<Vec<Box<dyn Any + Send>>>,
}

impl ConsoleList {
    fn recycle(&self, cell: NumberCell) {
        self.pool.lock().push(Box::new(cell));
    }
}

impl ListWidget for ConsoleList {
    fn insert_rows(&self, positions: &[Position], animation: RowAnimation) {
        println!("insert {} row(s) at {:?} ({animation:?})", positions.len(), first(positions));
    }

    fn delete_rows(&self, positions: &[Position], animation: RowAnimation) {
        println!("delete {} row(s) at {:?} ({animation:?})", positions.len(), first(positions));
    }

    fn reload_rows(&self, positions: &[Position], animation: RowAnimation) {
        println!("reload {} row(s) at {:?} ({animation:?})", positions.len(), first(positions));
    }

    fn reload_data(&self) {
        println!("reload everything");
    }

    fn register_cell(&self, identifier: &'static str) {
        println!("registered cell `{identifier}`");
    }

    fn dequeue_reusable_cell(
        &self,
        _identifier: &str,
        _position: Position,
    ) -> Option<Box<dyn Any + Send>> {
        self.pool.lock().pop()
    }
}

fn first(positions: &[Position]) -> Option<Position> {
    positions.first().copied()
}

fn show(list: &ConsoleList, adapter: &TypedListAdapter<i32, NumberCell>, rows: usize) {
    for row in 0..rows.min(adapter.row_count(0)) {
        match adapter.cell_for(Position::row(row)) {
            Ok(cell) => {
                println!("  {} (hue {:.2})", cell.text, cell.hue);
                list.recycle(cell);
            }
            Err(err) => println!("  {err}"),
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let list = Arc::new(ConsoleList::default());
    let adapter = TypedListAdapter::<i32, NumberCell>::with_widget((0..=100).collect(), &list);
    show(&list, &adapter, 3);

    adapter.insert(99, 1)?;
    adapter.remove_first()?;
    adapter.set(1, 7)?;
    adapter.append(101);
    show(&list, &adapter, 3);

    adapter.reload_with_animation(vec![1, 2, 3]);
    show(&list, &adapter, 3);

    if let Err(err) = adapter.remove_at(10) {
        println!("expected failure: {err}");
    }

    drop(list);
    adapter.append(4);
    println!("widget dropped; adapter still holds {} rows", adapter.len());
    Ok(())
}
