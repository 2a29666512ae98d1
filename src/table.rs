//! Display Container
//!
//! The element whose rows are replaced on every load, and the Leptos
//! component that draws them.

use leptos::prelude::*;

use crate::render::Row;

/// Something rows can be cleared from and appended to
pub trait RowContainer {
    fn clear(&mut self);
    fn append_row(&mut self, row: Row);

    /// Swap in a complete row set at once
    fn replace_rows(&mut self, rows: Vec<Row>) {
        self.clear();
        for row in rows {
            self.append_row(row);
        }
    }
}

/// Rows held in a signal and drawn by [`TableRows`]
#[derive(Clone, Copy)]
pub struct SignalTable {
    rows: RwSignal<Vec<Row>>,
}

impl SignalTable {
    pub fn new(rows: RwSignal<Vec<Row>>) -> Self {
        Self { rows }
    }
}

impl RowContainer for SignalTable {
    fn clear(&mut self) {
        self.rows.set(Vec::new());
    }

    fn append_row(&mut self, row: Row) {
        self.rows.update(|rows| rows.push(row));
    }

    /// Single signal write, so `<For>` diffs once per load
    fn replace_rows(&mut self, rows: Vec<Row>) {
        self.rows.set(rows);
    }
}

/// `<tr>` per row, `<td>` per cell
#[component]
pub fn TableRows(rows: RwSignal<Vec<Row>>) -> impl IntoView {
    view! {
        <For
            each=move || rows.get().into_iter().enumerate()
            key=|(index, row)| (*index, row.clone())
            children=move |(_, row)| {
                view! {
                    <tr>
                        {row.cells.into_iter().map(|cell| view! { <td>{cell}</td> }).collect_view()}
                    </tr>
                }
            }
        />
    }
}

#[cfg(test)]
pub use memory::MemoryTable;

#[cfg(test)]
mod memory {
    use super::RowContainer;
    use crate::render::Row;

    /// Plain vector of rows
    #[derive(Debug, Default, Clone, PartialEq)]
    pub struct MemoryTable {
        pub rows: Vec<Row>,
    }

    impl RowContainer for MemoryTable {
        fn clear(&mut self) {
            self.rows.clear();
        }

        fn append_row(&mut self, row: Row) {
            self.rows.push(row);
        }
    }
}
