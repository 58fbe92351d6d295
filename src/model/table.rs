//! Table types.

use super::Section;
use serde::{Deserialize, Serialize};

/// A table built from `\trowd` ... `\row` constructs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// Rows in the table
    pub rows: Vec<Row>,

    /// Half the space between cells, in points (`\trgaph`)
    pub half_gap: f64,

    /// Position of the leftmost cell edge, in points (`\trleft`)
    pub left_margin: f64,
}

impl Table {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an empty row and return it.
    pub fn add_row(&mut self) -> &mut Row {
        self.rows.push(Row::new());
        let last = self.rows.len() - 1;
        &mut self.rows[last]
    }

    /// The row currently being built.
    pub fn current_row(&self) -> Option<&Row> {
        self.rows.last()
    }

    /// Mutable access to the row currently being built.
    pub fn current_row_mut(&mut self) -> Option<&mut Row> {
        self.rows.last_mut()
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get the number of columns (widest row).
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(|r| r.cells.len()).max().unwrap_or(0)
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Width of a cell in points.
    pub fn cell_width(&self, row: usize, cell: usize) -> Option<f64> {
        self.rows
            .get(row)?
            .cell_width(cell, self.half_gap, self.left_margin)
    }

    /// Get plain text representation of the table.
    pub fn plain_text(&self) -> String {
        self.rows
            .iter()
            .map(|row| row.plain_text())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A table row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Row {
    /// Right edge of each column in points (`\cellx`)
    pub end_positions: Vec<f64>,

    /// Cells in the row
    pub cells: Vec<Cell>,
}

impl Row {
    /// Create a new empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cell slots declared by `\cellx`.
    pub fn slot_count(&self) -> usize {
        self.end_positions.len()
    }

    /// Get a cell, creating it and any missing cells before it.
    pub fn cell_mut(&mut self, index: usize) -> &mut Cell {
        while self.cells.len() <= index {
            self.cells.push(Cell::new());
        }
        &mut self.cells[index]
    }

    /// Width of the cell at `index`, in points.
    ///
    /// The width is the distance from the previous column edge (0 for the
    /// first column) minus the gap on both sides and the left margin.
    pub fn cell_width(&self, index: usize, half_gap: f64, left_margin: f64) -> Option<f64> {
        let end = *self.end_positions.get(index)?;
        let start = match index {
            0 => 0.0,
            _ => self.end_positions[index - 1],
        };
        Some(end - start - half_gap * 2.0 - left_margin)
    }

    /// Check if the row has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Get plain text representation.
    pub fn plain_text(&self) -> String {
        self.cells
            .iter()
            .map(|c| c.plain_text())
            .collect::<Vec<_>>()
            .join("\t")
    }
}

/// A table cell.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    /// Sections emitted inside the cell
    pub sections: Vec<Section>,
}

impl Cell {
    /// Create an empty cell.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get plain text content.
    pub fn plain_text(&self) -> String {
        self.sections.iter().map(|s| s.text.as_str()).collect()
    }

    /// Check if the cell has no sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}
