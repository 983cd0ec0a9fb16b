//! Bounded row previews
//!
//! A preview is a rectangular grid anchored at A1. Cells arrive in row-major
//! order from a streaming reader; [`PreviewBuilder::push`] tells the caller
//! when to stop pulling so rows past the limit are never parsed.

use indexmap::IndexMap;
use serde::Serialize;

/// Rows of one sheet, each cell already rendered as text
pub type SheetPreview = Vec<Vec<String>>;

/// Everything printed by a dump run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DumpResult {
    /// Path the workbook was opened from
    pub path: String,
    /// Sheet name to preview, in workbook order
    pub sheets: IndexMap<String, SheetPreview>,
}

impl DumpResult {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            sheets: IndexMap::new(),
        }
    }

    pub fn push_sheet(&mut self, name: impl Into<String>, preview: SheetPreview) {
        self.sheets.insert(name.into(), preview);
    }
}

/// Collects streamed cells into a padded grid of at most `limit` rows
#[derive(Debug)]
pub struct PreviewBuilder {
    limit: usize,
    rows: Vec<Vec<String>>,
    width: usize,
    has_cells: bool,
    truncated: bool,
}

impl PreviewBuilder {
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            rows: Vec::new(),
            width: 0,
            has_cells: false,
            truncated: false,
        }
    }

    /// Pad every row out to the sheet's declared last column (0-based)
    ///
    /// Only the width is taken from the declaration; rows end at the last
    /// row that holds a cell.
    pub fn declare_last_column(&mut self, last_col: u32) {
        self.width = self.width.max(last_col as usize + 1);
    }

    /// Store a cell; returns `false` once the cell lies past the row limit
    pub fn push(&mut self, row: u32, col: u32, text: String) -> bool {
        let (row, col) = (row as usize, col as usize);
        self.has_cells = true;
        if row >= self.limit {
            self.truncated = true;
            return false;
        }

        if self.rows.len() <= row {
            self.rows.resize_with(row + 1, Vec::new);
        }
        let cells = &mut self.rows[row];
        if cells.len() <= col {
            cells.resize(col + 1, String::new());
        }
        cells[col] = text;
        self.width = self.width.max(col + 1);
        true
    }

    pub fn finish(self) -> SheetPreview {
        if !self.has_cells {
            return Vec::new();
        }

        let total = if self.truncated {
            self.limit
        } else {
            self.rows.len()
        };

        let mut rows = self.rows;
        rows.resize_with(total.min(self.limit), Vec::new);
        for row in &mut rows {
            row.resize(self.width, String::new());
        }
        rows
    }
}
