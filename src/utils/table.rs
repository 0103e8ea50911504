//! Table rendering utilities for CLI outputs.

use crate::utils::formatting::strip_ansi;
use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    pub width: usize,
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Render with padding computed on the visible width, so colored
    /// cells and wide characters stay aligned.
    pub fn render(&self) -> String {
        let mut out = String::new();

        // Header
        for col in &self.columns {
            out.push_str(&col.header);
            out.push_str(&pad_for(&col.header, col.width));
            out.push(' ');
        }
        out.push('\n');

        // Rows
        for row in &self.rows {
            for (i, col) in self.columns.iter().enumerate() {
                out.push_str(&row[i]);
                out.push_str(&pad_for(&row[i], col.width));
                out.push(' ');
            }
            out.push('\n');
        }

        out
    }
}

fn pad_for(cell: &str, width: usize) -> String {
    let visible = UnicodeWidthStr::width(strip_ansi(cell).as_str());
    " ".repeat(width.saturating_sub(visible))
}

/// Widest visible cell in a column, header included.
pub fn fit_width(header: &str, values: impl Iterator<Item = String>) -> usize {
    let mut w = UnicodeWidthStr::width(header);
    for v in values {
        w = w.max(UnicodeWidthStr::width(strip_ansi(&v).as_str()));
    }
    w
}
