//! The row store: an ordered list of rows plus the dirty counter and file path.

use super::row::Row;
use std::path::{Path, PathBuf};

/// An in-memory document made of rows
///
/// Row indices are dense in `[0, row_count)`. Out-of-range operations are
/// silently ignored; they cannot be reached through normal key handling.
#[derive(Debug, Clone)]
pub struct Document {
    rows: Vec<Row>,

    /// Number of mutations since the last successful save (0 means clean)
    dirty: usize,

    /// Associated path, absent until opened from or saved to a file
    path: Option<PathBuf>,

    /// Tab stop width used to render every row
    tab_stop: usize,
}

impl Document {
    /// Create an empty, unnamed document
    pub fn new(tab_stop: usize) -> Self {
        Self {
            rows: Vec::new(),
            dirty: 0,
            path: None,
            tab_stop: tab_stop.max(1),
        }
    }

    /// Build a clean document from already-split lines
    pub fn from_lines<I, L>(lines: I, tab_stop: usize) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<Vec<u8>>,
    {
        let mut doc = Self::new(tab_stop);
        for line in lines {
            let at = doc.row_count();
            doc.insert_row(at, line);
        }
        doc.dirty = 0;
        doc
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, at: usize) -> Option<&Row> {
        self.rows.get(at)
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Length of row `at` in edit columns, 0 for the past-last-row position
    pub fn row_len(&self, at: usize) -> usize {
        self.rows.get(at).map_or(0, Row::len)
    }

    pub fn tab_stop(&self) -> usize {
        self.tab_stop
    }

    pub fn dirty(&self) -> usize {
        self.dirty
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty > 0
    }

    /// Mark the document as saved
    pub fn clear_dirty(&mut self) {
        self.dirty = 0;
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn set_path(&mut self, path: impl Into<PathBuf>) {
        self.path = Some(path.into());
    }

    /// Insert a new row at `at`, shifting later rows down. No-op when `at > row_count`.
    pub fn insert_row(&mut self, at: usize, content: impl Into<Vec<u8>>) {
        if at > self.rows.len() {
            return;
        }
        self.rows.insert(at, Row::new(content, self.tab_stop));
        self.dirty += 1;
    }

    /// Remove row `at`, shifting later rows up. No-op when `at >= row_count`.
    pub fn delete_row(&mut self, at: usize) {
        if at >= self.rows.len() {
            return;
        }
        self.rows.remove(at);
        self.dirty += 1;
    }

    /// Append bytes to the end of row `at`
    pub fn append_string(&mut self, at: usize, bytes: &[u8]) {
        let tab_stop = self.tab_stop;
        if let Some(row) = self.rows.get_mut(at) {
            row.append_bytes(bytes, tab_stop);
            self.dirty += 1;
        }
    }

    /// Insert a byte into row `at` at edit column `col` (clamped to the row end)
    pub fn insert_char(&mut self, at: usize, col: usize, byte: u8) {
        let tab_stop = self.tab_stop;
        if let Some(row) = self.rows.get_mut(at) {
            row.insert_char(col, byte, tab_stop);
            self.dirty += 1;
        }
    }

    /// Delete the byte at edit column `col` of row `at`
    pub fn delete_char(&mut self, at: usize, col: usize) {
        let tab_stop = self.tab_stop;
        if let Some(row) = self.rows.get_mut(at) {
            if row.delete_char(col, tab_stop) {
                self.dirty += 1;
            }
        }
    }

    /// Split row `at` at edit column `col`; the tail becomes a new row below.
    pub fn split_row(&mut self, at: usize, col: usize) {
        let tab_stop = self.tab_stop;
        let Some(row) = self.rows.get_mut(at) else {
            return;
        };
        let tail = row.split_off(col, tab_stop);
        self.insert_row(at + 1, tail);
    }

    /// Move the content of row `at` onto the end of row `at - 1` and remove row `at`.
    ///
    /// Returns the join column in the previous row.
    pub fn join_with_previous(&mut self, at: usize) -> Option<usize> {
        if at == 0 || at >= self.rows.len() {
            return None;
        }
        let join_col = self.rows[at - 1].len();
        let moved = self.rows[at].chars().to_vec();
        self.append_string(at - 1, &moved);
        self.delete_row(at);
        Some(join_col)
    }

    /// Serialize every row followed by a newline (including the last row)
    pub fn rows_to_text(&self) -> Vec<u8> {
        let total: usize = self.rows.iter().map(|row| row.len() + 1).sum();
        let mut buf = Vec::with_capacity(total);
        for row in &self.rows {
            buf.extend_from_slice(row.chars());
            buf.push(b'\n');
        }
        buf
    }
}
