//! Incremental, directional text search over rendered rows.
//!
//! A [`SearchState`] lives for one search prompt session. Every keystroke in
//! the prompt is fed to [`SearchState::on_key`], which updates the direction
//! and anchor, and then [`SearchState::find`] scans at most `row_count` rows
//! from the anchor, wrapping around the document.

use crate::input::Key;
use crate::model::Document;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

/// What the prompt should do after a search keystroke
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStep {
    /// Scan for the (possibly updated) query
    Scan,
    /// The session ended (Enter or Escape); do not scan
    Finish,
}

/// A match found by [`SearchState::find`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchMatch {
    /// Row index
    pub row: usize,
    /// Offset of the match in the row's rendered text
    pub render_col: usize,
    /// Offset of the match mapped back to edit coordinates
    pub col: usize,
}

/// Per-session search anchor and direction
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    last_match: Option<usize>,
    direction: Direction,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_match(&self) -> Option<usize> {
        self.last_match
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    fn reset(&mut self) {
        self.last_match = None;
        self.direction = Direction::Forward;
    }

    /// Update the session for one prompt keystroke.
    ///
    /// Right/Down search forward from the last match, Left/Up backward. Enter
    /// and Escape end the session. Any other key edits the query, so the scan
    /// restarts from the top.
    pub fn on_key(&mut self, key: Key) -> SearchStep {
        match key {
            Key::Esc => {
                self.reset();
                return SearchStep::Finish;
            }
            k if k.is_enter() => {
                self.reset();
                return SearchStep::Finish;
            }
            Key::Right | Key::Down => self.direction = Direction::Forward,
            Key::Left | Key::Up => self.direction = Direction::Backward,
            _ => self.reset(),
        }
        if self.last_match.is_none() {
            self.direction = Direction::Forward;
        }
        SearchStep::Scan
    }

    /// Scan for `query`, stepping from the anchor in the current direction.
    ///
    /// Matching is a case-sensitive literal substring test on each row's
    /// rendered text. The first hit becomes the new anchor.
    pub fn find(&mut self, doc: &Document, query: &[u8]) -> Option<SearchMatch> {
        let row_count = doc.row_count();
        if query.is_empty() || row_count == 0 {
            return None;
        }

        // Without an anchor the scan starts at row 0 (one step forward from "before row 0")
        let mut current = self.last_match;
        for _ in 0..row_count {
            let next = match (current, self.direction) {
                (None, _) => 0,
                (Some(row), Direction::Forward) => (row + 1) % row_count,
                (Some(0), Direction::Backward) => row_count - 1,
                (Some(row), Direction::Backward) => (row - 1).min(row_count - 1),
            };
            current = Some(next);

            let Some(row) = doc.row(next) else {
                continue;
            };
            if let Some(render_col) = find_bytes(row.render(), query) {
                self.last_match = Some(next);
                let col = row.rx_to_cx(render_col, doc.tab_stop());
                tracing::debug!("Search match at row {}, column {}", next, col);
                return Some(SearchMatch {
                    row: next,
                    render_col,
                    col,
                });
            }
        }
        None
    }
}

/// Byte offset of the first occurrence of `needle` in `haystack`
pub fn find_bytes(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}
