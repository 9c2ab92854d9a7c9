use crate::model::Document;

/// Rows at the bottom of the terminal reserved for the status and message bars
pub const RESERVED_ROWS: usize = 2;

/// Cursor position in edit coordinates
///
/// `y` ranges over `[0, row_count]`; `y == row_count` is the position just past
/// the last row, where `x` is always 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub x: usize,
    pub y: usize,
}

/// Single-step cursor movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Movement {
    Left,
    Right,
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Up,
    Down,
}

impl Cursor {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Move one step, wrapping across line ends for Left/Right and clamping
    /// the column to the length of the row that ends up under the cursor.
    pub fn step(&mut self, doc: &Document, movement: Movement) {
        let on_row = self.y < doc.row_count();
        match movement {
            Movement::Left => {
                if self.x > 0 {
                    self.x -= 1;
                } else if self.y > 0 {
                    self.y -= 1;
                    self.x = doc.row_len(self.y);
                }
            }
            Movement::Right => {
                if on_row {
                    if self.x < doc.row_len(self.y) {
                        self.x += 1;
                    } else {
                        self.y += 1;
                        self.x = 0;
                    }
                }
            }
            Movement::Up => {
                self.y = self.y.saturating_sub(1);
            }
            Movement::Down => {
                if self.y < doc.row_count() {
                    self.y += 1;
                }
            }
        }
        self.clamp(doc);
    }

    /// Keep the cursor inside the document
    pub fn clamp(&mut self, doc: &Document) {
        self.y = self.y.min(doc.row_count());
        self.x = self.x.min(doc.row_len(self.y));
    }

    pub fn line_start(&mut self) {
        self.x = 0;
    }

    pub fn line_end(&mut self, doc: &Document) {
        if self.y < doc.row_count() {
            self.x = doc.row_len(self.y);
        }
    }
}

/// The visible window over the document, in render coordinates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewport {
    /// First visible document row
    pub row_offset: usize,

    /// First visible render column
    pub col_offset: usize,

    /// Number of text rows on screen (status and message bars excluded)
    pub screen_rows: usize,

    /// Number of columns on screen
    pub screen_cols: usize,

    /// Render column of the cursor, recomputed by [`Viewport::scroll`]
    render_x: usize,
}

impl Viewport {
    /// Create a viewport with the given text area size
    pub fn new(screen_rows: usize, screen_cols: usize) -> Self {
        Self {
            row_offset: 0,
            col_offset: 0,
            screen_rows,
            screen_cols,
            render_x: 0,
        }
    }

    /// Create a viewport for a whole terminal, leaving room for the two bars
    pub fn for_terminal(rows: u16, cols: u16) -> Self {
        Self::new(
            (rows as usize).saturating_sub(RESERVED_ROWS),
            cols as usize,
        )
    }

    pub fn render_x(&self) -> usize {
        self.render_x
    }

    /// Recompute the cursor's render column and move the window so the cursor is visible
    pub fn scroll(&mut self, doc: &Document, cursor: &Cursor) {
        self.render_x = doc
            .row(cursor.y)
            .map_or(0, |row| row.cx_to_rx(cursor.x, doc.tab_stop()));

        if cursor.y < self.row_offset {
            self.row_offset = cursor.y;
        }
        if cursor.y >= self.row_offset + self.screen_rows {
            self.row_offset = (cursor.y + 1).saturating_sub(self.screen_rows);
        }
        if self.render_x < self.col_offset {
            self.col_offset = self.render_x;
        }
        if self.render_x >= self.col_offset + self.screen_cols {
            self.col_offset = (self.render_x + 1).saturating_sub(self.screen_cols);
        }
    }

    /// Push the window past the end of the document so the next
    /// [`Viewport::scroll`] brings the cursor row to the top of the screen.
    pub fn force_rescroll(&mut self, doc: &Document) {
        self.row_offset = doc.row_count();
    }

    /// Move a screenful, one row at a time so line-length clamping applies at
    /// every intermediate row.
    pub fn page(&self, doc: &Document, cursor: &mut Cursor, page: Page) {
        let movement = match page {
            Page::Up => {
                cursor.y = self.row_offset;
                Movement::Up
            }
            Page::Down => {
                cursor.y = (self.row_offset + self.screen_rows)
                    .saturating_sub(1)
                    .min(doc.row_count());
                Movement::Down
            }
        };
        cursor.clamp(doc);
        for _ in 0..self.screen_rows {
            cursor.step(doc, movement);
        }
    }

    /// Cursor position on screen as zero-based (row, column)
    pub fn cursor_screen_position(&self, cursor: &Cursor) -> (usize, usize) {
        (
            cursor.y.saturating_sub(self.row_offset),
            self.render_x.saturating_sub(self.col_offset),
        )
    }
}
