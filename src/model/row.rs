//! A single line of the document and its tab-expanded render form.
//!
//! Two coordinate systems exist for every row:
//! - **edit columns** index into the raw bytes (`chars`) and are used for mutation
//! - **render columns** index into the tab-expanded bytes (`render`) and are used
//!   for on-screen placement and search
//!
//! `render` is always derived from `chars`; every mutation goes through a method
//! that calls [`Row::update`] before returning.

/// One line of text: raw content plus its rendered form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Row {
    chars: Vec<u8>,
    render: Vec<u8>,
}

impl Row {
    /// Create a row from raw content, rendering tabs with the given stop width
    pub fn new(chars: impl Into<Vec<u8>>, tab_stop: usize) -> Self {
        let mut row = Self {
            chars: chars.into(),
            render: Vec::new(),
        };
        row.update(tab_stop);
        row
    }

    /// Raw (edit-space) content
    pub fn chars(&self) -> &[u8] {
        &self.chars
    }

    /// Rendered (display-space) content
    pub fn render(&self) -> &[u8] {
        &self.render
    }

    /// Length in edit columns
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Length in render columns
    pub fn render_len(&self) -> usize {
        self.render.len()
    }

    /// Recompute `render` from `chars`.
    pub fn update(&mut self, tab_stop: usize) {
        let tab_stop = tab_stop.max(1);
        let tabs = self.chars.iter().filter(|&&b| b == b'\t').count();
        let extra = tabs.saturating_mul(tab_stop - 1);
        let mut render = Vec::with_capacity(self.chars.len().saturating_add(extra));

        for &byte in &self.chars {
            if byte == b'\t' {
                render.push(b' ');
                while render.len() % tab_stop != 0 {
                    render.push(b' ');
                }
            } else {
                render.push(byte);
            }
        }

        self.render = render;
    }

    /// Insert a byte at `at`; positions past the end append.
    pub fn insert_char(&mut self, at: usize, byte: u8, tab_stop: usize) {
        let at = at.min(self.chars.len());
        self.chars.insert(at, byte);
        self.update(tab_stop);
    }

    /// Remove the byte at `at`. Returns false (and changes nothing) when out of range.
    pub fn delete_char(&mut self, at: usize, tab_stop: usize) -> bool {
        if at >= self.chars.len() {
            return false;
        }
        self.chars.remove(at);
        self.update(tab_stop);
        true
    }

    pub fn append_bytes(&mut self, bytes: &[u8], tab_stop: usize) {
        self.chars.extend_from_slice(bytes);
        self.update(tab_stop);
    }

    /// Cut the row at `at`, keeping the head and returning the tail.
    pub fn split_off(&mut self, at: usize, tab_stop: usize) -> Vec<u8> {
        let at = at.min(self.chars.len());
        let tail = self.chars.split_off(at);
        self.update(tab_stop);
        tail
    }

    /// Map an edit column to the render column it is displayed at.
    ///
    /// Each tab advances to the next multiple of `tab_stop`; every other byte
    /// advances by one. Columns past the end are clamped to the row length.
    pub fn cx_to_rx(&self, cx: usize, tab_stop: usize) -> usize {
        let tab_stop = tab_stop.max(1);
        self.chars
            .iter()
            .take(cx)
            .fold(0, |rx, &byte| advance(rx, byte, tab_stop))
    }

    /// Map a render column back to an edit column.
    ///
    /// Returns the edit column whose rendered span contains `rx` (a render
    /// column inside a tab's expansion maps to the tab itself). A render column
    /// past the end of the row maps to the row length. This rounds down, so
    /// `cx_to_rx(rx_to_cx(rx)) <= rx` and the gap is always smaller than one
    /// tab stop.
    pub fn rx_to_cx(&self, rx: usize, tab_stop: usize) -> usize {
        let tab_stop = tab_stop.max(1);
        let mut cur_rx = 0;
        for (cx, &byte) in self.chars.iter().enumerate() {
            cur_rx = advance(cur_rx, byte, tab_stop);
            if cur_rx > rx {
                return cx;
            }
        }
        self.chars.len()
    }
}

#[inline]
fn advance(rx: usize, byte: u8, tab_stop: usize) -> usize {
    if byte == b'\t' {
        rx.saturating_add(tab_stop - rx % tab_stop)
    } else {
        rx + 1
    }
}
