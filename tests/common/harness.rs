// EditorTestHarness - Virtual terminal environment for E2E testing
//
// Input goes through the real KeyDecoder as raw terminal bytes, and every
// rendered frame is fed to a vt100 emulator so assertions see exactly what a
// terminal would show.

#![allow(dead_code)]

use kite::config::EditorConfig;
use kite::editor::Editor;
use kite::input::{Key, KeyDecoder};
use kite::view::Cursor;
use std::collections::VecDeque;
use std::path::Path;

/// Raw byte sequences sent by a typical terminal for special keys
pub mod keys {
    pub const ENTER: &[u8] = b"\r";
    pub const BACKSPACE: &[u8] = b"\x7f";
    pub const ESC: &[u8] = b"\x1b";
    pub const UP: &[u8] = b"\x1b[A";
    pub const DOWN: &[u8] = b"\x1b[B";
    pub const RIGHT: &[u8] = b"\x1b[C";
    pub const LEFT: &[u8] = b"\x1b[D";
    pub const HOME: &[u8] = b"\x1b[H";
    pub const END: &[u8] = b"\x1b[F";
    pub const DELETE: &[u8] = b"\x1b[3~";
    pub const PAGE_UP: &[u8] = b"\x1b[5~";
    pub const PAGE_DOWN: &[u8] = b"\x1b[6~";

    /// The byte sent for Ctrl+`letter`
    pub fn ctrl(letter: u8) -> [u8; 1] {
        [letter & 0x1f]
    }
}

/// Test harness wrapping an editor, its key decoder and a virtual terminal
pub struct EditorTestHarness {
    editor: Editor,

    /// Decoder fed from an in-memory byte queue
    decoder: KeyDecoder<VecDeque<u8>>,

    /// VT100 parser interpreting the rendered escape sequences
    vt100_parser: vt100::Parser,

    term_width: u16,
    term_height: u16,
}

impl EditorTestHarness {
    /// Create a harness for a terminal of `width` x `height` with default settings
    pub fn new(width: u16, height: u16) -> Self {
        Self::with_config(width, height, EditorConfig::default())
    }

    /// Create a harness with custom editor settings
    pub fn with_config(width: u16, height: u16, config: EditorConfig) -> Self {
        EditorTestHarness {
            editor: Editor::new(config, height, width),
            decoder: KeyDecoder::new(VecDeque::new()),
            vt100_parser: vt100::Parser::new(height, width, 0),
            term_width: width,
            term_height: height,
        }
    }

    /// Open a file in the editor
    pub fn open_file(&mut self, path: &Path) {
        self.editor.open_file(path);
    }

    /// Feed raw terminal bytes and apply every key they decode to.
    ///
    /// A lone ESC must be sent on its own; followed by more bytes in the same
    /// call it is read as the start of an escape sequence.
    pub fn send_bytes(&mut self, bytes: &[u8]) {
        self.decoder.source_mut().extend(bytes.iter().copied());
        while let Some(key) = self.decoder.next_key().unwrap() {
            self.editor.handle_key(key);
        }
    }

    /// Apply one already-decoded key
    pub fn send_key(&mut self, key: Key) {
        self.editor.handle_key(key);
    }

    /// Send the same byte sequence `count` times
    pub fn send_bytes_repeat(&mut self, bytes: &[u8], count: usize) {
        for _ in 0..count {
            self.send_bytes(bytes);
        }
    }

    /// Press Ctrl+`letter`
    pub fn send_ctrl(&mut self, letter: u8) {
        self.send_bytes(&keys::ctrl(letter));
    }

    /// Type a string of text
    pub fn type_text(&mut self, text: &str) {
        self.send_bytes(text.as_bytes());
    }

    /// Render a frame into the virtual terminal
    pub fn render(&mut self) {
        let mut frame = Vec::new();
        self.editor.render(&mut frame).unwrap();
        self.vt100_parser.process(&frame);
    }

    /// Entire screen as text, one line per terminal row
    pub fn screen_to_string(&self) -> String {
        self.vt100_parser.screen().contents()
    }

    /// Text of one screen row (trailing blanks trimmed)
    pub fn get_screen_row(&self, row: u16) -> String {
        self.vt100_parser
            .screen()
            .contents_between(row, 0, row, self.term_width)
    }

    /// The inverse-video status bar
    pub fn get_status_bar(&self) -> String {
        self.get_screen_row(self.term_height - 2)
    }

    /// The bottom message bar
    pub fn get_message_bar(&self) -> String {
        self.get_screen_row(self.term_height - 1)
    }

    /// Whether the cell at `(row, col)` is drawn in inverse video
    pub fn is_inverse(&self, row: u16, col: u16) -> bool {
        self.vt100_parser
            .screen()
            .cell(row, col)
            .is_some_and(|cell| cell.inverse())
    }

    /// Verify text appears on screen
    pub fn assert_screen_contains(&self, text: &str) {
        let screen = self.screen_to_string();
        assert!(
            screen.contains(text),
            "Expected screen to contain '{text}'\nScreen content:\n{screen}"
        );
    }

    /// Verify text does not appear on screen
    pub fn assert_screen_not_contains(&self, text: &str) {
        let screen = self.screen_to_string();
        assert!(
            !screen.contains(text),
            "Expected screen to not contain '{text}'\nScreen content:\n{screen}"
        );
    }

    /// Document rows joined with '\n' (no trailing newline)
    pub fn get_buffer_content(&self) -> String {
        self.editor
            .document()
            .rows()
            .iter()
            .map(|row| String::from_utf8_lossy(row.chars()).into_owned())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Verify buffer content matches expected
    pub fn assert_buffer_content(&self, expected: &str) {
        let actual = self.get_buffer_content();
        assert_eq!(
            actual, expected,
            "Buffer content mismatch\nExpected: {expected:?}\nActual: {actual:?}",
        );
    }

    /// Cursor position in edit coordinates
    pub fn cursor(&self) -> Cursor {
        self.editor.cursor()
    }

    /// Hardware cursor position on the virtual screen as (row, col)
    pub fn screen_cursor_position(&self) -> (u16, u16) {
        self.vt100_parser.screen().cursor_position()
    }

    /// First document row shown on screen
    pub fn top_line(&self) -> usize {
        self.editor.viewport().row_offset
    }

    /// Access the editor directly (for advanced testing)
    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    /// Access the editor mutably (for advanced testing)
    pub fn editor_mut(&mut self) -> &mut Editor {
        &mut self.editor
    }

    /// Check if editor wants to quit
    pub fn should_quit(&self) -> bool {
        self.editor.should_quit()
    }
}
