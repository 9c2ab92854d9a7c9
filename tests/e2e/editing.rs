//! E2E tests for inserting and deleting text

use crate::common::harness::{keys, EditorTestHarness};
use kite::view::Cursor;

/// Typing into an empty buffer creates the first row
#[test]
fn test_typing_into_empty_buffer() {
    let mut harness = EditorTestHarness::new(80, 24);
    harness.type_text("Hello");
    harness.assert_buffer_content("Hello");
    assert_eq!(harness.cursor(), Cursor::new(5, 0));

    harness.render();
    assert_eq!(harness.get_screen_row(0), "Hello");
    assert_eq!(harness.screen_cursor_position(), (0, 5));
    assert!(harness
        .get_status_bar()
        .starts_with("[No Name] - 1 lines (modified)"));
}

#[test]
fn test_enter_splits_line() {
    let mut harness = EditorTestHarness::new(80, 24);
    harness.type_text("helloworld");
    harness.send_bytes_repeat(keys::LEFT, 5);
    harness.send_bytes(keys::ENTER);

    harness.assert_buffer_content("hello\nworld");
    assert_eq!(harness.cursor(), Cursor::new(0, 1));
}

#[test]
fn test_line_feed_acts_as_enter() {
    let mut harness = EditorTestHarness::new(80, 24);
    harness.type_text("a\nb");
    harness.assert_buffer_content("a\nb");
}

/// Backspace at column 0 merges the row into the previous one
#[test]
fn test_backspace_joins_lines() {
    let mut harness = EditorTestHarness::new(80, 24);
    harness.type_text("foo\rbar");
    harness.send_bytes(keys::HOME);
    harness.send_bytes(keys::BACKSPACE);

    harness.assert_buffer_content("foobar");
    assert_eq!(harness.cursor(), Cursor::new(3, 0));
}

#[test]
fn test_backspace_and_ctrl_h_delete_previous_char() {
    let mut harness = EditorTestHarness::new(80, 24);
    harness.type_text("abcd");
    harness.send_bytes(keys::BACKSPACE);
    harness.send_ctrl(b'h');
    harness.assert_buffer_content("ab");
    assert_eq!(harness.cursor(), Cursor::new(2, 0));
}

#[test]
fn test_delete_key_removes_char_under_cursor() {
    let mut harness = EditorTestHarness::new(80, 24);
    harness.type_text("abc");
    harness.send_bytes(keys::HOME);
    harness.send_bytes(keys::DELETE);
    harness.assert_buffer_content("bc");
    assert_eq!(harness.cursor(), Cursor::new(0, 0));
}

#[test]
fn test_tabs_render_expanded() {
    let mut harness = EditorTestHarness::new(80, 24);
    harness.type_text("a\tb");
    harness.render();

    assert_eq!(harness.get_screen_row(0), "a       b");
    assert_eq!(harness.screen_cursor_position(), (0, 9));
}

#[test]
fn test_ctrl_l_and_escape_are_ignored() {
    let mut harness = EditorTestHarness::new(80, 24);
    harness.type_text("x");
    harness.send_ctrl(b'l');
    harness.send_bytes(keys::ESC);
    harness.assert_buffer_content("x");
    assert_eq!(harness.cursor(), Cursor::new(1, 0));
}

/// Unknown escape sequences decode to ESC and leave the buffer alone
#[test]
fn test_unknown_escape_sequence_is_ignored() {
    let mut harness = EditorTestHarness::new(80, 24);
    harness.type_text("x");
    harness.send_bytes(b"\x1b[Z");
    harness.assert_buffer_content("x");
}
