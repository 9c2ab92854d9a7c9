//! E2E tests for the frame layout: text rows, status bar and message bar

use crate::common::harness::EditorTestHarness;
use kite::config::EditorConfig;
use kite::editor::HELP_MESSAGE;
use tempfile::TempDir;

#[test]
fn test_empty_buffer_shows_welcome_banner() {
    let mut harness = EditorTestHarness::new(80, 24);
    harness.render();

    let welcome = format!("Kite editor -- version {}", env!("CARGO_PKG_VERSION"));
    assert_eq!(harness.get_screen_row(0), "~");
    // A third of the way down the 22 text rows
    let banner = harness.get_screen_row(7);
    assert!(banner.starts_with('~'));
    assert!(banner.trim_start_matches(['~', ' ']).starts_with(&welcome));
    assert_eq!(harness.get_screen_row(21), "~");
}

#[test]
fn test_file_content_hides_banner() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("a.txt");
    std::fs::write(&file_path, "first\nsecond\n").unwrap();

    let mut harness = EditorTestHarness::new(80, 24);
    harness.open_file(&file_path);
    harness.render();

    assert_eq!(harness.get_screen_row(0), "first");
    assert_eq!(harness.get_screen_row(1), "second");
    assert_eq!(harness.get_screen_row(2), "~");
    harness.assert_screen_not_contains("Kite editor");
}

#[test]
fn test_status_bar_layout() {
    let mut harness = EditorTestHarness::new(80, 24);
    harness.type_text("a\rb");
    harness.render();

    let status = harness.get_status_bar();
    assert!(status.starts_with("[No Name] - 2 lines (modified)"));
    assert!(status.ends_with("2/2"));
    assert_eq!(status.len(), 80);
    assert!(harness.is_inverse(22, 0));
    assert!(harness.is_inverse(22, 79));
    assert!(!harness.is_inverse(0, 0));
}

#[test]
fn test_status_bar_truncates_file_name() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir
        .path()
        .join("a_file_with_a_rather_long_name.txt");
    std::fs::write(&file_path, "x\n").unwrap();

    let mut harness = EditorTestHarness::new(80, 24);
    harness.open_file(&file_path);
    harness.render();

    let shown: String = file_path.display().to_string().chars().take(20).collect();
    assert!(harness
        .get_status_bar()
        .starts_with(&format!("{shown} - 1 lines")));
}

#[test]
fn test_help_message_in_message_bar() {
    let mut harness = EditorTestHarness::new(80, 24);
    harness.editor_mut().set_status_message(HELP_MESSAGE);
    harness.render();
    assert_eq!(harness.get_message_bar(), HELP_MESSAGE);
}

#[test]
fn test_message_bar_clipped_to_width() {
    let mut harness = EditorTestHarness::new(20, 6);
    harness.editor_mut().set_status_message(HELP_MESSAGE);
    harness.render();
    assert_eq!(harness.get_message_bar().trim_end(), "HELP: Ctrl-S = save");
}

#[test]
fn test_custom_tab_stop() {
    let config = EditorConfig {
        tab_stop: 4,
        ..EditorConfig::default()
    };
    let mut harness = EditorTestHarness::with_config(80, 24, config);
    harness.type_text("\tx");
    harness.render();
    assert_eq!(harness.get_screen_row(0), "    x");
    assert_eq!(harness.screen_cursor_position(), (0, 5));
}
