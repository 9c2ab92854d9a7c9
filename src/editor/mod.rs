//! The editing engine
//!
//! [`Editor`] owns the document, cursor, viewport, prompt and status message
//! as one aggregate. The main loop renders a frame, reads one key and hands it
//! to [`Editor::handle_key`]; nothing else mutates editor state.

mod input;

use crate::config::EditorConfig;
use crate::model::Document;
use crate::prompt::{Prompt, PromptType};
use crate::search::SearchState;
use crate::services::fs::{FileSystem, StdFileSystem};
use crate::status::StatusMessage;
use crate::view::{Cursor, FrameRenderer, FrameView, Viewport};
use chrono::{DateTime, Utc};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Shown in the message bar at startup
pub const HELP_MESSAGE: &str = "HELP: Ctrl-S = save | Ctrl-Q = quit | Ctrl-F = find";

const SAVE_AS_PROMPT: &str = "Save as: {} (ESC to cancel)";
const SEARCH_PROMPT: &str = "Search: {} (Use ESC/Arrows/Enter)";

/// Search state plus the view to restore if the search is cancelled
#[derive(Debug, Clone)]
struct SearchSession {
    state: SearchState,
    saved_cursor: Cursor,
    saved_row_offset: usize,
    saved_col_offset: usize,
}

/// The editor state
pub struct Editor {
    document: Document,
    cursor: Cursor,
    viewport: Viewport,
    status: StatusMessage,

    /// Active prompt, if any; keys go to it instead of the document
    prompt: Option<Prompt>,

    /// Present while the search prompt is open
    search: Option<SearchSession>,

    /// Ctrl-Q presses still needed to quit a dirty document
    quit_times_remaining: u32,

    config: EditorConfig,
    fs: Arc<dyn FileSystem>,
    should_quit: bool,
}

impl Editor {
    /// Create an editor with an empty document for a terminal of `rows` x `cols`
    pub fn new(config: EditorConfig, rows: u16, cols: u16) -> Self {
        Self::with_file_system(config, rows, cols, Arc::new(StdFileSystem))
    }

    /// Create an editor that loads and saves through `fs`
    pub fn with_file_system(
        config: EditorConfig,
        rows: u16,
        cols: u16,
        fs: Arc<dyn FileSystem>,
    ) -> Self {
        tracing::debug!("Creating editor for {}x{} terminal", cols, rows);
        Self {
            document: Document::new(config.tab_stop),
            cursor: Cursor::default(),
            viewport: Viewport::for_terminal(rows, cols),
            status: StatusMessage::default(),
            prompt: None,
            search: None,
            quit_times_remaining: config.quit_times,
            config,
            fs,
            should_quit: false,
        }
    }

    /// Replace the document with the contents of `path`.
    ///
    /// A missing file opens an empty document that will be saved to `path`.
    /// Any other failure leaves an empty, unnamed document and reports the
    /// error in the message bar.
    pub fn open_file(&mut self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        let tab_stop = self.config.tab_stop;
        self.cursor = Cursor::default();
        self.viewport.row_offset = 0;
        self.viewport.col_offset = 0;

        match self.fs.load_lines(path) {
            Ok(lines) => {
                tracing::info!("Opened {} ({} lines)", path.display(), lines.len());
                self.document = Document::from_lines(lines, tab_stop);
                self.document.set_path(path);
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::info!("{} does not exist, starting a new file", path.display());
                self.document = Document::new(tab_stop);
                self.document.set_path(path);
                self.set_status_message("New file");
            }
            Err(e) => {
                tracing::warn!("Failed to open {}: {}", path.display(), e);
                self.document = Document::new(tab_stop);
                self.set_status_message(format!("Can't open {}: {}", path.display(), e));
            }
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn prompt(&self) -> Option<&Prompt> {
        self.prompt.as_ref()
    }

    pub fn is_prompting(&self) -> bool {
        self.prompt.is_some()
    }

    /// Check if the editor should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Current status message text, regardless of its age
    pub fn status_message(&self) -> &str {
        self.status.text()
    }

    /// Set a status message to display in the message bar
    pub fn set_status_message(&mut self, message: impl Into<String>) {
        self.status.set(message);
    }

    /// Text for the message bar at `now`: the prompt while one is open,
    /// otherwise the status message if it has not timed out.
    pub fn message_bar_text(&self, now: DateTime<Utc>) -> Option<String> {
        match &self.prompt {
            Some(prompt) => Some(prompt.display_text()),
            None => self
                .status
                .visible_at(now, self.config.message_timeout_secs)
                .map(str::to_string),
        }
    }

    /// Scroll the viewport to the cursor and write one frame to `out`
    pub fn render<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        self.viewport.scroll(&self.document, &self.cursor);
        let message = self.message_bar_text(Utc::now());
        FrameRenderer::render(
            out,
            &FrameView {
                document: &self.document,
                viewport: &self.viewport,
                cursor: &self.cursor,
                message: message.as_deref(),
            },
        )
    }

    /// Save the document, asking for a file name first if it has none
    pub fn save(&mut self) {
        if self.document.path().is_none() {
            tracing::debug!("Document has no path, prompting for one");
            self.prompt = Some(Prompt::new(SAVE_AS_PROMPT, PromptType::SaveFileAs));
            return;
        }
        self.write_to_disk();
    }

    fn write_to_disk(&mut self) {
        let Some(path) = self.document.path().map(Path::to_path_buf) else {
            return;
        };
        let buf = self.document.rows_to_text();
        match self.fs.save_bytes(&path, &buf) {
            Ok(written) => {
                tracing::info!("Saved {} bytes to {}", written, path.display());
                self.document.clear_dirty();
                self.set_status_message(format!("{written} bytes written to disk"));
            }
            Err(e) => {
                tracing::warn!("Failed to save {}: {}", path.display(), e);
                self.set_status_message(format!("Can't save! I/O error: {e}"));
            }
        }
    }

    fn save_as(&mut self, path: PathBuf) {
        tracing::info!("Saving as {}", path.display());
        self.document.set_path(path);
        self.write_to_disk();
    }

    fn start_search(&mut self) {
        tracing::debug!("Starting search at {:?}", self.cursor);
        self.search = Some(SearchSession {
            state: SearchState::new(),
            saved_cursor: self.cursor,
            saved_row_offset: self.viewport.row_offset,
            saved_col_offset: self.viewport.col_offset,
        });
        self.prompt = Some(Prompt::new(SEARCH_PROMPT, PromptType::Search));
    }

    fn cancel_search(&mut self) {
        if let Some(session) = self.search.take() {
            tracing::debug!("Search cancelled, restoring {:?}", session.saved_cursor);
            self.cursor = session.saved_cursor;
            self.viewport.row_offset = session.saved_row_offset;
            self.viewport.col_offset = session.saved_col_offset;
        }
    }
}
