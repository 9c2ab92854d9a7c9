use super::*;
use crate::input::key::{ctrl_key, Key, BACKSPACE};
use crate::prompt::PromptOutcome;
use crate::search::SearchStep;
use crate::view::{Movement, Page};

const CTRL_F: u8 = ctrl_key(b'f');
const CTRL_H: u8 = ctrl_key(b'h');
const CTRL_L: u8 = ctrl_key(b'l');
const CTRL_Q: u8 = ctrl_key(b'q');
const CTRL_S: u8 = ctrl_key(b's');

impl Editor {
    /// Apply one key to the editor.
    ///
    /// While a prompt is open the key goes to the prompt. Otherwise it is
    /// dispatched as an editing, navigation or command key.
    pub fn handle_key(&mut self, key: Key) {
        tracing::trace!("handle_key: {:?}", key);

        if self.prompt.is_some() {
            self.handle_prompt_key(key);
            return;
        }

        match key {
            k if k.is_enter() => self.insert_newline(),
            Key::Char(CTRL_Q) => {
                self.quit();
                return;
            }
            Key::Char(CTRL_S) => self.save(),
            Key::Char(CTRL_F) => self.start_search(),
            Key::Home => self.cursor.line_start(),
            Key::End => self.cursor.line_end(&self.document),
            Key::Delete => {
                self.cursor.step(&self.document, Movement::Right);
                self.delete_char();
            }
            Key::Char(BACKSPACE) | Key::Char(CTRL_H) => self.delete_char(),
            Key::PageUp => self
                .viewport
                .page(&self.document, &mut self.cursor, Page::Up),
            Key::PageDown => self
                .viewport
                .page(&self.document, &mut self.cursor, Page::Down),
            Key::Up => self.cursor.step(&self.document, Movement::Up),
            Key::Down => self.cursor.step(&self.document, Movement::Down),
            Key::Left => self.cursor.step(&self.document, Movement::Left),
            Key::Right => self.cursor.step(&self.document, Movement::Right),
            Key::Char(CTRL_L) | Key::Esc => {}
            Key::Char(byte) => self.insert_char(byte),
        }

        self.quit_times_remaining = self.config.quit_times;
    }

    /// Quit, or count down while the document has unsaved changes
    fn quit(&mut self) {
        if self.document.is_dirty() {
            self.quit_times_remaining = self.quit_times_remaining.saturating_sub(1);
            if self.quit_times_remaining > 0 {
                tracing::debug!(
                    "Quit requested with unsaved changes, {} presses left",
                    self.quit_times_remaining
                );
                self.set_status_message(format!(
                    "WARNING!!! File has unsaved changes. Press Ctrl-Q {} more times to quit.",
                    self.quit_times_remaining
                ));
                return;
            }
        }
        tracing::info!("Quitting");
        self.should_quit = true;
    }

    /// Insert a byte at the cursor, adding a row first when the cursor is past the last row
    fn insert_char(&mut self, byte: u8) {
        if self.cursor.y == self.document.row_count() {
            self.document.insert_row(self.cursor.y, Vec::new());
        }
        self.document.insert_char(self.cursor.y, self.cursor.x, byte);
        self.cursor.x += 1;
    }

    fn insert_newline(&mut self) {
        if self.cursor.x == 0 {
            self.document.insert_row(self.cursor.y, Vec::new());
        } else {
            self.document.split_row(self.cursor.y, self.cursor.x);
        }
        self.cursor.y += 1;
        self.cursor.x = 0;
    }

    /// Delete the character before the cursor, joining with the previous row at column 0
    fn delete_char(&mut self) {
        if self.cursor.y == self.document.row_count() {
            return;
        }
        if self.cursor.x > 0 {
            self.document.delete_char(self.cursor.y, self.cursor.x - 1);
            self.cursor.x -= 1;
        } else if let Some(join_col) = self.document.join_with_previous(self.cursor.y) {
            self.cursor.y -= 1;
            self.cursor.x = join_col;
        }
    }

    fn handle_prompt_key(&mut self, key: Key) {
        let Some(prompt) = self.prompt.as_mut() else {
            return;
        };
        let outcome = prompt.handle_key(key);
        let prompt_type = prompt.prompt_type;

        if prompt_type == PromptType::Search {
            let query = prompt.input.clone();
            self.search_step(key, query.as_bytes());
        }

        match outcome {
            PromptOutcome::Pending => {}
            PromptOutcome::Cancelled => {
                self.prompt = None;
                match prompt_type {
                    PromptType::SaveFileAs => self.set_status_message("Save aborted"),
                    PromptType::Search => {
                        self.set_status_message("");
                        self.cancel_search();
                    }
                }
            }
            PromptOutcome::Accepted(input) => {
                self.prompt = None;
                self.set_status_message("");
                match prompt_type {
                    PromptType::SaveFileAs => self.save_as(PathBuf::from(input)),
                    PromptType::Search => {
                        tracing::debug!("Search for {:?} accepted at {:?}", input, self.cursor);
                        self.search = None;
                    }
                }
            }
        }
    }

    /// Feed a prompt key to the search session and jump to the next match
    fn search_step(&mut self, key: Key, query: &[u8]) {
        let Some(session) = self.search.as_mut() else {
            return;
        };
        if session.state.on_key(key) == SearchStep::Finish {
            return;
        }
        if let Some(found) = session.state.find(&self.document, query) {
            self.cursor = Cursor::new(found.col, found.row);
            self.viewport.force_rescroll(&self.document);
        }
    }
}
