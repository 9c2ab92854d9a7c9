//! Prompt/minibuffer line editor shown in the message bar

use crate::input::Key;

/// Type of prompt - determines what action to take when user confirms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptType {
    /// Choose a path for an unnamed document, then save
    SaveFileAs,
    /// Incremental search
    Search,
}

/// Result of feeding one key to a prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptOutcome {
    /// Still editing
    Pending,
    /// User pressed Escape
    Cancelled,
    /// User pressed Enter with non-empty input
    Accepted(String),
}

/// Prompt state for the minibuffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    /// Message template; the first `{}` is replaced by the current input
    pub message: String,
    /// User's current input
    pub input: String,
    /// What to do when user confirms
    pub prompt_type: PromptType,
}

impl Prompt {
    /// Create a new prompt
    pub fn new(message: impl Into<String>, prompt_type: PromptType) -> Self {
        Self {
            message: message.into(),
            input: String::new(),
            prompt_type,
        }
    }

    /// Text shown in the message bar
    pub fn display_text(&self) -> String {
        self.message.replacen("{}", &self.input, 1)
    }

    /// Apply one key to the input line
    pub fn handle_key(&mut self, key: Key) -> PromptOutcome {
        if key.is_erase() {
            self.input.pop();
        } else if key == Key::Esc {
            return PromptOutcome::Cancelled;
        } else if key.is_enter() {
            if !self.input.is_empty() {
                return PromptOutcome::Accepted(self.input.clone());
            }
        } else if let Some(byte) = key.printable() {
            self.input.push(char::from(byte));
        }
        PromptOutcome::Pending
    }
}
