//! Transient message shown in the message bar

use chrono::{DateTime, Utc};

/// A status message with the time it was set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    text: String,
    set_at: DateTime<Utc>,
}

impl Default for StatusMessage {
    fn default() -> Self {
        Self {
            text: String::new(),
            set_at: DateTime::<Utc>::MIN_UTC,
        }
    }
}

impl StatusMessage {
    /// Replace the message, stamping it with the current time
    pub fn set(&mut self, text: impl Into<String>) {
        self.set_with_time(text, Utc::now());
    }

    pub fn set_with_time(&mut self, text: impl Into<String>, now: DateTime<Utc>) {
        self.text = text.into();
        self.set_at = now;
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// The message if it was set less than `timeout_secs` seconds before `now`
    pub fn visible_at(&self, now: DateTime<Utc>, timeout_secs: u64) -> Option<&str> {
        if self.text.is_empty() {
            return None;
        }
        let age = now.signed_duration_since(self.set_at).num_seconds();
        let timeout = i64::try_from(timeout_secs).unwrap_or(i64::MAX);
        (age < timeout).then_some(self.text.as_str())
    }
}
