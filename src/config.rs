use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Editor behavior settings (tab stop, quit confirmation, timeouts)
    #[serde(default)]
    pub editor: EditorConfig,
}

/// Editor behavior configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Width of a tab stop in columns
    #[serde(default = "default_tab_stop")]
    pub tab_stop: usize,

    /// How many times Ctrl-Q must be pressed to quit with unsaved changes
    #[serde(default = "default_quit_times")]
    pub quit_times: u32,

    /// Seconds a status message stays visible
    #[serde(default = "default_message_timeout")]
    pub message_timeout_secs: u64,

    /// Milliseconds to wait for an input byte before redrawing
    #[serde(default = "default_poll_timeout")]
    pub poll_timeout_ms: u16,
}

/// Widest tab stop the row model accepts
pub const MAX_TAB_STOP: usize = 64;

fn default_tab_stop() -> usize {
    8
}

fn default_quit_times() -> u32 {
    3
}

fn default_message_timeout() -> u64 {
    5
}

fn default_poll_timeout() -> u16 {
    100
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            tab_stop: default_tab_stop(),
            quit_times: default_quit_times(),
            message_timeout_secs: default_message_timeout(),
            poll_timeout_ms: default_poll_timeout(),
        }
    }
}

impl Config {
    /// The default configuration file location
    pub fn default_config_path() -> Option<std::path::PathBuf> {
        dirs::config_dir().map(|d| d.join("kite").join("config.json"))
    }

    /// Load configuration from the default location, falling back to defaults if not found
    pub fn load_or_default() -> Self {
        if let Some(config_path) = Self::default_config_path() {
            if config_path.exists() {
                match Self::load_from_file(&config_path) {
                    Ok(config) => return config,
                    Err(e) => {
                        tracing::warn!(
                            "Failed to load config from {}: {}, using defaults",
                            config_path.display(),
                            e
                        );
                    }
                }
            }
        }
        Self::default()
    }

    /// Load configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::IoError(e.to_string()))?;

        let config: Config =
            serde_json::from_str(&contents).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;

        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::SerializeError(e.to_string()))?;

        std::fs::write(path.as_ref(), contents).map_err(|e| ConfigError::IoError(e.to_string()))?;

        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_TAB_STOP).contains(&self.editor.tab_stop) {
            return Err(ConfigError::ValidationError(format!(
                "tab_stop must be between 1 and {MAX_TAB_STOP}"
            )));
        }

        if self.editor.poll_timeout_ms == 0 {
            return Err(ConfigError::ValidationError(
                "poll_timeout_ms must be greater than 0".to_string(),
            ));
        }

        if self.editor.quit_times == 0 {
            return Err(ConfigError::ValidationError(
                "quit_times must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// Configuration error types
#[derive(Debug)]
pub enum ConfigError {
    IoError(String),
    ParseError(String),
    SerializeError(String),
    ValidationError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(msg) => write!(f, "IO error: {msg}"),
            ConfigError::ParseError(msg) => write!(f, "Parse error: {msg}"),
            ConfigError::SerializeError(msg) => write!(f, "Serialize error: {msg}"),
            ConfigError::ValidationError(msg) => write!(f, "Validation error: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}
