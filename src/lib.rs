// Library interface for the kite editor
// This allows tests and the binary to share the editor components

pub mod config;
pub mod editor;
pub mod input;
pub mod model;
pub mod prompt;
pub mod search;
pub mod services;
pub mod status;
pub mod view;
