//! Collaborators at the edge of the editor: files, terminal, input bytes, logging

pub mod fs;
pub mod terminal;
pub mod tracing_setup;
pub mod tty;
