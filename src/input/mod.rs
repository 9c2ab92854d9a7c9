//! Keyboard input: logical keys and the escape-sequence decoder

pub mod decoder;
pub mod key;

pub use decoder::{ByteSource, KeyDecoder};
pub use key::{ctrl_key, Key};
