//! Turns the raw terminal byte stream into logical key events.
//!
//! Recognised sequences:
//!
//! | bytes            | key                          |
//! |------------------|------------------------------|
//! | `ESC [ 1 ~`, `ESC [ 7 ~` | Home                 |
//! | `ESC [ 3 ~`      | Delete                       |
//! | `ESC [ 4 ~`, `ESC [ 8 ~` | End                  |
//! | `ESC [ 5 ~`      | PageUp                       |
//! | `ESC [ 6 ~`      | PageDown                     |
//! | `ESC [ A/B/C/D`  | Up/Down/Right/Left           |
//! | `ESC [ H/F`, `ESC O H/F` | Home/End             |
//!
//! Each call to [`KeyDecoder::next_key`] is self-contained: nothing is buffered
//! between calls, so an escape sequence split across two read attempts decodes
//! as a literal ESC followed by plain characters.

use super::key::{Key, ESC};
use std::collections::VecDeque;
use std::io;

/// Source of single input bytes.
///
/// `read_byte` returns `Ok(None)` when no byte arrived within the source's
/// timeout; that is not an error.
pub trait ByteSource {
    fn read_byte(&mut self) -> io::Result<Option<u8>>;
}

/// An in-memory queue of bytes, drained front to back
impl ByteSource for VecDeque<u8> {
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        Ok(self.pop_front())
    }
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        (**self).read_byte()
    }
}

/// Decodes key events from a [`ByteSource`]
#[derive(Debug)]
pub struct KeyDecoder<S> {
    source: S,
}

impl<S: ByteSource> KeyDecoder<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Read one key event.
    ///
    /// Returns `Ok(None)` if no byte is available yet.
    pub fn next_key(&mut self) -> io::Result<Option<Key>> {
        let Some(byte) = self.source.read_byte()? else {
            return Ok(None);
        };
        if byte != ESC {
            return Ok(Some(Key::Char(byte)));
        }
        self.decode_escape().map(Some)
    }

    fn decode_escape(&mut self) -> io::Result<Key> {
        let Some(first) = self.source.read_byte()? else {
            return Ok(Key::Esc);
        };
        let Some(second) = self.source.read_byte()? else {
            return Ok(Key::Esc);
        };

        let key = match (first, second) {
            (b'[', digit @ b'0'..=b'9') => {
                let Some(third) = self.source.read_byte()? else {
                    return Ok(Key::Esc);
                };
                if third == b'~' {
                    numeric_key(digit)
                } else {
                    Key::Esc
                }
            }
            (b'[', b'A') => Key::Up,
            (b'[', b'B') => Key::Down,
            (b'[', b'C') => Key::Right,
            (b'[', b'D') => Key::Left,
            (b'[', b'H') | (b'O', b'H') => Key::Home,
            (b'[', b'F') | (b'O', b'F') => Key::End,
            _ => Key::Esc,
        };
        if key == Key::Esc {
            tracing::trace!(
                "Unrecognised escape sequence {:?}",
                [first as char, second as char]
            );
        }
        Ok(key)
    }
}

fn numeric_key(digit: u8) -> Key {
    match digit {
        b'1' | b'7' => Key::Home,
        b'3' => Key::Delete,
        b'4' | b'8' => Key::End,
        b'5' => Key::PageUp,
        b'6' => Key::PageDown,
        _ => Key::Esc,
    }
}
