/// Logical key events produced by the key decoder.
///
/// Plain bytes (including control codes 0-31 and Backspace 127) are reported
/// as [`Key::Char`]. Multi-byte escape sequences for navigation keys decode to
/// the named variants; an ESC that does not start a recognised sequence is
/// reported as [`Key::Esc`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// A literal byte as read from the terminal
    Char(u8),
    Esc,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    Delete,
}

/// The ESC byte that introduces terminal escape sequences
pub const ESC: u8 = 0x1b;

/// Carriage return, sent by the Enter key in raw mode
pub const ENTER: u8 = b'\r';

/// Line feed (Ctrl-J)
pub const LINE_FEED: u8 = b'\n';

/// Sent by the Backspace key on most terminals
pub const BACKSPACE: u8 = 127;

/// The control code produced by Ctrl+`letter`
pub const fn ctrl_key(letter: u8) -> u8 {
    letter & 0x1f
}

impl Key {
    /// The key produced by Ctrl+`letter`
    pub const fn ctrl(letter: u8) -> Self {
        Key::Char(ctrl_key(letter))
    }

    pub fn is_enter(self) -> bool {
        matches!(self, Key::Char(ENTER) | Key::Char(LINE_FEED))
    }

    /// Keys that erase backwards: Backspace, Ctrl-H and Delete
    pub fn is_erase(self) -> bool {
        matches!(self, Key::Delete) || self == Key::Char(BACKSPACE) || self == Key::ctrl(b'h')
    }

    /// Printable ASCII, as accepted by the prompt line editor
    pub fn printable(self) -> Option<u8> {
        match self {
            Key::Char(byte) if (0x20..0x7f).contains(&byte) => Some(byte),
            _ => None,
        }
    }
}
