//! Terminal mode and size handling
//!
//! [`TerminalModes`] owns raw mode for as long as it is alive and restores the
//! original mode (and clears the screen) when dropped, including on error
//! paths out of `main`.

use crate::input::ByteSource;
use crossterm::{cursor, queue, terminal};
use std::io::{self, Write};

/// Raw mode guard
#[derive(Debug)]
pub struct TerminalModes {
    raw_mode: bool,
}

impl TerminalModes {
    /// Switch the terminal to raw mode
    pub fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        tracing::debug!("Enabled raw mode");
        Ok(Self { raw_mode: true })
    }

    /// Clear the screen and restore the original terminal mode
    pub fn restore(&mut self) -> io::Result<()> {
        if !self.raw_mode {
            return Ok(());
        }
        let mut stdout = io::stdout();
        clear_screen(&mut stdout)?;
        stdout.flush()?;
        terminal::disable_raw_mode()?;
        self.raw_mode = false;
        tracing::debug!("Restored terminal mode");
        Ok(())
    }
}

impl Drop for TerminalModes {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            tracing::error!("Failed to restore terminal: {}", e);
        }
    }
}

/// Erase the whole screen and home the cursor
pub fn clear_screen<W: Write>(out: &mut W) -> io::Result<()> {
    queue!(
        out,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0)
    )
}

/// Terminal size as `(rows, cols)`.
///
/// Asks the OS first; if that fails or reports zero columns, moves the cursor
/// to the bottom-right corner and reads back its position.
pub fn window_size<S, W>(input: &mut S, output: &mut W) -> io::Result<(u16, u16)>
where
    S: ByteSource + ?Sized,
    W: Write,
{
    match terminal::size() {
        Ok((cols, rows)) if cols > 0 => return Ok((rows, cols)),
        Ok(_) => tracing::warn!("Terminal reported zero columns, probing cursor position"),
        Err(e) => tracing::warn!("Terminal size query failed ({}), probing cursor position", e),
    }

    output.write_all(b"\x1b[999C\x1b[999B")?;
    cursor_position(input, output)
}

/// Ask the terminal for the cursor position (1-based `(row, col)`)
pub fn cursor_position<S, W>(input: &mut S, output: &mut W) -> io::Result<(u16, u16)>
where
    S: ByteSource + ?Sized,
    W: Write,
{
    output.write_all(b"\x1b[6n")?;
    output.flush()?;

    let mut reply = Vec::with_capacity(32);
    while reply.len() < 31 {
        match input.read_byte()? {
            Some(b'R') => break,
            Some(byte) => reply.push(byte),
            None => break,
        }
    }

    parse_cursor_report(&reply).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!(
                "unexpected cursor position report {:?}",
                String::from_utf8_lossy(&reply)
            ),
        )
    })
}

/// Parse `ESC [ rows ; cols` (with or without the trailing `R`)
pub fn parse_cursor_report(reply: &[u8]) -> Option<(u16, u16)> {
    let body = reply.strip_prefix(b"\x1b[")?;
    let body = body.strip_suffix(b"R").unwrap_or(body);
    let body = std::str::from_utf8(body).ok()?;
    let (rows, cols) = body.split_once(';')?;
    Some((rows.trim().parse().ok()?, cols.trim().parse().ok()?))
}
