//! Frame rendering
//!
//! A frame is written as one batch of bytes: hide cursor, home, text rows,
//! status bar, message bar, show cursor, and finally the cursor position.
//! Nothing here mutates editor state; the caller scrolls the viewport first.

use super::viewport::{Cursor, Viewport};
use crate::model::Document;
use crossterm::style::{Attribute, Print, SetAttribute};
use crossterm::terminal::{Clear, ClearType};
use crossterm::{cursor, queue};
use std::io::{self, Write};

/// Read-only view of everything a frame shows
#[derive(Debug, Clone, Copy)]
pub struct FrameView<'a> {
    pub document: &'a Document,
    pub viewport: &'a Viewport,
    pub cursor: &'a Cursor,
    /// Message bar text, if any is currently visible
    pub message: Option<&'a str>,
}

/// Renders full frames as ANSI escape sequences
pub struct FrameRenderer;

impl FrameRenderer {
    /// Write one complete frame to `out`
    pub fn render<W: Write>(out: &mut W, view: &FrameView<'_>) -> io::Result<()> {
        queue!(out, cursor::Hide, cursor::MoveTo(0, 0))?;

        Self::render_rows(out, view)?;
        Self::render_status_bar(out, view)?;
        Self::render_message_bar(out, view)?;

        let (row, col) = view.viewport.cursor_screen_position(view.cursor);
        queue!(
            out,
            cursor::Show,
            cursor::MoveTo(to_u16(col), to_u16(row))
        )?;
        Ok(())
    }

    /// Render the text area, one screen row at a time
    fn render_rows<W: Write>(out: &mut W, view: &FrameView<'_>) -> io::Result<()> {
        let doc = view.document;
        let vp = view.viewport;

        for y in 0..vp.screen_rows {
            let file_row = y + vp.row_offset;
            match doc.row(file_row) {
                Some(row) => {
                    let render = row.render();
                    let start = vp.col_offset.min(render.len());
                    let end = (vp.col_offset + vp.screen_cols).min(render.len());
                    out.write_all(&render[start..end])?;
                }
                None if doc.is_empty() && y == vp.screen_rows / 3 => {
                    Self::render_welcome(out, vp.screen_cols)?;
                }
                None => out.write_all(b"~")?,
            }
            queue!(out, Clear(ClearType::UntilNewLine), Print("\r\n"))?;
        }
        Ok(())
    }

    fn render_welcome<W: Write>(out: &mut W, cols: usize) -> io::Result<()> {
        let welcome = format!("Kite editor -- version {}", env!("CARGO_PKG_VERSION"));
        let len = welcome.len().min(cols);
        let mut padding = (cols - len) / 2;
        if padding > 0 {
            out.write_all(b"~")?;
            padding -= 1;
        }
        out.write_all(" ".repeat(padding).as_bytes())?;
        out.write_all(&welcome.as_bytes()[..len])
    }

    /// Render the inverse-video status bar
    fn render_status_bar<W: Write>(out: &mut W, view: &FrameView<'_>) -> io::Result<()> {
        let doc = view.document;
        let cols = view.viewport.screen_cols;

        let (left, right) = status_line(doc, view.cursor);
        let left: String = left.chars().take(cols).collect();
        let mut len = left.chars().count();

        queue!(out, SetAttribute(Attribute::Reverse), Print(&left))?;
        while len < cols {
            if cols - len == right.len() {
                queue!(out, Print(&right))?;
                break;
            }
            queue!(out, Print(" "))?;
            len += 1;
        }
        queue!(out, SetAttribute(Attribute::Reset), Print("\r\n"))
    }

    fn render_message_bar<W: Write>(out: &mut W, view: &FrameView<'_>) -> io::Result<()> {
        queue!(out, Clear(ClearType::UntilNewLine))?;
        if let Some(message) = view.message {
            let shown: String = message.chars().take(view.viewport.screen_cols).collect();
            queue!(out, Print(shown))?;
        }
        Ok(())
    }
}

/// Left and right halves of the status bar
pub fn status_line(doc: &Document, cursor: &Cursor) -> (String, String) {
    let name = doc
        .path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "[No Name]".to_string());
    let left = format!(
        "{:.20} - {} lines {}",
        name,
        doc.row_count(),
        if doc.is_dirty() { "(modified)" } else { "" }
    );
    let right = format!("{}/{}", cursor.y + 1, doc.row_count());
    (left, right)
}

fn to_u16(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}
