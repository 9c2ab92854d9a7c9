//! File persistence: loading a file as lines and writing a serialized document

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

/// Storage used by the editor to load and save documents
pub trait FileSystem: Send + Sync {
    /// Read a file and split it into lines without their line terminators
    fn load_lines(&self, path: &Path) -> io::Result<Vec<Vec<u8>>>;

    /// Replace the contents of `path` with `buf`, returning the number of bytes written
    fn save_bytes(&self, path: &Path, buf: &[u8]) -> io::Result<usize>;
}

/// The local filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct StdFileSystem;

impl FileSystem for StdFileSystem {
    fn load_lines(&self, path: &Path) -> io::Result<Vec<Vec<u8>>> {
        let data = std::fs::read(path)?;
        Ok(split_lines(&data))
    }

    fn save_bytes(&self, path: &Path, buf: &[u8]) -> io::Result<usize> {
        let mut options = OpenOptions::new();
        options.read(true).write(true).create(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o644);
        }

        let mut file = options.open(path)?;
        file.set_len(buf.len() as u64)?;
        file.write_all(buf)?;
        file.flush()?;
        Ok(buf.len())
    }
}

/// Split file content into lines.
///
/// A trailing newline does not start an extra empty line, and any `\r` left at
/// the end of a line (CRLF files) is dropped.
pub fn split_lines(data: &[u8]) -> Vec<Vec<u8>> {
    if data.is_empty() {
        return Vec::new();
    }
    let body = data.strip_suffix(b"\n").unwrap_or(data);
    body.split(|&b| b == b'\n')
        .map(|line| {
            let mut end = line.len();
            while end > 0 && line[end - 1] == b'\r' {
                end -= 1;
            }
            line[..end].to_vec()
        })
        .collect()
}
