//! Non-blocking byte reads from the controlling terminal

use crate::input::ByteSource;
use nix::errno::Errno;
use nix::poll::{poll, PollFd, PollFlags, PollTimeout};
use std::fs::File;
use std::io::{self, Read};
use std::os::fd::AsFd;

/// Reads single bytes from stdin, waiting at most `timeout_ms` for each.
///
/// The descriptor is duplicated and read without buffering, so bytes that
/// belong to one escape sequence are never hidden from `poll` in a userspace
/// buffer.
#[derive(Debug)]
pub struct StdinBytes {
    tty: File,
    timeout_ms: u16,
}

impl StdinBytes {
    pub fn new(timeout_ms: u16) -> io::Result<Self> {
        let fd = io::stdin().as_fd().try_clone_to_owned()?;
        Ok(Self {
            tty: File::from(fd),
            timeout_ms,
        })
    }
}

impl ByteSource for StdinBytes {
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        let ready = {
            let mut fds = [PollFd::new(self.tty.as_fd(), PollFlags::POLLIN)];
            match poll(&mut fds, PollTimeout::from(self.timeout_ms)) {
                Ok(n) => n > 0,
                Err(Errno::EINTR) => false,
                Err(e) => return Err(e.into()),
            }
        };
        if !ready {
            return Ok(None);
        }

        let mut buf = [0u8; 1];
        match self.tty.read(&mut buf) {
            Ok(1) => Ok(Some(buf[0])),
            Ok(_) => Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed")),
            Err(e) if matches!(e.kind(), io::ErrorKind::Interrupted | io::ErrorKind::WouldBlock) => {
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}
