// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::{Error, ErrorKind, Result, Write};

/// A writer whose every write and flush fails with [`ErrorKind::BrokenPipe`], like a
/// stdout piped into a process that already exited.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingWriter;

impl Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> Result<usize> {
        Err(Error::new(ErrorKind::BrokenPipe, "output stream is closed"))
    }

    fn flush(&mut self) -> Result<()> {
        Err(Error::new(ErrorKind::BrokenPipe, "output stream is closed"))
    }
}
