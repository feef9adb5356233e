// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{io::{Result, Write},
          sync::{Arc, Mutex as StdMutex, MutexGuard, PoisonError}};
use strip_ansi_escapes::strip;

/// You can safely clone this struct, since it only contains an `Arc<StdMutex<Vec<u8>>>`.
/// The inner `buffer` will not be cloned, just the [Arc] will be cloned. Hand one
/// clone to the writer under test and read the output from another.
#[derive(Debug, Clone, Default)]
pub struct StdoutMock {
    pub buffer: Arc<StdMutex<Vec<u8>>>,
}

impl StdoutMock {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// A panic in a thread that was writing doesn't hide what it already wrote.
    fn lock_buffer(&self) -> MutexGuard<'_, Vec<u8>> {
        self.buffer.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[must_use]
    pub fn get_copy_of_buffer(&self) -> Vec<u8> { self.lock_buffer().clone() }

    #[must_use]
    pub fn get_copy_of_buffer_as_string(&self) -> String {
        String::from_utf8_lossy(&self.lock_buffer()).into_owned()
    }

    #[must_use]
    pub fn get_copy_of_buffer_as_string_strip_ansi(&self) -> String {
        let stripped = strip(self.lock_buffer().as_slice());
        String::from_utf8_lossy(&stripped).into_owned()
    }
}

impl Write for StdoutMock {
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        self.lock_buffer().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<()> { Ok(()) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_stdout_mock_no_strip_ansi() {
        let mut stdout_mock = StdoutMock::default();
        // Points to the same inner value as `stdout_mock`.
        let stdout_mock_clone = stdout_mock.clone();

        let normal_text = "hello world";

        stdout_mock.write_all(normal_text.as_bytes()).unwrap();
        stdout_mock.flush().unwrap();

        assert_eq!(stdout_mock.get_copy_of_buffer_as_string(), normal_text);
        assert_eq!(stdout_mock_clone.get_copy_of_buffer_as_string(), normal_text);
    }

    #[test]
    fn test_stdout_mock_strip_ansi() {
        let mut stdout_mock = StdoutMock::default();
        let stdout_mock_clone = stdout_mock.clone();

        let normal_text = "hello world";
        let red_text = format!("\x1b[31m{normal_text}\x1b[0m"); // Resets color after.

        stdout_mock.write_all(red_text.as_bytes()).unwrap();

        assert_eq!(
            stdout_mock_clone.get_copy_of_buffer_as_string_strip_ansi(),
            normal_text
        );
        assert_eq!(stdout_mock.get_copy_of_buffer(), red_text.as_bytes());
    }
}
