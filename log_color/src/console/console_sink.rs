// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{ColorLevel, ConsoleConfig, ConsoleError, ConsoleResult, write_title_sequence};
use crate::{BufTextStorage, LINE_FEED_BYTES, LogTextCtx};
use std::{fmt::{Debug, Formatter},
          io::Write,
          sync::{Arc, Mutex as StdMutex, MutexGuard,
                 atomic::{AtomicU8, Ordering}}};

pub type SendOutputStream = dyn Write + Send;
pub type SafeOutputStream = Arc<StdMutex<SendOutputStream>>;

/// Writes [`LogTextCtx`] trees to an output stream, colorized for its [`ColorLevel`] or
/// raw when the level is [`ColorLevel::None`].
///
/// All byte emission goes through one lock, so the escape sequences and text of one
/// line are never interleaved with another line. The level is not guarded by that
/// lock: a level change is picked up by the next write, and a write that is already
/// rendering may still use the old level.
///
/// You can safely clone this struct. Clones share the stream and the level.
#[derive(Clone)]
pub struct ConsoleSink {
    resource: SafeOutputStream,
    /// Level used for the next write.
    level: Arc<AtomicU8>,
    /// Level that [`ConsoleSink::enable`] goes back to.
    enabled_level: Arc<AtomicU8>,
}

impl Debug for ConsoleSink {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsoleSink")
            .field("level", &self.level())
            .field("enabled_level", &self.enabled_level())
            .finish_non_exhaustive()
    }
}

mod construct_impl {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl ConsoleSink {
        #[must_use]
        pub fn new(
            stream: impl Write + Send + 'static,
            config: impl Into<ConsoleConfig>,
        ) -> Self {
            let config: ConsoleConfig = config.into();
            Self {
                resource: Arc::new(StdMutex::new(stream)),
                level: Arc::new(AtomicU8::new(config.initial_level().into())),
                enabled_level: Arc::new(AtomicU8::new(config.level.into())),
            }
        }

        #[must_use]
        pub fn stdout(config: impl Into<ConsoleConfig>) -> Self {
            Self::new(std::io::stdout(), config)
        }

        #[must_use]
        pub fn stderr(config: impl Into<ConsoleConfig>) -> Self {
            Self::new(std::io::stderr(), config)
        }
    }
}

mod level_impl {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    fn load(atomic: &AtomicU8) -> ColorLevel {
        ColorLevel::try_from(atomic.load(Ordering::Relaxed)).unwrap_or(ColorLevel::None)
    }

    impl ConsoleSink {
        #[must_use]
        pub fn level(&self) -> ColorLevel { load(&self.level) }

        #[must_use]
        pub fn enabled_level(&self) -> ColorLevel { load(&self.enabled_level) }

        #[must_use]
        pub fn is_enabled(&self) -> bool { self.level().supports_color() }

        /// Switch to the configured (or last forced) level.
        pub fn enable(&self) {
            let level = self.enabled_level();
            self.level.store(level.into(), Ordering::Relaxed);
            tracing::debug!(message = "Console color enabled", level = %level);
        }

        /// Write raw text until [`ConsoleSink::enable`] is called.
        pub fn disable(&self) {
            self.level.store(ColorLevel::None.into(), Ordering::Relaxed);
            tracing::debug!(message = "Console color disabled");
        }

        /// Use `level` from now on, also after a later [`ConsoleSink::disable`] +
        /// [`ConsoleSink::enable`]. Returns the level that was in use.
        pub fn force_set(&self, level: ColorLevel) -> ColorLevel {
            self.enabled_level.store(level.into(), Ordering::Relaxed);
            let previous = self.level.swap(level.into(), Ordering::Relaxed);
            let previous = ColorLevel::try_from(previous).unwrap_or(ColorLevel::None);
            tracing::debug!(
                message = "Console color level forced",
                level = %level,
                previous = %previous
            );
            previous
        }
    }
}

mod write_impl {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl ConsoleSink {
        /// Render `node` for the current level and write it. Returns the number of bytes
        /// written, `0` for a node without text (the stream isn't touched then).
        ///
        /// With `exclusive` the lock is held for the whole call, so the level read,
        /// the rendering and the write happen as one step relative to other exclusive
        /// writes and [`ConsoleSink::println`]. Without it the node is rendered first
        /// and the lock is only held while the bytes are written.
        ///
        /// # Errors
        ///
        /// [`ConsoleError::Write`] if the stream fails, [`ConsoleError::LockPoisoned`]
        /// if a writer panicked while holding the lock.
        pub fn write(&self, node: &LogTextCtx, exclusive: bool) -> ConsoleResult<usize> {
            if exclusive {
                let mut stream = self.lock()?;
                let buffer = self.render(node);
                emit(&mut *stream, buffer.as_bytes(), self.level())
            } else {
                let buffer = self.render(node);
                if buffer.is_empty() {
                    return Ok(0);
                }
                let mut stream = self.lock()?;
                emit(&mut *stream, buffer.as_bytes(), self.level())
            }
        }

        /// [`ConsoleSink::write`] followed by a line feed, always under the lock.
        ///
        /// # Errors
        ///
        /// Same as [`ConsoleSink::write`].
        pub fn println(&self, node: &LogTextCtx) -> ConsoleResult<usize> {
            let mut stream = self.lock()?;
            let mut buffer = self.render(node).into_bytes();
            buffer.extend_from_slice(LINE_FEED_BYTES);
            emit(&mut *stream, &buffer, self.level())
        }

        /// Set the terminal window title. Does nothing (returns `0`) when color is
        /// disabled, since the stream is then probably not a terminal.
        ///
        /// # Errors
        ///
        /// Same as [`ConsoleSink::write`].
        pub fn set_title(&self, title: impl AsRef<str>) -> ConsoleResult<usize> {
            if !self.is_enabled() {
                return Ok(0);
            }
            let mut buffer = BufTextStorage::new();
            write_title_sequence(&mut buffer, title.as_ref());
            let mut stream = self.lock()?;
            emit(&mut *stream, buffer.as_bytes(), self.level())
        }

        /// # Errors
        ///
        /// Same as [`ConsoleSink::write`].
        pub fn flush(&self) -> ConsoleResult<()> {
            let mut stream = self.lock()?;
            stream.flush().map_err(on_write_error)
        }

        fn render(&self, node: &LogTextCtx) -> BufTextStorage {
            let mut buffer = BufTextStorage::new();
            node.write_for_level(&mut buffer, self.level());
            buffer
        }

        fn lock(&self) -> ConsoleResult<MutexGuard<'_, SendOutputStream>> {
            self.resource.lock().map_err(|_| ConsoleError::LockPoisoned)
        }
    }

    fn emit(
        stream: &mut SendOutputStream,
        bytes: &[u8],
        level: ColorLevel,
    ) -> ConsoleResult<usize> {
        if bytes.is_empty() {
            return Ok(0);
        }
        stream
            .write_all(bytes)
            .and_then(|()| stream.flush())
            .map_err(on_write_error)?;
        tracing::trace!(message = "Console write", bytes = bytes.len(), level = %level);
        Ok(bytes.len())
    }

    fn on_write_error(error: std::io::Error) -> ConsoleError {
        tracing::warn!(message = "Console write failed", error = %error);
        ConsoleError::Write(error)
    }
}
