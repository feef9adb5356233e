// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Errors from writing through a [`crate::ConsoleSink`]. Styles and trees never fail to
/// render, so every failure comes from the output stream or its lock.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum ConsoleError {
    /// The output stream rejected a write or a flush.
    #[error("Failed to write to the console output stream")]
    #[diagnostic(
        code(r3bl_log_color::console::write),
        help("Check that the stream (stdout, stderr, file or pipe) is still open")
    )]
    Write(#[source] std::io::Error),

    /// Another thread panicked while holding the stream lock.
    #[error("Console output stream mutex poisoned")]
    #[diagnostic(
        code(r3bl_log_color::console::lock_poisoned),
        help(
            "A prior thread panicked in the middle of a write. \
             Output from that write may be partial."
        )
    )]
    LockPoisoned,
}

pub type ConsoleResult<T> = Result<T, ConsoleError>;
