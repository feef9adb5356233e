// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! In-memory writers for exercising a console sink without a terminal.

// Attach.
mod failing_writer;
mod stdout_mock;

// Re-export.
pub use failing_writer::*;
pub use stdout_mock::*;
