// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Styled text trees. [`LogTextCtx`] is built by the caller, one per log line, and
//! rendered to colorized or raw text by [`crate::ConsoleSink`] or directly.

// Attach.
mod constructors;
mod log_text_ctx;
mod render;

// Re-export.
pub use constructors::*;
pub use log_text_ctx::*;
