// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Output side: the [`ConsoleSink`] that serializes writes to a stream, the
//! [`ColorLevel`] it renders for, its [`ConsoleConfig`] and errors, and escape code
//! helpers.

// Attach.
mod color_level;
mod console_config;
mod console_error;
mod console_sink;
mod escape_utils;

// Re-export.
pub use color_level::*;
pub use console_config::*;
pub use console_error::*;
pub use console_sink::*;
pub use escape_utils::*;
