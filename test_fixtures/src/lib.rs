// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Test fixtures for `r3bl_log_color`. Only used as a dev-dependency.

// https://github.com/rust-lang/rust-clippy
// https://rust-lang.github.io/rust-clippy/master/index.html
#![warn(clippy::all)]
#![warn(rust_2018_idioms)]

// Attach.
pub mod output_device_fixtures;

// Re-export.
pub use output_device_fixtures::*;
