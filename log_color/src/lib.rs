// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # `r3bl_log_color`
//!
//! Styled log text for terminals. This crate models a text style as a [`Color`], which
//! is a pair of:
//! - a [`ColorIdentity`]: foreground and background slots in one of three tiers, 16
//!   color ([`BasicColorIdentity`]), 256 color ([`HundredColorIdentity`]) or 24-bit
//!   truecolor ([`RgbColorIdentity`]), or the explicit "no color" [`ColorIdentity::Empty`].
//! - a [`ColorOptions`] flag set: bold, faint, italic, underline, blink, inverse,
//!   conceal, crossed-out, their negations and a reset flag.
//!
//! Styles are attached to the nodes of a [`LogTextCtx`] tree. When a tree is rendered,
//! each leaf's own style is merged on top of the ambient style (see [`Color::merge`])
//! and the leaf's text is wrapped in SGR escape sequences.
//!
//! A [`ConsoleSink`] owns an output stream and a [`ColorLevel`]. It serializes writes
//! through a lock, and picks colorized or raw rendering (and the tier that colors are
//! degraded to) from its level.
//!
//! ```
//! use r3bl_log_color::{Channel, Color, ColorOptions, LogTextCtx, ColorLevel};
//!
//! let line = LogTextCtx::colored("hello", Color::rgb(255, 0, 0, Channel::Foreground))
//!     .then([LogTextCtx::from_text(" world")]);
//! assert_eq!(
//!     line.to_colored_string(),
//!     "\x1b[38;2;255;0;0mhello\x1b[0m world"
//! );
//! assert_eq!(line.to_raw_string(), "hello world");
//!
//! let bold_red = Color::rgb(255, 0, 0, Channel::Foreground).with_options(ColorOptions::BOLD);
//! let text = LogTextCtx::colored("bold", bold_red);
//! assert_eq!(
//!     text.to_string_for_level(ColorLevel::Basic),
//!     "\x1b[1;91mbold\x1b[0m"
//! );
//! ```
//!
//! Terminal capability detection is not part of this crate. Callers decide the
//! [`ColorLevel`] and hand it to the sink via [`ConsoleConfig`].

// https://github.com/rust-lang/rust-clippy
// https://rust-lang.github.io/rust-clippy/master/index.html
#![warn(clippy::all)]
#![warn(rust_2018_idioms)]
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach.
pub mod color;
pub mod common;
pub mod console;
pub mod constants;
pub mod log_text;

// Re-export.
pub use color::*;
pub use common::*;
pub use console::*;
pub use constants::*;
pub use log_text::*;
