// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! SGR (Select Graphic Rendition) sequence constants.
//!
//! More info:
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#SGR>
//! - <https://notes.burke.libbey.me/ansi-escape-codes/>

/// Control Sequence Introducer. Every style sequence starts with this.
pub const CSI_START: &str = "\x1b[";

/// Final byte of an SGR sequence.
pub const SGR_END: &str = "m";

/// Separator between SGR parameters.
pub const SGR_SEPARATOR: char = ';';

/// The universal reset parameter. Emitted on its own when [`crate::ColorOptions::RESET`]
/// is set.
pub const SGR_RESET_CODE: &str = "0";

/// SGR Reset sequence. Resets all text attributes (color, bold, italic, etc.) to
/// default.
pub const SGR_RESET: &str = "\x1b[0m";

/// SGR Reset sequence bytes.
pub const SGR_RESET_BYTES: &[u8] = b"\x1b[0m";

/// Line terminator appended by [`crate::ConsoleSink::println`].
pub const LINE_FEED_BYTES: &[u8] = b"\n";

/// 256 color foreground parameter prefix, followed by the palette index.
pub const FG_HUNDRED_PREFIX: &str = "38;5;";

/// 256 color background parameter prefix, followed by the palette index.
pub const BG_HUNDRED_PREFIX: &str = "48;5;";

/// Truecolor foreground parameter prefix, followed by `r;g;b`.
pub const FG_RGB_PREFIX: &str = "38;2;";

/// Truecolor background parameter prefix, followed by `r;g;b`.
pub const BG_RGB_PREFIX: &str = "48;2;";
