// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! ANSI escape sequence constants used when serializing styles.
//!
//! - **sgr**: CSI prefix, SGR terminator, reset sequence and the color parameter
//!   prefixes for 256 color and truecolor slots.
//! - **osc**: OSC prefix and terminator used to set the terminal title.

// Private modules (hide internal structure).
mod osc;
mod sgr;

// Public re-exports (flat API) for convenience.
pub use osc::*;
pub use sgr::*;
