// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! OSC (Operating System Command) constants.

/// Sequence that starts an OSC 0 command, which sets the icon name and window title.
pub const OSC_SET_TITLE_START: &str = "\x1b]0;";

/// BEL character (0x07), terminates the OSC command.
pub const BELL_TERMINATOR: &str = "\x07";
