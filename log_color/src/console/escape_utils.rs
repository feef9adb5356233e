// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{BELL_TERMINATOR, BufTextStorage, OSC_SET_TITLE_START};

/// Removes ANSI escape sequences (SGR colors, cursor movement, OSC titles) from `text`,
/// eg: to measure or persist text that was rendered for a terminal.
#[must_use]
pub fn strip_color_codes(text: impl AsRef<str>) -> String {
    strip_ansi_escapes::strip_str(text.as_ref())
}

/// Appends the OSC 0 sequence that sets the terminal window title to `title`.
pub fn write_title_sequence(acc: &mut BufTextStorage, title: &str) {
    acc.push_str(OSC_SET_TITLE_START);
    acc.push_str(title);
    acc.push_str(BELL_TERMINATOR);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BasicCode, Channel, Color, ColorOptions, LogTextCtx};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_strip_color_codes_undoes_rendering() {
        let node = LogTextCtx::colored(
            "warn",
            Color::rgb(200, 100, 0, Channel::Foreground).with_options(ColorOptions::BOLD),
        )
        .then([
            LogTextCtx::from_text(": "),
            LogTextCtx::colored("disk full", BasicCode::BG_RED),
        ]);
        assert_eq!(strip_color_codes(node.to_colored_string()), node.to_raw_string());
    }

    #[test]
    fn test_strip_color_codes_plain_text_unchanged() {
        assert_eq!(strip_color_codes("plain [text]; 31m"), "plain [text]; 31m");
    }

    #[test]
    fn test_write_title_sequence() {
        let mut acc = BufTextStorage::new();
        write_title_sequence(&mut acc, "build #42");
        assert_eq!(acc, "\x1b]0;build #42\x07");
        assert_eq!(strip_color_codes(&acc), "");
    }
}
