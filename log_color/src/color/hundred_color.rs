// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! 256 color tier. Each index (0-255) maps to a specific color in the xterm palette:
//! - `0..=15`: the 16 standard colors.
//! - `16..=231`: a 6×6×6 RGB color cube.
//! - `232..=255`: a 24 step grayscale ramp.

use super::{BasicCode, Channel, ChannelSlots, RgbValue, SgrColorParam,
            convert::{convert_ansi256_into_ansi16, convert_rgb_into_ansi256}};
use crate::{BG_HUNDRED_PREFIX, BufTextStorage, FG_HUNDRED_PREFIX, push_u8};
use serde::{Deserialize, Serialize};

/// Foreground and background slots of the 256 color tier.
pub type HundredColorIdentity = ChannelSlots<AnsiValue>;

/// A color in the ANSI 256-color palette.
#[derive(Clone, PartialEq, Eq, Hash, Copy, Debug, Serialize, Deserialize)]
pub struct AnsiValue {
    pub index: u8,
}

impl From<u8> for AnsiValue {
    fn from(index: u8) -> Self { Self { index } }
}

impl From<RgbValue> for AnsiValue {
    fn from(rgb: RgbValue) -> Self { convert_rgb_into_ansi256(rgb) }
}

/// Lossless, the 16 colors are the first 16 palette entries.
impl From<BasicCode> for AnsiValue {
    fn from(code: BasicCode) -> Self { Self::new(code.ansi16_index()) }
}

impl AnsiValue {
    #[must_use]
    pub const fn new(index: u8) -> Self { Self { index } }

    /// Check if this is one of the 16 standard colors (indices 0-15).
    #[must_use]
    pub const fn is_basic(self) -> bool { self.index < 16 }

    /// Nearest 16 color code on `channel`. See [`convert_ansi256_into_ansi16`].
    #[must_use]
    pub fn to_basic_code(self, channel: Channel) -> BasicCode {
        BasicCode::from_ansi16_index(convert_ansi256_into_ansi16(self), channel)
    }
}

impl SgrColorParam for AnsiValue {
    fn write_sgr_param(&self, channel: Channel, acc: &mut BufTextStorage) {
        acc.push_str(match channel {
            Channel::Foreground => FG_HUNDRED_PREFIX,
            Channel::Background => BG_HUNDRED_PREFIX,
        });
        push_u8(acc, self.index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case(Channel::Foreground, 208, "38;5;208")]
    #[test_case(Channel::Background, 0, "48;5;0")]
    fn test_sgr_param(channel: Channel, index: u8, expected: &str) {
        let mut acc = BufTextStorage::new();
        AnsiValue::new(index).write_sgr_param(channel, &mut acc);
        assert_eq!(acc, expected);
    }

    #[test]
    fn test_from_basic_code_is_palette_index() {
        assert_eq!(AnsiValue::from(BasicCode::FG_RED), AnsiValue::new(1));
        assert_eq!(AnsiValue::from(BasicCode::BG_LIGHT_WHITE), AnsiValue::new(15));
    }

    #[test]
    fn test_to_basic_code() {
        // 196 is pure red in the cube, it lands on bright red.
        assert_eq!(
            AnsiValue::new(196).to_basic_code(Channel::Foreground),
            BasicCode::FG_LIGHT_RED
        );
        assert_eq!(
            AnsiValue::new(4).to_basic_code(Channel::Background),
            BasicCode::BG_BLUE
        );
    }
}
