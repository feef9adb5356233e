// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! RGB (24-bit truecolor) tier. This is the most precise color representation
//! supported by modern terminals.

use super::{AnsiValue, BasicCode, Channel, ChannelSlots, SgrColorParam,
            convert::{convert_ansi256_into_rgb, convert_rgb_into_ansi16}};
use crate::{BG_RGB_PREFIX, BufTextStorage, FG_RGB_PREFIX, SGR_SEPARATOR, push_u8};
use serde::{Deserialize, Serialize};

/// Foreground and background slots of the truecolor tier.
pub type RgbColorIdentity = ChannelSlots<RgbValue>;

/// A color in RGB (24-bit truecolor) format. `(0, 0, 0)` is black, not "unset";
/// emptiness lives in the surrounding [`ChannelSlots`].
#[derive(Clone, PartialEq, Eq, Hash, Copy, Debug, Default, Serialize, Deserialize)]
pub struct RgbValue {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl From<(u8, u8, u8)> for RgbValue {
    fn from((red, green, blue): (u8, u8, u8)) -> Self { Self::from_u8(red, green, blue) }
}

impl From<AnsiValue> for RgbValue {
    fn from(ansi: AnsiValue) -> Self { convert_ansi256_into_rgb(ansi) }
}

impl From<BasicCode> for RgbValue {
    fn from(code: BasicCode) -> Self { convert_ansi256_into_rgb(AnsiValue::from(code)) }
}

impl RgbValue {
    #[must_use]
    pub const fn from_u8(red: u8, green: u8, blue: u8) -> Self { Self { red, green, blue } }

    /// 16 color code on `channel` picked by the brightness heuristic in
    /// [`convert_rgb_into_ansi16`].
    #[must_use]
    pub fn to_basic_code(self, channel: Channel) -> BasicCode {
        BasicCode::from_ansi16_index(convert_rgb_into_ansi16(self), channel)
    }
}

impl RgbColorIdentity {
    /// Identity with one channel set, chain [`RgbColorIdentity::and`] for the other.
    #[must_use]
    pub fn rgb(red: u8, green: u8, blue: u8, channel: Channel) -> Self {
        Self::single(channel, RgbValue::from_u8(red, green, blue))
    }

    #[must_use]
    pub fn and(self, red: u8, green: u8, blue: u8, channel: Channel) -> Self {
        self.with(channel, RgbValue::from_u8(red, green, blue))
    }
}

impl SgrColorParam for RgbValue {
    fn write_sgr_param(&self, channel: Channel, acc: &mut BufTextStorage) {
        acc.push_str(match channel {
            Channel::Foreground => FG_RGB_PREFIX,
            Channel::Background => BG_RGB_PREFIX,
        });
        push_u8(acc, self.red);
        acc.push(SGR_SEPARATOR);
        push_u8(acc, self.green);
        acc.push(SGR_SEPARATOR);
        push_u8(acc, self.blue);
    }
}
