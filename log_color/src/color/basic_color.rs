// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! 16 color tier. A slot holds the SGR code itself (`31`, `97`, `104`, ...), which
//! encodes the channel, the hue and the brightness in one number.

use super::{Channel, ChannelSlots, SgrColorParam};
use crate::{BufTextStorage, push_u8};
use serde::{Deserialize, Serialize};

/// Foreground and background slots of the 16 color tier.
pub type BasicColorIdentity = ChannelSlots<BasicCode>;

/// A 16 color SGR code: `30..=37` / `90..=97` paint the foreground, `40..=47` /
/// `100..=107` paint the background.
///
/// The field is private so that every value is one of these 32 codes. Use the named
/// constants, [`BasicCode::try_new`] or [`BasicCode::from_ansi16_index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct BasicCode(u8);

mod hues {
    pub const FG_BASE: u8 = 30;
    pub const FG_BRIGHT_BASE: u8 = 90;
    pub const BG_BASE: u8 = 40;
    pub const BG_BRIGHT_BASE: u8 = 100;
    pub const HUE_COUNT: u8 = 8;
}

#[rustfmt::skip]
impl BasicCode {
    pub const FG_BLACK: Self = Self(30);
    pub const FG_RED: Self = Self(31);
    pub const FG_GREEN: Self = Self(32);
    pub const FG_YELLOW: Self = Self(33);
    pub const FG_BLUE: Self = Self(34);
    pub const FG_MAGENTA: Self = Self(35);
    pub const FG_CYAN: Self = Self(36);
    pub const FG_WHITE: Self = Self(37);

    pub const FG_DARK_GRAY: Self = Self(90);
    pub const FG_LIGHT_RED: Self = Self(91);
    pub const FG_LIGHT_GREEN: Self = Self(92);
    pub const FG_LIGHT_YELLOW: Self = Self(93);
    pub const FG_LIGHT_BLUE: Self = Self(94);
    pub const FG_LIGHT_MAGENTA: Self = Self(95);
    pub const FG_LIGHT_CYAN: Self = Self(96);
    pub const FG_LIGHT_WHITE: Self = Self(97);

    pub const BG_BLACK: Self = Self(40);
    pub const BG_RED: Self = Self(41);
    pub const BG_GREEN: Self = Self(42);
    pub const BG_YELLOW: Self = Self(43);
    pub const BG_BLUE: Self = Self(44);
    pub const BG_MAGENTA: Self = Self(45);
    pub const BG_CYAN: Self = Self(46);
    pub const BG_WHITE: Self = Self(47);

    pub const BG_DARK_GRAY: Self = Self(100);
    pub const BG_LIGHT_RED: Self = Self(101);
    pub const BG_LIGHT_GREEN: Self = Self(102);
    pub const BG_LIGHT_YELLOW: Self = Self(103);
    pub const BG_LIGHT_BLUE: Self = Self(104);
    pub const BG_LIGHT_MAGENTA: Self = Self(105);
    pub const BG_LIGHT_CYAN: Self = Self(106);
    pub const BG_LIGHT_WHITE: Self = Self(107);
}

impl BasicCode {
    /// Returns [`None`] for anything that isn't one of the 32 16-color codes.
    #[must_use]
    pub const fn try_new(code: u8) -> Option<Self> {
        match code {
            30..=37 | 40..=47 | 90..=97 | 100..=107 => Some(Self(code)),
            _ => None,
        }
    }

    /// Builds the code for palette index `0..=15` (`0..=7` normal hues, `8..=15` their
    /// bright variants) on `channel`. Indices above 15 wrap into the hue range.
    #[must_use]
    pub const fn from_ansi16_index(index: u8, channel: Channel) -> Self {
        let hue = index % hues::HUE_COUNT;
        let is_bright = index % (hues::HUE_COUNT * 2) >= hues::HUE_COUNT;
        Self::from_hue(hue, is_bright, channel)
    }

    const fn from_hue(hue: u8, is_bright: bool, channel: Channel) -> Self {
        let base = match (channel, is_bright) {
            (Channel::Foreground, false) => hues::FG_BASE,
            (Channel::Foreground, true) => hues::FG_BRIGHT_BASE,
            (Channel::Background, false) => hues::BG_BASE,
            (Channel::Background, true) => hues::BG_BRIGHT_BASE,
        };
        Self(base + hue % hues::HUE_COUNT)
    }

    #[must_use]
    pub const fn code(self) -> u8 { self.0 }

    #[must_use]
    pub const fn channel(self) -> Channel {
        match self.0 {
            40..=47 | 100..=107 => Channel::Background,
            _ => Channel::Foreground,
        }
    }

    #[must_use]
    pub const fn is_bright(self) -> bool { self.0 >= hues::FG_BRIGHT_BASE }

    /// `0` black, `1` red, `2` green, `3` yellow, `4` blue, `5` magenta, `6` cyan, `7`
    /// white. Bit 0 is red, bit 1 green, bit 2 blue.
    #[must_use]
    pub const fn hue(self) -> u8 { self.0 % 10 }

    /// Index into the 16 color palette, `0..=15`.
    #[must_use]
    pub const fn ansi16_index(self) -> u8 {
        if self.is_bright() {
            self.hue() + hues::HUE_COUNT
        } else {
            self.hue()
        }
    }

    /// Same hue and brightness on another channel.
    #[must_use]
    pub const fn on_channel(self, channel: Channel) -> Self {
        Self::from_hue(self.hue(), self.is_bright(), channel)
    }
}

impl SgrColorParam for BasicCode {
    fn write_sgr_param(&self, channel: Channel, acc: &mut BufTextStorage) {
        push_u8(acc, self.on_channel(channel).code());
    }
}

impl From<BasicCode> for u8 {
    fn from(it: BasicCode) -> Self { it.0 }
}

impl TryFrom<u8> for BasicCode {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::try_new(code).ok_or_else(|| format!("{code} is not a 16 color SGR code"))
    }
}

/// A lone code is a valid identity, the code decides which channel it fills.
impl From<BasicCode> for BasicColorIdentity {
    fn from(code: BasicCode) -> Self { Self::single(code.channel(), code) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case(30, Some(BasicCode::FG_BLACK))]
    #[test_case(97, Some(BasicCode::FG_LIGHT_WHITE))]
    #[test_case(104, Some(BasicCode::BG_LIGHT_BLUE))]
    #[test_case(0, None)]
    #[test_case(38, None)]
    #[test_case(48, None)]
    #[test_case(108, None)]
    fn test_try_new(code: u8, expected: Option<BasicCode>) {
        assert_eq!(BasicCode::try_new(code), expected);
    }

    #[test]
    fn test_channel_hue_brightness() {
        let code = BasicCode::BG_LIGHT_CYAN;
        assert_eq!(code.channel(), Channel::Background);
        assert_eq!(code.hue(), 6);
        assert!(code.is_bright());
        assert_eq!(code.ansi16_index(), 14);

        let code = BasicCode::FG_YELLOW;
        assert_eq!(code.channel(), Channel::Foreground);
        assert!(!code.is_bright());
        assert_eq!(code.ansi16_index(), 3);
    }

    #[test]
    fn test_ansi16_index_round_trip_on_both_channels() {
        for index in 0..16 {
            for channel in [Channel::Foreground, Channel::Background] {
                let code = BasicCode::from_ansi16_index(index, channel);
                assert_eq!(code.ansi16_index(), index);
                assert_eq!(code.channel(), channel);
            }
        }
    }

    #[test]
    fn test_sgr_param_follows_slot_channel() {
        let mut acc = BufTextStorage::new();
        BasicCode::FG_LIGHT_RED.write_sgr_param(Channel::Background, &mut acc);
        assert_eq!(acc, "101");
    }

    #[test]
    fn test_identity_from_lone_code() {
        let identity = BasicColorIdentity::from(BasicCode::BG_GREEN);
        assert_eq!(identity.fg, None);
        assert_eq!(identity.bg, Some(BasicCode::BG_GREEN));
    }

    #[test]
    fn test_serde_rejects_invalid_code() {
        assert!(serde_json::from_str::<BasicCode>("31").is_ok());
        assert!(serde_json::from_str::<BasicCode>("38").is_err());
    }
}
