// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{BufTextStorage, CSI_START, SGR_END, SGR_RESET_CODE, SGR_SEPARATOR, WriteToBuf,
            generate_impl_display_for_write_to_buf, push_u8};
use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Text attributes of a style: 9 attributes, a negation flag for each, and a
    /// reset flag.
    ///
    /// An attribute is active when its bit is set and its negation bit is not. The
    /// negation only suppresses the attribute of the same set, it doesn't retract an
    /// attribute that a merge carries over from an older set (see
    /// [`ColorOptions::merge_from`]).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct ColorOptions: u32 {
        const BOLD = 1 << 0;
        const FAINT = 1 << 1;
        const ITALIC = 1 << 2;
        const UNDERLINE = 1 << 3;
        const BLINK_SLOW = 1 << 4;
        const BLINK_FAST = 1 << 5;
        const INVERSE = 1 << 6;
        const CONCEAL = 1 << 7;
        const CROSSED_OUT = 1 << 8;

        const NO_BOLD = 1 << 9;
        const NO_FAINT = 1 << 10;
        const NO_ITALIC = 1 << 11;
        const NO_UNDERLINE = 1 << 12;
        const NO_BLINK_SLOW = 1 << 13;
        const NO_BLINK_FAST = 1 << 14;
        const NO_INVERSE = 1 << 15;
        const NO_CONCEAL = 1 << 16;
        const NO_CROSSED_OUT = 1 << 17;

        /// Wins over every other bit when serialized, the code becomes `0`.
        const RESET = 1 << 18;

        const ATTRIBUTES = Self::BOLD.bits()
            | Self::FAINT.bits()
            | Self::ITALIC.bits()
            | Self::UNDERLINE.bits()
            | Self::BLINK_SLOW.bits()
            | Self::BLINK_FAST.bits()
            | Self::INVERSE.bits()
            | Self::CONCEAL.bits()
            | Self::CROSSED_OUT.bits();

        const NEGATIONS = Self::NO_BOLD.bits()
            | Self::NO_FAINT.bits()
            | Self::NO_ITALIC.bits()
            | Self::NO_UNDERLINE.bits()
            | Self::NO_BLINK_SLOW.bits()
            | Self::NO_BLINK_FAST.bits()
            | Self::NO_INVERSE.bits()
            | Self::NO_CONCEAL.bits()
            | Self::NO_CROSSED_OUT.bits();
    }
}

/// `(attribute, its negation, SGR code)` in emission order.
#[rustfmt::skip]
const ATTRIBUTE_TABLE: [(ColorOptions, ColorOptions, u8); 9] = [
    (ColorOptions::BOLD,        ColorOptions::NO_BOLD,        1),
    (ColorOptions::FAINT,       ColorOptions::NO_FAINT,       2),
    (ColorOptions::ITALIC,      ColorOptions::NO_ITALIC,      3),
    (ColorOptions::UNDERLINE,   ColorOptions::NO_UNDERLINE,   4),
    (ColorOptions::BLINK_SLOW,  ColorOptions::NO_BLINK_SLOW,  5),
    (ColorOptions::BLINK_FAST,  ColorOptions::NO_BLINK_FAST,  6),
    (ColorOptions::INVERSE,     ColorOptions::NO_INVERSE,     7),
    (ColorOptions::CONCEAL,     ColorOptions::NO_CONCEAL,     8),
    (ColorOptions::CROSSED_OUT, ColorOptions::NO_CROSSED_OUT, 9),
];

impl ColorOptions {
    /// Active attributes in emission order, with their SGR codes.
    fn active_attributes(self) -> impl Iterator<Item = (Self, u8)> {
        ATTRIBUTE_TABLE
            .into_iter()
            .filter(move |(attribute, negation, _)| {
                self.contains(*attribute) && !self.contains(*negation)
            })
            .map(|(attribute, _, code)| (attribute, code))
    }

    /// Whether the style sets some attribute bit, negated or not. A style that does
    /// needs a reset after its text.
    #[must_use]
    pub fn is_styled(self) -> bool { self.intersects(Self::ATTRIBUTES) }

    /// `0` if [`ColorOptions::RESET`] is set, else the `;` joined codes (`1` bold ..
    /// `9` crossed-out) of the active attributes.
    pub fn write_code(self, acc: &mut BufTextStorage) {
        if self.contains(Self::RESET) {
            acc.push_str(SGR_RESET_CODE);
            return;
        }
        for (index, (_, code)) in self.active_attributes().enumerate() {
            if index > 0 {
                acc.push(SGR_SEPARATOR);
            }
            push_u8(acc, code);
        }
    }

    #[must_use]
    pub fn code(self) -> BufTextStorage {
        let mut acc = BufTextStorage::new();
        self.write_code(&mut acc);
        acc
    }

    /// Layer `self` on top of `older`.
    ///
    /// - If `older` has no bits at all, `self` is returned as is.
    /// - Otherwise the result has the attribute bits of `self`, plus every attribute
    ///   that is active in `older`. Negation and reset bits are not carried over.
    #[must_use]
    pub fn merge_from(self, older: Self) -> Self {
        if older.is_empty() {
            return self;
        }
        older
            .active_attributes()
            .fold(self & Self::ATTRIBUTES, |merged, (attribute, _)| {
                merged | attribute
            })
    }
}

/// The full escape sequence, or nothing when there is no code to emit.
impl WriteToBuf for ColorOptions {
    fn write_to_buf(&self, acc: &mut BufTextStorage) {
        let code = self.code();
        if code.is_empty() {
            return;
        }
        acc.push_str(CSI_START);
        acc.push_str(&code);
        acc.push_str(SGR_END);
    }
}

generate_impl_display_for_write_to_buf!(ColorOptions);

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case(ColorOptions::empty(), "")]
    #[test_case(ColorOptions::BOLD, "1")]
    #[test_case(ColorOptions::BOLD | ColorOptions::UNDERLINE | ColorOptions::CROSSED_OUT, "1;4;9")]
    #[test_case(ColorOptions::BOLD | ColorOptions::NO_BOLD | ColorOptions::ITALIC, "3")]
    #[test_case(ColorOptions::NO_FAINT, "")]
    #[test_case(ColorOptions::RESET, "0")]
    #[test_case(ColorOptions::RESET | ColorOptions::BOLD | ColorOptions::INVERSE, "0")]
    fn test_code(options: ColorOptions, expected: &str) {
        assert_eq!(options.code(), expected);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            (ColorOptions::FAINT | ColorOptions::BLINK_FAST).to_string(),
            "\x1b[2;6m"
        );
        assert_eq!(ColorOptions::empty().to_string(), "");
        assert_eq!(ColorOptions::NO_BOLD.to_string(), "");
    }

    #[test]
    fn test_merge_accumulates_older_attributes() {
        let merged = ColorOptions::ITALIC.merge_from(ColorOptions::BOLD);
        assert_eq!(merged, ColorOptions::BOLD | ColorOptions::ITALIC);

        let merged = ColorOptions::empty().merge_from(ColorOptions::BOLD);
        assert_eq!(merged, ColorOptions::BOLD);
    }

    #[test]
    fn test_merge_with_empty_older_keeps_every_bit() {
        let newer = ColorOptions::NO_BOLD | ColorOptions::RESET;
        assert_eq!(newer.merge_from(ColorOptions::empty()), newer);
    }

    #[test]
    fn test_merge_drops_negations_of_newer() {
        // The newer negation can't retract the older bold.
        let merged = ColorOptions::NO_BOLD.merge_from(ColorOptions::BOLD);
        assert_eq!(merged, ColorOptions::BOLD);
        assert_eq!(merged.code(), "1");
    }

    #[test]
    fn test_merge_ignores_negated_older_attributes() {
        let older = ColorOptions::BOLD | ColorOptions::NO_BOLD | ColorOptions::UNDERLINE;
        let merged = ColorOptions::ITALIC.merge_from(older);
        assert_eq!(merged, ColorOptions::ITALIC | ColorOptions::UNDERLINE);
    }

    #[test]
    fn test_is_styled() {
        assert!(ColorOptions::BOLD.is_styled());
        assert!((ColorOptions::BOLD | ColorOptions::NO_BOLD).is_styled());
        assert!(!ColorOptions::NO_BOLD.is_styled());
        assert!(!ColorOptions::RESET.is_styled());
    }

    #[test]
    fn test_serde_uses_flag_names() {
        let options = ColorOptions::BOLD | ColorOptions::RESET;
        let json = serde_json::to_string(&options).unwrap();
        assert!(json.contains("BOLD"));
        assert!(json.contains("RESET"));
        let back: ColorOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(back, options);
    }
}
