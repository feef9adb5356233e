// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{AnsiValue, BasicCode, Channel, ChannelSlots, ColorIdentity, ColorOptions,
            ColorTier, RgbColorIdentity};
use crate::{BufTextStorage, CSI_START, SGR_END, SGR_RESET, SGR_SEPARATOR, WriteToBuf,
            generate_impl_display_for_write_to_buf};
use serde::{Deserialize, Serialize};

/// A complete text style: a [`ColorIdentity`] plus [`ColorOptions`].
///
/// `identity: None` means "inherit the colors from whatever this is merged on top of",
/// while `Some(ColorIdentity::Empty)` is an explicit "no color" value.
///
/// [`Display`](std::fmt::Display) produces the start sequence, eg: `"\x1b[1;38;5;208m"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Color {
    #[serde(default)]
    pub identity: Option<ColorIdentity>,
    #[serde(default)]
    pub options: ColorOptions,
}

mod construct_impl {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl Color {
        #[must_use]
        pub fn new(identity: impl Into<ColorIdentity>, options: ColorOptions) -> Self {
            Self {
                identity: Some(identity.into()),
                options,
            }
        }

        /// Attributes only, the colors are inherited.
        #[must_use]
        pub const fn from_options(options: ColorOptions) -> Self {
            Self {
                identity: None,
                options,
            }
        }

        /// A 16 color code, its channel is implied by the code.
        #[must_use]
        pub fn basic(code: BasicCode) -> Self { Self::new(code, ColorOptions::empty()) }

        #[must_use]
        pub fn hundred(index: u8, channel: Channel) -> Self {
            Self::new(
                ChannelSlots::single(channel, AnsiValue::new(index)),
                ColorOptions::empty(),
            )
        }

        #[must_use]
        pub fn rgb(red: u8, green: u8, blue: u8, channel: Channel) -> Self {
            Self::new(
                RgbColorIdentity::rgb(red, green, blue, channel),
                ColorOptions::empty(),
            )
        }

        /// Explicit "no color", see [`ColorIdentity::Empty`].
        #[must_use]
        pub fn empty() -> Self { Self::new(ColorIdentity::Empty, ColorOptions::empty()) }

        /// Adds `options` to the ones already set.
        #[must_use]
        pub fn with_options(mut self, options: ColorOptions) -> Self {
            self.options |= options;
            self
        }

        #[must_use]
        pub fn with_identity(mut self, identity: impl Into<ColorIdentity>) -> Self {
            self.identity = Some(identity.into());
            self
        }
    }

    impl From<ColorIdentity> for Color {
        fn from(identity: ColorIdentity) -> Self { Self::new(identity, ColorOptions::empty()) }
    }

    impl From<BasicCode> for Color {
        fn from(code: BasicCode) -> Self { Self::basic(code) }
    }
}

mod merge_impl {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl Color {
        /// If either side is absent the other one wins, otherwise
        /// [`Color::merge_from`].
        #[must_use]
        pub fn merge(newer: Option<Self>, older: Option<Self>) -> Option<Self> {
            match (newer, older) {
                (Some(newer), Some(older)) => Some(newer.merge_from(older)),
                (Some(it), None) | (None, Some(it)) => Some(it),
                (None, None) => None,
            }
        }

        /// Identities merge per channel in the tier of `self` (see
        /// [`ColorIdentity::merge`]), options merge per
        /// [`ColorOptions::merge_from`].
        #[must_use]
        pub fn merge_from(self, older: Self) -> Self {
            Self {
                identity: ColorIdentity::merge(self.identity, older.identity),
                options: self.options.merge_from(older.options),
            }
        }

        /// Converts the identity down to `max_tier` if it is more precise.
        #[must_use]
        pub fn downgrade_to(self, max_tier: ColorTier) -> Self {
            Self {
                identity: self.identity.map(|it| it.downgrade_to(max_tier)),
                options: self.options,
            }
        }
    }
}

mod serialize_impl {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl Color {
        /// Options code then identity code, joined by `;`. Empty parts are left out.
        pub fn write_code(&self, acc: &mut BufTextStorage) {
            let start = acc.len();
            self.options.write_code(acc);
            if let Some(identity) = self.identity
                && !identity.is_empty()
            {
                if acc.len() > start {
                    acc.push(SGR_SEPARATOR);
                }
                identity.write_code(acc);
            }
        }

        #[must_use]
        pub fn code(&self) -> BufTextStorage {
            let mut acc = BufTextStorage::new();
            self.write_code(&mut acc);
            acc
        }

        /// Whether text written after [`Color::write_start`] has to be followed by a
        /// reset. True when an attribute bit or a color is set.
        #[must_use]
        pub fn needs_reset(&self) -> bool {
            self.options.is_styled() || self.identity.is_some_and(|it| !it.is_empty())
        }

        /// Same as the [`WriteToBuf`] output: `CSI <code> m`, or nothing when the code
        /// is empty.
        pub fn write_start(&self, acc: &mut BufTextStorage) { self.write_to_buf(acc); }

        /// [`SGR_RESET`] if [`Color::needs_reset`], otherwise nothing.
        pub fn write_end(&self, acc: &mut BufTextStorage) {
            if self.needs_reset() {
                acc.push_str(SGR_RESET);
            }
        }
    }

    impl WriteToBuf for Color {
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

    generate_impl_display_for_write_to_buf!(Color);
}
