// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{BasicCode, BasicColorIdentity, HundredColorIdentity, RgbColorIdentity,
            TransformColor};
use crate::{BufTextStorage, CSI_START, SGR_END, WriteToBuf,
            generate_impl_display_for_write_to_buf};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// Color depth of a [`ColorIdentity`]. Ordered from the least to the most precise, so
/// that `tier > max_tier` means "needs down conversion".
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ColorTier {
    Basic,
    Hundred,
    Rgb,
}

/// The colors of a style, in one of the three tiers, or explicitly none.
///
/// [`ColorIdentity::Empty`] is different from an absent identity
/// (`Option::<ColorIdentity>::None`): it is a value that takes part in merges, where it
/// defers to whatever it is merged on top of. Converting it to a tier gives that tier
/// with both slots empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(tag = "tier", rename_all = "lowercase")]
pub enum ColorIdentity {
    Basic(BasicColorIdentity),
    Hundred(HundredColorIdentity),
    Rgb(RgbColorIdentity),
    #[default]
    Empty,
}

mod construct_impl {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl From<BasicCode> for ColorIdentity {
        fn from(code: BasicCode) -> Self { Self::Basic(code.into()) }
    }

    impl From<BasicColorIdentity> for ColorIdentity {
        fn from(it: BasicColorIdentity) -> Self { Self::Basic(it) }
    }

    impl From<HundredColorIdentity> for ColorIdentity {
        fn from(it: HundredColorIdentity) -> Self { Self::Hundred(it) }
    }

    impl From<RgbColorIdentity> for ColorIdentity {
        fn from(it: RgbColorIdentity) -> Self { Self::Rgb(it) }
    }
}

mod convert_impl {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl TransformColor for ColorIdentity {
        fn as_basic(&self) -> BasicColorIdentity {
            match self {
                Self::Basic(it) => it.as_basic(),
                Self::Hundred(it) => it.as_basic(),
                Self::Rgb(it) => it.as_basic(),
                Self::Empty => BasicColorIdentity::default(),
            }
        }

        fn as_hundred(&self) -> HundredColorIdentity {
            match self {
                Self::Basic(it) => it.as_hundred(),
                Self::Hundred(it) => it.as_hundred(),
                Self::Rgb(it) => it.as_hundred(),
                Self::Empty => HundredColorIdentity::default(),
            }
        }

        fn as_rgb(&self) -> RgbColorIdentity {
            match self {
                Self::Basic(it) => it.as_rgb(),
                Self::Hundred(it) => it.as_rgb(),
                Self::Rgb(it) => it.as_rgb(),
                Self::Empty => RgbColorIdentity::default(),
            }
        }
    }

    impl ColorIdentity {
        /// [`None`] for [`ColorIdentity::Empty`].
        #[must_use]
        pub const fn tier(&self) -> Option<ColorTier> {
            match self {
                Self::Basic(_) => Some(ColorTier::Basic),
                Self::Hundred(_) => Some(ColorTier::Hundred),
                Self::Rgb(_) => Some(ColorTier::Rgb),
                Self::Empty => None,
            }
        }

        #[must_use]
        pub fn convert_to(&self, tier: ColorTier) -> Self {
            match tier {
                ColorTier::Basic => Self::Basic(self.as_basic()),
                ColorTier::Hundred => Self::Hundred(self.as_hundred()),
                ColorTier::Rgb => Self::Rgb(self.as_rgb()),
            }
        }

        /// Converts down to `max_tier` if `self` is more precise than that. Never
        /// converts up, and leaves [`ColorIdentity::Empty`] alone.
        #[must_use]
        pub fn downgrade_to(&self, max_tier: ColorTier) -> Self {
            match self.tier() {
                Some(tier) if tier > max_tier => self.convert_to(max_tier),
                _ => *self,
            }
        }
    }
}

mod merge_impl {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl ColorIdentity {
        /// If either side is absent the other one wins. Otherwise see
        /// [`ColorIdentity::merge_from`].
        #[must_use]
        pub fn merge(newer: Option<Self>, older: Option<Self>) -> Option<Self> {
            match (newer, older) {
                (Some(newer), Some(older)) => Some(newer.merge_from(older)),
                (Some(it), None) | (None, Some(it)) => Some(it),
                (None, None) => None,
            }
        }

        /// Per channel, `self` wins where it has a color and `older` shows through where
        /// it doesn't. `older` is converted to `self`'s tier first, so the result keeps
        /// the tier of `self`. An empty `self` returns `older` unchanged.
        #[must_use]
        pub fn merge_from(self, older: Self) -> Self {
            match self {
                Self::Basic(newer) => Self::Basic(newer.merge_over(older.as_basic())),
                Self::Hundred(newer) => Self::Hundred(newer.merge_over(older.as_hundred())),
                Self::Rgb(newer) => Self::Rgb(newer.merge_over(older.as_rgb())),
                Self::Empty => older,
            }
        }
    }
}

mod serialize_impl {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl ColorIdentity {
        #[must_use]
        pub fn is_empty(&self) -> bool {
            match self {
                Self::Basic(it) => it.is_empty(),
                Self::Hundred(it) => it.is_empty(),
                Self::Rgb(it) => it.is_empty(),
                Self::Empty => true,
            }
        }

        /// SGR parameters for the set slots, foreground first, eg: `38;5;208;44`.
        pub fn write_code(&self, acc: &mut BufTextStorage) {
            match self {
                Self::Basic(it) => it.write_code(acc),
                Self::Hundred(it) => it.write_code(acc),
                Self::Rgb(it) => it.write_code(acc),
                Self::Empty => {}
            }
        }

        #[must_use]
        pub fn code(&self) -> BufTextStorage {
            let mut acc = BufTextStorage::new();
            self.write_code(&mut acc);
            acc
        }
    }

    /// The full escape sequence (`CSI <code> m`), or nothing when empty.
    impl WriteToBuf for ColorIdentity {
        fn write_to_buf(&self, acc: &mut BufTextStorage) {
            if self.is_empty() {
                return;
            }
            acc.push_str(CSI_START);
            self.write_code(acc);
            acc.push_str(SGR_END);
        }
    }

    generate_impl_display_for_write_to_buf!(ColorIdentity);
}
