// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::ColorTier;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// How many colors an output stream supports. Deciding this (from environment
/// variables, terminal type, etc) is up to the caller, see [`crate::ConsoleConfig`].
///
/// Parses case insensitively from its lowercase name or from the aliases `"16"`,
/// `"256"` and `"truecolor"`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Default,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum ColorLevel {
    /// Raw text, no escape sequences at all.
    #[strum(to_string = "none")]
    None,
    #[strum(to_string = "basic", serialize = "16")]
    #[serde(alias = "16")]
    Basic,
    #[strum(to_string = "hundreds", serialize = "256")]
    #[serde(alias = "256")]
    Hundreds,
    #[default]
    #[strum(to_string = "millions", serialize = "truecolor")]
    #[serde(alias = "truecolor")]
    Millions,
}

impl ColorLevel {
    #[must_use]
    pub fn supports_color(self) -> bool { self >= Self::Basic }

    #[must_use]
    pub fn supports_256(self) -> bool { self >= Self::Hundreds }

    #[must_use]
    pub fn supports_true_color(self) -> bool { self >= Self::Millions }

    /// Most precise [`ColorTier`] this level can display, [`None`] when it can't
    /// display color.
    #[must_use]
    pub const fn max_tier(self) -> Option<ColorTier> {
        match self {
            Self::None => None,
            Self::Basic => Some(ColorTier::Basic),
            Self::Hundreds => Some(ColorTier::Hundred),
            Self::Millions => Some(ColorTier::Rgb),
        }
    }
}

/// These trait implementations allow us to use `ColorLevel` and `u8` interchangeably,
/// so that a level can live in an atomic.
mod convert_between_color_level_and_u8 {
    impl TryFrom<u8> for super::ColorLevel {
        type Error = ();

        #[rustfmt::skip]
        fn try_from(value: u8) -> Result<Self, Self::Error> {
            match value {
                0 => Ok(super::ColorLevel::None),
                1 => Ok(super::ColorLevel::Basic),
                2 => Ok(super::ColorLevel::Hundreds),
                3 => Ok(super::ColorLevel::Millions),
                _ => Err(()),
            }
        }
    }

    impl From<super::ColorLevel> for u8 {
        #[rustfmt::skip]
        fn from(value: super::ColorLevel) -> Self {
            match value {
                super::ColorLevel::None     => 0,
                super::ColorLevel::Basic    => 1,
                super::ColorLevel::Hundreds => 2,
                super::ColorLevel::Millions => 3,
            }
        }
    }
}
