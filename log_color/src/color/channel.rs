// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{BufTextStorage, SGR_SEPARATOR};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumCount, EnumIter};

/// Which half of a cell a color paints.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumCount,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Channel {
    Foreground,
    Background,
}

/// One optional value per [`Channel`]. This is the shape shared by all three color
/// tiers, see [`crate::BasicColorIdentity`], [`crate::HundredColorIdentity`] and
/// [`crate::RgbColorIdentity`].
///
/// An empty slot means "not specified". When two slot pairs are merged, each channel of
/// the newer one wins if it is set, otherwise the older one shows through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChannelSlots<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fg: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bg: Option<T>,
}

impl<T> Default for ChannelSlots<T> {
    fn default() -> Self { Self { fg: None, bg: None } }
}

impl<T: Copy> ChannelSlots<T> {
    #[must_use]
    pub const fn new(fg: Option<T>, bg: Option<T>) -> Self { Self { fg, bg } }

    /// Slots with only `channel` set.
    #[must_use]
    pub fn single(channel: Channel, value: T) -> Self {
        Self::default().with(channel, value)
    }

    #[must_use]
    pub fn get(&self, channel: Channel) -> Option<T> {
        match channel {
            Channel::Foreground => self.fg,
            Channel::Background => self.bg,
        }
    }

    pub fn set(&mut self, channel: Channel, value: Option<T>) {
        match channel {
            Channel::Foreground => self.fg = value,
            Channel::Background => self.bg = value,
        }
    }

    /// Chainable setter, replaces whatever `channel` held before.
    #[must_use]
    pub fn with(mut self, channel: Channel, value: T) -> Self {
        self.set(channel, Some(value));
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.fg.is_none() && self.bg.is_none() }

    /// Per channel: `self` if set, else `older`.
    #[must_use]
    pub fn merge_over(self, older: Self) -> Self {
        Self {
            fg: self.fg.or(older.fg),
            bg: self.bg.or(older.bg),
        }
    }

    /// Set slots in emission order, foreground first.
    pub fn set_slots(&self) -> impl Iterator<Item = (Channel, T)> {
        [
            (Channel::Foreground, self.fg),
            (Channel::Background, self.bg),
        ]
        .into_iter()
        .filter_map(|(channel, maybe_value)| maybe_value.map(|value| (channel, value)))
    }

    /// Convert each set slot, keeping empty slots empty.
    pub fn map<U: Copy>(self, mut f: impl FnMut(Channel, T) -> U) -> ChannelSlots<U> {
        ChannelSlots {
            fg: self.fg.map(|value| f(Channel::Foreground, value)),
            bg: self.bg.map(|value| f(Channel::Background, value)),
        }
    }
}

/// A color value that knows how to write itself as SGR parameters for a channel, eg:
/// `31`, `38;5;208` or `48;2;0;0;0`.
pub trait SgrColorParam: Copy {
    fn write_sgr_param(&self, channel: Channel, acc: &mut BufTextStorage);
}

impl<T: SgrColorParam> ChannelSlots<T> {
    /// Write the set slots, foreground first, joined by `;`. Writes nothing when both
    /// slots are empty.
    pub fn write_code(&self, acc: &mut BufTextStorage) {
        for (index, (channel, value)) in self.set_slots().enumerate() {
            if index > 0 {
                acc.push(SGR_SEPARATOR);
            }
            value.write_sgr_param(channel, acc);
        }
    }
}
