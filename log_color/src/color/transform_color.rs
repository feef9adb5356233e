// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{AnsiValue, BasicColorIdentity, HundredColorIdentity, RgbColorIdentity,
            RgbValue};

/// Conversion of a color identity into each of the three tiers. Same tier conversion
/// returns `self` unchanged, every other direction is deterministic and (going down)
/// lossy. Empty slots stay empty.
pub trait TransformColor {
    /// Returns the 16 color approximation of the `self` color.
    fn as_basic(&self) -> BasicColorIdentity;

    /// Returns the 256 color palette approximation of the `self` color.
    fn as_hundred(&self) -> HundredColorIdentity;

    /// Returns a truecolor representation of the `self` color.
    fn as_rgb(&self) -> RgbColorIdentity;
}

impl TransformColor for BasicColorIdentity {
    fn as_basic(&self) -> BasicColorIdentity { *self }

    fn as_hundred(&self) -> HundredColorIdentity {
        self.map(|_, code| AnsiValue::from(code))
    }

    fn as_rgb(&self) -> RgbColorIdentity { self.map(|_, code| RgbValue::from(code)) }
}

impl TransformColor for HundredColorIdentity {
    fn as_basic(&self) -> BasicColorIdentity {
        self.map(|channel, ansi| ansi.to_basic_code(channel))
    }

    fn as_hundred(&self) -> HundredColorIdentity { *self }

    fn as_rgb(&self) -> RgbColorIdentity { self.map(|_, ansi| RgbValue::from(ansi)) }
}

impl TransformColor for RgbColorIdentity {
    fn as_basic(&self) -> BasicColorIdentity {
        self.map(|channel, rgb| rgb.to_basic_code(channel))
    }

    fn as_hundred(&self) -> HundredColorIdentity { self.map(|_, rgb| AnsiValue::from(rgb)) }

    fn as_rgb(&self) -> RgbColorIdentity { *self }
}
