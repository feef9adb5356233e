// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Color model: identities in three tiers, text attributes, and the algebra that
//! converts, merges and serializes them.
//!
//! This module provides:
//! - **Primitive types**: [`BasicCode`] (16 color SGR code), [`AnsiValue`] (256-color
//!   palette) and [`RgbValue`] (24-bit truecolor), held per [`Channel`] in
//!   [`ChannelSlots`].
//! - **Identity**: [`ColorIdentity`], a closed sum over the three tiers plus
//!   [`ColorIdentity::Empty`].
//! - **Attributes**: [`ColorOptions`] flag set.
//! - **Style**: [`Color`], an optional identity plus options.
//! - **Conversion logic**: RGB↔256↔16 quantization and the [`TransformColor`] trait.

// Attach.
mod basic_color;
mod channel;
mod color_style;
mod color_identity;
mod color_options;
mod convert;
mod hundred_color;
mod rgb_color;
mod transform_color;

// Re-export.
pub use basic_color::*;
pub use channel::*;
pub use color_style::*;
pub use color_identity::*;
pub use color_options::*;
pub use convert::*;
pub use hundred_color::*;
pub use rgb_color::*;
pub use transform_color::*;
