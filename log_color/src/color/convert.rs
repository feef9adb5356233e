// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Pure numeric conversions between RGB triples, the 256 color palette and the 16
//! color palette. Every function is total over its input.
//!
//! The down conversions to 16 colors use a brightness heuristic rather than a nearest
//! color search, so that existing log output keeps its exact codes.

use super::{AnsiValue, RgbValue};

pub mod ansi_constants {
    /// The 6 intensity levels of each axis of the 6×6×6 color cube (indices 16-231).
    pub const CUBE_STEPS: [u8; 6] = [0x00, 0x5f, 0x87, 0xaf, 0xd7, 0xff];

    pub const CUBE_START_INDEX: u8 = 16;
    pub const GRAY_RAMP_START_INDEX: u8 = 232;
    pub const BRIGHT_INDEX_OFFSET: u8 = 8;

    /// xterm's RGB values for the 16 standard colors (indices 0-15).
    #[rustfmt::skip]
    pub const ANSI16_PALETTE: [(u8, u8, u8); 16] = [
        (0, 0, 0),       (128, 0, 0),   (0, 128, 0),   (128, 128, 0),
        (0, 0, 128),     (128, 0, 128), (0, 128, 128), (192, 192, 192),
        (128, 128, 128), (255, 0, 0),   (0, 255, 0),   (255, 255, 0),
        (0, 0, 255),     (255, 0, 255), (0, 255, 255), (255, 255, 255),
    ];

    pub mod ansi16 {
        pub const BLACK: u8 = 0;
        pub const WHITE: u8 = 7;
        pub const BRIGHT_BLACK: u8 = 8;
        pub const BRIGHT_WHITE: u8 = 15;
    }
}

use ansi_constants::{ANSI16_PALETTE, BRIGHT_INDEX_OFFSET, CUBE_START_INDEX, CUBE_STEPS,
                     GRAY_RAMP_START_INDEX, ansi16};

/// Index of the cube step nearest to `component`. Ties go to the lower step.
#[must_use]
pub fn quantize_to_cube_coordinate(component: u8) -> u8 {
    let mut best_coordinate = 0;
    let mut best_distance = u8::MAX;
    for (coordinate, step) in (0u8..).zip(CUBE_STEPS) {
        let distance = component.abs_diff(step);
        if distance < best_distance {
            best_distance = distance;
            best_coordinate = coordinate;
        }
    }
    best_coordinate
}

/// Inverse of [`quantize_to_cube_coordinate`]. Coordinates past the last step clamp
/// to it.
#[must_use]
pub fn convert_cube_coordinate_into_component(coordinate: u8) -> u8 {
    CUBE_STEPS[usize::from(coordinate.min(5))]
}

/// Quantizes each component to the cube independently.
#[must_use]
pub fn convert_rgb_into_ansi256(rgb: RgbValue) -> AnsiValue {
    let red = quantize_to_cube_coordinate(rgb.red);
    let green = quantize_to_cube_coordinate(rgb.green);
    let blue = quantize_to_cube_coordinate(rgb.blue);
    AnsiValue::new(CUBE_START_INDEX + 36 * red + 6 * green + blue)
}

#[must_use]
pub fn convert_ansi256_into_rgb(ansi: AnsiValue) -> RgbValue {
    let index = ansi.index;
    if index < CUBE_START_INDEX {
        RgbValue::from(ANSI16_PALETTE[usize::from(index)])
    } else if index < GRAY_RAMP_START_INDEX {
        let offset = index - CUBE_START_INDEX;
        RgbValue::from_u8(
            convert_cube_coordinate_into_component(offset / 36),
            convert_cube_coordinate_into_component((offset % 36) / 6),
            convert_cube_coordinate_into_component(offset % 6),
        )
    } else {
        let level = (index - GRAY_RAMP_START_INDEX) * 10 + 8;
        RgbValue::from_u8(level, level, level)
    }
}

/// 16 color index (`0..=15`) of an RGB value:
/// - `(128, 128, 128)` is bright black.
/// - Any component at 255 makes the result bright.
/// - Grays binarize at the 128 midpoint, other colors binarize each component
///   against the mean of the three.
/// - The bits pick the hue: bit 0 red, bit 1 green, bit 2 blue.
#[must_use]
pub fn convert_rgb_into_ansi16(rgb: RgbValue) -> u8 {
    let RgbValue { red, green, blue } = rgb;

    if (red, green, blue) == (128, 128, 128) {
        return ansi16::BRIGHT_BLACK;
    }

    let bright_offset = if red == u8::MAX || green == u8::MAX || blue == u8::MAX {
        BRIGHT_INDEX_OFFSET
    } else {
        0
    };

    let (red_bit, green_bit, blue_bit) = if red == green && green == blue {
        (red > 127, green > 127, blue > 127)
    } else {
        let mean = (u16::from(red) + u16::from(green) + u16::from(blue)) / 3;
        (
            u16::from(red) >= mean,
            u16::from(green) >= mean,
            u16::from(blue) >= mean,
        )
    };

    let hue = u8::from(red_bit) | (u8::from(green_bit) << 1) | (u8::from(blue_bit) << 2);
    bright_offset + hue
}

/// 16 color index for a gray ramp entry (`232..=255`).
#[must_use]
pub const fn convert_gray_ramp_into_ansi16(index: u8) -> u8 {
    match index {
        254..=u8::MAX => ansi16::BRIGHT_WHITE,
        248..=253 => ansi16::WHITE,
        237..=247 => ansi16::BRIGHT_BLACK,
        _ => ansi16::BLACK,
    }
}

/// 16 color index (`0..=15`) of a 256 color palette entry. The first 16 entries are
/// unchanged, cube entries go through RGB, gray ramp entries use fixed thresholds.
#[must_use]
pub fn convert_ansi256_into_ansi16(ansi: AnsiValue) -> u8 {
    let index = ansi.index;
    if index < CUBE_START_INDEX {
        index
    } else if index < GRAY_RAMP_START_INDEX {
        convert_rgb_into_ansi16(convert_ansi256_into_rgb(ansi))
    } else {
        convert_gray_ramp_into_ansi16(index)
    }
}
