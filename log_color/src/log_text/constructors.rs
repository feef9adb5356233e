// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::LogTextCtx;
use crate::{BasicCode, Channel, Color, RgbValue};

/// Collect nodes (or anything a [`LogTextCtx`] can be made from, eg: `&str`) into a
/// [`Vec`], ready for [`LogTextCtx::then`] or [`LogTextCtx::with_children`].
///
/// ```
/// use r3bl_log_color::{LogTextCtx, fg_red, log_texts};
///
/// let line = LogTextCtx::new().then(log_texts!["[", fg_red("ERROR"), "] boom"]);
/// assert_eq!(line.to_raw_string(), "[ERROR] boom");
/// ```
#[macro_export]
macro_rules! log_texts {
    (
        $( $node:expr ),* $(,)?
    ) => {{
        let acc: ::std::vec::Vec<$crate::LogTextCtx> =
            ::std::vec![ $( $crate::LogTextCtx::from($node) ),* ];
        acc
    }};
}

macro_rules! generate_fg_constructors {
    ( $( $fn_name:ident => $code:ident ),* $(,)? ) => {
        $(
            #[doc = concat!("Leaf with `text` colored [`BasicCode::", stringify!($code), "`].")]
            #[must_use]
            pub fn $fn_name(text: impl AsRef<str>) -> LogTextCtx {
                LogTextCtx::colored(text, BasicCode::$code)
            }
        )*
    };
}

generate_fg_constructors! {
    fg_black => FG_BLACK,
    fg_red => FG_RED,
    fg_green => FG_GREEN,
    fg_yellow => FG_YELLOW,
    fg_blue => FG_BLUE,
    fg_magenta => FG_MAGENTA,
    fg_cyan => FG_CYAN,
    fg_white => FG_WHITE,
    fg_dark_gray => FG_DARK_GRAY,
    fg_light_red => FG_LIGHT_RED,
    fg_light_green => FG_LIGHT_GREEN,
    fg_light_yellow => FG_LIGHT_YELLOW,
    fg_light_blue => FG_LIGHT_BLUE,
    fg_light_magenta => FG_LIGHT_MAGENTA,
    fg_light_cyan => FG_LIGHT_CYAN,
    fg_light_white => FG_LIGHT_WHITE,
}

/// One truecolor leaf per `char` of `text`, fading linearly from `from` to `to` on
/// `channel`. Each component moves by `(to - from) / char_count` per char and is
/// truncated to a byte, so the last char is one step short of `to`.
///
/// Empty `text` gives an empty node.
#[must_use]
pub fn rainbow_string(
    text: impl AsRef<str>,
    from: RgbValue,
    to: RgbValue,
    channel: Channel,
) -> LogTextCtx {
    let text = text.as_ref();
    let char_count = text.chars().count();
    if char_count == 0 {
        return LogTextCtx::new();
    }

    #[allow(clippy::cast_precision_loss)]
    let char_count = char_count as f32;
    let step = |start: u8, end: u8| (f32::from(end) - f32::from(start)) / char_count;
    let (step_red, step_green, step_blue) = (
        step(from.red, to.red),
        step(from.green, to.green),
        step(from.blue, to.blue),
    );

    let mut red = f32::from(from.red);
    let mut green = f32::from(from.green);
    let mut blue = f32::from(from.blue);
    let mut char_buf = [0; 4];

    let children: Vec<LogTextCtx> = text
        .chars()
        .map(|ch| {
            let color = Color::rgb(
                truncate_to_u8(red),
                truncate_to_u8(green),
                truncate_to_u8(blue),
                channel,
            );
            red += step_red;
            green += step_green;
            blue += step_blue;
            LogTextCtx::colored(ch.encode_utf8(&mut char_buf), color)
        })
        .collect();

    LogTextCtx::new().with_children(children)
}

/// Rounds toward zero and saturates at the ends of the `u8` range.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn truncate_to_u8(value: f32) -> u8 { value as u8 }

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ColorLevel;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_fg_constructors() {
        assert_eq!(fg_red("e").to_colored_string(), "\x1b[31me\x1b[0m");
        assert_eq!(fg_dark_gray("d").to_colored_string(), "\x1b[90md\x1b[0m");
        assert_eq!(fg_light_white("w").to_colored_string(), "\x1b[97mw\x1b[0m");
        assert_eq!(fg_black("b").color(), Some(Color::basic(BasicCode::FG_BLACK)));
    }

    #[test]
    fn test_log_texts_converts_items() {
        let nodes = log_texts!["a", String::from("b"), fg_blue("c")];
        assert_eq!(nodes.len(), 3);
        assert_eq!(nodes[1], LogTextCtx::from_text("b"));
        assert!(log_texts![].is_empty());
    }

    #[test]
    fn test_rainbow_string_steps() {
        let node = rainbow_string(
            "abcd",
            RgbValue::from_u8(0, 0, 0),
            RgbValue::from_u8(255, 0, 0),
            Channel::Foreground,
        );
        let reds: Vec<_> = node
            .children()
            .iter()
            .map(|child| child.color().and_then(|it| it.identity))
            .collect();
        let expected: Vec<_> = [0, 63, 127, 191]
            .into_iter()
            .map(|red| Color::rgb(red, 0, 0, Channel::Foreground).identity)
            .collect();
        assert_eq!(reds, expected);
        assert_eq!(node.to_raw_string(), "abcd");
    }

    #[test]
    fn test_rainbow_string_multibyte_chars() {
        let node = rainbow_string(
            "héllo",
            RgbValue::from_u8(10, 20, 30),
            RgbValue::from_u8(10, 20, 30),
            Channel::Background,
        );
        assert_eq!(node.children().len(), 5);
        assert_eq!(node.children()[1].text(), Some("é"));
        let mut expected = String::new();
        for ch in "héllo".chars() {
            expected.push_str("\x1b[48;2;10;20;30m");
            expected.push(ch);
            expected.push_str("\x1b[0m");
        }
        assert_eq!(node.to_string_for_level(ColorLevel::Millions), expected);
    }

    #[test]
    fn test_rainbow_string_empty() {
        let node = rainbow_string(
            "",
            RgbValue::from_u8(0, 0, 0),
            RgbValue::from_u8(255, 255, 255),
            Channel::Foreground,
        );
        assert_eq!(node, LogTextCtx::new());
    }
}
