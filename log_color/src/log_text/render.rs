// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Depth first serialization of a [`LogTextCtx`] tree into colorized or raw text.

use super::LogTextCtx;
use crate::{BufTextStorage, Color, ColorLevel, ColorTier, WriteToBuf,
            generate_impl_display_for_write_to_buf};

impl LogTextCtx {
    /// Append the colorized text to `acc`.
    ///
    /// Every child of a branch gets the same `ambient` color, a branch's own color is
    /// not passed down. Each leaf merges its own color on top of `ambient` (see
    /// [`Color::merge`]), converts the result down to `max_tier` if given, then writes
    /// the start sequence, its text as is, and a reset if the style needs one. Leaves
    /// with empty text write nothing.
    pub fn write_colored(
        &self,
        acc: &mut BufTextStorage,
        ambient: Option<Color>,
        max_tier: Option<ColorTier>,
    ) {
        match self {
            Self::Branch { children, .. } => {
                for child in children {
                    child.write_colored(acc, ambient, max_tier);
                }
            }
            Self::Leaf { text, color } => {
                if text.is_empty() {
                    return;
                }
                match Color::merge(*color, ambient) {
                    None => acc.push_str(text),
                    Some(effective) => {
                        let effective = match max_tier {
                            Some(max_tier) => effective.downgrade_to(max_tier),
                            None => effective,
                        };
                        effective.write_start(acc);
                        acc.push_str(text);
                        effective.write_end(acc);
                    }
                }
            }
        }
    }

    /// Append the text of every leaf to `acc`, without any escape sequences.
    pub fn write_raw(&self, acc: &mut BufTextStorage) {
        match self {
            Self::Branch { children, .. } => {
                for child in children {
                    child.write_raw(acc);
                }
            }
            Self::Leaf { text, .. } => acc.push_str(text),
        }
    }

    /// Colorized (with a branch root's own color as the ambient color) or raw.
    pub fn write_string(&self, acc: &mut BufTextStorage, colored: bool) {
        if colored {
            self.write_colored(acc, self.root_ambient(), None);
        } else {
            self.write_raw(acc);
        }
    }

    /// Raw for [`ColorLevel::None`], otherwise colorized with colors converted down to
    /// what `level` supports.
    pub fn write_for_level(&self, acc: &mut BufTextStorage, level: ColorLevel) {
        match level.max_tier() {
            None => self.write_raw(acc),
            Some(max_tier) => {
                self.write_colored(acc, self.root_ambient(), Some(max_tier));
            }
        }
    }

    /// A root leaf already applies its own color, using it as the ambient too would
    /// merge it with itself and drop its reset and negation bits.
    fn root_ambient(&self) -> Option<Color> {
        match self {
            Self::Branch { color, .. } => *color,
            Self::Leaf { .. } => None,
        }
    }

    #[must_use]
    pub fn to_colored_string(&self) -> String {
        let mut acc = BufTextStorage::new();
        self.write_string(&mut acc, true);
        acc
    }

    #[must_use]
    pub fn to_raw_string(&self) -> String {
        let mut acc = BufTextStorage::new();
        self.write_raw(&mut acc);
        acc
    }

    #[must_use]
    pub fn to_string_for_level(&self, level: ColorLevel) -> String {
        let mut acc = BufTextStorage::new();
        self.write_for_level(&mut acc, level);
        acc
    }

    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> { self.to_colored_string().into_bytes() }

    #[must_use]
    pub fn to_raw_bytes(&self) -> Vec<u8> { self.to_raw_string().into_bytes() }
}

impl WriteToBuf for LogTextCtx {
    fn write_to_buf(&self, acc: &mut BufTextStorage) { self.write_string(acc, true); }
}

generate_impl_display_for_write_to_buf!(LogTextCtx);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BasicCode, Channel, ColorOptions, SGR_RESET};
    use pretty_assertions::assert_eq;

    fn red() -> Color { Color::basic(BasicCode::FG_RED) }

    #[test]
    fn test_rgb_leaf_under_millions() {
        let node = LogTextCtx::colored("hello", Color::rgb(255, 0, 0, Channel::Foreground));
        let colored = node.to_string_for_level(ColorLevel::Millions);
        assert_eq!(colored, "\x1b[38;2;255;0;0mhello\x1b[0m");
        assert_eq!(node.to_raw_bytes(), b"hello");
        assert_eq!(node.to_bytes(), colored.as_bytes());
    }

    #[test]
    fn test_level_caps_the_tier() {
        let node = LogTextCtx::colored("x", Color::rgb(255, 128, 0, Channel::Background));
        assert_eq!(
            node.to_string_for_level(ColorLevel::Hundreds),
            "\x1b[48;5;208mx\x1b[0m"
        );
        assert_eq!(
            node.to_string_for_level(ColorLevel::Basic),
            "\x1b[103mx\x1b[0m"
        );
        assert_eq!(node.to_string_for_level(ColorLevel::None), "x");
    }

    #[test]
    fn test_branch_wraps_each_leaf() {
        let node = LogTextCtx::new().then([
            LogTextCtx::colored("a", red()),
            LogTextCtx::from_text("b"),
        ]);
        assert_eq!(node.to_colored_string(), "\x1b[31ma\x1b[0mb");
        assert_eq!(node.to_raw_string(), "ab");
    }

    #[test]
    fn test_root_color_is_ambient_for_all_leaves() {
        let node = LogTextCtx::new()
            .with_color(Color::from_options(ColorOptions::BOLD))
            .then([
                LogTextCtx::colored("a", red()),
                LogTextCtx::from_text("b"),
            ]);
        assert_eq!(
            node.to_colored_string(),
            "\x1b[1;31ma\x1b[0m\x1b[1mb\x1b[0m"
        );
    }

    #[test]
    fn test_nested_branch_color_is_not_passed_down() {
        let inner = LogTextCtx::new()
            .with_color(red())
            .then([LogTextCtx::from_text("inner")]);
        let node = LogTextCtx::new().then([inner, LogTextCtx::from_text("outer")]);
        assert_eq!(node.to_colored_string(), "innerouter");
    }

    #[test]
    fn test_empty_leaves_write_nothing() {
        let node = LogTextCtx::new().then([
            LogTextCtx::colored("", red()),
            LogTextCtx::new(),
        ]);
        assert_eq!(node.to_colored_string(), "");
        assert_eq!(node.to_raw_string(), "");
        assert_eq!(LogTextCtx::default().to_bytes(), Vec::<u8>::new());
    }

    #[test]
    fn test_text_is_not_escaped() {
        let node = LogTextCtx::colored("a\x1b[5mb", red());
        assert_eq!(node.to_raw_string(), "a\x1b[5mb");
    }

    #[test]
    fn test_unstyled_color_emits_no_reset() {
        let node = LogTextCtx::colored("a", Color::empty());
        assert_eq!(node.to_colored_string(), "a");

        let node = LogTextCtx::colored("a", Color::from_options(ColorOptions::RESET));
        assert_eq!(node.to_colored_string(), "\x1b[0ma");
        assert!(!node.to_colored_string().ends_with(SGR_RESET));
    }

    #[test]
    fn test_root_leaf_renders_like_a_wrapped_leaf() {
        let styles = [
            Color::from_options(ColorOptions::RESET),
            red().with_options(ColorOptions::BOLD | ColorOptions::NO_BOLD),
        ];
        for color in styles {
            let root = LogTextCtx::colored("x", color);
            let wrapped = LogTextCtx::new().then([root.clone()]);
            assert_eq!(root.to_colored_string(), wrapped.to_colored_string());
            assert_eq!(
                root.to_string_for_level(ColorLevel::Basic),
                wrapped.to_string_for_level(ColorLevel::Basic)
            );
        }

        let negated = LogTextCtx::colored(
            "x",
            red().with_options(ColorOptions::BOLD | ColorOptions::NO_BOLD),
        );
        assert_eq!(negated.to_colored_string(), "\x1b[31mx\x1b[0m");
    }

    #[test]
    fn test_display_matches_colored_string() {
        let node = LogTextCtx::colored("hey", red()).then([LogTextCtx::from_text("!")]);
        assert_eq!(node.to_string(), node.to_colored_string());

        let mut acc = BufTextStorage::new();
        node.write_string(&mut acc, false);
        assert_eq!(acc, "hey!");
    }
}
