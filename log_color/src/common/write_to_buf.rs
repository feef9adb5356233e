// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! String building helpers for styles and log trees. See [`WriteToBuf`] and
//! [`BufTextStorage`] for details.

use smallstr::SmallString;
use std::fmt::{Display, Formatter, Result};

/// Buffer for building escape sequences and rendered log lines.
///
/// Buffers are short-lived (created per render and dropped right after), with sizes
/// that range from a few bytes (`"\x1b[0m"`) to whole log lines, so a plain [`String`]
/// is used rather than an inline small string.
pub type BufTextStorage = String;

/// Inline capacity of [`InlineString`]. Log line fragments (`"["`, `"INFO"`, a module
/// path) mostly fit, longer text spills to the heap.
pub const DEFAULT_STRING_STORAGE_SIZE: usize = 32;

/// Stack allocated string used for the text of a [`crate::LogTextCtx`] leaf.
pub type InlineString = SmallString<[u8; DEFAULT_STRING_STORAGE_SIZE]>;

/// Batched string building that avoids going through [`Formatter`] for every piece.
///
/// Implementors build their whole output in a [`BufTextStorage`] with
/// [`String::push_str`] (and [`push_u8`] for numbers) and then hand it to the formatter
/// in one [`Formatter::write_str`] call. Writing into a [`String`] can't fail, so
/// [`write_to_buf`] doesn't return a [`Result`].
///
/// Use [`generate_impl_display_for_write_to_buf!`] to derive [`Display`] from it.
///
/// [`write_to_buf`]: WriteToBuf::write_to_buf
/// [`generate_impl_display_for_write_to_buf!`]: crate::generate_impl_display_for_write_to_buf
pub trait WriteToBuf: Display {
    /// Append the textual representation to `acc`.
    fn write_to_buf(&self, acc: &mut BufTextStorage);

    /// Write the buffer to formatter. Call from [`Display::fmt`] after
    /// [`write_to_buf`].
    ///
    /// # Errors
    /// Returns an error if writing to the formatter fails.
    ///
    /// [`write_to_buf`]: WriteToBuf::write_to_buf
    fn write_buf_to_fmt(&self, acc: &BufTextStorage, f: &mut Formatter<'_>) -> Result {
        f.write_str(acc)
    }
}

/// Implements [`Display`] for a type that implements [`WriteToBuf`].
#[macro_export]
macro_rules! generate_impl_display_for_write_to_buf {
    ($type:ty) => {
        impl ::std::fmt::Display for $type {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                let mut buffer = $crate::BufTextStorage::new();
                $crate::WriteToBuf::write_to_buf(self, &mut buffer);
                $crate::WriteToBuf::write_buf_to_fmt(self, &buffer, f)
            }
        }
    };
}

/// Append the decimal digits of `value` to `acc` without going through [`write!`].
pub fn push_u8(acc: &mut BufTextStorage, value: u8) {
    if value >= 100 {
        acc.push(char::from(b'0' + value / 100));
    }
    if value >= 10 {
        acc.push(char::from(b'0' + (value / 10) % 10));
    }
    acc.push(char::from(b'0' + value % 10));
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0, "0")]
    #[test_case(7, "7")]
    #[test_case(10, "10")]
    #[test_case(95, "95")]
    #[test_case(100, "100")]
    #[test_case(208, "208")]
    #[test_case(255, "255")]
    fn test_push_u8(value: u8, expected: &str) {
        let mut acc = BufTextStorage::new();
        push_u8(&mut acc, value);
        assert_eq!(acc, expected);
    }

    #[test]
    fn test_push_u8_matches_to_string() {
        for value in 0..=u8::MAX {
            let mut acc = BufTextStorage::new();
            push_u8(&mut acc, value);
            assert_eq!(acc, value.to_string());
        }
    }
}
