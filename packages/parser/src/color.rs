//! Hex color parsing

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid color: expected {expected}")]
pub struct ColorParseError {
    pub expected: &'static str,
}

const RGB: &str = "RRGGBB";
const RGBA: &str = "RRGGBBAA";

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: u8::MAX }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// `RRGGBB`, with or without a leading `#`
    pub fn parse_rgb(text: &str) -> Result<Self, ColorParseError> {
        Self::parse_digits(text, false)
    }

    /// `RRGGBBAA`, with or without a leading `#`
    pub fn parse_rgba(text: &str) -> Result<Self, ColorParseError> {
        Self::parse_digits(text, true)
    }

    /// Picks the format from the text length: anything longer than
    /// `#RRGGBB` is read as `RRGGBBAA`.
    pub fn parse_smart(text: &str) -> Result<Self, ColorParseError> {
        Self::parse_digits(text, text.len() > 7)
    }

    fn parse_digits(text: &str, with_alpha: bool) -> Result<Self, ColorParseError> {
        let expected = if with_alpha { RGBA } else { RGB };
        let digits = text.strip_prefix('#').unwrap_or(text).as_bytes();

        if digits.len() != expected.len() {
            return Err(ColorParseError { expected });
        }

        let channel = |i: usize| -> Result<u8, ColorParseError> {
            let hi = hex(digits[i * 2]).ok_or(ColorParseError { expected })?;
            let lo = hex(digits[i * 2 + 1]).ok_or(ColorParseError { expected })?;
            Ok(hi << 4 | lo)
        };

        Ok(Self {
            r: channel(0)?,
            g: channel(1)?,
            b: channel(2)?,
            a: if with_alpha { channel(3)? } else { u8::MAX },
        })
    }
}

fn hex(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}
