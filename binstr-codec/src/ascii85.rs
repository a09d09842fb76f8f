//! Ascii85 (btoa / Adobe flavour without the `z` shorthand).
//!
//! Every 4 input bytes become 5 base-85 digits, written as the characters
//! `!` (33) through `u` (117). A short final group emits only the digits
//! covering its genuine bytes.

use crate::codec::Codec;
use binstr_core::{BinStrError, ByteBuilder, ByteString, Result};

const PREFIX: &str = "<~";
const SUFFIX: &str = "~>";

/// Character value of digit 0.
const DIGIT_BASE: u32 = 33;

/// Highest valid digit; also the filler for a short final group.
const MAX_DIGIT: u32 = 84;

/// Ascii85 encoder/decoder.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Ascii85Codec {
    /// Maximum characters per output line; 0 disables wrapping.
    pub line_length: usize,
    /// Frame output with `<~ ~>` and require the framing when decoding.
    pub require_delimiters: bool,
    /// Line separator inserted when wrapping.
    pub newline: String,
}

impl Default for Ascii85Codec {
    fn default() -> Self {
        Self {
            line_length: 75,
            require_delimiters: true,
            newline: "\n".to_string(),
        }
    }
}

impl Ascii85Codec {
    /// Ascii85 with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the wrap column (0 disables wrapping).
    pub fn line_length(mut self, line_length: usize) -> Self {
        self.line_length = line_length;
        self
    }

    /// Enable or disable `<~ ~>` framing.
    pub fn require_delimiters(mut self, require_delimiters: bool) -> Self {
        self.require_delimiters = require_delimiters;
        self
    }

    /// Set the line separator used when wrapping.
    pub fn newline(mut self, newline: impl Into<String>) -> Self {
        self.newline = newline.into();
        self
    }
}

impl Codec for Ascii85Codec {
    fn name(&self) -> &'static str {
        "ascii85"
    }

    fn encode(&self, data: &[u8]) -> String {
        if data.is_empty() {
            return String::new();
        }

        let mut encoded = String::with_capacity(data.len() / 4 * 5 + 10);
        if self.require_delimiters {
            encoded.push_str(PREFIX);
        }

        let mut line_pos = 0;
        for chunk in data.chunks(4) {
            let padding = 4 - chunk.len();
            let mut group = [0u8; 4];
            group[..chunk.len()].copy_from_slice(chunk);

            let mut value = u32::from_be_bytes(group);
            let mut digits = [0u32; 5];
            for digit in digits.iter_mut().rev() {
                *digit = value % 85;
                value /= 85;
            }

            for &digit in &digits[..5 - padding] {
                if self.line_length > 0 && line_pos >= self.line_length {
                    encoded.push_str(&self.newline);
                    line_pos = 0;
                }
                // Digits are below 85, so this is always printable ASCII.
                encoded.push(char::from((DIGIT_BASE + digit) as u8));
                line_pos += 1;
            }
        }

        if self.require_delimiters {
            encoded.push_str(SUFFIX);
        }
        encoded
    }

    fn decode(&self, encoded: &str) -> Result<ByteString> {
        if encoded.is_empty() {
            return Ok(ByteString::new());
        }

        let body = if self.require_delimiters {
            encoded
                .strip_prefix(PREFIX)
                .and_then(|rest| rest.strip_suffix(SUFFIX))
                .ok_or_else(|| BinStrError::format("Ascii85 data must be framed by <~ and ~>"))?
        } else {
            encoded
        };

        let mut digits = Vec::with_capacity(body.len());
        for c in body.chars() {
            let code = c as u32;
            if code <= 0x20 {
                continue;
            }
            if code > DIGIT_BASE + MAX_DIGIT {
                return Err(BinStrError::format(format!(
                    "character {c:?} is not a valid Ascii85 digit"
                )));
            }
            digits.push(code - DIGIT_BASE);
        }

        let mut decoded = ByteBuilder::with_capacity(digits.len() / 5 * 4 + 4);
        for group in digits.chunks(5) {
            if group.len() == 1 {
                return Err(BinStrError::format(
                    "Ascii85 data ends with a truncated single-digit group",
                ));
            }
            let padding = 5 - group.len();

            let value = group
                .iter()
                .copied()
                .chain(std::iter::repeat_n(MAX_DIGIT, padding))
                .fold(0u64, |acc, digit| acc * 85 + digit as u64);
            let value = u32::try_from(value).map_err(|_| {
                BinStrError::format(format!("Ascii85 group value {value} exceeds 32 bits"))
            })?;

            decoded.append(&value.to_be_bytes()[..4 - padding])?;
        }

        decoded.into_byte_string()
    }
}
