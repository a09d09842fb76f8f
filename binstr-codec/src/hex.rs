//! Plain hexadecimal (base16), plus the hex digit helpers the escaping
//! codecs share.

use crate::codec::Codec;
use binstr_core::{BinStrError, ByteBuilder, ByteString, Result};

const LOWER_DIGITS: &[u8; 16] = b"0123456789abcdef";
const UPPER_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Append the two hex digits of `byte`.
pub(crate) fn push_hex(out: &mut String, byte: u8, lower_case: bool) {
    let digits = if lower_case { LOWER_DIGITS } else { UPPER_DIGITS };
    out.push(char::from(digits[usize::from(byte >> 4)]));
    out.push(char::from(digits[usize::from(byte & 0x0F)]));
}

/// Value of one hex digit, either case.
pub(crate) fn hex_value(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

/// Parse a two-digit hex pair.
pub(crate) fn hex_pair(high: u8, low: u8) -> Option<u8> {
    Some(hex_value(high)? << 4 | hex_value(low)?)
}

/// Hexadecimal encoder/decoder.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HexCodec {
    /// Emit lowercase digits.
    pub lower_case: bool,
}

impl Default for HexCodec {
    fn default() -> Self {
        Self { lower_case: true }
    }
}

impl HexCodec {
    /// Hex with lowercase digits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Choose the digit case used when encoding.
    pub fn lower_case(mut self, lower_case: bool) -> Self {
        self.lower_case = lower_case;
        self
    }
}

impl Codec for HexCodec {
    fn name(&self) -> &'static str {
        "hex"
    }

    fn encode(&self, data: &[u8]) -> String {
        let mut out = String::with_capacity(data.len() * 2);
        for &b in data {
            push_hex(&mut out, b, self.lower_case);
        }
        out
    }

    fn decode(&self, encoded: &str) -> Result<ByteString> {
        let digits: Vec<u8> = encoded
            .bytes()
            .filter(|b| !b.is_ascii_whitespace())
            .collect();
        if digits.len() % 2 != 0 {
            return Err(BinStrError::format(format!(
                "hex input has an odd number of digits ({})",
                digits.len()
            )));
        }

        let mut decoded = ByteBuilder::with_capacity(digits.len() / 2);
        for pair in digits.chunks_exact(2) {
            let byte = hex_pair(pair[0], pair[1]).ok_or_else(|| {
                BinStrError::format(format!(
                    "invalid hex pair {:?}",
                    String::from_utf8_lossy(pair)
                ))
            })?;
            decoded.append_byte(byte)?;
        }
        decoded.into_byte_string()
    }
}
