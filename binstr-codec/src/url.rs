//! URL percent-encoding.

use crate::codec::Codec;
use crate::hex::{hex_pair, push_hex};
use binstr_core::{BinStrError, ByteBuilder, ByteString, Result};

/// Percent-encoding of every byte outside `0x21..=0x7E`, plus `%` and `+`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct UrlCodec {
    /// Emit lowercase hex digits after `%`.
    pub lower_case_hex: bool,
}

impl Default for UrlCodec {
    fn default() -> Self {
        Self {
            lower_case_hex: true,
        }
    }
}

impl UrlCodec {
    /// URL encoding with lowercase hex.
    pub fn new() -> Self {
        Self::default()
    }

    /// Choose the hex digit case used when encoding.
    pub fn lower_case_hex(mut self, lower_case_hex: bool) -> Self {
        self.lower_case_hex = lower_case_hex;
        self
    }
}

fn is_literal(b: u8) -> bool {
    b > 0x20 && b < 0x7F && b != b'+' && b != b'%'
}

impl Codec for UrlCodec {
    fn name(&self) -> &'static str {
        "url"
    }

    fn encode(&self, data: &[u8]) -> String {
        let mut out = String::with_capacity(data.len());
        for &b in data {
            if is_literal(b) {
                out.push(char::from(b));
            } else {
                out.push('%');
                push_hex(&mut out, b, self.lower_case_hex);
            }
        }
        out
    }

    fn decode(&self, encoded: &str) -> Result<ByteString> {
        let bytes = encoded.as_bytes();
        let mut decoded = ByteBuilder::with_capacity(bytes.len());

        let mut i = 0;
        while i < bytes.len() {
            match bytes[i] {
                b'+' => decoded.append_byte(b' ')?,
                b'%' => {
                    let byte = match bytes.get(i + 1..i + 3) {
                        Some(&[high, low]) => hex_pair(high, low),
                        _ => None,
                    }
                    .ok_or_else(|| {
                        BinStrError::format(format!("invalid escape sequence at offset {i}"))
                    })?;
                    decoded.append_byte(byte)?;
                    i += 2;
                }
                b if b <= b'~' => decoded.append_byte(b)?,
                _ => {
                    return Err(BinStrError::format(format!(
                        "non-ASCII character at offset {i}"
                    )));
                }
            }
            i += 1;
        }

        decoded.into_byte_string()
    }
}
