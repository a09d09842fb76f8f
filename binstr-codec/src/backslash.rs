//! C-style backslash escaping.
//!
//! Printable ASCII passes through, `\`, `"` and `'` gain a leading
//! backslash, and every other byte becomes `\xNN`.

use crate::codec::Codec;
use crate::hex::{hex_pair, push_hex};
use binstr_core::{BinStrError, ByteBuilder, ByteString, Result};

const ESCAPE: u8 = b'\\';

/// Characters written as backslash + themselves.
const SELF_REPRESENTING: &[u8] = b"\\\"'";

fn is_printable(b: u8) -> bool {
    (0x20..0x7F).contains(&b)
}

/// Backslash escape encoder/decoder.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BackslashEscapeCodec {
    /// Emit lowercase hex digits in `\x` escapes.
    pub lower_case_hex: bool,
}

impl Default for BackslashEscapeCodec {
    fn default() -> Self {
        Self {
            lower_case_hex: true,
        }
    }
}

impl BackslashEscapeCodec {
    /// Backslash escaping with lowercase hex.
    pub fn new() -> Self {
        Self::default()
    }

    /// Choose the hex digit case used when encoding.
    pub fn lower_case_hex(mut self, lower_case_hex: bool) -> Self {
        self.lower_case_hex = lower_case_hex;
        self
    }
}

impl Codec for BackslashEscapeCodec {
    fn name(&self) -> &'static str {
        "backslash"
    }

    fn encode(&self, data: &[u8]) -> String {
        let mut out = String::with_capacity(data.len());
        for &b in data {
            if SELF_REPRESENTING.contains(&b) {
                out.push(char::from(ESCAPE));
                out.push(char::from(b));
            } else if is_printable(b) {
                out.push(char::from(b));
            } else {
                out.push_str("\\x");
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
            let b = bytes[i];
            if b == ESCAPE {
                match bytes.get(i + 1..) {
                    Some(&[c, ..]) if SELF_REPRESENTING.contains(&c) => {
                        decoded.append_byte(c)?;
                        i += 2;
                    }
                    Some(&[b'x', high, low, ..]) => {
                        let byte = hex_pair(high, low).ok_or_else(|| {
                            BinStrError::format(format!("invalid \\x escape at offset {i}"))
                        })?;
                        decoded.append_byte(byte)?;
                        i += 4;
                    }
                    _ => {
                        return Err(BinStrError::format(format!(
                            "invalid escape sequence at offset {i}"
                        )));
                    }
                }
            } else if is_printable(b) {
                decoded.append_byte(b)?;
                i += 1;
            } else {
                return Err(BinStrError::format(format!(
                    "unescaped non-printable character at offset {i}"
                )));
            }
        }

        decoded.into_byte_string()
    }
}
