//! Standard Base64 (RFC 4648 alphabet, padded).

use crate::codec::Codec;
use ::base64::Engine;
use ::base64::engine::general_purpose::STANDARD;
use binstr_core::{BinStrError, ByteString, Result};

/// Base64 encoder/decoder backed by the `base64` crate's standard engine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Base64Codec;

impl Base64Codec {
    /// Standard padded Base64.
    pub fn new() -> Self {
        Self
    }
}

impl Codec for Base64Codec {
    fn name(&self) -> &'static str {
        "base64"
    }

    fn encode(&self, data: &[u8]) -> String {
        STANDARD.encode(data)
    }

    fn decode(&self, encoded: &str) -> Result<ByteString> {
        STANDARD
            .decode(encoded)
            .map(ByteString::from)
            .map_err(|e| BinStrError::format(format!("invalid base64: {e}")))
    }
}
