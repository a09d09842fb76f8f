//! The codec abstraction and the closed set of codec variants.

use crate::ascii85::Ascii85Codec;
use crate::backslash::BackslashEscapeCodec;
use crate::base32::Base32Codec;
use crate::base64::Base64Codec;
use crate::hex::HexCodec;
use crate::quoted_printable::QuotedPrintableCodec;
use crate::url::UrlCodec;
use crate::uuencode::UuencodeCodec;
use binstr_core::{ByteString, Result};
use std::fmt;
use tracing::{debug, trace};

/// A binary-to-text encoding.
///
/// Encoding is total: every byte sequence has a text form. Decoding may
/// fail with a format error, and never yields partial output.
pub trait Codec {
    /// Short lowercase identifier, e.g. `"base32"`.
    fn name(&self) -> &'static str;

    /// Encode bytes as text.
    fn encode(&self, data: &[u8]) -> String;

    /// Decode text back to bytes.
    fn decode(&self, encoded: &str) -> Result<ByteString>;
}

/// Every supported codec, each carrying its own options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecKind {
    /// Base32 with a configurable alphabet.
    Base32(Base32Codec),
    /// Ascii85 (`<~ ~>` framed).
    Ascii85(Ascii85Codec),
    /// Unix-to-Unix encoding.
    Uuencode(UuencodeCodec),
    /// MIME Quoted-Printable (encode only).
    QuotedPrintable(QuotedPrintableCodec),
    /// URL percent-encoding.
    Url(UrlCodec),
    /// C-style backslash escaping.
    BackslashEscape(BackslashEscapeCodec),
    /// Standard Base64.
    Base64(Base64Codec),
    /// Plain hexadecimal.
    Hex(HexCodec),
}

const NAMES: &[&str] = &[
    "base32",
    "ascii85",
    "uuencode",
    "quoted-printable",
    "url",
    "backslash",
    "base64",
    "hex",
];

impl CodecKind {
    /// Look up a codec by name (case-insensitive) with default options.
    ///
    /// A few common aliases are accepted (`b32`, `a85`, `uu`, `qp`, `b64`).
    pub fn from_name(name: &str) -> Option<Self> {
        let kind = match name.to_ascii_lowercase().as_str() {
            "base32" | "b32" => Self::Base32(Base32Codec::default()),
            "ascii85" | "a85" | "base85" => Self::Ascii85(Ascii85Codec::default()),
            "uuencode" | "uu" => Self::Uuencode(UuencodeCodec::default()),
            "quoted-printable" | "qp" => Self::QuotedPrintable(QuotedPrintableCodec::default()),
            "url" => Self::Url(UrlCodec::default()),
            "backslash" => Self::BackslashEscape(BackslashEscapeCodec::default()),
            "base64" | "b64" => Self::Base64(Base64Codec::default()),
            "hex" | "base16" => Self::Hex(HexCodec::default()),
            _ => return None,
        };
        Some(kind)
    }

    /// Canonical names of every codec, in declaration order.
    pub fn all_names() -> &'static [&'static str] {
        NAMES
    }

    /// Whether this codec implements decoding.
    pub fn can_decode(&self) -> bool {
        !matches!(self, Self::QuotedPrintable(_))
    }

    fn inner(&self) -> &dyn Codec {
        match self {
            Self::Base32(codec) => codec,
            Self::Ascii85(codec) => codec,
            Self::Uuencode(codec) => codec,
            Self::QuotedPrintable(codec) => codec,
            Self::Url(codec) => codec,
            Self::BackslashEscape(codec) => codec,
            Self::Base64(codec) => codec,
            Self::Hex(codec) => codec,
        }
    }
}

impl Codec for CodecKind {
    fn name(&self) -> &'static str {
        self.inner().name()
    }

    fn encode(&self, data: &[u8]) -> String {
        trace!(codec = self.name(), bytes = data.len(), "encode");
        self.inner().encode(data)
    }

    fn decode(&self, encoded: &str) -> Result<ByteString> {
        trace!(codec = self.name(), chars = encoded.len(), "decode");
        self.inner().decode(encoded).inspect_err(|e| {
            debug!(codec = self.name(), error = %e, "decode failed");
        })
    }
}

impl fmt::Display for CodecKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
