//! # binstr-codec: Binary-to-Text Codecs
//!
//! This crate converts byte strings to text and back in the classic
//! binary-to-text formats.
//!
//! ## Codecs
//!
//! | Codec              | Decode | Notes                                        |
//! |--------------------|--------|----------------------------------------------|
//! | Base32             | yes    | RFC 4648, z-base-32, Crockford, base32hex    |
//! | Ascii85            | yes    | `<~ ~>` framing, line wrapping               |
//! | UUEncode           | yes    | `begin`/`end` framing, 45-byte lines         |
//! | Quoted-Printable   | no     | soft line breaks at 75 characters            |
//! | URL                | yes    | percent-encoding, `+` decodes to space       |
//! | Backslash          | yes    | `\\`, `\"`, `\'`, `\xNN`                     |
//! | Base64             | yes    | standard padded alphabet                     |
//! | Hex                | yes    | whitespace-tolerant decode                   |
//!
//! Every codec implements [`Codec`]. [`CodecKind`] is the closed set of
//! codecs, selectable by name.
//!
//! ## Bit packing
//!
//! Base32 symbols are 5 bits wide, so encoding walks the input with an
//! MSB-first [`binstr_core::BitReader`]:
//!
//! ```text
//! 'H' 01001000 'i' 01101001
//!     01001 00001 10100 1[0000]   <- last group zero-filled
//!       9     1    20     16      -> "JBUQ" + "===="
//! ```
//!
//! ## Example
//!
//! ```rust
//! use binstr_codec::{Base32Codec, Codec, CodecKind};
//!
//! let base32 = Base32Codec::new();
//! let text = base32.encode(b"Hello, world!");
//! assert_eq!(text, "JBSWY3DPFQQHO33SNRSCC===");
//! assert_eq!(base32.decode(&text).unwrap(), b"Hello, world!");
//!
//! // Select a codec at runtime
//! let ascii85 = CodecKind::from_name("ascii85").unwrap();
//! assert_eq!(ascii85.encode(b"sure."), "<~F*2M7/c~>");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::new_without_default)]
#![forbid(unsafe_code)]

mod ascii85;
mod backslash;
mod base32;
mod base64;
mod codec;
mod hex;
mod quoted_printable;
mod url;
mod uuencode;

pub use ascii85::Ascii85Codec;
pub use backslash::BackslashEscapeCodec;
pub use base32::{Alphabet, Base32Codec};
pub use base64::Base64Codec;
pub use codec::{Codec, CodecKind};
pub use hex::HexCodec;
pub use quoted_printable::QuotedPrintableCodec;
pub use url::UrlCodec;
pub use uuencode::UuencodeCodec;

pub use binstr_core::{BinStrError, ByteString, Result};

/// Encode `data` with the codec called `name`, using default options.
///
/// # Example
///
/// ```rust
/// let text = binstr_codec::encode("url", b"a b").unwrap();
/// assert_eq!(text, "a%20b");
/// ```
pub fn encode(name: &str, data: &[u8]) -> Result<String> {
    let codec = lookup(name)?;
    Ok(codec.encode(data))
}

/// Decode `encoded` with the codec called `name`, using default options.
///
/// # Example
///
/// ```rust
/// let data = binstr_codec::decode("hex", "cafe").unwrap();
/// assert_eq!(data, &[0xCAu8, 0xFE]);
/// ```
pub fn decode(name: &str, encoded: &str) -> Result<ByteString> {
    lookup(name)?.decode(encoded)
}

fn lookup(name: &str) -> Result<CodecKind> {
    CodecKind::from_name(name).ok_or_else(|| {
        BinStrError::invalid_argument(format!(
            "unknown codec '{name}' (expected one of: {})",
            CodecKind::all_names().join(", ")
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_by_name() {
        assert_eq!(encode("base32", b"a").unwrap(), "ME======");
        assert_eq!(encode("BASE64", b"a").unwrap(), "YQ==");
        assert!(matches!(
            encode("rot13", b"a"),
            Err(BinStrError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_decode_by_name() {
        assert_eq!(decode("url", "a+b").unwrap(), b"a b");
        assert!(matches!(
            decode("quoted-printable", "a"),
            Err(BinStrError::NotSupported { .. })
        ));
    }

    #[test]
    fn test_bit_packing_example() {
        assert_eq!(encode("base32", b"Hi").unwrap(), "JBUQ====");
    }
}
