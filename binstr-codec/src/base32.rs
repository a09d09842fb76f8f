//! Base32 with pluggable alphabets.
//!
//! Input bytes are regrouped into 5-bit symbols, MSB-first, and each symbol
//! is mapped through a 32-character [`Alphabet`]. Output is optionally padded
//! to a multiple of 8 characters.

use crate::codec::Codec;
use binstr_core::{BinStrError, BitReader, BitWriter, ByteString, Result, UnevenMode};
use std::fmt;

/// Bits per Base32 symbol.
const SYMBOL_BITS: u32 = 5;

/// Encoded output is padded to a multiple of this many characters.
const PAD_BLOCK: usize = 8;

/// Expand a 32-byte ASCII character set known to be valid.
const fn ascii_symbols(set: &str) -> [char; 32] {
    let bytes = set.as_bytes();
    let mut symbols = ['\0'; 32];
    let mut i = 0;
    while i < 32 {
        symbols[i] = bytes[i] as char;
        i += 1;
    }
    symbols
}

/// A bijection between 32 distinct characters and the values 0-31.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct Alphabet {
    symbols: [char; 32],
}

impl Alphabet {
    /// The RFC 4648 character set.
    pub const RFC4648: &'static str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

    /// The z-base-32 character set.
    pub const ZBASE32: &'static str = "ybndrfg8ejkmcpqxot1uwisza345h769";

    /// Douglas Crockford's character set.
    pub const CROCKFORD: &'static str = "0123456789ABCDEFGHJKMNPQRSTVWXYZ";

    /// The "extended hex" (base32hex) character set.
    pub const BASE32HEX: &'static str = "0123456789ABCDEFGHIJKLMNOPQRSTUV";

    /// Build an alphabet from exactly 32 distinct characters.
    pub fn new(symbols: &str) -> Result<Self> {
        let chars: Vec<char> = symbols.chars().collect();
        let symbols: [char; 32] = chars.as_slice().try_into().map_err(|_| {
            BinStrError::invalid_argument(format!(
                "Base32 alphabet must be exactly 32 characters, got {}",
                chars.len()
            ))
        })?;

        for (i, c) in symbols.iter().enumerate() {
            if symbols[..i].contains(c) {
                return Err(BinStrError::invalid_argument(format!(
                    "Base32 alphabet repeats the character {c:?}"
                )));
            }
        }

        Ok(Self { symbols })
    }

    /// The RFC 4648 alphabet.
    pub fn rfc4648() -> Self {
        Self {
            symbols: ascii_symbols(Self::RFC4648),
        }
    }

    /// The z-base-32 alphabet.
    pub fn zbase32() -> Self {
        Self {
            symbols: ascii_symbols(Self::ZBASE32),
        }
    }

    /// The Crockford alphabet.
    pub fn crockford() -> Self {
        Self {
            symbols: ascii_symbols(Self::CROCKFORD),
        }
    }

    /// The base32hex alphabet.
    pub fn base32hex() -> Self {
        Self {
            symbols: ascii_symbols(Self::BASE32HEX),
        }
    }

    /// The character for a 5-bit value.
    #[inline]
    pub fn symbol(&self, value: u8) -> char {
        self.symbols[(value & 0x1F) as usize]
    }

    /// The 5-bit value of a character, folding ASCII case if requested.
    pub fn value_of(&self, c: char, ignore_case: bool) -> Option<u8> {
        self.symbols
            .iter()
            .position(|&s| s == c || (ignore_case && s.eq_ignore_ascii_case(&c)))
            .map(|index| index as u8)
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::rfc4648()
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.symbols.iter().try_for_each(|c| write!(f, "{c}"))
    }
}

impl fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Alphabet({:?})", self.to_string())
    }
}

impl TryFrom<String> for Alphabet {
    type Error = BinStrError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(&value)
    }
}

impl From<Alphabet> for String {
    fn from(value: Alphabet) -> Self {
        value.to_string()
    }
}

/// Base32 encoder/decoder.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Base32Codec {
    /// Symbol set.
    pub alphabet: Alphabet,
    /// Character appended when `use_padding` is set.
    pub padding_char: char,
    /// Pad output to a multiple of 8 characters.
    pub use_padding: bool,
    /// Match symbols and padding ignoring ASCII case when decoding.
    pub ignore_case: bool,
    /// Skip whitespace when decoding.
    pub ignore_whitespace: bool,
}

impl Default for Base32Codec {
    fn default() -> Self {
        Self {
            alphabet: Alphabet::default(),
            padding_char: '=',
            use_padding: true,
            ignore_case: true,
            ignore_whitespace: true,
        }
    }
}

impl Base32Codec {
    /// RFC 4648 Base32 with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Default options with a custom alphabet.
    pub fn with_alphabet(alphabet: Alphabet) -> Self {
        Self {
            alphabet,
            ..Self::default()
        }
    }

    /// Set the padding character.
    pub fn padding_char(mut self, padding_char: char) -> Self {
        self.padding_char = padding_char;
        self
    }

    /// Enable or disable output padding.
    pub fn use_padding(mut self, use_padding: bool) -> Self {
        self.use_padding = use_padding;
        self
    }

    /// Enable or disable case-insensitive decoding.
    pub fn ignore_case(mut self, ignore_case: bool) -> Self {
        self.ignore_case = ignore_case;
        self
    }

    /// Enable or disable whitespace skipping when decoding.
    pub fn ignore_whitespace(mut self, ignore_whitespace: bool) -> Self {
        self.ignore_whitespace = ignore_whitespace;
        self
    }

    fn is_padding(&self, c: char) -> bool {
        c == self.padding_char || (self.ignore_case && c.eq_ignore_ascii_case(&self.padding_char))
    }

    fn is_skipped_whitespace(&self, c: char) -> bool {
        self.ignore_whitespace && c.is_whitespace()
    }
}

impl Codec for Base32Codec {
    fn name(&self) -> &'static str {
        "base32"
    }

    fn encode(&self, data: &[u8]) -> String {
        let mut reader = BitReader::new(data);
        let mut encoded = String::with_capacity(data.len().div_ceil(5) * PAD_BLOCK);
        let mut symbols = 0usize;

        // A short final group is already zero-filled in its low bits.
        while let Ok((1.., value)) = reader.read_bits(SYMBOL_BITS) {
            encoded.push(self.alphabet.symbol(value as u8));
            symbols += 1;
        }

        if self.use_padding {
            while symbols % PAD_BLOCK != 0 {
                encoded.push(self.padding_char);
                symbols += 1;
            }
        }

        encoded
    }

    fn decode(&self, encoded: &str) -> Result<ByteString> {
        let body = encoded
            .trim_end_matches(|c: char| self.is_padding(c) || self.is_skipped_whitespace(c));

        let mut writer = BitWriter::with_capacity(body.len() * 5 / 8);
        for c in body.chars() {
            if self.is_skipped_whitespace(c) {
                continue;
            }
            let value = self.alphabet.value_of(c, self.ignore_case).ok_or_else(|| {
                BinStrError::format(format!("character {c:?} is not in the Base32 alphabet"))
            })?;
            writer.write_bits(value as u32, SYMBOL_BITS)?;
        }

        // Trailing bits that do not fill a byte are the encoder's zero fill.
        writer.to_byte_string(UnevenMode::Truncate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_validation() {
        assert!(Alphabet::new(Alphabet::RFC4648).is_ok());
        assert!(matches!(
            Alphabet::new("ABC"),
            Err(BinStrError::InvalidArgument { .. })
        ));
        assert!(matches!(
            Alphabet::new("AACDEFGHIJKLMNOPQRSTUVWXYZ234567"),
            Err(BinStrError::InvalidArgument { .. })
        ));
        assert_eq!(Alphabet::crockford().to_string(), Alphabet::CROCKFORD);
    }

    #[test]
    fn test_alphabet_lookup() {
        let alphabet = Alphabet::rfc4648();
        assert_eq!(alphabet.symbol(0), 'A');
        assert_eq!(alphabet.symbol(31), '7');
        assert_eq!(alphabet.value_of('C', false), Some(2));
        assert_eq!(alphabet.value_of('c', false), None);
        assert_eq!(alphabet.value_of('c', true), Some(2));
        assert_eq!(alphabet.value_of('1', true), None);
    }

    #[test]
    fn test_encode() {
        let base32 = Base32Codec::new();
        assert_eq!(base32.encode(b""), "");
        assert_eq!(base32.encode(b"Hello, world!"), "JBSWY3DPFQQHO33SNRSCC===");
        assert_eq!(base32.encode(b"This is a test."), "KRUGS4ZANFZSAYJAORSXG5BO");
    }

    #[test]
    fn test_encode_custom_padding() {
        let base32 = Base32Codec::new().padding_char('?');
        assert_eq!(base32.encode(b"a"), "ME??????");

        let base32 = base32.use_padding(false);
        assert_eq!(base32.encode(b"Hello, world!"), "JBSWY3DPFQQHO33SNRSCC");
    }

    #[test]
    fn test_encode_alternate_alphabet() {
        let alphabet = Alphabet::new(&Alphabet::CROCKFORD.to_ascii_lowercase()).unwrap();
        let base32 = Base32Codec::with_alphabet(alphabet).use_padding(false);
        assert_eq!(base32.encode(b"Hello, world!"), "91jprv3f5gg7evvjdhj22");
    }

    #[test]
    fn test_decode() {
        let base32 = Base32Codec::new();
        assert!(base32.decode("").unwrap().is_empty());
        assert!(base32.decode("========").unwrap().is_empty());
        assert_eq!(base32.decode("OZ3XQ6L2").unwrap(), b"vwxyz");
        assert_eq!(base32.decode("IRSWG33EMU======").unwrap(), b"Decode");
        assert_eq!(base32.decode("HU6VIRKTKQ6T2===").unwrap(), b"==TEST==");
    }

    #[test]
    fn test_decode_without_padding() {
        let base32 = Base32Codec::new();
        assert_eq!(base32.decode("PZ2GK43UPY").unwrap(), b"~test~");
        assert_eq!(base32.decode("H4").unwrap(), b"?");
    }

    #[test]
    fn test_decode_whitespace_and_case() {
        let base32 = Base32Codec::new();
        assert_eq!(
            base32.decode("\r\nK5UG S5DF KNYG\tCY\t3F\n").unwrap(),
            b"WhiteSpace"
        );
        assert_eq!(base32.decode("py7x4===").unwrap(), b"~?~");
        assert_eq!(base32.decode("PY7X4===\n").unwrap(), b"~?~");

        let strict = Base32Codec::new().ignore_case(false);
        assert!(matches!(
            strict.decode("py7x4==="),
            Err(BinStrError::Format { .. })
        ));

        let no_ws = Base32Codec::new().ignore_whitespace(false);
        assert!(no_ws.decode("K5UG S5DF").is_err());
    }

    #[test]
    fn test_decode_invalid_character() {
        let base32 = Base32Codec::new();
        let err = base32.decode("ERROR!").unwrap_err();
        assert!(matches!(err, BinStrError::Format { .. }));
        assert!(err.to_string().contains("'!'"));
    }

    #[test]
    fn test_decode_alternate_alphabet() {
        let alphabet = Alphabet::new(&Alphabet::CROCKFORD.to_ascii_lowercase()).unwrap();
        let base32 = Base32Codec::with_alphabet(alphabet);
        assert_eq!(base32.decode("64s36d1n").unwrap(), b"12345");
        // Case folding works in both directions.
        assert_eq!(base32.decode("64S36D1N").unwrap(), b"12345");
    }

    #[test]
    fn test_roundtrip_zbase32() {
        let base32 = Base32Codec::with_alphabet(Alphabet::zbase32());
        let mut data = Vec::new();
        for i in 0..100u32 {
            let encoded = base32.encode(&data);
            assert_eq!(base32.decode(&encoded).unwrap(), data);
            data.push(((i * 3) % 256) as u8);
        }
    }
}
