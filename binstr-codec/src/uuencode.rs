//! Unix-to-Unix encoding.
//!
//! ```text
//! begin 644 cat.txt
//! #0V%T          <- length char (32 + n), then 4 chars per 3 bytes
//! `              <- terminator
//! end
//! ```

use crate::codec::Codec;
use binstr_core::{BinStrError, ByteBuilder, ByteString, Result};

/// Input bytes per encoded line.
const LINE_BYTES: usize = 45;

/// Offset added to every 6-bit value and to the line length.
const CHAR_BASE: u8 = 32;

/// Pad byte for a short final triple.
const FILLER: u8 = 32;

const TERMINATOR: &str = "`";

/// UUEncode encoder/decoder.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct UuencodeCodec {
    /// Name written into the `begin` header.
    pub file_name: String,
    /// Permission string written into the `begin` header.
    pub unix_permissions: String,
    /// Line separator.
    pub newline: String,
}

impl Default for UuencodeCodec {
    fn default() -> Self {
        Self {
            file_name: "data".to_string(),
            unix_permissions: "644".to_string(),
            newline: "\n".to_string(),
        }
    }
}

impl UuencodeCodec {
    /// UUEncode with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the header file name.
    pub fn file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    /// Set the header permission string.
    pub fn unix_permissions(mut self, unix_permissions: impl Into<String>) -> Self {
        self.unix_permissions = unix_permissions.into();
        self
    }

    /// Set the line separator.
    pub fn newline(mut self, newline: impl Into<String>) -> Self {
        self.newline = newline.into();
        self
    }
}

fn encode_line(line: &[u8], out: &mut String) {
    // `line.len()` is at most 45, so the length char stays printable.
    out.push(char::from(CHAR_BASE + line.len() as u8));
    for triple in line.chunks(3) {
        let mut group = [FILLER; 3];
        group[..triple.len()].copy_from_slice(triple);
        let section = u32::from(group[0]) << 16 | u32::from(group[1]) << 8 | u32::from(group[2]);
        for shift in [18, 12, 6, 0] {
            out.push(char::from(CHAR_BASE + ((section >> shift) & 0x3F) as u8));
        }
    }
}

/// Value of the char at `i`, or 0 past the end or outside the 6-bit range.
fn value_at(line: &[u8], i: usize) -> u32 {
    match line.get(i) {
        Some(&c) => {
            let v = c.wrapping_sub(CHAR_BASE);
            if v >= 64 { 0 } else { u32::from(v) }
        }
        None => 0,
    }
}

impl Codec for UuencodeCodec {
    fn name(&self) -> &'static str {
        "uuencode"
    }

    fn encode(&self, data: &[u8]) -> String {
        let mut out = String::with_capacity(data.len() / 3 * 4 + data.len() / LINE_BYTES + 32);
        out.push_str("begin ");
        out.push_str(&self.unix_permissions);
        out.push(' ');
        out.push_str(&self.file_name);
        out.push_str(&self.newline);

        for line in data.chunks(LINE_BYTES) {
            encode_line(line, &mut out);
            out.push_str(&self.newline);
        }

        out.push_str(TERMINATOR);
        out.push_str(&self.newline);
        out.push_str("end");
        out
    }

    fn decode(&self, encoded: &str) -> Result<ByteString> {
        let lines: Vec<&str> = encoded
            .split(['\r', '\n'])
            .filter(|line| !line.is_empty())
            .collect();
        if lines.len() < 3 || !lines[0].starts_with("begin ") {
            return Err(BinStrError::format(
                "input does not look like uuencoded data (missing begin header)",
            ));
        }

        let mut decoded = ByteBuilder::new();
        for (number, line) in lines.iter().enumerate().skip(1) {
            if *line == TERMINATOR {
                break;
            }
            let line = line.as_bytes();

            let count = usize::from(line[0].wrapping_sub(CHAR_BASE) & 0x3F);
            // Needs at least count * 4/3 + 1 chars.
            if 3 * line.len() < 4 * count + 3 {
                return Err(BinStrError::format(format!(
                    "uuencoded line {} is too short for its declared {count} bytes",
                    number + 1
                )));
            }

            let mut line_data = Vec::with_capacity(LINE_BYTES + 3);
            for i in (1..line.len()).step_by(4) {
                let section = value_at(line, i) << 18
                    | value_at(line, i + 1) << 12
                    | value_at(line, i + 2) << 6
                    | value_at(line, i + 3);
                line_data.extend_from_slice(&section.to_be_bytes()[1..]);
            }

            if line_data.len() < count {
                return Err(BinStrError::format(format!(
                    "uuencoded line {} decodes to fewer than {count} bytes",
                    number + 1
                )));
            }
            decoded.append(&line_data[..count])?;
        }

        decoded.into_byte_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode() {
        let uu = UuencodeCodec::new().file_name("cat.txt");
        assert_eq!(uu.encode(b"Cat"), "begin 644 cat.txt\n#0V%T\n`\nend");
    }

    #[test]
    fn test_encode_options() {
        let uu = UuencodeCodec::new()
            .file_name("a.bin")
            .unix_permissions("600")
            .newline("\r\n");
        assert_eq!(uu.encode(b"Cat"), "begin 600 a.bin\r\n#0V%T\r\n`\r\nend");
    }

    #[test]
    fn test_encode_full_lines() {
        let uu = UuencodeCodec::new();
        let data = vec![b'x'; 100];
        let encoded = uu.encode(&data);
        let lines: Vec<&str> = encoded.lines().collect();

        assert_eq!(lines.len(), 1 + 3 + 2);
        assert!(lines[1].starts_with('M'));
        assert_eq!(lines[1].len(), 61);
        assert!(lines[2].starts_with('M'));
        // 10 trailing bytes: length char '*', then 4 groups.
        assert_eq!(lines[3].len(), 1 + 16);
        assert!(lines[3].starts_with('*'));
        assert_eq!(uu.decode(&encoded).unwrap(), data);
    }

    #[test]
    fn test_encode_empty() {
        let uu = UuencodeCodec::new();
        let encoded = uu.encode(b"");
        assert_eq!(encoded, "begin 644 data\n`\nend");
        assert!(uu.decode(&encoded).unwrap().is_empty());
    }

    #[test]
    fn test_decode() {
        let uu = UuencodeCodec::new();
        let encoded = "begin 644 wikipedia-url.txt\n::'1T<#HO+W=W=RYW:6MI<&5D:6$N;W)G#0H`\n`\nend";
        assert_eq!(uu.decode(encoded).unwrap(), b"http://www.wikipedia.org\r\n");

        let crlf = encoded.replace('\n', "\r\n");
        assert_eq!(uu.decode(&crlf).unwrap(), b"http://www.wikipedia.org\r\n");
    }

    #[test]
    fn test_roundtrip_tricky_bytes() {
        let uu = UuencodeCodec::new();
        let mut data: Vec<u8> = (0..44u8).map(|i| i * 3).collect();
        data.push(0x84);
        assert_eq!(uu.decode(&uu.encode(&data)).unwrap(), data);
    }

    #[test]
    fn test_decode_rejects_non_uuencoded() {
        let uu = UuencodeCodec::new();
        for bad in ["", "hello", "#0V%T\n`\nend\nmore", "start 644 x\n#0V%T\n`\nend"] {
            assert!(
                matches!(uu.decode(bad), Err(BinStrError::Format { .. })),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_decode_short_line() {
        let uu = UuencodeCodec::new();
        // 'M' declares 45 bytes on a line holding far fewer.
        assert!(matches!(
            uu.decode("begin 644 x\nM0V%T\n`\nend"),
            Err(BinStrError::Format { .. })
        ));
    }

    #[test]
    fn test_backtick_length_means_zero() {
        let uu = UuencodeCodec::new();
        assert!(uu.decode("begin 644 x\n``\n`\nend").unwrap().is_empty());
    }
}
