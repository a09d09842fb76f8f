//! MIME Quoted-Printable, encode only.

use crate::codec::Codec;
use crate::hex::push_hex;
use binstr_core::{BinStrError, ByteMatcher, ByteString, Result};

/// Longest output line before a soft break is inserted.
const MAX_LINE_LENGTH: usize = 75;

#[cfg(windows)]
const PLATFORM_NEWLINE: &str = "\r\n";
#[cfg(not(windows))]
const PLATFORM_NEWLINE: &str = "\n";

/// Quoted-Printable encoder.
///
/// Printable ASCII other than `=` passes through; every other byte becomes
/// `=XX`. Lines longer than 75 characters are broken with a soft line
/// break (`=` followed by the newline).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct QuotedPrintableCodec {
    /// Emit lowercase hex digits.
    pub lower_case_hex: bool,
    /// Keep occurrences of `newline` in the input as hard line breaks.
    pub keep_newlines: bool,
    /// Insert soft line breaks to keep lines within 75 characters.
    pub enforce_line_length_limit: bool,
    /// Line separator, used both for hard and soft breaks.
    pub newline: String,
}

impl Default for QuotedPrintableCodec {
    fn default() -> Self {
        Self {
            lower_case_hex: false,
            keep_newlines: false,
            enforce_line_length_limit: true,
            newline: PLATFORM_NEWLINE.to_string(),
        }
    }
}

impl QuotedPrintableCodec {
    /// Quoted-Printable with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use lowercase hex digits.
    pub fn lower_case_hex(mut self, lower_case_hex: bool) -> Self {
        self.lower_case_hex = lower_case_hex;
        self
    }

    /// Preserve newlines in the input.
    pub fn keep_newlines(mut self, keep_newlines: bool) -> Self {
        self.keep_newlines = keep_newlines;
        self
    }

    /// Enable or disable soft line breaks.
    pub fn enforce_line_length_limit(mut self, enforce: bool) -> Self {
        self.enforce_line_length_limit = enforce;
        self
    }

    /// Set the line separator.
    pub fn newline(mut self, newline: impl Into<String>) -> Self {
        self.newline = newline.into();
        self
    }

    fn split_lines<'a>(&self, data: &'a [u8]) -> Vec<&'a [u8]> {
        if !self.keep_newlines || self.newline.is_empty() {
            return vec![data];
        }

        let matcher = ByteMatcher::new(&self.newline);
        let mut parts = Vec::new();
        let mut start = 0;
        for pos in matcher.find_iter(data) {
            parts.push(&data[start..pos]);
            start = pos + self.newline.len();
        }
        parts.push(&data[start..]);
        parts
    }
}

/// Output accumulator tracking the current line width.
struct LineWriter<'a> {
    out: String,
    line_length: usize,
    used_newlines: bool,
    enforce_limit: bool,
    newline: &'a str,
}

impl LineWriter<'_> {
    fn reserve(&mut self, width: usize) {
        if !self.enforce_limit {
            return;
        }
        if self.line_length + width > MAX_LINE_LENGTH {
            self.out.push('=');
            self.out.push_str(self.newline);
            self.used_newlines = true;
            self.line_length = width;
        } else {
            self.line_length += width;
        }
    }

    fn hard_break(&mut self) {
        self.out.push_str(self.newline);
        self.line_length = 0;
    }
}

impl Codec for QuotedPrintableCodec {
    fn name(&self) -> &'static str {
        "quoted-printable"
    }

    fn encode(&self, data: &[u8]) -> String {
        let parts = self.split_lines(data);
        let mut writer = LineWriter {
            out: String::with_capacity(data.len() * 3 / 2),
            line_length: 0,
            used_newlines: self.keep_newlines,
            enforce_limit: self.enforce_line_length_limit,
            newline: &self.newline,
        };

        for (i, part) in parts.iter().enumerate() {
            if i > 0 {
                writer.hard_break();
            }
            for &b in *part {
                if (0x20..=0x7E).contains(&b) && b != b'=' {
                    writer.reserve(1);
                    writer.out.push(char::from(b));
                } else {
                    writer.reserve(3);
                    writer.out.push('=');
                    push_hex(&mut writer.out, b, self.lower_case_hex);
                }
            }
        }

        let mut encoded = writer.out;
        if writer.used_newlines && !self.newline.is_empty() {
            encoded = encoded.replace(
                &format!(" {}", self.newline),
                &format!("=20{}", self.newline),
            );
        }
        if encoded.ends_with(' ') {
            encoded.pop();
            encoded.push_str("=20");
        }
        encoded
    }

    fn decode(&self, _encoded: &str) -> Result<ByteString> {
        Err(BinStrError::not_supported("quoted-printable decoding"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRENCH: &str = "J'interdis aux marchands de vanter trop leur marchandises. Car ils se font vite pédagogues et t'enseignent comme but ce qui n'est par essence qu'un moyen, et te trompant ainsi sur la route à suivre les voilà bientôt qui te dégradent, car si leur musique est vulgaire ils te fabriquent pour te la vendre une âme vulgaire.";

    const FRENCH_QP: &str = "J'interdis aux marchands de vanter trop leur marchandises. Car ils se font =\nvite p=C3=A9dagogues et t'enseignent comme but ce qui n'est par essence qu'=\nun moyen, et te trompant ainsi sur la route =C3=A0 suivre les voil=C3=A0 bi=\nent=C3=B4t qui te d=C3=A9gradent, car si leur musique est vulgaire ils te f=\nabriquent pour te la vendre une =C3=A2me vulgaire.";

    #[test]
    fn test_encode_utf8() {
        let qp = QuotedPrintableCodec::new();
        assert_eq!(qp.encode("Café".as_bytes()), "Caf=C3=A9");
        assert_eq!(qp.encode("2 × 5 = 10".as_bytes()), "2 =C3=97 5 =3D 10");

        let lower = QuotedPrintableCodec::new().lower_case_hex(true);
        assert_eq!(lower.encode("Café".as_bytes()), "Caf=c3=a9");
    }

    #[test]
    fn test_soft_line_breaks() {
        let qp = QuotedPrintableCodec::new().newline("\n");
        assert_eq!(qp.encode(FRENCH.as_bytes()), FRENCH_QP);

        for line in qp.encode(FRENCH.as_bytes()).split('\n') {
            assert!(line.len() <= 76, "{line:?}");
        }
    }

    #[test]
    fn test_soft_break_position() {
        let qp = QuotedPrintableCodec::new().newline("\n");
        let encoded = qp.encode(&[b'x'; 80]);
        assert_eq!(encoded, format!("{}=\n{}", "x".repeat(75), "x".repeat(5)));

        // An escape never straddles a soft break.
        let mut data = vec![b'x'; 74];
        data.push(0xFF);
        let encoded = qp.encode(&data);
        assert_eq!(encoded, format!("{}=\n=FF", "x".repeat(74)));
    }

    #[test]
    fn test_no_line_limit() {
        let qp = QuotedPrintableCodec::new().enforce_line_length_limit(false);
        let encoded = qp.encode(&[b'y'; 200]);
        assert_eq!(encoded.len(), 200);
        assert_eq!(qp.encode(b"Ends in space "), "Ends in space=20");
    }

    #[test]
    fn test_keep_newlines() {
        let qp = QuotedPrintableCodec::new()
            .keep_newlines(true)
            .newline("\r\n");
        assert_eq!(
            qp.encode(b"This string \r\nhas newlines\r\nmarked with CRLF. "),
            "This string=20\r\nhas newlines\r\nmarked with CRLF.=20"
        );

        let lf = QuotedPrintableCodec::new().keep_newlines(true).newline("\n");
        assert_eq!(lf.encode(b"line one\nline two"), "line one\nline two");
    }

    #[test]
    fn test_newlines_escaped_by_default() {
        let qp = QuotedPrintableCodec::new().newline("\n");
        assert_eq!(qp.encode(b"a\r\nb"), "a=0D=0Ab");
    }

    #[test]
    fn test_empty() {
        assert_eq!(QuotedPrintableCodec::new().encode(b""), "");
    }

    #[test]
    fn test_decode_not_supported() {
        let qp = QuotedPrintableCodec::new();
        assert!(matches!(
            qp.decode("Caf=C3=A9"),
            Err(BinStrError::NotSupported { .. })
        ));
    }
}
