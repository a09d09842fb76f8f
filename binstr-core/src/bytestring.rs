//! Immutable byte strings.
//!
//! [`ByteString`] owns an immutable sequence of bytes. Equality and ordering
//! are byte-wise lexicographic. Substring search, replacement and splitting
//! go through [`ByteMatcher`].

use crate::boyer_moore::ByteMatcher;
use crate::builder::ByteBuilder;
use crate::error::{BinStrError, Result};
use std::fmt;
use std::ops::Deref;

/// An immutable, owned sequence of bytes.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ByteString {
    data: Box<[u8]>,
}

impl ByteString {
    /// Create an empty byte string.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a byte string by copying the given bytes.
    pub fn from_bytes(bytes: impl AsRef<[u8]>) -> Self {
        Self {
            data: bytes.as_ref().into(),
        }
    }

    /// Number of bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether this byte string has no bytes.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The byte at `index`, if in range.
    pub fn byte_at(&self, index: usize) -> Option<u8> {
        self.data.get(index).copied()
    }

    /// View the contents as a byte slice.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Consume the byte string and return its bytes.
    pub fn into_vec(self) -> Vec<u8> {
        self.data.into_vec()
    }

    /// Copy `len` bytes starting at `start` into a new byte string.
    pub fn slice(&self, start: usize, len: usize) -> Result<Self> {
        let end = start
            .checked_add(len)
            .filter(|&end| end <= self.data.len())
            .ok_or_else(|| {
                BinStrError::invalid_argument(format!(
                    "slice {start}+{len} out of range for length {}",
                    self.data.len()
                ))
            })?;
        Ok(Self::from_bytes(&self.data[start..end]))
    }

    /// Concatenate `other` onto a copy of this byte string.
    pub fn concat(&self, other: impl AsRef<[u8]>) -> Self {
        let other = other.as_ref();
        let mut data = Vec::with_capacity(self.data.len() + other.len());
        data.extend_from_slice(&self.data);
        data.extend_from_slice(other);
        data.into()
    }

    /// Join `parts`, inserting `glue` between consecutive parts.
    pub fn join<I, P>(parts: I, glue: impl AsRef<[u8]>) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<[u8]>,
    {
        let glue = glue.as_ref();
        let mut data = Vec::new();
        for (i, part) in parts.into_iter().enumerate() {
            if i > 0 {
                data.extend_from_slice(glue);
            }
            data.extend_from_slice(part.as_ref());
        }
        data.into()
    }

    /// Index of the first occurrence of `byte`.
    pub fn index_of_byte(&self, byte: u8) -> Option<usize> {
        self.data.iter().position(|&b| b == byte)
    }

    /// Index of the first occurrence of `needle`.
    ///
    /// Builds a [`ByteMatcher`] per call; reuse a matcher directly when the
    /// same needle is searched for repeatedly.
    pub fn index_of(&self, needle: impl AsRef<[u8]>) -> Option<usize> {
        ByteMatcher::new(needle).find(&self.data)
    }

    /// Replace every non-overlapping occurrence of `needle` with `replacement`.
    ///
    /// An empty needle leaves the byte string unchanged. Matches are found
    /// left to right and the replacement text is never rescanned.
    pub fn replace(&self, needle: impl AsRef<[u8]>, replacement: impl AsRef<[u8]>) -> Self {
        let needle = needle.as_ref();
        let replacement = replacement.as_ref();
        if needle.is_empty() || needle == replacement {
            return self.clone();
        }

        let matcher = ByteMatcher::new(needle);
        let mut data = Vec::with_capacity(self.data.len());
        let mut last = 0;
        for index in matcher.find_iter(&self.data) {
            data.extend_from_slice(&self.data[last..index]);
            data.extend_from_slice(replacement);
            last = index + needle.len();
        }
        data.extend_from_slice(&self.data[last..]);
        data.into()
    }

    /// Split on every occurrence of `separator`.
    ///
    /// Always yields at least one part. Fails with an invalid argument
    /// error if `separator` is empty.
    pub fn split(&self, separator: impl AsRef<[u8]>) -> Result<Vec<Self>> {
        let separator = separator.as_ref();
        if separator.is_empty() {
            return Err(BinStrError::invalid_argument(
                "cannot split with an empty separator",
            ));
        }

        let matcher = ByteMatcher::new(separator);
        let mut parts = Vec::new();
        let mut last = 0;
        for index in matcher.find_iter(&self.data) {
            parts.push(Self::from_bytes(&self.data[last..index]));
            last = index + separator.len();
        }
        parts.push(Self::from_bytes(&self.data[last..]));
        Ok(parts)
    }

    /// Start a builder pre-filled with this byte string's contents.
    pub fn to_builder(&self) -> ByteBuilder {
        ByteBuilder::from(self.data.to_vec())
    }
}

impl Deref for ByteString {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.data
    }
}

impl AsRef<[u8]> for ByteString {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl From<Vec<u8>> for ByteString {
    fn from(data: Vec<u8>) -> Self {
        Self {
            data: data.into_boxed_slice(),
        }
    }
}

impl From<&[u8]> for ByteString {
    fn from(data: &[u8]) -> Self {
        Self::from_bytes(data)
    }
}

impl<const N: usize> From<&[u8; N]> for ByteString {
    fn from(data: &[u8; N]) -> Self {
        Self::from_bytes(data)
    }
}

impl From<&str> for ByteString {
    fn from(text: &str) -> Self {
        Self::from_bytes(text.as_bytes())
    }
}

impl From<ByteString> for Vec<u8> {
    fn from(value: ByteString) -> Self {
        value.into_vec()
    }
}

impl FromIterator<u8> for ByteString {
    fn from_iter<T: IntoIterator<Item = u8>>(iter: T) -> Self {
        iter.into_iter().collect::<Vec<u8>>().into()
    }
}

impl<'a> IntoIterator for &'a ByteString {
    type Item = &'a u8;
    type IntoIter = std::slice::Iter<'a, u8>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl PartialEq<[u8]> for ByteString {
    fn eq(&self, other: &[u8]) -> bool {
        *self.data == *other
    }
}

impl PartialEq<&[u8]> for ByteString {
    fn eq(&self, other: &&[u8]) -> bool {
        *self.data == **other
    }
}

impl<const N: usize> PartialEq<&[u8; N]> for ByteString {
    fn eq(&self, other: &&[u8; N]) -> bool {
        *self.data == other[..]
    }
}

impl PartialEq<Vec<u8>> for ByteString {
    fn eq(&self, other: &Vec<u8>) -> bool {
        *self.data == other[..]
    }
}

impl fmt::Debug for ByteString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ByteString(\"")?;
        for &byte in self.data.iter() {
            for c in std::ascii::escape_default(byte) {
                write!(f, "{}", c as char)?;
            }
        }
        write!(f, "\")")
    }
}

/// Lower-case hexadecimal, two digits per byte.
impl fmt::LowerHex for ByteString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.data.iter() {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Upper-case hexadecimal, two digits per byte.
impl fmt::UpperHex for ByteString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.data.iter() {
            write!(f, "{byte:02X}")?;
        }
        Ok(())
    }
}
