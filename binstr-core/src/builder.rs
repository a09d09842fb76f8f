//! Growable, append-only byte accumulator.
//!
//! A [`ByteBuilder`] owns a growable buffer and hands out immutable
//! [`ByteString`] snapshots. Once [`ByteBuilder::release`] has been called
//! the buffer is gone and every further use fails with
//! [`BinStrError::AlreadyReleased`].

use crate::bytestring::ByteString;
use crate::error::{BinStrError, Result};

/// Append-only byte buffer that produces [`ByteString`] values.
#[derive(Debug, Clone)]
pub struct ByteBuilder {
    /// `None` once released.
    buffer: Option<Vec<u8>>,
}

impl ByteBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self {
            buffer: Some(Vec::new()),
        }
    }

    /// Create an empty builder with room for `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: Some(Vec::with_capacity(capacity)),
        }
    }

    #[inline]
    fn buffer(&self) -> Result<&Vec<u8>> {
        self.buffer.as_ref().ok_or(BinStrError::AlreadyReleased)
    }

    #[inline]
    fn buffer_mut(&mut self) -> Result<&mut Vec<u8>> {
        self.buffer.as_mut().ok_or(BinStrError::AlreadyReleased)
    }

    /// Append a run of bytes.
    pub fn append(&mut self, data: impl AsRef<[u8]>) -> Result<()> {
        self.buffer_mut()?.extend_from_slice(data.as_ref());
        Ok(())
    }

    /// Append a single byte.
    #[inline]
    pub fn append_byte(&mut self, byte: u8) -> Result<()> {
        self.buffer_mut()?.push(byte);
        Ok(())
    }

    /// Append the current contents of another builder.
    pub fn append_builder(&mut self, other: &ByteBuilder) -> Result<()> {
        let data = other.buffer()?;
        self.buffer_mut()?.extend_from_slice(data);
        Ok(())
    }

    /// Number of bytes appended so far.
    pub fn len(&self) -> Result<usize> {
        Ok(self.buffer()?.len())
    }

    /// Whether nothing has been appended yet.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.buffer()?.is_empty())
    }

    /// Snapshot the contents as an immutable byte string.
    pub fn to_byte_string(&self) -> Result<ByteString> {
        Ok(ByteString::from_bytes(self.buffer()?))
    }

    /// Consume the builder, moving its buffer into a byte string.
    pub fn into_byte_string(self) -> Result<ByteString> {
        self.buffer
            .map(ByteString::from)
            .ok_or(BinStrError::AlreadyReleased)
    }

    /// Drop the buffer. Releasing an already released builder is a no-op.
    pub fn release(&mut self) {
        self.buffer = None;
    }

    /// Whether [`release`](Self::release) has been called.
    pub fn is_released(&self) -> bool {
        self.buffer.is_none()
    }
}

impl From<Vec<u8>> for ByteBuilder {
    fn from(buffer: Vec<u8>) -> Self {
        Self {
            buffer: Some(buffer),
        }
    }
}

impl Default for ByteBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_variants() {
        let mut builder = ByteBuilder::new();
        assert!(builder.is_empty().unwrap());

        builder.append(b"abc").unwrap();
        builder.append_byte(b'd').unwrap();

        let mut other = ByteBuilder::with_capacity(2);
        other.append(b"ef").unwrap();
        builder.append_builder(&other).unwrap();
        builder.append([b'g', b'h']).unwrap();

        assert_eq!(builder.len().unwrap(), 8);
        assert_eq!(builder.to_byte_string().unwrap(), b"abcdefgh");
        // Snapshots do not consume the builder.
        assert_eq!(builder.to_byte_string().unwrap(), b"abcdefgh");
        assert_eq!(builder.into_byte_string().unwrap(), b"abcdefgh");
    }

    #[test]
    fn test_from_vec_is_live() {
        let mut builder = ByteBuilder::from(b"abc".to_vec());
        assert!(!builder.is_released());
        assert_eq!(builder.len().unwrap(), 3);
        builder.append(b"d").unwrap();
        assert_eq!(builder.to_byte_string().unwrap(), b"abcd");

        builder.release();
        assert!(matches!(builder.append(b"e"), Err(BinStrError::AlreadyReleased)));
    }

    #[test]
    fn test_use_after_release() {
        let mut builder = ByteBuilder::new();
        builder.append(b"data").unwrap();
        builder.release();
        assert!(builder.is_released());

        assert!(matches!(
            builder.append(b"more"),
            Err(BinStrError::AlreadyReleased)
        ));
        assert!(matches!(
            builder.append_byte(42),
            Err(BinStrError::AlreadyReleased)
        ));
        assert!(matches!(builder.len(), Err(BinStrError::AlreadyReleased)));
        assert!(matches!(
            builder.to_byte_string(),
            Err(BinStrError::AlreadyReleased)
        ));

        let live = ByteBuilder::new();
        let mut target = ByteBuilder::new();
        target.release();
        assert!(matches!(
            target.append_builder(&live),
            Err(BinStrError::AlreadyReleased)
        ));

        // Releasing twice is fine.
        builder.release();
        assert!(matches!(
            builder.into_byte_string(),
            Err(BinStrError::AlreadyReleased)
        ));
    }
}
