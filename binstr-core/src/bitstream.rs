//! Bit-level packing and unpacking.
//!
//! This module provides [`BitWriter`] and [`BitReader`] for building and
//! consuming byte data one bit, or one fixed-width bit group, at a time.
//! Binary-to-text codecs such as Base32 use them to regroup bytes into
//! narrower symbols.
//!
//! # Bit Ordering
//!
//! Both types use MSB-first (Most Significant Bit first) ordering. The first
//! bit written lands in bit 7 of the first byte. A group written with
//! [`BitWriter::write_bits`] behaves exactly as if each of its bits had been
//! written individually, highest bit first.
//!
//! # Example
//!
//! ```
//! use binstr_core::bitstream::{BitReader, BitWriter};
//!
//! let mut writer = BitWriter::new();
//! writer.write_bits(0b101, 3).unwrap();
//! writer.write_bits(0b11001, 5).unwrap();
//! let bytes = writer.finish().unwrap();
//! assert_eq!(bytes, b"\xB9");
//!
//! let mut reader = BitReader::new(&bytes);
//! assert_eq!(reader.read_bits(3).unwrap(), (3, 0b101));
//! assert_eq!(reader.read_bits(5).unwrap(), (5, 0b11001));
//! assert_eq!(reader.read_bits(5).unwrap(), (0, 0));
//! ```

use crate::builder::ByteBuilder;
use crate::bytestring::ByteString;
use crate::error::{BinStrError, Result};

/// Widest bit group accepted by a single read or write.
pub const MAX_GROUP_BITS: u32 = 32;

/// What to do with a trailing partial byte when materializing a [`BitWriter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnevenMode {
    /// Fail if the bit count is not a multiple of 8.
    #[default]
    Disallow,
    /// Complete the final byte with zero bits.
    Pad,
    /// Drop the incomplete final byte.
    Truncate,
}

fn check_group_width(count: u32) -> Result<()> {
    if count > MAX_GROUP_BITS {
        return Err(BinStrError::invalid_argument(format!(
            "bit count {count} out of range (0-{MAX_GROUP_BITS})"
        )));
    }
    Ok(())
}

/// An MSB-first bit accumulator producing a [`ByteString`].
///
/// Complete bytes are appended to an internal [`ByteBuilder`]; the
/// in-progress byte is held separately until it fills up.
#[derive(Debug, Clone, Default)]
pub struct BitWriter {
    /// Completed bytes.
    builder: ByteBuilder,
    /// Number of completed bytes.
    bytes_written: u64,
    /// Partially filled byte, filled from bit 7 downward.
    current: u8,
    /// Number of bits set in `current` (0-7).
    bits_in_current: u8,
}

impl BitWriter {
    /// Create an empty bit writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty bit writer with room for `bytes` complete bytes.
    pub fn with_capacity(bytes: usize) -> Self {
        Self {
            builder: ByteBuilder::with_capacity(bytes),
            ..Self::default()
        }
    }

    /// Total bits written: complete bytes times 8 plus pending bits.
    pub fn bits_written(&self) -> u64 {
        self.bytes_written * 8 + self.bits_in_current as u64
    }

    /// Whether the bits written so far fill a whole number of bytes.
    pub fn is_byte_aligned(&self) -> bool {
        self.bits_in_current == 0
    }

    /// Write a single bit.
    #[inline]
    pub fn write_bit(&mut self, bit: bool) -> Result<()> {
        if bit {
            self.current |= 0x80 >> self.bits_in_current;
        }
        self.bits_in_current += 1;

        if self.bits_in_current == 8 {
            self.builder.append_byte(self.current)?;
            self.bytes_written += 1;
            self.current = 0;
            self.bits_in_current = 0;
        }

        Ok(())
    }

    /// Write the `count` least significant bits of `value`, highest first.
    ///
    /// # Arguments
    ///
    /// * `value` - Source of the bits; bits above `count` are ignored
    /// * `count` - Number of bits to write (0-32)
    pub fn write_bits(&mut self, value: u32, count: u32) -> Result<()> {
        check_group_width(count)?;

        for i in (0..count).rev() {
            self.write_bit((value >> i) & 1 != 0)?;
        }

        Ok(())
    }

    /// Materialize the written bits as a byte string.
    ///
    /// The writer is left untouched, so this can be called repeatedly.
    pub fn to_byte_string(&self, mode: UnevenMode) -> Result<ByteString> {
        if self.bits_in_current == 0 {
            return self.builder.to_byte_string();
        }

        match mode {
            UnevenMode::Disallow => Err(BinStrError::uneven_bits(self.bits_written())),
            UnevenMode::Pad => {
                let mut padded = self.builder.clone();
                padded.append_byte(self.current)?;
                padded.into_byte_string()
            }
            UnevenMode::Truncate => self.builder.to_byte_string(),
        }
    }

    /// Materialize the written bits, failing on a partial final byte.
    ///
    /// Equivalent to `to_byte_string(UnevenMode::Disallow)`.
    pub fn finish(&self) -> Result<ByteString> {
        self.to_byte_string(UnevenMode::Disallow)
    }
}

/// An MSB-first bit cursor over a borrowed byte slice.
#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    /// Input data.
    data: &'a [u8],
    /// Bits consumed so far.
    position: u64,
}

impl<'a> BitReader<'a> {
    /// Create a reader positioned at the first bit of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, position: 0 }
    }

    /// Bits consumed so far.
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Total length of the source in bits.
    pub fn bit_len(&self) -> u64 {
        self.data.len() as u64 * 8
    }

    /// Bits left to read.
    pub fn remaining_bits(&self) -> u64 {
        self.bit_len() - self.position
    }

    /// Check if every bit has been consumed.
    pub fn is_eof(&self) -> bool {
        self.position >= self.bit_len()
    }

    /// Read one bit, or `None` at end of data.
    #[inline]
    pub fn try_read_bit(&mut self) -> Option<bool> {
        let byte = *self.data.get((self.position / 8) as usize)?;
        let shift = 7 - (self.position % 8);
        self.position += 1;
        Some((byte >> shift) & 1 != 0)
    }

    /// Read up to `count` bits, MSB-first.
    ///
    /// # Returns
    ///
    /// `(bits_read, value)`. The value is aligned as if all `count` bits had
    /// been read, so bits missing at end of data are zero in the low
    /// positions. `bits_read` is 0 once the reader is exhausted.
    pub fn read_bits(&mut self, count: u32) -> Result<(u32, u32)> {
        check_group_width(count)?;

        let mut value = 0u32;
        let mut read = 0u32;
        while read < count {
            match self.try_read_bit() {
                Some(bit) => {
                    read += 1;
                    if bit {
                        value |= 1 << (count - read);
                    }
                }
                None => break,
            }
        }

        Ok((read, value))
    }
}
