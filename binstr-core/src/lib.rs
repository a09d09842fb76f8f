//! # binstr Core
//!
//! Core components for the binstr binary string library.
//!
//! This crate provides the fundamental building blocks the codecs sit on:
//!
//! - [`bytestring`]: Immutable byte strings with search, replace and split
//! - [`builder`]: Append-only byte accumulator
//! - [`bitstream`]: MSB-first bit-level packing for sub-byte symbol widths
//! - [`boyer_moore`]: Boyer-Moore exact substring search
//! - [`error`]: Error types
//!
//! ## Architecture
//!
//! binstr is layered:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ L3: Front end                                           │
//! │     binstr CLI                                          │
//! ├─────────────────────────────────────────────────────────┤
//! │ L2: Codec                                               │
//! │     Base32, Ascii85, UUEncode, Quoted-Printable, ...    │
//! ├─────────────────────────────────────────────────────────┤
//! │ L1: Core (this crate)                                   │
//! │     ByteString/ByteBuilder, BitReader/Writer, matcher   │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use binstr_core::{BitReader, ByteMatcher, ByteString};
//!
//! // Read 5-bit groups from data
//! let data = ByteString::from(b"Hi");
//! let mut reader = BitReader::new(&data);
//! let (read, value) = reader.read_bits(5).unwrap();
//! assert_eq!((read, value), (5, 0b01001));
//!
//! // Search for a substring
//! let matcher = ByteMatcher::new(b"\r\n");
//! assert_eq!(matcher.find(b"line one\r\nline two"), Some(8));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::len_without_is_empty)]
#![forbid(unsafe_code)]

pub mod bitstream;
pub mod boyer_moore;
pub mod builder;
pub mod bytestring;
pub mod error;

// Re-exports for convenience
pub use bitstream::{BitReader, BitWriter, UnevenMode};
pub use boyer_moore::ByteMatcher;
pub use builder::ByteBuilder;
pub use bytestring::ByteString;
pub use error::{BinStrError, Result};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::bitstream::{BitReader, BitWriter, UnevenMode};
    pub use crate::boyer_moore::ByteMatcher;
    pub use crate::builder::ByteBuilder;
    pub use crate::bytestring::ByteString;
    pub use crate::error::{BinStrError, Result};
}
