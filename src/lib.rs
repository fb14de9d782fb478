//! Base64 encoding and decoding (RFC 4648, standard alphabet, `=` padding).
//!
//! This crate provides a stateless base64 codec:
//! - [`encode`] maps arbitrary bytes to base64 text and never fails.
//! - [`decode`] maps well-formed base64 text back to the original bytes and
//!   reports malformed input as a [`Base64Error`].
//!
//! # Example
//!
//! ```
//! use base64_codec::{encode, decode};
//!
//! let data = b"hello world";
//! let encoded = encode(data);
//! assert_eq!(encoded, "aGVsbG8gd29ybGQ=");
//! let decoded = decode(&encoded).unwrap();
//! assert_eq!(decoded.as_slice(), data);
//! ```

mod constants;
mod decode;
mod encode;

pub use constants::{ALPHABET, ALPHABET_BYTES, PAD};
pub use decode::decode;
pub use encode::encode;

use thiserror::Error;

/// Error type for base64 decoding.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Base64Error {
    /// The input length is not a multiple of 4.
    #[error("base64 input length {0} is not a multiple of 4")]
    InvalidLength(usize),
    /// A byte outside the alphabet that is not the pad character.
    #[error("invalid base64 character 0x{0:02x}")]
    InvalidCharacter(u8),
    /// A pad character appears before the trailing pad run.
    #[error("padding character before end of input")]
    MisplacedPadding,
}
