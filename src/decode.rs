//! Standard base64 decoding function.

use crate::constants::{ALPHABET_BYTES, PAD};
use crate::Base64Error;

const PAD_BYTE: u8 = PAD as u8;

/// Pre-computed reverse lookup table mapping a byte to its 6-bit alphabet
/// value, or -1 for bytes outside the alphabet.
static DECODE_TABLE: [i16; 256] = {
    let mut table = [-1i16; 256];
    let mut i = 0;
    while i < 64 {
        table[ALPHABET_BYTES[i] as usize] = i as i16;
        i += 1;
    }
    table
};

/// Decodes a standard base64 string to its original bytes.
///
/// The input length must be a multiple of 4 and consist of alphabet
/// characters plus at most two trailing `=` pad characters. Characters are
/// converted to 6-bit values (pad maps to 0), each quartet is packed into a
/// 24-bit block and re-sliced into three octets, and the bytes corresponding
/// to trailing padding are dropped from the result.
///
/// The result is the raw byte sequence; any text interpretation is left to
/// the caller.
///
/// # Errors
///
/// * [`Base64Error::InvalidLength`] - the length is not a multiple of 4.
/// * [`Base64Error::InvalidCharacter`] - a character is neither in the
///   alphabet nor the pad character.
/// * [`Base64Error::MisplacedPadding`] - a pad character appears before the
///   trailing pad run.
///
/// # Example
///
/// ```
/// use base64_codec::decode;
///
/// let decoded = decode("aGVsbG8gd29ybGQ=").unwrap();
/// assert_eq!(decoded, b"hello world");
/// ```
pub fn decode(encoded: &str) -> Result<Vec<u8>, Base64Error> {
    if encoded.is_empty() {
        return Ok(Vec::new());
    }

    let bytes = encoded.as_bytes();
    let length = bytes.len();
    if length % 4 != 0 {
        return Err(Base64Error::InvalidLength(length));
    }

    let mut pad = 0;
    if bytes[length - 1] == PAD_BYTE {
        pad += 1;
        if bytes[length - 2] == PAD_BYTE {
            pad += 1;
        }
    }
    // Pad characters are only valid inside the trailing run.
    let pad_start = length - pad;

    let mut out = Vec::with_capacity((length / 4) * 3);
    let mut i = 0;
    while i < length {
        let v0 = sextet(bytes, i, pad_start)?;
        let v1 = sextet(bytes, i + 1, pad_start)?;
        let v2 = sextet(bytes, i + 2, pad_start)?;
        let v3 = sextet(bytes, i + 3, pad_start)?;

        let block = (v0 << 18) | (v1 << 12) | (v2 << 6) | v3;
        out.push(((block >> 16) & 0xff) as u8);
        out.push(((block >> 8) & 0xff) as u8);
        out.push((block & 0xff) as u8);
        i += 4;
    }

    // Bytes derived from pad characters are synthetic, drop them.
    out.truncate(out.len() - pad);
    Ok(out)
}

fn sextet(bytes: &[u8], i: usize, pad_start: usize) -> Result<u32, Base64Error> {
    let c = bytes[i];
    if c == PAD_BYTE {
        return if i >= pad_start {
            Ok(0)
        } else {
            Err(Base64Error::MisplacedPadding)
        };
    }
    let value = DECODE_TABLE[c as usize];
    if value < 0 {
        return Err(Base64Error::InvalidCharacter(c));
    }
    Ok(value as u32)
}
