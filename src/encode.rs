//! Standard base64 encoding function.

use crate::constants::{ALPHABET_BYTES, PAD};

/// Encodes a byte slice to a standard base64 string.
///
/// Bytes are processed in 3-byte groups packed into a 24-bit block and
/// re-sliced into four 6-bit sextets, most-significant sextet first. An
/// incomplete trailing group is padded with zero bytes, and the output
/// characters derived from those synthetic bytes are emitted as `=`, so the
/// result length is always `ceil(len / 3) * 4`.
///
/// # Arguments
///
/// * `input` - The bytes to encode. Any length, including empty, is valid.
///
/// # Returns
///
/// A base64-encoded string with standard padding.
///
/// # Example
///
/// ```
/// use base64_codec::encode;
///
/// assert_eq!(encode(b"hello world"), "aGVsbG8gd29ybGQ=");
/// assert_eq!(encode(b""), "");
/// ```
pub fn encode(input: &[u8]) -> String {
    let length = input.len();
    let pad = (3 - length % 3) % 3;
    let mut out = String::with_capacity(length.div_ceil(3) * 4);

    let extra_length = length % 3;
    let base_length = length - extra_length;

    let mut i = 0;
    while i < base_length {
        let block = ((input[i] as u32) << 16) | ((input[i + 1] as u32) << 8) | (input[i + 2] as u32);
        out.push(ALPHABET_BYTES[((block >> 18) & 0x3f) as usize] as char);
        out.push(ALPHABET_BYTES[((block >> 12) & 0x3f) as usize] as char);
        out.push(ALPHABET_BYTES[((block >> 6) & 0x3f) as usize] as char);
        out.push(ALPHABET_BYTES[(block & 0x3f) as usize] as char);
        i += 3;
    }

    if extra_length == 0 {
        return out;
    }

    // Trailing group: pack with synthetic zero bytes, then replace the last
    // `pad` characters with the pad marker.
    let o1 = input[base_length];
    let o2 = if extra_length == 2 {
        input[base_length + 1]
    } else {
        0
    };
    let block = ((o1 as u32) << 16) | ((o2 as u32) << 8);

    out.push(ALPHABET_BYTES[((block >> 18) & 0x3f) as usize] as char);
    out.push(ALPHABET_BYTES[((block >> 12) & 0x3f) as usize] as char);
    if pad == 1 {
        out.push(ALPHABET_BYTES[((block >> 6) & 0x3f) as usize] as char);
    } else {
        out.push(PAD);
    }
    out.push(PAD);

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(encode(b""), "");
    }

    #[test]
    fn test_single_byte() {
        assert_eq!(encode(b"M"), "TQ==");
    }

    #[test]
    fn test_two_bytes() {
        assert_eq!(encode(b"Ma"), "TWE=");
    }

    #[test]
    fn test_three_bytes() {
        assert_eq!(encode(b"Man"), "TWFu");
    }

    #[test]
    fn test_hello_world() {
        assert_eq!(encode(b"hello world"), "aGVsbG8gd29ybGQ=");
    }

    #[test]
    fn test_various_lengths() {
        // RFC 4648 test vectors
        assert_eq!(encode(b""), "");
        assert_eq!(encode(b"f"), "Zg==");
        assert_eq!(encode(b"fo"), "Zm8=");
        assert_eq!(encode(b"foo"), "Zm9v");
        assert_eq!(encode(b"foob"), "Zm9vYg==");
        assert_eq!(encode(b"fooba"), "Zm9vYmE=");
        assert_eq!(encode(b"foobar"), "Zm9vYmFy");
    }

    #[test]
    fn test_binary_data() {
        // All byte values encode to alphabet characters plus padding
        let data: Vec<u8> = (0..=255).collect();
        let encoded = encode(&data);
        assert_eq!(encoded.len(), data.len().div_ceil(3) * 4);
        for c in encoded.chars() {
            assert!(
                c.is_ascii_alphanumeric() || c == '+' || c == '/' || c == '=',
                "Invalid base64 character: {}",
                c
            );
        }
    }

    #[test]
    fn test_padding_count() {
        for (input, pads) in [
            (&b"abc"[..], 0),
            (&b"ab"[..], 1),
            (&b"a"[..], 2),
            (&b""[..], 0),
        ] {
            let encoded = encode(input);
            let trailing = encoded.chars().rev().take_while(|&c| c == PAD).count();
            assert_eq!(trailing, pads);
        }
    }
}
