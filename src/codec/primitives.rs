//! Fixed-width and length-prefixed encoding primitives.
//!
//! These are the leaves every other codec composes: little-endian integers
//! and `u32`-length-prefixed UTF-8 strings. All functions are total.

/// Encode a `u32` as 4 bytes, least-significant byte first.
pub fn encode_u32_le(value: u32) -> [u8; 4] {
    value.to_le_bytes()
}

/// Encode a `u128` as 16 bytes, least-significant byte first.
pub fn encode_u128_le(value: u128) -> [u8; 16] {
    value.to_le_bytes()
}

/// Encode a string as a `u32` byte-length prefix followed by its UTF-8 bytes.
///
/// The prefix counts bytes, not characters. No terminator is appended and
/// nothing is truncated.
pub fn encode_str(s: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(4 + s.len());
    put_str(&mut out, s);
    out
}

/// Append a little-endian `u32` to `out`.
pub fn put_u32_le(out: &mut Vec<u8>, value: u32) {
    out.extend_from_slice(&value.to_le_bytes());
}

/// Append a little-endian `u128` to `out`.
pub fn put_u128_le(out: &mut Vec<u8>, value: u128) {
    out.extend_from_slice(&value.to_le_bytes());
}

/// Append a length-prefixed UTF-8 string to `out`.
pub fn put_str(out: &mut Vec<u8>, s: &str) {
    let bytes = s.as_bytes();
    put_u32_le(out, bytes.len() as u32);
    out.extend_from_slice(bytes);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_u32_le_byte_order() {
        assert_eq!(encode_u32_le(1), [1, 0, 0, 0]);
        assert_eq!(encode_u32_le(0x0403_0201), [1, 2, 3, 4]);
        assert_eq!(encode_u32_le(u32::MAX), [0xff; 4]);
    }

    #[test]
    fn test_u128_le_byte_order() {
        assert_eq!(encode_u128_le(0), [0u8; 16]);

        let mut expected = [0u8; 16];
        expected[0] = 1;
        assert_eq!(encode_u128_le(1), expected);

        // 0x0102 -> low byte first
        let bytes = encode_u128_le(0x0102);
        assert_eq!(bytes[0], 0x02);
        assert_eq!(bytes[1], 0x01);
        assert_eq!(&bytes[2..], &[0u8; 14]);

        assert_eq!(encode_u128_le(u128::MAX), [0xff; 16]);
    }

    #[test]
    fn test_str_length_prefix_counts_bytes() {
        let encoded = encode_str("abc");
        assert_eq!(encoded, vec![3, 0, 0, 0, b'a', b'b', b'c']);

        // "é" is 1 char but 2 UTF-8 bytes
        let encoded = encode_str("é");
        assert_eq!(encoded[..4], [2, 0, 0, 0]);
        assert_eq!(encoded.len(), 6);
    }

    #[test]
    fn test_str_empty_is_just_prefix() {
        assert_eq!(encode_str(""), vec![0, 0, 0, 0]);
    }

    #[test]
    fn test_put_variants_append() {
        let mut out = Vec::new();
        put_u32_le(&mut out, 2);
        put_str(&mut out, "ok");
        put_u128_le(&mut out, 3);
        assert_eq!(out.len(), 4 + (4 + 2) + 16);
        assert_eq!(&out[..4], &[2, 0, 0, 0]);
        assert_eq!(&out[4..10], &[2, 0, 0, 0, b'o', b'k']);
        assert_eq!(out[10], 3);
    }
}
