//! Canonical request encoding and authentication envelope.
//!
//! Everything in this module is pure and synchronous: given the same inputs,
//! producer and verifier must arrive at bit-identical bytes. The layout is
//! little-endian throughout, with no alignment padding and no whole-payload
//! length prefix.

pub mod amount;
pub mod envelope;
pub mod metadata;
pub mod owner;
pub mod primitives;
pub mod request;

pub use amount::{Amount, AMOUNT_SCALE};
pub use envelope::{SignatureEnvelope, ADDRESS_LEN, SIGNATURE_LEN};
pub use metadata::TokenMetadata;
pub use owner::AccountOwner;
pub use request::{CreateTokenRequest, SigningMessage, SIGNING_DOMAIN};

use crate::error::FormatError;

/// Decode case-insensitive hex with an optional `0x`/`0X` prefix.
pub(crate) fn decode_hex(s: &str) -> Result<Vec<u8>, FormatError> {
    let trimmed = s.trim();
    let stripped = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    Ok(hex::decode(stripped)?)
}

/// Render bytes as `0x`-prefixed lowercase hex.
pub(crate) fn hex_prefixed(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_hex_accepts_prefix_and_case() {
        assert_eq!(decode_hex("0xDEADbeef").unwrap(), vec![0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(decode_hex("deadbeef").unwrap(), vec![0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(decode_hex(" 0Xff ").unwrap(), vec![0xff]);
    }

    #[test]
    fn decode_hex_rejects_odd_and_invalid() {
        assert_eq!(decode_hex("0xabc").unwrap_err(), FormatError::InvalidHexLength);
        assert_eq!(
            decode_hex("0xzz").unwrap_err(),
            FormatError::InvalidHexCharacter { ch: 'z', index: 0 }
        );
    }

    #[test]
    fn hex_prefixed_is_lowercase() {
        assert_eq!(hex_prefixed(&[0xAB, 0x01]), "0xab01");
    }
}
