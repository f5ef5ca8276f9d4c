//! Token descriptor encoding.

use crate::codec::primitives::put_str;

/// Descriptive metadata carried in a create-token request.
///
/// `name` and `symbol` encode as length-prefixed UTF-8 (never
/// null-terminated); `decimals` occupies exactly one byte. Values outside
/// `0..=255` are unrepresentable here by construction, so the one-byte
/// range is never re-validated downstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenMetadata {
    /// Human-readable token name.
    pub name: String,
    /// Ticker symbol.
    pub symbol: String,
    /// Display decimals, distinct from the fixed encoding scale.
    pub decimals: u8,
}

impl TokenMetadata {
    pub fn new(name: impl Into<String>, symbol: impl Into<String>, decimals: u8) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
            decimals,
        }
    }

    /// Encode as `name ++ symbol ++ decimals`.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(4 + self.name.len() + 4 + self.symbol.len() + 1);
        put_str(&mut out, &self.name);
        put_str(&mut out, &self.symbol);
        out.push(self.decimals);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout() {
        let meta = TokenMetadata::new("Moon", "MN", 18);
        let bytes = meta.to_bytes();
        assert_eq!(bytes.len(), (4 + 4) + (4 + 2) + 1);
        assert_eq!(&bytes[..4], &[4, 0, 0, 0]);
        assert_eq!(&bytes[4..8], b"Moon");
        assert_eq!(&bytes[8..12], &[2, 0, 0, 0]);
        assert_eq!(&bytes[12..14], b"MN");
        assert_eq!(bytes[14], 18);
    }

    #[test]
    fn test_empty_strings_encode_as_zero_prefixes() {
        let meta = TokenMetadata::new("", "", 0);
        assert_eq!(meta.to_bytes(), vec![0, 0, 0, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_length_prefix_counts_utf8_bytes() {
        // "ØRE" is 3 chars but 4 UTF-8 bytes
        let meta = TokenMetadata::new("ØRE", "Ø", 6);
        let bytes = meta.to_bytes();
        assert_eq!(&bytes[..4], &[4, 0, 0, 0]);
        assert_eq!(&bytes[8..12], &[2, 0, 0, 0]);
        assert_eq!(*bytes.last().unwrap(), 6);
    }
}
