//! Tagged account references.
//!
//! An owner is either a native Meridian account (32 bytes) or an EVM address
//! (20 bytes). The wire form is a `u32` tag followed by the raw bytes, so a
//! verifier can dispatch on the tag without knowing the length in advance.

use std::fmt;
use std::str::FromStr;

use crate::codec::primitives::put_u32_le;
use crate::codec::{decode_hex, hex_prefixed};
use crate::error::{EncodeError, ValidationError};

/// Wire tag for native Meridian account owners.
pub const NATIVE_TAG: u32 = 1;

/// Wire tag for EVM account owners.
pub const EVM_TAG: u32 = 2;

/// The account that will own a created token.
///
/// The variant is chosen by the decoded byte length of the caller's hex
/// input: 32 bytes selects `Native`, 20 bytes selects `Evm`, anything else
/// is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccountOwner {
    /// Native Meridian account (32 raw bytes).
    Native([u8; 32]),
    /// EVM address (20 raw bytes).
    Evm([u8; 20]),
}

impl AccountOwner {
    /// The wire tag for this variant.
    pub fn tag(&self) -> u32 {
        match self {
            AccountOwner::Native(_) => NATIVE_TAG,
            AccountOwner::Evm(_) => EVM_TAG,
        }
    }

    /// The raw account bytes (32 or 20).
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            AccountOwner::Native(bytes) => bytes,
            AccountOwner::Evm(bytes) => bytes,
        }
    }

    /// Encode as `tag ++ raw bytes` (36 or 24 bytes).
    pub fn to_bytes(&self) -> Vec<u8> {
        let raw = self.as_bytes();
        let mut out = Vec::with_capacity(4 + raw.len());
        put_u32_le(&mut out, self.tag());
        out.extend_from_slice(raw);
        out
    }

    /// Canonical hex form of the raw bytes (`0x` + lowercase).
    pub fn to_hex(&self) -> String {
        hex_prefixed(self.as_bytes())
    }
}

impl FromStr for AccountOwner {
    type Err = EncodeError;

    /// Parse a case-insensitive hex account reference, `0x` prefix optional.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = decode_hex(s)?;
        match bytes.len() {
            32 => {
                let mut raw = [0u8; 32];
                raw.copy_from_slice(&bytes);
                Ok(AccountOwner::Native(raw))
            }
            20 => {
                let mut raw = [0u8; 20];
                raw.copy_from_slice(&bytes);
                Ok(AccountOwner::Evm(raw))
            }
            len => Err(ValidationError::UnsupportedOwnerLength { len }.into()),
        }
    }
}

impl fmt::Display for AccountOwner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}
