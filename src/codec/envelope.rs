//! Signature envelope: the self-describing authorization proof.
//!
//! The envelope carries the signature scheme tag, the signature itself, and
//! the address that produced it, so a verifier can recover and check the
//! signer without out-of-band context.

use crate::codec::owner::EVM_TAG;
use crate::codec::primitives::put_u32_le;
use crate::codec::{decode_hex, hex_prefixed};
use crate::error::{EncodeError, ValidationError};

/// Byte length of a recoverable secp256k1 signature (r ‖ s ‖ v).
pub const SIGNATURE_LEN: usize = 65;

/// Byte length of an EVM address.
pub const ADDRESS_LEN: usize = 20;

/// Encoded envelope length: 4-byte tag + signature + address.
pub const ENVELOPE_LEN: usize = 4 + SIGNATURE_LEN + ADDRESS_LEN;

/// A scheme-tagged signature plus its signer.
///
/// The tag reuses the account-owner tag space (EVM = 2), so verifiers
/// dispatch the same way for owners and signatures. EVM is the only scheme
/// currently issued; new schemes get new variants, never a re-reading of
/// this layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignatureEnvelope {
    /// Recoverable secp256k1 signature with the signer's EVM address.
    Evm {
        signature: [u8; SIGNATURE_LEN],
        signer: [u8; ADDRESS_LEN],
    },
}

impl SignatureEnvelope {
    /// Build from raw signature and address bytes. Infallible: the fixed
    /// array sizes are the validation.
    pub fn evm(signature: [u8; SIGNATURE_LEN], signer: [u8; ADDRESS_LEN]) -> Self {
        SignatureEnvelope::Evm { signature, signer }
    }

    /// Build from hex strings, validating the decoded lengths.
    pub fn from_hex(signature_hex: &str, address_hex: &str) -> Result<Self, EncodeError> {
        let sig_bytes = decode_hex(signature_hex)?;
        if sig_bytes.len() != SIGNATURE_LEN {
            return Err(ValidationError::InvalidSignatureLength {
                len: sig_bytes.len(),
            }
            .into());
        }
        let addr_bytes = decode_hex(address_hex)?;
        if addr_bytes.len() != ADDRESS_LEN {
            return Err(ValidationError::InvalidAddressLength {
                len: addr_bytes.len(),
            }
            .into());
        }

        let mut signature = [0u8; SIGNATURE_LEN];
        signature.copy_from_slice(&sig_bytes);
        let mut signer = [0u8; ADDRESS_LEN];
        signer.copy_from_slice(&addr_bytes);
        Ok(SignatureEnvelope::Evm { signature, signer })
    }

    /// The wire tag for this scheme.
    pub fn tag(&self) -> u32 {
        match self {
            SignatureEnvelope::Evm { .. } => EVM_TAG,
        }
    }

    /// Encode as `tag ++ signature ++ address` (89 bytes).
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            SignatureEnvelope::Evm { signature, signer } => {
                let mut out = Vec::with_capacity(ENVELOPE_LEN);
                put_u32_le(&mut out, EVM_TAG);
                out.extend_from_slice(signature);
                out.extend_from_slice(signer);
                out
            }
        }
    }

    /// The encoded envelope as `0x`-prefixed hex, ready for transport.
    pub fn to_hex(&self) -> String {
        hex_prefixed(&self.to_bytes())
    }
}
