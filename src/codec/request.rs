//! Create-token request payload, domain-separated digest, and the message
//! presented to the signing collaborator.

use std::fmt;

use sha3::{Digest, Keccak256};

use crate::codec::amount::Amount;
use crate::codec::hex_prefixed;
use crate::codec::metadata::TokenMetadata;
use crate::codec::owner::AccountOwner;

/// Domain tag prepended to every create-token payload before hashing.
///
/// Any change here changes every digest, so a new request format must
/// introduce a new tag rather than mutate this one.
pub const SIGNING_DOMAIN: &str = "CreateTokenRequest::";

/// A fully-validated create-token request, ready to hash and sign.
///
/// Payload layout (field order is part of the wire contract):
/// - owner: u32 tag + raw bytes (36 or 24)
/// - name: u32 length + UTF-8
/// - symbol: u32 length + UTF-8
/// - decimals: 1 byte
/// - initial_supply: 16 bytes, unscaled u128
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTokenRequest {
    pub owner: AccountOwner,
    pub metadata: TokenMetadata,
    pub initial_supply: Amount,
}

impl CreateTokenRequest {
    pub fn new(owner: AccountOwner, metadata: TokenMetadata, initial_supply: Amount) -> Self {
        Self {
            owner,
            metadata,
            initial_supply,
        }
    }

    /// Serialize the canonical payload. No whole-payload length prefix.
    pub fn to_bytes(&self) -> Vec<u8> {
        let metadata_len = 8 + self.metadata.name.len() + self.metadata.symbol.len() + 1;
        let mut out = Vec::with_capacity(36 + metadata_len + 16);
        out.extend_from_slice(&self.owner.to_bytes());
        out.extend_from_slice(&self.metadata.to_bytes());
        out.extend_from_slice(&self.initial_supply.to_le_bytes());
        out
    }

    /// Compute the domain-separated Keccak-256 digest of the payload.
    pub fn signing_digest(&self) -> [u8; 32] {
        domain_digest(SIGNING_DOMAIN, &self.to_bytes())
    }

    /// Wrap the digest in its signer-facing presentation.
    pub fn signing_message(&self) -> SigningMessage {
        SigningMessage::new(self.signing_digest())
    }
}

/// Keccak-256 over `utf8(domain) ++ payload`.
pub fn domain_digest(domain: &str, payload: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    hasher.update(domain.as_bytes());
    hasher.update(payload);
    hasher.finalize().into()
}

/// The 32-byte digest plus the exact text shown to the signer.
///
/// Wallets sign the hex text, not the raw digest, so the text form is part
/// of the contract: `0x` followed by 64 lowercase hex characters, nothing
/// else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SigningMessage {
    digest: [u8; 32],
    text: String,
}

impl SigningMessage {
    pub fn new(digest: [u8; 32]) -> Self {
        let text = hex_prefixed(&digest);
        Self { digest, text }
    }

    /// The raw 32-byte digest.
    pub fn digest(&self) -> &[u8; 32] {
        &self.digest
    }

    /// The text presented to the signer, treated as opaque by this crate.
    pub fn as_text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for SigningMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
