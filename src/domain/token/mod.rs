//! Token domain — create-token requests, drafts, and submission.

#[cfg(feature = "http")]
pub mod client;
pub mod wire;

use serde::{Deserialize, Serialize};

use crate::codec::{AccountOwner, Amount, CreateTokenRequest, SigningMessage, TokenMetadata};
use crate::error::EncodeError;

/// Raw create-token form fields, exactly as a caller collects them.
///
/// Owner and supply stay as strings because they carry their own parsers;
/// `decimals` is `u8` so the one-byte wire range is enforced by the type
/// rather than truncated later.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateTokenParams {
    /// Hex account reference (20 or 32 bytes), `0x` prefix optional.
    pub owner: String,
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    /// Decimal supply string, at most 18 fractional digits.
    pub initial_supply: String,
}

/// A validated create-token request and everything derived from it.
///
/// Producing a draft touches no signer and no network; every validation
/// failure happens here, before anything is signed or sent.
#[derive(Debug, Clone)]
pub struct CreateTokenDraft {
    /// The validated, typed request.
    pub request: CreateTokenRequest,
    /// Canonical payload bytes.
    pub payload: Vec<u8>,
    /// Signer-facing presentation of the domain-separated digest.
    pub message: SigningMessage,
}

impl CreateTokenDraft {
    /// Validate and encode the raw fields.
    pub fn prepare(params: &CreateTokenParams) -> Result<Self, EncodeError> {
        let owner: AccountOwner = params.owner.parse()?;
        let supply: Amount = params.initial_supply.parse()?;
        let metadata = TokenMetadata::new(
            params.name.clone(),
            params.symbol.clone(),
            params.decimals,
        );

        let request = CreateTokenRequest::new(owner, metadata, supply);
        let payload = request.to_bytes();
        let message = request.signing_message();
        Ok(Self {
            request,
            payload,
            message,
        })
    }

    /// The 32-byte digest the signer authorizes.
    pub fn digest(&self) -> &[u8; 32] {
        self.message.digest()
    }
}
