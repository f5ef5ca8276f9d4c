//! Wire types for the token application's GraphQL surface.

use serde::{Deserialize, Serialize};

use crate::domain::token::CreateTokenDraft;

/// GraphQL document for the create-token mutation.
pub const CREATE_TOKEN_MUTATION: &str = "\
mutation CreateToken($owner: String!, $name: String!, $symbol: String!, \
$decimals: Int!, $initialSupply: String!, $signature: String!) { \
createToken(owner: $owner, name: $name, symbol: $symbol, \
decimals: $decimals, initialSupply: $initialSupply, signature: $signature) }";

/// GraphQL document for the balance query.
pub const BALANCE_QUERY: &str = "query Balance($owner: String!) { balance(owner: $owner) }";

/// Variables for [`BALANCE_QUERY`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BalanceVariables {
    /// Canonical `0x` hex of the account's raw bytes.
    pub owner: String,
}

/// Variables for [`CREATE_TOKEN_MUTATION`].
///
/// The human-readable fields travel alongside the hex-encoded signature
/// envelope; the application re-encodes them to the canonical bytes and
/// checks the envelope against the resulting digest.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateTokenVariables {
    /// Canonical `0x` hex of the owner's raw bytes.
    pub owner: String,
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    /// Canonical decimal supply string.
    pub initial_supply: String,
    /// `0x` hex of the 89-byte signature envelope.
    pub signature: String,
}

impl CreateTokenVariables {
    /// Build from a validated draft plus the envelope hex.
    ///
    /// Owner and supply are taken from the draft's canonical renderings,
    /// not the caller's raw input, so the application reconstructs exactly
    /// the bytes that were signed.
    pub fn from_draft(draft: &CreateTokenDraft, signature: String) -> Self {
        Self {
            owner: draft.request.owner.to_hex(),
            name: draft.request.metadata.name.clone(),
            symbol: draft.request.metadata.symbol.clone(),
            decimals: draft.request.metadata.decimals,
            initial_supply: draft.request.initial_supply.to_string(),
            signature,
        }
    }
}
