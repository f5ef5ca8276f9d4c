//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("Encoding error: {0}")]
    Encode(#[from] EncodeError),

    #[error("Signer error: {0}")]
    Signer(#[from] SignerError),

    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Errors producing the canonical request bytes.
///
/// Every variant is detected synchronously, before anything is signed or
/// submitted.
#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Format error: {0}")]
    Format(#[from] FormatError),
}

/// Semantic rejections of caller-supplied values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Amount cannot be negative")]
    NegativeAmount,

    #[error("Amount has more than {max} decimal places")]
    TooManyDecimals { max: u32 },

    #[error("Invalid amount format: {0}")]
    InvalidAmountFormat(String),

    #[error("Owner must decode to 20 or 32 bytes, got {len}")]
    UnsupportedOwnerLength { len: usize },

    #[error("Signature must be 65 bytes, got {len}")]
    InvalidSignatureLength { len: usize },

    #[error("Address must be 20 bytes, got {len}")]
    InvalidAddressLength { len: usize },
}

/// Syntactic rejections of caller-supplied hex text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("Invalid hex character '{ch}' at position {index}")]
    InvalidHexCharacter { ch: char, index: usize },

    #[error("Hex string has invalid length")]
    InvalidHexLength,
}

impl From<hex::FromHexError> for FormatError {
    fn from(e: hex::FromHexError) -> Self {
        match e {
            hex::FromHexError::InvalidHexCharacter { c, index } => {
                FormatError::InvalidHexCharacter { ch: c, index }
            }
            hex::FromHexError::OddLength | hex::FromHexError::InvalidStringLength => {
                FormatError::InvalidHexLength
            }
        }
    }
}

/// Failures of the signing collaborator.
#[derive(Error, Debug)]
pub enum SignerError {
    #[error("Signature request rejected: {0}")]
    Rejected(String),

    #[error("No signer configured")]
    Unavailable,

    #[error("Signer backend error: {0}")]
    Backend(String),
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("GraphQL error: {}", messages.join("; "))]
    Graphql { messages: Vec<String> },

    #[error("Rate limited (retry after {retry_after_ms:?}ms)")]
    RateLimited { retry_after_ms: Option<u64> },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Timeout")]
    Timeout,

    #[error("Max retries exceeded after {attempts} attempts: {last_error}")]
    MaxRetriesExceeded { attempts: u32, last_error: String },
}
