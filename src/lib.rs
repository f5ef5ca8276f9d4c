//! # Meridian SDK
//!
//! A unified Rust SDK for Meridian token applications supporting both native
//! and WASM targets.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Canonical request codec, digests, signature envelopes
//!    (always available, WASM-safe)
//! 2. **Signer** — The injected signing capability; `native-signer` adds a
//!    local secp256k1 wallet
//! 3. **HTTP API** — `MeridianHttp` speaking GraphQL with per-call retry
//!    policies
//! 4. **High-Level Client** — `MeridianClient` with nested sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use meridian_sdk::prelude::*;
//!
//! let client = MeridianClient::builder()
//!     .endpoint("https://node.meridian.network")
//!     .chain_id("e476187f6ddfeb9d")
//!     .application_id("fungible0")
//!     .signer(std::sync::Arc::new(wallet))
//!     .build()?;
//!
//! let receipt = client.tokens().create(&params).await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes used across all domains.
pub mod shared;

/// Canonical request encoding: primitives, amounts, owners, digests,
/// envelopes.
pub mod codec;

/// Domain modules (vertical slices): types, wire types, sub-clients.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: Signer ──────────────────────────────────────────────────────────

/// Request signing capability and the optional local wallet.
pub mod signer;

// ── Layer 3: HTTP API ────────────────────────────────────────────────────────

/// HTTP client with retry policies.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `MeridianClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{ApplicationId, ChainId};

    // Core codec types
    pub use crate::codec::{
        AccountOwner, Amount, CreateTokenRequest, SignatureEnvelope, SigningMessage,
        TokenMetadata, AMOUNT_SCALE, SIGNING_DOMAIN,
    };

    // Domain types — token
    pub use crate::domain::token::{CreateTokenDraft, CreateTokenParams};

    // Errors
    pub use crate::error::{
        EncodeError, FormatError, SdkError, SignerError, ValidationError,
    };

    // Network
    pub use crate::network::DEFAULT_ENDPOINT;

    // Signer capability
    pub use crate::signer::{RawSignature, RequestSigner};
    #[cfg(feature = "native-signer")]
    pub use crate::signer::LocalWallet;

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{MeridianClient, MeridianClientBuilder, TokensClient};
    #[cfg(feature = "http")]
    pub use crate::http::retry::{RetryConfig, RetryPolicy};
}
