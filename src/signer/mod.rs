//! Request signing capability.
//!
//! The SDK never holds key material of its own. Whatever signs a request
//! (a browser wallet bridge, a local development key) is injected behind
//! [`RequestSigner`] and consumed through it.

#[cfg(feature = "native-signer")]
pub mod local;

#[cfg(feature = "native-signer")]
pub use local::LocalWallet;

use crate::codec::envelope::SIGNATURE_LEN;
use crate::codec::hex_prefixed;
use crate::codec::request::SigningMessage;
use crate::error::SignerError;

/// A 65-byte recoverable signature (r ‖ s ‖ v) as an EVM wallet emits it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawSignature(pub [u8; SIGNATURE_LEN]);

impl RawSignature {
    pub fn as_bytes(&self) -> &[u8; SIGNATURE_LEN] {
        &self.0
    }

    /// `0x`-prefixed lowercase hex of the 65 bytes.
    pub fn to_hex(&self) -> String {
        hex_prefixed(&self.0)
    }
}

/// Capability interface for the external signing collaborator.
///
/// The collaborator receives the message exactly as
/// [`SigningMessage::as_text`] renders it and signs that text, not the raw
/// digest. Signing may suspend indefinitely while a user decides; a decline
/// surfaces as [`SignerError::Rejected`] and is never retried by the SDK.
#[async_trait::async_trait]
pub trait RequestSigner: Send + Sync {
    /// The 20-byte EVM address this signer produces signatures for.
    fn address(&self) -> [u8; 20];

    /// Sign the presented message.
    async fn sign(&self, message: &SigningMessage) -> Result<RawSignature, SignerError>;
}
