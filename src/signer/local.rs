//! Local wallet — secp256k1 keypair-based signing.
//!
//! Only available with the `native-signer` feature. Intended for tests,
//! bots, and server-side tooling; interactive flows should inject a real
//! wallet behind [`RequestSigner`] instead.

use k256::ecdsa::SigningKey;
use sha3::{Digest, Keccak256};

use crate::codec::request::SigningMessage;
use crate::error::SignerError;
use crate::signer::{RawSignature, RequestSigner};

/// An in-process secp256k1 wallet.
///
/// Signs with the standard EVM personal-message convention, so its output
/// is indistinguishable from a browser wallet signing the same text: the
/// message is prefixed with `"\x19Ethereum Signed Message:\n" + length`,
/// Keccak-hashed, and ECDSA-signed with `v = 27 + recovery_id`.
pub struct LocalWallet {
    key: SigningKey,
    address: [u8; 20],
}

impl LocalWallet {
    /// Build from a raw 32-byte secret key.
    pub fn from_bytes(secret: &[u8; 32]) -> Result<Self, SignerError> {
        let key = SigningKey::from_bytes(secret.into())
            .map_err(|e| SignerError::Backend(e.to_string()))?;
        let address = derive_address(&key);
        Ok(Self { key, address })
    }

    /// Build from a hex-encoded secret key, `0x` prefix optional.
    pub fn from_hex(secret_hex: &str) -> Result<Self, SignerError> {
        let bytes = crate::codec::decode_hex(secret_hex)
            .map_err(|e| SignerError::Backend(e.to_string()))?;
        let secret: [u8; 32] = bytes
            .try_into()
            .map_err(|_| SignerError::Backend("secret key must be 32 bytes".to_string()))?;
        Self::from_bytes(&secret)
    }

    /// The wallet's EVM address as `0x`-prefixed hex.
    pub fn address_hex(&self) -> String {
        crate::codec::hex_prefixed(&self.address)
    }
}

#[async_trait::async_trait]
impl RequestSigner for LocalWallet {
    fn address(&self) -> [u8; 20] {
        self.address
    }

    async fn sign(&self, message: &SigningMessage) -> Result<RawSignature, SignerError> {
        let digest = personal_message_digest(message.as_text());
        let (signature, recovery_id) = self
            .key
            .sign_prehash_recoverable(&digest)
            .map_err(|e| SignerError::Backend(e.to_string()))?;

        let mut raw = [0u8; 65];
        raw[..64].copy_from_slice(&signature.to_bytes());
        raw[64] = 27 + recovery_id.to_byte();
        Ok(RawSignature(raw))
    }
}

/// Address = last 20 bytes of Keccak-256 over the uncompressed public key
/// (SEC1 point with the 0x04 prefix stripped).
fn derive_address(key: &SigningKey) -> [u8; 20] {
    let encoded = key.verifying_key().to_encoded_point(false);

    let mut hasher = Keccak256::new();
    hasher.update(&encoded.as_bytes()[1..]);
    let hash = hasher.finalize();

    let mut address = [0u8; 20];
    address.copy_from_slice(&hash[12..]);
    address
}

/// EIP-191 personal-message digest of a text payload.
fn personal_message_digest(text: &str) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    hasher.update(format!("\x19Ethereum Signed Message:\n{}", text.len()).as_bytes());
    hasher.update(text.as_bytes());
    hasher.finalize().into()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_KEY: [u8; 32] = [0x42; 32];

    #[tokio::test]
    async fn test_signature_is_65_bytes_with_legacy_v() {
        let wallet = LocalWallet::from_bytes(&TEST_KEY).unwrap();
        let message = SigningMessage::new([0xab; 32]);
        let signature = wallet.sign(&message).await.unwrap();

        assert_eq!(signature.as_bytes().len(), 65);
        let v = signature.as_bytes()[64];
        assert!(v == 27 || v == 28, "v byte out of range: {}", v);
    }

    #[tokio::test]
    async fn test_signing_is_deterministic() {
        // RFC 6979 nonces: same key + same message = same signature
        let wallet = LocalWallet::from_bytes(&TEST_KEY).unwrap();
        let message = SigningMessage::new([0x01; 32]);
        let first = wallet.sign(&message).await.unwrap();
        let second = wallet.sign(&message).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_different_digests_produce_different_signatures() {
        let wallet = LocalWallet::from_bytes(&TEST_KEY).unwrap();
        let a = wallet.sign(&SigningMessage::new([0x01; 32])).await.unwrap();
        let b = wallet.sign(&SigningMessage::new([0x02; 32])).await.unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_address_is_stable_and_hexable() {
        let wallet = LocalWallet::from_bytes(&TEST_KEY).unwrap();
        let again = LocalWallet::from_bytes(&TEST_KEY).unwrap();
        assert_eq!(wallet.address(), again.address());

        let hex = wallet.address_hex();
        assert!(hex.starts_with("0x"));
        assert_eq!(hex.len(), 42);
    }

    #[test]
    fn test_from_hex_matches_from_bytes() {
        let wallet = LocalWallet::from_bytes(&TEST_KEY).unwrap();
        let hexed = LocalWallet::from_hex(&format!("0x{}", hex::encode(TEST_KEY))).unwrap();
        assert_eq!(wallet.address(), hexed.address());
    }

    #[test]
    fn test_zero_key_rejected() {
        assert!(matches!(
            LocalWallet::from_bytes(&[0u8; 32]),
            Err(SignerError::Backend(_))
        ));
    }

    #[test]
    fn test_personal_message_digest_depends_on_length_prefix() {
        // Same bytes but different length framing must not collide
        let a = personal_message_digest("0xab");
        let b = personal_message_digest("0xabcd");
        assert_ne!(a, b);
    }
}
