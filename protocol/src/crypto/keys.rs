//! # Key Management
//!
//! Ed25519 keypair generation and serialization for Aurum signers.
//!
//! Every party that authorizes ledger instructions holds at least one
//! Ed25519 keypair. This module handles creation, serialization, and the
//! basic sign/verify operations; the identity strings built on top of
//! these keys live in the `identity` module.
//!
//! ## Why Ed25519?
//!
//! - Deterministic signatures (no k-value footguns like ECDSA). The same
//!   signer over the same transaction hash always produces the same bytes,
//!   which is exactly what a deterministic derived-identifier scheme needs.
//! - 128-bit security level in 32+32 bytes. Compact and sufficient.
//! - Constant-time implementations exist and are well-audited.
//!
//! ## Security considerations
//!
//! - We use OS-level RNG (`OsRng`) for key generation. If your OS RNG is
//!   broken, you have bigger problems than Aurum.
//! - Key bytes are never logged. If you add logging to this module,
//!   you will be asked to leave.

use ed25519_dalek::{
    Signature as DalekSignature, Signer, SigningKey, Verifier, VerifyingKey, SECRET_KEY_LENGTH,
};
use rand::rngs::OsRng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use thiserror::Error;

/// Errors that can occur during key operations.
///
/// These are intentionally vague about *why* something failed — leaking
/// details about key material through error messages is a classic footgun.
#[derive(Debug, Error)]
pub enum KeyError {
    #[error("invalid secret key bytes: wrong length or not a valid scalar")]
    InvalidSecretKey,

    #[error("invalid public key bytes: not a valid Ed25519 point")]
    InvalidPublicKey,
}

/// An Aurum signing keypair wrapping Ed25519 signing and verification keys.
///
/// This is what stands behind every signature on a client transaction.
/// The ledger never sees the keypair itself — only the public key (via an
/// identity string) and signatures over transaction hashes.
///
/// ## Serialization
///
/// `AurumKeypair` intentionally does NOT implement `Serialize`/`Deserialize`.
/// Serializing private keys should be a deliberate, conscious act, not
/// something that happens because someone shoved a keypair into a JSON
/// response. Use `to_bytes()` / `from_bytes()` explicitly.
///
/// # Examples
///
/// ```
/// use aurum_protocol::crypto::keys::AurumKeypair;
///
/// let kp = AurumKeypair::generate();
/// let msg = b"spawn contract instance";
/// let sig = kp.sign(msg);
/// assert!(kp.verify(msg, &sig));
/// ```
pub struct AurumKeypair {
    /// The Ed25519 signing (private) key. 32 bytes of pure responsibility.
    signing_key: SigningKey,
}

/// The public half of an Aurum signer, safe to share with the world.
///
/// This is what appears (hex-encoded) in identity strings and what nodes
/// use to verify instruction signatures before admitting a transaction
/// to consensus.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AurumPublicKey {
    bytes: [u8; 32],
}

/// An Ed25519 signature over a message.
///
/// 64 bytes. Deterministic for a given (key, message) pair. Stored as
/// `Vec<u8>` for serde compatibility, but always exactly 64 bytes when
/// produced by [`AurumKeypair::sign`]. If someone hands you an
/// `AurumSignature` that isn't 64 bytes, verification will simply fail —
/// no panics, no undefined behavior, just a boolean `false`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AurumSignature {
    bytes: Vec<u8>,
}

impl AurumKeypair {
    /// Generate a fresh keypair using the OS cryptographic RNG.
    pub fn generate() -> Self {
        let signing_key = SigningKey::generate(&mut OsRng);
        Self { signing_key }
    }

    /// Constructs a keypair deterministically from a 32-byte seed.
    ///
    /// In Ed25519 the 32-byte secret key *is* the seed, so this is also
    /// the reconstruction path for stored keys. Tests lean on this for
    /// reproducible signers.
    ///
    /// **Warning**: if you call this with a weak seed, you get a weak key.
    /// Use a proper CSPRNG or KDF to produce the seed bytes.
    pub fn from_seed(seed: &[u8; 32]) -> Self {
        let signing_key = SigningKey::from_bytes(seed);
        Self { signing_key }
    }

    /// Reconstruct a keypair from a hex-encoded secret key.
    ///
    /// Convenience method for loading keys from disk or flags. Please
    /// don't pass raw hex keys on production command lines; for devnet,
    /// we're not going to pretend you won't do it anyway.
    pub fn from_hex(hex_str: &str) -> Result<Self, KeyError> {
        let bytes = hex::decode(hex_str).map_err(|_| KeyError::InvalidSecretKey)?;
        if bytes.len() != SECRET_KEY_LENGTH {
            return Err(KeyError::InvalidSecretKey);
        }
        let mut arr = [0u8; SECRET_KEY_LENGTH];
        arr.copy_from_slice(&bytes);
        Ok(Self::from_seed(&arr))
    }

    /// Returns the public key associated with this keypair.
    pub fn public_key(&self) -> AurumPublicKey {
        AurumPublicKey {
            bytes: self.signing_key.verifying_key().to_bytes(),
        }
    }

    /// Get the raw public key bytes (32 bytes). Safe to share, log,
    /// tattoo on your arm, etc.
    pub fn public_key_bytes(&self) -> [u8; 32] {
        self.signing_key.verifying_key().to_bytes()
    }

    /// Sign a message and return an [`AurumSignature`].
    ///
    /// Ed25519 signatures are deterministic — the same (key, message) pair
    /// always produces the same signature. No nonce games, no randomness
    /// needed at signing time.
    pub fn sign(&self, message: &[u8]) -> AurumSignature {
        let sig = self.signing_key.sign(message);
        AurumSignature {
            bytes: sig.to_bytes().to_vec(),
        }
    }

    /// Verify a signature against this keypair's public key.
    ///
    /// Convenience method — equivalent to calling `self.public_key().verify()`.
    pub fn verify(&self, message: &[u8], signature: &AurumSignature) -> bool {
        self.public_key().verify(message, signature)
    }

    /// Exports the raw 32-byte secret key material.
    ///
    /// **Handle with extreme care.** This is the only secret that stands
    /// between an attacker and full signing authority over every instance
    /// this key controls. Don't log it. Don't send it over the network in
    /// plaintext.
    pub fn to_bytes(&self) -> [u8; 32] {
        self.signing_key.to_bytes()
    }

    /// Reconstructs a keypair from raw secret key bytes.
    /// Equivalent to [`from_seed`](Self::from_seed).
    pub fn from_bytes(secret_key_bytes: &[u8; SECRET_KEY_LENGTH]) -> Self {
        Self::from_seed(secret_key_bytes)
    }

    /// Hex-encoded public key. Useful for display and logging.
    pub fn public_key_hex(&self) -> String {
        hex::encode(self.public_key_bytes())
    }
}

impl Clone for AurumKeypair {
    /// Cloning a keypair is allowed but should make you uncomfortable.
    /// Every copy of a private key is another thing to protect.
    fn clone(&self) -> Self {
        Self {
            signing_key: SigningKey::from_bytes(&self.signing_key.to_bytes()),
        }
    }
}

impl fmt::Debug for AurumKeypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Never print secret key material in debug output. Not even "partially."
        // A partial leak is still a leak, and grepping logs for hex is trivial.
        write!(f, "AurumKeypair(pub={})", self.public_key().to_hex())
    }
}

impl PartialEq for AurumKeypair {
    /// Two keypairs are equal if their public keys match. Comparing secret
    /// material in a non-constant-time way is a bad habit, and for identity
    /// purposes the public key is what matters.
    fn eq(&self, other: &Self) -> bool {
        self.public_key_bytes() == other.public_key_bytes()
    }
}

impl Eq for AurumKeypair {}

// ---------------------------------------------------------------------------
// AurumPublicKey
// ---------------------------------------------------------------------------

impl AurumPublicKey {
    /// Create an `AurumPublicKey` from raw bytes.
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self { bytes }
    }

    /// Try to create an `AurumPublicKey` from a byte slice.
    ///
    /// Validates the length and that the bytes represent a valid Ed25519
    /// point. We don't just accept any 32 bytes — some values aren't valid
    /// points on the curve, and using them could lead to weird behavior.
    pub fn try_from_slice(slice: &[u8]) -> Result<Self, KeyError> {
        if slice.len() != 32 {
            return Err(KeyError::InvalidPublicKey);
        }
        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(slice);

        // This catches low-order points and other degenerate cases.
        VerifyingKey::from_bytes(&bytes).map_err(|_| KeyError::InvalidPublicKey)?;

        Ok(Self { bytes })
    }

    /// Get the raw bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.bytes
    }

    /// Verify a signature against this public key.
    ///
    /// Returns `true` if the signature is valid, `false` otherwise. The
    /// vast majority of callers just want a yes/no answer and don't care
    /// about the specific failure mode.
    pub fn verify(&self, message: &[u8], signature: &AurumSignature) -> bool {
        let Ok(verifying_key) = VerifyingKey::from_bytes(&self.bytes) else {
            return false;
        };
        let sig_bytes: [u8; 64] = match signature.bytes.as_slice().try_into() {
            Ok(b) => b,
            Err(_) => return false,
        };
        let dalek_sig = DalekSignature::from_bytes(&sig_bytes);
        verifying_key.verify(message, &dalek_sig).is_ok()
    }

    /// Hex-encoded representation. 64 characters for 32 bytes.
    pub fn to_hex(&self) -> String {
        hex::encode(self.bytes)
    }

    /// Parse a hex-encoded public key string.
    pub fn from_hex(s: &str) -> Result<Self, KeyError> {
        let bytes = hex::decode(s).map_err(|_| KeyError::InvalidPublicKey)?;
        Self::try_from_slice(&bytes)
    }
}

impl Hash for AurumPublicKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bytes.hash(state);
    }
}

impl fmt::Display for AurumPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for AurumPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AurumPublicKey({})", &self.to_hex()[..16])
    }
}

// ---------------------------------------------------------------------------
// AurumSignature
// ---------------------------------------------------------------------------

impl AurumSignature {
    /// Create a signature from the raw 64-byte representation.
    pub fn from_bytes(bytes: [u8; 64]) -> Self {
        Self {
            bytes: bytes.to_vec(),
        }
    }

    /// Create a signature from an arbitrary byte slice.
    ///
    /// No length validation happens here. A wrong-length signature is
    /// representable but will never verify, which is the failure mode we
    /// want for bytes that arrived from outside.
    pub fn from_slice(bytes: &[u8]) -> Self {
        Self {
            bytes: bytes.to_vec(),
        }
    }

    /// Returns the raw signature bytes (64 bytes for valid Ed25519 signatures).
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Hex-encoded signature string. 128 characters for a valid sig.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.bytes)
    }

    /// Parse a hex-encoded signature.
    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        let bytes = hex::decode(s)?;
        Ok(Self { bytes })
    }
}

impl fmt::Display for AurumSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for AurumSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hex_str = self.to_hex();
        if hex_str.len() >= 128 {
            write!(f, "AurumSignature({}...{})", &hex_str[..8], &hex_str[120..])
        } else {
            write!(f, "AurumSignature({})", hex_str)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_produces_valid_keypair() {
        let kp = AurumKeypair::generate();
        assert_eq!(kp.public_key_bytes().len(), 32);
        assert_eq!(kp.to_bytes().len(), 32);
    }

    #[test]
    fn keypair_sign_verify_roundtrip() {
        let kp = AurumKeypair::generate();
        let msg = b"spawn value instance";
        let sig = kp.sign(msg);
        assert!(kp.verify(msg, &sig));
    }

    #[test]
    fn wrong_message_fails_verification() {
        let kp = AurumKeypair::generate();
        let sig = kp.sign(b"correct message");
        assert!(!kp.verify(b"wrong message", &sig));
    }

    #[test]
    fn wrong_key_fails_verification() {
        let kp1 = AurumKeypair::generate();
        let kp2 = AurumKeypair::generate();
        let sig = kp1.sign(b"message");
        assert!(!kp2.verify(b"message", &sig));
    }

    #[test]
    fn test_roundtrip_bytes() {
        let kp = AurumKeypair::generate();
        let secret_bytes = kp.to_bytes();
        let restored = AurumKeypair::from_bytes(&secret_bytes);
        assert_eq!(kp.public_key_bytes(), restored.public_key_bytes());
    }

    #[test]
    fn test_roundtrip_hex() {
        let kp = AurumKeypair::generate();
        let hex_str = hex::encode(kp.to_bytes());
        let restored = AurumKeypair::from_hex(&hex_str).unwrap();
        assert_eq!(kp.public_key_bytes(), restored.public_key_bytes());
    }

    #[test]
    fn test_invalid_hex_rejected() {
        // Too short
        assert!(AurumKeypair::from_hex("deadbeef").is_err());
        // Not hex at all
        assert!(AurumKeypair::from_hex("not-hex-at-all").is_err());
    }

    #[test]
    fn deterministic_from_seed() {
        let seed = [42u8; 32];
        let kp1 = AurumKeypair::from_seed(&seed);
        let kp2 = AurumKeypair::from_seed(&seed);
        assert_eq!(kp1.public_key(), kp2.public_key());
    }

    #[test]
    fn test_deterministic_signatures() {
        // Ed25519 is deterministic — same key + same message = same signature.
        // The derived-identifier scheme depends on this.
        let kp = AurumKeypair::generate();
        let msg = b"determinism is underrated";
        let sig1 = kp.sign(msg);
        let sig2 = kp.sign(msg);
        assert_eq!(sig1.as_bytes(), sig2.as_bytes());
    }

    #[test]
    fn public_key_hex_roundtrip() {
        let kp = AurumKeypair::generate();
        let pk = kp.public_key();
        let recovered = AurumPublicKey::from_hex(&pk.to_hex()).unwrap();
        assert_eq!(pk, recovered);
    }

    #[test]
    fn test_public_key_rejects_wrong_length() {
        let short = [0u8; 16];
        assert!(AurumPublicKey::try_from_slice(&short).is_err());
    }

    #[test]
    fn test_signature_hex_roundtrip() {
        let kp = AurumKeypair::generate();
        let sig = kp.sign(b"test");
        let recovered = AurumSignature::from_hex(&sig.to_hex()).unwrap();
        assert_eq!(sig, recovered);
    }

    #[test]
    fn wrong_length_signature_never_verifies() {
        let kp = AurumKeypair::generate();
        let truncated = AurumSignature::from_slice(&[0xAB; 12]);
        assert!(!kp.verify(b"anything", &truncated));
    }

    #[test]
    fn debug_does_not_leak_secret() {
        let kp = AurumKeypair::generate();
        let debug_str = format!("{:?}", kp);
        assert!(debug_str.starts_with("AurumKeypair(pub="));
        assert!(!debug_str.contains("signing_key"));
    }

    #[test]
    fn test_empty_message_signing() {
        // Signing an empty message is valid in Ed25519. The signature is
        // still deterministic.
        let kp = AurumKeypair::generate();
        let sig = kp.sign(b"");
        assert!(kp.verify(b"", &sig));
    }
}
