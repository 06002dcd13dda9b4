//! Identities, signatures, and the signing capability.
//!
//! The canonical string form of an identity is `<scheme>:<hex>`, e.g.
//! `ed25519:4c3a...`. The scheme prefix exists so that new signature
//! schemes can join the network without ambiguity; today Ed25519 is the
//! only scheme the client ships. The string form is what appears in
//! ledger access rules and in tooling output — the hash protocol itself
//! never consumes it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::crypto::keys::{AurumKeypair, AurumPublicKey, AurumSignature};

/// Errors from parsing or using identities.
#[derive(Debug, Error)]
pub enum IdentityError {
    /// The identity string does not have the `<scheme>:<data>` shape.
    #[error("malformed identity string: {0:?}")]
    Malformed(String),

    /// The scheme prefix is not one this client supports.
    #[error("unsupported identity scheme: {0:?}")]
    UnsupportedScheme(String),

    /// The data part is not a valid public key for the scheme.
    #[error("invalid public key in identity string")]
    InvalidKey,
}

// ---------------------------------------------------------------------------
// Identity
// ---------------------------------------------------------------------------

/// A scheme-tagged signer identity.
///
/// Identities have value semantics: two identities are equal when their
/// scheme and key bytes are equal. Ed25519 is the only scheme currently
/// shipped; the enum exists so that adding a scheme is a variant, not a
/// rewrite.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Identity {
    /// An Ed25519 public key identity.
    Ed25519(AurumPublicKey),
}

impl Identity {
    /// The scheme tag used in the canonical string form.
    pub fn scheme(&self) -> &'static str {
        match self {
            Identity::Ed25519(_) => "ed25519",
        }
    }

    /// Verify `signature` over `message` against this identity's key.
    ///
    /// Returns `false` for malformed signature bytes rather than erroring —
    /// bytes that arrived from outside don't get to panic us.
    pub fn verify(&self, message: &[u8], signature: &[u8]) -> bool {
        match self {
            Identity::Ed25519(pk) => pk.verify(message, &AurumSignature::from_slice(signature)),
        }
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identity::Ed25519(pk) => write!(f, "{}:{}", self.scheme(), pk.to_hex()),
        }
    }
}

impl FromStr for Identity {
    type Err = IdentityError;

    /// Parse the canonical `<scheme>:<hex>` form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (scheme, data) = s
            .split_once(':')
            .ok_or_else(|| IdentityError::Malformed(s.to_string()))?;
        match scheme {
            "ed25519" => {
                let pk =
                    AurumPublicKey::from_hex(data).map_err(|_| IdentityError::InvalidKey)?;
                Ok(Identity::Ed25519(pk))
            }
            other => Err(IdentityError::UnsupportedScheme(other.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Signature
// ---------------------------------------------------------------------------

/// A signature together with the identity that produced it.
///
/// This is what gets attached to an instruction: the raw signature bytes
/// over the transaction hash, plus the signer's identity so that any node
/// can verify the signature without a key lookup. The raw bytes are also
/// what the derived-identifier scheme consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    /// Raw signature bytes (64 bytes for Ed25519).
    pub signature: Vec<u8>,

    /// The identity of the signer that produced the bytes.
    pub signer: Identity,
}

impl Signature {
    /// Verify this signature over `message` against its embedded identity.
    pub fn verify(&self, message: &[u8]) -> bool {
        self.signer.verify(message, &self.signature)
    }
}

// ---------------------------------------------------------------------------
// Signer
// ---------------------------------------------------------------------------

/// The signing capability consumed by the transaction layer.
///
/// Implementations hold whatever key material they hold — a local keypair,
/// a hardware token, a remote signing service. The transaction layer only
/// ever asks for a signature over a digest and for the signer's identity,
/// so swapping the backing store never touches the hashing protocol.
pub trait Signer {
    /// Sign `message` and return the signature paired with this signer's
    /// identity.
    fn sign(&self, message: &[u8]) -> Signature;

    /// The identity that [`sign`](Self::sign) will embed in its signatures.
    fn identity(&self) -> Identity;
}

/// A [`Signer`] backed by a local in-memory Ed25519 keypair.
///
/// The workhorse signer for tooling and tests. Production deployments
/// with stricter key custody implement [`Signer`] over their own storage.
#[derive(Clone)]
pub struct Ed25519Signer {
    keypair: AurumKeypair,
}

impl Ed25519Signer {
    /// Generate a signer with a fresh random keypair.
    pub fn generate() -> Self {
        Self {
            keypair: AurumKeypair::generate(),
        }
    }

    /// Deterministic signer from a 32-byte seed. Tests lean on this.
    pub fn from_seed(seed: &[u8; 32]) -> Self {
        Self {
            keypair: AurumKeypair::from_seed(seed),
        }
    }

    /// Wrap an existing keypair.
    pub fn new(keypair: AurumKeypair) -> Self {
        Self { keypair }
    }

    /// The underlying keypair. Needed by tooling that exports the secret.
    pub fn keypair(&self) -> &AurumKeypair {
        &self.keypair
    }
}

impl Signer for Ed25519Signer {
    fn sign(&self, message: &[u8]) -> Signature {
        Signature {
            signature: self.keypair.sign(message).as_bytes().to_vec(),
            signer: self.identity(),
        }
    }

    fn identity(&self) -> Identity {
        Identity::Ed25519(self.keypair.public_key())
    }
}

impl fmt::Debug for Ed25519Signer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Debug goes through the identity so the secret key stays out of logs.
        write!(f, "Ed25519Signer({})", self.identity())
    }
}
