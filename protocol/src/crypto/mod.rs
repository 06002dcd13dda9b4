//! # Cryptographic Primitives for Aurum
//!
//! Everything security-related in the client flows through here: the
//! SHA-256 digests that give transactions their identity, and the Ed25519
//! keypairs that authorize them.
//!
//! We deliberately chose boring, well-audited cryptography:
//!
//! - **SHA-256** for hashing — it is the digest the ledger network agreed
//!   on, and a transaction hash is only useful if every node computes the
//!   same one.
//! - **Ed25519** for signatures — fast, deterministic, and nobody has
//!   broken it.
//!
//! ## A note on "rolling your own crypto"
//!
//! We don't. Everything here is a thin, type-safe wrapper around audited
//! implementations. If you're tempted to optimize these functions, please
//! reconsider. Then reconsider again. Then go read about timing attacks
//! and come back when you've lost the urge.

pub mod hash;
pub mod keys;

// Re-export the things people actually need so they don't have to memorize
// our module hierarchy.
pub use hash::{sha256, sha256_array, sha256_multi};
pub use keys::{AurumKeypair, AurumPublicKey, AurumSignature};
