//! # Signer Identities
//!
//! Who is allowed to do what on the Aurum ledger is expressed in terms of
//! *identities* — scheme-tagged public keys with a canonical string form
//! like `ed25519:8f2a...`. An instruction is admitted only when it carries
//! signatures whose identities the target instance's access rules accept.
//!
//! This module provides the identity type, the signature-with-identity
//! pair that travels inside a signed instruction, and the [`Signer`]
//! capability trait that the transaction layer consumes. The transaction
//! layer never sees key material — only `sign(message) -> Signature`.
//!
//! The access rules themselves (who may spawn, who may evolve) live on
//! the ledger and are out of scope for the client.

pub mod signer;

pub use signer::{Ed25519Signer, Identity, IdentityError, Signature, Signer};
