//! # Hashing Utilities
//!
//! SHA-256 helpers used throughout the Aurum client. There is exactly one
//! hash function in this crate, and that is on purpose: instruction and
//! transaction digests are a network-visible contract, and every node —
//! whatever language it is written in — must reproduce them bit-for-bit.
//! SHA-256 is what the network speaks, so SHA-256 is what we compute.
//!
//! The interesting hashing (the exact field order of an instruction
//! digest) lives next to the types it hashes, in the `transaction` module.
//! This module only provides the plumbing: one-shot digests and a
//! multi-part variant for hashing composite structures without building
//! a temporary concatenation buffer.

use sha2::{Digest, Sha256};

/// Compute the SHA-256 hash of the input data.
///
/// Returns a 32-byte digest as a `Vec<u8>`. Half the callers immediately
/// pass the result to functions that want `&[u8]`, so the heap allocation
/// is noise compared to the cost of the hash itself. For a fixed-size
/// result, use [`sha256_array`].
///
/// # Example
///
/// ```
/// use aurum_protocol::crypto::sha256;
///
/// let hash = sha256(b"aurum ledger");
/// assert_eq!(hash.len(), 32);
/// ```
pub fn sha256(data: &[u8]) -> Vec<u8> {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().to_vec()
}

/// Compute the SHA-256 hash and return a fixed-size array.
///
/// Same as [`sha256`] but returns `[u8; 32]` for callers that want a
/// fixed-size type without the heap allocation. Use this where the array
/// type propagates naturally — instruction hashes, derived identifiers.
pub fn sha256_array(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Hash multiple byte slices together without concatenation overhead.
///
/// Instead of allocating a buffer to concatenate inputs, we feed them
/// sequentially into the hasher. Same result, less allocation. This is
/// how the transaction-level digest folds per-instruction hashes.
pub fn sha256_multi(parts: &[&[u8]]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update(part);
    }
    hasher.finalize().into()
}
