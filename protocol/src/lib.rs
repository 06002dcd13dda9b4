// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # Aurum Protocol — Client Transaction Library
//!
//! This is the client side of Aurum, a permissioned smart-contract ledger
//! where every state change is an instruction executed against a contract
//! instance. This crate builds those instructions, batches them into
//! atomic transactions, hashes them canonically, and signs them.
//!
//! The hashing protocol is the one part of this crate with a strict,
//! network-visible contract. Every node that receives a transaction
//! recomputes the same digests from the same fields in the same order;
//! a single byte out of place and the network no longer agrees on what
//! the transaction *is*. Treat the byte layouts in [`transaction`] as
//! frozen — they are wire format, not implementation detail.
//!
//! ## Architecture
//!
//! The crate is split into modules that mirror the actual concerns of a
//! ledger client:
//!
//! - **crypto** — SHA-256 digests and Ed25519 keypairs. Don't roll your own.
//! - **identity** — Signer identities and the signing capability seam.
//! - **transaction** — Instructions, client transactions, canonical hashing,
//!   signing, verification, and the wire codec.
//!
//! ## What this crate deliberately does not do
//!
//! No networking, no consensus, no contract execution, no persistence.
//! Those live in the ledger service. This crate produces a fully signed
//! [`transaction::SignedTransaction`] and stops; how it reaches a node is
//! someone else's problem (and someone else's dependency tree).
//!
//! ## Design Philosophy
//!
//! 1. Determinism over convenience. Two clients building the same
//!    transaction must produce the same bytes, always.
//! 2. Make invalid states unrepresentable. An instruction cannot exist
//!    without exactly one operation; a signed transaction is a different
//!    type from an unsigned one.
//! 3. If it feeds a hash, it has tests. Plural.

pub mod crypto;
pub mod identity;
pub mod transaction;
