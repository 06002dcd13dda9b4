//! # Transaction Module
//!
//! Construction, canonical hashing, signing, and verification of Aurum
//! client transactions. Every state change on the ledger — spawning a
//! contract instance, invoking it, deleting it — travels as an
//! [`Instruction`] inside a [`ClientTransaction`].
//!
//! ## Architecture
//!
//! ```text
//! types.rs        — Argument, Spawn/Invoke/Delete payloads, the Operation enum
//! instance.rs     — InstanceId: the 32-byte name of a contract instance
//! instruction.rs  — Instruction: hashing, signing, derived identifiers
//! client.rs       — ClientTransaction: ordered atomic batch, aggregate hash
//! verification.rs — Signature verification over the shared transaction hash
//! wire.rs         — Codec seam: compact binary and JSON encodings
//! ```
//!
//! ## Transaction Lifecycle
//!
//! 1. **Build** — Create instructions via [`Instruction::spawn`] /
//!    [`Instruction::invoke`] / [`Instruction::delete`] and attach the
//!    signers' replay counters.
//! 2. **Batch** — Collect them, in execution order, into a
//!    [`ClientTransaction`]. All instructions in a batch succeed or fail
//!    together on the ledger.
//! 3. **Sign** — [`ClientTransaction::sign_with`] computes the aggregate
//!    hash once and has every signer endorse it, yielding a
//!    [`SignedTransaction`].
//! 4. **Submit** — Hand the signed transaction to the submission channel
//!    (not this crate's business).
//!
//! ## Design Decisions
//!
//! - The instruction digest byte layout is a frozen, network-visible
//!   contract. It is written out field by field in
//!   [`Instruction::hash`] rather than delegated to a serialization
//!   framework, because codec output is not canonical and field order
//!   must never depend on a derive macro's mood.
//! - Signers endorse the *whole batch*: every instruction is signed over
//!   the same aggregate hash. Reordering instructions therefore
//!   invalidates every signature at once, which is exactly the property
//!   an atomic batch wants.
//! - Signing is a typed transition. An unsigned [`Instruction`] and a
//!   [`SignedInstruction`] are different types, so "forgot to sign" is a
//!   compile error at the submission boundary, not a runtime surprise.

pub mod client;
pub mod instance;
pub mod instruction;
pub mod types;
pub mod verification;
pub mod wire;

pub use client::{ClientTransaction, SignedTransaction};
pub use instance::{InstanceId, InstanceIdError};
pub use instruction::{Instruction, SignedInstruction, EVOLVE_COMMAND};
pub use types::{Argument, Delete, Invoke, Operation, OperationKind, Spawn};
pub use verification::{verify_transaction, TransactionError};
