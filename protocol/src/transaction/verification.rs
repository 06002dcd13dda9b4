//! Signature verification for signed transactions.
//!
//! Every transaction entering a node must pass [`verify_transaction`]
//! before it is considered for consensus. The checks are ordered from
//! cheapest to most expensive (structural counts before Ed25519 math) to
//! fail fast and waste minimal CPU on invalid submissions.
//!
//! What is *not* checked here: replay counters against ledger state and
//! access rules on the target instances. Both require the ledger's
//! current state and belong to the service, not the client library.

use thiserror::Error;

use super::client::SignedTransaction;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can occur during transaction verification.
///
/// Each variant maps to a specific validation rule and carries enough
/// context to point at the offending instruction.
#[derive(Debug, Error)]
pub enum TransactionError {
    /// The transaction contains no instructions at all.
    #[error("transaction contains no instructions")]
    Empty,

    /// An instruction carries no signatures.
    #[error("instruction {index} carries no signatures")]
    MissingSignatures {
        /// Position of the instruction in the batch.
        index: usize,
    },

    /// Signature count and signer-counter count disagree.
    ///
    /// Counters and signatures correspond positionally, so their lengths
    /// must match or the ledger cannot tell whose counter is whose.
    #[error("instruction {index}: {got} signatures for {expected} signer counters")]
    CounterMismatch {
        /// Position of the instruction in the batch.
        index: usize,
        /// Number of signer counters on the instruction.
        expected: usize,
        /// Number of signatures actually attached.
        got: usize,
    },

    /// A signature does not verify over the transaction hash.
    #[error("instruction {index}: signature {position} does not verify against {signer}")]
    InvalidSignature {
        /// Position of the instruction in the batch.
        index: usize,
        /// Position of the signature within the instruction.
        position: usize,
        /// String form of the identity the signature claims.
        signer: String,
    },
}

// ---------------------------------------------------------------------------
// Verification
// ---------------------------------------------------------------------------

/// Verifies a signed transaction's structure and signatures.
///
/// The checks, in order:
///
/// 1. **Non-empty** — the batch must contain at least one instruction.
/// 2. **Signatures present** — every instruction must carry at least one.
/// 3. **Positional agreement** — signature count equals signer-counter
///    count on every instruction.
/// 4. **Cryptographic validity** — every signature verifies over the
///    aggregate transaction hash against its embedded identity.
///
/// The shared digest is computed once; with N instructions and M signers
/// this performs N×M Ed25519 verifications and nothing else expensive.
///
/// # Errors
///
/// Returns the first failing check as a [`TransactionError`].
pub fn verify_transaction(tx: &SignedTransaction) -> Result<(), TransactionError> {
    if tx.instructions.is_empty() {
        return Err(TransactionError::Empty);
    }

    for (index, instr) in tx.instructions.iter().enumerate() {
        if instr.signatures.is_empty() {
            return Err(TransactionError::MissingSignatures { index });
        }
        let expected = instr.instruction.signer_counters.len();
        if instr.signatures.len() != expected {
            return Err(TransactionError::CounterMismatch {
                index,
                expected,
                got: instr.signatures.len(),
            });
        }
    }

    let ctx_hash = tx.hash();
    for (index, instr) in tx.instructions.iter().enumerate() {
        for (position, sig) in instr.signatures.iter().enumerate() {
            if !sig.verify(&ctx_hash) {
                return Err(TransactionError::InvalidSignature {
                    index,
                    position,
                    signer: sig.signer.to_string(),
                });
            }
        }
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
