//! Client transactions: ordered, atomically-applied instruction batches.
//!
//! A batch's aggregate hash is the fold of its per-instruction hashes, so
//! instruction order is load-bearing twice over: it is the execution order
//! on the ledger, and it is an input to the digest every signer endorses.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::identity::Signer;
use super::instruction::{Instruction, SignedInstruction};

// ---------------------------------------------------------------------------
// ClientTransaction
// ---------------------------------------------------------------------------

/// An ordered batch of instructions that the ledger applies atomically.
///
/// All instructions succeed together or fail together. The order of
/// `instructions` is semantically significant: it fixes execution order
/// downstream and feeds the aggregate hash, so `[A, B]` and `[B, A]` are
/// different transactions with different hashes (whenever `A != B`).
///
/// # Examples
///
/// ```
/// use aurum_protocol::identity::Ed25519Signer;
/// use aurum_protocol::transaction::{ClientTransaction, InstanceId, Instruction};
///
/// let signer = Ed25519Signer::generate();
/// let spawn = Instruction::spawn(InstanceId::zero(), "value", vec![])
///     .with_signer_counters(vec![1]);
///
/// let tx = ClientTransaction::new(vec![spawn]);
/// let signed = tx.sign_with(&[&signer]);
/// assert_eq!(signed.hash(), tx.hash());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientTransaction {
    /// The instructions, in execution order.
    pub instructions: Vec<Instruction>,
}

impl ClientTransaction {
    /// Creates a transaction from instructions in execution order.
    pub fn new(instructions: Vec<Instruction>) -> Self {
        Self { instructions }
    }

    /// Computes the aggregate transaction digest.
    ///
    /// SHA-256 over the concatenation, in order, of each instruction's
    /// 32-byte hash. This is the commitment every signer endorses: it is
    /// deliberately *not* per-instruction, so a signature binds the whole
    /// batch's composition. Reordering, inserting, or removing any
    /// instruction changes this digest and therefore invalidates every
    /// signature produced for the old one.
    pub fn hash(&self) -> [u8; 32] {
        let mut h = Sha256::new();
        for instruction in &self.instructions {
            h.update(instruction.hash());
        }
        h.finalize().into()
    }

    /// Signs the batch, producing a [`SignedTransaction`].
    ///
    /// The aggregate hash is computed once; every instruction then
    /// receives one signature per signer over that shared digest, in
    /// signer order. The same full signer set signs every instruction —
    /// per-instruction signer subsets are not a thing at this layer.
    pub fn sign_with(&self, signers: &[&dyn Signer]) -> SignedTransaction {
        let ctx_hash = self.hash();
        SignedTransaction {
            instructions: self
                .instructions
                .iter()
                .map(|instr| instr.sign_with(&ctx_hash, signers))
                .collect(),
        }
    }
}

impl From<Instruction> for ClientTransaction {
    /// Single-instruction batches are the common case; let them read as one.
    fn from(instruction: Instruction) -> Self {
        Self::new(vec![instruction])
    }
}

// ---------------------------------------------------------------------------
// SignedTransaction
// ---------------------------------------------------------------------------

/// A client transaction whose every instruction carries signatures.
///
/// This is the submission artifact: the only thing the ledger service
/// accepts. Producing one requires going through
/// [`ClientTransaction::sign_with`], which is the point — an unsigned
/// batch cannot be submitted by accident.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedTransaction {
    /// The signed instructions, still in execution order.
    pub instructions: Vec<SignedInstruction>,
}

impl SignedTransaction {
    /// The aggregate digest, recomputed from the underlying instructions.
    ///
    /// Signatures are not an input to any hash, so this equals the
    /// pre-signing [`ClientTransaction::hash`].
    pub fn hash(&self) -> [u8; 32] {
        let mut h = Sha256::new();
        for instruction in &self.instructions {
            h.update(instruction.hash());
        }
        h.finalize().into()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::hash::sha256_multi;
    use crate::identity::Ed25519Signer;
    use crate::transaction::instance::InstanceId;
    use crate::transaction::types::Argument;

    fn instr_a() -> Instruction {
        Instruction::spawn(InstanceId::zero(), "darc", vec![Argument::new("rules", vec![1])])
            .with_signer_counters(vec![1])
    }

    fn instr_b() -> Instruction {
        Instruction::invoke(InstanceId::from_bytes([2u8; 32]), "coin", vec![])
            .with_signer_counters(vec![2])
    }

    #[test]
    fn hash_is_fold_of_instruction_hashes() {
        let tx = ClientTransaction::new(vec![instr_a(), instr_b()]);
        let expected = sha256_multi(&[&instr_a().hash(), &instr_b().hash()]);
        assert_eq!(tx.hash(), expected);
    }

    #[test]
    fn empty_transaction_hashes_the_empty_stream() {
        // Degenerate but well-defined; verification is what rejects it.
        let tx = ClientTransaction::new(vec![]);
        assert_eq!(tx.hash(), sha256_multi(&[]));
    }

    #[test]
    fn reordering_changes_the_hash() {
        let ab = ClientTransaction::new(vec![instr_a(), instr_b()]);
        let ba = ClientTransaction::new(vec![instr_b(), instr_a()]);
        assert_ne!(ab.hash(), ba.hash());
    }

    #[test]
    fn sign_with_signs_every_instruction_over_the_shared_digest() {
        let s1 = Ed25519Signer::from_seed(&[1u8; 32]);
        let s2 = Ed25519Signer::from_seed(&[2u8; 32]);
        let tx = ClientTransaction::new(vec![instr_a(), instr_b()]);
        let ctx = tx.hash();

        let signed = tx.sign_with(&[&s1, &s2]);
        assert_eq!(signed.instructions.len(), 2);
        for si in &signed.instructions {
            assert_eq!(si.signatures.len(), 2);
            for sig in &si.signatures {
                assert!(sig.verify(&ctx), "signature must cover the batch hash");
            }
        }
    }

    #[test]
    fn signing_is_deterministic() {
        // Ed25519 is deterministic, the digest is deterministic, so the
        // whole signing pipeline is: same batch + same signers = same bytes.
        let signer = Ed25519Signer::from_seed(&[9u8; 32]);
        let tx = ClientTransaction::new(vec![instr_a()]);
        let once = tx.sign_with(&[&signer]);
        let twice = tx.sign_with(&[&signer]);
        assert_eq!(once, twice);
    }

    #[test]
    fn signing_does_not_change_the_hash() {
        let signer = Ed25519Signer::from_seed(&[9u8; 32]);
        let tx = ClientTransaction::new(vec![instr_a(), instr_b()]);
        let signed = tx.sign_with(&[&signer]);
        assert_eq!(tx.hash(), signed.hash());
    }

    #[test]
    fn from_single_instruction() {
        let tx: ClientTransaction = instr_a().into();
        assert_eq!(tx.instructions.len(), 1);
    }

    #[test]
    fn signed_transaction_serde_roundtrip() {
        let signer = Ed25519Signer::from_seed(&[8u8; 32]);
        let signed = ClientTransaction::new(vec![instr_a()]).sign_with(&[&signer]);
        let json = serde_json::to_string(&signed).unwrap();
        let recovered: SignedTransaction = serde_json::from_str(&json).unwrap();
        assert_eq!(signed, recovered);
    }
}
