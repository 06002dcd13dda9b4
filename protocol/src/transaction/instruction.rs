//! Instructions: one atomic action against one contract instance.
//!
//! This file owns the two byte layouts the whole network agrees on — the
//! instruction digest and the derived-identifier digest. Both are written
//! out field by field below. Nothing here is negotiable: a node in another
//! language reimplements these loops byte for byte, and any change on our
//! side is a hard fork.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::identity::{Signature, Signer};
use super::instance::InstanceId;
use super::types::{Argument, Delete, Invoke, Operation, OperationKind, Spawn};

/// The contract command used by the [`Instruction::invoke`] factory.
///
/// Evolve-style updates are the dominant invoke on the ledger, so the
/// factory pins this command. Callers invoking anything else construct
/// an [`Operation::Invoke`] directly.
pub const EVOLVE_COMMAND: &str = "evolve";

// ---------------------------------------------------------------------------
// Instruction
// ---------------------------------------------------------------------------

/// One atomic action against one contract instance.
///
/// An instruction names its target instance, carries exactly one
/// [`Operation`], and lists one replay-protection counter per intended
/// signer. Counters are positional: `signer_counters[i]` belongs to the
/// signer that will produce `signatures[i]` once the instruction is
/// signed.
///
/// An `Instruction` is the *unsigned* form. Signing produces a
/// [`SignedInstruction`] and never mutates the original — see
/// [`Instruction::sign_with`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instruction {
    /// The instance this instruction acts on. For spawns this is the
    /// instance whose access rules authorize the spawn (the new
    /// instance's own ID is derived afterwards via [`SignedInstruction::derive_id`]).
    pub instance_id: InstanceId,

    /// What to do to the instance. Exactly one variant, by construction.
    pub operation: Operation,

    /// One replay counter per signer, in signer order. The ledger tracks
    /// a monotonic counter per identity and rejects instructions whose
    /// counters it has already consumed.
    pub signer_counters: Vec<u64>,
}

impl Instruction {
    /// Creates an instruction that spawns a new instance of `contract_id`.
    ///
    /// `signer_counters` starts empty; attach counters with
    /// [`with_signer_counters`](Self::with_signer_counters) before signing.
    pub fn spawn(
        instance_id: InstanceId,
        contract_id: impl Into<String>,
        args: Vec<Argument>,
    ) -> Self {
        Self {
            instance_id,
            operation: Operation::Spawn(Spawn {
                contract_id: contract_id.into(),
                args,
            }),
            signer_counters: Vec::new(),
        }
    }

    /// Creates an instruction that invokes the [`EVOLVE_COMMAND`] on an
    /// existing instance.
    ///
    /// The command is pinned: evolve is what nearly every invoke on the
    /// ledger does. For any other command, build the [`Operation::Invoke`]
    /// yourself — the hash does not care either way, since the command is
    /// not part of it.
    pub fn invoke(
        instance_id: InstanceId,
        contract_id: impl Into<String>,
        args: Vec<Argument>,
    ) -> Self {
        Self {
            instance_id,
            operation: Operation::Invoke(Invoke {
                contract_id: contract_id.into(),
                command: EVOLVE_COMMAND.to_string(),
                args,
            }),
            signer_counters: Vec::new(),
        }
    }

    /// Creates an instruction that deletes an existing instance.
    pub fn delete(instance_id: InstanceId, contract_id: impl Into<String>) -> Self {
        Self {
            instance_id,
            operation: Operation::Delete(Delete {
                contract_id: contract_id.into(),
            }),
            signer_counters: Vec::new(),
        }
    }

    /// Attaches replay counters, one per intended signer, in signer order.
    pub fn with_signer_counters(mut self, counters: Vec<u64>) -> Self {
        self.signer_counters = counters;
        self
    }

    /// The wire tag of this instruction's operation.
    pub fn kind(&self) -> OperationKind {
        self.operation.kind()
    }

    /// Computes the canonical instruction digest.
    ///
    /// This is the network-visible identity of the instruction. The byte
    /// stream, in order:
    ///
    /// 1. the 32 raw bytes of `instance_id`
    /// 2. one tag byte (spawn = 0, invoke = 1, delete = 2)
    /// 3. the UTF-8 bytes of the operation's contract ID
    /// 4. for each argument in order: its name bytes, then its value bytes
    /// 5. each signer counter as 8 little-endian bytes, in order
    ///
    /// Arguments are fed raw, with no length prefixes or delimiters —
    /// ordering and byte content alone disambiguate. An invoke's `command`
    /// is never fed into the stream. Both are frozen wire format shared
    /// with every deployed node.
    ///
    /// Signatures are not an input: the digest is a pure function of the
    /// fields above, so signing (and re-signing) never changes it.
    pub fn hash(&self) -> [u8; 32] {
        let mut h = Sha256::new();
        h.update(self.instance_id.as_bytes());
        h.update([self.kind().tag()]);
        h.update(self.operation.contract_id().as_bytes());
        for arg in self.operation.args() {
            h.update(arg.name.as_bytes());
            h.update(&arg.value);
        }
        for counter in &self.signer_counters {
            h.update(counter.to_le_bytes());
        }
        h.finalize().into()
    }

    /// Signs this instruction over a transaction-level digest.
    ///
    /// Every signer signs the *same* `ctx_hash` — the aggregate hash of
    /// the whole batch, computed once by
    /// [`super::client::ClientTransaction::sign_with`] — so each signature
    /// endorses the entire batch's composition, not just this
    /// instruction. Signatures land in signer order, matching the
    /// positional `signer_counters`.
    ///
    /// The result is a complete, fresh signature set. Signing the same
    /// instruction again yields a new `SignedInstruction`; there is no
    /// appending to a previous one.
    pub fn sign_with(&self, ctx_hash: &[u8; 32], signers: &[&dyn Signer]) -> SignedInstruction {
        let signatures = signers.iter().map(|s| s.sign(ctx_hash)).collect();
        SignedInstruction {
            instruction: self.clone(),
            signatures,
        }
    }

    /// Derives a fresh identifier from this (unsigned) instruction.
    ///
    /// Equivalent to [`SignedInstruction::derive_id`] with an empty
    /// signature set. With `what = ""` this is the canonical "primary"
    /// derived ID, distinct from the instruction hash itself.
    pub fn derive_id(&self, what: &str) -> InstanceId {
        derive_id(&self.hash(), &[], what)
    }
}

// ---------------------------------------------------------------------------
// SignedInstruction
// ---------------------------------------------------------------------------

/// An instruction together with its accumulated signatures.
///
/// Produced by [`Instruction::sign_with`]; the underlying instruction is
/// carried unchanged. `signatures[i]` was produced by the signer whose
/// replay counter sits at `signer_counters[i]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedInstruction {
    /// The instruction that was signed.
    pub instruction: Instruction,

    /// One signature per signer, in signer order, all over the same
    /// transaction-level digest.
    pub signatures: Vec<Signature>,
}

impl SignedInstruction {
    /// The canonical digest of the underlying instruction. Signatures are
    /// not an input, so this equals the pre-signing hash.
    pub fn hash(&self) -> [u8; 32] {
        self.instruction.hash()
    }

    /// Derives an identifier for an artifact this instruction creates —
    /// most importantly, a spawned instance's own ID.
    ///
    /// The digest is seeded with the instruction hash, then bound to the
    /// signature set (count, then each signature's length-prefixed raw
    /// bytes) and finally to the caller's discriminator string `what`.
    /// Binding the signatures in means two different signing sessions of
    /// the same instruction occupy disjoint derived-ID spaces; the empty
    /// discriminator is the conventional "primary" artifact, and any
    /// auxiliary artifact picks its own tag.
    pub fn derive_id(&self, what: &str) -> InstanceId {
        derive_id(&self.instruction.hash(), &self.signatures, what)
    }
}

/// Shared derived-identifier digest.
///
/// Byte stream: instruction hash, signature count as 4 little-endian
/// bytes, then for each signature its raw byte length as 4 little-endian
/// bytes followed by the raw bytes, then the UTF-8 bytes of `what`.
/// Frozen wire format, like everything else in this file.
fn derive_id(instruction_hash: &[u8; 32], signatures: &[Signature], what: &str) -> InstanceId {
    let mut h = Sha256::new();
    h.update(instruction_hash);
    h.update((signatures.len() as u32).to_le_bytes());
    for sig in signatures {
        h.update((sig.signature.len() as u32).to_le_bytes());
        h.update(&sig.signature);
    }
    h.update(what.as_bytes());
    InstanceId::from_bytes(h.finalize().into())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
