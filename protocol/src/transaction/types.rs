//! Core type definitions for Aurum instructions.
//!
//! These types form the vocabulary of every instruction on the ledger:
//! the named arguments handed to a contract, the three operation payloads,
//! and the closed [`Operation`] sum over them. They carry no hashing logic
//! themselves — the canonical byte layout lives in
//! [`super::instruction::Instruction::hash`].

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Argument
// ---------------------------------------------------------------------------

/// A named byte-string argument attached to a spawn or invoke operation.
///
/// Arguments are immutable once constructed. Names need not be unique
/// within an instruction, and argument *order* is significant: it is part
/// of the instruction's canonical hash, so two logically-equal argument
/// sets in different orders are different instructions as far as the
/// network is concerned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Argument {
    /// Argument name, as understood by the target contract.
    pub name: String,
    /// Raw argument value. Interpretation is entirely up to the contract.
    pub value: Vec<u8>,
}

impl Argument {
    /// Creates a new argument.
    pub fn new(name: impl Into<String>, value: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

// ---------------------------------------------------------------------------
// Operation payloads
// ---------------------------------------------------------------------------

/// Payload for creating a new contract instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spawn {
    /// The contract to instantiate.
    pub contract_id: String,
    /// Constructor arguments handed to the contract.
    pub args: Vec<Argument>,
}

/// Payload for mutating an existing contract instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoke {
    /// The contract governing the target instance.
    pub contract_id: String,
    /// The contract method to invoke. Note that the command is *not* part
    /// of the instruction hash — see [`super::instruction::Instruction::hash`].
    pub command: String,
    /// Method arguments handed to the contract.
    pub args: Vec<Argument>,
}

/// Payload for removing a contract instance from the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delete {
    /// The contract governing the target instance.
    pub contract_id: String,
}

// ---------------------------------------------------------------------------
// Operation
// ---------------------------------------------------------------------------

/// What an instruction does to its target instance.
///
/// Exactly one variant per instruction, enforced by the type system: an
/// instruction with zero or several operations is unrepresentable, so
/// there is no "untyped instruction" failure mode to check for at hash
/// time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operation {
    /// Create a new contract instance.
    Spawn(Spawn),
    /// Mutate an existing instance.
    Invoke(Invoke),
    /// Remove an instance.
    Delete(Delete),
}

impl Operation {
    /// The wire tag for this operation variant.
    pub fn kind(&self) -> OperationKind {
        match self {
            Operation::Spawn(_) => OperationKind::Spawn,
            Operation::Invoke(_) => OperationKind::Invoke,
            Operation::Delete(_) => OperationKind::Delete,
        }
    }

    /// The contract identifier carried by the payload.
    pub fn contract_id(&self) -> &str {
        match self {
            Operation::Spawn(s) => &s.contract_id,
            Operation::Invoke(i) => &i.contract_id,
            Operation::Delete(d) => &d.contract_id,
        }
    }

    /// The arguments carried by the payload. Delete carries none.
    pub fn args(&self) -> &[Argument] {
        match self {
            Operation::Spawn(s) => &s.args,
            Operation::Invoke(i) => &i.args,
            Operation::Delete(_) => &[],
        }
    }
}

// ---------------------------------------------------------------------------
// OperationKind
// ---------------------------------------------------------------------------

/// Discriminant for the three operation variants.
///
/// The numeric values are the single tag byte fed into the instruction
/// hash and are therefore part of the wire contract: Spawn = 0,
/// Invoke = 1, Delete = 2. Do not renumber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum OperationKind {
    /// Creates a new contract instance.
    Spawn = 0,
    /// Mutates an existing instance.
    Invoke = 1,
    /// Removes an instance.
    Delete = 2,
}

impl OperationKind {
    /// The tag byte fed into the instruction hash.
    pub fn tag(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Spawn => write!(f, "spawn"),
            Self::Invoke => write!(f, "invoke"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operation_kind_tags_are_wire_stable() {
        // These three values are network-visible. If this test fails,
        // every deployed node disagrees with you.
        assert_eq!(OperationKind::Spawn.tag(), 0);
        assert_eq!(OperationKind::Invoke.tag(), 1);
        assert_eq!(OperationKind::Delete.tag(), 2);
    }

    #[test]
    fn operation_kind_display() {
        assert_eq!(OperationKind::Spawn.to_string(), "spawn");
        assert_eq!(OperationKind::Invoke.to_string(), "invoke");
        assert_eq!(OperationKind::Delete.to_string(), "delete");
    }

    #[test]
    fn operation_accessors() {
        let op = Operation::Invoke(Invoke {
            contract_id: "config".to_string(),
            command: "evolve".to_string(),
            args: vec![Argument::new("data", vec![1, 2, 3])],
        });
        assert_eq!(op.kind(), OperationKind::Invoke);
        assert_eq!(op.contract_id(), "config");
        assert_eq!(op.args().len(), 1);
    }

    #[test]
    fn delete_has_no_args() {
        let op = Operation::Delete(Delete {
            contract_id: "value".to_string(),
        });
        assert!(op.args().is_empty());
    }

    #[test]
    fn argument_order_is_observable() {
        // Equality is order-sensitive; the hash layer relies on that.
        let a = vec![Argument::new("a", vec![1]), Argument::new("b", vec![2])];
        let b = vec![Argument::new("b", vec![2]), Argument::new("a", vec![1])];
        assert_ne!(a, b);
    }

    #[test]
    fn operation_serde_roundtrip() {
        let ops = vec![
            Operation::Spawn(Spawn {
                contract_id: "darc".to_string(),
                args: vec![Argument::new("rules", b"admin".to_vec())],
            }),
            Operation::Invoke(Invoke {
                contract_id: "darc".to_string(),
                command: "evolve".to_string(),
                args: vec![],
            }),
            Operation::Delete(Delete {
                contract_id: "value".to_string(),
            }),
        ];
        for op in ops {
            let json = serde_json::to_string(&op).unwrap();
            let recovered: Operation = serde_json::from_str(&json).unwrap();
            assert_eq!(op, recovered);
        }
    }
}
